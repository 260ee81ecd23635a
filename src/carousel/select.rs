//! Network interface selection helpers.

use std::collections::HashSet;
use std::hash::Hash;

/// Elements present in both `a` and `b`.
///
/// Built through a `HashSet`, so the order of the result is unspecified and
/// may differ between runs. Only membership is meaningful.
pub fn intersect<T, A, B>(a: A, b: B) -> Vec<T>
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let left: HashSet<T> = a.into_iter().collect();
    let right: HashSet<T> = b.into_iter().collect();
    left.into_iter().filter(|item| right.contains(item)).collect()
}

/// First element of `iterable` in its iteration order, or `default` when
/// there is no iterable or it is empty.
pub fn first<I>(iterable: Option<I>, default: I::Item) -> I::Item
where
    I: IntoIterator,
{
    iterable
        .and_then(|items| items.into_iter().next())
        .unwrap_or(default)
}

/// Pick the network interface to display.
///
/// Equivalent to `first(intersect(available, candidates), fallback)`.
/// Because [`intersect`] loses order, when several candidates are present
/// any one of them may be chosen.
pub fn select_interface<S>(available: &[String], candidates: &[S], fallback: &str) -> String
where
    S: AsRef<str>,
{
    let present = intersect(
        available.iter().map(String::as_str),
        candidates.iter().map(AsRef::as_ref),
    );
    first(Some(present), fallback).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersect_keeps_common_members() {
        let mut common = intersect(vec!["a", "b", "c"], vec!["b", "c", "d"]);
        common.sort_unstable();
        assert_eq!(common, vec!["b", "c"]);
    }

    #[test]
    fn intersect_disjoint_is_empty() {
        assert!(intersect(vec![1, 2], vec![3, 4]).is_empty());
    }

    #[test]
    fn intersect_collapses_duplicates() {
        assert_eq!(intersect(vec![1, 1, 2], vec![1, 1]), vec![1]);
    }

    #[test]
    fn first_of_empty_is_default() {
        assert_eq!(first(Some(Vec::<&str>::new()), "x"), "x");
    }

    #[test]
    fn first_takes_iteration_order() {
        assert_eq!(first(Some(vec![1, 2, 3]), 0), 1);
    }

    #[test]
    fn first_of_none_is_default() {
        assert_eq!(first(None::<Vec<&str>>, "d"), "d");
    }

    #[test]
    fn select_prefers_present_candidate() {
        let available = vec!["lo".to_string(), "en0".to_string()];
        assert_eq!(select_interface(&available, &["eth0", "en0"], "eth0"), "en0");
    }

    #[test]
    fn select_falls_back_when_none_present() {
        let available = vec!["lo".to_string(), "wlan0".to_string()];
        assert_eq!(
            select_interface(&available, &["eth0", "en0"], "eth0"),
            "eth0"
        );
    }

    #[test]
    fn select_with_both_candidates_returns_one_of_them() {
        let available = vec!["en0".to_string(), "eth0".to_string()];
        let chosen = select_interface(&available, &["eth0", "en0"], "eth0");
        assert!(chosen == "eth0" || chosen == "en0");
    }
}
