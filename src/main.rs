//! Hotspot carousel - Entry Point

use clap::Parser;
use hotspot_carousel::config::{self, CliOverrides, ConfigError};
use hotspot_carousel::model::{AppError, Rotation};
use std::path::PathBuf;
use tracing::info;

/// Hotspot carousel - scrolling system status widgets in the terminal
#[derive(Parser, Debug)]
#[command(name = "carousel")]
#[command(version)]
#[command(about = "Scrolls system status widgets across a small terminal panel")]
pub struct Args {
    /// Native panel width in cells
    #[arg(long, value_parser = clap::value_parser!(u16).range(2..))]
    pub width: Option<u16>,

    /// Native panel height in cells
    #[arg(long, value_parser = clap::value_parser!(u16).range(2..))]
    pub height: Option<u16>,

    /// Panel rotation in quarter turns
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub rotate: Option<u8>,

    /// Delay between frames in milliseconds
    #[arg(long)]
    pub frame_delay_ms: Option<u64>,

    /// Stop after this many frames
    #[arg(long)]
    pub frames: Option<u64>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> Result<CliOverrides, ConfigError> {
        Ok(CliOverrides {
            width: self.width,
            height: self.height,
            rotation: self.rotate.map(Rotation::try_from).transpose()?,
            frame_delay_ms: self.frame_delay_ms,
        })
    }
}

/// Resolve configuration, start logging and run the carousel.
fn start(args: &Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged);
        let with_cli = config::apply_cli_overrides(with_env, args.overrides()?);
        config::validate(with_cli)?
    };

    hotspot_carousel::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    hotspot_carousel::app::run(&config, args.frames)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    start(&args)?;
    Ok(())
}
