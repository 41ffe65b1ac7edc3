#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use invite_core::logging::LoggingBuilder;
use invite_core::InviteConfig;

/// Global invitation configuration, set from the command line
static CONFIG: OnceLock<InviteConfig> = OnceLock::new();

/// Get the invitation configuration (loaded at startup or default)
pub fn get_config() -> InviteConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Wedding invitation - desktop
#[derive(Parser, Debug)]
#[command(name = "wedding-invite-desktop")]
#[command(about = "Wedding invitation with envelope reveal, music and RSVP")]
struct Args {
    /// JSON configuration file (default: built-in invitation)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RSVP backend URL, without the /api prefix
    #[arg(long, env = "INVITE_BACKEND_URL")]
    backend_url: Option<String>,

    /// Background music URL
    #[arg(long, env = "INVITE_MUSIC_URL")]
    music_url: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = InviteConfig::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(args.backend_url, args.music_url);
    config.validate().context("Invalid configuration")?;

    LoggingBuilder::new(config.log_level.clone())
        .with_filter("dioxus=warn")
        .init()?;

    let title = format!(
        "{} - {}",
        config.wedding.couple.display_names(),
        config.wedding.formatted_date()
    );

    tracing::info!(
        backend = %config.backend_url,
        music = %config.audio.url,
        "Starting invitation"
    );

    let _ = CONFIG.set(config);

    // Phone-like portrait window
    let window_width = 480.0;
    let window_height = 900.0;

    let desktop_config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .launch(app::App);

    Ok(())
}
