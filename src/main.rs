#![allow(non_snake_case)]

mod app;
mod config;
mod pages;
mod theme;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use gallery_core::Locale;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Gallery View - table rows as cards
#[derive(Parser, Debug)]
#[command(name = "gallery-view-desktop")]
#[command(about = "Browse the rows of a base as a gallery of cards")]
struct Args {
    /// Base fixture (JSON). Defaults to <data_dir>/gallery-view/base.json,
    /// then to the built-in demo base
    #[arg(short, long)]
    base: Option<PathBuf>,

    /// Table to open first (by name)
    #[arg(short, long)]
    table: Option<String>,

    /// UI language (en, zh-cn)
    #[arg(short, long, default_value = "en")]
    locale: Locale,

    /// Override the media URL used for default avatars
    #[arg(long)]
    media_url: Option<String>,

    /// Card width in pixels
    #[arg(long, default_value_t = gallery_ui::DEFAULT_CARD_WIDTH)]
    card_width: u32,

    /// Simulated latency of user-info lookups
    #[arg(long, default_value_t = 0)]
    lookup_delay_ms: u64,
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        AppConfig {
            base_path: args.base.or_else(config::default_base_path),
            table: args.table,
            locale: args.locale,
            media_url: args.media_url,
            card_width: args.card_width,
            lookup_delay: Duration::from_millis(args.lookup_delay_ms),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app_config = AppConfig::from(Args::parse());
    let host = app_config.build_host()?;

    tracing::info!(
        base = ?app_config.base_path,
        tables = host.tables().len(),
        locale = %app_config.locale,
        "Starting gallery view"
    );

    config::init_host(host.into_shared());
    config::init(app_config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Gallery View")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 820.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
