//! Startup configuration for the desktop host.
//!
//! Resolved once from the command line in `main` and read by the app
//! through [`config`].

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use anyhow::{Context, Result};
use gallery_core::{Base, Locale, MemoryHost};

/// Demo base shipped with the binary
const DEMO_BASE: &str = include_str!("../assets/demo-base.json");

static CONFIG: OnceLock<AppConfig> = OnceLock::new();
static HOST: OnceLock<Arc<MemoryHost>> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base fixture; `None` means the embedded demo base
    pub base_path: Option<PathBuf>,
    /// Table opened first (by name)
    pub table: Option<String>,
    pub locale: Locale,
    /// Overrides the base's media URL
    pub media_url: Option<String>,
    pub card_width: u32,
    pub lookup_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_path: None,
            table: None,
            locale: Locale::default(),
            media_url: None,
            card_width: gallery_ui::DEFAULT_CARD_WIDTH,
            lookup_delay: Duration::ZERO,
        }
    }
}

impl AppConfig {
    /// Load the base and wrap it in an in-memory host
    pub fn build_host(&self) -> Result<MemoryHost> {
        let mut base = match &self.base_path {
            Some(path) => Base::load(path)
                .with_context(|| format!("failed to load base from {}", path.display()))?,
            None => Base::from_json(DEMO_BASE).context("embedded demo base is invalid")?,
        };
        if let Some(media_url) = &self.media_url {
            base.media_url = media_url.clone();
        }
        Ok(MemoryHost::new(base).with_lookup_delay(self.lookup_delay))
    }
}

/// `<data_dir>/gallery-view/base.json` when it exists
pub fn default_base_path() -> Option<PathBuf> {
    let path = dirs::data_dir()?.join("gallery-view").join("base.json");
    path.is_file().then_some(path)
}

/// Store the configuration; later calls are ignored
pub fn init(config: AppConfig) {
    let _ = CONFIG.set(config);
}

pub fn config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Store the host built at startup; later calls are ignored
pub fn init_host(host: Arc<MemoryHost>) {
    let _ = HOST.set(host);
}

/// Host built at startup, or an empty one when none was stored
pub fn host() -> Arc<MemoryHost> {
    match HOST.get() {
        Some(host) => Arc::clone(host),
        None => {
            tracing::warn!("No host initialized, serving an empty base");
            MemoryHost::new(Base::default()).into_shared()
        }
    }
}
