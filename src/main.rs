mod config;
mod core;
mod page;
mod provider;
mod ui;

use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::provider::indexer::IndexerClient;
use crate::provider::{ProviderCommand, ProviderOutput};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("farmstats=info".parse().unwrap()),
        )
        .init();

    tracing::info!("🌾 farmstats starting...");

    // Load configuration
    let config_path = std::env::var("FARMSTATS_CONFIG").unwrap_or_else(|_| "config.toml".into());
    let config = Config::load(&config_path);

    let client = IndexerClient::new(&config.indexer).expect("Failed to build indexer client");
    tracing::info!("Indexer client configured for {}", config.indexer.base_url);

    // UI → Provider channel
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<ProviderCommand>();

    // Provider → UI channel
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<ProviderOutput>();

    // Store channel ends and config in globals so the Dioxus app can grab them
    UI_RX.set(std::sync::Mutex::new(Some(ui_rx))).ok();
    UI_CMD.set(std::sync::Mutex::new(Some(cmd_tx))).ok();
    UI_CONFIG.set(config.clone()).ok();

    // Start provider in a tokio runtime on a separate thread
    let poll_interval = config.indexer.poll_interval();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
        rt.block_on(provider::run_provider(client, cmd_rx, ui_tx, poll_interval));
    });
    tracing::info!("Provider thread started");

    // Launch Dioxus desktop app (blocks)
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::tao::window::WindowBuilder::new()
                    .with_title("🌾 farmstats")
                    .with_inner_size(dioxus::desktop::tao::dpi::LogicalSize::new(
                        config.ui.window_width,
                        config.ui.window_height,
                    )),
            ),
        )
        .launch(ui::App);
}

/// One-shot global to pass the provider output receiver into the Dioxus app.
static UI_RX: std::sync::OnceLock<std::sync::Mutex<Option<mpsc::UnboundedReceiver<ProviderOutput>>>> =
    std::sync::OnceLock::new();

/// One-shot global to pass the provider command sender into the Dioxus app.
static UI_CMD: std::sync::OnceLock<std::sync::Mutex<Option<mpsc::UnboundedSender<ProviderCommand>>>> =
    std::sync::OnceLock::new();

/// Global config for UI access.
static UI_CONFIG: std::sync::OnceLock<Config> = std::sync::OnceLock::new();

/// Take the UI receiver (can only be called once).
pub fn take_ui_rx() -> Option<mpsc::UnboundedReceiver<ProviderOutput>> {
    UI_RX.get()?.lock().ok()?.take()
}

/// Take the command sender for the UI (can only be called once).
pub fn take_ui_cmd() -> Option<mpsc::UnboundedSender<ProviderCommand>> {
    UI_CMD.get()?.lock().ok()?.take()
}

/// Get the global config.
pub fn get_config() -> &'static Config {
    UI_CONFIG.get().expect("Config not initialized")
}
