//! Browser console logging via tracing.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

/// Install the console subscriber. Safe to call on every entry; a page
/// that receives the content script twice keeps the first subscriber.
pub fn init() {
    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    let config = WASMLayerConfigBuilder::new().set_max_level(level).build();
    if tracing_subscriber::registry()
        .with(WASMLayer::new(config))
        .try_init()
        .is_err()
    {
        tracing::debug!("Logging already initialized");
    }
}
