//! Console logging setup.

use tracing::Level;
use tracing::subscriber::set_global_default;
use tracing_subscriber::Registry;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;

/// Route `tracing` output to the browser console.
///
/// Debug builds log everything from the kit crates; release builds keep to
/// INFO and above. Calling this twice leaves the first subscriber in place.
pub(crate) fn init_tracing() {
    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    let filter = EnvFilter::new(if cfg!(debug_assertions) {
        "info,kit=debug"
    } else {
        "info"
    });

    let reg = Registry::default().with(filter).with(wasm_layer);

    let _ = set_global_default(reg);
}
