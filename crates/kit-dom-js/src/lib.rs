//! WASM bindings for kit widget helpers.
//!
//! Exposes caret positioning and panel resizing to the page as typed
//! functions, instead of script text with substituted placeholders.

mod caret;
mod logging;
mod resize;
mod types;

pub use caret::*;
pub use resize::*;
pub use types::*;

use wasm_bindgen::prelude::*;

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logging::init_tracing();
}
