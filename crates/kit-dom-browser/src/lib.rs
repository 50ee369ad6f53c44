//! Browser DOM layer for kit widgets.
//!
//! This crate implements the `kit-dom-core` platform traits on top of the
//! live document. It assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `caret`: element lookup, rich editor probe, native selection API
//! - `resize`: interaction library bindings and inline style writes
//!
//! # Re-exports
//!
//! This crate re-exports `kit-dom-core` for convenience, so consumers
//! only need to depend on `kit-dom-browser`.

// Re-export core crate
pub use kit_dom_core;
pub use kit_dom_core::*;

pub mod caret;
pub mod resize;

pub use caret::{BrowserCaret, EditorView, MarkdownEditor, set_caret_position, set_caret_position_str};
pub use resize::{ElementStyle, ResizeListener, install_resizer};
