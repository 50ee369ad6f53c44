//! kit-dom-core: widget DOM behaviour without framework dependencies.
//!
//! This crate provides:
//! - `CaretPlatform` trait and `position_caret` for collapsing the caret
//!   inside either a rich markdown editor or a plain text control
//! - `SidebarResizer` and the `ResizeHandle` configuration model for
//!   drag-resizable panels
//! - `StyleTarget` trait for inline style writes
//!
//! The browser implementations of the platform traits live in
//! `kit-dom-browser`.

pub mod caret;
pub mod error;
pub mod offset;
pub mod platform;
pub mod resize;
pub mod types;

pub use caret::{CaretOutcome, CaretTarget, position_caret, position_caret_str};
pub use error::DomError;
pub use offset::parse_caret_offset;
pub use platform::{CaretPlatform, PlatformError, StyleTarget};
pub use resize::{ResizeEdges, ResizeHandle, ResizeMove, ResizeStyle, SidebarResizer};
pub use smol_str::SmolStr;
pub use types::{ResizeRect, Selection, Translation};
