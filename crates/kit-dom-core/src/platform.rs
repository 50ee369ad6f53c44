//! Platform abstraction traits for widget operations.
//!
//! These traits define the interface between the caret/resize logic and the
//! platform that owns the elements (browser DOM, or a recording fake in tests).

use crate::caret::CaretTarget;
use crate::types::Selection;

/// Error type for platform operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformError(pub String);

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for PlatformError {}

impl From<&str> for PlatformError {
    fn from(s: &str) -> Self {
        PlatformError(s.to_string())
    }
}

impl From<String> for PlatformError {
    fn from(s: String) -> Self {
        PlatformError(s)
    }
}

/// Platform-specific caret operations.
///
/// `probe` is the only place that decides whether an element is driven by an
/// attached rich editor or by its native selection API. Everything after the
/// probe matches on the returned `CaretTarget`.
pub trait CaretPlatform {
    /// Handle to an element in the document.
    type Element;
    /// Handle to a rich editor attached to an element.
    type Editor;

    /// Resolve an element by id. `None` when nothing matches.
    fn lookup(&self, element_id: &str) -> Option<Self::Element>;

    /// Check whether the element carries a rich editor.
    fn probe(&self, element: Self::Element) -> CaretTarget<Self::Element, Self::Editor>;

    /// Current editor contents, if the editor exposes them.
    fn editor_value(&self, editor: &Self::Editor) -> Option<String>;

    /// Hand a selection to the editor's own dispatch mechanism.
    fn dispatch_selection(
        &self,
        editor: &Self::Editor,
        selection: Selection,
    ) -> Result<(), PlatformError>;

    /// Give the element input focus.
    fn focus(&self, element: &Self::Element) -> Result<(), PlatformError>;

    /// Set the element's native selection range.
    fn set_selection_range(
        &self,
        element: &Self::Element,
        start: usize,
        end: usize,
    ) -> Result<(), PlatformError>;
}

/// Something that accepts inline style writes.
pub trait StyleTarget {
    /// Set a single CSS property, e.g. `("width", "320px")`.
    fn set_style(&self, property: &str, value: &str) -> Result<(), PlatformError>;
}
