//! Caret positioning for text widgets.
//!
//! A widget is either a plain text control (`<input>`, `<textarea>`) or an
//! element with a rich markdown editor attached to it. The platform's
//! capability probe decides which; the two paths never mix:
//!
//! - rich editor: the collapsed selection goes through the editor's own
//!   dispatch, the native selection API is never touched
//! - plain input: the element is focused, then its native selection range is
//!   collapsed at the offset
//!
//! Every failure is a logged no-op. Nothing here panics or returns an error
//! to the page.

use crate::error::DomError;
use crate::offset::parse_caret_offset;
use crate::platform::{CaretPlatform, PlatformError};
use crate::types::Selection;

/// Result of the capability probe on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaretTarget<E, R> {
    /// The element has a rich editor attached.
    RichEditor { element: E, editor: R },
    /// The element is driven by its native selection API.
    PlainInput(E),
}

impl<E, R> CaretTarget<E, R> {
    /// The probed element, whichever path it takes.
    pub fn element(&self) -> &E {
        match self {
            CaretTarget::RichEditor { element, .. } => element,
            CaretTarget::PlainInput(element) => element,
        }
    }

    pub fn is_rich_editor(&self) -> bool {
        matches!(self, CaretTarget::RichEditor { .. })
    }
}

/// What a caret request ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaretOutcome {
    /// Selection dispatched through the rich editor.
    Editor(Selection),
    /// Element focused and native selection range set.
    Input(Selection),
    /// Nothing was applied.
    Skipped(DomError),
}

impl CaretOutcome {
    /// Whether a selection reached the element.
    pub fn is_applied(&self) -> bool {
        !matches!(self, CaretOutcome::Skipped(_))
    }

    /// The selection that was applied, if any.
    pub fn selection(&self) -> Option<Selection> {
        match self {
            CaretOutcome::Editor(sel) | CaretOutcome::Input(sel) => Some(*sel),
            CaretOutcome::Skipped(_) => None,
        }
    }
}

/// Collapse the caret at `offset` inside the element with id `element_id`.
///
/// The offset is not checked against the element's text length; the platform
/// decides what an out-of-range offset means.
pub fn position_caret<P: CaretPlatform>(
    platform: &P,
    element_id: &str,
    offset: usize,
) -> CaretOutcome {
    let Some(element) = platform.lookup(element_id) else {
        tracing::trace!(target: "kit::caret", element_id, "no element, skipping caret position");
        return CaretOutcome::Skipped(DomError::ElementNotFound(element_id.to_string()));
    };

    let selection = Selection::collapsed(offset);

    let result: Result<CaretOutcome, PlatformError> = match platform.probe(element) {
        CaretTarget::RichEditor { editor, .. } => {
            if let Some(value) = platform.editor_value(&editor) {
                tracing::debug!(
                    target: "kit::caret",
                    element_id,
                    content_chars = value.chars().count(),
                    "positioning caret in rich editor"
                );
            }
            platform
                .dispatch_selection(&editor, selection)
                .map(|()| CaretOutcome::Editor(selection))
        }
        CaretTarget::PlainInput(element) => platform
            .focus(&element)
            .and_then(|()| platform.set_selection_range(&element, offset, offset))
            .map(|()| CaretOutcome::Input(selection)),
    };

    match result {
        Ok(outcome) => {
            tracing::trace!(target: "kit::caret", element_id, offset, ?outcome, "caret positioned");
            outcome
        }
        Err(e) => {
            tracing::warn!(target: "kit::caret", element_id, offset, "caret position failed: {}", e);
            CaretOutcome::Skipped(e.into())
        }
    }
}

/// Like [`position_caret`], with the offset supplied as text.
///
/// An offset that does not parse is logged and nothing else happens: the
/// element is not even looked up.
pub fn position_caret_str<P: CaretPlatform>(
    platform: &P,
    element_id: &str,
    pos: &str,
) -> CaretOutcome {
    match parse_caret_offset(pos) {
        Ok(offset) => position_caret(platform, element_id, offset),
        Err(e) => {
            tracing::warn!(target: "kit::caret", element_id, "{}", e);
            CaretOutcome::Skipped(e)
        }
    }
}
