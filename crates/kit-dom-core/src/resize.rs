//! Drag-resize handling for panels.
//!
//! Gesture recognition belongs to the external interaction library. This
//! module only decides which edges a handle accepts and turns each drag-move
//! into inline style writes on the dragged element. Every move overwrites the
//! previous one; nothing accumulates between events.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::platform::{PlatformError, StyleTarget};
use crate::types::{ResizeRect, Translation};

/// Which edges of an element may be dragged.
///
/// Serialized in the shape the interaction library expects for its `edges`
/// option. Missing fields deserialize as `false`.
#[derive(Clone, Debug, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeEdges {
    pub left: bool,
    pub right: bool,
    pub bottom: bool,
    pub top: bool,
}

impl ResizeEdges {
    /// No edge enabled.
    pub const NONE: ResizeEdges = ResizeEdges {
        left: false,
        right: false,
        bottom: false,
        top: false,
    };

    /// Right edge only.
    pub const RIGHT: ResizeEdges = ResizeEdges {
        right: true,
        ..Self::NONE
    };

    /// Top edge only.
    pub const TOP: ResizeEdges = ResizeEdges {
        top: true,
        ..Self::NONE
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Whether every edge set in `other` is also set in `self`.
    pub fn contains(&self, other: &ResizeEdges) -> bool {
        (!other.left || self.left)
            && (!other.right || self.right)
            && (!other.bottom || self.bottom)
            && (!other.top || self.top)
    }
}

/// A resizable region: the selector the interaction library attaches to and
/// the edges it may drag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeHandle {
    pub selector: SmolStr,
    #[serde(default)]
    pub edges: ResizeEdges,
}

impl ResizeHandle {
    pub fn new(selector: impl Into<SmolStr>, edges: ResizeEdges) -> Self {
        Self {
            selector: selector.into(),
            edges,
        }
    }

    /// Sidebar handle: horizontal resize from the right edge.
    pub fn horizontal_right() -> Self {
        Self::new(".resize-horiz-right", ResizeEdges::RIGHT)
    }

    /// Bottom panel handle: vertical resize from the top edge.
    pub fn vertical_top() -> Self {
        Self::new(".resize-vert-top", ResizeEdges::TOP)
    }
}

/// One drag-move event as reported by the interaction library.
#[derive(Clone, Debug, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResizeMove {
    /// Candidate size of the element after this move.
    pub rect: ResizeRect,
    /// Edges being dragged.
    #[serde(default)]
    pub edges: ResizeEdges,
}

/// Inline style values written for one move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResizeStyle {
    pub width: String,
    pub height: String,
    pub transform: String,
}

impl ResizeStyle {
    pub fn from_rect(rect: ResizeRect, translation: Translation) -> Self {
        Self {
            width: format!("{}px", rect.width),
            height: format!("{}px", rect.height),
            transform: format!("translate({}px, {}px)", translation.x, translation.y),
        }
    }

    /// Write width, height and transform to the target, in that order.
    pub fn apply<T: StyleTarget + ?Sized>(&self, target: &T) -> Result<(), PlatformError> {
        target.set_style("width", &self.width)?;
        target.set_style("height", &self.height)?;
        target.set_style("transform", &self.transform)
    }
}

/// Move listener for one resize handle.
#[derive(Clone, Debug, PartialEq)]
pub struct SidebarResizer {
    handle: ResizeHandle,
    translation: Translation,
}

impl Default for SidebarResizer {
    fn default() -> Self {
        Self::new(ResizeHandle::horizontal_right())
    }
}

impl SidebarResizer {
    pub fn new(handle: ResizeHandle) -> Self {
        Self {
            handle,
            translation: Translation::default(),
        }
    }

    pub fn handle(&self) -> &ResizeHandle {
        &self.handle
    }

    pub fn translation(&self) -> Translation {
        self.translation
    }

    /// Apply one drag-move to `target`.
    ///
    /// Moves that drag an edge the handle has disabled are ignored. Returns
    /// the style that was written, or `None` if nothing was.
    pub fn on_move<T: StyleTarget + ?Sized>(
        &self,
        target: &T,
        event: &ResizeMove,
    ) -> Option<ResizeStyle> {
        if !self.handle.edges.contains(&event.edges) {
            tracing::trace!(
                target: "kit::resize",
                selector = %self.handle.selector,
                edges = ?event.edges,
                "ignoring move on disabled edge"
            );
            return None;
        }

        let style = ResizeStyle::from_rect(event.rect, self.translation);
        if let Err(e) = style.apply(target) {
            tracing::warn!(
                target: "kit::resize",
                selector = %self.handle.selector,
                "failed to apply resize style: {}",
                e
            );
            return None;
        }
        Some(style)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingStyle {
        writes: RefCell<Vec<(String, String)>>,
        fail_on: Option<&'static str>,
    }

    impl RecordingStyle {
        fn get(&self, property: &str) -> Option<String> {
            self.writes
                .borrow()
                .iter()
                .rev()
                .find(|(p, _)| p == property)
                .map(|(_, v)| v.clone())
        }
    }

    impl StyleTarget for RecordingStyle {
        fn set_style(&self, property: &str, value: &str) -> Result<(), PlatformError> {
            if self.fail_on == Some(property) {
                return Err(format!("cannot set {property}").into());
            }
            self.writes
                .borrow_mut()
                .push((property.to_string(), value.to_string()));
            Ok(())
        }
    }

    fn right_drag(width: f64, height: f64) -> ResizeMove {
        ResizeMove {
            rect: ResizeRect::new(width, height),
            edges: ResizeEdges::RIGHT,
        }
    }

    #[test]
    fn test_move_sets_width_and_height() {
        let target = RecordingStyle::default();
        let resizer = SidebarResizer::default();

        let style = resizer.on_move(&target, &right_drag(320.0, 150.0));

        insta::assert_debug_snapshot!(style, @r#"
        Some(
            ResizeStyle {
                width: "320px",
                height: "150px",
                transform: "translate(0px, 0px)",
            },
        )
        "#);
        assert_eq!(target.get("width").as_deref(), Some("320px"));
        assert_eq!(target.get("height").as_deref(), Some("150px"));
        assert_eq!(
            target.get("transform").as_deref(),
            Some("translate(0px, 0px)")
        );
    }

    #[test]
    fn test_fractional_sizes_keep_precision() {
        let style = ResizeStyle::from_rect(ResizeRect::new(320.5, 99.25), Translation::default());
        assert_eq!(style.width, "320.5px");
        assert_eq!(style.height, "99.25px");
    }

    #[test]
    fn test_last_move_wins() {
        let target = RecordingStyle::default();
        let resizer = SidebarResizer::default();

        for width in [200.0, 260.0, 240.0] {
            resizer.on_move(&target, &right_drag(width, 100.0));
        }

        assert_eq!(target.get("width").as_deref(), Some("240px"));
        assert_eq!(target.writes.borrow().len(), 9);
    }

    #[test]
    fn test_disabled_edges_are_ignored() {
        let target = RecordingStyle::default();
        let resizer = SidebarResizer::default();

        for edges in [
            ResizeEdges { left: true, ..ResizeEdges::NONE },
            ResizeEdges::TOP,
            ResizeEdges { bottom: true, ..ResizeEdges::NONE },
            ResizeEdges { right: true, bottom: true, ..ResizeEdges::NONE },
        ] {
            let event = ResizeMove {
                rect: ResizeRect::new(10.0, 10.0),
                edges,
            };
            assert_eq!(resizer.on_move(&target, &event), None);
        }
        assert!(target.writes.borrow().is_empty());
    }

    #[test]
    fn test_vertical_handle_accepts_top_only() {
        let target = RecordingStyle::default();
        let resizer = SidebarResizer::new(ResizeHandle::vertical_top());

        assert!(resizer.on_move(&target, &right_drag(10.0, 10.0)).is_none());

        let top = ResizeMove {
            rect: ResizeRect::new(800.0, 240.0),
            edges: ResizeEdges::TOP,
        };
        assert!(resizer.on_move(&target, &top).is_some());
        assert_eq!(target.get("height").as_deref(), Some("240px"));
    }

    #[test]
    fn test_style_failure_is_swallowed() {
        let target = RecordingStyle {
            fail_on: Some("height"),
            ..Default::default()
        };
        let resizer = SidebarResizer::default();

        assert_eq!(resizer.on_move(&target, &right_drag(300.0, 100.0)), None);
        assert_eq!(target.get("width").as_deref(), Some("300px"));
        assert_eq!(target.get("transform"), None);
    }

    #[test]
    fn test_edge_containment() {
        assert!(ResizeEdges::RIGHT.contains(&ResizeEdges::NONE));
        assert!(ResizeEdges::RIGHT.contains(&ResizeEdges::RIGHT));
        assert!(!ResizeEdges::RIGHT.contains(&ResizeEdges::TOP));
        assert!(ResizeEdges::NONE.is_empty());
        assert!(!ResizeEdges::TOP.is_empty());
    }

    #[test]
    fn test_handle_presets() {
        let sidebar = ResizeHandle::horizontal_right();
        assert_eq!(sidebar.selector, ".resize-horiz-right");
        assert_eq!(
            sidebar.edges,
            ResizeEdges {
                left: false,
                right: true,
                bottom: false,
                top: false
            }
        );

        let logger = ResizeHandle::vertical_top();
        assert_eq!(logger.selector, ".resize-vert-top");
        assert_eq!(logger.edges, ResizeEdges::TOP);
    }
}
