//! Types exposed to JavaScript via wasm-bindgen.

use kit_dom_core::{ResizeEdges, ResizeHandle};
use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

/// Edges a resize handle may drag. Omitted edges are disabled.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(default)]
pub struct JsResizeEdges {
    pub left: bool,
    pub right: bool,
    pub bottom: bool,
    pub top: bool,
}

impl From<JsResizeEdges> for ResizeEdges {
    fn from(e: JsResizeEdges) -> Self {
        ResizeEdges {
            left: e.left,
            right: e.right,
            bottom: e.bottom,
            top: e.top,
        }
    }
}

/// Resize configuration passed to `installResizer`.
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct ResizeOptions {
    /// CSS selector of the resizable element.
    pub selector: String,
    #[serde(default)]
    pub edges: JsResizeEdges,
}

impl From<ResizeOptions> for ResizeHandle {
    fn from(opts: ResizeOptions) -> Self {
        ResizeHandle::new(opts.selector, opts.edges.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_to_handle() {
        let opts = ResizeOptions {
            selector: ".resize-horiz-right".to_string(),
            edges: JsResizeEdges {
                right: true,
                ..Default::default()
            },
        };
        assert_eq!(ResizeHandle::from(opts), ResizeHandle::horizontal_right());
    }
}
