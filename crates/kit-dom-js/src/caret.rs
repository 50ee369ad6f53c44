//! Caret positioning exports.

use kit_dom_browser::{set_caret_position, set_caret_position_str};
use wasm_bindgen::prelude::*;

/// Collapse the caret at `pos` inside the element with id `element_id`.
///
/// `pos` is parsed as a non-negative integer. A missing element or an
/// unparseable offset does nothing beyond a console diagnostic.
#[wasm_bindgen(js_name = setCaretPosition)]
pub fn js_set_caret_position(element_id: &str, pos: &str) {
    let _ = set_caret_position_str(element_id, pos);
}

/// Typed variant of `setCaretPosition`.
#[wasm_bindgen(js_name = setCaretOffset)]
pub fn js_set_caret_offset(element_id: &str, offset: u32) {
    let _ = set_caret_position(element_id, offset as usize);
}
