//! Browser implementation of caret platform operations.
//!
//! Elements are resolved by id against the live document. An element whose
//! `markdownEditor` property holds an object is driven through that editor's
//! CodeMirror view; anything else goes through the native selection API of
//! `<input>` and `<textarea>`.

use js_sys::Reflect;
use kit_dom_core::{
    CaretOutcome, CaretPlatform, CaretTarget, PlatformError, Selection, position_caret,
    position_caret_str,
};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Property the rich editor is attached under.
pub const MARKDOWN_EDITOR_PROPERTY: &str = "markdownEditor";

// === Rich editor bindings ===

#[wasm_bindgen]
extern "C" {
    /// Markdown editor attached to a widget element.
    pub type MarkdownEditor;

    /// Current markdown source.
    #[wasm_bindgen(method, catch)]
    pub fn value(this: &MarkdownEditor) -> Result<JsValue, JsValue>;

    /// Backing CodeMirror view, `undefined` if the editor has none.
    #[wasm_bindgen(method, getter, structural)]
    pub fn codemirror(this: &MarkdownEditor) -> JsValue;

    /// CodeMirror view backing a `MarkdownEditor`.
    pub type EditorView;

    #[wasm_bindgen(method, catch)]
    pub fn dispatch(this: &EditorView, transaction: &JsValue) -> Result<(), JsValue>;
}

/// Transaction spec handed to `EditorView.dispatch`.
#[derive(Serialize)]
struct SelectionTransaction {
    selection: Selection,
}

/// Browser-based caret platform implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserCaret;

impl BrowserCaret {
    pub fn new() -> Self {
        Self
    }
}

impl CaretPlatform for BrowserCaret {
    type Element = web_sys::Element;
    type Editor = MarkdownEditor;

    fn lookup(&self, element_id: &str) -> Option<web_sys::Element> {
        web_sys::window()?
            .document()?
            .get_element_by_id(element_id)
    }

    fn probe(&self, element: web_sys::Element) -> CaretTarget<web_sys::Element, MarkdownEditor> {
        match Reflect::get(&element, &JsValue::from_str(MARKDOWN_EDITOR_PROPERTY)) {
            Ok(editor) if editor.is_object() => CaretTarget::RichEditor {
                element,
                editor: editor.unchecked_into(),
            },
            _ => CaretTarget::PlainInput(element),
        }
    }

    fn editor_value(&self, editor: &MarkdownEditor) -> Option<String> {
        editor.value().ok()?.as_string()
    }

    fn dispatch_selection(
        &self,
        editor: &MarkdownEditor,
        selection: Selection,
    ) -> Result<(), PlatformError> {
        let view = editor.codemirror();
        if !view.is_object() {
            return Err("markdown editor has no codemirror view".into());
        }
        let view: EditorView = view.unchecked_into();

        let transaction = serde_wasm_bindgen::to_value(&SelectionTransaction { selection })
            .map_err(|e| format!("failed to encode selection: {}", e))?;
        view.dispatch(&transaction)
            .map_err(|e| format!("dispatch failed: {:?}", e).into())
    }

    fn focus(&self, element: &web_sys::Element) -> Result<(), PlatformError> {
        let element = element
            .dyn_ref::<web_sys::HtmlElement>()
            .ok_or("element is not HtmlElement")?;
        element
            .focus()
            .map_err(|e| format!("focus failed: {:?}", e).into())
    }

    fn set_selection_range(
        &self,
        element: &web_sys::Element,
        start: usize,
        end: usize,
    ) -> Result<(), PlatformError> {
        let start = u32::try_from(start).map_err(|_| "selection start out of range")?;
        let end = u32::try_from(end).map_err(|_| "selection end out of range")?;

        let result = if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
            input.set_selection_range(start, end)
        } else if let Some(textarea) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
            textarea.set_selection_range(start, end)
        } else {
            return Err(format!("<{}> has no selection range", element.tag_name()).into());
        };

        result.map_err(|e| format!("set_selection_range failed: {:?}", e).into())
    }
}

/// Collapse the caret at `offset` inside the element with id `element_id`.
pub fn set_caret_position(element_id: &str, offset: usize) -> CaretOutcome {
    position_caret(&BrowserCaret, element_id, offset)
}

/// Same as [`set_caret_position`], with the offset given as text.
pub fn set_caret_position_str(element_id: &str, pos: &str) -> CaretOutcome {
    position_caret_str(&BrowserCaret, element_id, pos)
}
