//! Resize listener exports.

use std::cell::RefCell;
use std::collections::HashMap;

use kit_dom_browser::{ResizeHandle, ResizeListener, SmolStr, install_resizer};
use wasm_bindgen::prelude::*;

use crate::types::ResizeOptions;

thread_local! {
    /// Preset listeners, registered for the lifetime of the page.
    static PAGE_RESIZERS: RefCell<HashMap<SmolStr, ResizeListener>> =
        RefCell::new(HashMap::new());
}

/// A resize listener owned by JavaScript.
///
/// The listener is unregistered by `dispose()`, or when the wrapper is freed.
/// Keep a reference for as long as the element should stay resizable.
#[wasm_bindgen]
pub struct JsResizer {
    listener: Option<ResizeListener>,
}

#[wasm_bindgen]
impl JsResizer {
    /// Selector this listener is attached to, or `undefined` once disposed.
    #[wasm_bindgen(getter)]
    pub fn selector(&self) -> Option<String> {
        self.listener.as_ref().map(|l| l.selector().to_string())
    }

    /// Unregister from the interaction library.
    pub fn dispose(&mut self) {
        self.listener.take();
    }
}

fn setup_error(e: impl std::fmt::Display) -> JsError {
    JsError::new(&format!("Resize setup failed: {}", e))
}

/// Register `handle` for the rest of the page's life.
///
/// Installing the same selector again replaces the earlier registration.
fn install_for_page(handle: &ResizeHandle) -> Result<(), JsError> {
    PAGE_RESIZERS.with(|resizers| {
        let mut resizers = resizers.borrow_mut();
        // Unset the old registration before the new one shares its interactable.
        drop(resizers.remove(&handle.selector));
        let listener = install_resizer(handle).map_err(setup_error)?;
        resizers.insert(handle.selector.clone(), listener);
        Ok(())
    })
}

/// Make `.resize-horiz-right` elements resizable from their right edge.
#[wasm_bindgen(js_name = installSidebarResizer)]
pub fn install_sidebar_resizer() -> Result<(), JsError> {
    install_for_page(&ResizeHandle::horizontal_right())
}

/// Make `.resize-vert-top` elements resizable from their top edge.
#[wasm_bindgen(js_name = installPanelResizer)]
pub fn install_panel_resizer() -> Result<(), JsError> {
    install_for_page(&ResizeHandle::vertical_top())
}

/// Register a custom resize configuration, returning a disposable handle.
#[wasm_bindgen(js_name = installResizer)]
pub fn install_custom_resizer(options: ResizeOptions) -> Result<JsResizer, JsError> {
    install_resizer(&options.into())
        .map(|listener| JsResizer {
            listener: Some(listener),
        })
        .map_err(setup_error)
}
