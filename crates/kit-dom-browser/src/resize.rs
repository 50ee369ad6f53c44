//! Interaction library bindings for resizable panels.
//!
//! Gesture detection is done by the page's `interact` global. We register a
//! `resizable` configuration per `ResizeHandle` and feed its move events to a
//! `SidebarResizer`, which writes the inline style of the dragged element.

use js_sys::{Object, Reflect};
use kit_dom_core::{
    PlatformError, ResizeEdges, ResizeHandle, ResizeMove, ResizeRect, SidebarResizer, StyleTarget,
};
use smol_str::SmolStr;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

// === interact.js bindings ===

#[wasm_bindgen]
extern "C" {
    /// Target set returned by `interact(selector)`.
    pub type Interactable;

    #[wasm_bindgen(catch, js_name = interact)]
    fn interact(selector: &str) -> Result<Interactable, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn resizable(this: &Interactable, options: &JsValue) -> Result<Interactable, JsValue>;

    #[wasm_bindgen(method)]
    fn unset(this: &Interactable);

    /// Event passed to `resizable` move listeners.
    pub type InteractResizeEvent;

    #[wasm_bindgen(method, getter, structural)]
    fn target(this: &InteractResizeEvent) -> JsValue;

    #[wasm_bindgen(method, getter, structural)]
    fn rect(this: &InteractResizeEvent) -> JsValue;

    #[wasm_bindgen(method, getter, structural)]
    fn edges(this: &InteractResizeEvent) -> JsValue;
}

/// Inline style of an element.
#[derive(Debug, Clone)]
pub struct ElementStyle(pub web_sys::HtmlElement);

impl StyleTarget for ElementStyle {
    fn set_style(&self, property: &str, value: &str) -> Result<(), PlatformError> {
        self.0
            .style()
            .set_property(property, value)
            .map_err(|e| format!("set_property({}) failed: {:?}", property, e).into())
    }
}

/// A registered resize configuration.
///
/// Dropping the listener unsets the interactable and releases the move
/// callback. Call [`ResizeListener::forget`] to keep it for the lifetime of
/// the page.
pub struct ResizeListener {
    selector: SmolStr,
    interactable: Interactable,
    _on_move: Closure<dyn FnMut(InteractResizeEvent)>,
}

impl ResizeListener {
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Leak the listener so it stays registered.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        tracing::debug!(target: "kit::resize", selector = %self.selector, "unsetting resize listener");
        self.interactable.unset();
    }
}

/// Register a resize configuration for `handle` with the interaction library.
pub fn install_resizer(handle: &ResizeHandle) -> Result<ResizeListener, PlatformError> {
    let interactable = interact(&handle.selector)
        .map_err(|e| format!("interaction library unavailable: {:?}", e))?;

    let resizer = SidebarResizer::new(handle.clone());
    let on_move = Closure::<dyn FnMut(InteractResizeEvent)>::new(
        move |event: InteractResizeEvent| {
            let Ok(target) = event.target().dyn_into::<web_sys::HtmlElement>() else {
                tracing::trace!(target: "kit::resize", "move event target is not HtmlElement");
                return;
            };
            match decode_move(&event) {
                Ok(mv) => {
                    resizer.on_move(&ElementStyle(target), &mv);
                }
                Err(e) => {
                    tracing::warn!(target: "kit::resize", "unreadable move event: {}", e);
                }
            }
        },
    );

    let options = resize_options(&handle.edges, on_move.as_ref())
        .map_err(|e| format!("failed to build resize options: {:?}", e))?;
    let interactable = interactable
        .resizable(&options)
        .map_err(|e| format!("resizable failed: {:?}", e))?;

    tracing::debug!(
        target: "kit::resize",
        selector = %handle.selector,
        edges = ?handle.edges,
        "resize listener installed"
    );

    Ok(ResizeListener {
        selector: handle.selector.clone(),
        interactable,
        _on_move: on_move,
    })
}

/// Build `{ edges, listeners: { move } }`.
fn resize_options(edges: &ResizeEdges, on_move: &JsValue) -> Result<JsValue, JsValue> {
    let edges = serde_wasm_bindgen::to_value(edges)?;

    let listeners = Object::new();
    Reflect::set(&listeners, &JsValue::from_str("move"), on_move)?;

    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("edges"), &edges)?;
    Reflect::set(&options, &JsValue::from_str("listeners"), &listeners)?;
    Ok(options.into())
}

/// Read the candidate rect and dragged edges from a move event.
fn decode_move(event: &InteractResizeEvent) -> Result<ResizeMove, PlatformError> {
    let rect: ResizeRect = serde_wasm_bindgen::from_value(event.rect())
        .map_err(|e| format!("bad rect: {}", e))?;

    let edges = event.edges();
    let edges = if edges.is_object() {
        serde_wasm_bindgen::from_value(edges).map_err(|e| format!("bad edges: {}", e))?
    } else {
        ResizeEdges::NONE
    };

    Ok(ResizeMove { rect, edges })
}
