//! WASM browser tests for kit-dom-js.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use kit_dom_js::{
    JsResizeEdges, ResizeOptions, install_custom_resizer, install_panel_resizer,
    install_sidebar_resizer,
};

/// Fake `interact` global recording `resizable` and `unset` calls by selector.
fn install_fake_interact() {
    Function::new_no_args(
        "globalThis.__kitResizable = [];
         globalThis.__kitUnsets = [];
         globalThis.interact = function (selector) {
             return {
                 resizable(options) { globalThis.__kitResizable.push(selector); return this; },
                 unset() { globalThis.__kitUnsets.push(selector); },
             };
         };",
    )
    .call0(&JsValue::NULL)
    .unwrap();
}

fn recorded(name: &str) -> Vec<String> {
    let calls: Array = Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .unwrap()
        .unchecked_into();
    calls.iter().filter_map(|v| v.as_string()).collect()
}

#[wasm_bindgen_test]
fn test_sidebar_resizer_outlives_caller() {
    install_fake_interact();

    assert!(install_sidebar_resizer().is_ok());

    assert_eq!(recorded("__kitResizable"), vec![".resize-horiz-right"]);
    assert!(recorded("__kitUnsets").is_empty());
}

#[wasm_bindgen_test]
fn test_reinstalling_preset_replaces_registration() {
    install_fake_interact();

    assert!(install_panel_resizer().is_ok());
    assert!(install_panel_resizer().is_ok());

    assert_eq!(
        recorded("__kitResizable"),
        vec![".resize-vert-top", ".resize-vert-top"]
    );
    assert_eq!(recorded("__kitUnsets"), vec![".resize-vert-top"]);
}

#[wasm_bindgen_test]
fn test_custom_resizer_dispose_unsets() {
    install_fake_interact();

    let mut resizer = install_custom_resizer(ResizeOptions {
        selector: ".resize-custom".to_string(),
        edges: JsResizeEdges {
            left: true,
            ..Default::default()
        },
    })
    .ok()
    .expect("resizer installed");
    assert_eq!(resizer.selector().as_deref(), Some(".resize-custom"));
    assert!(recorded("__kitUnsets").is_empty());

    resizer.dispose();

    assert_eq!(resizer.selector(), None);
    assert_eq!(recorded("__kitUnsets"), vec![".resize-custom"]);
}

#[wasm_bindgen_test]
fn test_preset_without_library_fails() {
    Reflect::delete_property(&js_sys::global(), &JsValue::from_str("interact")).unwrap();

    assert!(install_sidebar_resizer().is_err());
}
