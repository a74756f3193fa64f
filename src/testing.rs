//! Helpers shared by the in-browser test modules.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

use crate::dom;

/// Fresh element appended to `<body>` for a renderer to mount into.
pub fn mount_point() -> Element {
    let root = dom::document().unwrap().create_element("div").unwrap();
    dom::body().unwrap().append_child(&root).unwrap();
    root
}

/// Gives the scheduler time to render and run effects.
pub async fn settle() {
    TimeoutFuture::new(50).await;
}

pub fn find(root: &Element, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{} not rendered", selector))
        .unchecked_into()
}

pub fn has_focus(el: &HtmlElement) -> bool {
    dom::document()
        .unwrap()
        .active_element()
        .map(|active| {
            let active: &JsValue = active.as_ref();
            let el: &JsValue = el.as_ref();
            active == el
        })
        .unwrap_or(false)
}
