use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::error::{PageError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(PageError::NoDocument)
}

pub fn body() -> Result<HtmlElement> {
    document()?.body().ok_or(PageError::MissingElement("body"))
}

/// First element matching `selector`, if it exists and is an HTML element.
pub fn query_html(selector: &str) -> Result<Option<HtmlElement>> {
    let found = document()?.query_selector(selector)?;
    Ok(found.and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

pub fn query_all_html(root: &web_sys::Element, selector: &str) -> Result<Vec<HtmlElement>> {
    let nodes = root.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn set_styles(el: &HtmlElement, props: &[(&str, &str)]) -> Result<()> {
    let style = el.style();
    for (name, value) in props {
        style.set_property(name, value)?;
    }
    Ok(())
}

/// A pending `requestAnimationFrame` callback. Dropping it cancels the frame
/// if it has not run yet.
pub struct AnimationFrame {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl AnimationFrame {
    pub fn request<F>(f: F) -> Result<Self>
    where
        F: FnOnce() + 'static,
    {
        let callback = Closure::once(f);
        let id = window()?.request_animation_frame(callback.as_ref().unchecked_ref())?;
        Ok(Self { id, _callback: callback })
    }
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.id);
        }
    }
}
