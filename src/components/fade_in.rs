use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::dom;
use crate::error::{PageError, Result};

const HIDDEN: &[(&str, &str)] = &[
    ("opacity", "0"),
    ("transform", "translateY(30px)"),
    ("transition", "opacity 0.8s ease-out, transform 0.8s ease-out"),
];

const REVEALED: &[(&str, &str)] = &[("opacity", "1"), ("transform", "translateY(0)")];

pub fn hide(el: &HtmlElement) -> Result<()> {
    dom::set_styles(el, HIDDEN)
}

pub fn reveal(el: &HtmlElement) -> Result<()> {
    dom::set_styles(el, REVEALED)
}

/// Observer callback. A revealed element is unobserved, so it is revealed at
/// most once and never hidden again.
fn reveal_visible(entries: js_sys::Array, observer: IntersectionObserver) {
    for entry in entries.iter() {
        let entry: IntersectionObserverEntry = entry.unchecked_into();
        if !entry.is_intersecting() {
            continue;
        }
        let target = entry.target();
        if let Some(el) = target.dyn_ref::<HtmlElement>() {
            if let Err(e) = reveal(el) {
                warn!("Fade-in reveal failed: {}", e);
            }
        }
        observer.unobserve(&target);
    }
}

/// Reveals each watched element the first time enough of it scrolls into
/// view, then stops watching it. Disconnects on drop.
pub struct FadeInObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl FadeInObserver {
    pub fn watch(selector: &str) -> Result<Self> {
        let root = dom::document()?
            .document_element()
            .ok_or(PageError::NoDocument)?;
        let elements = dom::query_all_html(&root, selector)?;

        let callback =
            Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(reveal_visible);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config::FADE_THRESHOLD));
        init.set_root_margin(config::FADE_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        for el in &elements {
            hide(el)?;
            observer.observe(el);
        }
        debug!("Watching {} elements for fade-in", elements.len());

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for FadeInObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[hook]
pub fn use_fade_in(selector: &'static str) {
    use_effect_with_deps(
        move |_| {
            let observer = match FadeInObserver::watch(selector) {
                Ok(observer) => Some(observer),
                Err(e) => {
                    warn!("Fade-in disabled: {}", e);
                    None
                }
            };
            move || drop(observer)
        },
        (),
    );
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn opacity(el: &HtmlElement) -> String {
        el.style().get_property_value("opacity").unwrap()
    }

    #[wasm_bindgen_test]
    fn watched_elements_start_hidden() {
        let document = dom::document().unwrap();
        let card: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        card.set_class_name("fade-test-card");
        // Far below the fold so the observer can't reveal it during the test.
        card.style().set_property("margin-top", "5000px").unwrap();
        dom::body().unwrap().append_child(&card).unwrap();

        let observer = FadeInObserver::watch(".fade-test-card").unwrap();
        assert_eq!(opacity(&card), "0");
        assert_eq!(card.style().get_property_value("transform").unwrap(), "translateY(30px)");

        drop(observer);
        card.remove();
    }

    #[wasm_bindgen_test]
    fn reveal_clears_the_offset() {
        let card: HtmlElement = dom::document()
            .unwrap()
            .create_element("p")
            .unwrap()
            .unchecked_into();
        hide(&card).unwrap();
        reveal(&card).unwrap();
        assert_eq!(opacity(&card), "1");
        assert!(card
            .style()
            .get_property_value("transform")
            .unwrap()
            .starts_with("translateY(0"));
    }

    #[wasm_bindgen_test]
    async fn reveals_once_and_stays_revealed() {
        let card: HtmlElement = dom::document()
            .unwrap()
            .create_element("div")
            .unwrap()
            .unchecked_into();
        card.set_class_name("fade-once-card");
        dom::set_styles(
            &card,
            &[("position", "fixed"), ("top", "0px"), ("left", "0px"), ("width", "100px"), ("height", "100px")],
        )
        .unwrap();
        dom::body().unwrap().append_child(&card).unwrap();

        let observer = FadeInObserver::watch(".fade-once-card").unwrap();
        assert_eq!(opacity(&card), "0");
        TimeoutFuture::new(300).await;
        assert_eq!(opacity(&card), "1");

        // Out of view: no revert.
        card.style().set_property("top", "5000px").unwrap();
        TimeoutFuture::new(300).await;
        assert_eq!(opacity(&card), "1");

        // Back in view: a second reveal would overwrite the marker.
        card.style().set_property("opacity", "0.5").unwrap();
        card.style().set_property("top", "0px").unwrap();
        TimeoutFuture::new(300).await;
        assert_eq!(opacity(&card), "0.5");

        drop(observer);
        card.remove();
    }
}
