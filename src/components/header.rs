use log::{error, warn};
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config;
use crate::dom;
use crate::error::{PageError, Result};
use crate::tracking::{self, TrackedEvent};

const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "Our Story"),
    ("#features", "Why Vintage"),
    ("#newsletter", "Stay in Touch"),
];

/// Scroll position that puts a section's top just below the fixed header.
pub fn scroll_offset(target_top: f64, header_height: f64) -> f64 {
    target_top - header_height - config::NAV_SCROLL_MARGIN
}

/// Smoothly scrolls to the in-page anchor `href`. Returns `false` when the
/// anchor doesn't resolve to an element.
pub fn smooth_scroll_to(href: &str, header: &HtmlElement) -> Result<bool> {
    if href.len() < 2 || !href.starts_with('#') {
        return Ok(false);
    }
    let Some(target) = dom::query_html(href)? else {
        return Ok(false);
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll_offset(
        f64::from(target.offset_top()),
        f64::from(header.offset_height()),
    ));
    options.set_behavior(ScrollBehavior::Smooth);
    dom::window()?.scroll_to_with_scroll_to_options(&options);
    Ok(true)
}

/// `smooth_scroll_to` for callers outside the header, which find it by class.
pub fn scroll_to_section(href: &str) -> Result<bool> {
    let header = dom::query_html(".header")?.ok_or(PageError::MissingElement(".header"))?;
    smooth_scroll_to(href, &header)
}

#[function_component(Header)]
pub fn header() -> Html {
    let header_ref = use_node_ref();

    {
        let header_ref = header_ref.clone();
        use_effect_with_deps(
            move |_| {
                if header_ref.get().is_none() {
                    error!("{}", PageError::MissingElement(".header"));
                }
                || ()
            },
            (),
        );
    }

    let links = NAV_LINKS.iter().map(|&(href, label)| {
        let header_ref = header_ref.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            match header_ref.cast::<HtmlElement>() {
                Some(header) => {
                    if let Err(err) = smooth_scroll_to(href, &header) {
                        warn!("Could not scroll to {}: {}", href, err);
                    }
                }
                None => error!("{}", PageError::MissingElement(".header")),
            }
            TrackedEvent::new(tracking::NAVIGATION_CLICKED)
                .with("target", href)
                .emit();
        });
        html! {
            <li class="nav__item">
                <a class="nav__link" href={href} {onclick}>{ label }</a>
            </li>
        }
    });

    html! {
        <header class="header" ref={header_ref.clone()}>
            <div class="header__inner">
                <a href="#home" class="header__logo">{"Maisie's Closet"}</a>
                <nav class="nav" aria-label="Main">
                    <ul class="nav__menu">
                        { for links }
                    </ul>
                </nav>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_clears_header_and_margin() {
        assert_eq!(scroll_offset(900.0, 80.0), 800.0);
        assert_eq!(scroll_offset(50.0, 80.0), -50.0);
    }

    #[test]
    fn nav_links_are_in_page_anchors() {
        assert!(NAV_LINKS.iter().all(|(href, _)| href.starts_with('#') && href.len() > 1));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn page() -> web_sys::Element {
        let document = dom::document().unwrap();
        let page = document.create_element("div").unwrap();
        page.set_inner_html(
            r#"<header class="header" style="height: 80px"></header>
               <section id="far-section" style="margin-top: 3000px; height: 400px"></section>"#,
        );
        dom::body().unwrap().append_child(&page).unwrap();
        page
    }

    #[wasm_bindgen_test]
    fn resolves_anchors_below_the_header() {
        let page = page();
        assert!(scroll_to_section("#far-section").unwrap());
        assert!(!scroll_to_section("#no-such-section").unwrap());
        assert!(!scroll_to_section("#").unwrap());
        page.remove();
    }

    #[wasm_bindgen_test]
    fn missing_header_is_reported() {
        let page = page();
        let header: HtmlElement = page.query_selector(".header").unwrap().unwrap().unchecked_into();
        header.remove();
        assert!(matches!(
            scroll_to_section("#far-section"),
            Err(PageError::MissingElement(".header"))
        ));
        page.remove();
    }
}
