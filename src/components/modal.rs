use log::{error, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::header;
use crate::config;
use crate::dom;
use crate::error::{PageError, Result};

const NEWSLETTER_ANCHOR: &str = "#newsletter";

/// Index to move focus to when Tab would leave the focusable set, or `None`
/// when the browser's own traversal already stays inside it.
pub fn wrap_focus(len: usize, current: Option<usize>, backwards: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match (current, backwards) {
        (None, false) => Some(0),
        (None, true) => Some(last),
        (Some(0), true) => Some(last),
        (Some(i), false) if i == last => Some(0),
        _ => None,
    }
}

fn same_node(a: &JsValue, b: &JsValue) -> bool {
    a == b
}

/// Keeps Tab / Shift+Tab cycling inside `modal`. The focusable set is
/// queried on every press since the modal's content may change.
pub fn trap_tab(modal: &Element, event: &KeyboardEvent) -> Result<()> {
    let focusable = dom::query_all_html(modal, config::FOCUSABLE_SELECTOR)?;
    let active = dom::document()?.active_element();
    let current = active.and_then(|active| {
        focusable
            .iter()
            .position(|el| same_node(el.as_ref(), active.as_ref()))
    });

    if let Some(next) = wrap_focus(focusable.len(), current, event.shift_key()) {
        event.prevent_default();
        focusable[next].focus()?;
    }
    Ok(())
}

pub fn set_scroll_lock(locked: bool) -> Result<()> {
    let style = dom::body()?.style();
    if locked {
        style.set_property("overflow", "hidden")?;
    } else {
        style.remove_property("overflow")?;
    }
    Ok(())
}

fn focus_ref(node: &NodeRef, what: &'static str) -> Result<()> {
    let el = node
        .cast::<HtmlElement>()
        .ok_or(PageError::MissingElement(what))?;
    el.focus()?;
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    /// Control that opened the modal; focus returns here on close.
    pub trigger: NodeRef,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let modal_ref = use_node_ref();
    let close_ref = use_node_ref();
    let was_open = use_mut_ref(|| false);

    // The dialog and its close control are required for everything below.
    {
        let modal_ref = modal_ref.clone();
        let close_ref = close_ref.clone();
        use_effect_with_deps(
            move |_| {
                if modal_ref.get().is_none() {
                    error!("{}", PageError::MissingElement("#modal"));
                }
                if close_ref.get().is_none() {
                    error!("{}", PageError::MissingElement(".modal__close"));
                }
                || {
                    if let Err(e) = set_scroll_lock(false) {
                        warn!("Scroll lock left on after modal unmount: {}", e);
                    }
                }
            },
            (),
        );
    }

    {
        let close_ref = close_ref.clone();
        let trigger = props.trigger.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let open = *open;
                let changed = *was_open.borrow() != open;
                *was_open.borrow_mut() = open;
                if changed {
                    let result = set_scroll_lock(open).and_then(|_| {
                        if open {
                            focus_ref(&close_ref, ".modal__close")
                        } else {
                            focus_ref(&trigger, "subscribe trigger")
                        }
                    });
                    if let Err(e) = result {
                        error!("Modal transition incomplete: {}", e);
                    }
                }
                || ()
            },
            props.open,
        );
    }

    {
        let open = props.open;
        let on_close = props.on_close.clone();
        let modal_ref = modal_ref.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if !open {
                return;
            }
            match e.key().as_str() {
                "Escape" => on_close.emit(()),
                "Tab" => {
                    if let Some(modal) = modal_ref.cast::<Element>() {
                        if let Err(err) = trap_tab(&modal, &e) {
                            warn!("Focus trap failed: {}", err);
                        }
                    }
                }
                _ => {}
            }
        });
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        let modal_ref = modal_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Element>().ok());
            if let (Some(target), Some(modal)) = (target, modal_ref.cast::<Element>()) {
                if same_node(target.as_ref(), modal.as_ref()) {
                    on_close.emit(());
                }
            }
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_newsletter_link = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
            if let Err(err) = header::scroll_to_section(NEWSLETTER_ANCHOR) {
                warn!("Could not scroll to {}: {}", NEWSLETTER_ANCHOR, err);
            }
        })
    };

    html! {
        <div
            id="modal"
            ref={modal_ref}
            class={classes!("modal", props.open.then(|| "show"))}
            role="dialog"
            aria-modal="true"
            aria-labelledby="modal-title"
            aria-hidden={if props.open { "false" } else { "true" }}
            onclick={on_backdrop}
        >
            <div class="modal__content">
                <button ref={close_ref} class="modal__close" aria-label="Close" onclick={on_close_click}>
                    {"×"}
                </button>
                <h2 id="modal-title" class="modal__title">{"Something magical is coming ✨"}</h2>
                <p class="modal__text">
                    {"Our online boutique opens soon. Join the newsletter and you'll be the first to hear when the doors swing open."}
                </p>
                <a href={NEWSLETTER_ANCHOR} class="modal__link" onclick={on_newsletter_link}>
                    {"Take me to the newsletter"}
                </a>
            </div>
        </div>
    }
}
