use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use yew::prelude::*;

use crate::config;
use crate::dom::AnimationFrame;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Severity::Success => "#4caf50",
            Severity::Error => "#f44336",
            Severity::Info => "#2196f3",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
    pub severity: Severity,
}

pub fn notification_style(severity: Severity, on_screen: bool) -> String {
    format!(
        "position: fixed; top: 20px; right: 20px; padding: 1rem 1.5rem; border-radius: 12px; \
         color: white; font-weight: 500; z-index: 1001; max-width: 350px; word-wrap: break-word; \
         transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1); background-color: {}; transform: {};",
        severity.color(),
        if on_screen { "translateX(0)" } else { "translateX(100%)" },
    )
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub notice: Notice,
    pub on_dismissed: Callback<u32>,
}

/// Slides in on the next frame, holds, slides out, then asks the owner to drop it.
/// Render with `key={notice.id}` so a replacement remounts and cancels the old timers.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    let on_screen = use_state(|| false);

    {
        let on_screen = on_screen.clone();
        let on_dismissed = props.on_dismissed.clone();
        use_effect_with_deps(
            move |id: &u32| {
                let id = *id;
                let enter = {
                    let slide_in = on_screen.clone();
                    match AnimationFrame::request(move || slide_in.set(true)) {
                        Ok(frame) => Some(frame),
                        Err(e) => {
                            warn!("Notification shown without entry animation: {}", e);
                            on_screen.set(true);
                            None
                        }
                    }
                };

                let exit: Rc<RefCell<Option<Timeout>>> = Rc::default();
                let hold = {
                    let exit = exit.clone();
                    Timeout::new(config::NOTIFICATION_HOLD_MS, move || {
                        on_screen.set(false);
                        let remove = Timeout::new(config::NOTIFICATION_EXIT_MS, move || {
                            on_dismissed.emit(id);
                        });
                        *exit.borrow_mut() = Some(remove);
                    })
                };

                move || {
                    drop(enter);
                    drop(hold);
                    exit.borrow_mut().take();
                }
            },
            props.notice.id,
        );
    }

    let Notice { message, severity, .. } = &props.notice;

    html! {
        <div
            class={classes!("notification", format!("notification--{}", severity.tag()))}
            role="alert"
            aria-live="polite"
            style={notification_style(*severity, *on_screen)}
        >
            { message.clone() }
        </div>
    }
}

/// Owner of the one notification on screen. A new notice replaces the current
/// one; a dismissal only clears the notice that asked for it.
#[derive(Clone)]
pub struct Notifier {
    current: UseStateHandle<Option<Notice>>,
    seq: Rc<RefCell<u32>>,
}

#[hook]
pub fn use_notifier() -> Notifier {
    let current = use_state(|| None::<Notice>);
    let seq = use_mut_ref(|| 0u32);
    Notifier { current, seq }
}

impl Notifier {
    pub fn notify(&self) -> Callback<(String, Severity)> {
        let current = self.current.clone();
        let seq = self.seq.clone();
        Callback::from(move |(message, severity): (String, Severity)| {
            let id = {
                let mut seq = seq.borrow_mut();
                *seq = seq.wrapping_add(1);
                *seq
            };
            current.set(Some(Notice { id, message, severity }));
        })
    }

    pub fn view(&self) -> Html {
        let Some(notice) = (*self.current).clone() else {
            return html! {};
        };
        let current = self.current.clone();
        let on_dismissed = Callback::from(move |id: u32| {
            // A replaced notice may still report in; leave its successor alone.
            if (*current).as_ref().map(|n| n.id) == Some(id) {
                current.set(None);
            }
        });

        let key = notice.id;
        html! {
            <Notification {key} {notice} {on_dismissed} />
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::testing::{find, mount_point, settle};
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[function_component(NoticeBoard)]
    fn notice_board() -> Html {
        let notifier = use_notifier();
        let notify = notifier.notify();
        let first = {
            let notify = notify.clone();
            Callback::from(move |_: MouseEvent| notify.emit(("first".to_string(), Severity::Info)))
        };
        let second =
            Callback::from(move |_: MouseEvent| notify.emit(("second".to_string(), Severity::Success)));

        html! {
            <>
                <button id="first" onclick={first}>{"first"}</button>
                <button id="second" onclick={second}>{"second"}</button>
                { notifier.view() }
            </>
        }
    }

    fn shown(root: &web_sys::Element) -> Vec<(String, String)> {
        let nodes = root.query_selector_all(".notification").unwrap();
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|n| n.dyn_into::<web_sys::Element>().ok())
            .map(|el| (el.text_content().unwrap_or_default(), el.class_name()))
            .collect()
    }

    #[wasm_bindgen_test]
    async fn newer_notice_replaces_older_and_outlives_its_timers() {
        let root = mount_point();
        let app = yew::Renderer::<NoticeBoard>::with_root(root.clone()).render();
        settle().await;
        assert!(shown(&root).is_empty());

        find(&root, "#first").click();
        TimeoutFuture::new(2_000).await;
        let style = find(&root, ".notification").style();
        assert!(style.get_property_value("transform").unwrap().starts_with("translateX(0"));

        find(&root, "#second").click();
        settle().await;
        assert_eq!(
            shown(&root),
            vec![("second".to_string(), "notification notification--success".to_string())]
        );

        // Past the first notice's hold and exit: the second must still be up.
        TimeoutFuture::new(2_600).await;
        assert_eq!(shown(&root).len(), 1);
        assert_eq!(shown(&root)[0].0, "second");

        TimeoutFuture::new(2_000).await;
        assert!(shown(&root).is_empty());

        app.destroy();
        root.remove();
    }
}
