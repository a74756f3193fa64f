use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::dom::{self, AnimationFrame};
use crate::error::Result;

/// At most one frame scheduled at a time.
#[derive(Default)]
pub struct FrameThrottle {
    pending: Cell<bool>,
}

impl FrameThrottle {
    /// `true` if the caller may schedule a frame now.
    pub fn try_begin(&self) -> bool {
        !self.pending.replace(true)
    }

    pub fn finish(&self) {
        self.pending.set(false);
    }
}

pub fn sparkle_style(x: f64, y: f64) -> String {
    format!(
        "position: fixed; left: {:.0}px; top: {:.0}px; width: 4px; height: 4px; \
         background: #ff9800; border-radius: 50%; pointer-events: none; z-index: 999; \
         animation: sparkle 1.5s ease-out forwards;",
        x, y
    )
}

/// Sparkles currently attached to the page, keyed by spawn order.
#[derive(Default)]
struct SparkleField {
    next_id: u32,
    live: HashMap<u32, Element>,
}

impl SparkleField {
    fn spawn(field: &Rc<RefCell<Self>>) -> Result<()> {
        let window = dom::window()?;
        let width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let height = window.inner_height()?.as_f64().unwrap_or(0.0);
        let x = js_sys::Math::random() * width;
        let y = js_sys::Math::random() * height;

        let sparkle = dom::document()?.create_element("div")?;
        sparkle.set_class_name("page-sparkle");
        sparkle.set_attribute("style", &sparkle_style(x, y))?;
        dom::body()?.append_child(&sparkle)?;

        let id = {
            let mut field = field.borrow_mut();
            let id = field.next_id;
            field.next_id = field.next_id.wrapping_add(1);
            field.live.insert(id, sparkle);
            id
        };

        let field = field.clone();
        Timeout::new(config::SPARKLE_LIFETIME_MS, move || {
            if let Some(sparkle) = field.borrow_mut().live.remove(&id) {
                sparkle.remove();
            }
        })
        .forget();
        Ok(())
    }

    fn clear(&mut self) {
        for (_, sparkle) in self.live.drain() {
            sparkle.remove();
        }
    }
}

/// Occasionally drops a short-lived sparkle somewhere on screen while the
/// page scrolls. Purely decorative.
#[hook]
pub fn use_scroll_sparkles() {
    use_effect_with_deps(
        move |_| {
            let throttle = Rc::new(FrameThrottle::default());
            let field = Rc::new(RefCell::new(SparkleField::default()));
            let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::default();

            let scroll_callback = {
                let field = field.clone();
                let frame = frame.clone();
                Closure::<dyn Fn()>::new(move || {
                    if !throttle.try_begin() {
                        return;
                    }
                    let throttle_done = throttle.clone();
                    let field = field.clone();
                    let scheduled = AnimationFrame::request(move || {
                        if js_sys::Math::random() < config::SPARKLE_CHANCE {
                            if let Err(e) = SparkleField::spawn(&field) {
                                debug!("Sparkle skipped: {}", e);
                            }
                        }
                        throttle_done.finish();
                    });
                    match scheduled {
                        Ok(next) => *frame.borrow_mut() = Some(next),
                        Err(e) => {
                            warn!("Could not schedule sparkle frame: {}", e);
                            throttle.finish();
                        }
                    }
                })
            };

            let window = web_sys::window();
            if let Some(window) = &window {
                if let Err(e) = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                ) {
                    warn!("Sparkles disabled: {:?}", e);
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
                frame.borrow_mut().take();
                field.borrow_mut().clear();
            }
        },
        (),
    );
}
