//! Console-only interaction tracing. Stands in for an analytics sink; nothing
//! leaves the browser.

use std::collections::BTreeMap;

use log::warn;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::JsValue;

pub const NOTIFY_BUTTON_CLICKED: &str = "notify_button_clicked";
pub const NEWSLETTER_SIGNUP_ATTEMPTED: &str = "newsletter_signup_attempted";
pub const NAVIGATION_CLICKED: &str = "navigation_clicked";

#[derive(Debug, Clone, PartialEq)]
pub struct TrackedEvent {
    pub name: &'static str,
    pub data: BTreeMap<String, String>,
}

impl TrackedEvent {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            data: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.data.insert(key.to_string(), value.into());
        self
    }

    /// Attributes as a plain JS object, so the console shows them expandable.
    fn attributes(&self) -> std::result::Result<JsValue, serde_wasm_bindgen::Error> {
        self.data.serialize(&Serializer::json_compatible())
    }

    pub fn emit(&self) {
        match self.attributes() {
            Ok(data) => gloo_console::log!("Event tracked:", self.name, data),
            Err(e) => {
                warn!("Could not encode attributes for {}: {}", self.name, e);
                gloo_console::log!("Event tracked:", self.name);
            }
        }
    }
}

pub fn track_event(name: &'static str) {
    TrackedEvent::new(name).emit();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_are_kept_by_key() {
        let event = TrackedEvent::new(NAVIGATION_CLICKED)
            .with("target", "#about")
            .with("target", "#features");
        assert_eq!(event.name, "navigation_clicked");
        assert_eq!(event.data.len(), 1);
        assert_eq!(event.data["target"], "#features");
    }

    #[test]
    fn bare_events_carry_no_attributes() {
        assert!(TrackedEvent::new(NOTIFY_BUTTON_CLICKED).data.is_empty());
    }
}
