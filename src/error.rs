use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("required element missing: {0}")]
    MissingElement(&'static str),
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, PageError>;
