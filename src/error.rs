use std::fmt::{Display, Formatter};

use wasm_bindgen::JsValue;

#[derive(Debug)]
pub enum ThemeError {
    /// A DOM element the host page must provide is missing or of the wrong
    /// kind, or a DOM call failed.
    Dom(String),
    /// localStorage is unavailable or a read/write on it failed.
    Storage(String),
    /// Constructing or dispatching the change notification failed.
    Event(String),
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::Dom(msg) => write!(f, "DOM Error: {}", msg),
            ThemeError::Storage(msg) => write!(f, "Storage Error: {}", msg),
            ThemeError::Event(msg) => write!(f, "Event Error: {}", msg),
        }
    }
}

impl From<ThemeError> for JsValue {
    fn from(err: ThemeError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// Render a JsValue error into something loggable.
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
