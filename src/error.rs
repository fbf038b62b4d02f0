//! Host error type.
//!
//! Everything that can stop the clock from mounting. Once mounted, failures
//! inside callbacks are logged rather than returned.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use dial::theme::ThemeError;
use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element not found: #{0}")]
    ElementNotFound(String),
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid builtin theme: {0}")]
    Theme(#[from] ThemeError),
}

impl HostError {
    /// Stable short code, handy when matching console output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoWindow => "E_NO_WINDOW",
            Self::NoDocument => "E_NO_DOCUMENT",
            Self::ElementNotFound(_) => "E_ELEMENT_NOT_FOUND",
            Self::NoContext => "E_NO_CONTEXT",
            Self::Js(_) => "E_JS",
            Self::Theme(_) => "E_THEME",
        }
    }
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<HostError> for JsValue {
    fn from(err: HostError) -> Self {
        JsValue::from_str(&format!("{}: {err}", err.error_code()))
    }
}
