use std::fmt::{Display, Formatter};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    NoWindow,
    NoDocument,
    Host(String),
    Config(String),
}

impl Display for PageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PageError::NoWindow => write!(f, "Host Error: no global window"),
            PageError::NoDocument => write!(f, "Host Error: window has no document"),
            PageError::Host(msg) => write!(f, "Host Error: {}", msg),
            PageError::Config(msg) => write!(f, "Config Error: {}", msg),
        }
    }
}

impl std::error::Error for PageError {}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        // DOMException and Error both carry a readable `message`, plain values only stringify
        let msg = js_sys::Reflect::get(&value, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        PageError::Host(msg)
    }
}

impl From<serde_json::Error> for PageError {
    fn from(error: serde_json::Error) -> Self {
        PageError::Config(error.to_string())
    }
}

impl From<PageError> for JsValue {
    fn from(err: PageError) -> JsValue {
        js_sys::Error::new(&err.to_string()).into()
    }
}
