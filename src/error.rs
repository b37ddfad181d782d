use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("no browsing context available")]
    NoWindow,
    #[error("opened from the local filesystem; serve this directory over http")]
    LocalFile,
    #[error("request for {url} failed: {reason}")]
    Network { url: String, reason: String },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

impl LoadError {
    pub fn network(url: &str, value: &JsValue) -> Self {
        Self::Network {
            url: url.to_string(),
            reason: js_reason(value),
        }
    }
}

pub fn js_reason(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
