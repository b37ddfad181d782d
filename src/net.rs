use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response, Window};

use crate::error::LoadError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Head,
    Get,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Head => "HEAD",
            Method::Get => "GET",
        }
    }
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn status(&self, url: &str, method: Method) -> Result<u16, LoadError>;
    async fn fetch_text(&self, url: &str) -> Result<String, LoadError>;
}

pub struct BrowserTransport {
    window: Window,
}

impl BrowserTransport {
    /// Fails when there is no window, or when the page was opened from
    /// `file://` where fetch against sibling files is blocked.
    pub fn new() -> Result<Self, LoadError> {
        let window = web_sys::window().ok_or(LoadError::NoWindow)?;
        let protocol = window.location().protocol().unwrap_or_default();
        if protocol == "file:" {
            return Err(LoadError::LocalFile);
        }
        Ok(Self { window })
    }

    async fn send(&self, url: &str, method: Method) -> Result<Response, LoadError> {
        let opts = RequestInit::new();
        opts.set_method(method.as_str());
        opts.set_cache(RequestCache::NoStore);
        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|e| LoadError::network(url, &e))?;
        let value = JsFuture::from(self.window.fetch_with_request(&request))
            .await
            .map_err(|e| LoadError::network(url, &e))?;
        value
            .dyn_into::<Response>()
            .map_err(|e| LoadError::network(url, &e))
    }
}

impl Transport for BrowserTransport {
    async fn status(&self, url: &str, method: Method) -> Result<u16, LoadError> {
        let response = self.send(url, method).await?;
        Ok(response.status())
    }

    async fn fetch_text(&self, url: &str) -> Result<String, LoadError> {
        let response = self.send(url, Method::Get).await?;
        if !response.ok() {
            return Err(LoadError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }
        let promise = response.text().map_err(|e| LoadError::network(url, &e))?;
        let text = JsFuture::from(promise)
            .await
            .map_err(|e| LoadError::network(url, &e))?;
        Ok(text.as_string().unwrap_or_default())
    }
}
