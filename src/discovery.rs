use futures::stream::{FuturesUnordered, StreamExt};
use leptos::logging::{log, warn};

use crate::config::ViewerConfig;
use crate::net::{is_success, Method, Transport};

/// HEAD first, then GET when HEAD errors or answers non-2xx.
pub async fn exists<T: Transport>(transport: &T, url: &str) -> bool {
    match transport.status(url, Method::Head).await {
        Ok(status) if is_success(status) => return true,
        Ok(status) => log!("HEAD {url} -> {status}, retrying with GET"),
        Err(err) => log!("HEAD {url} failed ({err}), retrying with GET"),
    }
    matches!(transport.status(url, Method::Get).await, Ok(status) if is_success(status))
}

/// Probes every candidate concurrently and returns the ones that exist in
/// the order their probes settled. Falls back to the full candidate list
/// when none are found.
pub async fn discover<T: Transport>(transport: &T, config: &ViewerConfig) -> Vec<String> {
    let mut pending: FuturesUnordered<_> = config
        .candidates
        .iter()
        .map(move |name| async move {
            let url = config.file_url(name);
            (name, exists(transport, &url).await)
        })
        .collect();

    let mut found = Vec::new();
    while let Some((name, ok)) = pending.next().await {
        if ok {
            found.push(name.clone());
        }
    }

    if found.is_empty() {
        warn!("no candidate files found under {}, using the static list", config.base_path);
        return config.candidates.clone();
    }
    found
}
