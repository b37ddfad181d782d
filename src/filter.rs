use std::borrow::Cow;

use crate::render::{ANCHOR_PREFIX, SEPARATOR_PREFIX};

pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Keeps the body lines matching `query` (case-insensitive substring) plus
/// every separator and anchor line. An empty query returns `body` untouched.
pub fn filter<'a>(body: &'a str, query: &str) -> Cow<'a, str> {
    let query = normalize_query(query);
    if query.is_empty() {
        return Cow::Borrowed(body);
    }

    let kept: Vec<&str> = body
        .split('\n')
        .filter(|line| {
            line.to_lowercase().contains(&query)
                || line.starts_with(SEPARATOR_PREFIX)
                || line.starts_with(ANCHOR_PREFIX)
        })
        .collect();
    Cow::Owned(kept.join("\n"))
}
