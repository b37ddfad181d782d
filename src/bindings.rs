//! Plain JavaScript entry points for pages that want the transform without
//! the Leptos shell.

use wasm_bindgen::prelude::*;

use crate::document::parse;
use crate::filter::filter;
use crate::render::render;

/// Returns the parsed sections as `[{title, id, items: [{type, ...}]}]`.
#[wasm_bindgen(js_name = parseDump)]
pub fn parse_dump(text: &str) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&parse(text))?)
}

/// Returns `{toc, body}`.
#[wasm_bindgen(js_name = renderDump)]
pub fn render_dump(text: &str) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&render(&parse(text)))?)
}

#[wasm_bindgen(js_name = filterListing)]
pub fn filter_listing(body: &str, query: &str) -> String {
    filter(body, query).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_listing_matches_filter() {
        let body = render(&parse("# A\nkeep me\ndrop")).body;
        let out = filter_listing(&body, "KEEP");
        assert_eq!(out, "== Unsorted ==\n[#unsorted]\n== A ==\n[#a]\nkeep me");
        assert_eq!(filter_listing(&body, ""), body);
    }

    #[test]
    fn rendered_serializes_both_parts() {
        let rendered = render(&parse("# A\nx"));
        let json = serde_json::to_value(&rendered).unwrap();
        assert_eq!(json["toc"], "<a href=\"#a\">A</a>");
        assert!(json["body"].as_str().unwrap().contains("[#a]"));
    }
}
