use serde::Serialize;

use crate::document::{Item, Section};

pub const SEPARATOR_PREFIX: &str = "== ";
pub const ANCHOR_PREFIX: &str = "[#";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub toc: String,
    pub body: String,
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render(sections: &[Section]) -> Rendered {
    Rendered {
        toc: render_toc(sections),
        body: render_body(sections),
    }
}

pub fn render_toc(sections: &[Section]) -> String {
    sections
        .iter()
        .filter(|section| section.has_content())
        .map(|section| {
            format!(
                "<a href=\"#{}\">{}</a>",
                section.id,
                escape_html(&section.title)
            )
        })
        .collect()
}

// The separator and anchor parts carry their own newlines, so each section
// opens with an empty line and the anchor marker is followed by one.
pub fn render_body(sections: &[Section]) -> String {
    let mut out: Vec<String> = Vec::new();
    for section in sections {
        // Title goes in unescaped; the TOC copy is escaped.
        out.push(format!("\n{SEPARATOR_PREFIX}{} ==", section.title));
        out.push(format!("{ANCHOR_PREFIX}{}]\n", section.id));
        for item in &section.items {
            out.push(match item {
                Item::Blank => String::new(),
                Item::Text { text } => escape_html(text),
                Item::Link { url } => render_link(url),
            });
        }
    }
    out.join("\n")
}

fn render_link(url: &str) -> String {
    format!("<a href=\"{url}\" rel=\"noreferrer noopener\" target=\"_blank\">{url}</a>")
}
