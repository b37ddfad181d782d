use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

pub const UNSORTED_TITLE: &str = "Unsorted";
pub const UNSORTED_ID: &str = "unsorted";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Item {
    Blank,
    Text { text: String },
    Link { url: String },
}

impl Item {
    pub fn is_blank(&self) -> bool {
        matches!(self, Item::Blank)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub id: String,
    pub items: Vec<Item>,
}

impl Section {
    pub fn new(title: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            id: id.into(),
            items: Vec::new(),
        }
    }

    pub fn unsorted() -> Self {
        Self::new(UNSORTED_TITLE, UNSORTED_ID)
    }

    pub fn from_title(title: &str) -> Self {
        let id = slugify(title);
        if id.is_empty() {
            Self::new(title, "section")
        } else {
            Self::new(title, id)
        }
    }

    /// Blank-only sections still render in the body but are left out of the TOC.
    pub fn has_content(&self) -> bool {
        self.items.iter().any(|item| !item.is_blank())
    }
}

/// Lower-cases `title` and collapses every run of characters outside
/// `[a-z0-9]` into one hyphen, trimming hyphens at both ends.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch);
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Trims like JavaScript's `String.prototype.trim`, which also drops U+FEFF.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

pub fn is_url(line: &str) -> bool {
    static RE_URL: OnceLock<Regex> = OnceLock::new();
    let re_url = RE_URL.get_or_init(|| Regex::new(r"(?i)^https?://[^\s\x{FEFF}]+$").expect("valid url regex"));
    re_url.is_match(trim_line(line))
}

pub fn parse(text: &str) -> Vec<Section> {
    let normalized = text.replace("\r\n", "\n");
    let mut sections = vec![Section::unsorted()];

    for raw in normalized.split('\n') {
        let line = trim_line(raw);

        if line.is_empty() {
            push_item(&mut sections, Item::Blank);
            continue;
        }

        if let Some(rest) = line.strip_prefix("# ") {
            sections.push(Section::from_title(trim_line(rest)));
            continue;
        }

        if is_url(line) {
            push_item(
                &mut sections,
                Item::Link {
                    url: line.to_string(),
                },
            );
            continue;
        }

        push_item(
            &mut sections,
            Item::Text {
                text: raw.to_string(),
            },
        );
    }

    sections
}

fn push_item(sections: &mut [Section], item: Item) {
    if let Some(current) = sections.last_mut() {
        current.items.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Item {
        Item::Text { text: s.to_string() }
    }

    fn link(s: &str) -> Item {
        Item::Link { url: s.to_string() }
    }

    #[test]
    fn empty_input_yields_unsorted_section() {
        let sections = parse("");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].id, "unsorted");
        assert_eq!(sections[0].title, "Unsorted");
        assert_eq!(sections[0].items, vec![Item::Blank]);
    }

    #[test]
    fn heading_starts_new_section_with_slug() {
        let sections = parse("# Foo Bar!");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].title, "Foo Bar!");
        assert_eq!(sections[1].id, "foo-bar");
    }

    #[test]
    fn slug_falls_back_to_section() {
        let sections = parse("# !!!");
        assert_eq!(sections[1].title, "!!!");
        assert_eq!(sections[1].id, "section");
    }

    #[test]
    fn slugify_collapses_runs_and_trims() {
        assert_eq!(slugify("  Rust -- Crates & Tools  "), "rust-crates-tools");
        assert_eq!(slugify("2024/Reading"), "2024-reading");
        assert_eq!(slugify("Café Notes"), "caf-notes");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn hash_without_space_is_text() {
        let sections = parse("#nospace");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].items, vec![text("#nospace")]);
    }

    #[test]
    fn bare_url_is_link_and_trimmed() {
        let sections = parse("   https://example.com/x  ");
        assert_eq!(sections[0].items, vec![link("https://example.com/x")]);
    }

    #[test]
    fn url_with_trailing_words_is_text() {
        let sections = parse("https://example.com/x see this");
        assert_eq!(sections[0].items, vec![text("https://example.com/x see this")]);
    }

    #[test]
    fn url_scheme_is_case_insensitive() {
        assert!(is_url("HTTPS://EXAMPLE.COM"));
        assert!(is_url("Http://a"));
        assert!(!is_url("https://"));
        assert!(!is_url("ftp://example.com"));
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        let sections = parse("\u{feff}\n\u{feff}# Tools \u{feff}\n\u{feff}https://example.org/tool\u{feff}");
        assert_eq!(sections[0].items, vec![Item::Blank]);
        assert_eq!(sections[1].title, "Tools");
        assert_eq!(sections[1].items, vec![link("https://example.org/tool")]);
        assert!(!is_url("https://a\u{feff}b"));
    }

    #[test]
    fn text_keeps_original_indentation() {
        let sections = parse("   indented note");
        assert_eq!(sections[0].items, vec![text("   indented note")]);
    }

    #[test]
    fn crlf_is_normalized() {
        let sections = parse("a\r\n# B\r\nhttps://b.example\r\n");
        assert_eq!(sections[0].items, vec![text("a")]);
        assert_eq!(
            sections[1].items,
            vec![link("https://b.example"), Item::Blank]
        );
    }

    #[test]
    fn duplicate_headings_keep_duplicate_ids() {
        let sections = parse("# Tools\nx\n# Tools\ny");
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[1].id, sections[2].id);
    }

    #[test]
    fn parses_end_to_end_example() {
        let sections = parse("# Tools\n\nhttps://example.org/tool\na note about it");
        assert_eq!(sections.len(), 2);
        assert!(sections[0].items.is_empty());
        assert_eq!(sections[1].id, "tools");
        assert_eq!(
            sections[1].items,
            vec![
                Item::Blank,
                link("https://example.org/tool"),
                text("a note about it"),
            ]
        );
    }

    #[test]
    fn has_content_ignores_blanks() {
        let sections = parse("\n\n# Empty\n\n# Full\nx");
        assert!(!sections[0].has_content());
        assert!(!sections[1].has_content());
        assert!(sections[2].has_content());
    }

    #[test]
    fn items_serialize_with_type_tag() {
        let json = serde_json::to_value(vec![Item::Blank, text("a"), link("https://x")]).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"type": "blank"},
                {"type": "text", "text": "a"},
                {"type": "link", "url": "https://x"},
            ])
        );
    }
}
