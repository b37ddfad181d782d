use percent_encoding::percent_decode_str;

pub const DEFAULT_BASE_PATH: &str = "./";
pub const DEFAULT_CANDIDATES: &[&str] = &["dir.txt", "links.txt", "bookmarks.txt", "notes.txt"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerConfig {
    pub base_path: String,
    pub candidates: Vec<String>,
    pub probe: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            candidates: DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect(),
            probe: true,
        }
    }
}

impl ViewerConfig {
    /// Applies `?base=..&files=a.txt,b.txt&probe=0` overrides on top of the defaults.
    /// Unknown keys and empty values are ignored.
    pub fn from_search(search: &str) -> Self {
        let mut config = Self::default();
        for pair in search.trim_start_matches('?').split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode(value);
            match key {
                "base" if !value.is_empty() => {
                    config.base_path = if value.ends_with('/') {
                        value
                    } else {
                        format!("{value}/")
                    };
                }
                "files" => {
                    let files: Vec<String> = value
                        .split(',')
                        .map(str::trim)
                        .filter(|f| !f.is_empty())
                        .map(str::to_string)
                        .collect();
                    if !files.is_empty() {
                        config.candidates = files;
                    }
                }
                "probe" => config.probe = !matches!(value.as_str(), "0" | "false" | "off"),
                _ => {}
            }
        }
        config
    }

    pub fn file_url(&self, name: &str) -> String {
        format!("{}{}", self.base_path, name)
    }
}

pub fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
