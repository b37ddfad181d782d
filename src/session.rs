use std::borrow::Cow;

use leptos::logging::{error, log};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::ViewerConfig;
use crate::document::parse;
use crate::error::LoadError;
use crate::filter::filter;
use crate::render::{render, Rendered};
use crate::view::{View, LOCAL_FILE_NOTICE};

const FRAGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'`');

pub fn hash_for(name: &str) -> String {
    format!("#{}", utf8_percent_encode(name, FRAGMENT))
}

/// Everything the viewer retains between events. Parse and render run once
/// per load; the filter always works from `rendered.body`. `rendered` is
/// `None` before the first load and after a failed one, and the filter
/// leaves the fallback or notice screen alone while it is.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub config: ViewerConfig,
    pub files: Vec<String>,
    pub current: Option<String>,
    pub rendered: Option<Rendered>,
    pub query: String,
}

impl Session {
    pub fn new(config: ViewerConfig) -> Self {
        let files = config.candidates.clone();
        Self {
            config,
            files,
            ..Default::default()
        }
    }

    pub fn set_files(&mut self, files: Vec<String>, view: &impl View) {
        self.files = files;
        view.show_candidates(&self.files);
    }

    pub fn default_file(&self) -> Option<&str> {
        self.files.first().map(String::as_str)
    }

    /// Returns the URL to fetch for `name`.
    pub fn select(&mut self, name: &str) -> String {
        self.current = Some(name.to_string());
        self.config.file_url(name)
    }

    /// Fragments naming a known file select it; anything else is an
    /// in-page anchor such as `#tools`.
    pub fn selection_from_hash(&self, hash: &str) -> Option<String> {
        let raw = hash.trim_start_matches('#');
        if raw.is_empty() {
            return None;
        }
        let name = percent_decode_str(raw).decode_utf8_lossy();
        self.files
            .iter()
            .find(|file| file.as_str() == name)
            .cloned()
    }

    pub fn finish_load(&mut self, name: &str, result: Result<String, LoadError>, view: &impl View) {
        match result {
            Ok(text) => {
                let sections = parse(&text);
                log!("loaded {name}: {} sections", sections.len());
                let rendered = render(&sections);
                view.render_toc(&rendered.toc);
                view.render_listing(&filter(&rendered.body, &self.query));
                self.rendered = Some(rendered);
            }
            Err(err) => {
                error!("failed to load {name}: {err}");
                self.rendered = None;
                view.show_fallback();
            }
        }
    }

    /// The page cannot fetch anything at all; nothing is attempted.
    pub fn report_unavailable(&mut self, err: &LoadError, view: &impl View) {
        error!("cannot load files: {err}");
        self.rendered = None;
        match err {
            LoadError::LocalFile => view.show_notice(LOCAL_FILE_NOTICE),
            _ => view.show_fallback(),
        }
    }

    pub fn listing(&self) -> Option<Cow<'_, str>> {
        self.rendered
            .as_ref()
            .map(|rendered| filter(&rendered.body, &self.query))
    }

    pub fn set_query(&mut self, query: &str, view: &impl View) {
        self.query = query.to_string();
        if let Some(listing) = self.listing() {
            view.render_listing(&listing);
        }
    }

    pub fn clear_query(&mut self, view: &impl View) {
        self.set_query("", view);
    }
}
