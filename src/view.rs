use leptos::prelude::*;

pub const LOCAL_FILE_NOTICE: &str = "This page was opened straight from disk, so the browser will not let it read the text files next to it.\nServe the directory instead, e.g. `python3 -m http.server`, and open http://localhost:8000/.";

pub trait View {
    fn render_toc(&self, html: &str);
    fn render_listing(&self, html: &str);
    fn show_fallback(&self);
    fn show_notice(&self, message: &str);
    fn show_candidates(&self, files: &[String]);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Loading,
    Listing,
    Fallback,
    Notice(String),
}

/// `View` backed by Leptos signals; the `App` component reads the other halves.
#[derive(Clone, Copy)]
pub struct SignalView {
    pub toc: WriteSignal<String>,
    pub listing: WriteSignal<String>,
    pub files: WriteSignal<Vec<String>>,
    pub screen: WriteSignal<Screen>,
}

impl View for SignalView {
    fn render_toc(&self, html: &str) {
        self.toc.set(html.to_string());
    }

    fn render_listing(&self, html: &str) {
        self.listing.set(html.to_string());
        self.screen.set(Screen::Listing);
    }

    fn show_fallback(&self) {
        self.toc.set(String::new());
        self.screen.set(Screen::Fallback);
    }

    fn show_notice(&self, message: &str) {
        self.screen.set(Screen::Notice(message.to_string()));
    }

    fn show_candidates(&self, files: &[String]) {
        self.files.set(files.to_vec());
    }
}
