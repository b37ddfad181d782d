use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::ViewerConfig;
use crate::discovery::discover;
use crate::net::{BrowserTransport, Transport};
use crate::session::{hash_for, Session};
use crate::view::{Screen, SignalView, View};

#[component]
pub fn App() -> impl IntoView {
    let config = ViewerConfig::from_search(&window().location().search().unwrap_or_default());
    let probe = config.probe;
    let session = StoredValue::new(Session::new(config));

    let (toc, set_toc) = signal(String::new());
    let (listing, set_listing) = signal(String::new());
    let (files, set_files) = signal(Vec::<String>::new());
    let (screen, set_screen) = signal(Screen::default());
    let (current_file, set_current_file) = signal(String::new());
    let (query, set_query) = signal(String::new());
    let query_input = NodeRef::<html::Input>::new();

    let shell = SignalView {
        toc: set_toc,
        listing: set_listing,
        files: set_files,
        screen: set_screen,
    };

    // No cancellation: an older load that resolves later overwrites a newer one.
    let load_file = move |name: String| {
        let Some(url) = session.try_update_value(|s| s.select(&name)) else {
            return;
        };
        set_current_file.set(name.clone());
        spawn_local(async move {
            let result = match BrowserTransport::new() {
                Ok(transport) => transport.fetch_text(&url).await,
                Err(err) => Err(err),
            };
            session.update_value(|s| s.finish_load(&name, result, &shell));
        });
    };

    Effect::new(move |_| {
        spawn_local(async move {
            let transport = match BrowserTransport::new() {
                Ok(transport) => transport,
                Err(err) => {
                    session.update_value(|s| {
                        shell.show_candidates(&s.files);
                        s.report_unavailable(&err, &shell);
                    });
                    return;
                }
            };

            if probe {
                let config = session.with_value(|s| s.config.clone());
                let found = discover(&transport, &config).await;
                session.update_value(|s| s.set_files(found, &shell));
            } else {
                session.with_value(|s| shell.show_candidates(&s.files));
            }

            let hash = window().location().hash().unwrap_or_default();
            let initial = session.with_value(|s| {
                s.selection_from_hash(&hash)
                    .or_else(|| s.default_file().map(str::to_string))
            });
            if let Some(name) = initial {
                load_file(name);
            }
        });
    });

    let _ = window_event_listener(ev::hashchange, move |_| {
        let hash = window().location().hash().unwrap_or_default();
        if let Some(name) = session.with_value(|s| s.selection_from_hash(&hash)) {
            load_file(name);
        }
    });

    let on_query = move |ev| {
        let value = event_target_value(&ev);
        set_query.set(value.clone());
        session.update_value(|s| s.set_query(&value, &shell));
    };

    let on_clear = move |_| {
        set_query.set(String::new());
        session.update_value(|s| s.clear_query(&shell));
        if let Some(input) = query_input.get() {
            let _ = input.focus();
        }
    };

    let on_reload = move |_| {
        if let Some(name) = session.with_value(|s| s.current.clone()) {
            load_file(name);
        }
    };

    let content = move || match screen.get() {
        Screen::Loading => view! {
            <pre class="listing" style="color: var(--text-muted);">"loading…"</pre>
        }
        .into_any(),
        Screen::Listing => view! {
            <pre
                class="listing"
                style="margin: 0; padding: 1.5rem 2rem; white-space: pre-wrap; word-wrap: break-word; font-family: var(--font-editor); line-height: 1.5;"
                inner_html=move || listing.get()
            ></pre>
        }
        .into_any(),
        Screen::Fallback => view! {
            <div class="fallback" style="flex: 1; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 0.5rem; color: var(--text-muted);">
                <strong>"Something went wrong."</strong>
                <span>"The file could not be loaded. Pick another one or try again."</span>
            </div>
        }
        .into_any(),
        Screen::Notice(message) => view! {
            <pre class="notice" style="margin: 0; padding: 2rem; white-space: pre-wrap; color: var(--text-muted);">{message}</pre>
        }
        .into_any(),
    };

    view! {
        <main class="app-layout" style="display: flex; height: 100vh; width: 100vw; background: var(--bg-primary); color: var(--text-primary);">
            <nav class="sidebar" style="width: var(--sidebar-width); border-right: 1px solid var(--border-color); display: flex; flex-direction: column; background: var(--bg-secondary);">
                <div class="sidebar-header" style="height: var(--topbar-height); display: flex; align-items: center; justify-content: space-between; padding: 0 1rem; border-bottom: 1px solid var(--border-color); font-weight: 600; color: var(--accent-color);">
                    <span>"dir"</span>
                    <button
                        on:click=on_reload
                        style="background: transparent; border: none; font-size: 1.1rem; cursor: pointer; color: var(--text-muted);"
                        title="Reload"
                    >
                        "↻"
                    </button>
                </div>
                <div class="file-list" style="padding: 0.75rem 0.5rem; border-bottom: 1px solid var(--border-color);">
                    {move || files.get().into_iter().map(|f| {
                        let href = hash_for(&f);
                        let f_clone = f.clone();
                        let is_active = move || current_file.get() == f_clone;
                        view! {
                            <a
                                class="file-item"
                                href=href
                                style=move || format!("display: block; padding: 0.4rem 0.75rem; border-radius: var(--radius-md); text-decoration: none; font-size: 0.9rem; {}", if is_active() { "background: var(--accent-color); color: white;" } else { "color: var(--text-secondary);" })
                            >
                                {f}
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                </div>
                <div
                    class="toc"
                    style="flex: 1; overflow-y: auto; padding: 0.75rem 1rem; display: flex; flex-direction: column; gap: 0.25rem; font-size: 0.9rem;"
                    inner_html=move || toc.get()
                ></div>
            </nav>
            <section class="listing-pane" style="flex: 1; display: flex; flex-direction: column; overflow: hidden;">
                <header class="topbar" style="height: var(--topbar-height); border-bottom: 1px solid var(--border-color); display: flex; align-items: center; gap: 0.5rem; padding: 0 1.5rem;">
                    <input
                        node_ref=query_input
                        type="search"
                        placeholder="filter…"
                        spellcheck="false"
                        style="flex: 1; padding: 0.4rem 0.6rem; border-radius: 4px; border: 1px solid var(--border-color); background: var(--bg-secondary); color: var(--text-primary);"
                        prop:value=move || query.get()
                        on:input=on_query
                    />
                    <button
                        on:click=on_clear
                        style="background: transparent; border: 1px solid var(--border-color); border-radius: 4px; padding: 0.35rem 0.75rem; cursor: pointer; color: var(--text-muted);"
                    >
                        "clear"
                    </button>
                </header>
                <div style="flex: 1; overflow-y: auto;">{content}</div>
            </section>
        </main>
    }
}
