mod avatar;
mod cards;
mod contact;
mod footer;
mod header;
mod homepage;
mod section_header;
mod showcase;

use std::sync::Arc;

use leptos::{prelude::*, task::spawn_local};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{
    use_event_listener_with_options, use_raf_fn, use_window, UseEventListenerOptions,
    UseRafFnCallbackArgs,
};

use crate::content::PERSONAL;
use crate::page::PageState;
use crate::scroll::ScrollMetrics;
use crate::services::{RootClassFlag, Services};

use footer::Footer;
use header::{BackToTop, Navbar, ProgressBar};
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

/// Viewport and document sizes, read once per animation frame at most.
fn read_metrics() -> Option<ScrollMetrics> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let document_height = window.document()?.document_element()?.scroll_height() as f64;
        Some(ScrollMetrics {
            scroll_y: window.scroll_y().ok()?,
            document_height,
            viewport_height: window.inner_height().ok()?.as_f64()?,
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Feeds the scroll observer: a passive listener marks the page dirty and the
/// next animation frame samples it and advances the progress spring.
fn watch_scroll(state: PageState) {
    let dirty = StoredValue::new(true);
    let _ = use_event_listener_with_options(
        use_window(),
        leptos::ev::scroll,
        move |_| dirty.set_value(true),
        UseEventListenerOptions::default().passive(true),
    );
    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        if dirty.get_value() {
            dirty.set_value(false);
            if let Some(metrics) = read_metrics() {
                state.scroll.observe(metrics);
            }
        }
        state.scroll.tick(args.delta / 1000.0);
    });
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let state = PageState::new(Services::from_config(), Arc::new(RootClassFlag));
    provide_context(state);

    // Effects only run in the browser, after hydration
    Effect::new(move |_| {
        let theme = state.theme.restore();
        log::debug!("restored {theme} theme");
    });
    Effect::new(move |_| {
        spawn_local(async move {
            state.profile.fetch().await;
        });
    });
    watch_scroll(state);

    view! {
        <Title text=format!("{} - Portfolio", PERSONAL.name) />
        <Meta
            name="description"
            content=format!("{} - Senior Flutter developer building mobile, web and desktop apps.", PERSONAL.name)
        />

        <Router>
            <div class="min-h-screen bg-slate-50 dark:bg-slate-950 text-slate-900 dark:text-slate-100 transition-colors duration-500 overflow-x-hidden">
                <ProgressBar />
                <Navbar />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
                <BackToTop />
            </div>
        </Router>
    }
}
