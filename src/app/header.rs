use leptos::{either::Either, prelude::*};

use crate::content::{NAV_LINKS, PERSONAL};
use crate::page::PageState;
use crate::theme::Theme;

/// Smooth-scrolls so the section with `id` sits just below the navbar.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        use crate::scroll::section_offset;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(el) = window.document().and_then(|d| d.get_element_by_id(id)) else {
            log::warn!("no section #{id}");
            return;
        };
        let top = el.get_bounding_client_rect().top();
        let scroll_y = window.scroll_y().unwrap_or_default();
        smooth_scroll(&window, section_offset(top, scroll_y));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            smooth_scroll(&window, 0.0);
        }
    }
}

#[cfg(feature = "hydrate")]
fn smooth_scroll(window: &web_sys::Window, top: f64) {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

#[component]
pub fn ProgressBar() -> impl IntoView {
    let state = expect_context::<PageState>();
    let progress = state.scroll.progress();
    view! {
        <div
            class="fixed top-0 left-0 right-0 h-1 bg-blue-600 z-[60] origin-left"
            style:transform=move || format!("scaleX({:.4})", progress.get())
        ></div>
    }
}

#[component]
fn ThemeToggle(#[prop(optional)] compact: bool) -> impl IntoView {
    let state = expect_context::<PageState>();
    let theme = state.theme.theme();
    let class = if compact {
        "p-2 rounded-xl bg-slate-100 dark:bg-slate-900"
    } else {
        "p-2.5 rounded-xl bg-slate-100 dark:bg-slate-900 text-slate-600 dark:text-slate-400 hover:bg-blue-600 hover:text-white transition-all shadow-sm"
    };
    view! {
        <button
            class=class
            aria-label="Toggle theme"
            on:click=move |_| {
                state.theme.toggle();
            }
        >
            {move || if theme.get() == Theme::Dark { "☀️" } else { "🌙" }}
        </button>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let state = expect_context::<PageState>();
    let scrolled = state.scroll.scrolled();
    let menu_open = state.menu_open();

    let go = move |id: &'static str| {
        scroll_to_section(id);
        state.close_menu();
    };

    view! {
        <nav class=move || {
            if scrolled.get() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-white/80 dark:bg-slate-950/80 backdrop-blur-xl border-b border-slate-200 dark:border-slate-800 py-2"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent py-4"
            }
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <button
                        class="flex items-center gap-3 group cursor-pointer"
                        on:click=move |_| scroll_to_top()
                    >
                        <div class="w-11 h-11 bg-gradient-to-tr from-blue-600 to-indigo-500 rounded-xl flex items-center justify-center shadow-lg shadow-blue-500/20 group-hover:rotate-6 transition-transform text-white font-black">
                            "</>"
                        </div>
                        <span class="text-2xl font-black tracking-tight text-slate-900 dark:text-white">
                            {PERSONAL.short_name}
                            <span class="text-blue-600">"."</span>
                        </span>
                    </button>

                    <div class="hidden md:flex items-center space-x-10">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <button
                                        class="text-sm font-bold text-slate-600 dark:text-slate-400 hover:text-blue-600 dark:hover:text-blue-400 transition-colors uppercase tracking-widest cursor-pointer"
                                        on:click=move |_| go(link.id)
                                    >
                                        {link.name}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <div class="h-6 w-px bg-slate-200 dark:bg-slate-800 mx-2"></div>
                        <ThemeToggle />
                    </div>

                    <div class="flex items-center gap-4 md:hidden">
                        <ThemeToggle compact=true />
                        <button
                            class="p-2 text-2xl text-slate-600 dark:text-slate-400"
                            aria-label="Toggle menu"
                            on:click=move |_| state.toggle_menu()
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>
            {move || {
                if menu_open.get() {
                    Either::Left(
                        view! {
                            <div class="md:hidden bg-white dark:bg-slate-900 border-b border-slate-200 dark:border-slate-800 overflow-hidden menu-enter">
                                <div class="px-6 pt-4 pb-8 space-y-2">
                                    {NAV_LINKS
                                        .iter()
                                        .map(|link| {
                                            view! {
                                                <button
                                                    class="w-full text-left block px-4 py-5 text-lg font-bold text-slate-700 dark:text-slate-300 hover:bg-blue-50 dark:hover:bg-blue-900/20 rounded-2xl transition-all"
                                                    on:click=move |_| go(link.id)
                                                >
                                                    {link.name}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        },
                    )
                } else {
                    Either::Right(())
                }
            }}
        </nav>
    }
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let state = expect_context::<PageState>();
    let scrolled = state.scroll.scrolled();
    view! {
        <button
            aria-label="Back to top"
            class=move || {
                if scrolled.get() {
                    "fixed bottom-10 right-10 p-5 bg-blue-600 text-white rounded-2xl shadow-2xl transition-all duration-500 z-50 hover:scale-110 active:scale-90 opacity-100 translate-y-0"
                } else {
                    "fixed bottom-10 right-10 p-5 bg-blue-600 text-white rounded-2xl shadow-2xl transition-all duration-500 z-50 opacity-0 translate-y-20 pointer-events-none"
                }
            }
            on:click=move |_| scroll_to_top()
        >
            "▲"
        </button>
    }
}
