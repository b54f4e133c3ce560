use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use super::header::scroll_to_section;
use crate::content::{NAV_LINKS, PERSONAL};

/// Year the site was built, for the copyright line.
fn copyright_year(build_time: &str) -> i32 {
    match DateTime::parse_from_rfc3339(build_time) {
        Ok(dt) => dt.year(),
        Err(_) => Utc::now().year(),
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = copyright_year(env!("BUILD_TIME"));
    view! {
        <footer class="py-16 bg-slate-50 dark:bg-slate-950 border-t border-slate-200 dark:border-slate-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row justify-between items-center gap-10">
                    <div class="text-center md:text-left">
                        <div class="text-2xl font-black text-slate-900 dark:text-white mb-2">
                            {PERSONAL.short_name}
                            <span class="text-blue-600">"."</span>
                        </div>
                        <p class="text-slate-500 dark:text-slate-400 font-medium">
                            {PERSONAL.location}
                        </p>
                    </div>
                    <nav class="flex flex-wrap justify-center gap-8">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <button
                                        class="text-sm font-bold text-slate-500 dark:text-slate-400 hover:text-blue-600 uppercase tracking-widest transition-colors cursor-pointer"
                                        on:click=move |_| scroll_to_section(link.id)
                                    >
                                        {link.name}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <a
                        href=format!("mailto:{}", PERSONAL.email)
                        class="text-slate-600 dark:text-slate-400 font-bold hover:text-blue-600 transition-colors"
                    >
                        {PERSONAL.email}
                    </a>
                </div>
                <p class="mt-12 text-center text-sm text-slate-400 dark:text-slate-500 font-medium">
                    {format!("© {year} {}. Built with Rust and Leptos.", PERSONAL.name)}
                </p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_year_from_build_time() {
        assert_eq!(copyright_year("2025-03-14T09:26:53.589793+00:00"), 2025);
    }

    #[test]
    fn test_copyright_year_falls_back_to_now() {
        assert_eq!(copyright_year("not a timestamp"), Utc::now().year());
    }
}
