use leptos::prelude::*;

#[component]
pub fn SectionHeader(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(optional)] badge: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="mb-16 text-center section-content">
            {badge
                .map(|badge| {
                    view! {
                        <span class="px-4 py-1.5 rounded-full bg-blue-100 dark:bg-blue-900/30 text-blue-600 dark:text-blue-400 text-xs font-bold uppercase tracking-widest mb-4 inline-block">
                            {badge}
                        </span>
                    }
                })}
            <h2 class="text-3xl md:text-5xl font-bold text-slate-900 dark:text-white mb-6">
                {title}
            </h2>
            <div class="h-1.5 w-20 bg-blue-600 mx-auto mb-6 rounded-full"></div>
            {subtitle
                .map(|subtitle| {
                    view! {
                        <p class="text-slate-600 dark:text-slate-400 max-w-2xl mx-auto text-lg leading-relaxed">
                            {subtitle}
                        </p>
                    }
                })}
        </div>
    }
}
