use leptos::prelude::*;

use super::cards::{ProjectCard, ServiceCard, SkillCard, TestimonialCard};
use super::section_header::SectionHeader;
use crate::content::{Category, SERVICES, SKILLS, TESTIMONIALS};
use crate::page::PageState;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-32 bg-slate-50 dark:bg-slate-950 relative overflow-hidden scroll-mt-24">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    badge="Expertise"
                    title="Toolbox & Skills"
                    subtitle="The modern tech stack I leverage to build robust, scalable, and high-performance applications."
                />
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {SKILLS.iter().map(|skill| view! { <SkillCard skill /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FilterTabs() -> impl IntoView {
    let state = expect_context::<PageState>();
    let active = state.active_tab();
    view! {
        <div class="flex flex-wrap justify-center gap-3 mb-20">
            {Category::TABS
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class=move || {
                                if active.get() == tab {
                                    "px-8 py-3 rounded-2xl text-sm font-black transition-all bg-blue-600 text-white shadow-xl shadow-blue-500/30 scale-105"
                                } else {
                                    "px-8 py-3 rounded-2xl text-sm font-black transition-all bg-slate-100 dark:bg-slate-800 text-slate-600 dark:text-slate-400 hover:bg-slate-200 dark:hover:bg-slate-700"
                                }
                            }
                            on:click=move |_| state.select_tab(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let state = expect_context::<PageState>();
    view! {
        <section id="projects" class="py-32 bg-white dark:bg-slate-900 scroll-mt-24">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    badge="Portfolio"
                    title="Impactful Works"
                    subtitle="Explore a selection of high-end mobile and web products I've engineered from concept to launch."
                />
                <FilterTabs />
                <Show
                    when=move || !state.visible_projects().is_empty()
                    fallback=|| {
                        view! {
                            <p class="text-center text-lg font-bold text-slate-500 dark:text-slate-400">
                                "Nothing to show in this category yet."
                            </p>
                        }
                    }
                >
                    <div class="grid lg:grid-cols-2 gap-12">
                        <For
                            each=move || state.visible_projects()
                            key=|project| project.id
                            children=|project| view! { <ProjectCard project /> }
                        />
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[component]
pub fn Offerings() -> impl IntoView {
    view! {
        <section id="services" class="py-32 bg-white dark:bg-slate-900 scroll-mt-24">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    badge="Offerings"
                    title="Professional Services"
                    subtitle="From MVP to enterprise scaling, I provide end-to-end expertise in modern mobile ecosystem."
                />
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(index, service)| view! { <ServiceCard service index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="py-32 bg-slate-50 dark:bg-slate-950 scroll-mt-24">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader badge="Kind Words" title="What Clients Say" />
                <div class="grid md:grid-cols-3 gap-8">
                    {TESTIMONIALS
                        .iter()
                        .map(|testimonial| view! { <TestimonialCard testimonial /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
