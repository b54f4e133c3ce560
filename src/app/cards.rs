use leptos::prelude::*;

use crate::content::{Project, Service, Skill, Testimonial};

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="group card-enter">
            <div class="relative aspect-[16/11] rounded-[2.5rem] overflow-hidden bg-slate-100 dark:bg-slate-800 mb-8 shadow-xl">
                <img
                    src=project.image
                    alt=project.title
                    loading="lazy"
                    class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-1000"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-slate-950/90 via-slate-900/20 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-500 flex items-end p-10">
                    <div class="flex gap-4">
                        {project
                            .live_link
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex items-center gap-2 px-6 py-3 bg-white text-slate-900 rounded-xl font-bold hover:bg-blue-600 hover:text-white transition-all shadow-xl"
                                    >
                                        "Live Demo ↗"
                                    </a>
                                }
                            })}
                        {project
                            .github_link
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label="Source code"
                                        class="p-3 bg-white/10 backdrop-blur-md text-white border border-white/20 rounded-xl hover:bg-white hover:text-slate-900 transition-all"
                                    >
                                        <i class="devicon-github-plain text-2xl" />
                                    </a>
                                }
                            })}
                    </div>
                </div>
                <div class="absolute top-6 left-6 px-4 py-2 bg-blue-600 text-white text-xs font-black uppercase tracking-widest rounded-xl shadow-xl">
                    {project.category.label()}
                </div>
            </div>
            <div class="px-4">
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .tech_stack
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-4 py-1.5 bg-blue-50 dark:bg-blue-900/10 text-blue-600 dark:text-blue-400 rounded-xl text-xs font-black tracking-wide border border-blue-500/10">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <h3 class="text-3xl font-black text-slate-900 dark:text-white mb-4 group-hover:text-blue-600 transition-colors">
                    {project.title}
                </h3>
                <p class="text-lg text-slate-600 dark:text-slate-400 mb-6 leading-relaxed">
                    {project.description}
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn SkillCard(skill: &'static Skill) -> impl IntoView {
    view! {
        <div class="group bg-white dark:bg-slate-900 p-8 rounded-[2rem] border border-slate-200 dark:border-slate-800 hover:shadow-2xl hover:shadow-blue-500/10 transition-all hover:-translate-y-2 section-content">
            <div class="flex justify-between items-end mb-6">
                <div class="p-4 bg-blue-50 dark:bg-blue-900/20 rounded-2xl group-hover:bg-blue-600 transition-colors text-blue-600 dark:text-blue-400 group-hover:text-white font-black font-mono">
                    "</>"
                </div>
                <div class="text-sm font-black font-mono text-blue-600">{format!("{}%", skill.level)}</div>
            </div>
            <h3 class="text-xl font-black text-slate-900 dark:text-white mb-2">{skill.name}</h3>
            <div class="h-1.5 w-full bg-slate-100 dark:bg-slate-800 rounded-full overflow-hidden mb-4">
                <div
                    class="h-full bg-gradient-to-r from-blue-600 to-indigo-500 skill-bar"
                    style:width=format!("{}%", skill.level)
                ></div>
            </div>
            <span class="text-xs font-black text-slate-400 uppercase tracking-widest">
                {skill.category.label()}
            </span>
        </div>
    }
}

#[component]
pub fn ServiceCard(service: &'static Service, index: usize) -> impl IntoView {
    view! {
        <div
            class="group p-10 rounded-[2.5rem] bg-slate-50 dark:bg-slate-800 hover:bg-blue-600 transition-all duration-500 shadow-sm hover:shadow-2xl hover:shadow-blue-500/30 hover:-translate-y-3 section-content"
            style:animation-delay=format!("{}ms", index * 100)
        >
            <div class="mb-10 p-5 bg-white dark:bg-slate-900 rounded-[1.5rem] inline-block shadow-lg group-hover:rotate-12 group-hover:bg-white group-hover:scale-110 transition-all duration-500">
                <span class=format!("text-3xl {}", service.icon.accent_class())>
                    {service.icon.glyph()}
                </span>
            </div>
            <h3 class="text-2xl font-black mb-5 text-slate-900 dark:text-white group-hover:text-white transition-colors">
                {service.title}
            </h3>
            <p class="text-lg text-slate-600 dark:text-slate-400 group-hover:text-blue-50 leading-relaxed transition-colors font-medium">
                {service.description}
            </p>
        </div>
    }
}

#[component]
pub fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    view! {
        <figure class="p-10 rounded-[2.5rem] bg-white dark:bg-slate-900 border border-slate-200 dark:border-slate-800 shadow-sm section-content">
            <blockquote class="text-lg text-slate-600 dark:text-slate-300 leading-relaxed mb-8">
                "“" {testimonial.comment} "”"
            </blockquote>
            <figcaption class="flex items-center gap-4">
                <img
                    src=testimonial.avatar
                    alt=testimonial.name
                    loading="lazy"
                    class="w-14 h-14 rounded-2xl object-cover"
                />
                <div>
                    <div class="font-black text-slate-900 dark:text-white">{testimonial.name}</div>
                    <div class="text-sm font-bold text-slate-500 dark:text-slate-400">
                        {format!("{}, {}", testimonial.role, testimonial.company)}
                    </div>
                </div>
            </figcaption>
        </figure>
    }
}
