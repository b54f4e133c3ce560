use leptos::prelude::*;

use super::avatar::{PhotoUpload, ProfilePhoto};
use super::contact::ContactSection;
use super::header::scroll_to_section;
use super::section_header::SectionHeader;
use super::showcase::{Offerings, Projects, Skills, Testimonials};
use crate::content::{HIGHLIGHTS, PERSONAL};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <About />
        <Skills />
        <Projects />
        <Offerings />
        <Testimonials />
        <ContactSection />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="relative min-h-screen flex items-center pt-20 overflow-hidden">
            <div class="absolute top-0 left-1/2 -translate-x-1/2 w-full max-w-7xl h-full -z-10">
                <div class="absolute top-1/4 -right-1/4 w-[600px] h-[600px] bg-blue-500/10 blur-[120px] rounded-full animate-pulse"></div>
                <div class="absolute bottom-1/4 -left-1/4 w-[600px] h-[600px] bg-indigo-500/10 blur-[120px] rounded-full animate-pulse [animation-delay:2s]"></div>
            </div>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 w-full">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div class="text-left section-content">
                        <div class="inline-flex items-center gap-3 px-4 py-2 rounded-2xl bg-blue-500/10 text-blue-600 dark:text-blue-400 text-sm font-bold mb-8 border border-blue-500/20">
                            <span class="relative flex h-3 w-3">
                                <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-blue-400 opacity-75"></span>
                                <span class="relative inline-flex rounded-full h-3 w-3 bg-blue-500"></span>
                            </span>
                            "Available for High-Scale Flutter Projects"
                        </div>
                        <h1 class="text-6xl md:text-8xl font-black tracking-tight text-slate-900 dark:text-white mb-8 leading-[1.1]">
                            "Building the " <br />
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-600 via-indigo-500 to-purple-600">
                                "Future of Mobile."
                            </span>
                        </h1>
                        <p class="text-xl md:text-2xl text-slate-600 dark:text-slate-400 max-w-xl mb-12 leading-relaxed font-medium">
                            "I'm " <span class="text-slate-900 dark:text-white font-black">{PERSONAL.name}</span>
                            ". A Senior Flutter Developer with 5+ years of experience crafting exceptional mobile experiences."
                        </p>
                        <div class="flex flex-col sm:flex-row items-center gap-5">
                            <button
                                class="w-full sm:w-auto px-10 py-5 bg-blue-600 hover:bg-blue-700 text-white rounded-2xl font-black shadow-2xl shadow-blue-500/30 transition-all flex items-center justify-center gap-3 group"
                                on:click=move |_| scroll_to_section("projects")
                            >
                                "Explore My Portfolio"
                                <span class="group-hover:translate-x-1.5 transition-transform">"→"</span>
                            </button>
                            <button
                                class="w-full sm:w-auto px-10 py-5 bg-white dark:bg-slate-900 text-slate-900 dark:text-white border-2 border-slate-200 dark:border-slate-800 rounded-2xl font-black transition-all hover:border-blue-600"
                                on:click=move |_| scroll_to_section("contact")
                            >
                                "Let's Chat"
                            </button>
                        </div>
                    </div>
                    <div class="hidden lg:block relative section-content">
                        <div class="relative z-10 p-6 bg-white dark:bg-slate-900 rounded-[3rem] shadow-2xl border border-slate-100 dark:border-slate-800">
                            <div class="rounded-[2.5rem] overflow-hidden bg-slate-100 dark:bg-slate-800 aspect-[4/5] flex items-center justify-center relative">
                                <ProfilePhoto class="w-full h-full object-cover" />
                                <div class="absolute inset-0 bg-blue-600/10 mix-blend-multiply"></div>
                            </div>
                        </div>
                        <div class="absolute -inset-4 bg-gradient-to-tr from-blue-600 to-indigo-600 rounded-[3.5rem] -z-10 blur opacity-20"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-32 bg-white dark:bg-slate-900 relative scroll-mt-24">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid lg:grid-cols-2 gap-24 items-center">
                    <div class="relative section-content">
                        <div class="relative z-10 rounded-[3rem] overflow-hidden shadow-2xl group border-8 border-slate-50 dark:border-slate-800">
                            <ProfilePhoto class="w-full aspect-[4/5] object-cover group-hover:scale-105 transition-transform duration-1000" />
                            <div class="absolute inset-0 bg-blue-600/5 mix-blend-overlay group-hover:bg-transparent transition-all pointer-events-none"></div>
                            <PhotoUpload />
                        </div>
                    </div>
                    <div class="section-content">
                        <SectionHeader badge="The Architect" title="Professional Flutter Developer" />
                        <div class="-mt-8">
                            <h3 class="text-2xl font-black text-slate-900 dark:text-white mb-6">
                                {format!("Who is {}?", PERSONAL.short_name)}
                            </h3>
                            <p class="text-xl text-slate-700 dark:text-slate-300 mb-8 leading-relaxed font-medium">
                                "I am " <span class="text-blue-600 font-bold">{PERSONAL.name}</span>
                                ", a dedicated Flutter developer focused on high-performance mobile apps."
                            </p>
                            <p class="text-lg text-slate-600 dark:text-slate-400 mb-10 leading-relaxed">
                                "With over 5 years of professional experience, I have successfully launched multiple high-scale apps across iOS and Android. I believe in clean code, modular architecture (Bloc/Riverpod), and providing real value to the end users."
                            </p>
                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-6 mb-12">
                                {HIGHLIGHTS
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <div class="flex items-center gap-3">
                                                <span class="text-blue-600 shrink-0">"✔"</span>
                                                <span class="font-bold text-slate-700 dark:text-slate-300">{*item}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <div class="flex flex-wrap gap-4">
                                <button
                                    class="px-8 py-4 bg-slate-900 dark:bg-white text-white dark:text-slate-900 rounded-2xl font-black transition-all hover:scale-105 active:scale-95 text-center"
                                    on:click=move |_| scroll_to_section("contact")
                                >
                                    "Hire Me"
                                </button>
                                <SocialLinks />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SocialLinks(#[prop(optional)] inverted: bool) -> impl IntoView {
    let class = if inverted {
        "w-14 h-14 rounded-2xl bg-white/10 hover:bg-white hover:text-blue-700 flex items-center justify-center transition-all shadow-xl text-2xl"
    } else {
        "p-4 bg-slate-100 dark:bg-slate-800 text-slate-600 dark:text-slate-400 rounded-2xl hover:bg-blue-600 hover:text-white transition-all shadow-sm text-2xl"
    };
    view! {
        <div class="flex gap-3">
            <a href="#" class=class aria-label="GitHub Profile">
                <i class="devicon-github-plain"></i>
            </a>
            <a href="#" class=class aria-label="LinkedIn Profile">
                <i class="devicon-linkedin-plain"></i>
            </a>
            <a href="#" class=class aria-label="Twitter Profile">
                <i class="devicon-twitter-original"></i>
            </a>
        </div>
    }
}
