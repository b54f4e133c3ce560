use leptos::{either::Either, ev::SubmitEvent, prelude::*, task::spawn_local};

use super::homepage::SocialLinks;
use crate::contact::{ContactField, SubmissionStatus};
use crate::content::PERSONAL;
use crate::page::PageState;

const INPUT_CLASS: &str = "w-full px-8 py-5 rounded-2xl bg-slate-50 dark:bg-slate-800 border-2 border-transparent focus:border-blue-600 focus:bg-white dark:focus:bg-slate-900 outline-none transition-all dark:text-white font-medium";

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-32 bg-white dark:bg-slate-900 relative scroll-mt-24">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="relative rounded-[4rem] overflow-hidden shadow-2xl bg-slate-50 dark:bg-slate-950 section-content">
                    <div class="grid lg:grid-cols-5 h-full">
                        <ContactDetails />
                        <div class="lg:col-span-3 p-12 md:p-20 flex items-center">
                            <ContactForm />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    let state = expect_context::<PageState>();
    let copied = state.copied();
    let copy_script = format!("navigator.clipboard.writeText('{}')", PERSONAL.email);

    view! {
        <div class="lg:col-span-2 bg-blue-700 p-12 md:p-20 text-white relative flex flex-col justify-between overflow-hidden">
            <div class="relative z-10">
                <h2 class="text-5xl font-black mb-8 leading-tight">"Have a project in mind?"</h2>
                <p class="text-blue-100 mb-16 text-xl leading-relaxed font-medium">
                    "I'm currently available for freelance work and full-time roles. Let's discuss how I can help your business grow."
                </p>
                <div class="space-y-10">
                    <div class="flex items-center gap-6 group">
                        <div class="w-16 h-16 rounded-2xl bg-white/10 flex items-center justify-center text-2xl">
                            "✉"
                        </div>
                        <div class="flex flex-col">
                            <span class="text-blue-200 text-sm font-bold uppercase tracking-widest mb-1">
                                "Email"
                            </span>
                            <button
                                class="text-xl font-black text-left hover:underline cursor-pointer"
                                title="Copy to clipboard"
                                onclick=copy_script
                                on:click=move |_| state.mark_copied()
                            >
                                {PERSONAL.email}
                                <span class="ml-3 text-sm font-bold text-blue-200">
                                    {move || if copied.get() { "✓ copied" } else { "" }}
                                </span>
                            </button>
                        </div>
                    </div>
                    <div class="flex items-center gap-6 group">
                        <div class="w-16 h-16 rounded-2xl bg-white/10 flex items-center justify-center text-2xl">
                            "☎"
                        </div>
                        <div class="flex flex-col">
                            <span class="text-blue-200 text-sm font-bold uppercase tracking-widest mb-1">
                                "Phone"
                            </span>
                            <span class="text-xl font-black">{PERSONAL.phone}</span>
                        </div>
                    </div>
                </div>
            </div>
            <div class="mt-20 relative z-10">
                <SocialLinks inverted=true />
            </div>
            <div class="absolute -bottom-32 -right-32 w-96 h-96 bg-white/10 rounded-full blur-3xl"></div>
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let state = expect_context::<PageState>();
    let contact = state.contact;
    let form = contact.form();
    let status = contact.status();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let _ = contact.submit().await;
        });
    };

    view! {
        {move || {
            if status.get() == SubmissionStatus::Submitted {
                Either::Left(
                    view! {
                        <div class="w-full text-center py-20 card-enter">
                            <div class="w-24 h-24 bg-green-500 text-white rounded-[2rem] flex items-center justify-center mx-auto mb-10 shadow-2xl shadow-green-500/30 text-5xl">
                                "✓"
                            </div>
                            <h3 class="text-4xl font-black mb-6 dark:text-white">"Message Sent!"</h3>
                            <p class="text-slate-600 dark:text-slate-400 text-xl font-medium">
                                "I've received your inquiry and will reach out within 24 hours."
                            </p>
                            <button
                                class="mt-12 px-10 py-4 bg-slate-900 dark:bg-white dark:text-slate-900 text-white rounded-2xl font-black hover:scale-105 transition-all"
                                on:click=move |_| contact.dismiss()
                            >
                                "Send Another Message"
                            </button>
                        </div>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <form class="w-full space-y-8" on:submit=on_submit>
                            <div class="grid md:grid-cols-2 gap-8">
                                <div class="space-y-3">
                                    <label class="text-sm font-black text-slate-500 uppercase tracking-widest ml-1">
                                        "Full Name"
                                    </label>
                                    <input
                                        type="text"
                                        required
                                        placeholder="John Doe"
                                        class=INPUT_CLASS
                                        prop:value=move || form.with(|f| f.name.clone())
                                        on:input=move |ev| {
                                            contact.set_field(ContactField::Name, event_target_value(&ev))
                                        }
                                    />
                                </div>
                                <div class="space-y-3">
                                    <label class="text-sm font-black text-slate-500 uppercase tracking-widest ml-1">
                                        "Email Address"
                                    </label>
                                    <input
                                        type="email"
                                        required
                                        placeholder="john@example.com"
                                        class=INPUT_CLASS
                                        prop:value=move || form.with(|f| f.email.clone())
                                        on:input=move |ev| {
                                            contact.set_field(ContactField::Email, event_target_value(&ev))
                                        }
                                    />
                                </div>
                            </div>
                            <div class="space-y-3">
                                <label class="text-sm font-black text-slate-500 uppercase tracking-widest ml-1">
                                    "Your Message"
                                </label>
                                <textarea
                                    required
                                    rows="6"
                                    placeholder="Tell me about your project goals..."
                                    class=format!("{INPUT_CLASS} resize-none")
                                    prop:value=move || form.with(|f| f.message.clone())
                                    on:input=move |ev| {
                                        contact.set_field(ContactField::Message, event_target_value(&ev))
                                    }
                                ></textarea>
                            </div>
                            <button
                                type="submit"
                                prop:disabled=move || status.get() == SubmissionStatus::Submitting
                                class="w-full py-6 bg-blue-600 hover:bg-blue-700 disabled:bg-slate-400 text-white rounded-[1.5rem] font-black text-lg shadow-2xl shadow-blue-500/30 transition-all flex items-center justify-center gap-4 group"
                            >
                                {move || {
                                    if status.get() == SubmissionStatus::Submitting {
                                        "Sending…"
                                    } else {
                                        "Send Inquiry ➤"
                                    }
                                }}
                            </button>
                        </form>
                    },
                )
            }
        }}
    }
}
