use leptos::{ev::Event, prelude::*};

use crate::config::config;
use crate::content::PERSONAL;
use crate::page::PageState;

#[cfg(feature = "hydrate")]
async fn read_file(file: web_sys::File) -> Result<crate::services::ImageFile, crate::error::AppError> {
    let buf = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|err| crate::error::AppError::Browser(format!("{err:?}")))?;
    Ok(crate::services::ImageFile {
        name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buf).to_vec(),
    })
}

#[component]
pub fn ProfilePhoto(#[prop(into)] class: String) -> impl IntoView {
    let state = expect_context::<PageState>();
    let url = state.profile.url();
    view! {
        <img src=move || url.get() alt=PERSONAL.name class=class />
    }
}

/// File picker that replaces the stored profile photo.
#[component]
pub fn PhotoUpload() -> impl IntoView {
    let state = expect_context::<PageState>();
    let uploading = state.profile.is_uploading();

    let on_change = move |ev: Event| {
        #[cfg(feature = "hydrate")]
        {
            use leptos::task::spawn_local;

            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let file = input.files().and_then(|files| files.get(0));
            // Clear the selection so picking the same file again fires change
            input.set_value("");
            let Some(file) = file else {
                return;
            };
            if state.profile.validate(&file.type_()).is_err() {
                return;
            }
            spawn_local(async move {
                match read_file(file).await {
                    Ok(image) => {
                        let _ = state.profile.upload(image).await;
                    }
                    Err(err) => log::error!("couldn't read selected file: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, state);
    };

    view! {
        <Show when=move || config().profile_upload>
            <label class=move || {
                if uploading.get() {
                    "absolute bottom-6 right-6 z-20 px-5 py-3 rounded-2xl bg-slate-900/70 text-white text-sm font-bold cursor-wait"
                } else {
                    "absolute bottom-6 right-6 z-20 px-5 py-3 rounded-2xl bg-slate-900/70 hover:bg-blue-600 text-white text-sm font-bold cursor-pointer transition-all"
                }
            }>
                {move || if uploading.get() { "Uploading…" } else { "📷 Change photo" }}
                <input
                    type="file"
                    accept="image/*"
                    class="hidden"
                    prop:disabled=move || uploading.get()
                    on:change=on_change
                />
            </label>
        </Show>
    }
}
