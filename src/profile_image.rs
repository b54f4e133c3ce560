use std::sync::Arc;

use leptos::prelude::*;

use crate::error::AppError;
use crate::services::{is_image_type, ImageFile, Notice, Notifier, ObjectStore, UploadOptions};

pub const BUCKET: &str = "portfolio";
pub const PROFILE_KEY: &str = "profile.jpg";
/// Seconds the CDN may cache the uploaded object.
pub const CACHE_CONTROL: u32 = 3600;
pub const FALLBACK_URL: &str =
    "https://images.unsplash.com/photo-1633332755192-727a05c4013d?q=80&w=800&auto=format&fit=crop";

/// Appends `t=<stamp>` so the browser refetches a replaced object.
pub fn cache_busted(url: &str, stamp: i64) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}t={stamp}")
}

/// The profile photo, mirrored from a fixed key in the object store.
#[derive(Clone, Copy)]
pub struct ProfileImage {
    url: RwSignal<String>,
    is_uploading: RwSignal<bool>,
    last_stamp: StoredValue<i64>,
    store: StoredValue<Arc<dyn ObjectStore>>,
    notifier: StoredValue<Arc<dyn Notifier>>,
}

impl ProfileImage {
    pub fn new(store: Arc<dyn ObjectStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            url: RwSignal::new(FALLBACK_URL.to_string()),
            is_uploading: RwSignal::new(false),
            last_stamp: StoredValue::new(0),
            store: StoredValue::new(store),
            notifier: StoredValue::new(notifier),
        }
    }

    pub fn url(&self) -> ReadSignal<String> {
        self.url.read_only()
    }

    pub fn is_uploading(&self) -> ReadSignal<bool> {
        self.is_uploading.read_only()
    }

    /// Millisecond stamp, bumped if the clock hasn't moved since the last one.
    fn next_stamp(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let mut stamp = now;
        self.last_stamp.update_value(|last| {
            stamp = now.max(*last + 1);
            *last = stamp;
        });
        stamp
    }

    /// Refreshes the displayed URL. Failures leave the current image in place.
    pub async fn fetch(&self) -> Option<String> {
        let store = self.store.get_value();
        match store.public_url(BUCKET, PROFILE_KEY).await {
            Ok(url) => {
                let url = cache_busted(&url, self.next_stamp());
                self.url.set(url.clone());
                Some(url)
            }
            Err(err) => {
                log::warn!("couldn't fetch profile image: {err}");
                None
            }
        }
    }

    /// Rejects anything that isn't an image, before its bytes are read.
    pub fn validate(&self, content_type: &str) -> Result<(), AppError> {
        if is_image_type(content_type) {
            return Ok(());
        }
        let err = AppError::InvalidFileType(content_type.to_string());
        self.notifier
            .with_value(|notifier| notifier.notify(Notice::Error(err.to_string())));
        Err(err)
    }

    /// Replaces the stored photo with `file` and refreshes the displayed URL.
    pub async fn upload(&self, file: ImageFile) -> Result<(), AppError> {
        self.validate(&file.content_type)?;
        let notifier = self.notifier.get_value();
        if self.is_uploading.get_untracked() {
            log::warn!("ignoring upload of {} while another is in flight", file.name);
            return Ok(());
        }

        self.is_uploading.set(true);
        let options = UploadOptions {
            upsert: true,
            cache_control: CACHE_CONTROL,
            content_type: file.content_type.clone(),
        };
        let store = self.store.get_value();
        let res = store.upload(BUCKET, PROFILE_KEY, &file, &options).await;
        let res = match res {
            Ok(()) => {
                self.fetch().await;
                notifier.notify(Notice::Success(
                    "Profile image updated successfully!".to_string(),
                ));
                Ok(())
            }
            Err(err) => {
                log::error!("profile image upload failed: {err}");
                notifier.notify(Notice::Error(err.to_string()));
                Err(err)
            }
        };
        self.is_uploading.set(false);
        res
    }
}
