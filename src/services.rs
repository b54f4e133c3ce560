//! Seams to everything outside the page: hosted backends, browser storage,
//! timers and user-facing alerts.
//!
//! Network futures are `?Send` because the browser fetch API is single threaded;
//! the trait objects themselves are `Send + Sync` so they can live in Leptos
//! arena storage on both the server and the client.
mod browser;
mod emailjs;
mod supabase;

pub use browser::{AlertNotifier, BrowserTimer, LocalStorageSlot, RootClassFlag};
pub use emailjs::EmailJsClient;
pub use supabase::SupabaseClient;

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use serde::Serialize;

use crate::error::AppError;
use crate::theme::THEME_KEY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// `image/*` media types, whatever the case or padding.
pub fn is_image_type(content_type: &str) -> bool {
    content_type
        .trim()
        .to_ascii_lowercase()
        .starts_with("image/")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    pub upsert: bool,
    /// Seconds
    pub cache_control: u32,
    pub content_type: String,
}

#[async_trait(?Send)]
pub trait ObjectStore: Send + Sync {
    async fn public_url(&self, bucket: &str, key: &str) -> Result<String, AppError>;

    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        file: &ImageFile,
        options: &UploadOptions,
    ) -> Result<(), AppError>;
}

/// Row written to the `messages` table for every contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRecord {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[async_trait(?Send)]
pub trait MessageStore: Send + Sync {
    async fn insert(&self, record: &MessageRecord) -> Result<(), AppError>;
}

/// Template parameters understood by the contact email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_email: String,
}

#[async_trait(?Send)]
pub trait EmailRelay: Send + Sync {
    async fn send(&self, params: &EmailParams) -> Result<(), AppError>;
}

pub trait KeyValueSlot: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub i32);

pub trait Timer: Send + Sync {
    fn schedule(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce() + Send + 'static>,
    ) -> Result<TimerId, AppError>;

    fn cancel(&self, id: TimerId);
}

/// The collaborators the page controllers talk to.
#[derive(Clone)]
pub struct Services {
    pub store: Arc<dyn ObjectStore>,
    pub messages: Arc<dyn MessageStore>,
    pub relay: Arc<dyn EmailRelay>,
    pub slot: Arc<dyn KeyValueSlot>,
    pub notifier: Arc<dyn Notifier>,
    pub timer: Arc<dyn Timer>,
}

impl Services {
    /// Hosted backends from the build configuration plus browser primitives.
    /// Must run under a reactive owner.
    pub fn from_config() -> Self {
        let supabase = Arc::new(SupabaseClient::from_config());
        Self {
            store: supabase.clone(),
            messages: supabase,
            relay: Arc::new(EmailJsClient::from_config()),
            slot: Arc::new(LocalStorageSlot::new(THEME_KEY)),
            notifier: Arc::new(AlertNotifier),
            timer: Arc::new(BrowserTimer),
        }
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    //! In-memory collaborators that record every call.
    use std::{
        collections::HashMap,
        sync::{
            atomic::{AtomicUsize, Ordering},
            Mutex,
        },
    };

    use super::*;

    #[derive(Default)]
    pub struct FakeStore {
        pub base_url: String,
        pub fail_fetch: bool,
        pub upload_error: Option<String>,
        pub fetches: AtomicUsize,
        pub uploads: Mutex<Vec<(String, String, ImageFile, UploadOptions)>>,
    }

    impl FakeStore {
        pub fn new(base_url: &str) -> Self {
            Self {
                base_url: base_url.to_string(),
                ..Default::default()
            }
        }

        pub fn calls(&self) -> usize {
            self.fetches.load(Ordering::SeqCst) + self.uploads.lock().unwrap().len()
        }
    }

    #[async_trait(?Send)]
    impl ObjectStore for FakeStore {
        async fn public_url(&self, bucket: &str, key: &str) -> Result<String, AppError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.fail_fetch {
                return Err(AppError::Network("offline".to_string()));
            }
            Ok(format!("{}/{}/{}", self.base_url, bucket, key))
        }

        async fn upload(
            &self,
            bucket: &str,
            key: &str,
            file: &ImageFile,
            options: &UploadOptions,
        ) -> Result<(), AppError> {
            self.uploads.lock().unwrap().push((
                bucket.to_string(),
                key.to_string(),
                file.clone(),
                options.clone(),
            ));
            match &self.upload_error {
                Some(msg) => Err(AppError::Storage(msg.clone())),
                None => Ok(()),
            }
        }
    }

    #[derive(Default)]
    pub struct FakeMessages {
        pub fail: bool,
        pub records: Mutex<Vec<MessageRecord>>,
    }

    #[async_trait(?Send)]
    impl MessageStore for FakeMessages {
        async fn insert(&self, record: &MessageRecord) -> Result<(), AppError> {
            self.records.lock().unwrap().push(record.clone());
            if self.fail {
                Err(AppError::Datastore("relation \"messages\" does not exist".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    pub struct FakeRelay {
        pub error: Option<String>,
        pub sent: Mutex<Vec<EmailParams>>,
    }

    #[async_trait(?Send)]
    impl EmailRelay for FakeRelay {
        async fn send(&self, params: &EmailParams) -> Result<(), AppError> {
            self.sent.lock().unwrap().push(params.clone());
            match &self.error {
                Some(msg) => Err(AppError::Relay(msg.clone())),
                None => Ok(()),
            }
        }
    }

    #[derive(Default)]
    pub struct MemorySlot {
        pub values: Mutex<HashMap<String, String>>,
        pub broken: bool,
    }

    impl KeyValueSlot for MemorySlot {
        fn get(&self, key: &str) -> Result<Option<String>, AppError> {
            if self.broken {
                return Err(AppError::Browser("storage disabled".to_string()));
            }
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
            if self.broken {
                return Err(AppError::Browser("quota exceeded".to_string()));
            }
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct RecordingNotifier {
        pub notices: Mutex<Vec<Notice>>,
    }

    impl RecordingNotifier {
        pub fn notices(&self) -> Vec<Notice> {
            self.notices.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.notices.lock().unwrap().push(notice);
        }
    }

    type Pending = (TimerId, Duration, Box<dyn FnOnce() + Send + 'static>);

    /// Timer that only fires when the test says so.
    #[derive(Default)]
    pub struct ManualTimer {
        next: AtomicUsize,
        pending: Mutex<Vec<Pending>>,
        pub cancelled: Mutex<Vec<TimerId>>,
    }

    impl ManualTimer {
        pub fn delays(&self) -> Vec<Duration> {
            self.pending.lock().unwrap().iter().map(|p| p.1).collect()
        }

        /// Runs every callback that has not been cancelled.
        pub fn fire_all(&self) -> usize {
            let cancelled = self.cancelled.lock().unwrap().clone();
            let mut pending = self.pending.lock().unwrap();
            let (live, keep): (Vec<_>, Vec<_>) = std::mem::take(&mut *pending)
                .into_iter()
                .partition(|p| !cancelled.contains(&p.0));
            *pending = keep;
            drop(pending);
            let count = live.len();
            for (_, _, callback) in live {
                callback();
            }
            count
        }

        /// Runs a callback even if it was cancelled, like a late browser tick.
        pub fn fire_cancelled(&self) -> usize {
            let cancelled = self.cancelled.lock().unwrap().clone();
            let mut pending = self.pending.lock().unwrap();
            let (stale, keep): (Vec<_>, Vec<_>) = std::mem::take(&mut *pending)
                .into_iter()
                .partition(|p| cancelled.contains(&p.0));
            *pending = keep;
            drop(pending);
            let count = stale.len();
            for (_, _, callback) in stale {
                callback();
            }
            count
        }
    }

    impl Timer for ManualTimer {
        fn schedule(
            &self,
            delay: Duration,
            callback: Box<dyn FnOnce() + Send + 'static>,
        ) -> Result<TimerId, AppError> {
            let id = TimerId(self.next.fetch_add(1, Ordering::SeqCst) as i32);
            self.pending.lock().unwrap().push((id, delay, callback));
            Ok(id)
        }

        fn cancel(&self, id: TimerId) {
            // Keep the callback around so tests can simulate a stale tick
            self.cancelled.lock().unwrap().push(id);
        }
    }
}
