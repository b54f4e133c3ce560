//! Browser backed collaborators. Outside of `hydrate` there is no window, so
//! these degrade to no-ops and the server render stays deterministic.
use std::time::Duration;

use codee::string::FromToStringCodec;
use leptos::prelude::{GetUntracked, Set, Signal, WriteSignal};
use leptos_use::storage::use_local_storage;

use super::{KeyValueSlot, Notice, Notifier, Timer, TimerId};
use crate::error::AppError;
use crate::theme::{Theme, ThemeFlag};

#[cfg(feature = "hydrate")]
fn js_err(err: wasm_bindgen::JsValue) -> AppError {
    AppError::Browser(format!("{err:?}"))
}

/// One `window.localStorage` entry, kept in sync by leptos-use.
///
/// Build it inside the component tree; the backing signals live in the
/// reactive owner that is current at construction.
#[derive(Debug, Clone, Copy)]
pub struct LocalStorageSlot {
    key: &'static str,
    value: Signal<String>,
    set_value: WriteSignal<String>,
}

impl LocalStorageSlot {
    pub fn new(key: &'static str) -> Self {
        let (value, set_value, _) = use_local_storage::<String, FromToStringCodec>(key);
        Self::from_signals(key, value, set_value)
    }

    pub fn from_signals(
        key: &'static str,
        value: Signal<String>,
        set_value: WriteSignal<String>,
    ) -> Self {
        Self {
            key,
            value,
            set_value,
        }
    }

    fn check_key(&self, key: &str) -> Result<(), AppError> {
        if key == self.key {
            Ok(())
        } else {
            Err(AppError::Browser(format!("no storage slot for {key}")))
        }
    }
}

impl KeyValueSlot for LocalStorageSlot {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        self.check_key(key)?;
        // An absent entry reads back as the codec default
        Ok(Some(self.value.get_untracked()).filter(|v| !v.is_empty()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.check_key(key)?;
        self.set_value.set(value.to_string());
        Ok(())
    }
}

/// Toggles the `dark` class on `<html>`, which every `dark:` utility keys off.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootClassFlag;

impl ThemeFlag for RootClassFlag {
    fn apply(&self, theme: Theme) {
        #[cfg(feature = "hydrate")]
        {
            let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            let classes = root.class_list();
            let res = if theme.is_dark() {
                classes.add_1("dark")
            } else {
                classes.remove_1("dark")
            };
            if let Err(err) = res {
                log::warn!("couldn't apply theme class: {err:?}");
            }
            if let Err(err) = root.set_attribute("style", &format!("color-scheme: {theme}")) {
                log::warn!("couldn't apply color scheme: {err:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }
}

/// Blocking `window.alert`, the page's only notification surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notice: Notice) {
        let text = match &notice {
            Notice::Success(s) | Notice::Error(s) => s.as_str(),
        };
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.alert_with_message(text) {
                    log::error!("couldn't show alert: {err:?}");
                }
                return;
            }
        }
        match &notice {
            Notice::Success(_) => log::info!("{text}"),
            Notice::Error(_) => log::error!("{text}"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn schedule(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce() + Send + 'static>,
    ) -> Result<TimerId, AppError> {
        #[cfg(feature = "hydrate")]
        {
            leptos::prelude::set_timeout_with_handle(callback, delay)
                .map(|handle| TimerId(handle.0))
                .map_err(js_err)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay, callback);
            Err(AppError::Browser("timers need a window".to_string()))
        }
    }

    fn cancel(&self, id: TimerId) {
        #[cfg(feature = "hydrate")]
        leptos::prelude::TimeoutHandle(id.0).clear();
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }
}

#[cfg(test)]
mod tests {
    use leptos::prelude::{Owner, RwSignal};

    use super::*;
    use crate::theme::THEME_KEY;

    fn slot() -> (LocalStorageSlot, RwSignal<String>) {
        let stored = RwSignal::new(String::new());
        let slot = LocalStorageSlot::from_signals(
            THEME_KEY,
            stored.read_only().into(),
            stored.write_only(),
        );
        (slot, stored)
    }

    #[test]
    fn test_local_storage_slot_reads_and_writes_entry() {
        let owner = Owner::new();
        owner.set();
        let (slot, stored) = slot();

        assert_eq!(slot.get(THEME_KEY), Ok(None));
        slot.set(THEME_KEY, "light").unwrap();
        assert_eq!(stored.get_untracked(), "light");
        assert_eq!(slot.get(THEME_KEY), Ok(Some("light".to_string())));
    }

    #[test]
    fn test_local_storage_slot_rejects_other_keys() {
        let owner = Owner::new();
        owner.set();
        let (slot, stored) = slot();

        assert!(matches!(slot.get("cmd_history"), Err(AppError::Browser(_))));
        assert!(slot.set("cmd_history", "ls").is_err());
        assert_eq!(stored.get_untracked(), "");
    }
}
