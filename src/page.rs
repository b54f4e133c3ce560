use std::{sync::Arc, time::Duration};

use leptos::prelude::*;

use crate::config::config;
use crate::contact::{ContactController, ContactServices};
use crate::content::{filter_projects, Category, Project};
use crate::profile_image::ProfileImage;
use crate::scroll::ScrollObserver;
use crate::services::{Services, Timer, TimerId};
use crate::theme::{ThemeController, ThemeFlag};

/// How long the "copied" check mark stays after copying the email address.
pub const COPIED_DISPLAY: Duration = Duration::from_secs(2);

/// Every piece of mutable page state. Each controller is the only writer of
/// its own slice; components read through the accessors.
#[derive(Clone, Copy)]
pub struct PageState {
    pub theme: ThemeController,
    pub scroll: ScrollObserver,
    pub profile: ProfileImage,
    pub contact: ContactController,
    menu_open: RwSignal<bool>,
    active_tab: RwSignal<Category>,
    copied: RwSignal<bool>,
    copied_timer: StoredValue<Option<TimerId>>,
    timer: StoredValue<Arc<dyn Timer>>,
}

impl PageState {
    pub fn new(services: Services, flag: Arc<dyn ThemeFlag>) -> Self {
        Self {
            theme: ThemeController::new(services.slot.clone(), flag),
            scroll: ScrollObserver::new(),
            profile: ProfileImage::new(services.store.clone(), services.notifier.clone()),
            contact: ContactController::new(ContactServices {
                messages: services.messages.clone(),
                relay: services.relay.clone(),
                notifier: services.notifier.clone(),
                timer: services.timer.clone(),
                owner_email: config().owner_email.to_string(),
            }),
            menu_open: RwSignal::new(false),
            active_tab: RwSignal::new(Category::All),
            copied: RwSignal::new(false),
            copied_timer: StoredValue::new(None),
            timer: StoredValue::new(services.timer),
        }
    }

    pub fn menu_open(&self) -> ReadSignal<bool> {
        self.menu_open.read_only()
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    /// Called after an in-page navigation.
    pub fn close_menu(&self) {
        if self.menu_open.get_untracked() {
            self.menu_open.set(false);
        }
    }

    pub fn active_tab(&self) -> ReadSignal<Category> {
        self.active_tab.read_only()
    }

    pub fn select_tab(&self, tab: Category) {
        self.active_tab.set(tab);
    }

    /// Projects under the active tab; tracks `active_tab`.
    pub fn visible_projects(&self) -> Vec<&'static Project> {
        filter_projects(self.active_tab.get())
    }

    pub fn copied(&self) -> ReadSignal<bool> {
        self.copied.read_only()
    }

    /// Shows the "copied" indicator and schedules it to clear. Copying again
    /// restarts the countdown.
    pub fn mark_copied(&self) {
        self.copied.set(true);
        let copied = self.copied;
        let mut previous = None;
        self.copied_timer.update_value(|id| previous = id.take());
        let res = self.timer.with_value(|timer| {
            if let Some(id) = previous {
                timer.cancel(id);
            }
            timer.schedule(COPIED_DISPLAY, Box::new(move || copied.set(false)))
        });
        match res {
            Ok(id) => self.copied_timer.set_value(Some(id)),
            Err(err) => {
                log::warn!("couldn't schedule copied reset: {err}");
                self.copied.set(false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::{
        FakeMessages, FakeRelay, FakeStore, ManualTimer, MemorySlot, RecordingNotifier,
    };
    use crate::theme::Theme;

    struct NoFlag;

    impl ThemeFlag for NoFlag {
        fn apply(&self, _theme: Theme) {}
    }

    fn page(timer: Arc<ManualTimer>) -> PageState {
        let services = Services {
            store: Arc::new(FakeStore::new("https://cdn")),
            messages: Arc::new(FakeMessages::default()),
            relay: Arc::new(FakeRelay::default()),
            slot: Arc::new(MemorySlot::default()),
            notifier: Arc::new(RecordingNotifier::default()),
            timer,
        };
        PageState::new(services, Arc::new(NoFlag))
    }

    #[test]
    fn test_tab_selection_filters_projects() {
        let owner = Owner::new();
        owner.set();
        let state = page(Arc::new(ManualTimer::default()));

        assert_eq!(state.visible_projects().len(), crate::content::PROJECTS.len());
        state.select_tab(Category::Web);
        let ids = state.visible_projects().iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec!["4"]);
        assert_eq!(state.active_tab().get_untracked(), Category::Web);
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let owner = Owner::new();
        owner.set();
        let state = page(Arc::new(ManualTimer::default()));

        state.toggle_menu();
        assert!(state.menu_open().get_untracked());
        state.close_menu();
        assert!(!state.menu_open().get_untracked());
        state.close_menu();
        assert!(!state.menu_open().get_untracked());
    }

    #[test]
    fn test_copied_indicator_clears() {
        let owner = Owner::new();
        owner.set();
        let timer = Arc::new(ManualTimer::default());
        let state = page(timer.clone());

        state.mark_copied();
        assert!(state.copied().get_untracked());
        assert_eq!(timer.delays(), vec![COPIED_DISPLAY]);
        timer.fire_all();
        assert!(!state.copied().get_untracked());
    }

    #[test]
    fn test_copy_again_restarts_countdown() {
        let owner = Owner::new();
        owner.set();
        let timer = Arc::new(ManualTimer::default());
        let state = page(timer.clone());

        state.mark_copied();
        state.mark_copied();
        assert_eq!(*timer.cancelled.lock().unwrap(), vec![TimerId(0)]);
        assert!(state.copied().get_untracked());

        // Only the restarted countdown is still live
        assert_eq!(timer.fire_all(), 1);
        assert!(!state.copied().get_untracked());
    }
}
