use std::{fmt, str::FromStr, sync::Arc};

use leptos::prelude::*;

use crate::error::AppError;
use crate::services::KeyValueSlot;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(AppError::InvalidTheme(other.to_string())),
        }
    }
}

/// Global style switch every component reads implicitly.
pub trait ThemeFlag: Send + Sync {
    fn apply(&self, theme: Theme);
}

/// Persisted preference, or dark when there is nothing usable stored.
pub fn initial_theme(slot: &dyn KeyValueSlot) -> Theme {
    match slot.get(THEME_KEY) {
        Ok(Some(value)) => value.parse().unwrap_or_else(|err| {
            log::warn!("ignoring stored theme: {err}");
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(err) => {
            log::warn!("couldn't read theme preference: {err}");
            Theme::default()
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeController {
    theme: RwSignal<Theme>,
    slot: StoredValue<Arc<dyn KeyValueSlot>>,
    flag: StoredValue<Arc<dyn ThemeFlag>>,
}

impl ThemeController {
    /// Starts at the default theme without touching storage, so the server
    /// render and the first hydrated frame agree.
    pub fn new(slot: Arc<dyn KeyValueSlot>, flag: Arc<dyn ThemeFlag>) -> Self {
        Self {
            theme: RwSignal::new(Theme::default()),
            slot: StoredValue::new(slot),
            flag: StoredValue::new(flag),
        }
    }

    pub fn theme(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }

    /// Loads the persisted preference and applies it.
    pub fn restore(&self) -> Theme {
        let theme = self.slot.with_value(|slot| initial_theme(slot.as_ref()));
        self.theme.set(theme);
        self.flag.with_value(|flag| flag.apply(theme));
        theme
    }

    pub fn toggle(&self) -> Theme {
        let next = self.theme.get_untracked().toggled();
        self.set(next);
        next
    }

    pub fn set(&self, theme: Theme) {
        self.theme.set(theme);
        self.flag.with_value(|flag| flag.apply(theme));
        // Losing persistence only costs the preference on the next visit
        if let Err(err) = self
            .slot
            .with_value(|slot| slot.set(THEME_KEY, theme.as_str()))
        {
            log::warn!("couldn't persist theme: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::services::fakes::MemorySlot;

    #[derive(Default)]
    struct RecordingFlag {
        applied: Mutex<Vec<Theme>>,
    }

    impl RecordingFlag {
        fn last(&self) -> Option<Theme> {
            self.applied.lock().unwrap().last().copied()
        }
    }

    impl ThemeFlag for RecordingFlag {
        fn apply(&self, theme: Theme) {
            self.applied.lock().unwrap().push(theme);
        }
    }

    fn stored(slot: &MemorySlot) -> Option<String> {
        slot.values.lock().unwrap().get(THEME_KEY).cloned()
    }

    #[test]
    fn test_parse_round_trip() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(" dark\n".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(AppError::InvalidTheme("sepia".to_string()))
        );
        assert_eq!(Theme::Light.to_string(), "light");
    }

    #[test]
    fn test_initial_theme_defaults_to_dark() {
        let slot = MemorySlot::default();
        assert_eq!(initial_theme(&slot), Theme::Dark);

        slot.set(THEME_KEY, "light").unwrap();
        assert_eq!(initial_theme(&slot), Theme::Light);

        slot.set(THEME_KEY, "garbage").unwrap();
        assert_eq!(initial_theme(&slot), Theme::Dark);

        let broken = MemorySlot {
            broken: true,
            ..Default::default()
        };
        assert_eq!(initial_theme(&broken), Theme::Dark);
    }

    #[test]
    fn test_toggle_twice_restores_preference() {
        let owner = Owner::new();
        owner.set();

        let slot = Arc::new(MemorySlot::default());
        slot.set(THEME_KEY, "light").unwrap();
        let flag = Arc::new(RecordingFlag::default());
        let controller = ThemeController::new(slot.clone(), flag.clone());

        assert_eq!(controller.restore(), Theme::Light);
        assert_eq!(flag.last(), Some(Theme::Light));

        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.theme().get_untracked(), Theme::Dark);
        assert_eq!(flag.last(), Some(Theme::Dark));
        assert_eq!(stored(&slot).as_deref(), Some("dark"));

        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(flag.last(), Some(Theme::Light));
        assert_eq!(stored(&slot).as_deref(), Some("light"));
    }

    #[test]
    fn test_broken_storage_still_switches_theme() {
        let owner = Owner::new();
        owner.set();

        let slot = Arc::new(MemorySlot {
            broken: true,
            ..Default::default()
        });
        let flag = Arc::new(RecordingFlag::default());
        let controller = ThemeController::new(slot, flag.clone());

        assert_eq!(controller.restore(), Theme::Dark);
        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(controller.theme().get_untracked(), Theme::Light);
        assert_eq!(flag.last(), Some(Theme::Light));
    }
}
