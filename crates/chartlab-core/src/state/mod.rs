use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::events::{events, EventBus};
use crate::locale::Locale;

/// Demo view identifier type
pub type DemoViewId = uuid::Uuid;

/// Shared application state for the gallery
pub struct GalleryState {
    /// The event bus
    pub event_bus: Arc<EventBus>,

    /// Gallery settings
    pub settings: Arc<RwLock<GallerySettings>>,

    /// Bumped on every settings mutation so views can detect staleness cheaply
    revision: AtomicU64,
}

/// Gallery settings
#[derive(Debug, Clone)]
pub struct GallerySettings {
    /// Active locale for locale-aware demos
    pub locale: Locale,

    /// Whether to show the gallery side panel
    pub show_gallery_panel: bool,

    /// Theme settings
    pub theme: ThemeSettings,
}

/// Theme settings
#[derive(Debug, Clone)]
pub struct ThemeSettings {
    /// UI scale factor
    pub scale_factor: f32,

    /// Whether to use dark mode
    pub dark_mode: bool,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            show_gallery_panel: true,
            theme: ThemeSettings {
                scale_factor: 1.0,
                dark_mode: true,
            },
        }
    }
}

impl GalleryState {
    /// Create a new gallery state
    pub fn new() -> Self {
        Self {
            event_bus: Arc::new(EventBus::new()),
            settings: Arc::new(RwLock::new(GallerySettings::default())),
            revision: AtomicU64::new(0),
        }
    }

    /// The active locale
    pub fn locale(&self) -> Locale {
        self.settings.read().locale
    }

    /// Switch the locale and notify subscribers
    pub fn set_locale(&self, locale: Locale) {
        {
            let mut settings = self.settings.write();
            if settings.locale == locale {
                return;
            }
            settings.locale = locale;
        }
        info!("Switched locale to {:?}", locale);
        self.bump_revision();
        self.event_bus.publish(events::LocaleChanged { locale });
    }

    /// Switch between dark and light visuals and notify subscribers
    pub fn set_dark_mode(&self, dark_mode: bool) {
        {
            let mut settings = self.settings.write();
            if settings.theme.dark_mode == dark_mode {
                return;
            }
            settings.theme.dark_mode = dark_mode;
        }
        self.bump_revision();
        self.event_bus.publish(events::ThemeChanged { dark_mode });
    }

    /// Monotonic counter incremented on every settings mutation
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Relaxed)
    }

    fn bump_revision(&self) {
        self.revision.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::handler_from_fn;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_default_settings() {
        let state = GalleryState::new();
        let settings = state.settings.read();
        assert_eq!(settings.locale, Locale::En);
        assert!(settings.theme.dark_mode);
        assert!(settings.show_gallery_panel);
    }

    #[test]
    fn test_set_locale_bumps_revision_and_publishes() {
        let state = GalleryState::new();
        let notified = Arc::new(AtomicUsize::new(0));

        let notified_clone = notified.clone();
        state
            .event_bus
            .subscribe::<events::LocaleChanged>(handler_from_fn(move |event| {
                let changed = event
                    .as_any()
                    .downcast_ref::<events::LocaleChanged>()
                    .unwrap();
                assert_eq!(changed.locale, Locale::Ja);
                notified_clone.fetch_add(1, Ordering::SeqCst);
            }));

        let before = state.revision();
        state.set_locale(Locale::Ja);

        assert_eq!(state.locale(), Locale::Ja);
        assert!(state.revision() > before);
        assert_eq!(notified.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_set_locale_to_current_is_noop() {
        let state = GalleryState::new();
        let before = state.revision();
        state.set_locale(Locale::En);
        assert_eq!(state.revision(), before);
    }

    #[test]
    fn test_set_dark_mode_publishes_theme_change() {
        let state = GalleryState::new();
        let notified = Arc::new(AtomicUsize::new(0));

        let notified_clone = notified.clone();
        state
            .event_bus
            .subscribe::<events::ThemeChanged>(handler_from_fn(move |_| {
                notified_clone.fetch_add(1, Ordering::SeqCst);
            }));

        state.set_dark_mode(false);
        assert!(!state.settings.read().theme.dark_mode);
        assert_eq!(notified.load(Ordering::SeqCst), 1);

        // Already light, nothing to announce
        state.set_dark_mode(false);
        assert_eq!(notified.load(Ordering::SeqCst), 1);
    }
}
