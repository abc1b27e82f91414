//! Site preferences
//!
//! The only persisted state: the dark-mode flag, stored in LocalStorage as
//! the literal strings "true"/"false" (compatible with values written by
//! earlier versions of the site).

/// User-facing site preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub dark_mode: bool,
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "darkMode";

    /// Theme toggle button label for the current mode
    pub fn theme_label(&self) -> &'static str {
        if self.dark_mode { "\u{2600}\u{fe0f}" } else { "\u{1f319}" }
    }

    /// Load preferences from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(value)) = storage.get_item(Self::STORAGE_KEY) {
                return Self {
                    dark_mode: value == "true",
                };
            }
        }

        log::info!("No stored preferences, using defaults");
        Self::default()
    }

    /// Save preferences to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let value = if self.dark_mode { "true" } else { "false" };
            let _ = storage.set_item(Self::STORAGE_KEY, value);
            log::info!("Preferences saved (dark_mode={})", self.dark_mode);
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light_mode() {
        assert!(!Settings::default().dark_mode);
    }

    #[test]
    fn test_theme_label_per_mode() {
        assert_eq!(Settings { dark_mode: true }.theme_label(), "☀️");
        assert_eq!(Settings { dark_mode: false }.theme_label(), "🌙");
    }
}
