//! Theme preference store.
//!
//! Owns the active [`ThemeMode`] and the custom colour palette. Both are
//! restored from durable storage at construction and written back on every
//! change. Every change is also mirrored onto a [`StyleSurface`]:
//!
//! - mode: exactly one of the `light` / `dark` class markers on the root
//! - palette: `--primary`, `--ring`, `--golden` (from primary) and `--accent`
//!   (from accent) as `"H S% L%"` strings

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use saranya_core::{Hsl, ThemeMode};

use crate::storage::{CUSTOM_COLORS_KEY, KeyValueStorage, THEME_KEY, set_best_effort};
use crate::style::{DocumentStyle, StyleSurface};

/// Style variables derived from the primary slot.
pub const PRIMARY_VARIABLES: [&str; 3] = ["--primary", "--ring", "--golden"];

/// Style variable derived from the accent slot.
pub const ACCENT_VARIABLE: &str = "--accent";

/// The platform's ambient colour-scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSchemeHint {
    /// The platform expresses no preference.
    #[default]
    NoPreference,
    /// The platform prefers a light scheme.
    Light,
    /// The platform prefers a dark scheme.
    Dark,
}

impl ColorSchemeHint {
    const fn mode(self) -> Option<ThemeMode> {
        match self {
            Self::NoPreference => None,
            Self::Light => Some(ThemeMode::Light),
            Self::Dark => Some(ThemeMode::Dark),
        }
    }
}

/// One of the four palette slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    Primary,
    Secondary,
    Accent,
    Background,
}

impl ColorSlot {
    /// All slots, in persisted order.
    pub const ALL: [Self; 4] = [Self::Primary, Self::Secondary, Self::Accent, Self::Background];

    /// The persisted key for this slot.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Background => "background",
        }
    }
}

impl std::fmt::Display for ColorSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ColorSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| format!("invalid colour slot: {s}"))
    }
}

/// The custom palette. Values are hex strings as entered; they are not
/// validated until converted to HSL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
}

impl CustomColors {
    /// Default palette for light mode.
    #[must_use]
    pub fn light() -> Self {
        Self {
            primary: "#d4a533".to_owned(),
            secondary: "#e8dcc8".to_owned(),
            accent: "#e67e22".to_owned(),
            background: "#faf8f5".to_owned(),
        }
    }

    /// Default palette for dark mode.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            primary: "#e4b843".to_owned(),
            secondary: "#2d2a24".to_owned(),
            accent: "#e67e22".to_owned(),
            background: "#1a1816".to_owned(),
        }
    }

    /// Default palette for `mode`.
    #[must_use]
    pub fn defaults_for(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Value of one slot.
    #[must_use]
    pub fn get(&self, slot: ColorSlot) -> &str {
        match slot {
            ColorSlot::Primary => &self.primary,
            ColorSlot::Secondary => &self.secondary,
            ColorSlot::Accent => &self.accent,
            ColorSlot::Background => &self.background,
        }
    }

    fn slot_mut(&mut self, slot: ColorSlot) -> &mut String {
        match slot {
            ColorSlot::Primary => &mut self.primary,
            ColorSlot::Secondary => &mut self.secondary,
            ColorSlot::Accent => &mut self.accent,
            ColorSlot::Background => &mut self.background,
        }
    }
}

/// Theme mode and palette for one session.
#[derive(Debug)]
pub struct ThemeStore<S, D = DocumentStyle> {
    mode: ThemeMode,
    colors: CustomColors,
    storage: S,
    surface: D,
}

impl<S: KeyValueStorage, D: StyleSurface> ThemeStore<S, D> {
    /// Restore preferences from `storage` and apply them to `surface`.
    ///
    /// Mode: the persisted value if it is exactly `"light"` or `"dark"`, else
    /// the platform hint, else light. Palette: the persisted JSON if it parses
    /// with all four slots, else the defaults for the chosen mode.
    pub fn load(storage: S, surface: D, hint: ColorSchemeHint) -> Self {
        let mode = restore_mode(&storage, hint);
        let colors = restore_colors(&storage, mode);
        debug!(%mode, ?colors, "Restored theme preferences");

        let mut store = Self {
            mode,
            colors,
            storage,
            surface,
        };
        store.apply_mode();
        store.apply_colors();
        store
    }

    /// Active theme mode.
    #[must_use]
    pub const fn theme(&self) -> ThemeMode {
        self.mode
    }

    /// Current palette.
    #[must_use]
    pub const fn custom_colors(&self) -> &CustomColors {
        &self.colors
    }

    /// Derived HSL for a slot, computed from the stored value.
    #[must_use]
    pub fn hsl(&self, slot: ColorSlot) -> Hsl {
        Hsl::from_hex_lossy(self.colors.get(slot))
    }

    /// The backing storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// The style surface the store writes to.
    #[must_use]
    pub const fn surface(&self) -> &D {
        &self.surface
    }

    /// Give back the storage and surface.
    pub fn into_parts(self) -> (S, D) {
        (self.storage, self.surface)
    }

    /// Switch to `mode`.
    #[instrument(skip(self))]
    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.apply_mode();
    }

    /// Flip between light and dark.
    pub fn toggle_theme(&mut self) {
        self.set_theme(self.mode.toggled());
    }

    /// Overwrite one palette slot, leaving the others untouched.
    #[instrument(skip(self, value))]
    pub fn set_custom_color(&mut self, slot: ColorSlot, value: impl AsRef<str>) {
        let value = value.as_ref();
        debug!(value, "Setting custom colour");
        value.clone_into(self.colors.slot_mut(slot));
        self.apply_colors();
    }

    /// Restore the default palette for the current mode.
    #[instrument(skip(self))]
    pub fn reset_colors(&mut self) {
        debug!(mode = %self.mode, "Resetting custom colours");
        self.colors = CustomColors::defaults_for(self.mode);
        self.apply_colors();
    }

    fn apply_mode(&mut self) {
        for mode in ThemeMode::ALL {
            self.surface.remove_root_class(mode.as_str());
        }
        self.surface.add_root_class(self.mode.as_str());
        set_best_effort(&mut self.storage, THEME_KEY, self.mode.as_str());
    }

    fn apply_colors(&mut self) {
        let primary = self.hsl(ColorSlot::Primary).to_string();
        for name in PRIMARY_VARIABLES {
            self.surface.set_property(name, &primary);
        }
        let accent = self.hsl(ColorSlot::Accent).to_string();
        self.surface.set_property(ACCENT_VARIABLE, &accent);

        match serde_json::to_string(&self.colors) {
            Ok(json) => set_best_effort(&mut self.storage, CUSTOM_COLORS_KEY, &json),
            Err(e) => warn!(error = %e, "Failed to serialize custom colours"),
        }
    }
}

fn restore_mode<S: KeyValueStorage>(storage: &S, hint: ColorSchemeHint) -> ThemeMode {
    storage
        .get(THEME_KEY)
        .and_then(|stored| stored.parse().ok())
        .or_else(|| hint.mode())
        .unwrap_or_default()
}

fn restore_colors<S: KeyValueStorage>(storage: &S, mode: ThemeMode) -> CustomColors {
    let Some(stored) = storage.get(CUSTOM_COLORS_KEY) else {
        return CustomColors::defaults_for(mode);
    };

    serde_json::from_str(&stored).unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring unparseable custom colours");
        CustomColors::defaults_for(mode)
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn fresh(hint: ColorSchemeHint) -> ThemeStore<MemoryStorage> {
        ThemeStore::load(MemoryStorage::new(), DocumentStyle::new(), hint)
    }

    fn stored(entries: &[(&str, &str)]) -> ThemeStore<MemoryStorage> {
        ThemeStore::load(
            MemoryStorage::with_entries(entries.iter().copied()),
            DocumentStyle::new(),
            ColorSchemeHint::NoPreference,
        )
    }

    #[test]
    fn test_defaults_to_light() {
        let store = fresh(ColorSchemeHint::NoPreference);
        assert_eq!(store.theme(), ThemeMode::Light);
        assert_eq!(store.custom_colors(), &CustomColors::light());
    }

    #[test]
    fn test_platform_hint_dark() {
        let store = fresh(ColorSchemeHint::Dark);
        assert_eq!(store.theme(), ThemeMode::Dark);
        assert_eq!(store.custom_colors(), &CustomColors::dark());
        assert!(store.surface().has_class("dark"));
    }

    #[test]
    fn test_persisted_mode_beats_hint() {
        let store = ThemeStore::load(
            MemoryStorage::with_entries([(THEME_KEY, "light")]),
            DocumentStyle::new(),
            ColorSchemeHint::Dark,
        );
        assert_eq!(store.theme(), ThemeMode::Light);
    }

    #[test]
    fn test_invalid_persisted_mode_falls_through() {
        let store = ThemeStore::load(
            MemoryStorage::with_entries([(THEME_KEY, "DARK")]),
            DocumentStyle::new(),
            ColorSchemeHint::NoPreference,
        );
        assert_eq!(store.theme(), ThemeMode::Light);
        assert_eq!(store.storage().get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_persisted_palette_restored() {
        let json = r##"{"primary":"#111111","secondary":"#222222","accent":"#333333","background":"#444444"}"##;
        let store = stored(&[(CUSTOM_COLORS_KEY, json)]);
        assert_eq!(store.custom_colors().primary, "#111111");
        assert_eq!(store.custom_colors().background, "#444444");
    }

    #[test]
    fn test_corrupt_palette_uses_mode_defaults() {
        let store = stored(&[(THEME_KEY, "dark"), (CUSTOM_COLORS_KEY, "{not json")]);
        assert_eq!(store.custom_colors(), &CustomColors::dark());
    }

    #[test]
    fn test_incomplete_palette_uses_mode_defaults() {
        let store = stored(&[(CUSTOM_COLORS_KEY, r##"{"primary":"#111111"}"##)]);
        assert_eq!(store.custom_colors(), &CustomColors::light());
    }

    #[test]
    fn test_load_applies_side_effects() {
        let store = fresh(ColorSchemeHint::NoPreference);
        let doc = store.surface();
        assert!(doc.has_class("light"));
        assert!(!doc.has_class("dark"));
        for name in PRIMARY_VARIABLES {
            assert_eq!(doc.property(name), Some("42 65% 52%"));
        }
        assert_eq!(doc.property(ACCENT_VARIABLE), Some("28 80% 52%"));
        assert_eq!(store.storage().get(THEME_KEY).as_deref(), Some("light"));
        assert!(store.storage().get(CUSTOM_COLORS_KEY).is_some());
    }

    #[test]
    fn test_toggle_swaps_exclusive_marker() {
        let mut store = fresh(ColorSchemeHint::NoPreference);
        store.toggle_theme();
        assert_eq!(store.theme(), ThemeMode::Dark);
        assert!(store.surface().has_class("dark"));
        assert!(!store.surface().has_class("light"));
        assert_eq!(store.storage().get(THEME_KEY).as_deref(), Some("dark"));

        store.toggle_theme();
        assert_eq!(store.surface().classes().collect::<Vec<_>>(), vec!["light"]);
    }

    #[test]
    fn test_mode_change_keeps_palette() {
        let mut store = fresh(ColorSchemeHint::NoPreference);
        store.set_theme(ThemeMode::Dark);
        assert_eq!(store.custom_colors(), &CustomColors::light());
    }

    #[test]
    fn test_set_custom_color_touches_one_slot() {
        let mut store = fresh(ColorSchemeHint::NoPreference);
        store.set_custom_color(ColorSlot::Secondary, "#123456");

        let colors = store.custom_colors();
        assert_eq!(colors.secondary, "#123456");
        assert_eq!(colors.primary, CustomColors::light().primary);
        assert_eq!(colors.accent, CustomColors::light().accent);
        assert_eq!(colors.background, CustomColors::light().background);

        let persisted: CustomColors =
            serde_json::from_str(&store.storage().get(CUSTOM_COLORS_KEY).unwrap()).unwrap();
        assert_eq!(&persisted, colors);
    }

    #[test]
    fn test_primary_roundtrip_has_no_drift() {
        let mut store = fresh(ColorSchemeHint::NoPreference);
        store.set_custom_color(ColorSlot::Primary, "#ff0000");
        store.set_custom_color(ColorSlot::Primary, "#d4a533");

        let expected = Hsl::from_hex_lossy("#d4a533");
        assert_eq!(store.hsl(ColorSlot::Primary), expected);
        assert_eq!(
            store.surface().property("--primary"),
            Some(expected.to_string().as_str())
        );
    }

    #[test]
    fn test_invalid_accent_is_zero() {
        let mut store = fresh(ColorSchemeHint::NoPreference);
        store.set_custom_color(ColorSlot::Accent, "#zzzzzz");
        assert_eq!(store.surface().property(ACCENT_VARIABLE), Some("0 0% 0%"));
        assert_eq!(store.custom_colors().accent, "#zzzzzz");
    }

    #[test]
    fn test_reset_uses_current_mode() {
        let mut store = fresh(ColorSchemeHint::NoPreference);
        store.set_custom_color(ColorSlot::Primary, "#000000");
        store.set_theme(ThemeMode::Dark);
        store.reset_colors();
        assert_eq!(store.custom_colors(), &CustomColors::dark());

        store.set_theme(ThemeMode::Light);
        store.reset_colors();
        assert_eq!(store.custom_colors(), &CustomColors::light());
    }

    #[test]
    fn test_storage_failure_keeps_memory_state() {
        let mut store = ThemeStore::load(
            MemoryStorage::new().read_only(),
            DocumentStyle::new(),
            ColorSchemeHint::NoPreference,
        );
        store.set_theme(ThemeMode::Dark);
        store.set_custom_color(ColorSlot::Accent, "#00ff00");

        assert_eq!(store.theme(), ThemeMode::Dark);
        assert_eq!(store.surface().property(ACCENT_VARIABLE), Some("120 100% 50%"));
        assert!(store.storage().is_empty());
    }

    #[test]
    fn test_slot_parse() {
        assert_eq!("accent".parse::<ColorSlot>().unwrap(), ColorSlot::Accent);
        assert!("Accent".parse::<ColorSlot>().is_err());
    }
}
