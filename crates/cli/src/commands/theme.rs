//! Theme preference commands.
//!
//! Preferences are stored in the file named by `SARANYA_STORAGE_PATH`, under
//! the same keys the web storefront uses.

use saranya_core::ThemeMode;
use saranya_storefront::config::StorefrontConfig;
use saranya_storefront::storage::FileStorage;
use saranya_storefront::style::DocumentStyle;
use saranya_storefront::theme::{ColorSlot, ThemeStore};
use tracing::info;

fn open(config: &StorefrontConfig) -> ThemeStore<FileStorage> {
    ThemeStore::load(
        FileStorage::open(&config.storage_path),
        DocumentStyle::new(),
        config.color_scheme,
    )
}

fn print(store: &ThemeStore<FileStorage>) {
    info!("Theme: {}", store.theme());
    for slot in ColorSlot::ALL {
        info!(
            "  {:<10} {} ({})",
            slot.as_str(),
            store.custom_colors().get(slot),
            store.hsl(slot)
        );
    }
    for (name, value) in store.surface().properties() {
        info!("  {name}: {value}");
    }
}

/// Print current preferences.
pub fn show(config: &StorefrontConfig) {
    print(&open(config));
}

/// Switch to `mode`.
pub fn set(config: &StorefrontConfig, mode: ThemeMode) {
    let mut store = open(config);
    store.set_theme(mode);
    print(&store);
}

/// Flip between light and dark.
pub fn toggle(config: &StorefrontConfig) {
    let mut store = open(config);
    store.toggle_theme();
    print(&store);
}

/// Overwrite one palette slot.
pub fn color(config: &StorefrontConfig, slot: ColorSlot, value: &str) {
    let mut store = open(config);
    store.set_custom_color(slot, value);
    print(&store);
}

/// Restore the palette defaults for the current mode.
pub fn reset(config: &StorefrontConfig) {
    let mut store = open(config);
    store.reset_colors();
    print(&store);
}
