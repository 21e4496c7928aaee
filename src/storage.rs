//! localStorage persistence.
//!
//! Key/value contract (all values are strings):
//! - `theme`    — raw theme name, e.g. `ocean-blue`
//! - `darkMode` — the literal `true` or `false`
//! - `cart` / `wishlist` — JSON arrays of product items
//!
//! Every mutation elsewhere in the crate flushes through here before the
//! handler returns; there is no batching.

use gloo_console::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const THEME: &str = "theme";
pub const DARK_MODE: &str = "darkMode";
pub const CART: &str = "cart";
pub const WISHLIST: &str = "wishlist";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn get(key: &str) -> Option<String> {
    storage()?.get_item(key).ok()?
}

pub fn set(key: &str, value: &str) {
    if let Some(s) = storage() {
        let _ = s.set_item(key, value);
    }
}

/// Read a JSON-serialized value. A missing key yields the default; a malformed
/// blob also yields the default, with a console warning instead of a fault.
pub fn get_json<T: DeserializeOwned + Default>(key: &str) -> T {
    let Some(raw) = get(key) else {
        return T::default();
    };
    match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(e) => {
            warn!("discarding malformed stored value", key, e.to_string());
            T::default()
        }
    }
}

pub fn set_json<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => set(key, &json),
        Err(e) => warn!("failed to serialize value for", key, e.to_string()),
    }
}
