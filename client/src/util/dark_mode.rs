//! Theme preference for the dark palette.
//!
//! The stored preference wins; without one the system color scheme decides.
//! The theme is applied as a `dark` class on `<html>`, which is what the
//! stylesheet keys its dark palette off. Server renders always start light.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "simple_kyc_dark";

/// Stored preference as text, for the storage round trip.
pub fn encode_preference(enabled: bool) -> &'static str {
    if enabled { "true" } else { "false" }
}

/// Decode a stored preference; anything but `"true"` is light.
pub fn decode_preference(raw: &str) -> bool {
    raw == "true"
}

/// Read the theme preference.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return decode_preference(&val);
            }
        }
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Toggle the `dark` class on the document element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let _ = root.class_list().toggle_with_force("dark", enabled);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, apply it and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(STORAGE_KEY, encode_preference(next));
        }
    }
    next
}
