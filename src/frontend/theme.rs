//! Dark mode persistence and application.
//!
//! The preference lives in localStorage under `darkMode` as a JSON
//! boolean, and is applied as a `dark` class on `<body>` so Tailwind's
//! class strategy picks it up.

use gloo_storage::{LocalStorage, Storage};

const DARK_MODE_STORAGE_KEY: &str = "darkMode";

/// Load the dark mode preference from localStorage.
pub fn load_dark_mode() -> bool {
    LocalStorage::get(DARK_MODE_STORAGE_KEY).unwrap_or(false)
}

/// Save the dark mode preference to localStorage.
pub fn save_dark_mode(on: bool) {
    let _ = LocalStorage::set(DARK_MODE_STORAGE_KEY, on);
}

/// Apply the preference as a class on the document body.
pub fn apply_dark_mode(on: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = if on {
            body.class_list().add_1("dark")
        } else {
            body.class_list().remove_1("dark")
        };
    }
}
