//! Warnings with colored terminal output.
//!
//! Each distinct warning is printed once; repeats are dropped until
//! [`clear_warnings`] is called.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // the set is only ever inserted into, so a poisoned guard is still usable
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Record a warning, returning `true` the first time a given
/// `component`/`message` pair is seen.
pub fn record_warning(component: &str, message: &str) -> bool {
    warned()
        .get_or_insert_with(HashSet::new)
        .insert(format!("[{component}] {message}"))
}

/// Warn about questionable input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("CLI", "empty value for 'class' renders a bare '.'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record_warning(component, message) {
        eprintln!("{}", format!("[Kestrel {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
