//! Diagnostic warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the color core to report lossy renderings and ignored input.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Whether warnings are printed at all (the CLI turns this off with `--quiet`)
static ENABLED: AtomicBool = AtomicBool::new(true);

/// Warn about lossy or ignored input (prints once per unique message).
///
/// Returns `true` if this call recorded a new warning. Messages are still
/// recorded while output is disabled, so re-enabling does not replay them.
///
/// # Example
/// ```
/// use tincture_common::warning::warn_once;
///
/// let _ = warn_once("render", "no keyword for #123456, rendering as hex");
/// ```
#[must_use = "returns whether the warning was new"]
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let is_new = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if is_new && ENABLED.load(Ordering::Relaxed) {
        let prefix = format!("[tincture {component}] ⚠");
        eprintln!("{} {}", prefix.yellow().bold(), message.yellow());
    }
    is_new
}

/// Turn warning output on or off.
pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

/// Clear all recorded warnings.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
