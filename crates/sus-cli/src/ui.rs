use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub progress: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

/// Progress goes to stderr, so it stays on for piped JSON unless quiet or raw.
pub fn init(flags: &GlobalFlags) {
    let progress =
        std::io::stderr().is_terminal() && !flags.quiet && flags.format != OutputFormat::Raw;
    let _ = UI_PREFS.set(UiPrefs { progress });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs { progress: false })
}
