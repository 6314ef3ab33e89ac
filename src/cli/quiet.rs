//! Quiet mode for CLI runs.
//!
//! Quiet hides the entropy report, clipboard notices and warnings so stdout
//! carries passwords only. Errors still print.

use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::tty::IsTty;

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// The clipboard fallback question needs someone at stdin to answer it.
pub fn skip_prompt() -> bool {
    enabled() || !std::io::stdin().is_tty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_skips_prompts() {
        set(true);
        assert!(enabled());
        assert!(skip_prompt());
        set(false);
        assert!(!enabled());
    }
}
