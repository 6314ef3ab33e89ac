//! Exit handling: signal handlers and terminal cleanup.

use std::io::Write;

use crossterm::tty::IsTty;

/// Cleanup function registered with atexit - runs on any normal exit
extern "C" fn cleanup_on_exit() {
    let mut stdout = std::io::stdout();
    // Only print escape codes if stdout is a TTY (not when piping)
    if stdout.is_tty() {
        let _ = stdout.write_all(b"\x1b[0m\x1b[?25h");
        let _ = stdout.flush();
    }
}

/// Signal handler for SIGINT/SIGTERM/SIGHUP - exit cleanly, atexit handles cleanup
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers, register atexit cleanup, and keep passwords
/// out of core dumps. Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}
