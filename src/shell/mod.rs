//! Interactive prompt loop.

mod session;

use std::io;

use crossterm::tty::IsTty;

use session::Session;

use crate::cli::prompts;
use crate::pass::Generator;
use crate::settings::Settings;
use crate::terminal::{box_bottom, box_line, box_top, clear};

/// Run the interactive shell on stdin/stdout.
pub fn run() {
    let settings = Settings::default();
    let stdout = io::stdout();

    if stdout.is_tty() {
        clear();
        box_top("passgen");
        box_line("Secure Password Generator");
        box_bottom();
    }

    let stdin = io::stdin();
    let generator = Generator::new(settings.source.rng());
    let mut session = Session::new(stdin.lock(), stdout.lock(), generator);

    if let Err(e) = session.run() {
        prompts::error(&format!("An unexpected error occurred: {e}"));
        std::process::exit(1);
    }
}
