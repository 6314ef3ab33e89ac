//! One-shot command-line mode.

mod context;
mod flags;
mod help;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::parse;

/// Run CLI mode with the raw process arguments.
pub fn run(args: Vec<String>) {
    let mut context = match Context::new(args) {
        Ok(c) => c,
        Err(e) => {
            prompts::error(&e);
            prompts::error("Try --help for usage.");
            std::process::exit(1);
        }
    };

    match context.run() {
        Ok(()) => {}
        // help, version, or an aborted clipboard fallback
        Err(Done) => log::debug!("cli finished early"),
    }
}
