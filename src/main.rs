use std::env;

mod cli;
mod entropy;
mod exits;
mod pass;
mod settings;
mod shell;
mod terminal;

fn main() {
    init_logger();
    exits::install_handlers();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => shell::run(),
        _ => cli::run(args),
    }
}

/// Diagnostics go to stderr; quiet unless RUST_LOG asks for more.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();
}
