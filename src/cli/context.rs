//! CLI context - bundles settings, flags, and clipboard state.

use std::io::{self, Write};

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, help, prompts, quiet};
use crate::entropy::{self, EntropySource};
use crate::pass::{Generator, PasswordError, charset};
use crate::settings::Settings;
use crate::terminal::entropy_summary;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        let settings = Settings {
            number_of_passwords: 1, // CLI default, not interactive default (5)
            ..Default::default()
        };

        Ok(Self {
            settings,
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);
        self.apply_flags()?;
        if let Err(e) = self.generate_output() {
            prompts::error(&e.to_string());
            std::process::exit(1);
        }
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            help::print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passgen {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) -> Result<(), Done> {
        apply_to_settings(&self.flags, &mut self.settings);

        if self.flags.urandom && !entropy::os_available() {
            prompts::urandom_unavailable();
            self.settings.source = EntropySource::Thread;
        }

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => {
                    self.clipboard = Some(c);
                    self.settings.to_clipboard = true;
                }
                Err(e) => {
                    log::debug!("clipboard init failed: {}", e);
                    if prompts::clipboard_fallback_prompt() {
                        self.settings.to_clipboard = false;
                    } else {
                        return Err(Done);
                    }
                }
            }
        }
        Ok(())
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&mut self) -> Result<(), PasswordError> {
        let request = self.settings.request();
        let count = self.settings.number_of_passwords;
        log::debug!("cli request {:?} x{}", request, count);

        let mut generator = Generator::new(self.settings.source.rng());
        let mut passwords = generator.generate_batch(count, &request)?;

        if self.settings.to_clipboard
            && let Some(ctx) = self.clipboard.as_mut()
        {
            let mut joined = passwords.join("\n");
            match ctx.set_contents(joined.clone()) {
                Ok(_) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied(count);
                }
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
            joined.zeroize();
        } else {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for password in &passwords {
                if writeln!(out, "{}", password).is_err() {
                    break;
                }
            }
            let _ = out.flush();
        }

        if self.settings.show_entropy {
            let summary = entropy_summary(request.length, charset::size(&request));
            prompts::entropy(&format!("{} • Source: {}", summary, self.settings.source.name()));
        }

        passwords.zeroize();
        Ok(())
    }
}

/// Overlay parsed flags onto settings.
pub fn apply_to_settings(flags: &CliFlags, settings: &mut Settings) {
    if let Some(len) = flags.length {
        settings.pass_length = len;
    }
    if let Some(num) = flags.number {
        settings.number_of_passwords = num;
    }
    if flags.no_upper {
        settings.uppercase = false;
    }
    if flags.no_digits {
        settings.digits = false;
    }
    if flags.no_special {
        settings.special = false;
    }
    if flags.urandom {
        settings.source = EntropySource::Os;
    }
    if flags.quiet {
        settings.show_entropy = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_overlay_defaults() {
        let flags = CliFlags {
            length: Some(20),
            number: Some(3),
            no_digits: true,
            urandom: true,
            quiet: true,
            ..Default::default()
        };
        let mut settings = Settings::default();
        apply_to_settings(&flags, &mut settings);

        assert_eq!(settings.pass_length, 20);
        assert_eq!(settings.number_of_passwords, 3);
        assert!(settings.uppercase);
        assert!(!settings.digits);
        assert!(settings.special);
        assert_eq!(settings.source, EntropySource::Os);
        assert!(!settings.show_entropy);
    }

    #[test]
    fn cli_defaults_to_one_password() {
        let context = Context::new(vec!["passgen".to_string()]).ok().unwrap();
        assert_eq!(context.settings.number_of_passwords, 1);
        assert_eq!(context.settings.pass_length, 12);
    }

    #[test]
    fn version_finishes_early() {
        let mut context = Context::new(vec!["passgen".into(), "--version".into()])
            .ok()
            .unwrap();
        assert!(matches!(context.run(), Err(Done)));
    }

    #[test]
    fn bad_args_are_reported() {
        let err = Context::new(vec!["passgen".into(), "-l".into(), "x".into()])
            .err()
            .unwrap();
        assert_eq!(err, "Invalid number: x");
    }
}
