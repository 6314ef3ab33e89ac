use std::io::{self, BufRead, Write};

use rand::Rng;
use thiserror::Error;
use zeroize::Zeroize;

use crate::pass::{Generator, MIN_LENGTH, PasswordRequest, charset};
use crate::terminal::{entropy_summary, write_numbered};

/// Input problems caught at the shell boundary.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("{0:?} is not a valid number")]
    NotANumber(String),
    #[error("input closed")]
    Closed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

enum Round {
    Again,
    Quit,
}

/// One interactive session: prompts on `out`, answers from `input`.
pub struct Session<R, W, G> {
    input: R,
    out: W,
    generator: Generator<G>,
}

impl<R: BufRead, W: Write, G: Rng> Session<R, W, G> {
    pub fn new(input: R, out: W, generator: Generator<G>) -> Self {
        Self {
            input,
            out,
            generator,
        }
    }

    /// Loop over rounds until the user declines or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match self.round() {
                Ok(Round::Again) => {}
                Ok(Round::Quit) => break,
                Err(e @ InputError::NotANumber(_)) => {
                    log::debug!("rejected input: {}", e);
                    writeln!(self.out, "Error: {e}. Please enter valid inputs.")?;
                }
                Err(InputError::Closed) => {
                    writeln!(self.out)?;
                    break;
                }
                Err(InputError::Io(e)) => return Err(e),
            }
        }
        writeln!(self.out, "Thank you for using the Password Generator!")?;
        self.out.flush()
    }

    fn round(&mut self) -> Result<Round, InputError> {
        let length = match self.ask_length()? {
            Some(length) => length,
            None => {
                writeln!(
                    self.out,
                    "Password must be at least {MIN_LENGTH} characters long!"
                )?;
                return Ok(Round::Again);
            }
        };

        let uppercase = self.ask_yes_no("Include uppercase letters? (yes/no): ")?;
        let digits = self.ask_yes_no("Include numbers? (yes/no): ")?;
        let special = self.ask_yes_no("Include special characters? (yes/no): ")?;
        let count = self.ask_number("How many passwords do you want to generate? ")?;

        let generated = PasswordRequest::new(length, uppercase, digits, special).and_then(
            |request| {
                let passwords = self.generator.generate_batch(count, &request)?;
                Ok((request, passwords))
            },
        );
        match generated {
            Ok((request, mut passwords)) => {
                writeln!(self.out, "\nGenerated Passwords:")?;
                let written = write_numbered(&mut self.out, &passwords);
                passwords.zeroize();
                written?;
                writeln!(
                    self.out,
                    "{}",
                    entropy_summary(length, charset::size(&request))
                )?;
            }
            Err(e) => {
                writeln!(self.out, "Error: {e}")?;
                return Ok(Round::Again);
            }
        }

        if self.ask_yes_no("\nGenerate more passwords? (yes/no): ")? {
            Ok(Round::Again)
        } else {
            Ok(Round::Quit)
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        // Undecodable bytes become U+FFFD and fail validation downstream.
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    /// Ask for a length. `None` for any whole number below [`MIN_LENGTH`], negatives included.
    fn ask_length(&mut self) -> Result<Option<usize>, InputError> {
        let answer = self.ask(&format!(
            "\nEnter desired password length (minimum {MIN_LENGTH}): "
        ))?;
        let length: i64 = answer
            .parse()
            .map_err(|_| InputError::NotANumber(answer.clone()))?;
        match usize::try_from(length) {
            Ok(length) if length >= MIN_LENGTH => Ok(Some(length)),
            Ok(_) | Err(_) => Ok(None),
        }
    }

    fn ask_number(&mut self, prompt: &str) -> Result<usize, InputError> {
        let answer = self.ask(prompt)?;
        answer
            .parse()
            .map_err(|_| InputError::NotANumber(answer))
    }

    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, InputError> {
        let answer = self.ask(prompt)?.to_lowercase();
        Ok(answer == "yes" || answer == "y")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn transcript(script: &str) -> String {
        let generator = Generator::new(StdRng::seed_from_u64(42));
        let mut out = Vec::new();
        Session::new(Cursor::new(script.as_bytes()), &mut out, generator)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    /// Numbered password lines, e.g. `3. abcd` -> `abcd`.
    fn listed(output: &str) -> Vec<String> {
        output
            .lines()
            .filter_map(|line| {
                let (n, rest) = line.split_once(". ")?;
                n.parse::<usize>().ok()?;
                Some(rest.to_string())
            })
            .collect()
    }

    #[test]
    fn one_round_then_quit() {
        let out = transcript("8\nyes\nyes\nno\n3\nno\n");
        let passwords = listed(&out);
        assert_eq!(passwords.len(), 3);
        for password in &passwords {
            assert_eq!(password.len(), 8);
            assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
            assert!(password.chars().any(|c| c.is_ascii_uppercase()));
            assert!(password.chars().any(|c| c.is_ascii_digit()));
        }
        assert!(out.contains("Generated Passwords:"));
        assert!(out.contains("Entropy: "));
        assert!(out.ends_with("Thank you for using the Password Generator!\n"));
    }

    #[test]
    fn short_length_restarts_round() {
        let out = transcript("3\n4\nno\nno\nno\n1\nno\n");
        assert!(out.contains("Password must be at least 4 characters long!"));
        let passwords = listed(&out);
        assert_eq!(passwords.len(), 1);
        assert!(passwords[0].chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn non_numeric_input_restarts_round() {
        let out = transcript("twelve\n6\ny\nY\nYES\nmany\n6\nno\nno\nno\n2\nno\n");
        assert_eq!(
            out.matches("Please enter valid inputs.").count(),
            2,
            "{out}"
        );
        assert!(out.contains("Error: \"twelve\" is not a valid number."));
        assert_eq!(listed(&out).len(), 2);
    }

    #[test]
    fn negative_length_names_minimum() {
        let out = transcript("-3\n4\nno\nno\nno\n1\nno\n");
        assert!(out.contains("Password must be at least 4 characters long!"));
        assert!(!out.contains("is not a valid number"));
        assert_eq!(listed(&out).len(), 1);
    }

    #[test]
    fn invalid_utf8_restarts_round() {
        let generator = Generator::new(StdRng::seed_from_u64(42));
        let mut script = b"\xff\xfe\n".to_vec();
        script.extend_from_slice(b"6\nno\nno\nno\n1\nno\n");
        let mut out = Vec::new();
        Session::new(Cursor::new(script), &mut out, generator)
            .run()
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Please enter valid inputs."), "{out}");
        let passwords = listed(&out);
        assert_eq!(passwords.len(), 1);
        assert_eq!(passwords[0].len(), 6);
    }

    #[test]
    fn loops_while_user_says_yes() {
        let out = transcript("5\nno\nno\nno\n1\nyes\n6\nno\nno\nno\n2\nno\n");
        let passwords = listed(&out);
        assert_eq!(passwords.len(), 3);
        assert_eq!(passwords[0].len(), 5);
        assert_eq!(passwords[1].len(), 6);
    }

    #[test]
    fn impossible_batch_is_reported() {
        let out = transcript("4\nno\nno\nno\n999999\n4\nno\nno\nno\n1\nno\n");
        assert!(out.contains("Error: Cannot generate 999999 unique passwords"));
        assert_eq!(listed(&out).len(), 1);
    }

    #[test]
    fn closed_input_ends_session() {
        let out = transcript("12\nyes\n");
        assert!(listed(&out).is_empty());
        assert!(out.ends_with("Thank you for using the Password Generator!\n"));
    }

    #[test]
    fn zero_count_lists_nothing() {
        let out = transcript("10\nyes\nyes\nyes\n0\nno\n");
        assert!(out.contains("Generated Passwords:"));
        assert!(listed(&out).is_empty());
    }
}
