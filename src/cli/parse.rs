use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-u" | "--urandom" => flags.urandom = true,
            "-b" | "--board" => flags.clipboard = true,
            "--no-upper" => flags.no_upper = true,
            "--no-digits" => flags.no_digits = true,
            "--no-special" => flags.no_special = true,
            flag @ ("-l" | "--length") => {
                i += 1;
                flags.length = Some(number(flag, args.get(i))?);
            }
            flag @ ("-n" | "--number") => {
                i += 1;
                flags.number = Some(number(flag, args.get(i))?);
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn number(flag: &str, value: Option<&String>) -> Result<usize, ParseError> {
    let value = value.ok_or_else(|| ParseError::MissingValue(flag.to_string()))?;
    value
        .trim()
        .replace(',', "")
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passgen")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_is_default() {
        assert_eq!(parse(&args(&[])).unwrap(), CliFlags::default());
    }

    #[test]
    fn parses_values_and_toggles() {
        let flags = parse(&args(&["-l", "16", "--number", "1,000", "--no-special", "-q"])).unwrap();
        assert_eq!(flags.length, Some(16));
        assert_eq!(flags.number, Some(1000));
        assert!(flags.no_special);
        assert!(flags.quiet);
        assert!(!flags.no_upper);
    }

    #[test]
    fn rejects_bad_number() {
        assert_eq!(
            parse(&args(&["--length", "twelve"])),
            Err(ParseError::InvalidNumber("twelve".to_string()))
        );
        assert_eq!(
            parse(&args(&["-n", "-3"])),
            Err(ParseError::InvalidNumber("-3".to_string()))
        );
    }

    #[test]
    fn rejects_missing_value() {
        assert_eq!(
            parse(&args(&["-l"])),
            Err(ParseError::MissingValue("-l".to_string()))
        );
    }

    #[test]
    fn rejects_unknown_arg() {
        let err = parse(&args(&["--hex"])).unwrap_err();
        assert_eq!(err.to_string(), "Unknown argument: --hex");
    }
}
