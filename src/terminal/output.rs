//! Terminal output utilities.
//!
//! Box drawing, number formatting, entropy reporting.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
}

// ============================================================================
// Number Formatting
// ============================================================================

pub fn format_number(num: usize) -> String {
    let s = num.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = content.chars().count();

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description, auto-wrapping if needed.
pub fn box_opt(flag: &str, desc: &str) {
    for line in opt_lines(flag, desc) {
        println!("│ {} │", line);
    }
}

/// Lay out a flag column and a word-wrapped description column.
fn opt_lines(flag: &str, desc: &str) -> Vec<String> {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 22;
    let desc_col = inner_width - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let mut wrapped: Vec<String> = Vec::new();
    let mut current_line = String::new();
    for word in desc.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            wrapped.push(current_line);
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        wrapped.push(current_line);
    }
    if wrapped.is_empty() {
        wrapped.push(String::new());
    }

    let indent = " ".repeat(flag_col);
    wrapped
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let lead = if i == 0 { &flag_padded } else { &indent };
            let padding = desc_col.saturating_sub(line.len());
            format!("{}{}{}", lead, line, " ".repeat(padding))
        })
        .collect()
}

// ============================================================================
// Password Listing
// ============================================================================

/// Write passwords as a numbered list: `1. password`.
pub fn write_numbered<W: Write>(out: &mut W, passwords: &[String]) -> io::Result<()> {
    for (i, password) in passwords.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, password)?;
    }
    Ok(())
}

// ============================================================================
// Entropy Calculation
// ============================================================================

/// Calculate password entropy in bits.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

/// Get entropy strength description.
pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

/// One-line entropy summary: `Entropy: 78.7 bits (Strong) • Charset: 94 chars`.
pub fn entropy_summary(password_length: usize, charset_size: usize) -> String {
    let bits = calculate_entropy(password_length, charset_size);
    format!(
        "Entropy: {:.1} bits ({}) • Charset: {} chars",
        bits,
        entropy_strength(bits),
        charset_size
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn entropy_of_full_pool() {
        let bits = calculate_entropy(12, 94);
        assert!((bits - 78.65).abs() < 0.01);
        assert_eq!(entropy_strength(bits), "Strong");
        assert_eq!(calculate_entropy(12, 0), 0.0);
    }

    #[test]
    fn strength_bands() {
        assert_eq!(entropy_strength(18.8), "Weak");
        assert_eq!(entropy_strength(40.0), "Fair");
        assert_eq!(entropy_strength(128.0), "Very Strong");
    }

    #[test]
    fn summary_line() {
        assert_eq!(
            entropy_summary(4, 26),
            "Entropy: 18.8 bits (Weak) • Charset: 26 chars"
        );
    }

    #[test]
    fn numbered_list_starts_at_one() {
        let mut out = Vec::new();
        write_numbered(&mut out, &["abcd".to_string(), "efgh".to_string()]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1. abcd\n2. efgh\n");
    }

    #[test]
    fn help_options_fit_the_box() {
        let lines = opt_lines(
            "-l, --length <N>",
            "Password length, at least four characters, defaults to twelve when omitted entirely",
        );
        assert!(lines.len() > 1);
        for line in &lines {
            assert_eq!(line.chars().count(), BOX_WIDTH - 4);
        }
    }
}
