use crate::pass::MIN_LENGTH;
use crate::terminal::{box_bottom, box_line, box_opt, box_top};

pub fn print_help() {
    box_top("passgen");
    box_line("Run without arguments for the interactive shell.");
    box_line("");
    box_opt("-l, --length <N>", &format!("Password length (default 12, minimum {MIN_LENGTH})"));
    box_opt("-n, --number <N>", "Number of unique passwords (default 1)");
    box_opt("--no-upper", "Leave out uppercase letters");
    box_opt("--no-digits", "Leave out digits");
    box_opt("--no-special", "Leave out special characters");
    box_opt("-u, --urandom", "Draw every character from the operating system entropy source");
    box_opt("-b, --board", "Copy passwords to the clipboard instead of printing them");
    box_opt("-q, --quiet", "Suppress warnings and the entropy report");
    box_opt("-h, --help", "Show this help");
    box_opt("-v, --version", "Show version");
    box_bottom();
}
