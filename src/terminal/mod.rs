//! Shared terminal utilities.
//!
//! Box drawing, numbered listings, and entropy reporting.

mod output;

pub use output::*;
