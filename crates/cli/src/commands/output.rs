//! Terminal output.

#![allow(clippy::print_stdout, clippy::print_stderr)]

/// Print a line of command output.
pub fn line(text: &str) {
    println!("{text}");
}

/// Print an error for the user.
pub fn error(text: &str) {
    eprintln!("error: {text}");
}
