//! User-facing console output. Styled strings from `colored` carry their
//! own ANSI reset, so the terminal is back in its prior state after every
//! line regardless of which exit path the run takes.

use colored::Colorize;
use std::path::Path;
use std::time::Duration;

/// Green banner line, printed before argument validation.
pub fn banner() {
    println!("{}", format!("core-update version {}", crate::VERSION).green());
    println!();
}

/// Single red line, no elapsed time.
pub fn error(message: &str) {
    eprintln!("{}", message.red());
}

/// One line per processed file, path shown relative to the root folder.
pub fn processed(root: &Path, file: &Path) {
    let shown = file.strip_prefix(root).unwrap_or(file);
    println!("{}", shown.display());
}

/// Completion line with wall-clock time, success path only.
pub fn done(elapsed: Duration) {
    println!("\nDone in {} milliseconds.", elapsed.as_millis());
}
