//! Output formatting utilities.

use colored::Colorize;

use crate::commands::Summary;

/// Prints a success message.
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green().bold(), message);
}

/// Prints an error message.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Prints a warning message.
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message);
}

/// Prints the run summary to stdout, one fact per line.
pub fn summary(summary: &Summary) {
    println!("{summary}");
}

/// Prints the usage message to stdout.
pub fn usage(usage: &str) {
    println!("{usage}");
    println!();
    println!("Example:");
    println!("  kc.sh export --file full-realm.json --realm <realm> --users realm_file");
    println!("  kc-realm-minimizer full-realm.json <realm>-realm.json");
}

/// Turns colored output on or off for the rest of the process.
pub fn set_color(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}
