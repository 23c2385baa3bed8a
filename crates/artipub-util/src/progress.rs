//! Terminal output for publish runs: one status line per artifact event on
//! stderr, and a spinner while an upload is in flight.

use std::io::Write;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

const LABEL_WIDTH: usize = 12;

/// Report a completed action on an artifact, e.g. `Uploaded` or `Overwrote`.
pub fn status(label: &str, message: &str) {
    emit(&Style::new().for_stderr().green().bold(), label, message);
}

/// Report resolution details such as the coordinate being published.
pub fn status_info(label: &str, message: &str) {
    emit(&Style::new().for_stderr().cyan().bold(), label, message);
}

/// Report a conflict, failure, or an empty file list.
pub fn status_warn(label: &str, message: &str) {
    emit(&Style::new().for_stderr().yellow().bold(), label, message);
}

fn emit(style: &Style, label: &str, message: &str) {
    let _ = writeln!(std::io::stderr(), "{}", status_line(style, label, message));
}

/// `label` right-aligned in a fixed-width column, then `message`.
fn status_line(style: &Style, label: &str, message: &str) -> String {
    format!("{:>LABEL_WIDTH$} {message}", style.apply_to(label))
}

/// Spinner shown while files are being transferred. Finish it with
/// [`ProgressBar::finish_and_clear`] before printing per-file results.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
