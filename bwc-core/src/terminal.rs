//! Terminal output helpers for bwc-core.
//!
//! Output is hierarchical: section headers, processing steps (2 spaces),
//! sub-items (4 spaces) and status lines (6 spaces). Everything goes through
//! `log::info!` so the run log file receives the same text as the console.

use console::style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::info;
use std::io::IsTerminal;

/// Check if color should be used (respects NO_COLOR environment variable)
fn should_use_color() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a section header (Level 1 - Main sections with cyan color)
pub fn print_section(title: &str) {
    info!("");
    if should_use_color() {
        info!("===== {} =====", style(title.to_uppercase()).cyan().bold());
    } else {
        info!("===== {} =====", title.to_uppercase());
    }
    info!("");
}

/// Print a processing step (Level 2 - 2 spaces indentation and bold)
pub fn print_processing(message: &str) {
    info!("");
    if should_use_color() {
        info!("  » {}", style(message).bold());
    } else {
        info!("  » {message}");
    }
}

/// Print a sub-item (Level 3 - 4 spaces indentation)
pub fn print_sub_item(message: &str) {
    info!("    {message}");
}

/// Print a status line (Level 4 - 6 spaces indentation, label padded to 15)
pub fn print_status(label: &str, value: &str, highlight: bool) {
    let label_width = 15;
    let padding = if label.len() < label_width {
        label_width - label.len()
    } else {
        1
    };

    if should_use_color() && highlight {
        info!("      {}:{} {}", label, " ".repeat(padding), style(value).bold());
    } else {
        info!("      {}:{} {}", label, " ".repeat(padding), value);
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    info!("");
    if should_use_color() {
        info!("  ✓ {}", style(message).green());
    } else {
        info!("  ✓ {message}");
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    if should_use_color() {
        info!("  ⚠ {}", style(message).yellow());
    } else {
        info!("  ⚠ {message}");
    }
}

/// Print an error message with an optional suggestion
pub fn print_error(title: &str, message: &str, suggestion: Option<&str>) {
    if should_use_color() {
        info!("✗ {}", style(title).red().bold());
    } else {
        info!("✗ {title}");
    }

    info!("");
    info!("  Message:  {message}");

    if let Some(suggestion_text) = suggestion {
        info!("");
        info!("  Suggestion: {suggestion_text}");
    }

    info!("");
}

/// Creates a progress bar for copying `total` files into one group folder.
///
/// The bar is hidden when stderr is not a terminal, so piped runs and tests
/// produce no control sequences.
pub fn copy_progress_bar(total: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);

    let style = ProgressStyle::default_bar()
        .template("  ⧖ {msg}: [{bar:30}] {pos}/{len} files")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##.");
    pb.set_style(style);
    pb.set_message(label.to_string());

    if !std::io::stderr().is_terminal() {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }
    pb
}
