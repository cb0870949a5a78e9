//! CLI progress display utilities
//!
//! Step indicators with emojis, a spinner for the parse, and styled
//! success / warning / error lines.

use std::time::Duration;

use console::{Emoji, style};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};

use crate::converter::{ConvertPhase, ConvertProgress};

// =============================================================================
// Emoji Constants (with ASCII fallbacks for terminals without emoji support)
// =============================================================================

/// Magnifying glass - for reading/scanning operations
pub static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
/// Gear - for parsing/processing operations
pub static GEAR: Emoji<'_, '_> = Emoji("⚙️  ", "");
/// Funnel - for filtering operations
pub static FUNNEL: Emoji<'_, '_> = Emoji("🔽 ", "");
/// Floppy disk - for writing/saving operations
pub static DISK: Emoji<'_, '_> = Emoji("💾 ", "");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

// =============================================================================
// Step-Based Progress
// =============================================================================

/// Print a step indicator: `[1/4] 🔍 Message...`
pub fn print_step(current: usize, total: usize, emoji: &Emoji, msg: &str) {
    println!(
        "{} {}{}",
        style(format!("[{current}/{total}]")).bold().dim(),
        emoji,
        msg
    );
}

/// Print a conversion progress update as a step line.
///
/// The final `Complete` update is skipped; callers finish with [`print_done`].
pub fn print_convert_progress(update: &ConvertProgress) {
    let emoji = match update.phase {
        ConvertPhase::ReadingSource => &LOOKING_GLASS,
        ConvertPhase::Parsing => &GEAR,
        ConvertPhase::Filtering => &FUNNEL,
        ConvertPhase::WritingOutput => &DISK,
        ConvertPhase::Complete => return,
    };
    print_step(update.current, update.total, emoji, &update.message);
}

/// Print completion message: `✨ Done in 2s`
pub fn print_done(elapsed: Duration) {
    println!("{} Done in {}", SPARKLE, HumanDuration(elapsed));
}

// =============================================================================
// Outcome Messages
// =============================================================================

pub fn print_success(msg: &str) {
    println!("{}", style(msg).green());
}

pub fn print_warning(msg: &str) {
    println!("{} {}", style("Warning:").yellow().bold(), msg);
}

pub fn print_error(msg: &str) {
    println!("{} {}", style("Error:").red().bold(), msg);
}

// =============================================================================
// Simple Progress Helpers
// =============================================================================

/// Create a simple spinner
///
/// # Panics
/// Panics if the template string is invalid (this is a compile-time constant).
#[must_use]
pub fn simple_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .expect("valid template"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
