//! Format conversion utilities
//!
//! - WXR (XML) → CSV - Published case extraction
//! - CSV → JS - Template-literal snippet for a static page

mod csv_to_js;
mod wxr_to_csv;

use std::borrow::Cow;

pub use csv_to_js::{embed_csv_file, escape_template_literal, is_js_identifier, render_js_snippet};
pub use wxr_to_csv::{
    ExtractReport, convert_wxr_to_csv, convert_wxr_to_csv_with_options,
    convert_wxr_to_csv_with_progress, rows_from_wxr, write_rows_csv,
};

/// Phase of a conversion, reported through [`ConvertProgressCallback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertPhase {
    ReadingSource,
    Parsing,
    Filtering,
    WritingOutput,
    Complete,
}

impl ConvertPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            ConvertPhase::ReadingSource => "Reading source",
            ConvertPhase::Parsing => "Parsing",
            ConvertPhase::Filtering => "Filtering",
            ConvertPhase::WritingOutput => "Writing output",
            ConvertPhase::Complete => "Complete",
        }
    }
}

/// Progress update for a conversion.
#[derive(Debug, Clone)]
pub struct ConvertProgress<'a> {
    pub phase: ConvertPhase,
    /// Current step (1-based).
    pub current: usize,
    pub total: usize,
    pub message: Cow<'a, str>,
}

impl<'a> ConvertProgress<'a> {
    pub fn new(phase: ConvertPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            message: Cow::Borrowed(phase.as_str()),
        }
    }

    pub fn with_message(
        phase: ConvertPhase,
        current: usize,
        total: usize,
        message: impl Into<Cow<'a, str>>,
    ) -> Self {
        Self {
            phase,
            current,
            total,
            message: message.into(),
        }
    }
}

/// Progress callback type for conversion operations.
pub type ConvertProgressCallback<'a> = &'a dyn Fn(&ConvertProgress);
