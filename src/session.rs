//! Per-session state and input resolution.

use crate::models::{ExtractedText, SummaryResult};

/// Mutable state carried across one interactive session.
///
/// `extracted` holds the text of the most recent successful upload; a later
/// upload replaces it. `last_summary` is only ever set by a successful
/// summarization, so a failed call leaves the previous summary visible.
#[derive(Debug, Default)]
pub struct SessionState {
    pub extracted: Option<ExtractedText>,
    pub last_summary: Option<SummaryResult>,
}

/// Choose the text a submit acts on.
///
/// Extracted file text always wins over pasted text, even when the paste
/// box is non-empty. With no extraction on record the pasted text is used
/// as-is.
pub fn resolve_input<'a>(pasted: &'a str, extracted: Option<&'a ExtractedText>) -> &'a str {
    match extracted {
        Some(text) => text.as_str(),
        None => pasted,
    }
}
