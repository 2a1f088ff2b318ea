//! Content-language detection for author-supplied text.
//!
//! Listings are written by agents in whichever language they prefer, so the
//! language a record was *authored* in is not recorded anywhere. This module
//! classifies text by character class: presence of Arabic-range characters,
//! presence of Latin letters, or both.

use regex::Regex;
use std::sync::OnceLock;

/// The language a piece of content appears to be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLanguage {
    /// Arabic-range characters only
    Ar,
    /// Latin letters only (also the default for empty or symbol-only text)
    En,
    /// Both character classes present
    Mixed,
}

// Regex patterns for classification (cached for performance)
static ARABIC_REGEX: OnceLock<Regex> = OnceLock::new();
static LATIN_REGEX: OnceLock<Regex> = OnceLock::new();

/// Detect the language a piece of text was written in.
///
/// Pure character scan: text containing both Arabic-range characters and
/// Latin letters is `Mixed`; one class alone wins; text with neither class
/// (empty, digits, punctuation) defaults to `En`.
///
/// # Arguments
/// * `text` - The text to classify
///
/// # Returns
/// The detected `ContentLanguage`. Never fails.
pub fn detect_content_language(text: &str) -> ContentLanguage {
    let arabic = ARABIC_REGEX.get_or_init(|| Regex::new(r"[\u{0600}-\u{06FF}]").unwrap());
    let latin = LATIN_REGEX.get_or_init(|| Regex::new(r"[a-zA-Z]").unwrap());

    let has_arabic = arabic.is_match(text);
    let has_latin = latin.is_match(text);

    match (has_arabic, has_latin) {
        (true, true) => ContentLanguage::Mixed,
        (true, false) => ContentLanguage::Ar,
        _ => ContentLanguage::En,
    }
}
