//! Language type: the two display languages the site supports.
//!
//! Every view and every presentation function takes its target language from
//! this type, so an unsupported code can never travel past the boundary
//! where it is parsed.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// A display language.
///
/// The product is bilingual by contract: English is the default, Arabic is
/// the right-to-left alternative. All language metadata is resolved by
/// exhaustive match so adding a language is a compile-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ar,
}

impl Language {
    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code ("en" or "ar")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is one of the supported languages
    /// * `Err` otherwise
    pub fn from_code(code: &str) -> Result<Language> {
        match code {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            _ => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "Arabic",
        }
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }

    /// Whether this language lays text out right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }

    /// The text-direction attribute value for the host document.
    pub fn direction(&self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    /// The other supported language. Toggling is defined in terms of this.
    pub fn other(&self) -> Language {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_english() {
        let language = Language::from_code("en").expect("Should succeed");
        assert_eq!(language, Language::En);
        assert_eq!(language.name(), "English");
    }

    #[test]
    fn test_from_code_arabic() {
        let language = Language::from_code("ar").expect("Should succeed");
        assert_eq!(language, Language::Ar);
        assert_eq!(language.name(), "Arabic");
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_from_code_rejects_uppercase() {
        assert!(Language::from_code("EN").is_err());
    }

    // ==================== Metadata Tests ====================

    #[test]
    fn test_codes() {
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::Ar.code(), "ar");
    }

    #[test]
    fn test_native_names() {
        assert_eq!(Language::En.native_name(), "English");
        assert_eq!(Language::Ar.native_name(), "العربية");
    }

    #[test]
    fn test_direction() {
        assert!(!Language::En.is_rtl());
        assert!(Language::Ar.is_rtl());
        assert_eq!(Language::En.direction(), "ltr");
        assert_eq!(Language::Ar.direction(), "rtl");
    }

    #[test]
    fn test_other_is_involution() {
        assert_eq!(Language::En.other(), Language::Ar);
        assert_eq!(Language::Ar.other(), Language::En);
        assert_eq!(Language::En.other().other(), Language::En);
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_display_prints_code() {
        assert_eq!(Language::Ar.to_string(), "ar");
    }

    // ==================== Serde Tests ====================

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Language::Ar).unwrap();
        assert_eq!(json, "\"ar\"");
        let back: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Language::Ar);
    }
}
