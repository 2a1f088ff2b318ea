//! Content-quality feedback for the admin console.
//!
//! Advisory only: a poor score never blocks saving a listing. Checks run on
//! the base (single-language) fields the author typed, not the resolved
//! per-language view.

use crate::i18n::{Language, UiStrings};
use crate::property::PropertyRecord;

const POINTS_PER_ISSUE: u8 = 20;

/// Report on how complete a listing's content is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityReport {
    /// 100 minus 20 per failing check, floored at 0
    pub score: u8,
    /// One localized line per failing check
    pub issues: Vec<String>,
    /// One localized suggestion paired with each issue
    pub suggestions: Vec<String>,
}

impl QualityReport {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

/// Authoring guidance shown beside the admin form.
#[derive(Debug, Clone)]
pub struct ContentGuidelines {
    pub title: &'static str,
    pub tips: &'static [&'static str],
    pub example_title: &'static str,
    pub example_description: &'static str,
    pub example_location: &'static str,
}

/// Score a listing's content.
///
/// Four checks: title at least 10 characters, description at least 50,
/// location at least 5, and at least one feature. Each failure costs 20
/// points and contributes an issue/suggestion pair in the given language.
pub fn check_content_quality(record: &PropertyRecord, language: Language) -> QualityReport {
    let strings = UiStrings::for_language(language);
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    if record.title.chars().count() < 10 {
        issues.push(strings.quality_title_short.to_string());
        suggestions.push(strings.quality_title_suggestion.to_string());
    }

    if record.description.chars().count() < 50 {
        issues.push(strings.quality_description_short.to_string());
        suggestions.push(strings.quality_description_suggestion.to_string());
    }

    if record.location.chars().count() < 5 {
        issues.push(strings.quality_location_unclear.to_string());
        suggestions.push(strings.quality_location_suggestion.to_string());
    }

    if record.features.is_empty() {
        issues.push(strings.quality_no_features.to_string());
        suggestions.push(strings.quality_features_suggestion.to_string());
    }

    let deducted = POINTS_PER_ISSUE.saturating_mul(issues.len() as u8);
    let score = 100u8.saturating_sub(deducted);

    QualityReport {
        score,
        issues,
        suggestions,
    }
}

/// Authoring guidelines for a language.
pub fn content_guidelines(language: Language) -> ContentGuidelines {
    let strings = UiStrings::for_language(language);
    ContentGuidelines {
        title: strings.guidelines_title,
        tips: strings.guidelines_tips,
        example_title: strings.guidelines_example_title,
        example_description: strings.guidelines_example_description,
        example_location: strings.guidelines_example_location,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_record() -> PropertyRecord {
        PropertyRecord {
            id: "q-1".to_string(),
            title: "Modern 3-Bedroom Apartment in Hamra".to_string(),
            description: "Beautiful modern apartment with stunning city views, premium \
finishes, and access to building amenities."
                .to_string(),
            location: "Hamra, Beirut, Lebanon".to_string(),
            features: vec!["Balcony".to_string(), "Elevator".to_string()],
            ..Default::default()
        }
    }

    // ==================== Score Tests ====================

    #[test]
    fn test_complete_record_scores_100() {
        let report = check_content_quality(&complete_record(), Language::En);
        assert_eq!(report.score, 100);
        assert!(!report.has_issues());
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_all_checks_failing() {
        let record = PropertyRecord {
            id: "q-2".to_string(),
            title: "Villa".to_string(),             // 5 chars
            description: "Nice villa".to_string(),  // 10 chars
            location: "LB".to_string(),             // 2 chars
            features: vec![],
            ..Default::default()
        };

        let report = check_content_quality(&record, Language::En);
        assert_eq!(report.score, 20);
        assert_eq!(report.issues.len(), 4);
        assert_eq!(report.suggestions.len(), 4);
    }

    #[test]
    fn test_single_failure_scores_80() {
        let mut record = complete_record();
        record.features.clear();

        let report = check_content_quality(&record, Language::En);
        assert_eq!(report.score, 80);
        assert_eq!(report.issues, vec!["No features mentioned"]);
        assert_eq!(report.suggestions, vec!["Add property features"]);
    }

    #[test]
    fn test_boundary_lengths_pass() {
        let record = PropertyRecord {
            id: "q-3".to_string(),
            title: "1234567890".to_string(), // exactly 10
            description: "x".repeat(50),     // exactly 50
            location: "12345".to_string(),   // exactly 5
            features: vec!["Garden".to_string()],
            ..Default::default()
        };
        let report = check_content_quality(&record, Language::En);
        assert_eq!(report.score, 100);
    }

    #[test]
    fn test_issues_localized() {
        let record = PropertyRecord {
            id: "q-4".to_string(),
            ..Default::default()
        };
        let report = check_content_quality(&record, Language::Ar);
        assert!(report.issues.contains(&"العنوان قصير جداً".to_string()));
        assert!(report.suggestions.contains(&"أضف مميزات العقار".to_string()));
    }

    #[test]
    fn test_arabic_title_counted_in_chars_not_bytes() {
        // Ten Arabic letters are well over 10 bytes; the check is on
        // characters.
        let mut record = complete_record();
        record.title = "شقة حديثة جميلة".to_string();
        let report = check_content_quality(&record, Language::Ar);
        assert_eq!(report.score, 100);
    }

    // ==================== Guidelines Tests ====================

    #[test]
    fn test_guidelines_localized() {
        let en = content_guidelines(Language::En);
        assert_eq!(en.title, "Professional Content Guidelines");
        assert_eq!(en.tips.len(), 5);

        let ar = content_guidelines(Language::Ar);
        assert_eq!(ar.title, "إرشادات المحتوى المهني");
        assert!(ar.example_location.contains("بيروت"));
    }
}
