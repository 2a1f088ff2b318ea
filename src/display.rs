//! Bilingual content resolution and display formatting.
//!
//! Pure functions from a raw [`PropertyRecord`] and a target [`Language`]
//! to the strings a view renders. Nothing here translates anything: the
//! engine only *selects* among author-supplied variants and static label
//! tables, and it never fails on partial or malformed content.

use crate::i18n::{detect_content_language, ContentLanguage, Language, UiStrings};
use crate::locale::governorate_label;
use crate::property::PropertyRecord;

/// Advisory glyph shown when the content's detected language differs from
/// the display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageIndicator {
    /// Content mixes Arabic and Latin script
    Multilingual,
    /// Content is Arabic, viewed in English
    Arabic,
    /// Content is English, viewed in Arabic
    English,
}

impl LanguageIndicator {
    /// The glyph a view renders next to the title.
    pub fn glyph(&self) -> &'static str {
        match self {
            LanguageIndicator::Multilingual => "🌐",
            LanguageIndicator::Arabic => "🇱🇧",
            LanguageIndicator::English => "🇺🇸",
        }
    }
}

/// Text content of a record resolved for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContent {
    pub title: String,
    pub description: String,
    pub location: String,
    pub features: Vec<String>,
    pub property_type_display: String,
    pub status_display: String,
    pub governorate_display: Option<String>,
}

/// Everything a listing view needs, resolved and formatted for one
/// language. Ephemeral: recomputed on every render, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayProperty {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub features: Vec<String>,
    pub property_type_display: String,
    pub status_display: String,
    pub governorate_display: Option<String>,
    /// Advisory only; never changes which text is shown
    pub language_indicator: Option<LanguageIndicator>,
    /// Absent when the record has no positive price and no
    /// contact-for-price flag
    pub price_display: Option<String>,
    /// Absent when the record has no positive area
    pub area_display: Option<String>,
}

/// Select the per-language variant of a text field.
///
/// Both variants of the `_en`/`_ar` pair must be present and non-empty for
/// the override to apply; otherwise the base field is kept verbatim.
fn pick_text(
    en: &Option<String>,
    ar: &Option<String>,
    base: &str,
    language: Language,
) -> String {
    match (en, ar) {
        (Some(en), Some(ar)) if !en.is_empty() && !ar.is_empty() => match language {
            Language::En => en.clone(),
            Language::Ar => ar.clone(),
        },
        _ => base.to_string(),
    }
}

/// Resolve a record's text content for the requested language.
///
/// Bilingual `_en`/`_ar` pairs take precedence over the base field;
/// type/status/governorate labels come from static lookup tables, and
/// unknown raw values pass through unchanged.
pub fn translate_property_content(record: &PropertyRecord, language: Language) -> ResolvedContent {
    let features = match (&record.features_en, &record.features_ar) {
        (Some(en), Some(ar)) => match language {
            Language::En => en.clone(),
            Language::Ar => ar.clone(),
        },
        _ => record.features.clone(),
    };

    ResolvedContent {
        title: pick_text(&record.title_en, &record.title_ar, &record.title, language),
        description: pick_text(
            &record.description_en,
            &record.description_ar,
            &record.description,
            language,
        ),
        location: pick_text(
            &record.location_en,
            &record.location_ar,
            &record.location,
            language,
        ),
        features,
        property_type_display: record.property_type.label(language).to_string(),
        status_display: record.status.label(language).to_string(),
        governorate_display: record
            .governorate
            .as_deref()
            .map(|name| governorate_label(name, language).to_string()),
    }
}

/// Resolve content and decide whether a language indicator applies.
///
/// Detection runs on the resolved title only. Content matching the display
/// language gets no indicator; mixed-script content gets the neutral glyph;
/// content in the other language gets a glyph naming its actual source
/// language.
pub fn get_display_content(
    record: &PropertyRecord,
    language: Language,
) -> (ResolvedContent, Option<LanguageIndicator>) {
    let content = translate_property_content(record, language);
    let detected = detect_content_language(&content.title);

    let matches_display = matches!(
        (detected, language),
        (ContentLanguage::En, Language::En) | (ContentLanguage::Ar, Language::Ar)
    );

    let indicator = if matches_display {
        None
    } else {
        match detected {
            ContentLanguage::Mixed => Some(LanguageIndicator::Multilingual),
            ContentLanguage::Ar => Some(LanguageIndicator::Arabic),
            ContentLanguage::En => Some(LanguageIndicator::English),
        }
    };

    (content, indicator)
}

/// Resolve and format a record into its final display form.
pub fn format_property_for_display(record: &PropertyRecord, language: Language) -> DisplayProperty {
    let (content, language_indicator) = get_display_content(record, language);
    let strings = UiStrings::for_language(language);

    let price_display = if record.contact_for_price {
        Some(strings.contact_for_price.to_string())
    } else if record.price > 0 {
        Some(format!(
            "{} {}",
            record.currency.as_str(),
            group_thousands(record.price)
        ))
    } else {
        None
    };

    let area_display = record
        .area
        .filter(|a| *a > 0)
        .map(|a| format!("{} m²", a));

    DisplayProperty {
        id: record.id.clone(),
        title: content.title,
        description: content.description,
        location: content.location,
        features: content.features,
        property_type_display: content.property_type_display,
        status_display: content.status_display,
        governorate_display: content.governorate_display,
        language_indicator,
        price_display,
        area_display,
    }
}

/// Group a non-negative integer with comma thousands separators.
pub(crate) fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{Currency, PropertyStatus, PropertyType};

    fn bilingual_record() -> PropertyRecord {
        PropertyRecord {
            id: "p-1".to_string(),
            title: "Sea View Villa".to_string(),
            title_en: Some("Sea View Villa".to_string()),
            title_ar: Some("فيلا بإطلالة بحرية".to_string()),
            description: "Spacious villa overlooking the bay".to_string(),
            property_type: PropertyType::Villa,
            status: PropertyStatus::ForSale,
            ..Default::default()
        }
    }

    // ==================== Bilingual Selection Tests ====================

    #[test]
    fn test_bilingual_title_selected_by_language() {
        let record = bilingual_record();

        let en = translate_property_content(&record, Language::En);
        assert_eq!(en.title, "Sea View Villa");

        let ar = translate_property_content(&record, Language::Ar);
        assert_eq!(ar.title, "فيلا بإطلالة بحرية");
    }

    #[test]
    fn test_single_language_title_kept_verbatim() {
        let record = PropertyRecord {
            id: "p-2".to_string(),
            title: "Cozy studio in Achrafieh".to_string(),
            ..Default::default()
        };

        let en = translate_property_content(&record, Language::En);
        let ar = translate_property_content(&record, Language::Ar);
        assert_eq!(en.title, "Cozy studio in Achrafieh");
        assert_eq!(ar.title, "Cozy studio in Achrafieh");
    }

    #[test]
    fn test_half_empty_pair_falls_back_to_base() {
        let record = PropertyRecord {
            id: "p-3".to_string(),
            title: "Base title".to_string(),
            title_en: Some("English title".to_string()),
            title_ar: Some("".to_string()),
            ..Default::default()
        };

        let resolved = translate_property_content(&record, Language::En);
        assert_eq!(resolved.title, "Base title");
    }

    #[test]
    fn test_features_pair_selected() {
        let record = PropertyRecord {
            id: "p-4".to_string(),
            features: vec!["base".to_string()],
            features_en: Some(vec!["Pool".to_string(), "Garden".to_string()]),
            features_ar: Some(vec!["مسبح".to_string(), "حديقة".to_string()]),
            ..Default::default()
        };

        let ar = translate_property_content(&record, Language::Ar);
        assert_eq!(ar.features, vec!["مسبح", "حديقة"]);

        let en = translate_property_content(&record, Language::En);
        assert_eq!(en.features, vec!["Pool", "Garden"]);
    }

    #[test]
    fn test_type_and_status_labels() {
        let record = bilingual_record();
        let ar = translate_property_content(&record, Language::Ar);
        assert_eq!(ar.property_type_display, "فيلا");
        assert_eq!(ar.status_display, "للبيع");
    }

    #[test]
    fn test_unknown_governorate_passes_through() {
        let record = PropertyRecord {
            id: "p-5".to_string(),
            governorate: Some("Atlantis".to_string()),
            ..Default::default()
        };
        let resolved = translate_property_content(&record, Language::Ar);
        assert_eq!(resolved.governorate_display.as_deref(), Some("Atlantis"));
    }

    #[test]
    fn test_known_governorate_localized() {
        let record = PropertyRecord {
            id: "p-6".to_string(),
            governorate: Some("Beirut".to_string()),
            ..Default::default()
        };
        let resolved = translate_property_content(&record, Language::Ar);
        assert_eq!(resolved.governorate_display.as_deref(), Some("بيروت"));
    }

    // ==================== Language Indicator Tests ====================

    #[test]
    fn test_no_indicator_when_content_matches_display() {
        let record = PropertyRecord {
            id: "p-7".to_string(),
            title: "Modern apartment".to_string(),
            ..Default::default()
        };
        let (_, indicator) = get_display_content(&record, Language::En);
        assert_eq!(indicator, None);
    }

    #[test]
    fn test_mixed_content_gets_multilingual_indicator() {
        let record = PropertyRecord {
            id: "p-8".to_string(),
            title: "Apartment in الحمرا".to_string(),
            ..Default::default()
        };
        let (_, indicator) = get_display_content(&record, Language::En);
        assert_eq!(indicator, Some(LanguageIndicator::Multilingual));
        assert_eq!(indicator.unwrap().glyph(), "🌐");
    }

    #[test]
    fn test_arabic_content_in_english_view() {
        let record = PropertyRecord {
            id: "p-9".to_string(),
            title: "شقة في الحمرا".to_string(),
            ..Default::default()
        };
        let (content, indicator) = get_display_content(&record, Language::En);
        assert_eq!(indicator, Some(LanguageIndicator::Arabic));
        // The indicator never changes the text shown
        assert_eq!(content.title, "شقة في الحمرا");
    }

    #[test]
    fn test_english_content_in_arabic_view() {
        let record = PropertyRecord {
            id: "p-10".to_string(),
            title: "Downtown office".to_string(),
            ..Default::default()
        };
        let (_, indicator) = get_display_content(&record, Language::Ar);
        assert_eq!(indicator, Some(LanguageIndicator::English));
    }

    #[test]
    fn test_bilingual_record_resolves_without_indicator() {
        // With proper overrides the resolved title matches the display
        // language in both views.
        let record = bilingual_record();
        assert_eq!(get_display_content(&record, Language::En).1, None);
        assert_eq!(get_display_content(&record, Language::Ar).1, None);
    }

    // ==================== Price/Area Formatting Tests ====================

    #[test]
    fn test_contact_for_price_overrides_numeric_price() {
        let record = PropertyRecord {
            id: "p-11".to_string(),
            title: "Penthouse".to_string(),
            contact_for_price: true,
            price: 500_000,
            ..Default::default()
        };

        let en = format_property_for_display(&record, Language::En);
        assert_eq!(en.price_display.as_deref(), Some("Contact for Price"));

        let ar = format_property_for_display(&record, Language::Ar);
        assert_eq!(ar.price_display.as_deref(), Some("اتصل للسعر"));
    }

    #[test]
    fn test_price_grouped_with_currency() {
        let record = PropertyRecord {
            id: "p-12".to_string(),
            title: "Apartment".to_string(),
            price: 250_000,
            currency: Currency::Usd,
            ..Default::default()
        };

        let display = format_property_for_display(&record, Language::En);
        assert_eq!(display.price_display.as_deref(), Some("USD 250,000"));
    }

    #[test]
    fn test_zero_price_has_no_display() {
        let record = PropertyRecord {
            id: "p-13".to_string(),
            title: "Plot".to_string(),
            ..Default::default()
        };
        let display = format_property_for_display(&record, Language::En);
        assert_eq!(display.price_display, None);
    }

    #[test]
    fn test_area_display() {
        let record = PropertyRecord {
            id: "p-14".to_string(),
            title: "Plot".to_string(),
            area: Some(500),
            ..Default::default()
        };
        let display = format_property_for_display(&record, Language::En);
        assert_eq!(display.area_display.as_deref(), Some("500 m²"));
    }

    #[test]
    fn test_missing_area_has_no_display() {
        let record = PropertyRecord {
            id: "p-15".to_string(),
            title: "Plot".to_string(),
            ..Default::default()
        };
        let display = format_property_for_display(&record, Language::En);
        assert_eq!(display.area_display, None);
    }

    // ==================== Grouping Tests ====================

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(250_000), "250,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
