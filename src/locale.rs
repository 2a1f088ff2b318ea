//! Lebanese locale helpers: governorates, phone numbers, currency.

use crate::i18n::Language;
use crate::property::Currency;
use regex::Regex;
use std::sync::OnceLock;

/// The seven Lebanese governorates, as stored by the backend.
pub const LEBANESE_GOVERNORATES: [&str; 7] = [
    "Beirut",
    "Mount Lebanon",
    "North Lebanon",
    "South Lebanon",
    "Bekaa",
    "Nabatieh",
    "Akkar",
];

// (governorate, landline area code, Arabic label)
const GOVERNORATE_TABLE: [(&str, &str, &str); 7] = [
    ("Beirut", "+961 1", "بيروت"),
    ("Mount Lebanon", "+961 4", "جبل لبنان"),
    ("North Lebanon", "+961 6", "شمال لبنان"),
    ("South Lebanon", "+961 7", "جنوب لبنان"),
    ("Bekaa", "+961 8", "البقاع"),
    ("Nabatieh", "+961 7", "النبطية"),
    ("Akkar", "+961 6", "عكار"),
];

/// Localized display label for a governorate.
///
/// English labels are the stored names themselves; Arabic labels come from
/// the table. Unknown names pass through unchanged in both languages.
pub fn governorate_label<'a>(name: &'a str, language: Language) -> &'a str {
    match language {
        Language::En => name,
        Language::Ar => GOVERNORATE_TABLE
            .iter()
            .find(|(en, _, _)| *en == name)
            .map(|(_, _, ar)| *ar)
            .unwrap_or(name),
    }
}

/// Landline area code for a governorate, country code alone when unknown.
pub fn area_code_for_governorate(name: &str) -> &'static str {
    GOVERNORATE_TABLE
        .iter()
        .find(|(en, _, _)| *en == name)
        .map(|(_, code, _)| *code)
        .unwrap_or("+961")
}

static PHONE_DIGITS_REGEX: OnceLock<Regex> = OnceLock::new();

fn significant_digits(phone: &str) -> Option<String> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    let number = if let Some(rest) = digits.strip_prefix("961") {
        rest
    } else if let Some(rest) = digits.strip_prefix('0') {
        rest
    } else {
        &digits
    };

    if number.len() == 8 {
        Some(number.to_string())
    } else {
        None
    }
}

/// Format a Lebanese phone number as `+961 X XXX XXXX`.
///
/// Accepts numbers with a 961 country code, a leading 0, or the bare eight
/// digits. Input that fits none of those shapes is returned unchanged.
pub fn format_lebanese_phone(phone: &str) -> String {
    match significant_digits(phone) {
        Some(number) => format!(
            "+961 {} {} {}",
            &number[0..1],
            &number[1..4],
            &number[4..8]
        ),
        None => phone.to_string(),
    }
}

/// Validate a Lebanese phone number.
///
/// Mobile numbers start with 3, 7, or 8; landlines with 1, 4, 6, 7, or 8.
pub fn validate_lebanese_phone(phone: &str) -> bool {
    let pattern =
        PHONE_DIGITS_REGEX.get_or_init(|| Regex::new(r"^[134678][0-9]{7}$").unwrap());
    significant_digits(phone)
        .map(|number| pattern.is_match(&number))
        .unwrap_or(false)
}

/// Format an amount in the market's currencies.
///
/// Dollars take a `$` prefix; pounds take the `ل.ل` suffix. Any other
/// currency code is printed before the amount.
pub fn format_currency(amount: u64, currency: &Currency) -> String {
    let grouped = crate::display::group_thousands(amount);
    match currency {
        Currency::Usd => format!("${}", grouped),
        Currency::Lbp => format!("{} ل.ل", grouped),
        Currency::Other(code) => format!("{} {}", code, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Governorate Tests ====================

    #[test]
    fn test_governorate_label_english_identity() {
        assert_eq!(governorate_label("Beirut", Language::En), "Beirut");
        assert_eq!(governorate_label("Bekaa", Language::En), "Bekaa");
    }

    #[test]
    fn test_governorate_label_arabic() {
        assert_eq!(governorate_label("Beirut", Language::Ar), "بيروت");
        assert_eq!(governorate_label("Mount Lebanon", Language::Ar), "جبل لبنان");
        assert_eq!(governorate_label("Akkar", Language::Ar), "عكار");
    }

    #[test]
    fn test_governorate_label_unknown_passthrough() {
        assert_eq!(governorate_label("Atlantis", Language::Ar), "Atlantis");
    }

    #[test]
    fn test_area_codes() {
        assert_eq!(area_code_for_governorate("Beirut"), "+961 1");
        assert_eq!(area_code_for_governorate("Bekaa"), "+961 8");
        assert_eq!(area_code_for_governorate("Atlantis"), "+961");
    }

    #[test]
    fn test_every_governorate_has_arabic_label() {
        for name in LEBANESE_GOVERNORATES {
            assert_ne!(governorate_label(name, Language::Ar), name);
        }
    }

    // ==================== Phone Formatting Tests ====================

    #[test]
    fn test_format_phone_with_country_code() {
        assert_eq!(format_lebanese_phone("96176340101"), "+961 7 634 0101");
    }

    #[test]
    fn test_format_phone_with_leading_zero() {
        assert_eq!(format_lebanese_phone("076340101"), "+961 7 634 0101");
    }

    #[test]
    fn test_format_phone_bare_digits() {
        assert_eq!(format_lebanese_phone("76340101"), "+961 7 634 0101");
    }

    #[test]
    fn test_format_phone_already_formatted() {
        assert_eq!(format_lebanese_phone("+961 76 340 101"), "+961 7 634 0101");
    }

    #[test]
    fn test_format_phone_unformattable_passthrough() {
        assert_eq!(format_lebanese_phone("12345"), "12345");
        assert_eq!(format_lebanese_phone("call me"), "call me");
    }

    // ==================== Phone Validation Tests ====================

    #[test]
    fn test_validate_phone_mobile() {
        assert!(validate_lebanese_phone("76340101"));
        assert!(validate_lebanese_phone("+961 3 123 4567"));
    }

    #[test]
    fn test_validate_phone_landline() {
        assert!(validate_lebanese_phone("01340101"));
    }

    #[test]
    fn test_validate_phone_bad_leading_digit() {
        // Lebanese numbers never start with 2, 5, or 9
        assert!(!validate_lebanese_phone("21234567"));
        assert!(!validate_lebanese_phone("91234567"));
    }

    #[test]
    fn test_validate_phone_wrong_length() {
        assert!(!validate_lebanese_phone("7634010"));
        assert!(!validate_lebanese_phone("763401012"));
        assert!(!validate_lebanese_phone(""));
    }

    // ==================== Currency Tests ====================

    #[test]
    fn test_format_currency_usd() {
        assert_eq!(format_currency(850_000, &Currency::Usd), "$850,000");
    }

    #[test]
    fn test_format_currency_lbp() {
        assert_eq!(
            format_currency(1_500_000_000, &Currency::Lbp),
            "1,500,000,000 ل.ل"
        );
    }

    #[test]
    fn test_format_currency_other() {
        assert_eq!(
            format_currency(100_000, &Currency::Other("EUR".to_string())),
            "EUR 100,000"
        );
    }
}
