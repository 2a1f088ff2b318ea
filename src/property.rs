//! Property records as supplied by the backend.
//!
//! The backend owns these records; this crate treats them as immutable
//! inputs. Deserialization is the one place external data is checked:
//! everything except `id` is defaulted so partial payloads parse, and the
//! classification enums keep unknown raw values instead of failing, so the
//! rest of the crate can match on them exhaustively and fall back cleanly.

use crate::i18n::{Language, UiStrings};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error produced when a backend payload cannot be decoded at all.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid property payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Classification of a property.
///
/// Unknown raw values are preserved in `Other` and resolved with the generic
/// fallback behavior everywhere a known type would use its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    Apartment,
    Villa,
    Building,
    Hotel,
    Office,
    Land,
    Other(String),
}

impl PropertyType {
    /// The raw backend value for this type.
    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::Villa => "villa",
            PropertyType::Building => "building",
            PropertyType::Hotel => "hotel",
            PropertyType::Office => "office",
            PropertyType::Land => "land",
            PropertyType::Other(raw) => raw,
        }
    }

    /// Localized display label; unknown raw values pass through unchanged.
    pub fn label(&self, language: Language) -> &str {
        let strings = UiStrings::for_language(language);
        match self {
            PropertyType::Apartment => strings.type_apartment,
            PropertyType::Villa => strings.type_villa,
            PropertyType::Building => strings.type_building,
            PropertyType::Hotel => strings.type_hotel,
            PropertyType::Office => strings.type_office,
            PropertyType::Land => strings.type_land,
            PropertyType::Other(raw) => raw,
        }
    }
}

impl From<String> for PropertyType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "apartment" => PropertyType::Apartment,
            "villa" => PropertyType::Villa,
            "building" => PropertyType::Building,
            "hotel" => PropertyType::Hotel,
            "office" => PropertyType::Office,
            "land" => PropertyType::Land,
            _ => PropertyType::Other(raw),
        }
    }
}

impl From<PropertyType> for String {
    fn from(value: PropertyType) -> Self {
        value.as_str().to_string()
    }
}

impl Default for PropertyType {
    fn default() -> Self {
        PropertyType::Apartment
    }
}

/// Listing status of a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyStatus {
    ForSale,
    ForRent,
    Sold,
    Rented,
    Other(String),
}

impl PropertyStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PropertyStatus::ForSale => "for_sale",
            PropertyStatus::ForRent => "for_rent",
            PropertyStatus::Sold => "sold",
            PropertyStatus::Rented => "rented",
            PropertyStatus::Other(raw) => raw,
        }
    }

    /// Localized display label; unknown raw values pass through unchanged.
    pub fn label(&self, language: Language) -> &str {
        let strings = UiStrings::for_language(language);
        match self {
            PropertyStatus::ForSale => strings.status_for_sale,
            PropertyStatus::ForRent => strings.status_for_rent,
            PropertyStatus::Sold => strings.status_sold,
            PropertyStatus::Rented => strings.status_rented,
            PropertyStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for PropertyStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "for_sale" => PropertyStatus::ForSale,
            "for_rent" => PropertyStatus::ForRent,
            "sold" => PropertyStatus::Sold,
            "rented" => PropertyStatus::Rented,
            _ => PropertyStatus::Other(raw),
        }
    }
}

impl From<PropertyStatus> for String {
    fn from(value: PropertyStatus) -> Self {
        value.as_str().to_string()
    }
}

impl Default for PropertyStatus {
    fn default() -> Self {
        PropertyStatus::ForSale
    }
}

/// Price currency. The market quotes in US dollars or Lebanese pounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    Usd,
    Lbp,
    Other(String),
}

impl Currency {
    pub fn as_str(&self) -> &str {
        match self {
            Currency::Usd => "USD",
            Currency::Lbp => "LBP",
            Currency::Other(raw) => raw,
        }
    }
}

impl From<String> for Currency {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "USD" => Currency::Usd,
            "LBP" => Currency::Lbp,
            _ => Currency::Other(raw),
        }
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.as_str().to_string()
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Usd
    }
}

/// A property listing as stored by the backend.
///
/// Text fields come in a base single-language form, optionally shadowed by
/// `_en`/`_ar` pairs which take precedence for display when both are
/// present. Numeric attributes are meaningful only when greater than zero;
/// the backend writes 0 for fields the author left empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: String,

    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub features: Vec<String>,

    // Bilingual overrides
    #[serde(default)]
    pub title_en: Option<String>,
    #[serde(default)]
    pub title_ar: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(default)]
    pub description_ar: Option<String>,
    #[serde(default)]
    pub location_en: Option<String>,
    #[serde(default)]
    pub location_ar: Option<String>,
    #[serde(default)]
    pub features_en: Option<Vec<String>>,
    #[serde(default)]
    pub features_ar: Option<Vec<String>>,

    #[serde(default)]
    pub property_type: PropertyType,
    #[serde(default)]
    pub status: PropertyStatus,
    #[serde(default)]
    pub governorate: Option<String>,

    // Numeric attributes, meaningful only when > 0
    #[serde(default)]
    pub area: Option<u32>,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<u32>,
    #[serde(default)]
    pub floor: Option<u32>,
    #[serde(default)]
    pub floors: Option<u32>,
    #[serde(default)]
    pub parking: Option<u32>,
    #[serde(default)]
    pub land_area: Option<u32>,
    #[serde(default)]
    pub building_area: Option<u32>,
    #[serde(default)]
    pub apartments: Option<u32>,
    #[serde(default)]
    pub total_area: Option<u32>,
    #[serde(default)]
    pub rooms: Option<u32>,
    #[serde(default)]
    pub studios: Option<u32>,

    #[serde(default)]
    pub price: u64,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub contact_for_price: bool,

    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,

    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl PropertyRecord {
    /// Decode a record from a backend JSON payload.
    pub fn from_json(value: serde_json::Value) -> Result<Self, RecordError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Decode a record from a JSON string.
    pub fn from_json_str(payload: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// The cover image, if any (first image in the gallery).
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(|s| s.as_str())
    }
}
