//! Property-type field schema: the single authority for which attributes a
//! property type carries.
//!
//! The same table drives the public display (attribute badges and the
//! detail list) and the admin form (which inputs are rendered and which are
//! required). Form-visible fields are defined as the union of a type's
//! primary and secondary display fields, so the two surfaces cannot drift
//! apart.

use crate::i18n::{Language, UiStrings};
use crate::property::{PropertyRecord, PropertyType};

/// A numeric attribute a property may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Area,
    Bedrooms,
    Bathrooms,
    Floor,
    Floors,
    Parking,
    LandArea,
    BuildingArea,
    Apartments,
    TotalArea,
    Rooms,
    Studios,
}

impl FieldKey {
    /// The backend column name for this field.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKey::Area => "area",
            FieldKey::Bedrooms => "bedrooms",
            FieldKey::Bathrooms => "bathrooms",
            FieldKey::Floor => "floor",
            FieldKey::Floors => "floors",
            FieldKey::Parking => "parking",
            FieldKey::LandArea => "land_area",
            FieldKey::BuildingArea => "building_area",
            FieldKey::Apartments => "apartments",
            FieldKey::TotalArea => "total_area",
            FieldKey::Rooms => "rooms",
            FieldKey::Studios => "studios",
        }
    }

    /// Localized label for this field.
    pub fn label(&self, language: Language) -> &'static str {
        let strings = UiStrings::for_language(language);
        match self {
            FieldKey::Area => strings.area,
            FieldKey::Bedrooms => strings.bedrooms,
            FieldKey::Bathrooms => strings.bathrooms,
            FieldKey::Floor => strings.floor,
            FieldKey::Floors => strings.floors,
            FieldKey::Parking => strings.parking,
            FieldKey::LandArea => strings.land_area,
            FieldKey::BuildingArea => strings.building_area,
            FieldKey::Apartments => strings.apartments,
            FieldKey::TotalArea => strings.total_area,
            FieldKey::Rooms => strings.rooms,
            FieldKey::Studios => strings.studios,
        }
    }

    /// Whether this field is a surface measured in square meters.
    pub fn is_area(&self) -> bool {
        matches!(
            self,
            FieldKey::Area | FieldKey::LandArea | FieldKey::BuildingArea | FieldKey::TotalArea
        )
    }

    /// Read this field's raw value from a record.
    pub fn value_in(&self, record: &PropertyRecord) -> Option<u32> {
        match self {
            FieldKey::Area => record.area,
            FieldKey::Bedrooms => record.bedrooms,
            FieldKey::Bathrooms => record.bathrooms,
            FieldKey::Floor => record.floor,
            FieldKey::Floors => record.floors,
            FieldKey::Parking => record.parking,
            FieldKey::LandArea => record.land_area,
            FieldKey::BuildingArea => record.building_area,
            FieldKey::Apartments => record.apartments,
            FieldKey::TotalArea => record.total_area,
            FieldKey::Rooms => record.rooms,
            FieldKey::Studios => record.studios,
        }
    }
}

/// Icon tag attached to a primary field badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIcon {
    Bed,
    Bath,
    Square,
    Building,
    Home,
}

impl FieldIcon {
    /// The icon name the UI layer maps to an actual glyph.
    pub fn name(&self) -> &'static str {
        match self {
            FieldIcon::Bed => "bed",
            FieldIcon::Bath => "bath",
            FieldIcon::Square => "square",
            FieldIcon::Building => "building",
            FieldIcon::Home => "home",
        }
    }
}

/// A primary field entry: the attribute and the icon shown beside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimaryEntry {
    pub key: FieldKey,
    pub icon: FieldIcon,
}

const fn primary(key: FieldKey, icon: FieldIcon) -> PrimaryEntry {
    PrimaryEntry { key, icon }
}

/// Per-type field configuration.
#[derive(Debug)]
pub struct TypeSchema {
    /// Shown prominently on cards and detail headers, in this order
    pub primary: &'static [PrimaryEntry],
    /// Shown in the detail list, in this order
    pub secondary: &'static [FieldKey],
    /// Numeric fields the admin form requires for this type
    pub required: &'static [FieldKey],
}

impl TypeSchema {
    /// All fields the admin form renders for this type, in display order.
    pub fn form_fields(&self) -> Vec<FieldKey> {
        self.primary
            .iter()
            .map(|entry| entry.key)
            .chain(self.secondary.iter().copied())
            .collect()
    }
}

static APARTMENT: TypeSchema = TypeSchema {
    primary: &[
        primary(FieldKey::Bedrooms, FieldIcon::Bed),
        primary(FieldKey::Bathrooms, FieldIcon::Bath),
        primary(FieldKey::Area, FieldIcon::Square),
    ],
    secondary: &[FieldKey::Floor, FieldKey::Parking],
    required: &[FieldKey::Area, FieldKey::Bedrooms, FieldKey::Bathrooms],
};

static VILLA: TypeSchema = TypeSchema {
    primary: &[
        primary(FieldKey::Bedrooms, FieldIcon::Bed),
        primary(FieldKey::Bathrooms, FieldIcon::Bath),
        primary(FieldKey::Area, FieldIcon::Square),
    ],
    secondary: &[FieldKey::Floors, FieldKey::Parking],
    required: &[FieldKey::Area, FieldKey::Bedrooms, FieldKey::Bathrooms],
};

static BUILDING: TypeSchema = TypeSchema {
    primary: &[
        primary(FieldKey::Floors, FieldIcon::Building),
        primary(FieldKey::Apartments, FieldIcon::Home),
        primary(FieldKey::LandArea, FieldIcon::Square),
    ],
    secondary: &[FieldKey::BuildingArea, FieldKey::Parking],
    required: &[FieldKey::LandArea, FieldKey::BuildingArea, FieldKey::Floors],
};

static HOTEL: TypeSchema = TypeSchema {
    primary: &[
        primary(FieldKey::Floors, FieldIcon::Building),
        primary(FieldKey::Rooms, FieldIcon::Bed),
        primary(FieldKey::Studios, FieldIcon::Home),
        primary(FieldKey::TotalArea, FieldIcon::Square),
    ],
    secondary: &[FieldKey::Parking],
    required: &[FieldKey::TotalArea, FieldKey::Floors, FieldKey::Rooms],
};

static OFFICE: TypeSchema = TypeSchema {
    primary: &[
        primary(FieldKey::Area, FieldIcon::Square),
        primary(FieldKey::Floors, FieldIcon::Building),
    ],
    secondary: &[FieldKey::Parking],
    required: &[FieldKey::Area],
};

static LAND: TypeSchema = TypeSchema {
    primary: &[primary(FieldKey::Area, FieldIcon::Square)],
    secondary: &[],
    required: &[FieldKey::Area],
};

// Unknown types show the generic trio and require nothing.
static FALLBACK: TypeSchema = TypeSchema {
    primary: &[
        primary(FieldKey::Area, FieldIcon::Square),
        primary(FieldKey::Bedrooms, FieldIcon::Bed),
        primary(FieldKey::Bathrooms, FieldIcon::Bath),
    ],
    secondary: &[],
    required: &[],
};

/// The field schema for a property type.
pub fn type_schema(property_type: &PropertyType) -> &'static TypeSchema {
    match property_type {
        PropertyType::Apartment => &APARTMENT,
        PropertyType::Villa => &VILLA,
        PropertyType::Building => &BUILDING,
        PropertyType::Hotel => &HOTEL,
        PropertyType::Office => &OFFICE,
        PropertyType::Land => &LAND,
        PropertyType::Other(_) => &FALLBACK,
    }
}

/// A resolved primary attribute ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayField {
    pub label: &'static str,
    pub value: String,
    pub icon: FieldIcon,
}

/// A resolved secondary attribute ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondaryField {
    pub label: &'static str,
    pub value: String,
}

/// Type-specific attribute lists for one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDisplayInfo {
    pub primary_fields: Vec<DisplayField>,
    pub secondary_fields: Vec<SecondaryField>,
}

/// Resolve the attribute lists for a record.
///
/// A field appears only when its value is present and greater than zero;
/// zero and absent are the same thing here. Order follows the schema table.
pub fn property_display_info(record: &PropertyRecord, language: Language) -> PropertyDisplayInfo {
    let schema = type_schema(&record.property_type);
    let strings = UiStrings::for_language(language);

    let primary_fields = schema
        .primary
        .iter()
        .filter_map(|entry| {
            shown_value(entry.key, record, strings).map(|value| DisplayField {
                label: entry.key.label(language),
                value,
                icon: entry.icon,
            })
        })
        .collect();

    let secondary_fields = schema
        .secondary
        .iter()
        .filter_map(|&key| {
            shown_value(key, record, strings).map(|value| SecondaryField {
                label: key.label(language),
                value,
            })
        })
        .collect();

    PropertyDisplayInfo {
        primary_fields,
        secondary_fields,
    }
}

/// The rendered value for a field, or `None` when the field is hidden.
fn shown_value(key: FieldKey, record: &PropertyRecord, strings: &UiStrings) -> Option<String> {
    let value = key.value_in(record).filter(|v| *v > 0)?;
    if key.is_area() {
        Some(format!("{} {}", value, strings.square_meters))
    } else {
        Some(value.to_string())
    }
}
