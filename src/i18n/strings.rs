//! Centralized localized UI strings.
//!
//! One struct of `&'static str` fields, one const per language. Everything a
//! view shows verbatim (labels, fixed phrases, validation and quality
//! messages) lives here so no string is duplicated across views.

use crate::i18n::Language;

/// All localized user-facing strings for a language.
#[derive(Debug, Clone)]
pub struct UiStrings {
    // ==================== Attribute Labels ====================
    pub bedrooms: &'static str,
    pub bathrooms: &'static str,
    pub area: &'static str,
    pub floors: &'static str,
    pub apartments: &'static str,
    pub rooms: &'static str,
    pub studios: &'static str,
    pub parking: &'static str,
    pub land_area: &'static str,
    pub building_area: &'static str,
    pub total_area: &'static str,
    pub floor: &'static str,

    /// Square-meter unit suffix used with the attribute labels above
    pub square_meters: &'static str,

    // ==================== Property Type Labels ====================
    pub type_apartment: &'static str,
    pub type_villa: &'static str,
    pub type_building: &'static str,
    pub type_hotel: &'static str,
    pub type_office: &'static str,
    pub type_land: &'static str,

    // ==================== Status Labels ====================
    pub status_for_sale: &'static str,
    pub status_for_rent: &'static str,
    pub status_sold: &'static str,
    pub status_rented: &'static str,

    // ==================== Pricing ====================
    /// Shown in place of a numeric price when the owner asked not to publish one
    pub contact_for_price: &'static str,

    // ==================== Content Quality ====================
    pub quality_title_short: &'static str,
    pub quality_title_suggestion: &'static str,
    pub quality_description_short: &'static str,
    pub quality_description_suggestion: &'static str,
    pub quality_location_unclear: &'static str,
    pub quality_location_suggestion: &'static str,
    pub quality_no_features: &'static str,
    pub quality_features_suggestion: &'static str,

    // ==================== Authoring Guidelines ====================
    pub guidelines_title: &'static str,
    pub guidelines_tips: &'static [&'static str],
    pub guidelines_example_title: &'static str,
    pub guidelines_example_description: &'static str,
    pub guidelines_example_location: &'static str,

    // ==================== Contact Form Errors ====================
    pub error_name_required: &'static str,
    pub error_email_invalid: &'static str,
    pub error_phone_invalid: &'static str,
    pub error_message_required: &'static str,
}

impl UiStrings {
    /// Get the string table for a language.
    pub fn for_language(language: Language) -> &'static UiStrings {
        match language {
            Language::En => &ENGLISH_STRINGS,
            Language::Ar => &ARABIC_STRINGS,
        }
    }
}

// ==================== English Strings ====================

/// English language strings (default)
pub const ENGLISH_STRINGS: UiStrings = UiStrings {
    // Attribute labels
    bedrooms: "Bedrooms",
    bathrooms: "Bathrooms",
    area: "Area",
    floors: "Floors",
    apartments: "Apartments",
    rooms: "Rooms",
    studios: "Studios",
    parking: "Parking",
    land_area: "Land Area",
    building_area: "Building Area",
    total_area: "Total Area",
    floor: "Floor",
    square_meters: "m²",

    // Property types
    type_apartment: "Apartment",
    type_villa: "Villa",
    type_building: "Building",
    type_hotel: "Hotel",
    type_office: "Office",
    type_land: "Land",

    // Statuses
    status_for_sale: "For Sale",
    status_for_rent: "For Rent",
    status_sold: "Sold",
    status_rented: "Rented",

    // Pricing
    contact_for_price: "Contact for Price",

    // Content quality
    quality_title_short: "Title is too short",
    quality_title_suggestion: "Add more descriptive details",
    quality_description_short: "Description is too short",
    quality_description_suggestion: "Write a detailed property description",
    quality_location_unclear: "Location is not clearly specified",
    quality_location_suggestion: "Specify the location in detail",
    quality_no_features: "No features mentioned",
    quality_features_suggestion: "Add property features",

    // Authoring guidelines
    guidelines_title: "Professional Content Guidelines",
    guidelines_tips: &[
        "Use clear, descriptive titles",
        "Write detailed property descriptions",
        "Include all relevant features",
        "Use proper Lebanese location names",
        "Keep content professional and accurate",
    ],
    guidelines_example_title: "Modern 3-Bedroom Apartment in Hamra, Beirut",
    guidelines_example_description: "Beautiful modern apartment with stunning city views, \
premium finishes, and access to building amenities.",
    guidelines_example_location: "Hamra, Beirut, Lebanon",

    // Contact form errors
    error_name_required: "Please enter your name",
    error_email_invalid: "Please enter a valid email address",
    error_phone_invalid: "Please enter a valid Lebanese phone number",
    error_message_required: "Please write a message",
};

// ==================== Arabic Strings ====================

/// Arabic language strings
pub const ARABIC_STRINGS: UiStrings = UiStrings {
    // Attribute labels
    bedrooms: "غرف النوم",
    bathrooms: "الحمامات",
    area: "المساحة",
    floors: "الطوابق",
    apartments: "الشقق",
    rooms: "الغرف",
    studios: "الاستوديوهات",
    parking: "مواقف السيارات",
    land_area: "مساحة الأرض",
    building_area: "مساحة البناء",
    total_area: "المساحة الإجمالية",
    floor: "الطابق",
    square_meters: "م²",

    // Property types
    type_apartment: "شقة",
    type_villa: "فيلا",
    type_building: "مبنى",
    type_hotel: "فندق",
    type_office: "مكتب",
    type_land: "أرض",

    // Statuses
    status_for_sale: "للبيع",
    status_for_rent: "للإيجار",
    status_sold: "مباع",
    status_rented: "مؤجر",

    // Pricing
    contact_for_price: "اتصل للسعر",

    // Content quality
    quality_title_short: "العنوان قصير جداً",
    quality_title_suggestion: "أضف وصفاً أكثر تفصيلاً",
    quality_description_short: "الوصف قصير جداً",
    quality_description_suggestion: "اكتب وصفاً مفصلاً للعقار",
    quality_location_unclear: "الموقع غير محدد بوضوح",
    quality_location_suggestion: "اذكر الموقع بالتفصيل",
    quality_no_features: "لا توجد مميزات مذكورة",
    quality_features_suggestion: "أضف مميزات العقار",

    // Authoring guidelines
    guidelines_title: "إرشادات المحتوى المهني",
    guidelines_tips: &[
        "استخدم عناوين واضحة ووصفية",
        "اكتب أوصاف مفصلة للعقار",
        "اذكر جميع المميزات ذات الصلة",
        "استخدم أسماء المواقع اللبنانية الصحيحة",
        "حافظ على المحتوى مهنياً ودقيقاً",
    ],
    guidelines_example_title: "شقة حديثة 3 غرف نوم في الحمرا، بيروت",
    guidelines_example_description: "شقة حديثة جميلة مع إطلالة رائعة على المدينة، \
تشطيبات عالية الجودة، وإمكانية الوصول إلى مرافق المبنى.",
    guidelines_example_location: "الحمرا، بيروت، لبنان",

    // Contact form errors
    error_name_required: "يرجى إدخال اسمك",
    error_email_invalid: "يرجى إدخال بريد إلكتروني صالح",
    error_phone_invalid: "يرجى إدخال رقم هاتف لبناني صالح",
    error_message_required: "يرجى كتابة رسالة",
};
