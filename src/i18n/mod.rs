//! Internationalization (i18n) module for the bilingual listings site.
//!
//! All language-related logic lives here: the language type, the shared
//! language state every view reads, content-language detection, and the
//! localized string tables.
//!
//! # Architecture
//!
//! - `language`: Type-safe two-language `Language` type with direction metadata
//! - `service`: Observable, persisted language state shared by all views
//! - `detect`: Character-class detection of the language content was authored in
//! - `strings`: Centralized localized UI strings
//!
//! # Example
//!
//! ```rust,ignore
//! use zeina_listings::i18n::{Language, LanguageService};
//! use zeina_listings::storage::MemorySettingsStore;
//! use std::sync::Arc;
//!
//! let service = LanguageService::new(Arc::new(MemorySettingsStore::new()));
//! service.subscribe(|lang| println!("now showing {}", lang));
//! service.toggle_language(); // -> ar, subscribers already notified
//! ```

mod detect;
mod language;
mod service;
mod strings;

pub use detect::{detect_content_language, ContentLanguage};
pub use language::Language;
pub use service::{DocumentHost, LanguageService, LANGUAGE_KEY};
pub use strings::{UiStrings, ARABIC_STRINGS, ENGLISH_STRINGS};
