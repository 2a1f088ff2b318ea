//! Bilingual property listings core.
//!
//! The presentation side of an English/Arabic real-estate catalog: given a
//! raw property record from the backend and a display language, resolve
//! what text, labels, and attribute fields to show. One piece of shared
//! state (the active language) plus pure functions for everything else.
//!
//! - [`i18n`]: language type, observable language state, content-language
//!   detection, localized strings
//! - [`property`]: backend record types, validated at the boundary
//! - [`schema`]: the per-property-type field table driving both the public
//!   display and the admin form
//! - [`display`]: bilingual content resolution and price/area formatting
//! - [`quality`]: advisory content-quality scoring for the admin console
//! - [`locale`], [`validation`]: Lebanese locale helpers and input checks
//! - [`storage`], [`config`]: settings persistence and environment config

pub mod config;
pub mod display;
pub mod i18n;
pub mod locale;
pub mod property;
pub mod quality;
pub mod schema;
pub mod storage;
pub mod validation;
