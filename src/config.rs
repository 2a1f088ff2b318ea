use crate::i18n::Language;
use anyhow::Result;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Language used when no preference has been persisted yet
    pub default_language: Language,

    /// Path of the settings file backing the language preference
    pub settings_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_language = match std::env::var("DEFAULT_LANGUAGE") {
            Ok(code) => Language::from_code(&code).unwrap_or_else(|_| {
                warn!("Invalid DEFAULT_LANGUAGE {:?}, using en", code);
                Language::En
            }),
            Err(_) => Language::En,
        };

        Ok(Self {
            default_language,
            settings_path: std::env::var("SETTINGS_FILE")
                .unwrap_or_else(|_| "settings.json".to_string()),
        })
    }
}
