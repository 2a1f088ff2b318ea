//! Preview binary - renders property records from a JSON export to stdout
//!
//! Usage:
//!   cargo run --bin preview -- listings.json        # English preview
//!   cargo run --bin preview -- listings.json ar     # Arabic preview
//!
//! Optional environment variables:
//! - DEFAULT_LANGUAGE (used when no language argument is given)
//! - SETTINGS_FILE (defaults to settings.json)

use anyhow::{bail, Context, Result};
use std::fs;
use tracing::info;
use zeina_listings::config::Config;
use zeina_listings::display::format_property_for_display;
use zeina_listings::i18n::Language;
use zeina_listings::property::PropertyRecord;
use zeina_listings::quality::check_content_quality;
use zeina_listings::schema::property_display_info;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("zeina_listings=info".parse()?),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("Usage: preview <records.json> [en|ar]");
    };

    let config = Config::from_env()?;
    let language = match args.next() {
        Some(code) => Language::from_code(&code)?,
        None => config.default_language,
    };

    let payload = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read records file {}", path))?;
    let values: Vec<serde_json::Value> =
        serde_json::from_str(&payload).context("Records file is not a JSON array")?;

    info!("Previewing {} records in {}", values.len(), language);

    for value in values {
        let record = match PropertyRecord::from_json(value) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Skipping unreadable record: {}", e);
                continue;
            }
        };

        let display = format_property_for_display(&record, language);
        let info = property_display_info(&record, language);
        let quality = check_content_quality(&record, language);

        let indicator = display
            .language_indicator
            .map(|i| format!(" {}", i.glyph()))
            .unwrap_or_default();

        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("{}{}", display.title, indicator);
        println!(
            "{} · {}{}",
            display.property_type_display,
            display.status_display,
            display
                .governorate_display
                .map(|g| format!(" · {}", g))
                .unwrap_or_default()
        );
        if !display.location.is_empty() {
            println!("📍 {}", display.location);
        }
        if let Some(price) = &display.price_display {
            println!("💰 {}", price);
        }

        for field in &info.primary_fields {
            println!("  [{}] {}: {}", field.icon.name(), field.label, field.value);
        }
        for field in &info.secondary_fields {
            println!("  {}: {}", field.label, field.value);
        }

        if !display.features.is_empty() {
            println!("  ✓ {}", display.features.join(", "));
        }

        println!("  quality: {}/100", quality.score);
    }

    Ok(())
}
