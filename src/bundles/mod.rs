//! Built-in translation bundles.
//!
//! A bundle maps page namespaces (`notificationsPage`, `scanQrPage`) to their
//! UI strings for one locale. The payloads live next to this file as JSON and
//! are embedded at compile time.

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

const EN_BUNDLE: &str = include_str!("en.json");
const ML_BUNDLE: &str = include_str!("ml.json");

#[derive(Debug, Clone, PartialEq)]
pub struct TranslationBundle {
    pub locale: String,
    pub namespaces: Map<String, Value>,
}

impl TranslationBundle {
    /// Parse a bundle from JSON text. The root must be an object.
    pub fn from_json(locale: &str, text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .with_context(|| format!("Failed to parse bundle for locale '{}'", locale))?;
        let Value::Object(namespaces) = value else {
            bail!("Bundle for locale '{}' must be a JSON object", locale);
        };
        Ok(Self {
            locale: locale.to_string(),
            namespaces,
        })
    }

    /// Number of leaf values across all namespaces.
    pub fn key_count(&self) -> usize {
        self.namespaces.values().map(count_leaves).sum()
    }
}

fn count_leaves(value: &Value) -> usize {
    match value {
        Value::Object(map) => map.values().map(count_leaves).sum(),
        _ => 1,
    }
}

/// The bundles shipped with locmerge, in the order they are applied.
pub fn builtin() -> Result<Vec<TranslationBundle>> {
    [("en", EN_BUNDLE), ("ml", ML_BUNDLE)]
        .into_iter()
        .map(|(locale, text)| TranslationBundle::from_json(locale, text))
        .collect()
}

pub fn find<'a>(bundles: &'a [TranslationBundle], locale: &str) -> Option<&'a TranslationBundle> {
    bundles.iter().find(|b| b.locale == locale)
}
