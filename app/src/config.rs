//! Page-supplied configuration
//!
//! A page may embed overrides in `<script id="folio-config">`, either as TOML
//! (`type="application/toml"`) or JSON (`type="application/json"`). Anything
//! missing or invalid falls back to the built-in defaults.

use folio_core::config::{parse_str, validate};
use folio_types::SiteConfig;
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub const CONFIG_ELEMENT_ID: &str = "folio-config";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    fn from_script_type(ty: Option<&str>) -> Self {
        match ty {
            Some(ty) if ty.eq_ignore_ascii_case("application/json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Read the config block from the page, or defaults when there is none.
pub fn from_document(doc: &Document) -> SiteConfig {
    let Some(el) = doc.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return SiteConfig::default();
    };
    let text = el.text_content().unwrap_or_default();
    let format = ConfigFormat::from_script_type(el.get_attribute("type").as_deref());

    let parsed = match format {
        ConfigFormat::Toml => parse_str(&text).map_err(|e| e.to_string()),
        ConfigFormat::Json => parse_json(&text),
    };

    match parsed {
        Ok(config) => checked(config),
        Err(error) => {
            tracing::warn!(%error, "Ignoring page config");
            SiteConfig::default()
        }
    }
}

fn parse_json(text: &str) -> Result<SiteConfig, String> {
    let value = js_sys::JSON::parse(text).map_err(|e| format!("{e:?}"))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

/// Keep a parsed config only if it passes validation.
fn checked(config: SiteConfig) -> SiteConfig {
    let issues = validate(&config);
    if issues.is_empty() {
        return config;
    }
    for issue in &issues {
        tracing::warn!(field = %issue.field, message = %issue.message, "Invalid page config");
    }
    SiteConfig::default()
}

/// Deserialize a config object handed over from JavaScript.
pub fn from_js(value: JsValue) -> SiteConfig {
    match serde_wasm_bindgen::from_value(value) {
        Ok(config) => checked(config),
        Err(error) => {
            tracing::warn!(%error, "Ignoring config object");
            SiteConfig::default()
        }
    }
}
