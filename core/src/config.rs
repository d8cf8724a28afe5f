//! Loading and validating `site.toml`.
//!
//! Missing keys fall back to the defaults in `folio-types`; validation reports
//! values that would leave a behavior broken rather than merely disabled.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use folio_types::SiteConfig;
use hashbrown::HashSet;
use thiserror::Error;

/// Errors that can occur while loading a site config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },
    #[error("Invalid config: {}", format_issues(.0))]
    Invalid(Vec<ConfigIssue>),
}

/// A single problem found by [`validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted key path, e.g. `highlight.threshold`
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn format_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parse a config document without validating it.
pub fn parse_str(contents: &str) -> Result<SiteConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Read and parse a config file without validating it.
pub fn load_file(path: &Path) -> Result<SiteConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_str(&contents)
}

/// Parse a config document and reject it if [`validate`] finds any issue.
pub fn parse_validated(contents: &str) -> Result<SiteConfig, ConfigError> {
    let config = parse_str(contents)?;
    let issues = validate(&config);
    if issues.is_empty() {
        Ok(config)
    } else {
        Err(ConfigError::Invalid(issues))
    }
}

/// Check every section for values the page cannot work with.
pub fn validate(config: &SiteConfig) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    check_band(
        &mut issues,
        "highlight",
        config.highlight.bottom_margin_pct,
        config.highlight.threshold,
    );
    check_band(
        &mut issues,
        "reveal",
        config.reveal.bottom_margin_pct,
        config.reveal.threshold,
    );

    if config.carousel.interval_ms == 0 {
        issues.push(ConfigIssue::new("carousel.interval_ms", "must be greater than 0"));
    }
    if config.hero.interval_ms == 0 {
        issues.push(ConfigIssue::new("hero.interval_ms", "must be greater than 0"));
    }
    if config.hero.words.is_empty() {
        issues.push(ConfigIssue::new("hero.words", "must contain at least one word"));
    }
    if let Some(idx) = config.hero.words.iter().position(|w| w.trim().is_empty()) {
        issues.push(ConfigIssue::new(format!("hero.words[{idx}]"), "must not be blank"));
    }

    let mut names = HashSet::new();
    for (idx, group) in config.filters.iter().enumerate() {
        if !names.insert(group.name.as_str()) {
            issues.push(ConfigIssue::new(
                format!("filters[{idx}].name"),
                format!("duplicate group name '{}'", group.name),
            ));
        }
        for (key, value) in [
            ("button_attr", &group.button_attr),
            ("card_selector", &group.card_selector),
            ("tags_attr", &group.tags_attr),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::new(format!("filters[{idx}].{key}"), "must not be empty"));
            }
        }
    }

    let contact = &config.contact;
    if contact.calendly_base.is_empty() {
        issues.push(ConfigIssue::new("contact.calendly_base", "must not be empty"));
    }
    if contact.calendly_path.iter().any(String::is_empty) {
        issues.push(ConfigIssue::new("contact.calendly_path", "parts must not be empty"));
    }
    if contact.email_local.is_empty() {
        issues.push(ConfigIssue::new("contact.email_local", "must not be empty"));
    }
    if contact.email_domain.len() < 2 || contact.email_domain.iter().any(String::is_empty) {
        issues.push(ConfigIssue::new(
            "contact.email_domain",
            "needs at least two non-empty labels",
        ));
    }

    issues
}

fn check_band(issues: &mut Vec<ConfigIssue>, section: &str, margin_pct: f64, threshold: f64) {
    if !(0.0..100.0).contains(&margin_pct) {
        issues.push(ConfigIssue::new(
            format!("{section}.bottom_margin_pct"),
            format!("{margin_pct} is outside [0, 100)"),
        ));
    }
    if !(0.0..=1.0).contains(&threshold) {
        issues.push(ConfigIssue::new(
            format!("{section}.threshold"),
            format!("{threshold} is outside [0, 1]"),
        ));
    }
}
