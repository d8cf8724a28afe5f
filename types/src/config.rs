//! Site configuration.
//!
//! Every section defaults to the values the portfolio page ships with, so an
//! empty TOML document (or no document at all) yields a working config.

use serde::{Deserialize, Serialize};

/// Filter value that matches every card regardless of tags.
pub const FILTER_SHOW_ALL: &str = "all";

/// Root configuration for all page behaviors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub highlight: HighlightConfig,
    pub carousel: CarouselConfig,
    pub hero: HeroConfig,
    pub reveal: RevealConfig,
    pub filters: Vec<FilterGroupConfig>,
    pub contact: ContactConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            highlight: HighlightConfig::default(),
            carousel: CarouselConfig::default(),
            hero: HeroConfig::default(),
            reveal: RevealConfig::default(),
            filters: vec![
                FilterGroupConfig::conventional("skill"),
                FilterGroupConfig::conventional("project"),
            ],
            contact: ContactConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scroll observers
// ─────────────────────────────────────────────────────────────────────────────

/// Section highlighting viewport band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Percentage of the viewport cut off from the bottom of the band.
    /// 60 means only the top 40% of the viewport counts.
    pub bottom_margin_pct: f64,
    /// Fraction of a section that must be visible inside the band.
    pub threshold: f64,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            bottom_margin_pct: 60.0,
            threshold: 0.3,
        }
    }
}

/// Reveal-on-scroll band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub bottom_margin_pct: f64,
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            bottom_margin_pct: 8.0,
            threshold: 0.16,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Timed rotations
// ─────────────────────────────────────────────────────────────────────────────

/// Testimonial carousel autoplay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Autoplay period in milliseconds.
    pub interval_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { interval_ms: 8000 }
    }
}

/// Rotating hero word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub words: Vec<String>,
    pub interval_ms: u32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            words: ["belonging", "signal", "feedback", "trust"]
                .into_iter()
                .map(String::from)
                .collect(),
            interval_ms: 2100,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Card filters
// ─────────────────────────────────────────────────────────────────────────────

/// One group of filter buttons and the cards they filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroupConfig {
    /// Group name, used in logs only
    pub name: String,
    /// Attribute on each button holding its filter value
    pub button_attr: String,
    /// CSS selector for the cards of this group
    pub card_selector: String,
    /// Attribute on each card holding space-separated tags
    pub tags_attr: String,
}

impl FilterGroupConfig {
    /// Group following the `data-{name}-filter` / `.{name}-card` /
    /// `data-{name}-tags` naming convention used by the page.
    pub fn conventional(name: &str) -> Self {
        Self {
            name: name.to_string(),
            button_attr: format!("data-{name}-filter"),
            card_selector: format!(".{name}-card"),
            tags_attr: format!("data-{name}-tags"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Contact links
// ─────────────────────────────────────────────────────────────────────────────

/// Contact details, kept in pieces so the assembled URL and address never
/// appear as a single literal in the page source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub calendly_base: String,
    pub calendly_path: Vec<String>,
    pub email_local: String,
    pub email_domain: Vec<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            calendly_base: "https://calendly.com".to_string(),
            calendly_path: vec!["mhellis03".to_string(), "michael-ellis-15-min".to_string()],
            email_local: "mhellis03".to_string(),
            email_domain: vec!["gmail".to_string(), "com".to_string()],
        }
    }
}
