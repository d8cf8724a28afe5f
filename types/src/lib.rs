//! Shared configuration types for the folio page behaviors.
//!
//! Everything here is plain serde data so the same `site.toml` can be read by
//! the browser bundle and by the `folio-validate` CLI.

pub mod config;

pub use config::{
    CarouselConfig, ContactConfig, FilterGroupConfig, HeroConfig, HighlightConfig, RevealConfig,
    SiteConfig, FILTER_SHOW_ALL,
};
