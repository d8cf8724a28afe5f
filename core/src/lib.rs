//! Headless behavior for the folio portfolio page.
//!
//! Every behavior is a small state machine with explicit event handlers. The
//! browser crate feeds them DOM events; tests and the CLI feed them directly.

pub mod anchor;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod filter;
pub mod hero;
pub mod highlight;
pub mod marker;
pub mod nav;
pub mod reveal;
pub mod timer;
pub mod year;

// Re-exports for convenience
pub use carousel::{AutoplayState, Carousel, Command};
pub use config::{ConfigError, ConfigIssue};
pub use contact::ContactLinks;
pub use filter::{FilterButton, FilterCard, FilterGroup};
pub use hero::HeroRotator;
pub use highlight::{HighlightObserver, IntersectionEntry, NavEntry, ObserverOptions, Rect};
pub use marker::{ActiveFlag, Marker, Visibility};
pub use nav::{MobileNav, NavView};
pub use reveal::RevealTracker;
pub use timer::{ManualClock, TimerDriver};
