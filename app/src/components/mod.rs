//! Page behaviors
//!
//! Each component resolves its own DOM collaborators and wires them to the
//! matching state machine in `folio-core`. A component whose elements are
//! missing mounts nothing.

pub mod contact;
pub mod filters;
pub mod hero;
pub mod mobile_nav;
pub mod reveal;
pub mod section_highlight;
pub mod smooth_scroll;
pub mod testimonials;
pub mod year;

use folio_types::SiteConfig;
use web_sys::Document;

/// Mount every behavior, in page order.
pub fn mount_all(doc: &Document, config: &SiteConfig) {
    smooth_scroll::mount(doc);
    section_highlight::mount(doc, &config.highlight);
    hero::mount(doc, &config.hero);
    reveal::mount(doc, &config.reveal);
    filters::mount(doc, &config.filters);
    testimonials::mount(doc, &config.carousel);
    contact::mount(doc, &config.contact);
    mobile_nav::mount(doc);
    year::mount(doc);
}
