//! Nav highlight driven by which `main section[id]` is in the top band.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{HighlightObserver, NavEntry, ObserverOptions};
use folio_types::HighlightConfig;
use web_sys::{Document, Element};

use crate::dom::{ClassMarker, intersection_observer, query_all};

const SECTION_SELECTOR: &str = "main section[id]";
const NAV_LINK_SELECTOR: &str = ".nav-links a";

pub fn mount(doc: &Document, config: &HighlightConfig) {
    let sections = query_all(doc, SECTION_SELECTOR);
    let nav = query_all(doc, NAV_LINK_SELECTOR)
        .into_iter()
        .map(|link| {
            let href = link.get_attribute("href").unwrap_or_default();
            NavEntry::new(href, ClassMarker(link))
        })
        .collect();

    let ids = sections.iter().map(Element::id).collect();
    let options = ObserverOptions::from(config);
    let highlight = HighlightObserver::new(ids, nav, options);
    if !highlight.is_enabled() {
        return;
    }

    let highlight = Rc::new(RefCell::new(highlight));
    let observer = intersection_observer(
        options,
        |el| Some(el.id()),
        move |batch, _| {
            if let Some(active) = highlight.borrow_mut().on_intersection(&batch) {
                tracing::trace!(section = active, "Nav highlight");
            }
        },
    );

    match observer {
        Ok(observer) => {
            for section in &sections {
                observer.observe(section);
            }
            tracing::debug!(sections = sections.len(), "Section highlighting mounted");
        }
        Err(e) => tracing::warn!(error = ?e, "IntersectionObserver unavailable"),
    }
}
