//! Reveal-on-scroll for `.reveal` elements.

use folio_core::{ObserverOptions, RevealTracker};
use folio_types::RevealConfig;
use web_sys::Document;

use crate::dom::{intersection_observer, query_all, toggle_class};

const VISIBLE_CLASS: &str = "reveal-visible";
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .is_some_and(|mql| mql.matches())
}

pub fn mount(doc: &Document, config: &RevealConfig) {
    let elements = query_all(doc, ".reveal");
    if elements.is_empty() {
        return;
    }

    // Reveal elements rarely carry ids, so they are keyed by position
    let keys = (0..elements.len()).map(|i| i.to_string()).collect();
    let mut tracker = RevealTracker::new(keys, prefers_reduced_motion());

    if tracker.is_done() {
        for el in &elements {
            toggle_class(el, VISIBLE_CLASS, true);
        }
        return;
    }

    let lookup = elements.clone();
    let targets = elements.clone();
    let observer = intersection_observer(
        ObserverOptions::from(config),
        move |el| lookup.iter().position(|e| e == el).map(|i| i.to_string()),
        move |batch, observer| {
            for key in tracker.on_intersection(&batch) {
                let Some(el) = key.parse::<usize>().ok().and_then(|i| targets.get(i)) else {
                    continue;
                };
                toggle_class(el, VISIBLE_CLASS, true);
                observer.unobserve(el);
            }
        },
    );

    match observer {
        Ok(observer) => {
            for el in &elements {
                observer.observe(el);
            }
        }
        Err(e) => {
            tracing::warn!(error = ?e, "IntersectionObserver unavailable, revealing all");
            for el in &elements {
                toggle_class(el, VISIBLE_CLASS, true);
            }
        }
    }
}
