//! DOM helpers
//!
//! Thin wrappers around web-sys lookups and listeners. Lookups return empty
//! results instead of errors so a missing element just disables a behavior.

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use folio_core::{IntersectionEntry, Marker, ObserverOptions, Visibility};

pub const ACTIVE_CLASS: &str = "is-active";
pub const HIDDEN_CLASS: &str = "is-hidden";

// ─────────────────────────────────────────────────────────────────────────────
// Lookups
// ─────────────────────────────────────────────────────────────────────────────

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// First element matching `selector`, if any.
pub fn query(doc: &Document, selector: &str) -> Option<Element> {
    doc.query_selector(selector).ok().flatten()
}

/// All elements matching `selector`, in document order.
pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = doc.query_selector_all(selector) else {
        tracing::warn!(selector, "Invalid selector");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Mutations
// ─────────────────────────────────────────────────────────────────────────────

pub fn toggle_class(el: &Element, class: &str, on: bool) {
    if let Err(e) = el.class_list().toggle_with_force(class, on) {
        tracing::warn!(class, error = ?e, "Failed to toggle class");
    }
}

/// An element whose `is-active` / `is-hidden` classes act as display flags.
#[derive(Clone)]
pub struct ClassMarker(pub Element);

impl Marker for ClassMarker {
    fn set_active(&mut self, active: bool) {
        toggle_class(&self.0, ACTIVE_CLASS, active);
    }
}

impl Visibility for ClassMarker {
    fn set_hidden(&mut self, hidden: bool) {
        toggle_class(&self.0, HIDDEN_CLASS, hidden);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

/// Attach a listener for the lifetime of the page.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        tracing::warn!(event, error = ?e, "Failed to add listener");
        return;
    }
    closure.forget();
}

/// Create an IntersectionObserver for `options`.
///
/// `key` names each reported element; the handler receives the batch with the
/// band predicate already applied, together with the reporting observer.
pub fn intersection_observer(
    options: ObserverOptions,
    key: impl Fn(&Element) -> Option<String> + 'static,
    mut handler: impl FnMut(Vec<IntersectionEntry>, &IntersectionObserver) + 'static,
) -> Result<IntersectionObserver, JsValue> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target_id = key(&entry.target())?;
                    // isIntersecting alone is true for any overlap; apply the
                    // threshold so crossings back below it count as leaving
                    let intersecting =
                        entry.is_intersecting() && options.meets_threshold(entry.intersection_ratio());
                    Some(IntersectionEntry {
                        target_id,
                        intersecting,
                    })
                })
                .collect();
            handler(batch, &observer);
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&options.root_margin());
    init.set_threshold(&JsValue::from_f64(options.threshold));

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();
    Ok(observer)
}
