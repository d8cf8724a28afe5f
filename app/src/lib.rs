//! Browser bundle for the folio portfolio page.
//!
//! The module mounts itself on load. Pages that want to hand in a config object
//! from JavaScript mark `<html data-folio-manual>` and call `mountWithConfig`.

pub mod components;
pub mod config;
pub mod dom;
pub mod timers;

use std::cell::Cell;

use folio_types::SiteConfig;
use tracing::Level;
use wasm_bindgen::prelude::*;
use web_sys::Document;

const MANUAL_ATTR: &str = "data-folio-manual";

thread_local! {
    static MOUNTED: Cell<bool> = const { Cell::new(false) };
}

/// Claim the single page mount. Returns false if it was already taken.
fn claim_mount() -> bool {
    !MOUNTED.with(|mounted| mounted.replace(true))
}

#[wasm_bindgen(start)]
pub fn start() {
    dioxus_logger::init(Level::INFO).ok();

    let Some(doc) = dom::document() else {
        return;
    };
    let manual = doc
        .document_element()
        .is_some_and(|root| root.has_attribute(MANUAL_ATTR));
    if manual {
        tracing::debug!("Manual mount requested, waiting for mountWithConfig");
        return;
    }

    let config = config::from_document(&doc);
    when_ready(&doc, config);
}

/// Mount with a config object supplied by the page script.
#[wasm_bindgen(js_name = mountWithConfig)]
pub fn mount_with_config(value: JsValue) {
    let Some(doc) = dom::document() else {
        return;
    };
    let config = if value.is_undefined() || value.is_null() {
        config::from_document(&doc)
    } else {
        config::from_js(value)
    };
    when_ready(&doc, config);
}

/// Mount now, or on `DOMContentLoaded` if the document is still loading.
/// Only the first call mounts; behaviors own page-lifetime timers and listeners.
fn when_ready(doc: &Document, config: SiteConfig) {
    if !claim_mount() {
        tracing::warn!("Page behaviors already mounted, ignoring repeat mount");
        return;
    }
    if doc.ready_state() != "loading" {
        components::mount_all(doc, &config);
        return;
    }

    let target = doc.clone();
    let mut pending = Some(config);
    dom::listen(doc, "DOMContentLoaded", move |_| {
        if let Some(config) = pending.take() {
            components::mount_all(&target, &config);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_is_claimed_once() {
        assert!(claim_mount());
        assert!(!claim_mount());
        assert!(!claim_mount());
    }
}
