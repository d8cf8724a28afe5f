use folio_core::anchor::anchor_target;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::{listen, query_all};

const ANCHOR_SELECTOR: &str = r##"a[href^="#"]:not([href="#"])"##;

pub fn mount(doc: &Document) {
    for link in query_all(doc, ANCHOR_SELECTOR) {
        let Some(id) = link.get_attribute("href").as_deref().and_then(anchor_target).map(String::from)
        else {
            continue;
        };

        let doc = doc.clone();
        listen(&link, "click", move |event| {
            // Target is resolved at click time; unknown ids fall back to the
            // browser's default jump
            let Some(target) = doc.get_element_by_id(&id) else {
                return;
            };
            event.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
}
