//! Booking link and email reveal.

use std::rc::Rc;

use folio_core::ContactLinks;
use folio_types::ContactConfig;
use web_sys::Document;

use crate::dom::{listen, query};

pub fn mount(doc: &Document, config: &ContactConfig) {
    let links = Rc::new(ContactLinks::new(config.clone()));

    if let Some(button) = query(doc, "[data-calendly-btn]") {
        let links = Rc::clone(&links);
        listen(&button, "click", move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let url = links.calendly_url();
            if let Err(e) = window.open_with_url_and_target_and_features(&url, "_blank", "noopener")
            {
                tracing::warn!(error = ?e, "Failed to open booking page");
            }
        });
    }

    if let Some(email) = query(doc, "[data-email-link]") {
        let target = email.clone();
        listen(&email, "click", move |event| {
            event.prevent_default();
            target.set_text_content(Some(&links.email_address()));
            if let Err(e) = target.set_attribute("href", &links.mailto_href()) {
                tracing::warn!(error = ?e, "Failed to set mailto href");
            }
        });
    }
}
