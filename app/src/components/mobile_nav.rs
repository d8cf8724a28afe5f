//! Mobile menu toggle.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::nav::aria_expanded;
use folio_core::{MobileNav, NavView};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::dom::{listen, query, toggle_class};

struct MenuView {
    toggle: Element,
    nav: Element,
}

impl NavView for MenuView {
    fn set_expanded(&mut self, expanded: bool) {
        if let Err(e) = self.toggle.set_attribute("aria-expanded", aria_expanded(expanded)) {
            tracing::warn!(error = ?e, "Failed to set aria-expanded");
        }
        toggle_class(&self.nav, "is-open", expanded);
    }
}

pub fn mount(doc: &Document) {
    let (Some(toggle), Some(nav)) = (query(doc, ".nav-toggle"), query(doc, ".nav-links")) else {
        return;
    };

    let expanded = toggle.get_attribute("aria-expanded").as_deref() == Some("true");
    let menu = Rc::new(RefCell::new(MobileNav::new(
        MenuView {
            toggle: toggle.clone(),
            nav: nav.clone(),
        },
        expanded,
    )));

    let on_toggle = Rc::clone(&menu);
    listen(&toggle, "click", move |_| {
        on_toggle.borrow_mut().toggle();
    });

    listen(&nav, "click", move |event| {
        let is_link = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .is_some_and(|el| el.tag_name().eq_ignore_ascii_case("a"));
        if is_link {
            menu.borrow_mut().on_link_click();
        }
    });
}
