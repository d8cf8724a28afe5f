//! Skill and project tag filters.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::filter::parse_tags;
use folio_core::{FilterButton, FilterCard, FilterGroup};
use folio_types::FilterGroupConfig;
use web_sys::Document;

use crate::dom::{ClassMarker, listen, query_all};

pub fn mount(doc: &Document, groups: &[FilterGroupConfig]) {
    for config in groups {
        mount_group(doc, config);
    }
}

fn mount_group(doc: &Document, config: &FilterGroupConfig) {
    let button_els = query_all(doc, &format!("[{}]", config.button_attr));
    let buttons = button_els
        .iter()
        .map(|el| FilterButton {
            value: el.get_attribute(&config.button_attr).unwrap_or_default(),
            marker: ClassMarker(el.clone()),
        })
        .collect();
    let cards = query_all(doc, &config.card_selector)
        .into_iter()
        .map(|el| FilterCard {
            tags: parse_tags(&el.get_attribute(&config.tags_attr).unwrap_or_default()),
            view: ClassMarker(el),
        })
        .collect();

    let group = FilterGroup::new(config.name.clone(), buttons, cards);
    if !group.is_enabled() {
        return;
    }

    let group = Rc::new(RefCell::new(group));
    for (idx, el) in button_els.iter().enumerate() {
        let group = Rc::clone(&group);
        listen(el, "click", move |_| {
            group.borrow_mut().select(idx);
        });
    }
}
