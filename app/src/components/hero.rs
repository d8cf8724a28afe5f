use folio_core::HeroRotator;
use folio_types::HeroConfig;
use gloo_timers::callback::Interval;
use web_sys::Document;

use crate::dom::query;

pub fn mount(doc: &Document, config: &HeroConfig) {
    let Some(target) = query(doc, ".hero-rotate") else {
        return;
    };
    let mut rotator = HeroRotator::new(config);
    if !rotator.is_enabled() {
        return;
    }

    target.set_text_content(rotator.next_word());
    let interval_ms = rotator.interval_ms();
    Interval::new(interval_ms, move || {
        target.set_text_content(rotator.next_word());
    })
    .forget();
}
