//! Testimonial carousel: prev/next controls, autoplay, pause on hover.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_core::{Carousel, Command};
use folio_types::CarouselConfig;
use web_sys::{Document, Element};

use crate::dom::{ClassMarker, listen, query, query_all};
use crate::timers::IntervalDriver;

type WebCarousel = Carousel<ClassMarker, IntervalDriver>;

pub fn mount(doc: &Document, config: &CarouselConfig) {
    let items = query_all(doc, ".testimonial");
    let prev = query(doc, "[data-testimonial-prev]");
    let next = query(doc, "[data-testimonial-next]");
    let (Some(prev), Some(next)) = (prev, next) else {
        tracing::debug!("Testimonial controls missing, carousel disabled");
        return;
    };
    if items.is_empty() {
        tracing::debug!("No testimonials, carousel disabled");
        return;
    }

    let markers = items.into_iter().map(ClassMarker).collect();
    let period_ms = config.interval_ms;

    // The interval only holds a weak reference; the listeners below keep the
    // carousel alive for the page lifetime.
    let carousel = Rc::new_cyclic(|weak: &Weak<RefCell<WebCarousel>>| {
        let weak = weak.clone();
        let driver = IntervalDriver::new(move || {
            if let Some(carousel) = weak.upgrade() {
                carousel.borrow_mut().on_tick();
            }
        });
        RefCell::new(Carousel::initialize(markers, driver, period_ms))
    });

    bind_command(&next, &carousel, Command::Next);
    bind_command(&prev, &carousel, Command::Previous);

    if let Some(wrapper) = query(doc, ".testimonials-wrapper") {
        let on_enter = Rc::clone(&carousel);
        listen(&wrapper, "mouseenter", move |_| on_enter.borrow_mut().on_hover_enter());
        let on_leave = Rc::clone(&carousel);
        listen(&wrapper, "mouseleave", move |_| on_leave.borrow_mut().on_hover_leave());
    }

    tracing::debug!(
        items = carousel.borrow().len(),
        period_ms,
        "Testimonial carousel mounted"
    );
}

fn bind_command(button: &Element, carousel: &Rc<RefCell<WebCarousel>>, command: Command) {
    let carousel = Rc::clone(carousel);
    listen(button, "click", move |_| carousel.borrow_mut().on_command(command));
}
