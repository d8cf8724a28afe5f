use folio_core::year::current_year_text;
use web_sys::Document;

pub fn mount(doc: &Document) {
    if let Some(span) = doc.get_element_by_id("year") {
        span.set_text_content(Some(&current_year_text()));
    }
}
