use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window,
};

use crate::error::PageError;
use crate::state::scroll::SectionSpan;

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

pub fn element_by_id(id: &str) -> Result<Element, PageError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement(format!("#{}", id)))
}

pub fn query_all(selector: &str) -> Result<Vec<Element>, PageError> {
    let list = document()?.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn scroll_y() -> Result<f64, PageError> {
    Ok(window()?.scroll_y()?)
}

pub fn scroll_to_section(id: &str) -> Result<(), PageError> {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element_by_id(id)?.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

pub fn scroll_to_top() -> Result<(), PageError> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Geometry of every `section[id]` on the page, in document order.
pub fn section_spans() -> Result<Vec<SectionSpan>, PageError> {
    Ok(query_all("section[id]")?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionSpan::new(el.id(), el.offset_top() as f64, el.offset_height() as f64))
        .collect())
}
