use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node, ScrollBehavior, ScrollToOptions, Window};

use viewstate::{ViewState, sections::{SectionBounds, scroll_target}};

// host page access
//
// every lookup here is optional: a missing window, document or element turns the
// operation into a no-op

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn element_by_id(id: &str) -> Option<HtmlElement> {
    document()?.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

// whether `target` is the element with this id or sits inside it
pub fn is_within(id: &str, target: &Node) -> bool {
    element_by_id(id).is_some_and(|element| element.contains(Some(target)))
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(nodes) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn scroll_offset() -> f64 {
    window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

pub fn header_height(fallback: f64) -> f64 {
    element_by_id("header")
        .map(|header| f64::from(header.offset_height()))
        .unwrap_or(fallback)
}

pub fn section_bounds(id: &str) -> Option<SectionBounds> {
    let section = element_by_id(id)?;

    Some(SectionBounds {
        top: f64::from(section.offset_top()),
        height: f64::from(section.offset_height()),
    })
}

pub fn smooth_scroll_to(top: f64) {
    let Some(window) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

// bring a section to just below the header
//
// returns false if there is no such section
pub fn scroll_to_section(id: &str, fallback_header_height: f64) -> bool {
    let Some(section) = element_by_id(id) else {
        return false;
    };

    let top = scroll_target(
        section.get_bounding_client_rect().top(),
        scroll_offset(),
        header_height(fallback_header_height),
    );
    smooth_scroll_to(top);
    true
}

pub fn alert(message: &str) {
    if let Some(window) = window() {
        if let Err(err) = window.alert_with_message(message) {
            tracing::error!("failed to show alert: {err:?}");
        }
    }
}

// project the parts of the view state that live outside the rendered tree: the body
// classes and the document-level theme marker
pub fn sync_document(view: &ViewState) {
    let Some(document) = document() else {
        return;
    };

    if let Some(body) = document.body() {
        let classes = body.class_list();
        for (class, on) in view.body_classes() {
            let _ = classes.toggle_with_force(class, on);
        }
    }

    if let Some(root) = document.document_element() {
        let _ = match view.theme.marker() {
            Some(marker) => root.set_attribute("data-theme", marker),
            None => root.remove_attribute("data-theme"),
        };
    }
}
