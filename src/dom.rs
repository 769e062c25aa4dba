use verdanza_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn viewport(window: &web::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    Viewport::new(width as f32, height as f32)
}

/// Full scrollable height of the page.
pub fn document_height(document: &web::Document) -> f32 {
    document
        .document_element()
        .map(|el| el.scroll_height() as f32)
        .unwrap_or(0.0)
}

/// Current router path. The site uses a hash router, so the fragment wins
/// when present.
pub fn current_path(window: &web::Window) -> String {
    let location = window.location();
    match location.hash() {
        Ok(hash) if hash.len() > 1 => hash,
        _ => location.pathname().unwrap_or_else(|_| "/".to_string()),
    }
}

pub fn root_element(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}
