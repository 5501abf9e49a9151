use crate::constants::{HEADING_CLASS, LOADER_ID, MAX_PIXEL_RATIO};
use crate::core::view;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Keep the canvas backing store at CSS size × devicePixelRatio, with the
/// ratio capped so high-DPI displays don't quadruple the fill cost.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = view::clamped_pixel_ratio(w.device_pixel_ratio(), MAX_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        canvas.set_width(view::backing_size(rect.width(), dpr));
        canvas.set_height(view::backing_size(rect.height(), dpr));
    }
}

/// All elements carrying the heading class, in document order.
pub fn heading_elements(document: &web::Document) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(&format!(".{}", HEADING_CLASS)) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::Element>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

/// Apply the scroll tween's vertical offset to every heading element.
pub fn set_heading_offset(headings: &[web::Element], offset_pct: f64) {
    for el in headings {
        _ = el.set_attribute(
            "style",
            &format!("transform: translateY({:.3}%)", offset_pct),
        );
    }
}

/// Update the loader overlay's progress paragraph.
pub fn set_loader_text(document: &web::Document, percent: f64) {
    if let Ok(Some(p)) = document.query_selector(&format!("#{} p", LOADER_ID)) {
        p.set_text_content(Some(&format!("Loading: {}%", percent.round() as u32)));
    }
}
