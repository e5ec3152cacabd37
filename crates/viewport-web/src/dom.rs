use viewport_core::{ContainerSize, RenderOutput};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{CSS_VAR_R, CSS_VAR_X, CSS_VAR_Y};

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{id} has unexpected type: {:?}", e))
}

/// Container size in CSS px, as laid out right now.
#[inline]
pub fn container_size(container: &web::Element) -> ContainerSize {
    let rect = container.get_bounding_client_rect();
    ContainerSize::new(rect.width(), rect.height())
}

/// Client coordinates to container-local px.
#[inline]
pub fn client_to_local(container: &web::Element, client_x: f64, client_y: f64) -> (f64, f64) {
    let rect = container.get_bounding_client_rect();
    (client_x - rect.left(), client_y - rect.top())
}

#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Render sink: position the circular mask.
pub fn apply_output(lens: &web::HtmlElement, out: RenderOutput) {
    let style = lens.style();
    for (name, value) in [
        (CSS_VAR_X, out.pixel_x),
        (CSS_VAR_Y, out.pixel_y),
        (CSS_VAR_R, out.radius_px),
    ] {
        if let Err(e) = style.set_property(name, &format!("{value:.2}px")) {
            log::error!("[render] set {name}: {:?}", e);
        }
    }
}
