use viewport_core::InputSample;
use web_sys as web;

use crate::dom;

// ---------------- Pointer / touch sampling ----------------
#[inline]
pub fn pointer_sample(ev: &web::PointerEvent, container: &web::Element) -> Option<InputSample> {
    // Touch pointers are handled by the touch listeners
    if ev.pointer_type() == "touch" {
        return None;
    }
    let (x, y) = dom::client_to_local(container, ev.client_x() as f64, ev.client_y() as f64);
    Some(InputSample::Pointer { x, y })
}

/// First active touch point, or `None` for events without one.
#[inline]
pub fn touch_sample(ev: &web::TouchEvent, container: &web::Element) -> Option<InputSample> {
    let touch = ev.touches().get(0)?;
    let (x, y) = dom::client_to_local(container, touch.client_x() as f64, touch.client_y() as f64);
    Some(InputSample::Touch { x, y })
}
