#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use viewport_core::{KeyTracker, Viewport};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("viewport-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container: web::Element = dom::element_by_id(&document, constants::CONTAINER_ID)?;
    let lens: web::HtmlElement = dom::element_by_id(&document, constants::LENS_ID)?;

    // The initial size is applied immediately; later resizes are debounced
    let viewport = Viewport::new(dom::container_size(&container));
    dom::apply_output(&lens, viewport.output());

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        viewport,
        keys: KeyTracker::default(),
        container,
        lens,
    }));

    events::wire_input_handlers(events::InputWiring {
        window,
        ctx: ctx.clone(),
        keyboard_loop: frame::KeyboardLoop::new(ctx.clone()),
        resize_timer: frame::ResizeTimer::new(ctx),
    });
    Ok(())
}
