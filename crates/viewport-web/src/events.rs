use std::cell::RefCell;
use std::rc::Rc;
use viewport_core::InputSample;
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::frame::{FrameContext, KeyboardLoop, ResizeTimer};
use crate::input;

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub ctx: Rc<RefCell<FrameContext>>,
    pub keyboard_loop: KeyboardLoop,
    pub resize_timer: ResizeTimer,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_touch(&w);
    wire_keys(&w);
    wire_resize(&w);
}

fn listen<E, F>(target: &web::EventTarget, event: &str, handler: F)
where
    E: 'static,
    F: FnMut(E) + 'static,
    dyn FnMut(E): WasmClosure,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::error!("[events] listen {event}: {:?}", e);
    }
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let ctx = w.ctx.clone();
    listen(&w.window, "pointermove", move |ev: web::PointerEvent| {
        let mut c = ctx.borrow_mut();
        if let Some(sample) = input::pointer_sample(&ev, &c.container) {
            c.handle(sample, dom::now_ms());
        }
    });
}

fn wire_touch(w: &InputWiring) {
    let container: web::EventTarget = w.ctx.borrow().container.clone().into();
    for event in ["touchstart", "touchmove"] {
        let ctx = w.ctx.clone();
        listen(&container, event, move |ev: web::TouchEvent| {
            let mut c = ctx.borrow_mut();
            match input::touch_sample(&ev, &c.container) {
                Some(sample) => {
                    ev.prevent_default();
                    c.handle(sample, dom::now_ms());
                }
                None => log::trace!("[input] touch event without touches"),
            }
        });
    }
}

fn wire_keys(w: &InputWiring) {
    let ctx = w.ctx.clone();
    let keyboard_loop = w.keyboard_loop.clone();
    listen(&w.window, "keydown", move |ev: web::KeyboardEvent| {
        let mut c = ctx.borrow_mut();
        if !c.keys.press(&ev.key()) {
            return;
        }
        ev.prevent_default();
        c.handle_keys(dom::now_ms());
        keyboard_loop.ensure_running(&mut c);
    });

    let ctx = w.ctx.clone();
    let keyboard_loop = w.keyboard_loop.clone();
    listen(&w.window, "keyup", move |ev: web::KeyboardEvent| {
        let mut c = ctx.borrow_mut();
        if c.keys.release(&ev.key()) {
            ev.prevent_default();
            c.handle_keys(dom::now_ms());
            keyboard_loop.ensure_running(&mut c);
        }
    });

    // Key-up events are lost while the page is unfocused
    let ctx = w.ctx.clone();
    let keyboard_loop = w.keyboard_loop.clone();
    listen(&w.window, "blur", move |_ev: web::Event| {
        let mut c = ctx.borrow_mut();
        c.keys.clear();
        c.handle_keys(dom::now_ms());
        keyboard_loop.ensure_running(&mut c);
    });
}

fn wire_resize(w: &InputWiring) {
    for event in ["resize", "orientationchange"] {
        let ctx = w.ctx.clone();
        let timer = w.resize_timer.clone();
        listen(&w.window, event, move |_ev: web::Event| {
            let mut c = ctx.borrow_mut();
            let size = dom::container_size(&c.container);
            c.handle(InputSample::Resize(size), dom::now_ms());
            timer.rearm();
        });
    }
}
