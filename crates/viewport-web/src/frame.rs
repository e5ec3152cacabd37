use std::cell::{Cell, RefCell};
use std::rc::Rc;
use viewport_core::constants::RESIZE_DEBOUNCE_MS;
use viewport_core::{FrameOutcome, InputSample, KeyTracker, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

pub struct FrameContext {
    pub viewport: Viewport,
    pub keys: KeyTracker,
    pub container: web::Element,
    pub lens: web::HtmlElement,
}

impl FrameContext {
    /// Feed one sample and publish the result if the viewport moved.
    pub fn handle(&mut self, sample: InputSample, now_ms: f64) {
        if let Some(out) = self.viewport.handle(sample, now_ms) {
            dom::apply_output(&self.lens, out);
        }
    }

    /// Feed the current held-key set.
    pub fn handle_keys(&mut self, now_ms: f64) {
        let held = self.keys.held();
        self.handle(InputSample::KeyChange(held), now_ms);
    }

    fn frame(&mut self, now_ms: f64) -> FrameOutcome {
        let outcome = self.viewport.frame(now_ms);
        if outcome == FrameOutcome::Continue {
            dom::apply_output(&self.lens, self.viewport.output());
        }
        outcome
    }

    fn flush_resize(&mut self, now_ms: f64) {
        if let Some(out) = self.viewport.poll(now_ms) {
            log::info!(
                "[resize] {}x{} radius={:.1}",
                self.viewport.container().width,
                self.viewport.container().height,
                out.radius_px
            );
            dom::apply_output(&self.lens, out);
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Keyboard movement loop driven by `requestAnimationFrame`.
///
/// The closure is created once and reused; each frame reschedules itself
/// until the viewport reports `Stop`.
#[derive(Clone)]
pub struct KeyboardLoop {
    tick: TickSlot,
    running: Rc<Cell<bool>>,
}

impl KeyboardLoop {
    pub fn new(ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let running = Rc::new(Cell::new(false));
        let tick_clone = tick.clone();
        let running_clone = running.clone();
        // Ticks read the same clock as the input handlers, not the rAF timestamp
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |_raf_ms: f64| {
            match ctx.borrow_mut().frame(dom::now_ms()) {
                FrameOutcome::Continue => request_frame(&tick_clone),
                FrameOutcome::Stop => running_clone.set(false),
            }
        }) as Box<dyn FnMut(f64)>));
        Self { tick, running }
    }

    /// Start ticking if the viewport wants frames and no loop is scheduled.
    /// Called after every key change, since a key-up can resume movement.
    pub fn ensure_running(&self, ctx: &mut FrameContext) {
        if self.running.get() {
            return;
        }
        if ctx.viewport.start_frames(dom::now_ms()) {
            self.running.set(true);
            request_frame(&self.tick);
        }
    }
}

fn request_frame(tick: &TickSlot) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("[frame] requestAnimationFrame: {:?}", e);
        }
    }
}

/// Timer that flushes debounced resizes once the burst is over.
#[derive(Clone)]
pub struct ResizeTimer {
    callback: Rc<Closure<dyn FnMut()>>,
    handle: Rc<Cell<Option<i32>>>,
}

impl ResizeTimer {
    pub fn new(ctx: Rc<RefCell<FrameContext>>) -> Self {
        let handle = Rc::new(Cell::new(None));
        let handle_clone = handle.clone();
        let callback = Closure::wrap(Box::new(move || {
            handle_clone.set(None);
            ctx.borrow_mut().flush_resize(dom::now_ms());
        }) as Box<dyn FnMut()>);
        Self {
            callback: Rc::new(callback),
            handle,
        }
    }

    /// Restart the quiet-period timer.
    pub fn rearm(&self) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(h) = self.handle.take() {
            w.clear_timeout_with_handle(h);
        }
        match w.set_timeout_with_callback_and_timeout_and_arguments_0(
            (*self.callback).as_ref().unchecked_ref(),
            RESIZE_DEBOUNCE_MS as i32,
        ) {
            Ok(h) => self.handle.set(Some(h)),
            Err(e) => log::error!("[resize] setTimeout: {:?}", e),
        }
    }
}
