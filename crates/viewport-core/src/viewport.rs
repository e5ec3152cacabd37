//! Single-owner pipeline: sample -> reducer -> controller -> render output.
//!
//! Every mutation runs to completion inside one call, so the host can feed
//! samples and keyboard frames from the same event loop without locking.

use crate::bounds::Bounds;
use crate::constants::{POINTER_THROTTLE_MS, RESIZE_DEBOUNCE_MS};
use crate::input::{InputReducer, InputSample, InputSource, Intent};
use crate::motion::{FrameOutcome, MotionController, MotionMode};
use crate::state::{ContainerSize, RenderOutput, ViewportState};
use crate::timing::{Debounce, Throttle};

#[derive(Clone, Debug)]
pub struct Viewport {
    reducer: InputReducer,
    motion: MotionController,
    pointer_throttle: Throttle,
    pending_resize: Debounce<ContainerSize>,
}

impl Viewport {
    pub fn new(container: ContainerSize) -> Self {
        let motion = MotionController::new(container);
        let s = motion.state();
        log::info!(
            "[viewport] {}x{} radius={:.1} pos=({:.2}, {:.2})",
            container.width,
            container.height,
            s.radius,
            s.position.x,
            s.position.y
        );
        Self {
            reducer: InputReducer::new(),
            motion,
            pointer_throttle: Throttle::new(POINTER_THROTTLE_MS),
            pending_resize: Debounce::new(RESIZE_DEBOUNCE_MS),
        }
    }

    /// Feed one sample. Returns the new render output when the state moved.
    ///
    /// Pointer/touch samples arriving faster than the throttle interval are
    /// dropped; resizes are held until [`Viewport::poll`] sees the burst end.
    pub fn handle(&mut self, sample: InputSample, now_ms: f64) -> Option<RenderOutput> {
        match sample {
            InputSample::Resize(container) => {
                self.pending_resize.push(container, now_ms);
                None
            }
            InputSample::Pointer { .. } | InputSample::Touch { .. } => {
                if !self.pointer_throttle.is_open(now_ms) {
                    return None;
                }
                // Samples that reduce to nothing leave the throttle slot free
                let intent = self.reducer.reduce(&sample, self.motion.container())?;
                self.pointer_throttle.mark(now_ms);
                self.dispatch(intent, now_ms)
            }
            InputSample::KeyChange(_) => {
                let intent = self.reducer.reduce(&sample, self.motion.container())?;
                self.dispatch(intent, now_ms)
            }
        }
    }

    fn dispatch(&mut self, intent: Intent, now_ms: f64) -> Option<RenderOutput> {
        self.motion
            .apply(intent, now_ms)
            .then(|| self.motion.output())
    }

    /// Advance the keyboard loop by one display frame.
    pub fn frame(&mut self, now_ms: f64) -> FrameOutcome {
        self.motion.tick(now_ms)
    }

    /// Called by the host when its keyboard frame loop (re)starts at
    /// `now_ms`. Returns whether frames are wanted at all.
    pub fn start_frames(&mut self, now_ms: f64) -> bool {
        self.motion.restart_clock(now_ms);
        self.wants_frames()
    }

    /// Apply a debounced resize whose quiet period has elapsed.
    pub fn poll(&mut self, now_ms: f64) -> Option<RenderOutput> {
        let container = self.pending_resize.poll(now_ms)?;
        Some(self.resize_now(container))
    }

    /// Apply a resize immediately, bypassing the debounce.
    pub fn resize_now(&mut self, container: ContainerSize) -> RenderOutput {
        self.motion.resize(container);
        self.motion.output()
    }

    /// True while the keyboard loop wants another frame.
    #[inline]
    pub fn wants_frames(&self) -> bool {
        self.motion.mode() == MotionMode::KeyboardMoving
    }

    #[inline]
    pub fn pending_resize_deadline(&self) -> Option<f64> {
        self.pending_resize.deadline()
    }

    #[inline]
    pub fn output(&self) -> RenderOutput {
        self.motion.output()
    }

    #[inline]
    pub fn mode(&self) -> MotionMode {
        self.motion.mode()
    }

    #[inline]
    pub fn active_source(&self) -> Option<InputSource> {
        self.reducer.active_source()
    }

    #[inline]
    pub fn state(&self) -> ViewportState {
        self.motion.state()
    }

    #[inline]
    pub fn container(&self) -> ContainerSize {
        self.motion.container()
    }

    pub fn bounds(&mut self) -> Bounds {
        self.motion.bounds()
    }
}
