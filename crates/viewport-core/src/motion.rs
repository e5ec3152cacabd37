//! Motion controller: the only writer of [`ViewportState`].
//!
//! Pointer and touch intents are applied once per accepted sample through a
//! one-step exponential filter. Keyboard intents arm a per-frame loop which
//! the host drives by calling [`MotionController::tick`] until it returns
//! [`FrameOutcome::Stop`].

use crate::bounds::{Bounds, BoundsCache};
use crate::constants::*;
use crate::input::{InputSource, Intent};
use crate::sizer::ResponsiveSizer;
use crate::state::{ContainerSize, RenderOutput, ViewportState};
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionMode {
    Idle,
    PointerTracking,
    KeyboardMoving,
}

/// Whether the keyboard loop should schedule another frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Stop,
}

#[inline]
pub fn smoothing_for(source: InputSource) -> f64 {
    match source {
        InputSource::Touch => TOUCH_SMOOTHING,
        InputSource::Pointer | InputSource::Keyboard => POINTER_SMOOTHING,
    }
}

/// Keyboard speed (normalized units per 60Hz frame) for a container width.
#[inline]
pub fn keyboard_base_speed(container_width: f64) -> f64 {
    if container_width < KEYBOARD_NARROW_BELOW_PX {
        KEYBOARD_SPEED_NARROW
    } else if container_width < KEYBOARD_MEDIUM_BELOW_PX {
        KEYBOARD_SPEED_MEDIUM
    } else {
        KEYBOARD_SPEED_WIDE
    }
}

/// Apply an intent to a state without touching anything else.
///
/// Absolute intents clamp the target and move a fraction of the way there.
/// Relative intents only move the state through [`step_keyboard`], so they
/// leave it unchanged here, as does `Release`.
pub fn apply_intent(state: ViewportState, intent: Intent, bounds: Bounds) -> ViewportState {
    match intent {
        Intent::Absolute { target, source } => {
            let target = bounds.clamp(target);
            let alpha = smoothing_for(source);
            ViewportState {
                position: bounds.clamp(state.position + (target - state.position) * alpha),
                ..state
            }
        }
        Intent::Relative { .. } | Intent::Release => state,
    }
}

/// One keyboard step: move along `heading` by `speed` and clamp. No smoothing.
pub fn step_keyboard(
    state: ViewportState,
    heading: DVec2,
    speed: f64,
    bounds: Bounds,
) -> ViewportState {
    ViewportState {
        position: bounds.clamp(state.position + heading * speed),
        ..state
    }
}

/// Owns the viewport state and its derived bounds.
#[derive(Clone, Debug)]
pub struct MotionController {
    state: ViewportState,
    sizer: ResponsiveSizer,
    bounds: BoundsCache,
    mode: MotionMode,
    heading: DVec2,
    last_tick_ms: Option<f64>,
}

impl MotionController {
    pub fn new(container: ContainerSize) -> Self {
        let sizer = ResponsiveSizer::new(container);
        let mut ctl = Self {
            state: ViewportState::new(sizer.radius()),
            sizer,
            bounds: BoundsCache::default(),
            mode: MotionMode::Idle,
            heading: DVec2::ZERO,
            last_tick_ms: None,
        };
        let b = ctl.bounds();
        ctl.state.position = b.clamp(ctl.state.position);
        ctl
    }

    /// Apply a reduced intent. Returns true when the state changed and the
    /// render sink should be updated.
    pub fn apply(&mut self, intent: Intent, now_ms: f64) -> bool {
        match intent {
            Intent::Absolute { .. } => {
                if self.mode == MotionMode::KeyboardMoving {
                    log::debug!("[motion] pointer preempts keyboard loop");
                }
                self.set_mode(MotionMode::PointerTracking);
                self.heading = DVec2::ZERO;
                self.last_tick_ms = None;
                let bounds = self.bounds();
                let next = apply_intent(self.state, intent, bounds);
                let changed = next != self.state;
                self.state = next;
                changed
            }
            Intent::Relative { heading } => {
                if self.mode != MotionMode::KeyboardMoving {
                    self.set_mode(MotionMode::KeyboardMoving);
                    self.last_tick_ms = Some(now_ms);
                }
                self.heading = heading;
                false
            }
            Intent::Release => {
                if self.mode == MotionMode::KeyboardMoving {
                    self.set_mode(MotionMode::Idle);
                }
                self.heading = DVec2::ZERO;
                self.last_tick_ms = None;
                false
            }
        }
    }

    /// One keyboard-loop frame at `now_ms`. Speed is scaled by the elapsed
    /// time against a 60Hz baseline so the rate is refresh-independent.
    pub fn tick(&mut self, now_ms: f64) -> FrameOutcome {
        if self.mode != MotionMode::KeyboardMoving {
            return FrameOutcome::Stop;
        }
        let last = self.last_tick_ms.unwrap_or(now_ms);
        let dt = (now_ms - last).max(0.0);
        self.last_tick_ms = Some(now_ms);
        let frame_scale = dt / BASELINE_FRAME_MS;
        let speed = keyboard_base_speed(self.sizer.container().width) * frame_scale;
        let bounds = self.bounds();
        self.state = step_keyboard(self.state, self.heading, speed, bounds);
        log::trace!(
            "[motion] key tick dt={dt:.2}ms pos=({:.4}, {:.4})",
            self.state.position.x,
            self.state.position.y
        );
        FrameOutcome::Continue
    }

    /// Restart the keyboard frame clock at `now_ms`; the next tick measures
    /// `dt` from here. No-op outside `KeyboardMoving`.
    pub fn restart_clock(&mut self, now_ms: f64) {
        if self.mode == MotionMode::KeyboardMoving {
            self.last_tick_ms = Some(now_ms);
        }
    }

    /// Recompute the radius for a new container and re-clamp immediately.
    pub fn resize(&mut self, container: ContainerSize) {
        if !container.is_usable() {
            log::warn!(
                "[resize] unusable container {}x{}; viewport pinned to centre",
                container.width,
                container.height
            );
        }
        self.state.radius = self.sizer.update(container);
        self.bounds.invalidate();
        let bounds = self.bounds();
        self.state.position = bounds.clamp(self.state.position);
    }

    /// Current allowed rectangle.
    pub fn bounds(&mut self) -> Bounds {
        self.bounds.get(self.sizer.container(), self.state.radius)
    }

    #[inline]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    #[inline]
    pub fn mode(&self) -> MotionMode {
        self.mode
    }

    #[inline]
    pub fn heading(&self) -> DVec2 {
        self.heading
    }

    #[inline]
    pub fn container(&self) -> ContainerSize {
        self.sizer.container()
    }

    pub fn output(&self) -> RenderOutput {
        self.state.render_output(self.sizer.container())
    }

    fn set_mode(&mut self, mode: MotionMode) {
        if self.mode != mode {
            log::debug!("[motion] {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }
}
