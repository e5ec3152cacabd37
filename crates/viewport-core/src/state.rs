//! Plain data shared between the viewport components and the render sink.
//!
//! These types intentionally avoid referencing platform-specific APIs; the
//! web frontend builds them from DOM measurements and consumes
//! [`RenderOutput`] to position the circular mask.

use crate::constants::INITIAL_POSITION;
use glam::DVec2;

/// Pixel dimensions of the viewing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are finite and strictly positive.
    #[inline]
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[inline]
    pub fn shorter(&self) -> f64 {
        self.width.min(self.height)
    }

    #[inline]
    pub fn longer(&self) -> f64 {
        self.width.max(self.height)
    }
}

/// Position and radius of the viewport circle.
///
/// `position` is normalized to `[0, 1]` on each axis with the origin at the
/// top-left corner. `radius` is in pixels and only changes on resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub position: DVec2,
    pub radius: f64,
}

impl ViewportState {
    pub fn new(radius: f64) -> Self {
        Self {
            position: DVec2::from_array(INITIAL_POSITION),
            radius,
        }
    }

    /// Pixel-space output for a container of the given size.
    pub fn render_output(&self, container: ContainerSize) -> RenderOutput {
        let (w, h) = if container.is_usable() {
            (container.width, container.height)
        } else {
            (0.0, 0.0)
        };
        RenderOutput {
            pixel_x: self.position.x * w,
            pixel_y: self.position.y * h,
            radius_px: self.radius,
        }
    }
}

/// What the render sink receives after every state mutation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderOutput {
    pub pixel_x: f64,
    pub pixel_y: f64,
    pub radius_px: f64,
}
