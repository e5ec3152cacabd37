//! Allowed rectangle for the viewport centre.

use crate::constants::{PADDING_DEFAULT, PADDING_SMALL, PADDING_SMALL_BELOW_PX};
use crate::state::ContainerSize;
use glam::DVec2;

/// Normalized rectangle the viewport centre may occupy without the circle
/// leaving the image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Bounds pinned to the centre; used when the viewport cannot move.
    pub const MIDPOINT: Bounds = Bounds {
        min_x: 0.5,
        max_x: 0.5,
        min_y: 0.5,
        max_y: 0.5,
    };

    #[inline]
    pub fn min(&self) -> DVec2 {
        DVec2::new(self.min_x, self.min_y)
    }

    #[inline]
    pub fn max(&self) -> DVec2 {
        DVec2::new(self.max_x, self.max_y)
    }

    /// Nearest point inside the rectangle. Points already inside are returned unchanged.
    #[inline]
    pub fn clamp(&self, p: DVec2) -> DVec2 {
        DVec2::new(
            p.x.clamp(self.min_x, self.max_x),
            p.y.clamp(self.min_y, self.max_y),
        )
    }

    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }
}

/// Dead-zone padding for a container width.
#[inline]
pub fn padding_for_width(container_width: f64) -> f64 {
    if container_width < PADDING_SMALL_BELOW_PX {
        PADDING_SMALL
    } else {
        PADDING_DEFAULT
    }
}

/// Compute the allowed rectangle for a container and viewport radius (px).
///
/// An axis on which the circle does not fit collapses to `0.5`, which means
/// the viewport cannot move along it. Unusable containers (zero, negative or
/// non-finite sizes) and non-finite radii yield [`Bounds::MIDPOINT`].
pub fn compute_bounds(container: ContainerSize, radius_px: f64) -> Bounds {
    if !container.is_usable() || !radius_px.is_finite() {
        return Bounds::MIDPOINT;
    }
    let padding = padding_for_width(container.width);
    let (min_x, max_x) = axis_range(radius_px / container.width, padding);
    let (min_y, max_y) = axis_range(radius_px / container.height, padding);
    Bounds {
        min_x,
        max_x,
        min_y,
        max_y,
    }
}

#[inline]
fn axis_range(radius_norm: f64, padding: f64) -> (f64, f64) {
    let lo = radius_norm + padding;
    let hi = 1.0 - radius_norm - padding;
    if hi < lo {
        (0.5, 0.5)
    } else {
        (lo, hi)
    }
}

/// Memoized [`compute_bounds`] keyed on `(width, height, radius)`.
///
/// Purely an optimisation: a miss recomputes from first principles.
#[derive(Clone, Debug, Default)]
pub struct BoundsCache {
    entry: Option<(ContainerSize, f64, Bounds)>,
}

impl BoundsCache {
    pub fn get(&mut self, container: ContainerSize, radius_px: f64) -> Bounds {
        match self.entry {
            Some((c, r, b)) if c == container && r == radius_px => b,
            _ => {
                let b = compute_bounds(container, radius_px);
                log::trace!(
                    "[bounds] recomputed for {}x{} r={:.1}: x=[{:.4},{:.4}] y=[{:.4},{:.4}]",
                    container.width,
                    container.height,
                    radius_px,
                    b.min_x,
                    b.max_x,
                    b.min_y,
                    b.max_y
                );
                self.entry = Some((container, radius_px, b));
                b
            }
        }
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn is_cached(&self) -> bool {
        self.entry.is_some()
    }
}
