//! Viewport radius from container dimensions.

use crate::constants::*;
use crate::state::ContainerSize;

/// Size class of the container, by its shorter dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    MobileSmall,
    MobileLarge,
    Tablet,
    Desktop,
}

impl DeviceClass {
    pub fn classify(container: ContainerSize) -> Self {
        let s = container.shorter();
        if s < MOBILE_SMALL_BELOW_PX {
            DeviceClass::MobileSmall
        } else if s < MOBILE_LARGE_BELOW_PX {
            DeviceClass::MobileLarge
        } else if s < TABLET_BELOW_PX {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }

    /// `(fraction of shorter dimension, cap in px)`
    #[inline]
    pub fn radius_rule(self) -> (f64, f64) {
        match self {
            DeviceClass::MobileSmall => (RADIUS_FRACTION_MOBILE_SMALL, RADIUS_CAP_MOBILE_SMALL),
            DeviceClass::MobileLarge => (RADIUS_FRACTION_MOBILE_LARGE, RADIUS_CAP_MOBILE_LARGE),
            DeviceClass::Tablet => (RADIUS_FRACTION_TABLET, RADIUS_CAP_TABLET),
            DeviceClass::Desktop => (RADIUS_FRACTION_DESKTOP, RADIUS_CAP_DESKTOP),
        }
    }
}

/// Multiplier applied on very elongated containers.
#[inline]
pub fn aspect_correction(container: ContainerSize) -> f64 {
    let ratio = container.longer() / container.shorter();
    if ratio > ASPECT_EXTREME {
        ASPECT_EXTREME_FACTOR
    } else if ratio > ASPECT_WIDE {
        ASPECT_WIDE_FACTOR
    } else {
        1.0
    }
}

/// Radius in px for a container, clamped to `[MIN_RADIUS, MAX_RADIUS]`.
///
/// Unusable containers fall back to `MIN_RADIUS`.
pub fn compute_radius(container: ContainerSize) -> f64 {
    if !container.is_usable() {
        return MIN_RADIUS;
    }
    let (fraction, cap) = DeviceClass::classify(container).radius_rule();
    let base = (container.shorter() * fraction).min(cap);
    (base * aspect_correction(container)).clamp(MIN_RADIUS, MAX_RADIUS)
}

/// Caches the radius for the last container it was asked about.
///
/// Only resize notifications should reach [`ResponsiveSizer::update`]; the
/// pointer path reads [`ResponsiveSizer::radius`].
#[derive(Clone, Debug)]
pub struct ResponsiveSizer {
    container: ContainerSize,
    radius: f64,
}

impl ResponsiveSizer {
    pub fn new(container: ContainerSize) -> Self {
        Self {
            container,
            radius: compute_radius(container),
        }
    }

    pub fn update(&mut self, container: ContainerSize) -> f64 {
        if container != self.container {
            self.container = container;
            self.radius = compute_radius(container);
            log::debug!(
                "[resize] {}x{} class={:?} radius={:.1}",
                container.width,
                container.height,
                DeviceClass::classify(container),
                self.radius
            );
        }
        self.radius
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn container(&self) -> ContainerSize {
        self.container
    }
}
