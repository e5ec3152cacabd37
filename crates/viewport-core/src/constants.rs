//! Viewport tuning constants.
//!
//! The values were tuned by feel rather than derived from a physical model,
//! so they are kept literal. Everything that shapes movement, sizing or
//! clamping lives here so tests can reference the same numbers.

// Smoothing factors (fraction of remaining distance covered per sample)
pub const POINTER_SMOOTHING: f64 = 0.15;
pub const TOUCH_SMOOTHING: f64 = 0.4; // no hover pre-positioning on touch, so respond faster

// Boundary dead-zone in normalized units
pub const PADDING_SMALL: f64 = 0.01;
pub const PADDING_DEFAULT: f64 = 0.02;
pub const PADDING_SMALL_BELOW_PX: f64 = 768.0;

// Keyboard speed table (normalized units per 60Hz frame), keyed on container width
pub const KEYBOARD_SPEED_NARROW: f64 = 0.003;
pub const KEYBOARD_SPEED_MEDIUM: f64 = 0.0025;
pub const KEYBOARD_SPEED_WIDE: f64 = 0.002;
pub const KEYBOARD_NARROW_BELOW_PX: f64 = 480.0;
pub const KEYBOARD_MEDIUM_BELOW_PX: f64 = 768.0;

// Baseline frame time the keyboard speed table is expressed against
pub const BASELINE_FRAME_MS: f64 = 1000.0 / 60.0;

// Device classes, by the container's shorter dimension
pub const MOBILE_SMALL_BELOW_PX: f64 = 480.0;
pub const MOBILE_LARGE_BELOW_PX: f64 = 768.0;
pub const TABLET_BELOW_PX: f64 = 1024.0;

// Radius as a fraction of the shorter dimension, and its per-class cap (px)
pub const RADIUS_FRACTION_MOBILE_SMALL: f64 = 0.15;
pub const RADIUS_FRACTION_MOBILE_LARGE: f64 = 0.18;
pub const RADIUS_FRACTION_TABLET: f64 = 0.20;
pub const RADIUS_FRACTION_DESKTOP: f64 = 0.15;
pub const RADIUS_CAP_MOBILE_SMALL: f64 = 80.0;
pub const RADIUS_CAP_MOBILE_LARGE: f64 = 100.0;
pub const RADIUS_CAP_TABLET: f64 = 140.0;
pub const RADIUS_CAP_DESKTOP: f64 = 180.0;

// Final radius clamp (px)
pub const MIN_RADIUS: f64 = 60.0;
pub const MAX_RADIUS: f64 = 200.0;

// Aspect-ratio correction for extreme letterbox shapes
pub const ASPECT_EXTREME: f64 = 2.5;
pub const ASPECT_EXTREME_FACTOR: f64 = 0.75;
pub const ASPECT_WIDE: f64 = 2.0;
pub const ASPECT_WIDE_FACTOR: f64 = 0.85;

// Input scheduling
pub const POINTER_THROTTLE_MS: f64 = 8.0; // at most one processed pointer/touch sample per interval
pub const RESIZE_DEBOUNCE_MS: f64 = 100.0; // quiet period before a resize burst is applied

// Startup position (normalized)
pub const INITIAL_POSITION: [f64; 2] = [0.5, 0.5];
