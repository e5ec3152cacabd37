//! Reduction of raw pointer/touch/key input into movement intents.
//!
//! Pointer and touch samples become absolute targets in normalized space;
//! the held-key set becomes a unit heading for the keyboard loop. Nothing
//! here clamps: bounds are applied downstream by the motion controller.

use crate::state::ContainerSize;
use fnv::FnvHashSet;
use glam::DVec2;
use smallvec::SmallVec;
use std::f64::consts::FRAC_1_SQRT_2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a `KeyboardEvent.key` value to a direction. Arrow keys and WASD
    /// are aliases; matching is case-insensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "arrowup" | "w" => Some(Direction::Up),
            "arrowdown" | "s" => Some(Direction::Down),
            "arrowleft" | "a" => Some(Direction::Left),
            "arrowright" | "d" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Set of currently held movement directions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeldDirections(SmallVec<[Direction; 4]>);

impl HeldDirections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, d: Direction) {
        if !self.0.contains(&d) {
            self.0.push(d);
        }
    }

    pub fn remove(&mut self, d: Direction) {
        self.0.retain(|held| *held != d);
    }

    #[inline]
    pub fn contains(&self, d: Direction) -> bool {
        self.0.contains(&d)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Unit heading for the held set. Diagonals are scaled by `1/√2` so they
    /// cover the same distance per tick as a single axis. Opposing keys cancel.
    pub fn heading(&self) -> DVec2 {
        let axis = |neg: Direction, pos: Direction| -> f64 {
            f64::from(u8::from(self.contains(pos))) - f64::from(u8::from(self.contains(neg)))
        };
        let dx = axis(Direction::Left, Direction::Right);
        let dy = axis(Direction::Up, Direction::Down);
        if dx != 0.0 && dy != 0.0 {
            DVec2::new(dx * FRAC_1_SQRT_2, dy * FRAC_1_SQRT_2)
        } else {
            DVec2::new(dx, dy)
        }
    }
}

impl FromIterator<Direction> for HeldDirections {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut held = HeldDirections::new();
        for d in iter {
            held.insert(d);
        }
        held
    }
}

/// Tracks raw held keys so that aliases coalesce: releasing `a` keeps Left
/// held while `ArrowLeft` is still down.
#[derive(Clone, Debug, Default)]
pub struct KeyTracker {
    pressed: FnvHashSet<String>,
}

impl KeyTracker {
    /// Record a key press. Returns true when the key is a movement key.
    pub fn press(&mut self, key: &str) -> bool {
        if Direction::from_key(key).is_none() {
            return false;
        }
        self.pressed.insert(key.to_ascii_lowercase());
        true
    }

    /// Record a key release. Returns true when the key is a movement key.
    pub fn release(&mut self, key: &str) -> bool {
        if Direction::from_key(key).is_none() {
            return false;
        }
        self.pressed.remove(&key.to_ascii_lowercase());
        true
    }

    /// Forget every held key, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.pressed.clear();
    }

    pub fn held(&self) -> HeldDirections {
        self.pressed
            .iter()
            .filter_map(|k| Direction::from_key(k))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    Pointer,
    Touch,
    Keyboard,
}

/// A raw sample from the event layer. Coordinates are container-local px.
#[derive(Clone, Debug, PartialEq)]
pub enum InputSample {
    Pointer { x: f64, y: f64 },
    Touch { x: f64, y: f64 },
    KeyChange(HeldDirections),
    Resize(ContainerSize),
}

/// Source-agnostic movement request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    /// Move toward a normalized target (pointer/touch).
    Absolute { target: DVec2, source: InputSource },
    /// Keep moving along a heading while keys are held.
    Relative { heading: DVec2 },
    /// No movement key is held any more.
    Release,
}

/// Turns samples into intents and arbitrates between sources.
///
/// The most recent source wins; there is no blending. Pointer samples that
/// fall outside the container produce nothing and the last valid target is
/// kept.
#[derive(Clone, Debug, Default)]
pub struct InputReducer {
    active: Option<InputSource>,
    last_target: Option<DVec2>,
}

impl InputReducer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(&mut self, sample: &InputSample, container: ContainerSize) -> Option<Intent> {
        match *sample {
            InputSample::Pointer { x, y } => self.absolute(x, y, container, InputSource::Pointer),
            InputSample::Touch { x, y } => self.absolute(x, y, container, InputSource::Touch),
            InputSample::KeyChange(ref held) => {
                if held.is_empty() {
                    if self.active == Some(InputSource::Keyboard) {
                        self.active = None;
                        Some(Intent::Release)
                    } else {
                        None
                    }
                } else {
                    self.active = Some(InputSource::Keyboard);
                    Some(Intent::Relative {
                        heading: held.heading(),
                    })
                }
            }
            InputSample::Resize(_) => None,
        }
    }

    fn absolute(
        &mut self,
        x: f64,
        y: f64,
        container: ContainerSize,
        source: InputSource,
    ) -> Option<Intent> {
        let target = normalize_point(x, y, container)?;
        self.active = Some(source);
        self.last_target = Some(target);
        Some(Intent::Absolute { target, source })
    }

    #[inline]
    pub fn active_source(&self) -> Option<InputSource> {
        self.active
    }

    /// Last accepted pointer/touch target, in normalized space.
    #[inline]
    pub fn last_target(&self) -> Option<DVec2> {
        self.last_target
    }
}

/// Container-local px to normalized coordinates. `None` when the point is not
/// finite, lies outside the container, or the container is unusable.
pub fn normalize_point(x: f64, y: f64, container: ContainerSize) -> Option<DVec2> {
    if !container.is_usable() || !x.is_finite() || !y.is_finite() {
        log::warn!("[input] dropped sample ({x}, {y}) for {container:?}");
        return None;
    }
    if !(0.0..=container.width).contains(&x) || !(0.0..=container.height).contains(&y) {
        log::trace!("[input] ({x:.1}, {y:.1}) outside container; holding last target");
        return None;
    }
    Some(DVec2::new(x / container.width, y / container.height))
}
