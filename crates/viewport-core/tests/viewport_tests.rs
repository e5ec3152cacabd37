// Host-side tests for the sample pipeline: throttling, debounced resizes,
// source preemption and boundary containment over long input sequences.

use viewport_core::constants::{BASELINE_FRAME_MS, POINTER_THROTTLE_MS, RESIZE_DEBOUNCE_MS};
use viewport_core::*;

fn desktop() -> ContainerSize {
    ContainerSize::new(1000.0, 800.0)
}

fn keys(dirs: &[Direction]) -> InputSample {
    InputSample::KeyChange(dirs.iter().copied().collect())
}

#[test]
fn starts_centred() {
    let vp = Viewport::new(desktop());
    assert_eq!(vp.mode(), MotionMode::Idle);
    assert_eq!(vp.state().position.x, 0.5);
    assert_eq!(vp.state().position.y, 0.5);
    assert_eq!(vp.output().pixel_x, 500.0);
}

#[test]
fn pointer_samples_are_throttled() {
    let mut vp = Viewport::new(desktop());
    assert!(vp
        .handle(InputSample::Pointer { x: 100.0, y: 100.0 }, 0.0)
        .is_some());
    let after_first = vp.state();
    assert!(vp
        .handle(InputSample::Pointer { x: 100.0, y: 100.0 }, 3.0)
        .is_none());
    assert_eq!(vp.state(), after_first);
    assert!(vp
        .handle(
            InputSample::Pointer { x: 100.0, y: 100.0 },
            POINTER_THROTTLE_MS
        )
        .is_some());
    assert_ne!(vp.state(), after_first);
}

#[test]
fn rejected_pointer_samples_do_not_consume_the_throttle() {
    let mut vp = Viewport::new(desktop());
    assert!(vp
        .handle(InputSample::Pointer { x: -50.0, y: 100.0 }, 0.0)
        .is_none());
    assert!(vp
        .handle(InputSample::Pointer { x: 100.0, y: 100.0 }, 1.0)
        .is_some());
    assert_eq!(vp.active_source(), Some(InputSource::Pointer));
}

#[test]
fn touch_shares_the_pointer_throttle() {
    let mut vp = Viewport::new(desktop());
    assert!(vp.handle(InputSample::Pointer { x: 10.0, y: 10.0 }, 0.0).is_some());
    assert!(vp.handle(InputSample::Touch { x: 900.0, y: 700.0 }, 1.0).is_none());
    assert!(vp.handle(InputSample::Touch { x: 900.0, y: 700.0 }, 20.0).is_some());
    assert_eq!(vp.active_source(), Some(InputSource::Touch));
}

#[test]
fn resize_bursts_collapse_into_one_update() {
    let mut vp = Viewport::new(desktop());
    let radius_before = vp.state().radius;
    assert!(vp
        .handle(InputSample::Resize(ContainerSize::new(900.0, 700.0)), 0.0)
        .is_none());
    assert!(vp
        .handle(InputSample::Resize(ContainerSize::new(400.0, 700.0)), 50.0)
        .is_none());
    assert_eq!(vp.pending_resize_deadline(), Some(50.0 + RESIZE_DEBOUNCE_MS));

    // Still inside the quiet period of the second event
    assert!(vp.poll(120.0).is_none());
    assert_eq!(vp.container(), desktop());
    assert_eq!(vp.state().radius, radius_before);

    let out = vp.poll(50.0 + RESIZE_DEBOUNCE_MS).expect("resize should flush");
    assert_eq!(vp.container(), ContainerSize::new(400.0, 700.0));
    assert_eq!(out.radius_px, 60.0);
    assert!(vp.pending_resize_deadline().is_none());
    assert!(vp.poll(1000.0).is_none());
}

#[test]
fn resize_now_bypasses_debounce() {
    let mut vp = Viewport::new(ContainerSize::new(0.0, 0.0));
    let out = vp.resize_now(ContainerSize::new(1920.0, 1080.0));
    assert_eq!(out.pixel_x, 960.0);
    assert_eq!(out.pixel_y, 540.0);
    assert!((out.radius_px - 162.0).abs() < 1e-9);
}

#[test]
fn keyboard_preempts_pointer_and_pointer_stops_the_loop() {
    let mut vp = Viewport::new(desktop());
    vp.handle(InputSample::Pointer { x: 800.0, y: 600.0 }, 0.0);
    assert_eq!(vp.mode(), MotionMode::PointerTracking);
    assert!(!vp.wants_frames());

    assert!(vp.handle(keys(&[Direction::Left]), 10.0).is_none());
    assert_eq!(vp.mode(), MotionMode::KeyboardMoving);
    assert!(vp.wants_frames());
    assert_eq!(vp.frame(10.0 + BASELINE_FRAME_MS), FrameOutcome::Continue);

    vp.handle(InputSample::Pointer { x: 200.0, y: 200.0 }, 40.0);
    assert_eq!(vp.mode(), MotionMode::PointerTracking);
    assert!(!vp.wants_frames());
    assert_eq!(vp.frame(40.0 + BASELINE_FRAME_MS), FrameOutcome::Stop);
}

#[test]
fn key_up_after_pointer_preemption_resumes_movement_at_one_frame_step() {
    let mut vp = Viewport::new(desktop());
    vp.handle(keys(&[Direction::Left, Direction::Up]), 0.0);
    assert!(vp.start_frames(0.0));
    assert_eq!(vp.frame(BASELINE_FRAME_MS), FrameOutcome::Continue);

    vp.handle(InputSample::Pointer { x: 500.0, y: 400.0 }, 20.0);
    assert_eq!(vp.frame(20.0 + BASELINE_FRAME_MS), FrameOutcome::Stop);

    // Releasing Up leaves Left held: movement resumes and the host must restart its loop
    vp.handle(keys(&[Direction::Left]), 100.0);
    assert_eq!(vp.mode(), MotionMode::KeyboardMoving);
    assert!(vp.wants_frames());

    // A loop that starts late still moves one frame's worth on its first tick
    assert!(vp.start_frames(2100.0));
    let x0 = vp.state().position.x;
    assert_eq!(vp.frame(2100.0 + BASELINE_FRAME_MS), FrameOutcome::Continue);
    let dx = vp.state().position.x - x0;
    assert!((dx + 0.002).abs() < 1e-9, "dx = {dx}");
}

#[test]
fn start_frames_is_inert_without_held_keys() {
    let mut vp = Viewport::new(desktop());
    assert!(!vp.start_frames(50.0));
    assert_eq!(vp.frame(50.0 + BASELINE_FRAME_MS), FrameOutcome::Stop);
    assert_eq!(vp.state().position.x, 0.5);
}

#[test]
fn releasing_all_keys_ends_the_loop() {
    let mut vp = Viewport::new(desktop());
    vp.handle(keys(&[Direction::Up, Direction::Right]), 0.0);
    let mut t = 0.0;
    for _ in 0..5 {
        t += BASELINE_FRAME_MS;
        assert_eq!(vp.frame(t), FrameOutcome::Continue);
    }
    vp.handle(keys(&[]), t);
    assert_eq!(vp.mode(), MotionMode::Idle);
    assert_eq!(vp.frame(t + BASELINE_FRAME_MS), FrameOutcome::Stop);
    let p = vp.state().position;
    assert!(p.x > 0.5 && p.y < 0.5);
}

#[test]
fn oversized_viewport_never_moves() {
    let mut vp = Viewport::new(ContainerSize::new(100.0, 100.0));
    vp.handle(InputSample::Pointer { x: 0.0, y: 0.0 }, 0.0);
    vp.handle(keys(&[Direction::Right]), 20.0);
    vp.frame(20.0 + BASELINE_FRAME_MS);
    assert_eq!(vp.state().position.x, 0.5);
    assert_eq!(vp.state().position.y, 0.5);
}

/// Small deterministic generator so the sequence is reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn unit(&mut self) -> f64 {
        (self.next() % 10_000) as f64 / 10_000.0
    }
}

#[test]
fn position_stays_inside_current_bounds_for_any_sequence() {
    let mut rng = Lcg(7);
    let mut vp = Viewport::new(desktop());
    let mut keys_held = KeyTracker::default();
    let key_names = ["ArrowLeft", "ArrowRight", "ArrowUp", "ArrowDown", "a", "d", "w", "s"];
    let mut now = 0.0;

    for step in 0..5000 {
        now += 1.0 + rng.unit() * 20.0;
        let c = vp.container();
        match rng.next() % 6 {
            0 => {
                let x = rng.unit() * c.width * 1.2 - c.width * 0.1;
                let y = rng.unit() * c.height * 1.2 - c.height * 0.1;
                vp.handle(InputSample::Pointer { x, y }, now);
            }
            1 => {
                let x = rng.unit() * c.width;
                let y = rng.unit() * c.height;
                vp.handle(InputSample::Touch { x, y }, now);
            }
            2 => {
                let key = key_names[(rng.next() % key_names.len() as u64) as usize];
                if rng.next() % 2 == 0 {
                    keys_held.press(key);
                } else {
                    keys_held.release(key);
                }
                vp.handle(InputSample::KeyChange(keys_held.held()), now);
            }
            3 => {
                let w = 50.0 + rng.unit() * 3000.0;
                let h = 50.0 + rng.unit() * 2000.0;
                if rng.next() % 2 == 0 {
                    vp.resize_now(ContainerSize::new(w, h));
                } else {
                    vp.handle(InputSample::Resize(ContainerSize::new(w, h)), now);
                }
            }
            _ => {
                vp.frame(now);
            }
        }
        vp.poll(now);

        let b = vp.bounds();
        let s = vp.state();
        assert!(
            b.contains(s.position),
            "step {step}: {:?} outside {b:?}",
            s.position
        );
        assert!((60.0..=200.0).contains(&s.radius), "step {step}: r={}", s.radius);
    }
}
