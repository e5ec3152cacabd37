// Host-side tests for the thread-confined viewport worker.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use viewport_core::*;

const WAIT: Duration = Duration::from_secs(2);

fn desktop() -> ContainerSize {
    ContainerSize::new(1000.0, 800.0)
}

#[test]
fn worker_publishes_initial_output() {
    let (tx, rx) = mpsc::channel();
    let worker = spawn_worker(desktop(), move |out| {
        _ = tx.send(out);
    });
    let first = rx.recv_timeout(WAIT).expect("initial output");
    assert_eq!(first.pixel_x, 500.0);
    assert_eq!(first.pixel_y, 400.0);
    worker.shutdown().expect("clean shutdown");
}

#[test]
fn worker_applies_pointer_samples() {
    let (tx, rx) = mpsc::channel();
    let worker = spawn_worker(desktop(), move |out| {
        _ = tx.send(out);
    });
    let initial = rx.recv_timeout(WAIT).expect("initial output");
    worker
        .send(InputSample::Pointer { x: 900.0, y: 400.0 })
        .expect("worker alive");
    let moved = rx.recv_timeout(WAIT).expect("pointer output");
    assert!(moved.pixel_x > initial.pixel_x);
    assert_eq!(moved.pixel_y, initial.pixel_y);
    worker.shutdown().expect("clean shutdown");
}

#[test]
fn worker_runs_keyboard_loop_until_release() {
    let (tx, rx) = mpsc::channel();
    let worker = spawn_worker(desktop(), move |out| {
        _ = tx.send(out);
    });
    let initial = rx.recv_timeout(WAIT).expect("initial output");

    let left: HeldDirections = [Direction::Left].into_iter().collect();
    worker.send(InputSample::KeyChange(left)).expect("worker alive");
    let first_tick = rx.recv_timeout(WAIT).expect("keyboard frame");
    assert!(first_tick.pixel_x < initial.pixel_x);

    thread::sleep(Duration::from_millis(80));
    worker
        .send(InputSample::KeyChange(HeldDirections::new()))
        .expect("worker alive");
    worker.shutdown().expect("clean shutdown");

    let last = rx.try_iter().last().unwrap_or(first_tick);
    assert!(last.pixel_x <= first_tick.pixel_x);
}

#[test]
fn worker_flushes_debounced_resize() {
    let (tx, rx) = mpsc::channel();
    let worker = spawn_worker(desktop(), move |out| {
        _ = tx.send(out);
    });
    rx.recv_timeout(WAIT).expect("initial output");
    worker
        .send(InputSample::Resize(ContainerSize::new(1920.0, 1080.0)))
        .expect("worker alive");
    let resized = rx.recv_timeout(WAIT).expect("resize output");
    assert_eq!(resized.pixel_x, 960.0);
    assert!((resized.radius_px - 162.0).abs() < 1e-9);
    worker.shutdown().expect("clean shutdown");
}

#[test]
fn dropping_the_handle_stops_the_worker() {
    let (tx, rx) = mpsc::channel();
    let worker = spawn_worker(desktop(), move |out| {
        _ = tx.send(out);
    });
    rx.recv_timeout(WAIT).expect("initial output");
    drop(worker);
    // The sink (and its sender) is dropped once the worker thread exits
    assert!(matches!(
        rx.recv_timeout(WAIT),
        Err(mpsc::RecvTimeoutError::Disconnected)
    ));
}
