//! Thread-confined viewport for multi-threaded hosts.
//!
//! The [`Viewport`] lives on one worker thread; other threads only send
//! samples over a channel. The worker drives the keyboard loop at 60Hz while
//! keys are held and flushes debounced resizes on their deadline.

use crate::constants::BASELINE_FRAME_MS;
use crate::error::ViewportError;
use crate::input::InputSample;
use crate::motion::FrameOutcome;
use crate::state::{ContainerSize, RenderOutput};
use crate::viewport::Viewport;
use instant::Instant;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::JoinHandle;
use std::time::Duration;

enum Command {
    Sample(InputSample),
    Shutdown,
}

pub struct WorkerHandle {
    tx: mpsc::Sender<Command>,
    join: Option<JoinHandle<()>>,
}

impl WorkerHandle {
    pub fn send(&self, sample: InputSample) -> Result<(), ViewportError> {
        self.tx
            .send(Command::Sample(sample))
            .map_err(|_| ViewportError::WorkerClosed)
    }

    /// Stop the worker and wait for it to exit.
    pub fn shutdown(mut self) -> Result<(), ViewportError> {
        self.stop()
    }

    fn stop(&mut self) -> Result<(), ViewportError> {
        let Some(join) = self.join.take() else {
            return Ok(());
        };
        // A worker that already exited has dropped its receiver; joining still reports panics.
        _ = self.tx.send(Command::Shutdown);
        join.join().map_err(|_| ViewportError::WorkerPanicked)
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            log::error!("[worker] {e}");
        }
    }
}

impl std::fmt::Debug for WorkerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerHandle")
            .field("running", &self.join.is_some())
            .finish()
    }
}

/// Spawn a worker owning a fresh [`Viewport`]. `sink` receives the initial
/// output and every output after a state mutation, on the worker thread.
pub fn spawn_worker<F>(container: ContainerSize, sink: F) -> WorkerHandle
where
    F: FnMut(RenderOutput) + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    let join = std::thread::spawn(move || run(rx, container, sink));
    WorkerHandle {
        tx,
        join: Some(join),
    }
}

fn run<F>(rx: mpsc::Receiver<Command>, container: ContainerSize, mut sink: F)
where
    F: FnMut(RenderOutput),
{
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_secs_f64() * 1000.0;
    let mut viewport = Viewport::new(container);
    let mut next_frame: Option<f64> = None;
    sink(viewport.output());
    log::debug!("[worker] started");

    loop {
        let wake = match (next_frame, viewport.pending_resize_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        let msg = match wake {
            Some(at) => {
                let wait = Duration::from_secs_f64((at - now_ms()).max(0.0) / 1000.0);
                match rx.recv_timeout(wait) {
                    Ok(cmd) => Some(cmd),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            None => match rx.recv() {
                Ok(cmd) => Some(cmd),
                Err(_) => break,
            },
        };

        let now = now_ms();
        match msg {
            Some(Command::Shutdown) => break,
            Some(Command::Sample(sample)) => {
                if let Some(out) = viewport.handle(sample, now) {
                    sink(out);
                }
            }
            None => {}
        }
        if let Some(out) = viewport.poll(now) {
            sink(out);
        }

        if !viewport.wants_frames() {
            next_frame = None;
            continue;
        }
        match next_frame {
            Some(due) if now >= due => {
                if viewport.frame(now) == FrameOutcome::Continue {
                    sink(viewport.output());
                    next_frame = Some(now + BASELINE_FRAME_MS);
                } else {
                    next_frame = None;
                }
            }
            Some(_) => {}
            None => {
                viewport.start_frames(now);
                next_frame = Some(now + BASELINE_FRAME_MS);
            }
        }
    }
    log::debug!("[worker] stopped");
}
