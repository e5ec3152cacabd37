use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewportError {
    #[error("viewport worker has stopped")]
    WorkerClosed,
    #[error("viewport worker panicked")]
    WorkerPanicked,
}
