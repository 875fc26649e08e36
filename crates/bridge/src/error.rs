use std::io;

/// Failures of the engine lifecycle.
///
/// The data path itself never fails: lost input, unread input and unterminated output are all
/// silent by nature and only show up in the logs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The worker thread could not be created.
    #[error("failed to spawn engine worker: {0}")]
    Spawn(#[source] io::Error),
    /// The engine panicked on the worker thread.
    #[error("engine worker panicked")]
    WorkerPanicked,
}
