//! Host-side delivery of engine output.

use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};

/// Receives the units flushed by the engine, in the order they were written.
///
/// Meant to be drained from the host's own loop, e.g. a redraw timer calling [`HostInbox::poll`].
#[derive(Debug, Clone)]
pub struct HostInbox {
    rx: Receiver<String>,
}

impl HostInbox {
    /// Create an inbox and the dispatch callback that feeds it.
    pub fn channel() -> (impl Fn(String) + Send + Sync + 'static, Self) {
        let (tx, rx) = unbounded();
        (dispatcher(tx), Self { rx })
    }

    /// Everything delivered since the last call, without blocking.
    pub fn poll(&self) -> Vec<String> {
        self.rx.try_iter().collect()
    }

    /// Wait up to `timeout` for the next unit.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<String> {
        match self.rx.recv_timeout(timeout) {
            Ok(unit) => Some(unit),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Wait for the next unit. `None` once the bridge feeding this inbox is gone.
    pub fn recv(&self) -> Option<String> {
        self.rx.recv().ok()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

fn dispatcher(tx: Sender<String>) -> impl Fn(String) + Send + Sync + 'static {
    move |unit| {
        if let Err(error) = tx.send(unit) {
            tracing::warn!(unit = %error.0.trim_end(), "host inbox dropped, discarding output");
        }
    }
}
