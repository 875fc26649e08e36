//! Single-slot blocking handoff from the host to the engine thread.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Slot {
    pending: Option<String>,
    closed: bool,
}

/// Holds at most one message for the engine.
///
/// Submitting while a message is still pending replaces it; the older message is never seen by
/// the consumer. This models an always-current "next instruction" rather than a queue.
#[derive(Debug, Default)]
pub struct Mailbox {
    slot: Mutex<Slot>,
    ready: Condvar,
}

impl Mailbox {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `text` for the consumer, overwriting anything unconsumed. Never blocks.
    ///
    /// Input submitted after [`Mailbox::close`] is dropped.
    pub fn submit(&self, text: impl Into<String>) {
        let text = text.into();
        let mut slot = self.lock();

        if slot.closed {
            tracing::debug!(input = %text, "mailbox closed, dropping input");
            return;
        }

        tracing::trace!(input = %text, "submit");
        if let Some(dropped) = slot.pending.replace(text) {
            tracing::debug!(%dropped, "overwrote unconsumed input");
        }

        drop(slot);
        self.ready.notify_one();
    }

    /// Block until a message is available and take it, leaving the slot empty.
    ///
    /// Returns `None` once the mailbox is closed and nothing is left pending.
    pub fn take_next(&self) -> Option<String> {
        let mut slot = self.lock();

        loop {
            if let Some(text) = slot.pending.take() {
                tracing::trace!(input = %text, "take");
                return Some(text);
            }

            if slot.closed {
                return None;
            }

            slot = self
                .ready
                .wait(slot)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Take the pending message if there is one, without blocking.
    pub fn try_take(&self) -> Option<String> {
        self.lock().pending.take()
    }

    /// Whether a message is waiting to be taken.
    pub fn is_pending(&self) -> bool {
        self.lock().pending.is_some()
    }

    /// Wake any blocked consumer and refuse further input.
    ///
    /// A message already pending is still handed out by the next [`Mailbox::take_next`].
    pub fn close(&self) {
        self.lock().closed = true;
        self.ready.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    #[inline]
    fn lock(&self) -> MutexGuard<'_, Slot> {
        // the slot holds no invariant a panicking holder could break
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
