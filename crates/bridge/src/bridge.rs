//! Engine-facing console composed from the mailbox and the line framer.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::framer::LineBuffer;
use crate::{Console, FramingMode, Mailbox};

/// Callback receiving each flushed output unit, on the engine thread.
pub type Dispatch = Box<dyn Fn(String) + Send + Sync>;

/// The two halves of the engine's console.
///
/// Engine side: [`Bridge::write`] and the blocking [`Bridge::read_line`].
/// Host side: [`Bridge::send_to_engine`], and the dispatch callback given at construction.
///
/// Shared between host and engine through an [`Arc`].
pub struct Bridge {
    inbound: Mailbox,
    outbound: Mutex<LineBuffer>,
    dispatch: Dispatch,
}

impl Bridge {
    pub fn new(framing: FramingMode, dispatch: impl Fn(String) + Send + Sync + 'static) -> Self {
        Self {
            inbound: Mailbox::new(),
            outbound: Mutex::new(LineBuffer::new(framing)),
            dispatch: Box::new(dispatch),
        }
    }

    /// Hand `text` to the engine. Replaces any input the engine has not read yet.
    #[inline]
    pub fn send_to_engine(&self, text: impl Into<String>) {
        self.inbound.submit(text);
    }

    /// Whether input sent earlier is still waiting for the engine to read it.
    #[inline]
    pub fn has_pending_input(&self) -> bool {
        self.inbound.is_pending()
    }

    /// Engine output. Complete units are dispatched to the host from within this call.
    pub fn write(&self, text: &str) {
        // dispatch runs unlocked so it may block or call back into the bridge
        let units = self.outbound().push(text);

        for unit in units {
            tracing::trace!(unit = %unit.trim_end(), "dispatch");
            (self.dispatch)(unit);
        }
    }

    /// Block the calling (engine) thread until the host sends something.
    ///
    /// Returns `None` after [`Bridge::close`].
    #[inline]
    pub fn read_line(&self) -> Option<String> {
        self.inbound.take_next()
    }

    /// Close the input side, releasing an engine blocked in [`Bridge::read_line`].
    #[inline]
    pub fn close(&self) {
        self.inbound.close();
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.inbound.is_closed()
    }

    /// Output the engine wrote that has not been flushed to the host.
    pub fn pending_output(&self) -> String {
        self.outbound().pending().to_owned()
    }

    #[inline]
    fn outbound(&self) -> MutexGuard<'_, LineBuffer> {
        self.outbound.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Bridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bridge")
            .field("inbound", &self.inbound)
            .field("outbound", &self.outbound)
            .finish_non_exhaustive()
    }
}

impl Console for Arc<Bridge> {
    #[inline]
    fn write(&mut self, text: &str) {
        Bridge::write(self, text);
    }

    #[inline]
    fn read_line(&mut self) -> Option<String> {
        Bridge::read_line(self)
    }
}
