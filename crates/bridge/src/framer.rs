//! Turns the engine's chunked writes into line units for the host.

use std::mem;

use smallvec::SmallVec;

use crate::FramingMode;

/// Line terminator.
pub const TERMINATOR: char = '\n';

/// Units completed by a single write. Usually zero or one.
pub type Units = SmallVec<[String; 1]>;

/// Accumulator for output not yet terminated, without any notion of where units go.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    buffer: String,
    mode: FramingMode,
}

impl LineBuffer {
    #[inline]
    pub fn new(mode: FramingMode) -> Self {
        Self {
            buffer: String::new(),
            mode,
        }
    }

    /// Append `chunk` and take out whatever has become complete.
    pub fn push(&mut self, chunk: &str) -> Units {
        let mut units = Units::new();

        // the buffer never holds a terminator between pushes
        match self.mode {
            FramingMode::WholeBuffer => {
                self.buffer.push_str(chunk);
                if chunk.contains(TERMINATOR) {
                    units.push(mem::take(&mut self.buffer));
                }
            }
            FramingMode::PerLine => {
                let Some(last) = chunk.rfind(TERMINATOR) else {
                    self.buffer.push_str(chunk);
                    return units;
                };

                let (complete, tail) = chunk.split_at(last + TERMINATOR.len_utf8());
                self.buffer.push_str(complete);
                units.extend(self.buffer.split_inclusive(TERMINATOR).map(str::to_owned));

                self.buffer.clear();
                self.buffer.push_str(tail);
            }
        }

        units
    }

    /// Output pushed so far that has not been taken out.
    #[inline]
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    #[inline]
    pub fn mode(&self) -> FramingMode {
        self.mode
    }
}

/// Accumulates engine output and hands complete units to `dispatch`.
///
/// The dispatch callback runs on the writing (engine) thread and must not block; it should only
/// hand the unit over to the host's own scheduling.
pub struct LineFramer<D: FnMut(String)> {
    buffer: LineBuffer,
    dispatch: D,
}

impl<D: FnMut(String)> LineFramer<D> {
    #[inline]
    pub fn new(mode: FramingMode, dispatch: D) -> Self {
        Self {
            buffer: LineBuffer::new(mode),
            dispatch,
        }
    }

    /// Append `chunk` and flush whatever has become complete.
    pub fn write(&mut self, chunk: &str) {
        for unit in self.buffer.push(chunk) {
            tracing::trace!(unit = %unit.trim_end(), "dispatch");
            (self.dispatch)(unit);
        }
    }

    /// Output written so far that has not been flushed.
    #[inline]
    pub fn pending(&self) -> &str {
        self.buffer.pending()
    }

    #[inline]
    pub fn mode(&self) -> FramingMode {
        self.buffer.mode()
    }
}

impl<D: FnMut(String)> std::fmt::Debug for LineFramer<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineFramer")
            .field("buffer", &self.buffer)
            .finish_non_exhaustive()
    }
}
