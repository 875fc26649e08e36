//! Blocking line console for engines driven from an event-driven host.
//!
//! Console engines (UCI chess engines being the usual example) expect to sit in a loop calling
//! "read a line" and "write a line" as if attached to a terminal. A host with its own event loop
//! wants to push input whenever the user submits it and be told whenever a line of output is
//! ready. [`Bridge`] reconciles the two:
//!
//! - input goes through a single-slot [`Mailbox`] that the engine thread blocks on,
//! - output goes through a [`LineFramer`] that turns arbitrary write chunks into line units.
//!
//! [`launch`] wires a [`Bridge`] to an [`Engine`] running on its own worker thread and hands back
//! the [`EngineHandle`] plus a [`HostInbox`] to poll for output.

use std::io::{BufRead, Write};

pub mod bridge;
pub mod config;
pub mod error;
pub mod framer;
pub mod host;
pub mod launcher;
pub mod mailbox;

pub use bridge::Bridge;
pub use config::{BridgeConfig, FramingMode};
pub use error::Error;
pub use framer::{LineBuffer, LineFramer};
pub use host::HostInbox;
pub use launcher::{launch, launch_with, Engine, EngineHandle};
pub use mailbox::Mailbox;

/// The blocking line I/O an engine loop runs against.
pub trait Console {
    /// Write some output. Need not be a whole line.
    fn write(&mut self, text: &str);

    /// Block until a line of input is available.
    ///
    /// `None` means the input side has been closed and no more lines will arrive.
    fn read_line(&mut self) -> Option<String>;
}

/// Console over a plain reader/writer pair, e.g. a locked stdin and stdout.
pub struct Core<Stdin: BufRead, Stdout: Write> {
    stdin: Stdin,
    stdout: Stdout,
}

impl<I: BufRead, O: Write> Core<I, O> {
    #[inline]
    pub fn new(stdin: I, stdout: O) -> Self {
        Self { stdin, stdout }
    }

    /// Give back the underlying reader and writer.
    pub fn into_inner(self) -> (I, O) {
        (self.stdin, self.stdout)
    }
}

impl<I: BufRead, O: Write> Console for Core<I, O> {
    fn write(&mut self, text: &str) {
        let result = self
            .stdout
            .write_all(text.as_bytes())
            .and_then(|()| self.stdout.flush());

        if let Err(error) = result {
            tracing::warn!(%error, "console write failed");
        }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();

        match self.stdin.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(line)
            }
            Err(error) => {
                tracing::warn!(%error, "console read failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn core_reads_lines_without_terminators() {
        let mut core = Core::new(Cursor::new("uci\r\nisready\nquit"), Vec::new());

        assert_eq!(core.read_line().as_deref(), Some("uci"));
        assert_eq!(core.read_line().as_deref(), Some("isready"));
        assert_eq!(core.read_line().as_deref(), Some("quit"));
        assert_eq!(core.read_line(), None);
    }

    #[test]
    fn core_writes_through() {
        let mut core = Core::new(Cursor::new(""), Vec::new());
        core.write("readyok");
        core.write("\n");

        let (_, out) = core.into_inner();
        assert_eq!(out, b"readyok\n");
    }
}
