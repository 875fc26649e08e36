//! Bridge configuration.

use strum::{Display, EnumString};

/// How the [`crate::LineFramer`] cuts the engine's output into units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum FramingMode {
    /// Flush the entire accumulated buffer as one unit as soon as it contains a terminator.
    ///
    /// Several lines written together arrive as a single unit, and bytes trailing the last
    /// terminator are flushed along with them.
    #[default]
    WholeBuffer,
    /// Flush every terminated line as its own unit and keep the unterminated tail buffered.
    PerLine,
}

/// Settings for [`crate::launch`].
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    pub framing: FramingMode,
    /// Name given to the engine worker thread.
    pub worker_name: String,
    /// Startup arguments handed to the engine.
    pub args: Vec<String>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            framing: FramingMode::default(),
            worker_name: "engine".to_owned(),
            args: Vec::new(),
        }
    }
}

impl BridgeConfig {
    #[inline]
    pub fn with_framing(mut self, framing: FramingMode) -> Self {
        self.framing = framing;
        self
    }
}
