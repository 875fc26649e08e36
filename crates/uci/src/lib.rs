//! Minimal [UCI] vocabulary for talking to chess engines.
//!
//! [UCI]: https://www.wbec-ridderkerk.nl/html/UCIProtocol.html

pub mod engine;
pub mod gui;

pub use gui::ParseError;
