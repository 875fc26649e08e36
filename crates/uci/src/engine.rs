//! Engine to GUI interface.

use std::fmt::{self, Display};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Id {
    pub name: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Score {
    CentiPawn(isize),
    Mate(isize),
    LowerBound,
    UpperBound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Info {
    Depth(usize),
    SelectiveDepth(usize),
    Time(Duration),
    Nodes(usize),
    PV(Vec<String>),
    Score(Score),
    /// Free form text for the GUI to display.
    String(String),
}

/// Messages sent by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Identify the engine after the `uci` command.
    Id(Id),
    /// All identification and options have been sent.
    UciOk,
    /// Sent after the IsReady command to sync the GUI with the engine.
    ReadyOk,
    /// Update some data to the UI.
    Info(Info),
    /// Best move found after a search in the currently setup position.
    BestMove {
        p_move: String,
        ponder: Option<String>,
    },
}

impl Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CentiPawn(cp) => write!(f, "cp {cp}"),
            Self::Mate(moves) => write!(f, "mate {moves}"),
            Self::LowerBound => f.write_str("lowerbound"),
            Self::UpperBound => f.write_str("upperbound"),
        }
    }
}

impl Display for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Depth(depth) => write!(f, "depth {depth}"),
            Self::SelectiveDepth(depth) => write!(f, "seldepth {depth}"),
            Self::Time(time) => write!(f, "time {}", time.as_millis()),
            Self::Nodes(nodes) => write!(f, "nodes {nodes}"),
            Self::PV(moves) => write!(f, "pv {}", moves.join(" ")),
            Self::Score(score) => write!(f, "score {score}"),
            Self::String(text) => write!(f, "string {text}"),
        }
    }
}

impl Display for Message {
    /// Wire form of the message, without the trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(Id { name, author }) => write!(f, "id name {name}\nid author {author}"),
            Self::UciOk => f.write_str("uciok"),
            Self::ReadyOk => f.write_str("readyok"),
            Self::Info(info) => write!(f, "info {info}"),
            Self::BestMove { p_move, ponder } => {
                write!(f, "bestmove {p_move}")?;
                if let Some(ponder) = ponder {
                    write!(f, " ponder {ponder}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_text() {
        let id = Message::Id(Id {
            name: "remora".to_owned(),
            author: "someone".to_owned(),
        });
        assert_eq!(id.to_string(), "id name remora\nid author someone");

        let best = Message::BestMove {
            p_move: "e2e4".to_owned(),
            ponder: Some("e7e5".to_owned()),
        };
        assert_eq!(best.to_string(), "bestmove e2e4 ponder e7e5");

        let info = Message::Info(Info::Score(Score::Mate(-3)));
        assert_eq!(info.to_string(), "info score mate -3");

        let time = Message::Info(Info::Time(Duration::from_millis(1500)));
        assert_eq!(time.to_string(), "info time 1500");
    }
}
