//! Stub engine speaking just enough UCI for a GUI handshake.

use remora_bridge::{Console, Engine};
use remora_uci::engine::{self, Id, Info};
use remora_uci::gui::{self, DebugMode, Position};

/// Answers UCI commands without searching; every `go` yields the null move.
#[derive(Debug, Default)]
pub struct Responder {
    debug: bool,
    position: Option<(Position, Vec<String>)>,
}

impl Responder {
    fn send(console: &mut dyn Console, message: engine::Message) {
        console.write(&message.to_string());
        console.write("\n");
    }

    /// Handle one line of input. Returns `false` when the engine should quit.
    pub fn handle(&mut self, console: &mut dyn Console, line: &str) -> bool {
        let message = match line.parse::<gui::Message>() {
            Ok(message) => message,
            Err(gui::ParseError::Empty) => return true,
            Err(error) => {
                tracing::debug!(%error, line, "unparseable input");
                Self::send(console, engine::Message::Info(Info::String(error.to_string())));
                return true;
            }
        };

        match message {
            gui::Message::Uci => {
                Self::send(
                    console,
                    engine::Message::Id(Id {
                        name: format!("remora {}", env!("CARGO_PKG_VERSION")),
                        author: env!("CARGO_PKG_AUTHORS").to_owned(),
                    }),
                );
                Self::send(console, engine::Message::UciOk);
            }
            gui::Message::Debug(mode) => self.debug = mode == DebugMode::On,
            gui::Message::IsReady => Self::send(console, engine::Message::ReadyOk),
            gui::Message::SetOption { name, value } => {
                tracing::debug!(%name, %value, "ignoring option");
            }
            gui::Message::NewGame => self.position = None,
            gui::Message::Position { position, moves } => {
                self.position = Some((position, moves.unwrap_or_default()));
            }
            gui::Message::Go => {
                if self.debug {
                    let text = match &self.position {
                        Some((Position::StartPos, moves)) => {
                            format!("startpos after {} moves", moves.len())
                        }
                        Some((Position::Fen(fen), moves)) => {
                            format!("{fen} after {} moves", moves.len())
                        }
                        None => "no position set".to_owned(),
                    };
                    Self::send(console, engine::Message::Info(Info::String(text)));
                }

                Self::send(console, engine::Message::Info(Info::Depth(0)));
                Self::send(
                    console,
                    engine::Message::BestMove {
                        p_move: "0000".to_owned(),
                        ponder: None,
                    },
                );
            }
            gui::Message::Stop | gui::Message::PonderHit => {}
            gui::Message::Quit => return false,
        }

        true
    }
}

impl Engine for Responder {
    fn run(mut self, console: &mut dyn Console, args: &[String]) {
        tracing::debug!(?args, "responder running");

        while let Some(line) = console.read_line() {
            if !self.handle(console, &line) {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use remora_bridge::Core;

    use super::*;

    fn session(input: &str) -> String {
        let mut core = Core::new(Cursor::new(input.to_owned()), Vec::new());
        Responder::default().run(&mut core, &[]);

        let (_, out) = core.into_inner();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn handshake() {
        let out = session("uci\nisready\n");
        let lines: Vec<_> = out.lines().collect();

        assert!(lines[0].starts_with("id name remora"));
        assert_eq!(lines[1], "id author The remora developers");
        assert_eq!(lines[2..], ["uciok", "readyok"]);
    }

    #[test]
    fn go_answers_null_move() {
        let out = session("position startpos moves e2e4\ngo depth 1\n");
        assert_eq!(out, "info depth 0\nbestmove 0000\n");
    }

    #[test]
    fn debug_reports_position() {
        let out = session("debug on\nposition startpos moves e2e4 e7e5\ngo\n");
        assert!(out.starts_with("info string startpos after 2 moves\n"));
    }

    #[test]
    fn quit_stops_reading() {
        let out = session("quit\nisready\n");
        assert_eq!(out, "");
    }

    #[test]
    fn unknown_command_is_reported() {
        let out = session("\nfoo\n");
        assert_eq!(out, "info string unknown command: foo\n");
    }
}
