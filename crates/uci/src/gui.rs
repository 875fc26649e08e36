//! GUI to engine interface.

use std::str::FromStr;

use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_until};
use nom::character::complete::{space0, space1};
use nom::combinator::{all_consuming, map, opt, rest, value, verify};
use nom::multi::many0;
use nom::sequence::{preceded, tuple};
use nom::{Finish, IResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugMode {
    On,
    Off,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    Fen(String),
    StartPos,
}

/// Messages sent by the GUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Switch the engine to UCI mode.
    Uci,
    /// Toggle the engine's debug mode on or off.
    Debug(DebugMode),
    /// Synchronize the GUI with the engine.
    IsReady,
    /// Set an engine parameter.
    SetOption { name: String, value: String },
    /// Specify that the next position will be from a new game.
    NewGame,
    /// Setup the provided position (as FEN) on the engine, and play the specified moves if any.
    Position {
        position: Position,
        moves: Option<Vec<String>>,
    },
    /// Start calculating the previously setup position.
    Go,
    /// Stop calculating on the setup position.
    Stop,
    /// The opponent played the expected move.
    PonderHit,
    /// Quit the engine.
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    /// The command was recognized but its arguments were not.
    #[error("malformed {command} command: {reason}")]
    Malformed {
        command: &'static str,
        reason: String,
    },
}

fn parse_debug(input: &str) -> IResult<&str, Message> {
    map(
        alt((
            value(DebugMode::On, tag("on")),
            value(DebugMode::Off, tag("off")),
        )),
        Message::Debug,
    )(input)
}

fn parse_setoption(input: &str) -> IResult<&str, Message> {
    let (input, _) = tuple((tag("name"), space1))(input)?;
    let (input, name) = verify(alt((take_until(" value"), rest)), |name: &str| {
        !name.trim().is_empty()
    })(input)?;
    let (input, value) = opt(preceded(tuple((tag(" value"), space0)), rest))(input)?;

    Ok((
        input,
        Message::SetOption {
            name: name.trim().to_owned(),
            value: value.unwrap_or_default().trim().to_owned(),
        },
    ))
}

fn parse_fen(input: &str) -> IResult<&str, Position> {
    let (input, _) = tuple((tag("fen"), space1))(input)?;
    let (input, fen) = verify(alt((take_until(" moves"), rest)), |fen: &str| {
        !fen.trim().is_empty()
    })(input)?;

    Ok((input, Position::Fen(fen.trim().to_owned())))
}

fn parse_moves(input: &str) -> IResult<&str, Vec<String>> {
    preceded(
        tuple((space1, tag("moves"))),
        many0(map(preceded(space1, is_not(" \t")), str::to_owned)),
    )(input)
}

fn parse_position(input: &str) -> IResult<&str, Message> {
    let (input, (position, moves)) = tuple((
        alt((value(Position::StartPos, tag("startpos")), parse_fen)),
        opt(parse_moves),
    ))(input)?;

    Ok((input, Message::Position { position, moves }))
}

fn parse_args(
    command: &'static str,
    parser: fn(&str) -> IResult<&str, Message>,
    args: &str,
) -> Result<Message, ParseError> {
    all_consuming(parser)(args)
        .finish()
        .map(|(_, message)| message)
        .map_err(|error| ParseError::Malformed {
            command,
            reason: error.code.description().to_owned(),
        })
}

impl FromStr for Message {
    type Err = ParseError;

    /// Parse a single line of GUI input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (command, args) = match line.split_once(char::is_whitespace) {
            Some((command, args)) => (command, args.trim_start()),
            None => (line, ""),
        };

        match command {
            "" => Err(ParseError::Empty),
            "uci" => Ok(Self::Uci),
            "isready" => Ok(Self::IsReady),
            "ucinewgame" => Ok(Self::NewGame),
            // search limits are not interpreted
            "go" => Ok(Self::Go),
            "stop" => Ok(Self::Stop),
            "ponderhit" => Ok(Self::PonderHit),
            "quit" => Ok(Self::Quit),
            "debug" => parse_args("debug", parse_debug, args),
            "setoption" => parse_args("setoption", parse_setoption, args),
            "position" => parse_args("position", parse_position, args),
            other => Err(ParseError::UnknownCommand(other.to_owned())),
        }
    }
}
