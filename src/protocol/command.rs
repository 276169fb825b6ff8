//! Protocol command parsing

use anyhow::{bail, ensure, Context, Result};
use flipside::{
    core::{GameConfig, Loc},
    players::PlayerKind,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Handshake, named after the engine
    Hello,
    IsReady,
    SetOption { name: String, value: String },
    NewGame(Option<GameConfig>),
    PositionStart,
    PositionFen(String),
    Play(Loc),
    Pass,
    Go,
    Moves,
    Match { x: PlayerKind, o: PlayerKind },
    Display,
    GetFen,
    Help,
    Quit,
}

/// Parse one input line; blank lines yield `None`
pub fn parse_command(input: &str) -> Result<Option<Command>> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some((&name, args)) = parts.split_first() else {
        return Ok(None);
    };

    let command = match name {
        "flipside" => Command::Hello,
        "isready" => Command::IsReady,
        "setoption" => {
            ensure!(args.len() == 4 && args[0] == "name" && args[2] == "value",
                "invalid setoption command, expected: setoption name <name> value <value>");

            Command::SetOption {
                name: args[1].to_string(),
                value: args[3].to_string(),
            }
        }
        "newgame" => match args {
            [] => Command::NewGame(None),
            [size] => Command::NewGame(Some(size.parse()?)),
            _ => bail!("invalid newgame command"),
        },
        "position" => match args {
            ["startpos"] => Command::PositionStart,
            ["fen", fen @ ..] if !fen.is_empty() => Command::PositionFen(fen.join(" ")),
            _ => bail!("invalid position command"),
        },
        "play" => {
            ensure!(!args.is_empty(), "play command requires a move");
            Command::Play(args.join(" ").parse().context("invalid move")?)
        }
        "pass" => Command::Pass,
        "go" => Command::Go,
        "moves" => Command::Moves,
        "match" => match args {
            [x, o] => Command::Match {
                x: x.parse()?,
                o: o.parse()?,
            },
            _ => bail!("match command requires two player types"),
        },
        "display" => Command::Display,
        "getfen" => Command::GetFen,
        "help" => Command::Help,
        "quit" => Command::Quit,
        cmd => bail!("Unknown command: {}", cmd),
    };

    Ok(Some(command))
}
