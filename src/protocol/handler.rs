//! Protocol command handling

use std::io::{self, Write};

use anyhow::Result;
use indoc::indoc;
use flipside::{core::Side, Engine};

use super::command::Command;

const HELP: &str = indoc! {"
    commands:
      flipside                         handshake
      isready                          readiness check
      setoption name <n> value <v>     options: strictmode, color
      newgame [<cols>x<rows>]          start a new game (default 4x4)
      position startpos                reset to the start position
      position fen <board> <X|O>       load a position
      play <col>,<row>                 play a move for the side to move
      pass                             pass when there is no legal move
      go                               search and report the best move
      moves                            list legal moves
      match <x> <o>                    finish the game; players: minimax, human, random
      display                          show the board
      getfen                           print the position
      quit                             exit
"};

/// Handle a protocol command. `Command::Quit` is left to the caller.
pub fn handle_command(cmd: &Command, engine: &mut Engine) -> Result<()> {
    match cmd {
        Command::Hello => {
            println!("id name Flipside");
            println!("id author Ritam Nag");
            println!("option name strictmode type bool default true");
            println!("option name color type bool default true");
            println!("flipsideok");
        }
        Command::IsReady => {
            println!("readyok");
        }
        Command::SetOption { name, value } => {
            engine.set_option(name, value)?;
        }
        Command::NewGame(config) => {
            engine.set_config(config.unwrap_or_default())?;
        }
        Command::PositionStart => {
            engine.reset_game()?;
        }
        Command::PositionFen(fen) => {
            engine.set_position(fen)?;
        }
        Command::Play(loc) => {
            engine.play(*loc)?;
        }
        Command::Pass => {
            engine.pass()?;
        }
        Command::Go => {
            if engine.legal_moves().is_empty() {
                println!("bestmove pass");
            } else {
                let (result, time) = engine.go()?;
                println!("info value {} nodes {} time {:.3}",
                    result.value, result.nodes_explored, time);
                println!("bestmove {}", result.best_move);
            }
        }
        Command::Moves => {
            let moves: String = engine.legal_moves()
                .iter()
                .map(|loc| format!(" {}", loc))
                .collect();

            println!("moves{}", moves);
        }
        Command::Match { x, o } => {
            let outcome = engine.run_match(*x, *o)?;
            let winner = outcome.winner
                .map_or_else(|| "draw".to_string(), |side| side.symbol().to_string());

            println!("result X {} O {} winner {}",
                outcome.scores[Side::X], outcome.scores[Side::O], winner);
        }
        Command::Display => {
            engine.display();
        }
        Command::GetFen => {
            println!("{}", engine.get_fen());
        }
        Command::Help => {
            print!("{}", HELP);
        }
        Command::Quit => {}
    }

    io::stdout().flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flipside::core::{GameConfig, Loc};

    #[test]
    fn test_newgame_defaults_to_4x4() {
        let mut engine = Engine::new().unwrap();
        handle_command(&Command::NewGame(Some(GameConfig::new(8, 8))), &mut engine).unwrap();
        assert_eq!(engine.config, GameConfig::new(8, 8));

        handle_command(&Command::NewGame(None), &mut engine).unwrap();
        assert_eq!(engine.config, GameConfig::default());
    }

    #[test]
    fn test_illegal_play_is_an_error() {
        let mut engine = Engine::new().unwrap();
        assert!(handle_command(&Command::Play(Loc::new(0, 0)), &mut engine).is_err());
        assert!(handle_command(&Command::Pass, &mut engine).is_err());
        handle_command(&Command::Play(Loc::new(0, 1)), &mut engine).unwrap();
    }
}
