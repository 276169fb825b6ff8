//! Players that choose moves for one side of a game

mod human;
mod minimax;
mod random;

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;
pub use random::RandomPlayer;

use std::io;
use std::str::FromStr;

use anyhow::{bail, Result};

use crate::core::{Board, Loc, Side};
use crate::utils::make_rng;

/// Something that picks a move for its side. Only asked when its side has a
/// legal move.
pub trait Player {
    fn side(&self) -> Side;
    fn name(&self) -> &str;
    fn get_move(&mut self, board: &Board) -> Result<Loc>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Minimax,
    Human,
    Random,
}

impl FromStr for PlayerKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(PlayerKind::Minimax),
            "human" => Ok(PlayerKind::Human),
            "random" => Ok(PlayerKind::Random),
            _ => bail!("Unknown player type: {}", s),
        }
    }
}

/// Build a player of the given kind; human players read from stdin
pub fn make_player(kind: PlayerKind, side: Side) -> Box<dyn Player> {
    match kind {
        PlayerKind::Minimax => Box::new(MinimaxPlayer::new(side)),
        PlayerKind::Human => Box::new(HumanPlayer::new(side, io::stdin().lock())),
        PlayerKind::Random => Box::new(RandomPlayer::new(side, make_rng())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("minimax", Some(PlayerKind::Minimax) ; "minimax")]
    #[test_case("human", Some(PlayerKind::Human) ; "human")]
    #[test_case("random", Some(PlayerKind::Random) ; "random")]
    #[test_case("alphabeta", None ; "unknown")]
    fn test_player_kind_from_str(input: &str, expected: Option<PlayerKind>) {
        assert_eq!(input.parse::<PlayerKind>().ok(), expected);
    }

    #[test]
    fn test_make_player_side() {
        let player = make_player(PlayerKind::Random, Side::O);
        assert_eq!(player.side(), Side::O);
        assert_eq!(player.name(), "random");
    }
}
