//! Terminal evaluation

use crate::core::{Board, Side, Value};

/// Terminal value of `board` from `root`'s point of view: its own disc
/// count, not the difference to the opponent.
pub fn utility(board: &Board, root: Side) -> Value {
    board.count_score(root)
}
