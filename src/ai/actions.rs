//! Successor generation for the search

use crate::core::{Board, Loc, Side};

/// A legal move together with the board it produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub board: Board,
    pub mv: Loc,
}

/// Every legal move for `side` applied to its own copy of `board`, in
/// column-major order (columns outermost, rows ascending). The order decides
/// ties in the search, so it must stay fixed. An empty result means `side`
/// has to pass.
pub fn actions(board: &Board, side: Side) -> Vec<Action> {
    let mut actions = Vec::new();

    for col in 0..board.num_cols() {
        for row in 0..board.num_rows() {
            if !board.is_legal_move(col, row, side) {
                continue;
            }

            // play_move only rejects cells that fail is_legal_move
            let mut next = board.clone();
            let played = next.play_move(col, row, side);
            debug_assert!(played.is_ok(), "legal move rejected: {:?}", played);

            let mv = Loc::new(col, row);
            next.set_last_move(mv);
            actions.push(Action { board: next, mv });
        }
    }

    actions
}
