//! Root move selection

use anyhow::{bail, Result};
use tracing::{debug, info};

use crate::core::{Board, Loc, Side, Value};

use super::{actions::actions, minimax::Minimax};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Loc,
    /// Backed-up value of `best_move`
    pub value: Value,
    /// Every root move with its value, in enumeration order
    pub root_values: Vec<(Loc, Value)>,
    pub nodes_explored: u64,
}

/// Search every root move of `root` to the end of the game. The first move
/// with the strictly greatest value wins, so ties go to the move found
/// earliest in column-major order.
///
/// Fails when `root` has no legal move; callers are expected to pass
/// instead of asking for a decision.
pub fn search(board: &Board, root: Side) -> Result<SearchResult> {
    let actions = actions(board, root);
    if actions.is_empty() {
        bail!("No legal moves for {}", root.symbol());
    }

    let mut minimax = Minimax::new(root);
    let mut root_values = Vec::with_capacity(actions.len());
    let mut best: Option<(Loc, Value)> = None;

    for action in actions {
        // the opponent replies next
        let value = minimax.min_value(&action.board, root);
        debug!(side = %root.symbol(), mv = %action.mv, value, "root move searched");

        root_values.push((action.mv, value));
        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((action.mv, value));
        }
    }

    let Some((best_move, value)) = best else {
        bail!("No root move was searched");
    };

    info!(
        side = %root.symbol(),
        best_move = %best_move,
        value,
        nodes = minimax.nodes_explored(),
        "search finished"
    );

    Ok(SearchResult {
        best_move,
        value,
        root_values,
        nodes_explored: minimax.nodes_explored(),
    })
}

/// Best move for `root` on `board`
pub fn decide(board: &Board, root: Side) -> Result<Loc> {
    Ok(search(board, root)?.best_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_best_move_need_not_be_first() {
        let board = Board::from_grid(indoc! {"
            .OOO
            .OOX
            XXXO
            ..X.
        "}).unwrap();

        let result = search(&board, Side::O).unwrap();

        assert_eq!(result.best_move, Loc::new(3, 0));
        assert_eq!(result.value, 13);
        assert_eq!(
            result.root_values,
            vec![(Loc::new(0, 0), 7), (Loc::new(1, 0), 3), (Loc::new(3, 0), 13)],
        );
        assert_eq!(result.nodes_explored, 76);
    }

    #[test]
    fn test_tie_keeps_first_move() {
        // both X moves end with a full row of X, one of them through an O pass
        let board = Board::from_grid("XO.XO.").unwrap();

        let result = search(&board, Side::X).unwrap();

        assert_eq!(result.root_values, vec![(Loc::new(2, 0), 6), (Loc::new(5, 0), 6)]);
        assert_eq!(result.best_move, Loc::new(2, 0));
    }

    #[test]
    fn test_no_moves_is_an_error() {
        let board = Board::from_grid("XO..").unwrap();
        assert!(decide(&board, Side::O).is_err());
    }
}
