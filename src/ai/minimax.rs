//! Full-depth minimax over the game tree
//!
//! `current` is the side that produced the board being examined; the side
//! about to move is its opponent. The search always runs to positions where
//! neither side can move, so no evaluation heuristic is involved.

use crate::core::{Board, Side, Value};

use super::{actions::actions, utility::utility};

/// Below any reachable utility
const MAX_NODE_START: Value = Value::MIN;
/// Above any reachable utility
const MIN_NODE_START: Value = Value::MAX;

/// Recursive MAX/MIN search from a fixed root perspective, counting the
/// nodes it visits.
#[derive(Debug, Clone)]
pub struct Minimax {
    root: Side,
    nodes_explored: u64,
}

impl Minimax {
    pub fn new(root: Side) -> Self {
        Self {
            root,
            nodes_explored: 0,
        }
    }

    pub fn root(&self) -> Side {
        self.root
    }

    /// Number of `max_value`/`min_value` calls made so far
    pub fn nodes_explored(&self) -> u64 {
        self.nodes_explored
    }

    pub fn max_value(&mut self, board: &Board, current: Side) -> Value {
        self.nodes_explored += 1;

        if is_terminal(board, current) {
            return utility(board, self.root);
        }

        let next = current.opponent();
        let mut value = MAX_NODE_START;
        for child in successors(board, next) {
            value = value.max(self.min_value(&child, next));
        }

        value
    }

    pub fn min_value(&mut self, board: &Board, current: Side) -> Value {
        self.nodes_explored += 1;

        if is_terminal(board, current) {
            return utility(board, self.root);
        }

        let next = current.opponent();
        let mut value = MIN_NODE_START;
        for child in successors(board, next) {
            value = value.min(self.max_value(&child, next));
        }

        value
    }
}

fn is_terminal(board: &Board, current: Side) -> bool {
    !board.has_legal_moves_remaining(current)
        && !board.has_legal_moves_remaining(current.opponent())
}

/// Boards reachable by one move of `side`; the unchanged board when `side`
/// must pass.
fn successors(board: &Board, side: Side) -> Vec<Board> {
    let children: Vec<Board> = actions(board, side)
        .into_iter()
        .map(|action| action.board)
        .collect();

    if children.is_empty() {
        vec![board.clone()]
    } else {
        children
    }
}

/// Backed-up value of a MAX node, `current` having just moved
pub fn max_value(board: &Board, current: Side, root: Side) -> Value {
    Minimax::new(root).max_value(board, current)
}

/// Backed-up value of a MIN node, `current` having just moved
pub fn min_value(board: &Board, current: Side, root: Side) -> Value {
    Minimax::new(root).min_value(board, current)
}
