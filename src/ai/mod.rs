//! Game-tree search
pub mod actions;
pub mod decision;
pub mod minimax;
pub mod utility;

// Re-export key types
pub use actions::{actions, Action};
pub use decision::{decide, search, SearchResult};
pub use minimax::{max_value, min_value, Minimax};
pub use utility::utility;
