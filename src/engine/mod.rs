//! Engine components
//!
//! This module contains the move-selection engine:
//! - Static evaluation (material + piece-square tables)
//! - Heuristic move ordering
//! - Fixed-depth alpha-beta search and move selection
//! - Suggestion rendering for the hint surface

pub mod eval;
pub mod hints;
pub mod ordering;
pub mod search;

pub use eval::{DRAW_SCORE, MATE_SCORE, evaluate};
pub use hints::{format_score, suggestions};
pub use ordering::ordered_moves;
pub use search::{ConfigError, INFINITY, ScoredMove, SearchConfig, Searcher};
