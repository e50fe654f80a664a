//! Fixed-depth negamax search with alpha-beta pruning, and the move
//! selection policy on top of it.
//!
//! Each root move is scored by its own search over a fresh full window;
//! pruning inside the subtrees changes the work done, never the scores.
//! The shared [`Game`] is mutated in place and restored by the
//! [`Game::apply`] drop guard on every path out of a node.

use rand::Rng;
use rand::seq::IndexedRandom;
use shakmaty::Move;
use thiserror::Error;

use crate::engine::eval::evaluate;
use crate::engine::ordering::ordered_moves;
use crate::game::Game;

/// Score bound strictly above any reachable evaluation, mate included.
pub const INFINITY: i32 = 1_000_000;

/// A root move paired with its search score in centipawns.
#[derive(Clone, Debug)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

/// Rejected [`SearchConfig`] parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("search depth must be at least 1, got {0}")]
    Depth(u32),
    #[error("randomness must lie in [0, 1], got {0}")]
    Randomness(f64),
}

/// Search parameters, fixed for the lifetime of one [`Searcher`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchConfig {
    max_depth: u32,
    randomness: f64,
}

impl SearchConfig {
    pub fn new(max_depth: u32, randomness: f64) -> Result<Self, ConfigError> {
        if max_depth < 1 {
            return Err(ConfigError::Depth(max_depth));
        }
        if !(0.0..=1.0).contains(&randomness) {
            return Err(ConfigError::Randomness(randomness));
        }
        Ok(SearchConfig {
            max_depth,
            randomness,
        })
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn randomness(&self) -> f64 {
        self.randomness
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: 3,
            randomness: 0.0,
        }
    }
}

/// Fixed-depth move selector.
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Searcher { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The best move for the side to move, or `None` when there is none.
    ///
    /// All root moves tied for the best score form a tie list, and one of
    /// them is drawn uniformly at random.
    pub fn choose_move(&self, game: &mut Game) -> Option<Move> {
        let depth = self.config.max_depth - 1;
        let mut best = -INFINITY;
        let mut tied: Vec<Move> = Vec::new();

        for mv in ordered_moves(game) {
            let score = {
                let mut child = game.apply(&mv);
                -self.negamax(&mut child, depth, -INFINITY, INFINITY)
            };
            if score > best {
                best = score;
                tied.clear();
                tied.push(mv);
            } else if score == best {
                tied.push(mv);
            }
        }

        if tied.is_empty() {
            return None;
        }

        let mut rng = rand::rng();
        // TODO: decide whether a nonzero randomness should sometimes pick
        // a sub-maximal move to weaken play; today both branches draw
        // uniformly from the tie list, so the knob does not change the
        // outcome.
        if self.config.randomness > 0.0
            && tied.len() > 1
            && rng.random::<f64>() < self.config.randomness
        {
            return tied.choose(&mut rng).cloned();
        }
        tied.choose(&mut rng).cloned()
    }

    /// The `k` best root moves, ranked by score, best first.
    pub fn top_moves(&self, game: &mut Game, k: usize) -> Vec<ScoredMove> {
        let depth = self.config.max_depth - 1;
        let mut ranked: Vec<ScoredMove> = ordered_moves(game)
            .into_iter()
            .map(|mv| {
                let score = {
                    let mut child = game.apply(&mv);
                    -self.negamax(&mut child, depth, -INFINITY, INFINITY)
                };
                ScoredMove { mv, score }
            })
            .collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(k);
        ranked
    }

    fn negamax(&self, game: &mut Game, depth: u32, mut alpha: i32, beta: i32) -> i32 {
        if depth == 0 || game.is_over() {
            return evaluate(game);
        }

        let mut best = -INFINITY;
        for mv in ordered_moves(game) {
            let score = {
                let mut child = game.apply(&mv);
                -self.negamax(&mut child, depth - 1, -beta, -alpha)
            };
            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                break;
            }
        }

        // A correct oracle reports game over before a node runs out of
        // children; fall back to the static score rather than -INFINITY.
        if best == -INFINITY { evaluate(game) } else { best }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
