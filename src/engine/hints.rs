//! Human-readable move suggestions built on the ranked root search.

use shakmaty::san::SanPlus;

use crate::engine::search::Searcher;
use crate::game::Game;

/// Scores at or beyond this magnitude are reported as forced mate.
pub const MATE_THRESHOLD: i32 = 90_000;

/// Format a centipawn score for display: `#` for mate-magnitude scores,
/// a signed number otherwise.
pub fn format_score(score: i32) -> String {
    if score.abs() >= MATE_THRESHOLD {
        "#".to_string()
    } else {
        format!("{score:+}")
    }
}

/// Up to `k` numbered suggestion lines for the current position, best
/// move first, e.g. `1) Nf3  +35`.
pub fn suggestions(searcher: &Searcher, game: &mut Game, k: usize) -> Vec<String> {
    let ranked = searcher.top_moves(game, k);
    ranked
        .into_iter()
        .enumerate()
        .map(|(i, sm)| {
            let san = SanPlus::from_move(game.position().clone(), &sm.mv);
            format!("{}) {}  {}", i + 1, san, format_score(sm.score))
        })
        .collect()
}
