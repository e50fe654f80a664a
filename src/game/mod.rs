//! Game state: a `shakmaty` position plus the move history the engine
//! needs for push/undo and repetition detection.
//!
//! The search mutates one shared [`Game`] in place. Every applied move is
//! paired with an undo in strict LIFO order; [`Game::apply`] returns a
//! guard that performs the undo on drop, so pruning breaks and early
//! returns cannot leave the position corrupted.

use std::ops::{Deref, DerefMut};

use shakmaty::fen::Fen;
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, MoveList, Position};
use thiserror::Error;

/// Error parsing a FEN string into a playable position.
#[derive(Debug, Error)]
pub enum FenError {
    #[error("invalid FEN: {0}")]
    Parse(#[from] shakmaty::fen::ParseFenError),
    #[error("illegal position: {0}")]
    Position(#[from] shakmaty::PositionError<Chess>),
}

/// A chess position together with the snapshots of its predecessors.
///
/// The snapshot stack serves two purposes: it makes [`Game::undo`] exact
/// (the restored position is bit-for-bit the one before the move), and it
/// carries the hash history that threefold-repetition detection counts
/// over.
#[derive(Clone, Debug)]
pub struct Game {
    pos: Chess,
    history: Vec<Chess>,
    hashes: Vec<u64>,
}

impl Game {
    /// The standard starting position with empty history.
    pub fn new() -> Self {
        Game {
            pos: Chess::default(),
            history: Vec::new(),
            hashes: Vec::new(),
        }
    }

    /// Parse a FEN string. The resulting game has no history, so earlier
    /// repetitions of the position are not visible to it.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let f: Fen = fen.parse()?;
        let pos = f.into_position(CastlingMode::Standard)?;
        Ok(Game {
            pos,
            history: Vec::new(),
            hashes: Vec::new(),
        })
    }

    pub fn position(&self) -> &Chess {
        &self.pos
    }

    pub fn turn(&self) -> Color {
        self.pos.turn()
    }

    pub fn legal_moves(&self) -> MoveList {
        self.pos.legal_moves()
    }

    /// Number of moves played since the root of this game's history.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Zobrist hash of the current position.
    pub fn hash(&self) -> u64 {
        let z: Zobrist64 = self.pos.zobrist_hash(EnPassantMode::Legal);
        z.0
    }

    /// Play `mv`, keeping the predecessor on the undo stack.
    ///
    /// `mv` must come from the legal-move generator for the current
    /// position.
    pub fn push(&mut self, mv: &Move) {
        self.hashes.push(self.hash());
        let next = self.pos.clone().play(mv).unwrap();
        self.history.push(std::mem::replace(&mut self.pos, next));
    }

    /// Revert the most recent [`Game::push`]. No-op at the history root.
    pub fn undo(&mut self) {
        if let Some(prev) = self.history.pop() {
            self.pos = prev;
            self.hashes.pop();
        }
    }

    /// Play `mv` and return a guard that undoes it when dropped.
    pub fn apply(&mut self, mv: &Move) -> AppliedMove<'_> {
        self.push(mv);
        AppliedMove { game: self }
    }

    /// Whether `mv` would leave the opponent in check.
    pub fn gives_check(&self, mv: &Move) -> bool {
        self.pos
            .clone()
            .play(mv)
            .map(|p| p.is_check())
            .unwrap_or(false)
    }

    pub fn is_checkmate(&self) -> bool {
        self.pos.is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.pos.is_stalemate()
    }

    pub fn is_insufficient_material(&self) -> bool {
        self.pos.is_insufficient_material()
    }

    /// Whether the side to move can claim a draw because the current
    /// position is on the board for the third time.
    pub fn is_repetition_claimable(&self) -> bool {
        let current = self.hash();
        let earlier = self.hashes.iter().filter(|&&h| h == current).count();
        earlier >= 2
    }

    /// Terminal for search: no legal continuation, dead material, or a
    /// claimable repetition.
    pub fn is_over(&self) -> bool {
        self.pos.is_game_over() || self.is_repetition_claimable()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Scope guard for one applied move; undoes it on every exit path.
pub struct AppliedMove<'a> {
    game: &'a mut Game,
}

impl Deref for AppliedMove<'_> {
    type Target = Game;

    fn deref(&self) -> &Game {
        self.game
    }
}

impl DerefMut for AppliedMove<'_> {
    fn deref_mut(&mut self) -> &mut Game {
        self.game
    }
}

impl Drop for AppliedMove<'_> {
    fn drop(&mut self) {
        self.game.undo();
    }
}
