//! Session module - orchestrates one round of the puzzle
//!
//! The session owns the grid and the tray and sequences fit check ->
//! commit -> line clear -> tray refill -> move availability on every
//! placement event. All calls are synchronous and the session is the sole
//! mutator of its grid and tray, which is what makes check-then-commit
//! safe; a concurrent host must serialize calls to a session externally.

use gridfill_types::SessionError;

use crate::grid::{ClearedLines, Grid};
use crate::moves::has_any_legal_move;
use crate::piece::Piece;
use crate::rng::PieceFactory;

/// Resolution of a drop.
///
/// Never an error: an out-of-bounds or overlapping drop is a cancelled
/// pick, and the piece is back in its original tray slot afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// The piece was committed. Carries the consumed piece record (placed
    /// flag set, anchor frozen) and the lines cleared by this placement.
    Placed { piece: Piece, cleared: ClearedLines },
    /// The piece did not fit and was returned to the tray.
    Returned,
}

/// A piece withdrawn from the tray, pending placement or return
struct Picked {
    piece: Piece,
    slot: usize,
}

/// One round of the puzzle: grid, tray, placement counter, game-over flag.
///
/// States: Active (no piece in hand), PiecePicked (one piece withdrawn),
/// GameOver (terminal and monotone - no input is accepted once set).
pub struct Session {
    grid: Grid,
    tray: Vec<Piece>,
    tray_capacity: usize,
    picked: Option<Picked>,
    placed_count: usize,
    game_over: bool,
    factory: Box<dyn PieceFactory>,
}

impl Session {
    /// Create a session with an empty grid and a tray filled to capacity.
    ///
    /// The move availability check runs immediately: a factory can hand out
    /// an opening tray with no legal placement, and that is game over on
    /// the spot. Panics if `tray_capacity` is zero (constructor misuse).
    pub fn new(grid_size: u8, tray_capacity: usize, factory: Box<dyn PieceFactory>) -> Self {
        assert!(tray_capacity >= 1, "tray capacity must be at least 1");
        let mut session = Self {
            grid: Grid::new(grid_size),
            tray: Vec::with_capacity(tray_capacity),
            tray_capacity,
            picked: None,
            placed_count: 0,
            game_over: false,
            factory,
        };
        session.refill_tray();
        session.check_terminal();
        session
    }

    /// Read-only view of the grid, for rendering
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Read-only ordered view of the pending tray pieces, for rendering
    pub fn tray(&self) -> &[Piece] {
        &self.tray
    }

    /// Pieces placed from the current tray set
    pub fn placed_count(&self) -> usize {
        self.placed_count
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Piece currently held between pick-up and drop, if any
    pub fn picked_piece(&self) -> Option<&Piece> {
        self.picked.as_ref().map(|picked| &picked.piece)
    }

    /// Withdraw the piece at `index` from the tray.
    ///
    /// Fails with `NotActive` when the game is over or a piece is already
    /// in hand, and with `InvalidIndex` for a slot that does not exist.
    /// Failure leaves the session untouched.
    pub fn pick_up(&mut self, index: usize) -> Result<&Piece, SessionError> {
        if self.game_over || self.picked.is_some() {
            return Err(SessionError::NotActive);
        }
        if index >= self.tray.len() {
            return Err(SessionError::InvalidIndex);
        }

        let piece = self.tray.remove(index);
        let picked = self.picked.insert(Picked { piece, slot: index });
        Ok(&picked.piece)
    }

    /// Non-mutating fit test for the picked piece (drives ghost previews).
    /// False when nothing is picked.
    pub fn preview_fit(&self, anchor_row: i8, anchor_col: i8) -> bool {
        match &self.picked {
            Some(picked) => self.grid.can_place(picked.piece.shape(), anchor_row, anchor_col),
            None => false,
        }
    }

    /// Resolve the picked piece at the given anchor. Never errors.
    ///
    /// On a fit: commit, clear full lines, refill the tray once the whole
    /// set has been placed, then re-run the move availability check (the
    /// check also fires right after a refill - a fresh tray can itself be
    /// unplaceable). On a miss: the piece goes back to its original slot,
    /// order preserved. With no piece in hand this is a no-op reporting
    /// `Returned`.
    pub fn place_at(&mut self, anchor_row: i8, anchor_col: i8) -> PlaceOutcome {
        let Some(Picked { mut piece, slot }) = self.picked.take() else {
            return PlaceOutcome::Returned;
        };

        if !self.grid.can_place(piece.shape(), anchor_row, anchor_col) {
            // Cancelled pick, not a retry: reinsert at the original slot.
            self.tray.insert(slot.min(self.tray.len()), piece);
            return PlaceOutcome::Returned;
        }

        self.grid
            .commit(piece.shape(), piece.color(), anchor_row, anchor_col);
        piece.mark_placed(anchor_row, anchor_col);
        self.placed_count += 1;

        let cleared = self.grid.clear_full_lines();

        if self.placed_count == self.tray_capacity {
            self.refill_tray();
        }
        self.check_terminal();

        PlaceOutcome::Placed { piece, cleared }
    }

    fn refill_tray(&mut self) {
        debug_assert!(self.tray.is_empty(), "tray refilled before it drained");
        for _ in 0..self.tray_capacity {
            self.tray.push(self.factory.next_piece());
        }
        self.placed_count = 0;
    }

    /// Latch game over when the non-empty tray has no legal placement.
    ///
    /// An empty tray never reaches the oracle: it means a refill is due,
    /// not that the game is over. After a returned drop the grid and tray
    /// match the pre-pick state, so the skipped re-check loses nothing.
    fn check_terminal(&mut self) {
        if !self.tray.is_empty() && !has_any_legal_move(&self.grid, &self.tray) {
            self.game_over = true;
        }
    }
}
