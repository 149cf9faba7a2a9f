//! Core puzzle logic - pure, deterministic, and testable
//!
//! This crate contains the whole placement-and-clearing engine. It has
//! **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: a seeded factory produces identical sessions
//! - **Testable**: every rule is reachable without a frontend
//! - **Portable**: runs in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: N x N cell grid with fit checking, commit, and simultaneous
//!   row/column clearing
//! - [`shapes`]: shape catalog - constant occupancy matrices per variant
//! - [`piece`]: shape template plus color tag and placement record
//! - [`rng`]: seeded LCG and the piece factories built on it
//! - [`moves`]: move availability - does any legal placement remain?
//! - [`session`]: session controller sequencing check -> commit -> clear ->
//!   refill -> availability per placement event
//!
//! # Game Rules
//!
//! - Pieces are picked from a bounded preview tray and dropped onto the
//!   grid; a drop that does not fit returns the piece to its slot
//! - Every fully filled row and column clears, evaluated simultaneously
//! - The tray refills only once all of its pieces have been placed
//! - The game is over when no tray piece fits anywhere
//!
//! # Example
//!
//! ```
//! use gridfill_core::{PlaceOutcome, RandomFactory, Session};
//! use gridfill_types::{GRID_SIZE, TRAY_CAPACITY};
//!
//! let mut session = Session::new(GRID_SIZE, TRAY_CAPACITY, Box::new(RandomFactory::new(7)));
//!
//! // Pick the first preview piece and drop it in the top-left corner;
//! // every stock shape fits there on an empty grid.
//! session.pick_up(0).unwrap();
//! assert!(session.preview_fit(0, 0));
//! let outcome = session.place_at(0, 0);
//! assert!(matches!(outcome, PlaceOutcome::Placed { .. }));
//! ```

pub mod grid;
pub mod moves;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shapes;

pub use gridfill_types as types;

// Re-export commonly used types for convenience
pub use grid::{ClearedLines, Grid};
pub use moves::{first_fit, has_any_legal_move};
pub use piece::Piece;
pub use rng::{PieceFactory, RandomFactory, ScriptedFactory, SimpleRng};
pub use session::{PlaceOutcome, Session};
pub use shapes::{shape_rows, Shape};
