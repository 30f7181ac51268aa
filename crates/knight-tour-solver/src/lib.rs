//! Knight's tour search for square boards.
//!
//! This crate finds a sequence of moves that visits every cell of an N×N board
//! exactly once. Candidate moves are ordered by Warnsdorff's rule (prefer the
//! cell with the fewest onward moves) and the search backtracks when it runs
//! into a dead end.
//!
//! # Components
//!
//! - [`Board`] - per-cell visitation markers for one search run.
//! - [`Path`] - the ordered history of visited cells, with undo.
//! - [`ranker`] - enumerates legal next cells and ranks them by onward degree.
//! - [`TourSolver`] - the backtracking search, driven by an explicit frame
//!   stack instead of native recursion so board size never threatens the call
//!   stack.
//! - [`Tour`] - a completed tour, with validation and rendering helpers.
//!
//! # Examples
//!
//! ```
//! use knight_tour_core::{Cell, MoveProfile};
//! use knight_tour_solver::{TourOutcome, TourSolver};
//!
//! let solver = TourSolver::new(MoveProfile::knight());
//! let search = solver.solve(5, Cell::new(0, 0))?;
//!
//! match search.outcome {
//!     TourOutcome::Complete(tour) => {
//!         assert_eq!(tour.len(), 25);
//!         tour.validate(solver.profile())?;
//!         println!("{tour}");
//!     }
//!     TourOutcome::Exhausted => {
//!         println!("no tour after {} placements", search.stats.placements());
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{board::*, error::*, path::*, tour::*, tour_solver::*};

mod board;
mod error;
mod path;
pub mod ranker;
mod tour;
mod tour_solver;

#[cfg(test)]
mod testing;
