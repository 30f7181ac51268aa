//! Candidate enumeration and Warnsdorff ranking.
//!
//! From the current cell, a *candidate* is any profile target that is on the
//! board and not yet visited. Each candidate is scored by its *onward degree*:
//! how many candidates it would itself have, looking exactly one ply ahead.
//! Warnsdorff's rule prefers the candidate with the fewest onward moves, which
//! steers the piece into cramped regions before they become unreachable.

use knight_tour_core::{Cell, MoveProfile};

use crate::Board;

/// A legal next cell paired with its onward degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    /// Target cell.
    pub cell: Cell,
    /// Number of unvisited on-board cells reachable from [`cell`](Self::cell).
    pub onward_degree: usize,
}

/// Ranked candidates for one cell.
///
/// Candidates are stored in **descending** onward-degree order, with equally
/// ranked candidates in reverse profile order, so the best one sits at the end
/// and [`pop_best`](Self::pop_best) is a plain `Vec::pop`. Iteration via
/// [`iter`](Self::iter) yields rank order instead: ascending onward degree,
/// ties in the profile's enumeration order.
///
/// # Examples
///
/// ```
/// use knight_tour_core::{Cell, MoveProfile};
/// use knight_tour_solver::{Board, ranker};
///
/// let board = Board::new(5);
/// let mut candidates = ranker::rank_candidates(&board, &MoveProfile::knight(), Cell::new(0, 0));
///
/// assert_eq!(candidates.len(), 2);
/// assert_eq!(candidates.pop_best().map(|c| c.cell), Some(Cell::new(1, 2)));
/// assert_eq!(candidates.pop_best().map(|c| c.cell), Some(Cell::new(2, 1)));
/// assert!(candidates.pop_best().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    descending: Vec<Candidate>,
}

impl Candidates {
    /// Returns the number of remaining candidates.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.descending.len()
    }

    /// Returns `true` if no candidates remain.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.descending.is_empty()
    }

    /// Returns the highest-ranked candidate without removing it.
    #[must_use]
    #[inline]
    pub fn best(&self) -> Option<&Candidate> {
        self.descending.last()
    }

    /// Removes and returns the highest-ranked candidate.
    #[inline]
    pub fn pop_best(&mut self) -> Option<Candidate> {
        self.descending.pop()
    }

    /// Drops every candidate except the highest-ranked one.
    pub fn retain_best_only(&mut self) {
        let worse = self.descending.len().saturating_sub(1);
        self.descending.drain(..worse);
    }

    /// Returns the candidates in storage order (descending onward degree).
    #[must_use]
    #[inline]
    pub fn as_descending(&self) -> &[Candidate] {
        &self.descending
    }

    /// Iterates the candidates best-first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Candidate> + ExactSizeIterator {
        self.descending.iter().rev()
    }
}

/// Returns the profile targets of `from` that are on the board and unvisited.
///
/// Targets are yielded in the profile's enumeration order.
pub fn legal_targets<'a>(
    board: &'a Board,
    profile: &'a MoveProfile,
    from: Cell,
) -> impl Iterator<Item = Cell> + 'a {
    profile
        .targets(from)
        .filter(|&cell| board.contains(cell) && board.is_unvisited(cell))
}

/// Counts the legal targets of `from`, one ply ahead.
///
/// The board is not modified, so `from` itself is not treated as visited;
/// with a profile containing no zero offset this makes no difference.
///
/// # Examples
///
/// ```
/// use knight_tour_core::{Cell, MoveProfile};
/// use knight_tour_solver::{Board, ranker};
///
/// let board = Board::new(8);
/// let knight = MoveProfile::knight();
/// assert_eq!(ranker::onward_degree(&board, &knight, Cell::new(0, 0)), 2);
/// assert_eq!(ranker::onward_degree(&board, &knight, Cell::new(3, 3)), 8);
/// ```
#[must_use]
pub fn onward_degree(board: &Board, profile: &MoveProfile, from: Cell) -> usize {
    legal_targets(board, profile, from).count()
}

/// Enumerates and ranks the candidates reachable from `from`.
///
/// See [`Candidates`] for the resulting order.
#[must_use]
pub fn rank_candidates(board: &Board, profile: &MoveProfile, from: Cell) -> Candidates {
    let mut descending: Vec<_> = legal_targets(board, profile, from)
        .map(|cell| Candidate {
            cell,
            onward_degree: onward_degree(board, profile, cell),
        })
        .collect();
    // Reverse first so the stable sort leaves ties in reverse profile order.
    descending.reverse();
    descending.sort_by(|a, b| b.onward_degree.cmp(&a.onward_degree));
    Candidates { descending }
}
