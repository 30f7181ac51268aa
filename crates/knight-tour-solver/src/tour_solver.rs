use knight_tour_core::{Cell, MoveProfile};

use crate::{
    Board, Path, Tour, TourError,
    ranker::{self, Candidates},
};

/// Counters collected during one or more searches.
///
/// # Examples
///
/// ```
/// use knight_tour_core::Cell;
/// use knight_tour_solver::TourSolver;
///
/// let search = TourSolver::knight().solve(3, Cell::new(0, 0))?;
/// assert!(search.outcome.is_exhausted());
/// assert!(search.stats.has_backtracked());
/// assert_eq!(search.stats.backtracks(), search.stats.placements() - 1);
/// # Ok::<(), knight_tour_solver::TourError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    placements: usize,
    backtracks: usize,
    max_depth: usize,
}

impl SearchStats {
    /// Returns the number of cells placed on the path, including the start.
    ///
    /// For an exhausted search this is the number of moves attempted.
    #[must_use]
    pub fn placements(&self) -> usize {
        self.placements
    }

    /// Returns the number of moves undone.
    #[must_use]
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }

    /// Returns the longest path length reached.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns `true` if any move was undone.
    #[must_use]
    pub fn has_backtracked(&self) -> bool {
        self.backtracks > 0
    }

    fn record_placement(&mut self, depth: usize) {
        self.placements += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    fn absorb(&mut self, other: &Self) {
        self.placements += other.placements;
        self.backtracks += other.backtracks;
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum TourOutcome {
    /// A tour covering the whole board was found.
    Complete(Tour),
    /// Every ranked continuation from the start was tried without success.
    ///
    /// This does not prove that no tour exists.
    Exhausted,
}

impl TourOutcome {
    /// Returns the tour, if one was found.
    #[must_use]
    pub fn tour(&self) -> Option<&Tour> {
        match self {
            Self::Complete(tour) => Some(tour),
            Self::Exhausted => None,
        }
    }

    /// Consumes the outcome and returns the tour, if one was found.
    #[must_use]
    pub fn into_tour(self) -> Option<Tour> {
        match self {
            Self::Complete(tour) => Some(tour),
            Self::Exhausted => None,
        }
    }
}

/// Outcome and statistics of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourSearch {
    /// How the search ended.
    pub outcome: TourOutcome,
    /// Counters collected while searching.
    pub stats: SearchStats,
}

/// One placed cell and the continuations not yet tried from it.
#[derive(Debug)]
struct Frame {
    cell: Cell,
    /// `None` until the cell is expanded.
    remaining: Option<Candidates>,
}

impl Frame {
    fn new(cell: Cell) -> Self {
        Self {
            cell,
            remaining: None,
        }
    }
}

/// Backtracking knight's tour search ordered by Warnsdorff's rule.
///
/// The solver owns a [`MoveProfile`] and can run any number of independent
/// searches with it. Each search allocates its own [`Board`] and [`Path`],
/// so a solver can be shared freely.
///
/// The search keeps an explicit stack of frames, one per cell on the path,
/// each holding that cell's untried [`Candidates`]. Depth is bounded by the
/// number of board cells and lives on the heap.
///
/// # Examples
///
/// ```
/// use knight_tour_core::{Cell, MoveProfile};
/// use knight_tour_solver::TourSolver;
///
/// let solver = TourSolver::new(MoveProfile::knight());
/// let search = solver.solve(8, Cell::new(0, 0))?;
///
/// let tour = search.outcome.tour().expect("8x8 tour from the corner");
/// assert_eq!(tour.len(), 64);
/// assert!(tour.validate(solver.profile()).is_ok());
/// # Ok::<(), knight_tour_solver::TourError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TourSolver {
    profile: MoveProfile,
}

impl TourSolver {
    /// Creates a solver for a piece moving by `profile`.
    #[must_use]
    pub fn new(profile: MoveProfile) -> Self {
        Self { profile }
    }

    /// Creates a solver for the standard knight.
    #[must_use]
    pub fn knight() -> Self {
        Self::new(MoveProfile::knight())
    }

    /// Returns the movement profile.
    #[must_use]
    #[inline]
    pub fn profile(&self) -> &MoveProfile {
        &self.profile
    }

    /// Searches for a tour of a `size × size` board starting at `start`.
    ///
    /// Reaching [`TourOutcome::Exhausted`] is an ordinary result, not an
    /// error: it means the ordered search found nothing from this start.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::InvalidBoardSize`] if `size` is zero or does not
    /// fit a [`Cell`] coordinate, and [`TourError::InvalidStart`] if `start`
    /// is outside the board. Neither case performs any search.
    pub fn solve(&self, size: usize, start: Cell) -> Result<TourSearch, TourError> {
        check_size(size)?;
        if !start.is_within(size, size) {
            return Err(TourError::InvalidStart { start, size });
        }

        let mut board = Board::new(size);
        Ok(self.run(&mut board, start))
    }

    /// Tries every start cell in row-major order and returns the first tour.
    ///
    /// One board is reused across attempts. The returned statistics cover
    /// all attempts.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::InvalidBoardSize`] under the same conditions as
    /// [`solve`](Self::solve).
    pub fn find_any(&self, size: usize) -> Result<TourSearch, TourError> {
        check_size(size)?;

        let mut board = Board::new(size);
        let mut total = SearchStats::default();
        for start in board.markers().cells() {
            board.reset();
            let TourSearch { outcome, stats } = self.run(&mut board, start);
            total.absorb(&stats);
            if outcome.is_complete() {
                return Ok(TourSearch {
                    outcome,
                    stats: total,
                });
            }
        }
        Ok(TourSearch {
            outcome: TourOutcome::Exhausted,
            stats: total,
        })
    }

    fn run(&self, board: &mut Board, start: Cell) -> TourSearch {
        let size = board.size();
        log::debug!("searching {size}x{size} board from {start}");
        let mut stats = SearchStats::default();
        let outcome = self.search(board, start, &mut stats);
        log::debug!(
            "search from {start} {}: {} placements, {} backtracks, max depth {}",
            if outcome.is_complete() {
                "completed"
            } else {
                "exhausted"
            },
            stats.placements,
            stats.backtracks,
            stats.max_depth,
        );
        TourSearch { outcome, stats }
    }

    fn search(&self, board: &mut Board, start: Cell, stats: &mut SearchStats) -> TourOutcome {
        debug_assert_eq!(board.visited_count(), 0, "search needs a cleared board");
        let size = board.size();
        let total = board.cell_count();
        let mut path = Path::with_capacity(start, total);
        let mut frames = Vec::with_capacity(total);

        board.mark_visited(start);
        stats.record_placement(path.len());
        frames.push(Frame::new(start));

        loop {
            if path.len() == total {
                return TourOutcome::Complete(Tour::new(size, path.into_cells()));
            }

            let Some(frame) = frames.last_mut() else {
                unreachable!("the start frame is never popped");
            };
            let cell = frame.cell;
            let remaining = frame.remaining.get_or_insert_with(|| {
                let mut candidates = ranker::rank_candidates(board, &self.profile, cell);
                // One cell left to fill: only the best-ranked candidate is tried.
                if path.len() + 1 == total {
                    candidates.retain_best_only();
                }
                candidates
            });

            if let Some(next) = remaining.pop_best() {
                board.mark_visited(next.cell);
                path.push(next.cell);
                stats.record_placement(path.len());
                log::trace!(
                    "place {} (onward degree {}) at depth {}",
                    next.cell,
                    next.onward_degree,
                    path.len()
                );
                frames.push(Frame::new(next.cell));
                continue;
            }

            if frames.len() == 1 {
                board.mark_unvisited(start);
                path.abandon();
                return TourOutcome::Exhausted;
            }

            let Some(dead_end) = frames.pop() else {
                unreachable!("frame stack checked non-empty above");
            };
            board.mark_unvisited(dead_end.cell);
            match path.pop() {
                Ok(cell) => debug_assert_eq!(cell, dead_end.cell),
                Err(err) => unreachable!("backtracking above the start frame: {err}"),
            }
            stats.backtracks += 1;
            log::trace!("backtrack from {} to depth {}", dead_end.cell, path.len());
        }
    }
}

/// Rejects sizes with no cells or with coordinates beyond `i32`.
fn check_size(size: usize) -> Result<(), TourError> {
    if size == 0 || i32::try_from(size).is_err() {
        return Err(TourError::InvalidBoardSize { size });
    }
    Ok(())
}
