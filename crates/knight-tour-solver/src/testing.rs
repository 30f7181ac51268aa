//! Assertions shared by the solver tests.

use std::collections::HashSet;

use knight_tour_core::MoveProfile;

use crate::{Tour, TourSearch};

/// Asserts that the search found a tour and that the tour is valid.
///
/// Checks each property separately so a failure says which one broke.
#[track_caller]
pub(crate) fn assert_valid_tour<'a>(search: &'a TourSearch, profile: &MoveProfile) -> &'a Tour {
    let Some(tour) = search.outcome.tour() else {
        panic!("expected a complete tour, search was exhausted: {:?}", search.stats);
    };

    let expected = tour.size() * tour.size();
    assert_eq!(tour.len(), expected, "tour does not cover the board");

    let distinct: HashSet<_> = tour.cells().iter().collect();
    assert_eq!(distinct.len(), expected, "tour revisits a cell");

    for &cell in tour.cells() {
        assert!(
            cell.is_within(tour.size(), tour.size()),
            "cell {cell} is off the board"
        );
    }
    for pair in tour.cells().windows(2) {
        assert_eq!(
            profile.moves_between(pair[0], pair[1]),
            1,
            "{} -> {} is not exactly one profile move",
            pair[0],
            pair[1]
        );
    }

    assert_eq!(tour.validate(profile), Ok(()));
    assert!(search.stats.placements() >= tour.len());
    tour
}

/// Asserts that the search gave up without a tour.
#[track_caller]
pub(crate) fn assert_exhausted(search: &TourSearch) {
    assert!(
        search.outcome.is_exhausted(),
        "expected exhaustion, got {:?}",
        search.outcome
    );
}
