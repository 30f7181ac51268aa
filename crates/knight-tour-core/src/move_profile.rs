//! Movement model of a piece.
//!
//! A piece is described entirely by data: an ordered list of relative
//! [`Offset`]s. The standard knight is the constant [`KNIGHT_OFFSETS`]; any
//! other leaper (camel, zebra, a custom fairy piece) is built with
//! [`MoveProfile::new`].

use std::iter::FusedIterator;

use crate::{Cell, Offset};

/// The eight knight offsets, in declaration order.
///
/// The order starts at `(1, 2)` and proceeds clockwise. It matters only as the
/// tie-break when two candidate moves rank equally.
pub const KNIGHT_OFFSETS: [Offset; 8] = [
    Offset::new(1, 2),
    Offset::new(2, 1),
    Offset::new(2, -1),
    Offset::new(1, -2),
    Offset::new(-1, -2),
    Offset::new(-2, -1),
    Offset::new(-2, 1),
    Offset::new(-1, 2),
];

/// An ordered set of relative moves a piece may make from its current cell.
///
/// The profile is immutable once built and may be shared between any number
/// of independent searches. A profile with no offsets is legal; a piece using
/// it simply never has anywhere to go.
///
/// # Examples
///
/// ```
/// use knight_tour_core::{Cell, MoveProfile, Offset};
///
/// let knight = MoveProfile::knight();
/// assert_eq!(knight.len(), 8);
///
/// // A wazir moves one step orthogonally.
/// let wazir = MoveProfile::new([(1, 0), (0, 1), (-1, 0), (0, -1)].map(Offset::from));
/// let targets: Vec<_> = wazir.targets(Cell::new(0, 0)).collect();
/// assert_eq!(
///     targets,
///     [Cell::new(1, 0), Cell::new(0, 1), Cell::new(-1, 0), Cell::new(0, -1)],
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveProfile {
    offsets: Vec<Offset>,
}

impl Default for MoveProfile {
    #[inline]
    fn default() -> Self {
        Self::knight()
    }
}

impl MoveProfile {
    /// Creates a profile from the given offsets, keeping their order.
    #[must_use]
    pub fn new<I>(offsets: I) -> Self
    where
        I: IntoIterator<Item = Offset>,
    {
        Self {
            offsets: offsets.into_iter().collect(),
        }
    }

    /// Creates the standard knight profile.
    #[must_use]
    pub fn knight() -> Self {
        Self::new(KNIGHT_OFFSETS)
    }

    /// Returns the offsets in enumeration order.
    #[must_use]
    #[inline]
    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    /// Returns the number of offsets.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns `true` if the profile has no offsets.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Returns the absolute cells reachable from `from`, in offset order.
    ///
    /// No bounds checking is performed; filtering targets against a board is
    /// the caller's job. Offsets whose target would overflow `i32` are
    /// skipped, since no board can contain such a cell.
    #[inline]
    pub fn targets(&self, from: Cell) -> Targets<'_> {
        Targets {
            from,
            offsets: self.offsets.iter(),
        }
    }

    /// Counts the offsets that move `from` exactly onto `to`.
    ///
    /// A well-formed profile has no duplicate offsets, so the result is `0`
    /// or `1`; duplicates are reported as-is.
    ///
    /// # Examples
    ///
    /// ```
    /// use knight_tour_core::{Cell, MoveProfile};
    ///
    /// let knight = MoveProfile::knight();
    /// assert_eq!(knight.moves_between(Cell::new(0, 0), Cell::new(2, 1)), 1);
    /// assert_eq!(knight.moves_between(Cell::new(0, 0), Cell::new(1, 1)), 0);
    /// ```
    #[must_use]
    pub fn moves_between(&self, from: Cell, to: Cell) -> usize {
        self.offsets
            .iter()
            .filter(|&&offset| from.checked_add(offset) == Some(to))
            .count()
    }
}

/// Iterator over the targets of a [`MoveProfile`] from a fixed cell.
#[derive(Debug, Clone)]
pub struct Targets<'a> {
    from: Cell,
    offsets: std::slice::Iter<'a, Offset>,
}

impl Iterator for Targets<'_> {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.offsets
            .by_ref()
            .find_map(|&offset| self.from.checked_add(offset))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.offsets.len()))
    }
}

impl DoubleEndedIterator for Targets<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.offsets
            .by_ref()
            .rev()
            .find_map(|&offset| self.from.checked_add(offset))
    }
}

impl FusedIterator for Targets<'_> {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_knight_profile_order() {
        let knight = MoveProfile::knight();
        assert_eq!(knight.offsets(), &KNIGHT_OFFSETS);
        assert_eq!(knight.offsets()[0], Offset::new(1, 2));
        assert_eq!(knight.offsets()[1], Offset::new(2, 1));
        assert_eq!(MoveProfile::default(), knight);
    }

    #[test]
    fn test_knight_offsets_are_distinct_l_shapes() {
        for (i, a) in KNIGHT_OFFSETS.iter().enumerate() {
            assert_eq!(a.dx.abs() + a.dy.abs(), 3);
            assert!(a.dx != 0 && a.dy != 0);
            for b in &KNIGHT_OFFSETS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_empty_profile_has_no_targets() {
        let profile = MoveProfile::new([]);
        assert!(profile.is_empty());
        assert_eq!(profile.len(), 0);
        assert_eq!(profile.targets(Cell::new(3, 3)).count(), 0);
    }

    #[test]
    fn test_targets_iterator_both_ends() {
        let knight = MoveProfile::knight();
        let mut targets = knight.targets(Cell::new(0, 0));
        assert_eq!(targets.size_hint(), (0, Some(8)));
        assert_eq!(targets.next(), Some(Cell::new(1, 2)));
        assert_eq!(targets.next_back(), Some(Cell::new(-1, 2)));
        assert_eq!(targets.count(), 6);
    }

    #[test]
    fn test_overflowing_targets_are_skipped() {
        let profile = MoveProfile::new([
            Offset::new(i32::MAX, 0),
            Offset::new(1, 0),
            Offset::new(0, i32::MIN),
        ]);
        let from = Cell::new(1, -1);
        assert_eq!(profile.targets(from).collect::<Vec<_>>(), [Cell::new(2, -1)]);
        assert_eq!(profile.targets(from).rev().collect::<Vec<_>>(), [Cell::new(2, -1)]);
        assert_eq!(profile.moves_between(from, Cell::new(2, -1)), 1);
        assert_eq!(
            profile.moves_between(Cell::new(i32::MAX, 0), Cell::new(i32::MIN, 0)),
            0
        );
    }

    #[test]
    fn test_moves_between_counts_duplicates() {
        let profile = MoveProfile::new([Offset::new(1, 0), Offset::new(1, 0)]);
        assert_eq!(profile.moves_between(Cell::new(0, 0), Cell::new(1, 0)), 2);
    }

    proptest! {
        #[test]
        fn test_targets_are_cell_plus_offset(x in -50_i32..50, y in -50_i32..50) {
            let knight = MoveProfile::knight();
            let from = Cell::new(x, y);
            for (target, offset) in knight.targets(from).zip(knight.offsets()) {
                prop_assert_eq!(from.offset_to(target), *offset);
                prop_assert_eq!(knight.moves_between(from, target), 1);
            }
        }
    }
}
