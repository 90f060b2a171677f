//! Plane Points
//!
//! A point holds the set of lines passing through it. In the deck layer a
//! point becomes a card and its lines become the card's symbols.

use std::collections::HashSet;
use std::fmt;

use crate::pair::Pair;
use crate::Line;

/// A point of the plane and the lines assigned to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanePoint<L: Line> {
    pub lines: HashSet<L>,
}

impl<L: Line> Default for PlanePoint<L> {
    fn default() -> Self {
        PlanePoint { lines: HashSet::new() }
    }
}

impl<L: Line> PlanePoint<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lines(lines: impl IntoIterator<Item = L>) -> Self {
        PlanePoint { lines: lines.into_iter().collect() }
    }

    /// Assign a line to this point. Returns false if it was already present.
    pub fn add_line(&mut self, line: L) -> bool {
        self.lines.insert(line)
    }

    pub fn contains(&self, line: &L) -> bool {
        self.lines.contains(line)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in ascending order
    pub fn sorted_lines(&self) -> Vec<&L> {
        let mut lines: Vec<_> = self.lines.iter().collect();
        lines.sort();
        lines
    }

    /// Number of lines this point shares with another
    pub fn shared_with(&self, other: &PlanePoint<L>) -> usize {
        self.lines.intersection(&other.lines).count()
    }

    /// All `k·(k-1)/2` unordered pairs of this point's lines
    pub fn get_all_pairs(&self) -> HashSet<Pair<L>> {
        let lines: Vec<&L> = self.lines.iter().collect();
        let mut pairs = HashSet::with_capacity(lines.len() * lines.len().saturating_sub(1) / 2);

        for (i, left) in lines.iter().enumerate() {
            for right in &lines[i + 1..] {
                // Set members are distinct, so pairing cannot fail
                if let Ok(pair) = Pair::new((*left).clone(), (*right).clone()) {
                    pairs.insert(pair);
                }
            }
        }

        pairs
    }

    /// Pairs of `line` with every other line on this point.
    ///
    /// `line` itself is skipped, and it need not lie on the point.
    pub fn get_pairs_with(&self, line: &L) -> HashSet<Pair<L>> {
        self.lines
            .iter()
            .filter(|current| *current != line)
            .filter_map(|current| Pair::new(current.clone(), line.clone()).ok())
            .collect()
    }
}

impl<L: Line + fmt::Display> fmt::Display for PlanePoint<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, line) in self.sorted_lines().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", line)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pairs_count() {
        let point = PlanePoint::with_lines(["a", "b", "c", "d"]);
        let pairs = point.get_all_pairs();
        assert_eq!(pairs.len(), 6);
        assert!(pairs.contains(&Pair::new("d", "a").unwrap()));
    }

    #[test]
    fn test_all_pairs_small_points() {
        assert!(PlanePoint::<u32>::new().get_all_pairs().is_empty());
        assert!(PlanePoint::with_lines([7]).get_all_pairs().is_empty());
    }

    #[test]
    fn test_pairs_with_excludes_self() {
        let point = PlanePoint::with_lines([1, 2, 3]);

        let pairs = point.get_pairs_with(&2);
        assert_eq!(pairs.len(), 2);
        assert!(pairs.contains(&Pair::new(1, 2).unwrap()));
        assert!(pairs.contains(&Pair::new(2, 3).unwrap()));

        // A line not on the point pairs with all of them
        assert_eq!(point.get_pairs_with(&9).len(), 3);
    }

    #[test]
    fn test_display_sorted() {
        let point = PlanePoint::with_lines(["c", "a", "b"]);
        assert_eq!(point.to_string(), "{a, b, c}");
        assert_eq!(PlanePoint::<u8>::new().to_string(), "{}");
    }

    #[test]
    fn test_shared_with() {
        let left = PlanePoint::with_lines([1, 2, 3]);
        let right = PlanePoint::with_lines([3, 4, 5]);
        assert_eq!(left.shared_with(&right), 1);
        assert_eq!(left.shared_with(&left), 3);
    }

    #[test]
    fn test_add_line() {
        let mut point = PlanePoint::new();
        assert!(point.is_empty());
        assert!(point.add_line('x'));
        assert!(!point.add_line('x'));
        assert_eq!(point.len(), 1);
        assert!(point.contains(&'x'));
    }
}
