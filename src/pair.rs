//! Unordered Line Pairs
//!
//! Two distinct lines taken together, independent of the order they were
//! given in. The verifier collects these to detect a line pair that occurs
//! on more than one point.

use std::cmp::Ordering;
use std::fmt;

use crate::error::PlaneError;
use crate::Line;

/// Canonical unordered pair of two distinct lines.
///
/// Values are stored in ascending order, so `Pair::new(a, b)` and
/// `Pair::new(b, a)` are identical, including their display form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair<L> {
    first: L,
    second: L,
}

impl<L: Line> Pair<L> {
    /// Pair two lines. Fails if they compare equal.
    pub fn new(a: L, b: L) -> Result<Self, PlaneError> {
        match a.cmp(&b) {
            Ordering::Less => Ok(Pair { first: a, second: b }),
            Ordering::Greater => Ok(Pair { first: b, second: a }),
            Ordering::Equal => Err(PlaneError::InvalidArgument(
                "pair values must be distinct".to_string(),
            )),
        }
    }

    /// Pair two possibly absent lines.
    pub fn from_options(a: Option<L>, b: Option<L>) -> Result<Self, PlaneError> {
        let a = a.ok_or_else(|| PlaneError::InvalidArgument("first pair value is absent".to_string()))?;
        let b = b.ok_or_else(|| PlaneError::InvalidArgument("second pair value is absent".to_string()))?;
        Self::new(a, b)
    }

    /// The smaller of the two lines
    pub fn first(&self) -> &L {
        &self.first
    }

    /// The larger of the two lines
    pub fn second(&self) -> &L {
        &self.second
    }

    /// Whether `line` is one of the pair
    pub fn contains(&self, line: &L) -> bool {
        &self.first == line || &self.second == line
    }
}

impl<L: fmt::Display> fmt::Display for Pair<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pair_is_symmetric() {
        let ab = Pair::new("a", "b").unwrap();
        let ba = Pair::new("b", "a").unwrap();
        assert_eq!(ab, ba);

        let mut set = HashSet::new();
        set.insert(ab);
        assert!(!set.insert(ba));
    }

    #[test]
    fn test_pair_is_sorted() {
        let pair = Pair::new(9, 4).unwrap();
        assert_eq!(*pair.first(), 4);
        assert_eq!(*pair.second(), 9);
        assert_eq!(pair.to_string(), "{4,9}");
        assert!(pair.contains(&9));
        assert!(!pair.contains(&5));
    }

    #[test]
    fn test_equal_values_rejected() {
        assert!(matches!(Pair::new("a", "a"), Err(PlaneError::InvalidArgument(_))));
    }

    #[test]
    fn test_absent_values_rejected() {
        assert!(matches!(
            Pair::from_options(None, Some("x")),
            Err(PlaneError::InvalidArgument(_))
        ));
        assert!(matches!(
            Pair::from_options(Some("x"), None),
            Err(PlaneError::InvalidArgument(_))
        ));
        assert_eq!(
            Pair::from_options(Some("y"), Some("x")).unwrap(),
            Pair::new("x", "y").unwrap()
        );
    }
}
