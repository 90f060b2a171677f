//! Projective Plane Card Decks
//!
//! Builds finite projective planes over caller-supplied "line" values and
//! maps them onto decks of cards where any two cards share exactly one
//! symbol.
//!
//! # Overview
//!
//! A projective plane of order `o` has `o² + o + 1` points and as many lines.
//! Every point lies on `o + 1` lines, every line passes through `o + 1`
//! points, two points determine exactly one line and two lines meet in
//! exactly one point. Reading points as cards and lines as symbols gives the
//! one-shared-symbol guarantee.
//!
//! # Key Features
//!
//! - **Order selection** from a configurable table of prime orders (plus 1)
//! - **Grid construction** of `PG(2, o)` from the affine grid `AG(2, o)`
//!   extended with points at infinity
//! - **Independent verification** of pair uniqueness and single intersection
//! - **Deck layer** mapping points to cards, with JSON persistence
//!
//! # Quick Start
//!
//! ```rust
//! use projective_plane_cards::prelude::*;
//!
//! let lines = vec!["A", "B", "C", "D", "E", "F", "G"];
//! let plane = ProjectivePlaneConstructor::new(lines, 7)?;
//!
//! assert_eq!(plane.order(), 2);
//! assert_eq!(plane.plane_points().len(), 7);
//! assert!(verify_point_lines(plane.plane_points()));
//! # Ok::<(), PlaneError>(())
//! ```
//!
//! # Dealing cards
//!
//! ```rust
//! use projective_plane_cards::prelude::*;
//!
//! let symbols = Symbol::default_list(57);
//! let deck = Deck::deal(symbols, 55, &OrderSelector::default())?;
//!
//! assert_eq!(deck.cards.len(), 55);
//! deck.validate()?;
//! # Ok::<(), PlaneError>(())
//! ```

use std::hash::Hash;

pub mod config;
pub mod constructor;
pub mod deck;
pub mod error;
pub mod geometry;
pub mod order;
pub mod pair;
pub mod point;
pub mod verify;

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::config::DeckConfig;
    pub use crate::constructor::ProjectivePlaneConstructor;
    pub use crate::deck::{Card, Deck, Symbol};
    pub use crate::error::PlaneError;
    pub use crate::geometry::{Coord, Direction, Grid};
    pub use crate::order::{OrderSelection, OrderSelector, SUPPORTED_ORDERS};
    pub use crate::pair::Pair;
    pub use crate::point::PlanePoint;
    pub use crate::verify::{
        line_multiplicities, verify_detailed, verify_point_lines, verify_point_lines_par,
        Verification,
    };
    pub use crate::Line;
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Values that can be assigned to plane points.
///
/// Equality, ordering and hashing must agree: `a.cmp(&b) == Equal` exactly
/// when `a == b`, and equal values hash alike. The incidence sets rely on this
/// and cannot check it.
pub trait Line: Ord + Hash + Clone {}

impl<T: Ord + Hash + Clone> Line for T {}

/// Check if a number is a usable plane order (1 or a prime)
pub fn is_valid_order(n: usize) -> bool {
    n == 1 || is_prime(n)
}

fn is_prime(n: usize) -> bool {
    if n < 2 { return false; }
    if n == 2 { return true; }
    if n % 2 == 0 { return false; }
    let mut i = 3;
    while i <= n / i {
        if n % i == 0 { return false; }
        i += 2;
    }
    true
}

/// Number of points (and lines) in a plane of the given order
pub fn points_for_order(order: usize) -> usize {
    order * order + order + 1
}

/// [`points_for_order`], or `None` if the count does not fit in `usize`
pub fn checked_points_for_order(order: usize) -> Option<usize> {
    order.checked_mul(order)?.checked_add(order)?.checked_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_orders() {
        assert!(is_valid_order(1));
        assert!(is_valid_order(2));
        assert!(is_valid_order(3));
        assert!(is_valid_order(5));
        assert!(is_valid_order(19));
        assert!(!is_valid_order(0));
        assert!(!is_valid_order(4));
        assert!(!is_valid_order(9));
        assert!(!is_valid_order(25));
    }

    #[test]
    fn test_point_count() {
        assert_eq!(points_for_order(1), 3);
        assert_eq!(points_for_order(2), 7);
        assert_eq!(points_for_order(7), 57);
        assert_eq!(points_for_order(19), 401);
    }

    #[test]
    fn test_checked_point_count() {
        assert_eq!(checked_points_for_order(7), Some(57));
        assert_eq!(checked_points_for_order(usize::MAX), None);
        assert_eq!(checked_points_for_order(1 << (usize::BITS / 2)), None);
    }

    #[test]
    fn test_large_prime_check_does_not_overflow() {
        // Largest prime below 2^32; its square root bound must not overflow
        assert!(is_valid_order(4_294_967_291));
        assert!(!is_valid_order(usize::MAX - 1));
    }
}
