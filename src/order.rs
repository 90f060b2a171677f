//! Order Selection
//!
//! Picks the smallest plane order whose point count covers a request.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::PlaneError;
use crate::{checked_points_for_order, is_valid_order, points_for_order};

/// Orders supported by default. Only 1 and primes work with the modular
/// grid construction.
pub const SUPPORTED_ORDERS: [usize; 9] = [1, 2, 3, 5, 7, 11, 13, 17, 19];

/// Chooses a plane order from an ascending table of usable orders.
///
/// Serializes as the bare order list; deserializing goes through
/// [`OrderSelector::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct OrderSelector {
    orders: Vec<usize>,
}

/// Outcome of choosing an order for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSelection {
    pub order: usize,
    /// `order² + order + 1`, the number of points and of lines consumed
    pub max_points: usize,
    /// Supplied lines beyond `max_points`, left unused
    pub surplus_lines: usize,
}

impl Default for OrderSelector {
    fn default() -> Self {
        OrderSelector { orders: SUPPORTED_ORDERS.to_vec() }
    }
}

impl TryFrom<Vec<usize>> for OrderSelector {
    type Error = PlaneError;

    fn try_from(orders: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(orders)
    }
}

impl From<OrderSelector> for Vec<usize> {
    fn from(selector: OrderSelector) -> Self {
        selector.orders
    }
}

impl OrderSelector {
    /// Build a selector from a custom order table.
    ///
    /// Orders are sorted and deduplicated. Any order that is neither 1 nor
    /// prime, or whose point count does not fit in `usize`, is rejected.
    pub fn new(orders: impl IntoIterator<Item = usize>) -> Result<Self, PlaneError> {
        let mut orders: Vec<usize> = orders.into_iter().collect();
        let unusable = |o: usize| checked_points_for_order(o).is_none() || !is_valid_order(o);
        if let Some(&bad) = orders.iter().find(|&&o| unusable(o)) {
            return Err(PlaneError::UnsupportedOrder(bad));
        }
        if orders.is_empty() {
            return Err(PlaneError::InvalidArgument(
                "at least one plane order must be supported".to_string(),
            ));
        }
        orders.sort_unstable();
        orders.dedup();
        Ok(OrderSelector { orders })
    }

    pub fn orders(&self) -> &[usize] {
        &self.orders
    }

    /// Largest point count any supported order can produce
    pub fn max_points(&self) -> usize {
        self.orders.last().map_or(0, |&o| points_for_order(o))
    }

    /// Smallest supported order with at least `num_points` points
    pub fn select(&self, num_points: usize) -> Result<usize, PlaneError> {
        if num_points == 0 {
            return Err(PlaneError::InvalidArgument(
                "at least one point must be requested".to_string(),
            ));
        }

        self.orders
            .iter()
            .copied()
            .find(|&o| points_for_order(o) >= num_points)
            .ok_or(PlaneError::InvalidRequest {
                requested: num_points,
                max: self.max_points(),
            })
    }

    /// Select an order and check that enough lines were supplied for it.
    ///
    /// Surplus lines are not an error; a warning is logged and only the first
    /// `max_points` lines are meant to be consumed.
    pub fn select_for_lines(&self, num_points: usize, num_lines: usize) -> Result<OrderSelection, PlaneError> {
        let order = self.select(num_points)?;
        let max_points = points_for_order(order);

        if num_lines < max_points {
            return Err(PlaneError::InsufficientLines {
                required: max_points,
                supplied: num_lines,
            });
        }

        let surplus_lines = num_lines - max_points;
        if surplus_lines > 0 {
            warn!(
                "Not all of the line objects will be used. Only {} line objects are required for {} points ({} unused)",
                max_points, num_points, surplus_lines
            );
        }

        debug!("selected order {} ({} points) for {} requested points", order, max_points, num_points);

        Ok(OrderSelection { order, max_points, surplus_lines })
    }
}
