//! Grid & Direction Model
//!
//! Lays out the points of `PG(2, o)` as the `o × o` affine grid `AG(2, o)`
//! followed by one point at infinity per parallel class.
//!
//! Point indices:
//! - `row * o + col` for grid points, with both coordinates taken mod `o`
//! - `o² + d` for the point at infinity of direction `d`
//!
//! Line indices, into the caller's line sequence:
//! - `d * o + t` for the `t`-th affine line of direction `d`
//! - `o² + o` for the line at infinity

use serde::{Deserialize, Serialize};

use crate::points_for_order;

/// Step between consecutive grid points on one affine line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub row_inc: usize,
    pub col_inc: usize,
}

/// Position on the affine grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

/// Index arithmetic for a plane of one order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    order: usize,
}

impl Grid {
    /// The caller guarantees `order` is 1 or prime; the slopes only form
    /// parallel classes over a field.
    pub fn new(order: usize) -> Self {
        debug_assert!(crate::is_valid_order(order), "Order must be 1 or prime");
        Grid { order }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of affine grid points, `o²`
    pub fn grid_size(&self) -> usize {
        self.order * self.order
    }

    /// Total number of points, `o² + o + 1`
    pub fn num_points(&self) -> usize {
        points_for_order(self.order)
    }

    /// The `o + 1` parallel classes: vertical first, then slopes `0..o`
    pub fn directions(&self) -> Vec<Direction> {
        let mut directions = Vec::with_capacity(self.order + 1);
        directions.push(Direction { row_inc: 1, col_inc: 0 });
        for i in 0..self.order {
            directions.push(Direction { row_inc: i, col_inc: 1 });
        }
        directions
    }

    /// Index of the grid point at `(row, col)`, wrapping both coordinates
    pub fn grid_index(&self, row: usize, col: usize) -> usize {
        (row % self.order) * self.order + (col % self.order)
    }

    /// Index of the point at infinity for a direction
    pub fn projection_index(&self, direction_index: usize) -> usize {
        self.grid_size() + direction_index
    }

    /// Where the `iteration`-th line of a direction starts.
    ///
    /// Vertical lines start along the top row, all others down the first
    /// column.
    pub fn starting_coord(&self, direction_index: usize, iteration: usize) -> Coord {
        if direction_index == 0 {
            Coord { row: 0, col: iteration }
        } else {
            Coord { row: iteration, col: 0 }
        }
    }

    /// Indices of the `o` grid points on one affine line
    pub fn trace(&self, direction: Direction, start: Coord) -> impl Iterator<Item = usize> + '_ {
        (0..self.order).map(move |i| {
            self.grid_index(start.row + i * direction.row_inc, start.col + i * direction.col_inc)
        })
    }

    /// Position in the line sequence of the `iteration`-th line of a direction
    pub fn line_index(&self, direction_index: usize, iteration: usize) -> usize {
        direction_index * self.order + iteration
    }

    /// Position in the line sequence of the line at infinity (the last one)
    pub fn infinity_line_index(&self) -> usize {
        self.num_points() - 1
    }
}
