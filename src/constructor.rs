//! Projective Plane Constructor
//!
//! Assigns caller-supplied lines to the points of `PG(2, o)` so that every
//! two points share exactly one line and every two lines meet in exactly one
//! point.
//!
//! Construction validates eagerly and builds lazily: order selection and the
//! line count check happen in [`ProjectivePlaneConstructor::new`], and the
//! incidence structure is computed once, on first read.

use std::sync::OnceLock;

use log::debug;

use crate::error::PlaneError;
use crate::geometry::{Direction, Grid};
use crate::order::{OrderSelection, OrderSelector};
use crate::point::PlanePoint;
use crate::verify::verify_point_lines;
use crate::Line;

/// Builds a projective plane over the supplied lines
#[derive(Debug)]
pub struct ProjectivePlaneConstructor<L: Line> {
    selection: OrderSelection,
    grid: Grid,
    directions: Vec<Direction>,
    lines: Vec<L>,
    num_requested: usize,
    points: OnceLock<Vec<PlanePoint<L>>>,
}

impl<L: Line> ProjectivePlaneConstructor<L> {
    /// Prepare a plane with at least `num_points` points using the default
    /// order table.
    pub fn new(lines: impl IntoIterator<Item = L>, num_points: usize) -> Result<Self, PlaneError> {
        Self::with_selector(lines, num_points, &OrderSelector::default())
    }

    /// Prepare a plane choosing its order from `selector`.
    ///
    /// Only the first `o² + o + 1` lines are kept, in supplied order.
    pub fn with_selector(
        lines: impl IntoIterator<Item = L>,
        num_points: usize,
        selector: &OrderSelector,
    ) -> Result<Self, PlaneError> {
        let mut lines: Vec<L> = lines.into_iter().collect();
        let selection = selector.select_for_lines(num_points, lines.len())?;
        lines.truncate(selection.max_points);

        let grid = Grid::new(selection.order);
        let directions = grid.directions();

        Ok(ProjectivePlaneConstructor {
            selection,
            grid,
            directions,
            lines,
            num_requested: num_points,
            points: OnceLock::new(),
        })
    }

    pub fn order(&self) -> usize {
        self.selection.order
    }

    /// Number of points (and lines) in the full plane
    pub fn max_points(&self) -> usize {
        self.selection.max_points
    }

    pub fn num_requested(&self) -> usize {
        self.num_requested
    }

    pub fn selection(&self) -> &OrderSelection {
        &self.selection
    }

    /// The lines consumed by the plane, in supplied order
    pub fn lines(&self) -> &[L] {
        &self.lines
    }

    /// The line shared by all points at infinity
    pub fn line_at_infinity(&self) -> &L {
        &self.lines[self.grid.infinity_line_index()]
    }

    /// The requested points: a fixed prefix of the full plane, grid points
    /// first and points at infinity last.
    pub fn plane_points(&self) -> &[PlanePoint<L>] {
        &self.full_plane()[..self.num_requested]
    }

    /// Every point of the plane, building it on first access
    pub fn full_plane(&self) -> &[PlanePoint<L>] {
        self.points.get_or_init(|| self.run())
    }

    /// Whether the plane has been built yet
    pub fn is_built(&self) -> bool {
        self.points.get().is_some()
    }

    /// Check the requested points. See [`verify_point_lines`].
    pub fn verify(&self) -> bool {
        verify_point_lines(self.plane_points())
    }

    fn run(&self) -> Vec<PlanePoint<L>> {
        let order = self.grid.order();
        let mut points: Vec<PlanePoint<L>> = (0..self.grid.num_points()).map(|_| PlanePoint::new()).collect();
        let projection_line = self.line_at_infinity();

        for (d, &direction) in self.directions.iter().enumerate() {
            let projection_index = self.grid.projection_index(d);

            for t in 0..order {
                let start = self.grid.starting_coord(d, t);
                let line = &self.lines[self.grid.line_index(d, t)];

                for index in self.grid.trace(direction, start) {
                    points[index].add_line(line.clone());
                }

                // Parallel lines meet at their point at infinity
                points[projection_index].add_line(line.clone());
            }

            points[projection_index].add_line(projection_line.clone());
        }

        debug!(
            "built plane of order {}: {} points, {} lines per point",
            order,
            points.len(),
            order + 1
        );

        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::SUPPORTED_ORDERS;
    use crate::points_for_order;
    use crate::verify::line_multiplicities;

    fn numbered_lines(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_fano_plane() {
        let lines = vec!["A", "B", "C", "D", "E", "F", "G"];
        let plane = ProjectivePlaneConstructor::new(lines, 7).unwrap();
        assert_eq!(plane.order(), 2);

        let points = plane.plane_points();
        assert_eq!(points.len(), 7);
        for point in points {
            assert_eq!(point.len(), 3);
        }
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                assert_eq!(points[i].shared_with(&points[j]), 1);
            }
        }
        assert!(verify_point_lines(points));
    }

    #[test]
    fn test_order_one_triangle() {
        let plane = ProjectivePlaneConstructor::new(vec!["X", "Y", "Z"], 3).unwrap();
        assert_eq!(plane.order(), 1);

        let points = plane.plane_points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], PlanePoint::with_lines(["X", "Y"]));
        assert_eq!(points[1], PlanePoint::with_lines(["X", "Z"]));
        assert_eq!(points[2], PlanePoint::with_lines(["Y", "Z"]));
        assert!(verify_point_lines(points));
    }

    #[test]
    fn test_every_supported_order() {
        for &order in &SUPPORTED_ORDERS {
            let n = points_for_order(order);
            let plane = ProjectivePlaneConstructor::new(numbered_lines(n), n).unwrap();
            assert_eq!(plane.order(), order);

            let points = plane.plane_points();
            assert_eq!(points.len(), n);
            assert!(points.iter().all(|p| p.len() == order + 1), "order {}", order);

            let counts = line_multiplicities(points);
            assert_eq!(counts.len(), n);
            assert!(counts.values().all(|&c| c == order + 1), "order {}", order);

            assert!(verify_point_lines(points), "order {} failed verification", order);
        }
    }

    #[test]
    fn test_partial_request_is_prefix() {
        let plane = ProjectivePlaneConstructor::new(numbered_lines(57), 55).unwrap();
        assert_eq!(plane.order(), 7);
        assert_eq!(plane.max_points(), 57);
        assert_eq!(plane.plane_points().len(), 55);
        assert_eq!(plane.full_plane().len(), 57);
        assert_eq!(plane.plane_points(), &plane.full_plane()[..55]);
        assert!(plane.verify());
    }

    #[test]
    fn test_excess_lines_are_unused() {
        let plane = ProjectivePlaneConstructor::new(numbered_lines(20), 7).unwrap();
        assert_eq!(plane.selection().surplus_lines, 13);
        assert_eq!(plane.lines(), &[0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(*plane.line_at_infinity(), 6);

        let counts = line_multiplicities(plane.full_plane());
        assert!(counts.keys().all(|&line| line < 7));
        assert!(plane.verify());
    }

    #[test]
    fn test_line_at_infinity_on_points_at_infinity() {
        let plane = ProjectivePlaneConstructor::new(numbered_lines(13), 13).unwrap();
        let infinity = *plane.line_at_infinity();
        let points = plane.full_plane();

        let holders: Vec<usize> = (0..points.len()).filter(|&i| points[i].contains(&infinity)).collect();
        assert_eq!(holders, vec![9, 10, 11, 12]);
    }

    #[test]
    fn test_too_many_points() {
        let err = ProjectivePlaneConstructor::new(numbered_lines(500), 402).unwrap_err();
        assert_eq!(err, PlaneError::InvalidRequest { requested: 402, max: 401 });
    }

    #[test]
    fn test_insufficient_lines() {
        let err = ProjectivePlaneConstructor::new(numbered_lines(56), 50).unwrap_err();
        assert_eq!(err, PlaneError::InsufficientLines { required: 57, supplied: 56 });
    }

    #[test]
    fn test_build_is_memoized() {
        let plane = ProjectivePlaneConstructor::new(numbered_lines(31), 31).unwrap();
        assert!(!plane.is_built());

        let first = plane.plane_points();
        assert!(plane.is_built());
        let second = plane.plane_points();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_deterministic() {
        let a = ProjectivePlaneConstructor::new(numbered_lines(31), 20).unwrap();
        let b = ProjectivePlaneConstructor::new(numbered_lines(31), 20).unwrap();
        assert_eq!(a.plane_points(), b.plane_points());
    }

    #[test]
    fn test_custom_selector() {
        let selector = OrderSelector::new([23]).unwrap();
        let n = points_for_order(23);
        let plane = ProjectivePlaneConstructor::with_selector(numbered_lines(n), 10, &selector).unwrap();
        assert_eq!(plane.order(), 23);
        assert_eq!(plane.plane_points().len(), 10);
        assert!(verify_point_lines(plane.full_plane()));
    }
}
