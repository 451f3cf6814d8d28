use grid_util::grid::Grid;
use grid_util::point::Point;

use crate::grid::{Cell, RouteGrid};

const CARDINALS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Grows every cell holding `value` outward along the four cardinal
/// directions by up to `dist` steps, converting the free cells it reaches.
///
/// Each ray reads the input snapshot and stops at the first cell that is not
/// free there, so pre-existing obstacles cap the expansion and growth never
/// compounds across seed cells within one pass. The input grid is left
/// untouched; the expansion is written into a fresh copy.
///
/// Used with ([Cell::Blocked], 10) to add a safety margin around obstacles
/// before searching and with ([Cell::Route], 2) to thicken a drawn route.
pub fn dilate(grid: &RouteGrid, value: Cell, dist: usize) -> RouteGrid {
    let mut out = grid.clone();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.get(x, y) != value {
                continue;
            }
            for (dx, dy) in CARDINALS {
                for d in 1..=dist {
                    // Rays break at the border well before d can exceed the
                    // grid dimensions, so the cast cannot overflow.
                    let d = d as i32;
                    let next = Point::new(x as i32 + dx * d, y as i32 + dy * d);
                    if grid.can_traverse(next) {
                        out.set(next.x as usize, next.y as usize, value);
                    } else {
                        break;
                    }
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_a_plus_shape_on_open_ground() {
        let mut grid = RouteGrid::new(5, 5, Cell::Free);
        grid.set(2, 2, Cell::Blocked);
        let out = dilate(&grid, Cell::Blocked, 2);
        for (x, y) in [(2, 0), (2, 1), (2, 3), (2, 4), (0, 2), (1, 2), (3, 2), (4, 2)] {
            assert_eq!(out.get(x, y), Cell::Blocked);
        }
        // Diagonals stay free: expansion is cardinal only.
        for (x, y) in [(1, 1), (3, 1), (1, 3), (3, 3)] {
            assert_eq!(out.get(x, y), Cell::Free);
        }
    }

    #[test]
    fn ray_stops_at_first_non_free_cell() {
        // Seed at x=0, a route marker at x=2: the ray must not skip past it.
        let mut grid = RouteGrid::new(6, 1, Cell::Free);
        grid.set(0, 0, Cell::Blocked);
        grid.set(2, 0, Cell::Route);
        let out = dilate(&grid, Cell::Blocked, 4);
        assert_eq!(out.get(1, 0), Cell::Blocked);
        assert_eq!(out.get(2, 0), Cell::Route);
        assert_eq!(out.get(3, 0), Cell::Free);
        assert_eq!(out.get(4, 0), Cell::Free);
    }

    #[test]
    fn zero_distance_is_a_no_op() {
        let mut grid = RouteGrid::new(3, 3, Cell::Free);
        grid.set(1, 1, Cell::Blocked);
        let out = dilate(&grid, Cell::Blocked, 0);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(out.get(x, y), grid.get(x, y));
            }
        }
    }

    #[test]
    fn seeds_are_preserved() {
        let mut grid = RouteGrid::new(4, 1, Cell::Free);
        grid.set(1, 0, Cell::Blocked);
        grid.set(2, 0, Cell::Blocked);
        let out = dilate(&grid, Cell::Blocked, 1);
        assert_eq!(out.get(1, 0), Cell::Blocked);
        assert_eq!(out.get(2, 0), Cell::Blocked);
    }

    #[test]
    fn growth_does_not_compound_across_seeds() {
        // Two adjacent seeds with dist 1 grow one step each from their
        // snapshot positions, not from each other's fresh growth.
        let mut grid = RouteGrid::new(6, 1, Cell::Free);
        grid.set(2, 0, Cell::Blocked);
        grid.set(3, 0, Cell::Blocked);
        let out = dilate(&grid, Cell::Blocked, 1);
        assert_eq!(out.get(1, 0), Cell::Blocked);
        assert_eq!(out.get(4, 0), Cell::Blocked);
        assert_eq!(out.get(0, 0), Cell::Free);
        assert_eq!(out.get(5, 0), Cell::Free);
    }

    #[test]
    fn oversized_distances_saturate_at_the_border() {
        // A distance beyond i32 range must still sweep to the grid edge
        // rather than truncate to a shorter (or empty) walk.
        let mut grid = RouteGrid::new(4, 1, Cell::Free);
        grid.set(0, 0, Cell::Blocked);
        let out = dilate(&grid, Cell::Blocked, i32::MAX as usize + 1);
        assert_eq!(out.get(1, 0), Cell::Blocked);
        assert_eq!(out.get(2, 0), Cell::Blocked);
        assert_eq!(out.get(3, 0), Cell::Blocked);
    }

    #[test]
    fn edge_seeds_stop_at_the_border() {
        let mut grid = RouteGrid::new(3, 3, Cell::Free);
        grid.set(0, 0, Cell::Blocked);
        let out = dilate(&grid, Cell::Blocked, 5);
        // Whole first row and column, nothing else.
        assert_eq!(out.get(1, 0), Cell::Blocked);
        assert_eq!(out.get(2, 0), Cell::Blocked);
        assert_eq!(out.get(0, 1), Cell::Blocked);
        assert_eq!(out.get(0, 2), Cell::Blocked);
        assert_eq!(out.get(1, 1), Cell::Free);
    }
}
