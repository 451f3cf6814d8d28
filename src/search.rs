use std::collections::VecDeque;

use fxhash::FxHashSet;
use grid_util::point::Point;
use log::info;

use crate::grid::RouteGrid;

/// Neighbour offsets in the fixed order the search explores them: cardinals
/// first, then diagonals. Keeping the order fixed makes the result
/// reproducible among equal-length routes.
const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Computes the shortest route from `start` to `goal` using breadth-first
/// search over free cells, moving in the 8 unit directions at equal cost.
///
/// Returns the cells from start to goal inclusive, or an empty vector if the
/// goal cannot be reached. A start that is blocked or out of bounds is never
/// expanded, so the result is empty even when start equals goal.
///
/// Expects the grid's connected components to be up to date (see
/// [RouteGrid::update]): goals on another component are rejected without
/// flooding the start's component.
pub fn shortest_route(grid: &RouteGrid, start: Point, goal: Point) -> Vec<Point> {
    if !grid.can_traverse(start) {
        info!("start {} is blocked or out of bounds", start);
        return Vec::new();
    }
    if grid.unreachable(&start, &goal) {
        info!("{} is not reachable from {}", goal, start);
        return Vec::new();
    }
    let mut frontier: VecDeque<(Point, Vec<Point>)> = VecDeque::new();
    frontier.push_back((start, Vec::new()));
    let mut visited: FxHashSet<Point> = FxHashSet::default();
    while let Some((current, path)) = frontier.pop_front() {
        if current == goal {
            let mut route = path;
            route.push(current);
            return route;
        }
        // Cells are marked visited at dequeue time; duplicate frontier
        // entries may exist, but each cell is expanded at most once.
        if !visited.insert(current) {
            continue;
        }
        for (dx, dy) in NEIGHBOUR_OFFSETS {
            let next = Point::new(current.x + dx, current.y + dy);
            if grid.can_traverse(next) && !visited.contains(&next) {
                let mut next_path = path.clone();
                next_path.push(current);
                frontier.push_back((next, next_path));
            }
        }
    }
    Vec::new()
}

/// Runs [shortest_route] against both candidate destinations and keeps the
/// shorter non-empty result. Equal-length routes resolve to the second
/// candidate; if neither destination is reachable the result is empty.
pub fn select_route(grid: &RouteGrid, start: Point, destinations: [Point; 2]) -> Vec<Point> {
    let first = shortest_route(grid, start, destinations[0]);
    let second = shortest_route(grid, start, destinations[1]);
    if !first.is_empty() && (second.is_empty() || first.len() < second.len()) {
        first
    } else {
        second
    }
}
