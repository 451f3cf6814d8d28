use core::fmt;

use grid_util::grid::Grid;
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;

use crate::error::PlanError;

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Traversable space.
    #[default]
    Free,
    /// An obstacle, or part of the safety margin grown around one.
    Blocked,
    /// A cell of a drawn route, used for visualization.
    Route,
}

/// [RouteGrid] holds the occupancy state of every cell and maintains
/// information about connected components of free cells using a [UnionFind]
/// structure, which lets searches rule out unreachable goals without
/// flood-filling the whole component. Implements [Grid] over [Cell].
#[derive(Clone, Debug)]
pub struct RouteGrid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl RouteGrid {
    /// Builds a grid from rows of 8-bit luminance samples. A sample strictly
    /// below `threshold` becomes [Cell::Blocked], everything else
    /// [Cell::Free]. Rejects empty and ragged buffers.
    pub fn from_luminance(rows: &[Vec<u8>], threshold: u8) -> Result<RouteGrid, PlanError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(PlanError::EmptyGrid);
        }
        let width = rows[0].len();
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(PlanError::RaggedRow {
                    row: y,
                    len: row.len(),
                    expected: width,
                });
            }
            cells.extend(row.iter().map(|&sample| {
                if sample < threshold {
                    Cell::Blocked
                } else {
                    Cell::Free
                }
            }));
        }
        Ok(RouteGrid {
            cells,
            width,
            height,
            components: UnionFind::new(width * height),
            components_dirty: true,
        })
    }

    /// Whether a search may occupy `pos`: in bounds and free.
    pub fn can_traverse(&self, pos: Point) -> bool {
        self.in_bounds(pos.x, pos.y) && self.get_point(pos) == Cell::Free
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.index_in_bounds(x as usize, y as usize)
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }

    /// Checks if start and goal are not on the same component. Out-of-bounds
    /// points belong to no component and are always unreachable.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start.x, start.y) && self.in_bounds(goal.x, goal.y) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            if self.components.equiv(start_ix, goal_ix) {
                false
            } else {
                info!("{} and {} are not equivalent components", start_ix, goal_ix);
                true
            }
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free grid
    /// neighbours to the same components. Adjacency is the full Moore
    /// neighbourhood, matching the 8-directional moves of the search.
    pub fn generate_components(&mut self) {
        info!("Generating connected components");
        let w = self.width;
        let h = self.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w {
            for y in 0..h {
                if self.get(x, y) == Cell::Free {
                    let parent_ix = self.get_ix(x, y);
                    let point = Point::new(x as i32, y as i32);
                    // Forward neighbours only: every undirected edge is
                    // visited exactly once over the scan.
                    let neighbours = vec![
                        Point::new(point.x, point.y + 1),
                        Point::new(point.x + 1, point.y - 1),
                        Point::new(point.x + 1, point.y),
                        Point::new(point.x + 1, point.y + 1),
                    ]
                    .into_iter()
                    .filter(|p| self.can_traverse(*p))
                    .map(|p| self.get_ix(p.x as usize, p.y as usize))
                    .collect::<Vec<usize>>();
                    for ix in neighbours {
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for RouteGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.height {
            let values = (0..self.width)
                .map(|x| match self.get(x, y) {
                    Cell::Free => 0,
                    Cell::Blocked => 1,
                    Cell::Route => 2,
                })
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

impl Grid<Cell> for RouteGrid {
    fn new(width: usize, height: usize, default_value: Cell) -> Self {
        RouteGrid {
            cells: vec![default_value; width * height],
            width,
            height,
            components: UnionFind::new(width * height),
            components_dirty: true,
        }
    }
    fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.width + x]
    }
    /// Updates a position on the grid. Joins newly freed cells with the
    /// components of their free neighbours and flags the components as dirty
    /// if they are (potentially) broken apart.
    fn set(&mut self, x: usize, y: usize, value: Cell) {
        let ix = y * self.width + x;
        let old = self.cells[ix];
        self.cells[ix] = value;
        if old == Cell::Free && value != Cell::Free {
            self.components_dirty = true;
        } else if old != Cell::Free && value == Cell::Free {
            let p = Point::new(x as i32, y as i32);
            for n in p.moore_neighborhood() {
                if self.can_traverse(n) {
                    let n_ix = self.get_ix(n.x as usize, n.y as usize);
                    self.components.union(ix, n_ix);
                }
            }
        }
    }
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
}
