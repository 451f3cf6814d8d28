use grid_util::grid::Grid;
use grid_util::point::Point;
use itertools::iproduct;

use crate::dilation::dilate;
use crate::grid::{Cell, RouteGrid};

/// An 8-bit RGB triple.
pub type Rgb = [u8; 3];

pub const FREE_COLOR: Rgb = [255, 255, 255];
pub const BLOCKED_COLOR: Rgb = [0, 0, 0];
pub const ROUTE_COLOR: Rgb = [255, 0, 0];

/// Row-major RGB pixel buffer produced from a labeled grid, ready for
/// re-encoding by an external image serializer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Rgb>,
}

impl ColorImage {
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.width + x]
    }
}

/// Marks every route cell as [Cell::Route] on a copy of `grid`, then grows
/// the marks by `thickness` so the drawn route stays visible at full map
/// resolution. Expects the original, pre-margin grid.
pub fn draw_route(grid: &RouteGrid, route: &[Point], thickness: usize) -> RouteGrid {
    let mut labeled = grid.clone();
    for p in route {
        if labeled.point_in_bounds(*p) {
            labeled.set(p.x as usize, p.y as usize, Cell::Route);
        }
    }
    dilate(&labeled, Cell::Route, thickness)
}

fn cell_color(cell: Cell) -> Rgb {
    match cell {
        Cell::Free => FREE_COLOR,
        Cell::Blocked => BLOCKED_COLOR,
        Cell::Route => ROUTE_COLOR,
    }
}

/// Converts a labeled grid to an RGB buffer, replicating every cell into a
/// `scale` x `scale` block of pixels. One color per cell, no blending.
pub fn to_color_image(grid: &RouteGrid, scale: usize) -> ColorImage {
    let scale = scale.max(1);
    let width = grid.width() * scale;
    let height = grid.height() * scale;
    let mut pixels = vec![FREE_COLOR; width * height];
    for (y, x) in iproduct!(0..grid.height(), 0..grid.width()) {
        let color = cell_color(grid.get(x, y));
        for (dy, dx) in iproduct!(0..scale, 0..scale) {
            pixels[(y * scale + dy) * width + (x * scale + dx)] = color;
        }
    }
    ColorImage {
        width,
        height,
        pixels,
    }
}
