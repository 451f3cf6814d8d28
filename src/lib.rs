//! # grid_routing
//!
//! A grid-based route-planning engine. Converts a grayscale occupancy map
//! into a binary grid, inflates obstacles by a safety margin, finds the
//! shortest 8-directional route from a start cell to the nearer of two fixed
//! destinations using breadth-first search, and renders the chosen route
//! back into a color image. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no route exists.
//!
//! Image container decoding/encoding and the transport behind route
//! publishing are collaborators outside this crate: the engine consumes rows
//! of luminance samples and produces coordinate routes and RGB buffers.

pub mod dilation;
pub mod engine;
mod error;
pub mod grid;
pub mod render;
pub mod search;

pub use dilation::dilate;
pub use engine::{NoopPublisher, PlanOutcome, PlannerConfig, RoutePlanner, RoutePublisher};
pub use error::PlanError;
pub use grid::{Cell, RouteGrid};
pub use render::{
    draw_route, to_color_image, ColorImage, Rgb, BLOCKED_COLOR, FREE_COLOR, ROUTE_COLOR,
};
pub use search::{select_route, shortest_route};
