use core::fmt;
use std::convert::Infallible;

use grid_util::point::Point;
use log::{info, warn};

use crate::dilation::dilate;
use crate::error::PlanError;
use crate::grid::{Cell, RouteGrid};
use crate::render::{draw_route, to_color_image, ColorImage};
use crate::search::select_route;

/// Tuning constants of the planner. These are injected configuration, not
/// literals baked into the algorithms, so targets and margins can vary per
/// deployment and per test.
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    /// Luminance strictly below this marks a cell as an obstacle.
    pub obstacle_threshold: u8,
    /// Distance obstacles grow by before searching, keeping routes clear of walls.
    pub safety_margin: usize,
    /// Distance route markers grow by when rendering.
    pub route_thickness: usize,
    /// The two candidate destinations every request routes towards.
    pub destinations: [Point; 2],
    /// Integer pixel-replication factor of the rendered image.
    pub render_scale: usize,
}

impl Default for PlannerConfig {
    fn default() -> PlannerConfig {
        PlannerConfig {
            obstacle_threshold: 128,
            safety_margin: 10,
            route_thickness: 2,
            destinations: [Point::new(12, 39), Point::new(138, 725)],
            render_scale: 1,
        }
    }
}

/// Receives every chosen route, e.g. to forward it to a message bus.
/// Publishing is best effort: failures are logged and never fail the plan.
pub trait RoutePublisher {
    type Error: fmt::Display;

    fn publish(&mut self, route: &[Point]) -> Result<(), Self::Error>;
}

/// Publisher that discards routes.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopPublisher;

impl RoutePublisher for NoopPublisher {
    type Error = Infallible;

    fn publish(&mut self, _route: &[Point]) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Everything a single planning request produces.
#[derive(Clone, Debug)]
pub struct PlanOutcome {
    /// The chosen route, empty when neither destination is reachable.
    pub route: Vec<Point>,
    /// The original map with the chosen route drawn onto it.
    pub image: ColorImage,
}

/// The planning engine. Stateless between requests: every call builds its
/// own grids and buffers and mutates no input, so planners can serve
/// requests from multiple threads without coordination.
pub struct RoutePlanner<P = NoopPublisher> {
    config: PlannerConfig,
    publisher: P,
}

impl RoutePlanner<NoopPublisher> {
    pub fn new(config: PlannerConfig) -> Self {
        RoutePlanner {
            config,
            publisher: NoopPublisher,
        }
    }
}

impl<P: RoutePublisher> RoutePlanner<P> {
    pub fn with_publisher(config: PlannerConfig, publisher: P) -> Self {
        RoutePlanner { config, publisher }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Plans a route over the `luminance` map from `start` to the nearer of
    /// the two configured destinations.
    ///
    /// Obstacles are inflated by the safety margin before searching; the
    /// route is drawn and thickened on the original, un-inflated grid. The
    /// chosen route (possibly empty, meaning no viable route) is handed to
    /// the publisher before rendering.
    pub fn plan(&mut self, luminance: &[Vec<u8>], start: Point) -> Result<PlanOutcome, PlanError> {
        let raw = RouteGrid::from_luminance(luminance, self.config.obstacle_threshold)?;
        let mut inflated = dilate(&raw, Cell::Blocked, self.config.safety_margin);
        inflated.update();
        let route = select_route(&inflated, start, self.config.destinations);
        if route.is_empty() {
            info!("no viable route from {} to either destination", start);
        } else {
            info!("chose a route of {} cells from {}", route.len(), start);
        }
        if let Err(e) = self.publisher.publish(&route) {
            warn!("route publish failed: {}", e);
        }
        let labeled = draw_route(&raw, &route, self.config.route_thickness);
        let image = to_color_image(&labeled, self.config.render_scale);
        Ok(PlanOutcome { route, image })
    }
}
