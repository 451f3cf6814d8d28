use grid_routing::{PlannerConfig, RoutePlanner};
use grid_util::point::Point;

// In this example a route is planned on a 7x7 map with shape
//  _______
// |S  #  A|
// |   #   |
// |   #   |
// |   #   |
// |   #   |
// |       |
// |      B|
//  _______
// where
// - # marks a wall
// - S marks the start
// - A and B mark the two candidate destinations
// The wall forces a detour below its lower end, so destination B wins with
// the shorter route.
fn main() {
    let mut rows = vec![vec![255u8; 7]; 7];
    for row in rows.iter_mut().take(5) {
        row[3] = 0;
    }
    let config = PlannerConfig {
        obstacle_threshold: 128,
        safety_margin: 0,
        route_thickness: 0,
        destinations: [Point::new(6, 0), Point::new(6, 6)],
        render_scale: 1,
    };
    let mut planner = RoutePlanner::new(config);
    let outcome = planner.plan(&rows, Point::new(0, 0)).unwrap();
    println!("A route has been found:");
    for p in outcome.route {
        println!("{:?}", p);
    }
}
