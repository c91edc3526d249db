use bfs_grid_pathfinding::{GridPathfinder, PathError, PathfinderConfig};
use grid_util::point::Point;

// In this example a path is found on an open 3x3 grid after blocking two cells. The rendered
// result, highest y on top, is
// ***
// *#*
// S#G
// where
// - # marks an obstacle
// - * marks a path cell
// - S marks the start
// - G marks the goal
//
// Nodes have a 4-neighborhood
fn main() -> Result<(), PathError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let start = Point::new(0, 0);
    let goal = Point::new(2, 0);
    let config = PathfinderConfig::new(3, 3, start, goal).with_obstacle_probability(0.0);
    let mut pathfinder = GridPathfinder::new(config)?;
    pathfinder.initialize()?;
    pathfinder.add_obstacle(Point::new(1, 0))?;
    pathfinder.add_obstacle(Point::new(1, 1))?;
    let path = pathfinder.find_path(start, goal)?;
    println!("{}", pathfinder.grid());
    println!("Path:");
    for p in path {
        println!("{:?}", p);
    }
    print!("{}", pathfinder.render());
    Ok(())
}
