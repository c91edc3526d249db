use bfs_grid_pathfinding::{GridPathfinder, PathError, PathfinderConfig};
use grid_util::point::Point;

// Drives the pathfinder the way an interactive host would: initialize once, then mutate inputs
// and notify the pathfinder after each change.
fn main() -> Result<(), PathError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    let mut pathfinder = GridPathfinder::new(PathfinderConfig::default().with_seed(5))?;
    pathfinder.initialize()?;
    println!("Initial grid:\n{}", pathfinder.render());

    pathfinder.set_obstacle_probability(10.0);
    pathfinder.on_config_changed()?;
    println!("After probability change:\n{}", pathfinder.render());

    pathfinder.set_obstacle_location(Some(Point::new(2, 2)));
    pathfinder.on_config_changed()?;
    println!("After placing an obstacle:\n{}", pathfinder.render());

    pathfinder.set_goal(Point::new(0, 0));
    let path = pathfinder.on_config_changed()?;
    println!("Path to the new goal has {} cells", path.len());
    Ok(())
}
