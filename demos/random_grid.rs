use bfs_grid_pathfinding::{GridPathfinder, PathError, PathfinderConfig};
use grid_util::point::Point;

// Generates a 12x8 grid where each cell is an obstacle with 30% chance and paths across it.
// Pass a seed as the first argument to reproduce a grid.
fn main() -> Result<(), PathError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let mut config = PathfinderConfig::new(12, 8, Point::new(0, 0), Point::new(11, 7))
        .with_obstacle_probability(30.0);
    if let Some(seed) = std::env::args().nth(1).and_then(|s| s.parse().ok()) {
        config = config.with_seed(seed);
    }
    let mut pathfinder = GridPathfinder::new(config)?;
    let steps = pathfinder.initialize()?.len().saturating_sub(1);
    print!("{}", pathfinder.render());
    if steps == 0 {
        println!("No path");
    } else {
        println!("Path of {} steps", steps);
    }
    Ok(())
}
