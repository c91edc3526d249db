//! # bfs_grid_pathfinding
//!
//! Breadth-first pathfinding on small 4-connected grids. A [GridPathfinder] owns a randomly
//! generated occupancy grid, a start and a goal, and recomputes the shortest path between them
//! whenever its configuration changes. Since every step costs the same, the first time a cell is
//! reached is also the cheapest way to reach it, so a plain FIFO frontier suffices.
//! [Connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) are kept up to
//! date alongside the grid to avoid flood-filling when no path exists.
//!
//! ```
//! use bfs_grid_pathfinding::{GridPathfinder, PathfinderConfig};
//! use grid_util::point::Point;
//!
//! let config = PathfinderConfig::new(4, 3, Point::new(0, 0), Point::new(3, 2))
//!     .with_obstacle_probability(0.0);
//! let mut pathfinder = GridPathfinder::new(config).unwrap();
//! let path = pathfinder.initialize().unwrap();
//! assert_eq!(path.len(), 6);
//! ```
pub mod bfs;
pub mod config;
pub mod error;
pub mod pathfinder;
pub mod pathing_grid;
pub mod render;

pub use config::PathfinderConfig;
pub use error::{PathError, Result};
pub use pathfinder::GridPathfinder;
pub use pathing_grid::{Cell, PathingGrid};
pub use render::render;

/// Unit steps in expansion order: east, west, north, south.
pub const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
