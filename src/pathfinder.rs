use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use itertools::iproduct;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bfs::bfs;
use crate::config::{clamp_probability, PathfinderConfig};
use crate::error::{PathError, Result};
use crate::pathing_grid::{Cell, PathingGrid};
use crate::render::render;

/// Owns a [PathingGrid] together with the start, the goal and the most recently computed path.
/// The host drives it through [initialize](Self::initialize) once and
/// [on_config_changed](Self::on_config_changed) after mutating any input; every call recomputes
/// the path from scratch.
#[derive(Clone, Debug)]
pub struct GridPathfinder {
    config: PathfinderConfig,
    grid: PathingGrid,
    path: Vec<Point>,
    applied_probability: Option<f32>,
    rng: StdRng,
}

impl Default for GridPathfinder {
    fn default() -> GridPathfinder {
        GridPathfinder::from_valid_config(PathfinderConfig::default())
    }
}

impl GridPathfinder {
    pub fn new(config: PathfinderConfig) -> Result<GridPathfinder> {
        config.validate()?;
        Ok(GridPathfinder::from_valid_config(config))
    }

    fn from_valid_config(mut config: PathfinderConfig) -> GridPathfinder {
        config.obstacle_probability = clamp_probability(config.obstacle_probability);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        GridPathfinder {
            grid: PathingGrid::new(config.width, config.height, false),
            config,
            path: Vec::new(),
            applied_probability: None,
            rng,
        }
    }

    pub fn config(&self) -> &PathfinderConfig {
        &self.config
    }

    /// Mutable access for hosts that edit several inputs at once. Changes take effect on the next
    /// [on_config_changed](Self::on_config_changed).
    pub fn config_mut(&mut self) -> &mut PathfinderConfig {
        &mut self.config
    }

    pub fn grid(&self) -> &PathingGrid {
        &self.grid
    }

    /// The path computed by the last search, empty if none was found.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    pub fn start(&self) -> Point {
        self.config.start
    }

    pub fn goal(&self) -> Point {
        self.config.goal
    }

    pub fn set_start(&mut self, start: Point) {
        self.config.start = start;
    }

    pub fn set_goal(&mut self, goal: Point) {
        self.config.goal = goal;
    }

    pub fn set_obstacle_probability(&mut self, obstacle_probability: f32) {
        self.config.obstacle_probability = checked_probability(obstacle_probability);
    }

    pub fn set_obstacle_location(&mut self, obstacle_location: Option<Point>) {
        self.config.obstacle_location = obstacle_location;
    }

    pub fn is_in_bounds(&self, point: &Point) -> bool {
        self.grid.point_in_bounds(*point)
    }

    fn check_bounds(&self, point: &Point) -> Result<()> {
        if self.is_in_bounds(point) {
            Ok(())
        } else {
            Err(PathError::OutOfBounds {
                point: *point,
                width: self.grid.width(),
                height: self.grid.height(),
            })
        }
    }

    fn is_endpoint(&self, point: &Point) -> bool {
        *point == self.config.start || *point == self.config.goal
    }

    /// Generates a grid with the configured dimensions and computes the path between the
    /// configured start and goal.
    pub fn initialize(&mut self) -> Result<&[Point]> {
        let probability = self.config.obstacle_probability;
        self.generate_grid(self.config.height, self.config.width, probability)?;
        self.recompute()
    }

    /// Applies the current configuration. A changed obstacle probability regenerates the grid at
    /// new random dimensions, changed dimensions regenerate it at the configured size. The
    /// configured obstacle location is blocked afterwards and the path recomputed. Start, goal and
    /// obstacle location are checked against the new dimensions first, so on error the grid and
    /// path are left untouched.
    pub fn on_config_changed(&mut self) -> Result<&[Point]> {
        let probability = checked_probability(self.config.obstacle_probability);
        self.config.obstacle_probability = probability;
        let (width, height) = if self.applied_probability != Some(probability) {
            self.random_dimensions()
        } else {
            (self.config.width, self.config.height)
        };
        if width == 0 || height == 0 {
            return Err(PathError::InvalidDimensions { width, height });
        }
        let (start, goal) = (self.config.start, self.config.goal);
        for point in [Some(start), Some(goal), self.config.obstacle_location]
            .into_iter()
            .flatten()
        {
            check_fits(&point, width, height)?;
        }
        if self.applied_probability != Some(probability)
            || width != self.grid.width()
            || height != self.grid.height()
        {
            self.generate_grid(height, width, probability)?;
        }
        if let Some(location) = self.config.obstacle_location {
            self.add_obstacle(location)?;
        }
        self.recompute()
    }

    fn recompute(&mut self) -> Result<&[Point]> {
        let (start, goal) = (self.config.start, self.config.goal);
        for endpoint in [start, goal] {
            if self.is_in_bounds(&endpoint) && self.grid.cell(endpoint).is_obstacle() {
                self.grid.set_cell(endpoint, Cell::Open);
            }
        }
        self.find_path(start, goal)?;
        Ok(&self.path)
    }

    /// Picks dimensions in the configured range, widened so that start, goal and the obstacle
    /// location always fit.
    fn random_dimensions(&mut self) -> (usize, usize) {
        let (start, goal) = (self.config.start, self.config.goal);
        let obstacle = self.config.obstacle_location.unwrap_or(start);
        let required = |coords: [i32; 3]| coords.into_iter().max().unwrap_or(0).max(0) as usize + 1;
        let mut pick = |min_size: usize| {
            let lo = self.config.min_dimension.max(min_size).max(1);
            let hi = self.config.max_dimension.max(lo + 1);
            self.rng.gen_range(lo..hi)
        };
        let width = pick(required([start.x, goal.x, obstacle.x]));
        let height = pick(required([start.y, goal.y, obstacle.y]));
        (width, height)
    }

    /// Replaces the grid with a fresh `width` by `height` one. Every cell apart from start and goal
    /// independently becomes an obstacle with `obstacle_probability` percent chance.
    pub fn generate_grid(
        &mut self,
        height: usize,
        width: usize,
        obstacle_probability: f32,
    ) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(PathError::InvalidDimensions { width, height });
        }
        let probability = checked_probability(obstacle_probability);
        let mut grid = PathingGrid::new(width, height, false);
        for (y, x) in iproduct!(0..height as i32, 0..width as i32) {
            if self.is_endpoint(&Point::new(x, y)) {
                continue;
            }
            if self.rng.gen_range(0.0f32..100.0) < probability {
                grid.grid.set(x, y, true);
            }
        }
        grid.generate_components();
        debug!(
            "Generated {}x{} grid with {} obstacles at {}%",
            width,
            height,
            grid.obstacle_count(),
            probability
        );
        self.grid = grid;
        self.config.width = width;
        self.config.height = height;
        self.applied_probability = Some(probability);
        self.path.clear();
        Ok(())
    }

    /// Blocks the cell at `position`, unless it is the start or the goal, which are opened
    /// instead.
    pub fn add_obstacle(&mut self, position: Point) -> Result<()> {
        self.check_bounds(&position)?;
        let cell = if self.is_endpoint(&position) {
            Cell::Open
        } else {
            Cell::Obstacle
        };
        self.grid.set_cell(position, cell);
        Ok(())
    }

    /// Computes a shortest 4-connected path from `start` to `goal`, both inclusive, and keeps it
    /// as the current [path](Self::path). An unreachable goal is not an error: the path is empty.
    pub fn find_path(&mut self, start: Point, goal: Point) -> Result<Vec<Point>> {
        self.path.clear();
        self.check_bounds(&start)?;
        self.check_bounds(&goal)?;
        if self.grid.cell(start).is_obstacle() || self.grid.cell(goal).is_obstacle() {
            info!("Path not found: {} or {} is an obstacle", start, goal);
            return Ok(Vec::new());
        }
        if start == goal {
            self.path.push(start);
            return Ok(self.path.clone());
        }
        self.grid.update();
        if self.grid.unreachable(&start, &goal) {
            info!("Path not found: {} is not reachable from {}", goal, start);
            return Ok(Vec::new());
        }
        let grid = &self.grid;
        match bfs(&start, |node| grid.neighbours(node), |node| *node == goal) {
            Some(path) => {
                debug!("Found path of {} cells from {} to {}", path.len(), start, goal);
                self.path = path;
            }
            None => info!("Path not found from {} to {}", start, goal),
        }
        Ok(self.path.clone())
    }

    /// Text overlay of the grid, the current path, the start and the goal.
    pub fn render(&self) -> String {
        render(&self.grid, &self.path, &self.config.start, &self.config.goal)
    }
}

fn check_fits(point: &Point, width: usize, height: usize) -> Result<()> {
    if point.x >= 0 && point.y >= 0 && (point.x as usize) < width && (point.y as usize) < height {
        Ok(())
    } else {
        Err(PathError::OutOfBounds {
            point: *point,
            width,
            height,
        })
    }
}

fn checked_probability(probability: f32) -> f32 {
    let clamped = clamp_probability(probability);
    if clamped != probability {
        warn!(
            "Obstacle probability {} outside [0, 100], using {}",
            probability, clamped
        );
    }
    clamped
}
