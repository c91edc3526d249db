use grid_util::point::Point;

use crate::error::{PathError, Result};

/// Inputs of a [GridPathfinder](crate::GridPathfinder). The host mutates these and then calls
/// [on_config_changed](crate::GridPathfinder::on_config_changed).
#[derive(Clone, Debug, PartialEq)]
pub struct PathfinderConfig {
    pub width: usize,
    pub height: usize,
    pub start: Point,
    pub goal: Point,
    /// Chance in percent for each cell to become an obstacle, clamped to `[0, 100]`.
    pub obstacle_probability: f32,
    /// Cell to block after every configuration change, if any.
    pub obstacle_location: Option<Point>,
    /// Lower bound (inclusive) for randomly picked dimensions.
    pub min_dimension: usize,
    /// Upper bound (exclusive) for randomly picked dimensions.
    pub max_dimension: usize,
    /// Fixed seed for reproducible grids; entropy is used when absent.
    pub seed: Option<u64>,
}

impl Default for PathfinderConfig {
    fn default() -> PathfinderConfig {
        PathfinderConfig {
            width: 5,
            height: 5,
            start: Point::new(0, 1),
            goal: Point::new(4, 4),
            obstacle_probability: 25.0,
            obstacle_location: None,
            min_dimension: 4,
            max_dimension: 23,
            seed: None,
        }
    }
}

pub(crate) fn clamp_probability(probability: f32) -> f32 {
    if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 100.0)
    }
}

impl PathfinderConfig {
    pub fn new(width: usize, height: usize, start: Point, goal: Point) -> PathfinderConfig {
        PathfinderConfig {
            width,
            height,
            start,
            goal,
            ..Default::default()
        }
    }

    pub fn with_obstacle_probability(mut self, obstacle_probability: f32) -> Self {
        self.obstacle_probability = clamp_probability(obstacle_probability);
        self
    }

    pub fn with_obstacle_location(mut self, obstacle_location: Point) -> Self {
        self.obstacle_location = Some(obstacle_location);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_dimension_range(mut self, min_dimension: usize, max_dimension: usize) -> Self {
        self.min_dimension = min_dimension;
        self.max_dimension = max_dimension;
        self
    }

    fn in_bounds(&self, point: &Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    /// Rejects configurations the pathfinder cannot start from.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PathError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_dimension == 0 || self.min_dimension >= self.max_dimension {
            return Err(PathError::EmptyDimensionRange {
                min: self.min_dimension,
                max: self.max_dimension,
            });
        }
        for point in [self.start, self.goal] {
            if !self.in_bounds(&point) {
                return Err(PathError::OutOfBounds {
                    point,
                    width: self.width,
                    height: self.height,
                });
            }
        }
        Ok(())
    }
}
