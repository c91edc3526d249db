use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use itertools::iproduct;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::DIRECTIONS;

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Open,
    Obstacle,
}

impl Cell {
    pub fn is_obstacle(self) -> bool {
        self == Cell::Obstacle
    }
}

impl From<bool> for Cell {
    fn from(blocked: bool) -> Cell {
        if blocked {
            Cell::Obstacle
        } else {
            Cell::Open
        }
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> bool {
        cell.is_obstacle()
    }
}

/// [PathingGrid] keeps the raw [bool] occupancy values in a [BoolGrid], where [true] marks an
/// obstacle, together with a [UnionFind] over the 4-connected open cells. The components let a
/// search bail out early instead of flood-filling when no path exists.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid {
            grid: BoolGrid::default(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl PathingGrid {
    /// The four cardinal neighbours of `point` in east, west, north, south order, whether or not
    /// they are in bounds.
    pub fn neighborhood_points(point: &Point) -> SmallVec<[Point; 4]> {
        DIRECTIONS
            .iter()
            .map(|(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .collect()
    }

    /// Open in-bounds neighbours of `point`, in the same order as [Self::neighborhood_points].
    pub fn neighbours(&self, point: &Point) -> SmallVec<[Point; 4]> {
        Self::neighborhood_points(point)
            .into_iter()
            .filter(|p| self.can_move_to(*p))
            .collect()
    }

    pub fn can_move_to(&self, pos: Point) -> bool {
        self.point_in_bounds(pos) && !self.grid.get_point(pos)
    }

    pub fn cell(&self, point: Point) -> Cell {
        Cell::from(self.grid.get_point(point))
    }

    pub fn set_cell(&mut self, point: Point, cell: Cell) {
        self.set(point.x, point.y, cell.into());
    }

    /// Number of obstacle cells.
    pub fn obstacle_count(&self) -> usize {
        iproduct!(0..self.height() as i32, 0..self.width() as i32)
            .filter(|&(y, x)| self.grid.get(x, y))
            .count()
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Points out of bounds are never
    /// reachable.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.point_in_bounds(*start) && self.point_in_bounds(*goal) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open grid neighbours to the same
    /// components. Only east and north are linked per cell, which covers every edge once.
    pub fn generate_components(&mut self) {
        let w = self.grid.width;
        let h = self.grid.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for (x, y) in iproduct!(0..w as i32, 0..h as i32) {
            if self.grid.get(x, y) {
                continue;
            }
            let point = Point::new(x, y);
            let parent_ix = self.grid.get_ix_point(&point);
            for p in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                if self.can_move_to(p) {
                    let ix = self.grid.get_ix_point(&p);
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.grid.height as i32 {
            let values = (0..self.grid.width as i32)
                .map(|x| self.grid.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

impl ValueGrid<bool> for PathingGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        let mut base_grid = PathingGrid {
            grid: BoolGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        if !default_value {
            base_grid.generate_components();
        }
        base_grid
    }
    fn get(&self, x: i32, y: i32) -> bool {
        self.grid.get(x, y)
    }
    /// Updates a position on the grid. Opening a cell joins it to the components of its open
    /// neighbours, blocking an open cell flags the components as dirty since it may split one.
    fn set(&mut self, x: i32, y: i32, blocked: bool) {
        let was_blocked = self.grid.get(x, y);
        if blocked {
            if !was_blocked {
                self.components_dirty = true;
            }
        } else {
            let p = Point::new(x, y);
            let p_ix = self.grid.get_ix_point(&p);
            for n in self.neighbours(&p) {
                self.components.union(p_ix, self.grid.get_ix_point(&n));
            }
        }
        self.grid.set(x, y, blocked);
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}
