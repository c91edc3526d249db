use grid_util::grid::ValueGrid;
use grid_util::point::Point;

use crate::pathing_grid::PathingGrid;

pub const OBSTACLE: char = '#';
pub const OPEN: char = '.';
pub const PATH: char = '*';
pub const START: char = 'S';
pub const GOAL: char = 'G';

/// Draws the grid as text, one line per row with the highest `y` on top. The path is drawn over
/// the cells, and start and goal over the path. Start and goal outside the grid are skipped.
pub fn render(grid: &PathingGrid, path: &[Point], start: &Point, goal: &Point) -> String {
    let width = grid.width();
    let mut out = String::with_capacity((width + 1) * grid.height());
    for y in (0..grid.height() as i32).rev() {
        for x in 0..width as i32 {
            let p = Point::new(x, y);
            let c = if p == *start {
                START
            } else if p == *goal {
                GOAL
            } else if path.contains(&p) {
                PATH
            } else if grid.get(x, y) {
                OBSTACLE
            } else {
                OPEN
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_layers_in_order() {
        let mut grid = PathingGrid::new(3, 2, false);
        grid.set(1, 1, true);
        let start = Point::new(0, 0);
        let goal = Point::new(2, 1);
        let path = vec![start, Point::new(1, 0), Point::new(2, 0), goal];
        assert_eq!(render(&grid, &path, &start, &goal), ".#G\nS**\n");
    }

    #[test]
    fn empty_path_shows_only_cells() {
        let grid = PathingGrid::new(2, 1, true);
        let start = Point::new(5, 5);
        assert_eq!(render(&grid, &[], &start, &start), "##\n");
    }
}
