/// Fuzzes the pathfinder by checking for many random grids that a path is found exactly when the
/// goal is part of the same connected component as the start, and that found paths are valid and
/// as short as possible.
use bfs_grid_pathfinding::{GridPathfinder, PathfinderConfig, PathingGrid};
use grid_util::*;
use rand::prelude::*;

fn random_pathfinder(w: usize, h: usize, start: Point, goal: Point, seed: u64) -> GridPathfinder {
    let config = PathfinderConfig::new(w, h, start, goal)
        .with_obstacle_probability(40.0)
        .with_seed(seed);
    let mut pathfinder = GridPathfinder::new(config).unwrap();
    pathfinder.initialize().unwrap();
    pathfinder
}

fn visualize_grid(grid: &PathingGrid, start: &Point, end: &Point) {
    print!("{}", bfs_grid_pathfinding::render(grid, &[], start, end));
}

/// Hop distances from `start` obtained by relaxing every cell until nothing changes.
fn relaxed_distance(grid: &PathingGrid, start: &Point, goal: &Point) -> Option<usize> {
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    let ix = |p: &Point| (p.y * w + p.x) as usize;
    let mut dist = vec![usize::MAX; (w * h) as usize];
    dist[ix(start)] = 0;
    let mut changed = true;
    while changed {
        changed = false;
        for y in 0..h {
            for x in 0..w {
                let p = Point::new(x, y);
                if !grid.can_move_to(p) {
                    continue;
                }
                for n in grid.neighbours(&p) {
                    let d = dist[ix(&n)];
                    if d != usize::MAX && d + 1 < dist[ix(&p)] {
                        dist[ix(&p)] = d + 1;
                        changed = true;
                    }
                }
            }
        }
    }
    Some(dist[ix(goal)]).filter(|&d| d != usize::MAX)
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: u64 = 2000;
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for seed in 0..N_GRIDS {
        let mut pathfinder = random_pathfinder(N, N, start, end, seed);
        let reachable = pathfinder.grid().reachable(&start, &end);
        let path = pathfinder.find_path(start, end).unwrap();
        // Show the grid if a path is not found
        if path.is_empty() == reachable {
            visualize_grid(pathfinder.grid(), &start, &end);
        }
        assert_eq!(!path.is_empty(), reachable);
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 6;
    const N_GRIDS: u64 = 1000;
    let mut rng = StdRng::seed_from_u64(0);
    for seed in 0..N_GRIDS {
        let start = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let end = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let pathfinder = random_pathfinder(N, N, start, end, seed);
        let grid = pathfinder.grid();
        let path = pathfinder.path();
        match relaxed_distance(grid, &start, &end) {
            Some(distance) => {
                if path.len() != distance + 1 {
                    visualize_grid(grid, &start, &end);
                }
                assert_eq!(path.len(), distance + 1);
                assert_eq!(path.first(), Some(&start));
                assert_eq!(path.last(), Some(&end));
                for pair in path.windows(2) {
                    assert_eq!(pair[0].manhattan_distance(&pair[1]), 1);
                }
                assert!(path.iter().all(|p| grid.can_move_to(*p)));
            }
            None => assert!(path.is_empty()),
        }
    }
}

#[test]
fn open_grids_give_manhattan_paths() {
    let mut rng = StdRng::seed_from_u64(42);
    for seed in 0..200 {
        let w = rng.gen_range(1..12);
        let h = rng.gen_range(1..12);
        let start = Point::new(rng.gen_range(0..w as i32), rng.gen_range(0..h as i32));
        let end = Point::new(rng.gen_range(0..w as i32), rng.gen_range(0..h as i32));
        let config = PathfinderConfig::new(w, h, start, end)
            .with_obstacle_probability(0.0)
            .with_seed(seed);
        let mut pathfinder = GridPathfinder::new(config).unwrap();
        let path = pathfinder.initialize().unwrap().to_vec();
        assert_eq!(path.len() as i32, start.manhattan_distance(&end) + 1);
        assert_eq!(pathfinder.find_path(start, end).unwrap(), path);
    }
}

#[test]
fn same_seed_same_grid() {
    let start = Point::new(0, 1);
    let end = Point::new(4, 4);
    let a = random_pathfinder(8, 8, start, end, 99);
    let b = random_pathfinder(8, 8, start, end, 99);
    assert_eq!(a.render(), b.render());
    assert_eq!(a.path(), b.path());
}
