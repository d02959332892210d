use std::collections::VecDeque;

use nanorand::{Rng, WyRand};
use tile_pathing::prelude::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn center(tile: Point) -> Waypoint {
    Waypoint::tile_center(tile)
}

fn random_grid(rng: &mut WyRand, width: usize, height: usize) -> TileGrid {
    let mut grid = TileGrid::new(width, height, PositionState::Empty);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let state = match rng.generate_range(0_u32..100) {
                0..=24 => PositionState::Blocking,
                25..=29 => PositionState::Void,
                _ => PositionState::Empty,
            };
            grid.set((x, y), state);
        }
    }
    grid
}

/// The number of steps on the shortest Path, found with a plain breadth first search
fn shortest_distance(grid: &TileGrid, start: Point, target: Point) -> Option<usize> {
    let width = grid.width() as i32;
    let height = grid.height() as i32;
    let index = |(x, y): Point| (x + y * width) as usize;
    let mut distance = vec![None; grid.width() * grid.height()];
    let mut queue = VecDeque::new();
    distance[index(start)] = Some(0);
    queue.push_back(start);
    while let Some(current) = queue.pop_front() {
        let steps = distance[index(current)]?;
        if current == target {
            return Some(steps);
        }
        for (dx, dy) in [(-1, 0), (0, -1), (0, 1), (1, 0)] {
            let next = (current.0 + dx, current.1 + dy);
            if next.0 < 0 || next.1 < 0 || next.0 >= width || next.1 >= height {
                continue;
            }
            if grid.check_collision(next.0, next.1, true) || distance[index(next)].is_some() {
                continue;
            }
            distance[index(next)] = Some(steps + 1);
            queue.push_back(next);
        }
    }
    None
}

fn assert_walkable(grid: &TileGrid, start: Point, path: &[Point]) {
    let mut previous = start;
    for &tile in path {
        let step = (tile.0 - previous.0).abs() + (tile.1 - previous.1).abs();
        assert_eq!(step, 1, "{:?} -> {:?} in {:?}", previous, tile, path);
        assert!(!grid.check_collision(tile.0, tile.1, true), "{:?} is blocked", tile);
        previous = tile;
    }
}

#[test]
fn straight_line() {
    init();
    let grid = TileGrid::new(5, 5, PositionState::Empty);
    let mut pathfinder = Pathfinder::default();
    let path = pathfinder.find_path(center((0, 0)), center((3, 0)), false, &grid);
    assert_eq!(path, Some(vec![(1, 0), (2, 0), (3, 0)]));
}

#[test]
fn no_diagonal_steps() {
    init();
    let grid = TileGrid::new(5, 5, PositionState::Empty);
    let mut pathfinder = Pathfinder::default();
    let path = pathfinder
        .find_path(center((0, 0)), center((2, 2)), false, &grid)
        .unwrap();
    assert_eq!(path.len(), 4);
    assert_eq!(path.last(), Some(&(2, 2)));
    assert_walkable(&grid, (0, 0), &path);
}

#[test]
fn same_tile() {
    init();
    let grid = TileGrid::new(5, 5, PositionState::Empty);
    let mut pathfinder = Pathfinder::default();
    let path = pathfinder.find_path(
        Waypoint::new(2.1, 2.9),
        Waypoint::new(2.8, 2.2),
        false,
        &grid,
    );
    assert_eq!(path, Some(vec![]));
}

#[test]
fn detour_around_blocker() {
    init();
    #[rustfmt::skip]
    let grid = TileGrid::from_rows(&[
        ".#...",
        ".....",
        ".....",
        ".....",
        ".....",
    ]);
    let mut pathfinder = Pathfinder::default();
    let path = pathfinder
        .find_path(center((0, 0)), center((2, 0)), false, &grid)
        .unwrap();
    assert_eq!(path.len(), 4);
    assert!(!path.contains(&(1, 0)));
    assert_eq!(path.last(), Some(&(2, 0)));
    assert_walkable(&grid, (0, 0), &path);
}

#[test]
fn walled_off_target() {
    init();
    #[rustfmt::skip]
    let grid = TileGrid::from_rows(&[
        "...#.",
        "...#.",
        "...#.",
    ]);
    let mut pathfinder = Pathfinder::default();
    let start = center((0, 1));
    let target = center((4, 1));

    assert_eq!(pathfinder.find_path(start, target, false, &grid), None);

    let path = pathfinder.find_path(start, target, true, &grid).unwrap();
    assert_eq!(path, vec![(1, 1), (2, 1)]);
}

#[test]
fn blocked_start() {
    init();
    let grid = TileGrid::from_rows(&["#...", "...."]);
    let mut pathfinder = Pathfinder::default();
    for fallback in [false, true] {
        let path = pathfinder.find_path(center((0, 0)), center((3, 1)), fallback, &grid);
        assert_eq!(path, None);
    }
}

#[test]
fn released_paths_are_reused() {
    init();
    let grid = TileGrid::new(8, 8, PositionState::Empty);
    let mut pathfinder = Pathfinder::default();

    let long = pathfinder
        .find_path(center((0, 0)), center((7, 7)), false, &grid)
        .unwrap();
    let capacity = long.capacity();
    pathfinder.release_path(long);

    let short = pathfinder
        .find_path(center((0, 0)), center((1, 0)), false, &grid)
        .unwrap();
    assert_eq!(short, vec![(1, 0)]);
    assert!(short.capacity() >= capacity);
}

#[test]
fn other_heuristics() {
    init();
    #[rustfmt::skip]
    let grid = TileGrid::from_rows(&[
        "......",
        ".####.",
        "......",
        "......",
    ]);
    let start = center((0, 0));
    let target = center((5, 3));
    let expected = 8;

    let mut pathfinder = Pathfinder::new(Chebyshev::default(), PathfinderConfig::default());
    let path = pathfinder.find_path(start, target, false, &grid).unwrap();
    assert_eq!(path.len(), expected);
    assert_walkable(&grid, (0, 0), &path);

    let heuristic = ObstaclePenalty::new(Manhattan::default(), 3);
    let mut pathfinder = Pathfinder::new(heuristic, PathfinderConfig::default());
    let path = pathfinder.find_path(start, target, false, &grid).unwrap();
    assert_eq!(path.last(), Some(&(5, 3)));
    assert_walkable(&grid, (0, 0), &path);
}

#[test]
fn bounded_search_falls_back() {
    init();
    let grid = TileGrid::new(64, 64, PositionState::Empty);
    let mut pathfinder = Pathfinder::new(
        Manhattan::default(),
        PathfinderConfig::with_max_expansions(10),
    );
    let start = center((0, 0));
    let target = center((63, 63));

    assert_eq!(pathfinder.find_path(start, target, false, &grid), None);

    let path = pathfinder.find_path(start, target, true, &grid).unwrap();
    assert!(!path.is_empty());
    assert_ne!(path.last(), Some(&(63, 63)));
    assert_walkable(&grid, (0, 0), &path);
}

#[test]
fn smooth_path_ends_on_target() {
    init();
    #[rustfmt::skip]
    let grid = TileGrid::from_rows(&[
        "......",
        ".####.",
        "......",
    ]);
    let mut pathfinder = Pathfinder::default();
    let agent = Rect::new(0.3, 0.3, 0.4, 0.4);
    let target = Waypoint::new(3.25, 2.75);

    let waypoints = pathfinder
        .find_smooth_path(&agent, target, false, &grid)
        .unwrap();
    assert_eq!(waypoints.last(), Some(&target));
    // every corner keeps the footprint inside its Tile
    for waypoint in &waypoints[..waypoints.len() - 1] {
        let (fx, fy) = (waypoint.x.fract(), waypoint.y.fract());
        assert!((0.1..0.9).contains(&fx), "{:?}", waypoint);
        assert!((0.1..0.9).contains(&fy), "{:?}", waypoint);
        let tile = waypoint.tile();
        assert!(!grid.check_collision(tile.0, tile.1, true));
    }
    pathfinder.release_waypoints(waypoints);

    let again = pathfinder
        .find_smooth_path(&agent, target, false, &grid)
        .unwrap();
    assert_eq!(again.last(), Some(&target));
}

#[test]
fn smooth_path_without_target() {
    init();
    let grid = TileGrid::from_rows(&["..#.."]);
    let mut pathfinder = Pathfinder::default();
    let agent = Rect::new(0.0, 0.0, 1.0, 1.0);
    let target = Waypoint::new(4.5, 0.5);

    assert_eq!(pathfinder.find_smooth_path(&agent, target, false, &grid), None);
    assert_eq!(
        pathfinder.find_smooth_path(&agent, target, true, &grid),
        Some(vec![])
    );

    // the fallback Path turns once and ends without a Waypoint for the Target
    #[rustfmt::skip]
    let grid = TileGrid::from_rows(&[
        "....",
        "##.#",
        "####",
        "....",
    ]);
    let agent = Rect::new(0.3, 0.3, 0.4, 0.4);
    let target = Waypoint::new(2.5, 3.5);
    let waypoints = pathfinder
        .find_smooth_path(&agent, target, true, &grid)
        .unwrap();
    assert_eq!(waypoints.len(), 1);
    assert_ne!(waypoints.last(), Some(&target));
    assert_eq!(waypoints[0].tile(), (2, 0));
}

#[test]
fn random_grids() {
    init();
    let mut rng = WyRand::new_seed(0x5eed);
    let (width, height) = (16, 12);

    for _ in 0..40 {
        let grid = random_grid(&mut rng, width, height);
        let mut pathfinder = Pathfinder::default();

        for _ in 0..10 {
            let start = (
                rng.generate_range(0..width) as i32,
                rng.generate_range(0..height) as i32,
            );
            let target = (
                rng.generate_range(0..width) as i32,
                rng.generate_range(0..height) as i32,
            );
            let start_blocked = grid.check_collision(start.0, start.1, true);

            let strict = pathfinder.find_path(center(start), center(target), false, &grid);
            let again = pathfinder.find_path(center(start), center(target), false, &grid);
            assert_eq!(strict, again, "{:?} -> {:?}", start, target);

            let expected = if start == target {
                Some(0)
            } else if start_blocked {
                None
            } else {
                shortest_distance(&grid, start, target)
            };
            assert_eq!(strict.as_ref().map(Vec::len), expected, "{:?} -> {:?}", start, target);

            if let Some(path) = strict {
                assert_walkable(&grid, start, &path);
                if let Some(last) = path.last() {
                    assert_eq!(*last, target);
                }
                pathfinder.release_path(path);
            }

            let relaxed = pathfinder.find_path(center(start), center(target), true, &grid);
            if start == target {
                assert_eq!(relaxed, Some(vec![]));
            } else if start_blocked {
                assert_eq!(relaxed, None);
            } else {
                let path = relaxed.unwrap();
                assert_walkable(&grid, start, &path);
                if expected.is_none() {
                    assert_ne!(path.last(), Some(&target));
                }
            }

            if grid.get(start) == PositionState::Empty && expected.is_some() {
                let agent = Rect::new(start.0 as f32 + 0.25, start.1 as f32 + 0.25, 0.5, 0.5);
                let waypoints = pathfinder
                    .find_smooth_path(&agent, center(target), false, &grid)
                    .unwrap();
                assert_eq!(waypoints.last(), Some(&center(target)));
                pathfinder.release_waypoints(waypoints);
            }
        }
    }
}
