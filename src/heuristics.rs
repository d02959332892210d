//! The most common Heuristics for searching a Grid.

use crate::{collision::CollisionDetector, Cost, Point};

/// Estimates how expensive it is to reach a Target from a Tile.
///
/// The search uses this estimate to decide which Tile to look at next, and to pick the closest
/// Tile when the Target turns out to be unreachable. An estimate has to be non-negative and
/// should never grow by more than the cost of a single step when moving to a neighboring Tile,
/// otherwise the resulting Paths may be longer than necessary.
///
/// The [`CollisionDetector`] of the current request is available to shape the estimate, for
/// example to keep Agents away from walls. See [`ObstaclePenalty`].
///
/// Closures of the form `Fn(Point, Point) -> Cost` are Heuristics as well:
/// ```
/// # use tile_pathing::prelude::*;
/// let zero = |_: Point, _: Point| -> Cost { 0 };
/// let grid = TileGrid::new(3, 3, PositionState::Empty);
/// assert_eq!(zero.estimate((0, 0), (2, 2), &grid), 0);
/// ```
pub trait Heuristic {
	/// Gives an estimate for the Cost of walking from `point` to `target`.
	fn estimate(&self, point: Point, target: Point, collision: &dyn CollisionDetector) -> Cost;
}

impl<F: Fn(Point, Point) -> Cost> Heuristic for F {
	fn estimate(&self, point: Point, target: Point, _: &dyn CollisionDetector) -> Cost {
		self(point, target)
	}
}

/// The Heuristic for Agents moving along the 4 cardinal directions.
///
/// Also known as Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
/// Every step is weighted with `step_cost`, which should match
/// [`PathfinderConfig::straight_cost`](crate::PathfinderConfig::straight_cost).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Manhattan {
	/// The Cost of a single step
	pub step_cost: Cost,
}

impl Manhattan {
	/// Creates a new Manhattan Heuristic with the given Cost per step.
	pub fn new(step_cost: Cost) -> Manhattan {
		Manhattan { step_cost }
	}
}

impl Default for Manhattan {
	fn default() -> Manhattan {
		Manhattan::new(crate::config::STRAIGHT_COST)
	}
}

impl Heuristic for Manhattan {
	fn estimate(&self, point: Point, target: Point, _: &dyn CollisionDetector) -> Cost {
		let diff_0 = point.0.abs_diff(target.0) as Cost;
		let diff_1 = point.1.abs_diff(target.1) as Cost;
		(diff_0 + diff_1) * self.step_cost
	}
}

/// The Heuristic of an Agent that could move diagonally.
///
/// Also known as [Maximum Metric](https://en.wikipedia.org/wiki/Chebyshev_distance).
/// Since the search only moves along the cardinal directions, this underestimates every
/// Path. The search explores more Tiles than with [`Manhattan`], but Paths are never worse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chebyshev {
	/// The Cost of a single step
	pub step_cost: Cost,
}

impl Chebyshev {
	/// Creates a new Chebyshev Heuristic with the given Cost per step.
	pub fn new(step_cost: Cost) -> Chebyshev {
		Chebyshev { step_cost }
	}
}

impl Default for Chebyshev {
	fn default() -> Chebyshev {
		Chebyshev::new(crate::config::STRAIGHT_COST)
	}
}

impl Heuristic for Chebyshev {
	fn estimate(&self, point: Point, target: Point, _: &dyn CollisionDetector) -> Cost {
		let diff_0 = point.0.abs_diff(target.0) as Cost;
		let diff_1 = point.1.abs_diff(target.1) as Cost;
		diff_0.max(diff_1) * self.step_cost
	}
}

/// Wraps another Heuristic and adds `penalty` for every blocked neighbor of a Tile.
///
/// This makes Tiles next to walls look more expensive, so Agents prefer walking through the
/// middle of corridors and rooms. The estimate is no longer a lower bound, which means Paths
/// can be slightly longer than the shortest one.
///
/// ```
/// # use tile_pathing::prelude::*;
/// let grid = TileGrid::from_rows(&[
///     ".#.",
///     "...",
///     "...",
/// ]);
/// let heuristic = ObstaclePenalty::new(Manhattan::default(), 5);
///
/// // (0, 0) touches the wall at (1, 0) and the edge of the Map twice
/// assert_eq!(heuristic.estimate((0, 0), (2, 2), &grid), 40 + 3 * 5);
/// // (1, 1) touches the wall only
/// assert_eq!(heuristic.estimate((1, 1), (2, 2), &grid), 20 + 5);
/// // no penalty on the Target itself
/// assert_eq!(heuristic.estimate((2, 2), (2, 2), &grid), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObstaclePenalty<H> {
	inner: H,
	penalty: Cost,
}

impl<H: Heuristic> ObstaclePenalty<H> {
	/// Creates a new ObstaclePenalty around `inner`.
	pub fn new(inner: H, penalty: Cost) -> ObstaclePenalty<H> {
		ObstaclePenalty { inner, penalty }
	}
}

impl<H: Heuristic> Heuristic for ObstaclePenalty<H> {
	fn estimate(&self, point: Point, target: Point, collision: &dyn CollisionDetector) -> Cost {
		if point == target {
			return 0;
		}
		let blocked = crate::search::NEIGHBORS
			.iter()
			.filter(|(dx, dy)| collision.check_collision(point.0 + dx, point.1 + dy, true))
			.count();
		self.inner.estimate(point, target, collision) + blocked * self.penalty
	}
}
