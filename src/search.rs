//! The best-first search over the Tile Grid.
//!
//! The search moves along the 4 cardinal directions only. Every step costs
//! [`straight_cost`](crate::PathfinderConfig::straight_cost), and the open Tile with the lowest
//! total score `f = g + h` is expanded next. Among Tiles with equal `f`, the one that was opened
//! (or last improved) first is expanded first, which makes the result fully deterministic.

mod node;
pub use self::node::{NodeId, SearchNode};

mod frontier;
use self::frontier::Frontier;

use crate::{
	collision::CollisionDetector, geometry::Waypoint, heuristics::Heuristic, Cost, PathfinderConfig,
	Point,
};
use log::{debug, trace};

/// The offsets of the neighbors of a Tile, in the order they are expanded: west, north, south,
/// east.
pub(crate) const NEIGHBORS: [(i32, i32); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// The result of a successful [`search`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
	/// the Tile the search started on
	pub start: Point,
	/// the last Tile of the Path. Either the Target or the closest Tile to it.
	pub end: Point,
	/// `true` if `end` is the Target
	pub reached_target: bool,
	/// the Cost of walking from `start` to `end`
	pub cost: Cost,
	/// the number of Tiles that were expanded
	pub expansions: usize,
}

/// Searches a Path from the Tile `start` to the Tile `target`.
///
/// On success, the Tiles of the Path are appended to `cells`, excluding `start` and including
/// the last Tile. Every Tile in `cells` is adjacent to the one before it.
///
/// If `target` cannot be reached and `allow_nearest_fallback` is set, the Path leads to the Tile
/// with the lowest Heuristic estimate instead (among equal estimates, the one with the lowest
/// total score). This may be the start itself, in which case nothing is appended.
///
/// ## Arguments
/// - `start` - the Tile to start from
/// - `target` - the Tile to search for
/// - `allow_nearest_fallback` - return a Path to the closest Tile if `target` is unreachable
/// - `collision` - decides which Tiles can be entered
/// - `heuristic` - the estimate guiding the search
/// - `config` - Costs and limits
/// - `cells` - receives the Tiles of the Path
///
/// ## Returns
/// `None` if there is no Path and no fallback was allowed, or if the start is blocked.
///
/// ## Examples
/// ```
/// # use tile_pathing::{prelude::*, search::search};
/// let grid = TileGrid::from_rows(&[
///     ".#.",
///     ".#.",
///     "...",
/// ]);
///
/// let mut cells = vec![];
/// let outcome = search(
///     (0, 0),
///     (2, 0),
///     false,
///     &grid,
///     &Manhattan::default(),
///     &PathfinderConfig::default(),
///     &mut cells,
/// )
/// .unwrap();
///
/// assert!(outcome.reached_target);
/// assert_eq!(outcome.cost, 60);
/// assert_eq!(cells, vec![(0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0)]);
/// ```
pub fn search<H: Heuristic + ?Sized>(
	start: Point,
	target: Point,
	allow_nearest_fallback: bool,
	collision: &dyn CollisionDetector,
	heuristic: &H,
	config: &PathfinderConfig,
	cells: &mut Vec<Point>,
) -> Option<SearchOutcome> {
	if start == target {
		return Some(SearchOutcome {
			start,
			end: target,
			reached_target: true,
			cost: 0,
			expansions: 0,
		});
	}

	let mut frontier = Frontier::with_capacity(config.size_hint);
	if frontier.is_eligible(start, collision) {
		let h = heuristic.estimate(start, target, collision);
		frontier.offer(start, 0, h, None);
	}

	let mut expansions = 0;
	while let Some(current_id) = frontier.pop() {
		let current = frontier[current_id];
		if current.pos == target {
			debug!(
				"found Path {:?} -> {:?} after {} expansions, cost {}",
				start, target, expansions, current.g
			);
			frontier.chain_into(current_id, cells);
			return Some(SearchOutcome {
				start,
				end: target,
				reached_target: true,
				cost: current.g,
				expansions,
			});
		}
		frontier.close(current_id);

		if config.max_expansions.map_or(false, |max| expansions >= max) {
			debug!(
				"giving up on {:?} -> {:?} after {} expansions",
				start, target, expansions
			);
			break;
		}
		expansions += 1;
		trace!("expanding {:?}, g = {}, h = {}", current.pos, current.g, current.h);

		for (dx, dy) in NEIGHBORS {
			let next = (current.pos.0 + dx, current.pos.1 + dy);
			if !frontier.is_eligible(next, collision) {
				continue;
			}
			let g = current.g + config.step_cost(current.pos, next);
			let h = heuristic.estimate(next, target, collision);
			frontier.offer(next, g, h, Some(current_id));
		}
	}

	if !allow_nearest_fallback {
		debug!("no Path {:?} -> {:?}", start, target);
		return None;
	}
	let nearest_id = frontier.nearest()?;
	let nearest = frontier[nearest_id];
	debug!(
		"no Path {:?} -> {:?}, falling back to {:?}",
		start, target, nearest.pos
	);
	frontier.chain_into(nearest_id, cells);
	Some(SearchOutcome {
		start,
		end: nearest.pos,
		reached_target: nearest.pos == target,
		cost: nearest.g,
		expansions,
	})
}

/// Finds the Tiles an Agent at `start` has to walk across to reach `target`.
///
/// Both positions are floored to their Tiles. The returned Tiles exclude the start Tile and end
/// on the Target, or on the closest Tile to it if `allow_nearest_fallback` is set and the Target
/// is unreachable. An empty Path means the Agent is already on the Target Tile.
///
/// See [`search`] for the details.
///
/// ```
/// # use tile_pathing::{prelude::*, search::find_tile_path};
/// let grid = TileGrid::new(5, 5, PositionState::Empty);
/// let path = find_tile_path(
///     Waypoint::new(0.5, 0.5),
///     Waypoint::new(3.5, 0.5),
///     false,
///     &grid,
///     &Manhattan::default(),
///     &PathfinderConfig::default(),
/// );
/// assert_eq!(path, Some(vec![(1, 0), (2, 0), (3, 0)]));
/// ```
pub fn find_tile_path<H: Heuristic + ?Sized>(
	start: Waypoint,
	target: Waypoint,
	allow_nearest_fallback: bool,
	collision: &dyn CollisionDetector,
	heuristic: &H,
	config: &PathfinderConfig,
) -> Option<Vec<Point>> {
	let mut cells = Vec::new();
	search(
		start.tile(),
		target.tile(),
		allow_nearest_fallback,
		collision,
		heuristic,
		config,
		&mut cells,
	)
	.map(|_| cells)
}
