//! Conversion of Tile Paths into Waypoints for Agents of a certain size.
//!
//! Walking from Tile center to Tile center makes Agents zig-zag through open areas and brush
//! along walls. Instead, the Path is [compressed](crate::compress) to the Tiles where it turns,
//! and every turn is replaced by the [`Corner`] of its Tile on the inside of the turn. The
//! corners are inset by half the footprint of the Agent, so that the footprint stays within
//! the Tile.

use crate::{
	collision::{CollisionDetector, PositionState},
	compress::compress_path_into,
	geometry::{path_length, Rect, Waypoint},
	heuristics::Heuristic,
	pool::Recycle,
	search::search,
	PathfinderConfig, Point,
};
use log::{debug, trace};

/// One of the four corners of a Tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
	/// the corner with the lowest `x` and `y`
	TopLeft,
	/// the corner with the highest `x` and lowest `y`
	TopRight,
	/// the corner with the lowest `x` and highest `y`
	BottomLeft,
	/// the corner with the highest `x` and `y`
	BottomRight,
}

impl Corner {
	/// Picks the corner of `current` an Agent should aim for when it enters from `previous`
	/// and continues towards `next`.
	///
	/// ```
	/// # use tile_pathing::smooth::Corner;
	/// // coming from the north and turning east
	/// assert_eq!(Corner::select((0, 0), (0, 2), (3, 2)), Corner::TopRight);
	/// // coming from the west and turning south
	/// assert_eq!(Corner::select((0, 0), (2, 0), (2, 3)), Corner::BottomRight);
	/// ```
	pub fn select(previous: Point, current: Point, next: Point) -> Corner {
		use self::Corner::*;
		let diagonal_entry = previous.0 != current.0 && previous.1 != current.1;
		if diagonal_entry {
			let from_left = previous.0 < current.0;
			let from_top = previous.1 < current.1;
			if next.0 == current.0 {
				let exit_north = next.1 < current.1;
				match (exit_north, from_left) {
					(true, true) => BottomLeft,
					(true, false) => BottomRight,
					(false, true) => TopLeft,
					(false, false) => TopRight,
				}
			} else {
				let exit_east = next.0 > current.0;
				match (exit_east, from_top) {
					(true, false) => BottomRight,
					(true, true) => TopRight,
					(false, false) => BottomLeft,
					(false, true) => TopLeft,
				}
			}
		} else if previous.0 == current.0 {
			let from_north = previous.1 < current.1;
			let exit_west = next.0 < current.0;
			match (from_north, exit_west) {
				(true, true) => TopLeft,
				(true, false) => TopRight,
				(false, true) => BottomLeft,
				(false, false) => BottomRight,
			}
		} else {
			let from_west = previous.0 < current.0;
			let exit_south = next.1 > current.1;
			match (from_west, exit_south) {
				(true, true) => BottomRight,
				(true, false) => TopRight,
				(false, true) => BottomLeft,
				(false, false) => TopLeft,
			}
		}
	}

	/// The position of this corner relative to the top left of a Tile, inset by half of
	/// `footprint`.
	///
	/// ```
	/// # use tile_pathing::{geometry::Rect, smooth::Corner};
	/// let footprint = Rect::new(0.0, 0.0, 0.5, 0.25);
	/// assert_eq!(Corner::TopLeft.offset(&footprint), (0.25, 0.125));
	/// assert_eq!(Corner::BottomRight.offset(&footprint), (0.75, 0.875));
	/// ```
	pub fn offset(self, footprint: &Rect) -> (f32, f32) {
		let dx = footprint.width / 2.0;
		let dy = footprint.height / 2.0;
		match self {
			Corner::TopLeft => (dx, dy),
			Corner::TopRight => (1.0 - dx, dy),
			Corner::BottomLeft => (dx, 1.0 - dy),
			Corner::BottomRight => (1.0 - dx, 1.0 - dy),
		}
	}

	/// The Waypoint for this corner of `tile`
	pub fn waypoint(self, tile: Point, footprint: &Rect) -> Waypoint {
		let (x, y) = self.offset(footprint);
		Waypoint::new(tile.0 as f32 + x, tile.1 as f32 + y)
	}
}

/// Appends one corner Waypoint for every Tile in `tiles` that has a successor.
///
/// `tiles` is a compressed Path starting after `start`.
pub fn corner_waypoints(start: Point, tiles: &[Point], footprint: &Rect, out: &mut Vec<Waypoint>) {
	let mut previous = start;
	for pair in tiles.windows(2) {
		let (current, next) = (pair[0], pair[1]);
		let corner = Corner::select(previous, current, next);
		trace!("{:?} -> {:?} -> {:?}: {:?}", previous, current, next, corner);
		out.push(corner.waypoint(current, footprint));
		previous = current;
	}
}

/// Reusable memory for [`smooth_path_into`].
#[derive(Clone, Debug, Default)]
pub struct SmoothScratch {
	cells: Vec<Point>,
	candidate: Vec<Point>,
	best: Vec<Point>,
}

impl Recycle for SmoothScratch {
	fn recycle(&mut self) {
		self.cells.clear();
		self.candidate.clear();
		self.best.clear();
	}
}

#[derive(Clone, Copy, Debug)]
struct Ranking {
	start: Point,
	reached_target: bool,
	length: f32,
}

impl Ranking {
	fn beats(&self, other: &Ranking) -> bool {
		if self.reached_target != other.reached_target {
			self.reached_target
		} else {
			self.length < other.length
		}
	}
}

/// Finds the Waypoints an Agent with the given `footprint` should walk along to reach `target`.
///
/// The search starts at the center of `footprint`. If the center is [`Void`](PositionState::Void),
/// every corner and edge midpoint of the footprint that is [`Empty`](PositionState::Empty) is
/// tried instead, and the best resulting Path is used: one that reaches the Target is preferred,
/// then the shortest one. Among equal candidates, the first one wins.
///
/// The Waypoints are appended to `out`: one corner for every turn, followed by `target` if it
/// can be reached. A Path to the closest Tile (with `allow_nearest_fallback`) ends with its last
/// corner, and is empty if it never turns.
///
/// Returns `false` and leaves `out` untouched if no candidate produced a Path.
#[allow(clippy::too_many_arguments)]
pub fn smooth_path_into<H: Heuristic + ?Sized>(
	footprint: &Rect,
	target: Waypoint,
	allow_nearest_fallback: bool,
	collision: &dyn CollisionDetector,
	heuristic: &H,
	config: &PathfinderConfig,
	scratch: &mut SmoothScratch,
	out: &mut Vec<Waypoint>,
) -> bool {
	scratch.recycle();
	let target_tile = target.tile();

	let center = footprint.center();
	let center_is_void = collision.check_position(center.x, center.y) == PositionState::Void;
	let edge_points = footprint.edge_points();
	let candidates = if center_is_void {
		&edge_points[..]
	} else {
		std::slice::from_ref(&center)
	};

	let mut best: Option<Ranking> = None;
	for &candidate in candidates {
		if center_is_void
			&& collision.check_position(candidate.x, candidate.y) != PositionState::Empty
		{
			continue;
		}
		let start = candidate.tile();

		scratch.cells.clear();
		let outcome = match search(
			start,
			target_tile,
			allow_nearest_fallback,
			collision,
			heuristic,
			config,
			&mut scratch.cells,
		) {
			Some(outcome) => outcome,
			None => continue,
		};

		scratch.candidate.clear();
		compress_path_into(start, &scratch.cells, &mut scratch.candidate);
		let ranking = Ranking {
			start,
			reached_target: outcome.reached_target,
			length: path_length(start, &scratch.candidate),
		};
		if best.map_or(true, |best| ranking.beats(&best)) {
			std::mem::swap(&mut scratch.candidate, &mut scratch.best);
			best = Some(ranking);
		}
	}

	let best = match best {
		Some(best) => best,
		None => {
			debug!("no smooth Path from {:?} to {:?}", footprint, target);
			return false;
		}
	};
	debug!(
		"smoothing Path from {:?} over {} turns, reached target: {}",
		best.start,
		scratch.best.len(),
		best.reached_target
	);

	corner_waypoints(best.start, &scratch.best, footprint, out);
	if best.reached_target {
		out.push(target);
	}
	true
}

/// Finds the Waypoints an Agent with the given `footprint` should walk along to reach `target`.
///
/// See [`smooth_path_into`] for the details.
///
/// ## Examples
/// ```
/// # use tile_pathing::{prelude::*, smooth::smooth_path};
/// let grid = TileGrid::new(5, 5, PositionState::Empty);
/// let agent = Rect::new(0.25, 0.25, 0.5, 0.5);
///
/// let waypoints = smooth_path(
///     &agent,
///     Waypoint::new(2.5, 2.5),
///     false,
///     &grid,
///     &Manhattan::default(),
///     &PathfinderConfig::default(),
/// );
///
/// // down the left column, turn east at the inner corner, then straight to the Target
/// assert_eq!(
///     waypoints,
///     Some(vec![Waypoint::new(0.75, 2.25), Waypoint::new(2.5, 2.5)])
/// );
/// ```
pub fn smooth_path<H: Heuristic + ?Sized>(
	footprint: &Rect,
	target: Waypoint,
	allow_nearest_fallback: bool,
	collision: &dyn CollisionDetector,
	heuristic: &H,
	config: &PathfinderConfig,
) -> Option<Vec<Waypoint>> {
	let mut out = Vec::new();
	let found = smooth_path_into(
		footprint,
		target,
		allow_nearest_fallback,
		collision,
		heuristic,
		config,
		&mut SmoothScratch::default(),
		&mut out,
	);
	if found {
		Some(out)
	} else {
		None
	}
}
