use crate::{
	collision::CollisionDetector,
	compress::compress_path_into,
	geometry::{Rect, Waypoint},
	heuristics::{Heuristic, Manhattan},
	pool::Pool,
	search::search,
	smooth::{smooth_path_into, SmoothScratch},
	PathfinderConfig, Point,
};

/// A struct to answer Path requests of Agents on a Tile Grid.
///
/// A Pathfinder owns the [`Heuristic`] and the [`PathfinderConfig`] used for every request. The
/// Map is not stored: the [`CollisionDetector`] is passed to every request, so that the Pathfinder
/// always sees the current state of the World.
///
/// Every returned Path is drawn from an internal [`Pool`]. Handing Paths back through
/// [`release_path`](Pathfinder::release_path) and
/// [`release_waypoints`](Pathfinder::release_waypoints) lets later requests reuse their memory.
#[derive(Debug)]
pub struct Pathfinder<H: Heuristic = Manhattan> {
	heuristic: H,
	config: PathfinderConfig,
	tiles: Pool<Vec<Point>>,
	waypoints: Pool<Vec<Waypoint>>,
	scratch: Pool<SmoothScratch>,
}

impl<H: Heuristic> Pathfinder<H> {
	/// Creates a new Pathfinder
	///
	/// ## Arguments
	/// - `heuristic` - the estimate guiding every search. (See [`heuristics`](crate::heuristics))
	/// - `config` - Costs, limits and buffer sizes. (See [`PathfinderConfig`])
	///
	/// ## Examples
	/// ```
	/// use tile_pathing::prelude::*;
	///
	/// // stay away from walls
	/// let heuristic = ObstaclePenalty::new(Manhattan::default(), 5);
	/// let pathfinder = Pathfinder::new(heuristic, PathfinderConfig::BOUNDED);
	///
	/// assert_eq!(pathfinder.config().max_expansions, Some(4096));
	/// ```
	pub fn new(heuristic: H, config: PathfinderConfig) -> Pathfinder<H> {
		Pathfinder {
			heuristic,
			config,
			tiles: Pool::new(config.pool_capacity),
			waypoints: Pool::new(config.pool_capacity),
			scratch: Pool::new(1),
		}
	}

	/// The Heuristic of this Pathfinder
	pub fn heuristic(&self) -> &H {
		&self.heuristic
	}

	/// The config of this Pathfinder
	pub fn config(&self) -> &PathfinderConfig {
		&self.config
	}

	/// Finds the Tiles an Agent at `start` has to walk across to reach `target`.
	///
	/// Both positions are floored to their Tiles. Every Tile of the result is adjacent to the
	/// previous one (or to the start Tile, for the first one).
	///
	/// ## Arguments
	/// - `start` - the position of the Agent
	/// - `target` - the position the Agent wants to reach
	/// - `allow_nearest_fallback` - if `target` is unreachable, walk to the closest Tile instead
	/// - `collision` - decides which Tiles can be entered
	///
	/// ## Returns
	/// The Tiles from the start (exclusive) to the Target or the closest Tile (inclusive), or
	/// `None` if there is no Path and no fallback was allowed. An empty Path means that `start`
	/// and `target` lie in the same Tile.
	///
	/// ## Examples
	/// ```
	/// use tile_pathing::prelude::*;
	///
	/// let grid = TileGrid::new(5, 5, PositionState::Empty);
	/// let mut pathfinder = Pathfinder::default();
	///
	/// let path = pathfinder.find_path(
	///     Waypoint::new(0.5, 0.5),
	///     Waypoint::new(3.5, 0.5),
	///     false,
	///     &grid,
	/// );
	/// assert_eq!(path, Some(vec![(1, 0), (2, 0), (3, 0)]));
	/// ```
	pub fn find_path(
		&mut self,
		start: Waypoint,
		target: Waypoint,
		allow_nearest_fallback: bool,
		collision: &dyn CollisionDetector,
	) -> Option<Vec<Point>> {
		let mut path = self.tiles.acquire();
		let outcome = search(
			start.tile(),
			target.tile(),
			allow_nearest_fallback,
			collision,
			&self.heuristic,
			&self.config,
			&mut path,
		);
		if outcome.is_some() {
			Some(path)
		} else {
			self.tiles.release(path);
			None
		}
	}

	/// Finds the Tiles where an Agent at `start` has to change direction to reach `target`.
	///
	/// This is the result of [`find_path`](Pathfinder::find_path) without every Tile that lies
	/// on a straight line between its neighbors. The last Tile is always kept.
	///
	/// ## Examples
	/// ```
	/// use tile_pathing::prelude::*;
	///
	/// let grid = TileGrid::new(5, 5, PositionState::Empty);
	/// let mut pathfinder = Pathfinder::default();
	///
	/// let path = pathfinder.find_turn_path(
	///     Waypoint::new(0.5, 0.5),
	///     Waypoint::new(2.5, 2.5),
	///     false,
	///     &grid,
	/// );
	/// assert_eq!(path, Some(vec![(0, 2), (2, 2)]));
	/// ```
	pub fn find_turn_path(
		&mut self,
		start: Waypoint,
		target: Waypoint,
		allow_nearest_fallback: bool,
		collision: &dyn CollisionDetector,
	) -> Option<Vec<Point>> {
		let cells = self.find_path(start, target, allow_nearest_fallback, collision)?;
		let mut path = self.tiles.acquire();
		compress_path_into(start.tile(), &cells, &mut path);
		self.tiles.release(cells);
		Some(path)
	}

	/// Finds the Waypoints an Agent with the given `footprint` should walk along to reach
	/// `target`.
	///
	/// The Waypoints hug the inside of every turn as closely as the footprint allows. The last
	/// Waypoint is `target` itself if it can be reached. With `allow_nearest_fallback`, a Path
	/// towards the closest Tile only contains its turns.
	///
	/// See [`smooth_path_into`](crate::smooth::smooth_path_into) for how the start is chosen.
	///
	/// ## Examples
	/// ```
	/// use tile_pathing::prelude::*;
	///
	/// let grid = TileGrid::new(5, 5, PositionState::Empty);
	/// let mut pathfinder = Pathfinder::default();
	///
	/// let agent = Rect::new(0.25, 0.25, 0.5, 0.5);
	/// let waypoints = pathfinder
	///     .find_smooth_path(&agent, Waypoint::new(2.5, 2.5), false, &grid)
	///     .unwrap();
	///
	/// assert_eq!(waypoints, vec![Waypoint::new(0.75, 2.25), Waypoint::new(2.5, 2.5)]);
	/// pathfinder.release_waypoints(waypoints);
	/// ```
	pub fn find_smooth_path(
		&mut self,
		footprint: &Rect,
		target: Waypoint,
		allow_nearest_fallback: bool,
		collision: &dyn CollisionDetector,
	) -> Option<Vec<Waypoint>> {
		let mut scratch = self.scratch.acquire();
		let mut waypoints = self.waypoints.acquire();
		let found = smooth_path_into(
			footprint,
			target,
			allow_nearest_fallback,
			collision,
			&self.heuristic,
			&self.config,
			&mut scratch,
			&mut waypoints,
		);
		self.scratch.release(scratch);
		if found {
			Some(waypoints)
		} else {
			self.waypoints.release(waypoints);
			None
		}
	}

	/// Hands a Path returned by [`find_path`](Pathfinder::find_path) or
	/// [`find_turn_path`](Pathfinder::find_turn_path) back for reuse.
	pub fn release_path(&mut self, path: Vec<Point>) {
		self.tiles.release(path);
	}

	/// Hands Waypoints returned by [`find_smooth_path`](Pathfinder::find_smooth_path) back for
	/// reuse.
	pub fn release_waypoints(&mut self, waypoints: Vec<Waypoint>) {
		self.waypoints.release(waypoints);
	}
}

impl Default for Pathfinder<Manhattan> {
	fn default() -> Pathfinder<Manhattan> {
		Pathfinder::new(Manhattan::default(), PathfinderConfig::default())
	}
}
