use crate::Cost;

/// The Cost of a step along one of the cardinal directions
pub(crate) const STRAIGHT_COST: Cost = 10;
/// The Cost of a diagonal step. Only ever used if diagonal neighbors are generated.
pub(crate) const DIAGONAL_COST: Cost = 14;

/// Options for configuring the [`Pathfinder`](crate::Pathfinder)
///
/// Default options:
/// ```
/// # use tile_pathing::PathfinderConfig;
/// assert_eq!(
///     PathfinderConfig {
///         straight_cost: 10,
///         diagonal_cost: 14,
///         max_expansions: None,
///         size_hint: 64,
///         pool_capacity: 8,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathfinderConfig {
	/// The Cost of moving to a Tile that shares a row or column with the current one
	/// (defaults to `10`)
	pub straight_cost: Cost,
	/// The Cost of moving to any other adjacent Tile (defaults to `14`).
	///
	/// The search only generates the 4 cardinal neighbors, so this Cost is never applied. It is
	/// kept so that Paths keep the same Costs should diagonal movement ever be enabled.
	pub diagonal_cost: Cost,
	/// `None` (default): search until the Target is found or no Tiles are left.
	///
	/// `Some(n)`: stop after expanding `n` Tiles and treat the Target as unreachable. The
	/// fallback to the closest Tile still applies.
	///
	/// Setting a limit bounds the time a single request can take on large, open Maps.
	pub max_expansions: Option<usize>,
	/// The number of Tiles a search is expected to visit (defaults to `64`).
	/// Used to pre-allocate the search state.
	pub size_hint: usize,
	/// The number of released buffers kept around for reuse, per buffer type (defaults to `8`)
	pub pool_capacity: usize,
}

impl PathfinderConfig {
	/// an example PathfinderConfig that limits every search to 4096 expanded Tiles
	///
	/// Values:
	/// ```
	/// # use tile_pathing::PathfinderConfig;
	/// assert_eq!(
	///     PathfinderConfig {
	///         straight_cost: 10,
	///         diagonal_cost: 14,
	///         max_expansions: Some(4096),
	///         size_hint: 256,
	///         pool_capacity: 8,
	///     },
	///     PathfinderConfig::BOUNDED
	/// );
	/// ```
	pub const BOUNDED: PathfinderConfig = PathfinderConfig {
		straight_cost: STRAIGHT_COST,
		diagonal_cost: DIAGONAL_COST,
		max_expansions: Some(4096),
		size_hint: 256,
		pool_capacity: 8,
	};

	/// Creates a default PathfinderConfig that stops searching after `max_expansions` Tiles
	///
	/// ```
	/// # use tile_pathing::PathfinderConfig;
	/// let config = PathfinderConfig::with_max_expansions(100);
	/// assert_eq!(config.max_expansions, Some(100));
	/// assert_eq!(config.straight_cost, 10);
	/// ```
	pub fn with_max_expansions(max_expansions: usize) -> PathfinderConfig {
		PathfinderConfig {
			max_expansions: Some(max_expansions),
			..Default::default()
		}
	}

	/// The Cost of stepping from `from` to the adjacent Tile `to`
	pub fn step_cost(&self, from: crate::Point, to: crate::Point) -> Cost {
		if from.0 == to.0 || from.1 == to.1 {
			self.straight_cost
		} else {
			self.diagonal_cost
		}
	}
}

impl Default for PathfinderConfig {
	fn default() -> PathfinderConfig {
		PathfinderConfig {
			straight_cost: STRAIGHT_COST,
			diagonal_cost: DIAGONAL_COST,
			max_expansions: None,
			size_hint: 64,
			pool_capacity: 8,
		}
	}
}
