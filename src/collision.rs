//! Traversability queries answered by the Game's Map.
//!
//! The search never looks at the Map itself. Everything it needs to know about the Terrain is
//! asked through a [`CollisionDetector`], which is handed to every request. This keeps the
//! Pathfinder independent of how the Map is stored and makes it trivial to test with a mock.

use crate::Point;

/// The classification of a position on the Map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PositionState {
	/// Not part of the walkable world. Outside of the Map, holes, ...
	Void,
	/// Free to walk on
	Empty,
	/// Occupied by an obstacle
	Blocking,
}

/// Answers whether Tiles can be walked across.
///
/// Implementations must describe a bounded world: every Tile outside of the walkable area has
/// to report a collision in `only_blocking` mode, otherwise a search towards an unreachable
/// Target would never run out of Tiles to look at.
pub trait CollisionDetector {
	/// Returns `true` if the Tile at `(x, y)` can **not** be entered.
	///
	/// With `only_blocking` set, only actual obstacles count as collisions. Without it,
	/// [`Void`](PositionState::Void) Tiles are rejected as well.
	fn check_collision(&self, x: i32, y: i32, only_blocking: bool) -> bool;

	/// Classifies the continuous position `(x, y)`.
	fn check_position(&self, x: f32, y: f32) -> PositionState;
}

impl<C: CollisionDetector + ?Sized> CollisionDetector for &C {
	fn check_collision(&self, x: i32, y: i32, only_blocking: bool) -> bool {
		(**self).check_collision(x, y, only_blocking)
	}
	fn check_position(&self, x: f32, y: f32) -> PositionState {
		(**self).check_position(x, y)
	}
}

/// A dense, rectangular Map of [`PositionState`]s.
///
/// Everything outside of the Map is [`Void`](PositionState::Void) and always collides, so
/// searches on a `TileGrid` are bounded by its size.
///
/// ## Examples
/// ```
/// use tile_pathing::prelude::*;
///
/// // . = empty, # = blocking, ~ = void
/// let grid = TileGrid::from_rows(&[
///     "..#",
///     "~..",
/// ]);
///
/// assert_eq!(grid.get((2, 0)), PositionState::Blocking);
/// assert_eq!(grid.get((0, 1)), PositionState::Void);
/// assert_eq!(grid.get((5, 5)), PositionState::Void);
///
/// assert!(grid.check_collision(2, 0, true));
/// assert!(!grid.check_collision(0, 1, true));
/// assert!(grid.check_collision(0, 1, false));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
	width: usize,
	height: usize,
	tiles: Vec<PositionState>,
}

impl TileGrid {
	/// Creates a new TileGrid of the given size where every Tile is `fill`.
	pub fn new(width: usize, height: usize, fill: PositionState) -> TileGrid {
		TileGrid {
			width,
			height,
			tiles: vec![fill; width * height],
		}
	}

	/// Parses a TileGrid from rows of characters, top row first.
	///
	/// `#` is [`Blocking`](PositionState::Blocking), `~` is [`Void`](PositionState::Void) and
	/// `.` is [`Empty`](PositionState::Empty).
	///
	/// ## Panics
	/// If the rows have different lengths or contain any other character.
	#[track_caller]
	pub fn from_rows(rows: &[&str]) -> TileGrid {
		let width = rows.first().map_or(0, |row| row.chars().count());
		let mut tiles = Vec::with_capacity(width * rows.len());
		for (y, row) in rows.iter().enumerate() {
			assert_eq!(row.chars().count(), width, "row {} has a different length", y);
			tiles.extend(row.chars().map(|c| match c {
				'.' => PositionState::Empty,
				'#' => PositionState::Blocking,
				'~' => PositionState::Void,
				_ => panic!("invalid Tile: {:?}", c),
			}));
		}
		TileGrid {
			width,
			height: rows.len(),
			tiles,
		}
	}

	/// The number of Tiles along the x axis
	pub fn width(&self) -> usize {
		self.width
	}

	/// The number of Tiles along the y axis
	pub fn height(&self) -> usize {
		self.height
	}

	/// Returns the state of a Tile. Anything outside of the Map is Void.
	pub fn get(&self, (x, y): Point) -> PositionState {
		self.index(x, y)
			.map_or(PositionState::Void, |index| self.tiles[index])
	}

	/// Changes the state of a Tile.
	///
	/// ## Panics
	/// If `(x, y)` is outside of the Map.
	#[track_caller]
	pub fn set(&mut self, (x, y): Point, state: PositionState) {
		let index = self
			.index(x, y)
			.unwrap_or_else(|| panic!("({}, {}) is outside of the Grid", x, y));
		self.tiles[index] = state;
	}

	fn index(&self, x: i32, y: i32) -> Option<usize> {
		if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
			None
		} else {
			Some(x as usize + y as usize * self.width)
		}
	}
}

impl CollisionDetector for TileGrid {
	fn check_collision(&self, x: i32, y: i32, only_blocking: bool) -> bool {
		match self.index(x, y) {
			None => true,
			Some(index) => match self.tiles[index] {
				PositionState::Empty => false,
				PositionState::Blocking => true,
				PositionState::Void => !only_blocking,
			},
		}
	}

	fn check_position(&self, x: f32, y: f32) -> PositionState {
		self.get((x.floor() as i32, y.floor() as i32))
	}
}
