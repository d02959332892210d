#![warn(
	missing_docs,
	missing_debug_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find and smooth Paths for Agents on a Tile Grid.
//!
//! ## Introduction
//! Games usually store their World as a Grid of Tiles, and their Agents need two things from a
//! Pathfinder: which Tiles to walk across, and where exactly to put their feet while doing so.
//! This crate provides both.
//!
//! The first stage is a regular best-first search over the Grid. Agents move along the 4
//! cardinal directions, every step costs the same, and the search is guided by a pluggable
//! [`Heuristic`](heuristics::Heuristic). Whether a Tile can be entered is decided by a
//! [`CollisionDetector`](collision::CollisionDetector) supplied with every request. If the
//! Target cannot be reached, the search can fall back to the Tile that came closest to it.
//!
//! The second stage turns the Tiles into floating point Waypoints. Agents are rarely exactly
//! one Tile in size, and walking from Tile center to Tile center makes them look like they are
//! on rails. Instead, the Path is reduced to the Tiles where it changes direction, and every
//! such Tile is replaced by one of its four corners, inset by half the Agent's footprint.
//!
//! ## Examples
//! Finding the Tiles to walk across:
//! ```
//! use tile_pathing::prelude::*;
//!
//! // . = empty, # = wall
//! let grid = TileGrid::from_rows(&[
//!     ".....",
//!     "..#..",
//!     "..#..",
//!     ".....",
//! ]);
//!
//! let mut pathfinder = Pathfinder::default();
//!
//! let path = pathfinder.find_path(
//!     Waypoint::new(0.5, 1.5), // start
//!     Waypoint::new(4.5, 1.5), // target
//!     false,                   // no fallback to the closest Tile
//!     &grid,
//! );
//!
//! let path = path.unwrap();
//! assert_eq!(path.last(), Some(&(4, 1)));
//! assert!(!path.contains(&(2, 1)));
//! ```
//!
//! Finding Waypoints for an Agent that is half a Tile wide:
//! ```
//! use tile_pathing::prelude::*;
//!
//! let grid = TileGrid::from_rows(&[
//!     ".....",
//!     ".##..",
//!     ".....",
//! ]);
//!
//! let mut pathfinder = Pathfinder::default();
//!
//! let agent = Rect::new(0.25, 0.25, 0.5, 0.5);
//! let target = Waypoint::new(3.5, 2.5);
//!
//! let waypoints = pathfinder
//!     .find_smooth_path(&agent, target, false, &grid)
//!     .unwrap();
//!
//! // the Agent always ends exactly on the requested position
//! assert_eq!(waypoints.last(), Some(&target));
//!
//! // hand the buffer back so the next request can reuse it
//! pathfinder.release_waypoints(waypoints);
//! ```

/// A shorthand for Tiles on the Grid. `x` grows to the east, `y` grows to the south.
pub type Point = (i32, i32);

/// The Type used for the Cost of walking a Path and for Heuristic estimates
pub type Cost = usize;

pub(crate) type PointMap<V> = hashbrown::HashMap<Point, V>;
pub(crate) type PointSet = hashbrown::HashSet<Point>;

pub mod collision;
pub mod compress;
pub mod geometry;
pub mod heuristics;
pub mod pool;
pub mod search;
pub mod smooth;

mod config;
pub use self::config::PathfinderConfig;

mod pathfinder;
pub use self::pathfinder::Pathfinder;

/// The most commonly used Types and Traits
pub mod prelude {
	pub use crate::{
		collision::{CollisionDetector, PositionState, TileGrid},
		geometry::{Rect, Waypoint},
		heuristics::{Chebyshev, Heuristic, Manhattan, ObstaclePenalty},
		Cost, Pathfinder, PathfinderConfig, Point,
	};
}
