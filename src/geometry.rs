//! Continuous positions and shapes on top of the Tile Grid.

use crate::Point;

/// A floating point position on the Map, measured in Tiles.
///
/// The Tile `(x, y)` covers everything from `(x, y)` up to, but excluding, `(x + 1, y + 1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Waypoint {
	/// the position along the x axis
	pub x: f32,
	/// the position along the y axis
	pub y: f32,
}

impl Waypoint {
	/// Creates a new Waypoint
	pub fn new(x: f32, y: f32) -> Waypoint {
		Waypoint { x, y }
	}

	/// The center of a Tile
	///
	/// ```
	/// # use tile_pathing::geometry::Waypoint;
	/// assert_eq!(Waypoint::tile_center((2, -1)), Waypoint::new(2.5, -0.5));
	/// ```
	pub fn tile_center((x, y): Point) -> Waypoint {
		Waypoint::new(x as f32 + 0.5, y as f32 + 0.5)
	}

	/// The Tile this Waypoint lies in
	///
	/// ```
	/// # use tile_pathing::geometry::Waypoint;
	/// assert_eq!(Waypoint::new(2.9, 0.0).tile(), (2, 0));
	/// assert_eq!(Waypoint::new(-0.1, 3.5).tile(), (-1, 3));
	/// ```
	pub fn tile(&self) -> Point {
		(self.x.floor() as i32, self.y.floor() as i32)
	}

	/// The euclidean distance to `other`
	pub fn distance(&self, other: &Waypoint) -> f32 {
		(self.x - other.x).hypot(self.y - other.y)
	}
}

/// An axis aligned rectangle, used as the footprint of an Agent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	/// the left edge
	pub x: f32,
	/// the top edge
	pub y: f32,
	/// the size along the x axis
	pub width: f32,
	/// the size along the y axis
	pub height: f32,
}

impl Rect {
	/// Creates a new Rect from its top left corner and its size
	pub fn new(x: f32, y: f32, width: f32, height: f32) -> Rect {
		Rect {
			x,
			y,
			width,
			height,
		}
	}

	/// The center of the Rect
	pub fn center(&self) -> Waypoint {
		Waypoint::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
	}

	/// The 4 corners and the 4 edge midpoints of the Rect, clockwise starting at the top left.
	///
	/// ```
	/// # use tile_pathing::geometry::{Rect, Waypoint};
	/// let points = Rect::new(1.0, 1.0, 2.0, 1.0).edge_points();
	/// assert_eq!(points[0], Waypoint::new(1.0, 1.0));
	/// assert_eq!(points[1], Waypoint::new(2.0, 1.0));
	/// assert_eq!(points[4], Waypoint::new(3.0, 2.0));
	/// assert_eq!(points[7], Waypoint::new(1.0, 1.5));
	/// ```
	pub fn edge_points(&self) -> [Waypoint; 8] {
		let (left, top) = (self.x, self.y);
		let (right, bottom) = (self.x + self.width, self.y + self.height);
		let center = self.center();
		[
			Waypoint::new(left, top),
			Waypoint::new(center.x, top),
			Waypoint::new(right, top),
			Waypoint::new(right, center.y),
			Waypoint::new(right, bottom),
			Waypoint::new(center.x, bottom),
			Waypoint::new(left, bottom),
			Waypoint::new(left, center.y),
		]
	}
}

/// The euclidean length of walking from `start` through every Tile of `path`.
///
/// ```
/// # use tile_pathing::geometry::path_length;
/// assert_eq!(path_length((0, 0), &[(3, 0), (3, 4)]), 7.0);
/// assert_eq!(path_length((0, 0), &[(3, 4)]), 5.0);
/// assert_eq!(path_length((0, 0), &[]), 0.0);
/// ```
pub fn path_length(start: Point, path: &[Point]) -> f32 {
	let mut previous = Waypoint::tile_center(start);
	let mut length = 0.0;
	for &point in path {
		let current = Waypoint::tile_center(point);
		length += previous.distance(&current);
		previous = current;
	}
	length
}
