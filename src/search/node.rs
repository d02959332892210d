use crate::{Cost, Point};

/// The index of a [`SearchNode`] in the arena of a single search
pub type NodeId = usize;

/// A Tile discovered during a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
	/// the Tile
	pub pos: Point,
	/// the Cost of the best known Path from the start to this Tile
	pub g: Cost,
	/// the Heuristic estimate from this Tile to the Target
	pub h: Cost,
	/// the Node this Tile was reached from, `None` for the start
	pub parent: Option<NodeId>,
}

impl SearchNode {
	/// Creates a new SearchNode
	pub fn new(pos: Point, g: Cost, h: Cost, parent: Option<NodeId>) -> SearchNode {
		SearchNode { pos, g, h, parent }
	}

	/// The total score `g + h`
	pub fn f(&self) -> Cost {
		self.g + self.h
	}
}
