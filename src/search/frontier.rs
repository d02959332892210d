use super::{NodeId, SearchNode};
use crate::{collision::CollisionDetector, Cost, Point, PointMap, PointSet};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An entry of the open queue. Ordered so that the [`BinaryHeap`] pops the lowest `f` first,
/// and the earliest pushed entry among equal `f`.
#[derive(Debug, PartialEq, Eq)]
struct OpenElement {
	f: Cost,
	seq: u64,
	id: NodeId,
}
impl PartialOrd for OpenElement {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl Ord for OpenElement {
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.f.cmp(&self.f).then_with(|| rhs.seq.cmp(&self.seq))
	}
}

/// Remembers the Node that came closest to the Target: lowest `h`, then lowest `f`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct NearestTracker {
	best: Option<(NodeId, Cost, Cost)>,
}

impl NearestTracker {
	pub fn observe(&mut self, id: NodeId, node: &SearchNode) {
		let closer = match self.best {
			None => true,
			Some((_, h, f)) => node.h < h || (node.h == h && node.f() < f),
		};
		if closer {
			self.best = Some((id, node.h, node.f()));
		}
	}

	pub fn get(&self) -> Option<NodeId> {
		self.best.map(|(id, _, _)| id)
	}
}

/// The state of a single search: all discovered Nodes, the open and closed sets and the
/// closest Node seen so far.
///
/// A Tile is in at most one of the open and closed sets. Closed Tiles are never opened again.
#[derive(Debug)]
pub(crate) struct Frontier {
	nodes: slab::Slab<SearchNode>,
	open: PointMap<NodeId>,
	closed: PointSet,
	queue: BinaryHeap<OpenElement>,
	pushes: u64,
	nearest: NearestTracker,
}

impl Frontier {
	pub fn with_capacity(size_hint: usize) -> Self {
		Self {
			nodes: slab::Slab::with_capacity(size_hint),
			open: PointMap::with_capacity(size_hint / 2),
			closed: PointSet::with_capacity(size_hint),
			queue: BinaryHeap::with_capacity(size_hint / 2),
			pushes: 0,
			nearest: NearestTracker::default(),
		}
	}

	/// `true` if `pos` may be opened or relaxed: not closed and not blocked.
	pub fn is_eligible(&self, pos: Point, collision: &dyn CollisionDetector) -> bool {
		!self.closed.contains(&pos) && !collision.check_collision(pos.0, pos.1, true)
	}

	/// Opens `pos` with the given Costs, or relaxes it if it is already open and the new total
	/// score is strictly lower.
	pub fn offer(&mut self, pos: Point, g: Cost, h: Cost, parent: Option<NodeId>) {
		debug_assert!(!self.closed.contains(&pos));
		let id = if let Some(&id) = self.open.get(&pos) {
			let node = &mut self.nodes[id];
			if g + h >= node.f() {
				return;
			}
			node.g = g;
			node.h = h;
			node.parent = parent;
			id
		} else {
			let id = self.nodes.insert(SearchNode::new(pos, g, h, parent));
			self.open.insert(pos, id);
			id
		};

		let node = &self.nodes[id];
		self.queue.push(OpenElement {
			f: node.f(),
			seq: self.pushes,
			id,
		});
		self.pushes += 1;
		self.nearest.observe(id, node);
	}

	/// Removes the open Node with the lowest total score from the queue.
	///
	/// The Node stays in the open set until it is [closed](Frontier::close).
	pub fn pop(&mut self) -> Option<NodeId> {
		while let Some(OpenElement { f, id, .. }) = self.queue.pop() {
			let node = &self.nodes[id];
			// relaxed Nodes leave their old, more expensive entries behind
			if f == node.f() && self.open.contains_key(&node.pos) {
				return Some(id);
			}
		}
		None
	}

	/// Moves a Node from the open to the closed set.
	pub fn close(&mut self, id: NodeId) {
		let pos = self.nodes[id].pos;
		self.open.remove(&pos);
		self.closed.insert(pos);
	}

	pub fn nearest(&self) -> Option<NodeId> {
		self.nearest.get()
	}

	/// Writes the Tiles from the start (exclusive) to `id` (inclusive) into `out`.
	pub fn chain_into(&self, id: NodeId, out: &mut Vec<Point>) {
		let first = out.len();
		let mut current = &self.nodes[id];
		while let Some(parent) = current.parent {
			out.push(current.pos);
			current = &self.nodes[parent];
		}
		out[first..].reverse();
	}
}

use std::ops::Index;
impl Index<NodeId> for Frontier {
	type Output = SearchNode;
	#[track_caller]
	fn index(&self, index: NodeId) -> &SearchNode {
		&self.nodes[index]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::collision::TileGrid;

	#[test]
	fn pops_lowest_score_first() {
		let mut frontier = Frontier::with_capacity(8);
		frontier.offer((0, 0), 0, 30, None);
		frontier.offer((1, 0), 10, 10, None);
		frontier.offer((2, 0), 20, 20, None);
		let id = frontier.pop().unwrap();
		assert_eq!(frontier[id].pos, (1, 0));
	}

	#[test]
	fn ties_pop_in_insertion_order() {
		let mut frontier = Frontier::with_capacity(8);
		frontier.offer((5, 5), 10, 10, None);
		frontier.offer((1, 1), 0, 20, None);
		frontier.offer((3, 3), 20, 0, None);
		let order: Vec<Point> = std::iter::from_fn(|| {
			let id = frontier.pop()?;
			frontier.close(id);
			Some(frontier[id].pos)
		})
		.collect();
		assert_eq!(order, vec![(5, 5), (1, 1), (3, 3)]);
	}

	#[test]
	fn relaxation_requires_strictly_lower_score() {
		let mut frontier = Frontier::with_capacity(8);
		frontier.offer((0, 0), 0, 0, None);
		frontier.offer((1, 0), 30, 10, Some(0));
		let id = frontier.open[&(1, 0)];

		frontier.offer((1, 0), 30, 10, None);
		assert_eq!(frontier[id].parent, Some(0));

		frontier.offer((1, 0), 20, 10, None);
		assert_eq!(frontier[id].g, 20);
		assert_eq!(frontier[id].parent, None);

		// the stale entry with f = 40 is skipped
		let start = frontier.pop().unwrap();
		frontier.close(start);
		assert_eq!(frontier.pop(), Some(id));
		frontier.close(id);
		assert_eq!(frontier.pop(), None);
	}

	#[test]
	fn closed_tiles_are_not_eligible() {
		let grid = TileGrid::from_rows(&["..#"]);
		let mut frontier = Frontier::with_capacity(8);
		frontier.offer((0, 0), 0, 0, None);
		assert!(frontier.is_eligible((0, 0), &grid));
		let start = frontier.pop().unwrap();
		frontier.close(start);
		assert!(!frontier.is_eligible((0, 0), &grid));
		assert!(frontier.is_eligible((1, 0), &grid));
		assert!(!frontier.is_eligible((2, 0), &grid));
		assert!(!frontier.is_eligible((3, 0), &grid));
	}

	#[test]
	fn nearest_prefers_heuristic_then_score() {
		let mut frontier = Frontier::with_capacity(8);
		frontier.offer((0, 0), 0, 20, None);
		frontier.offer((1, 0), 10, 10, Some(0));
		frontier.offer((0, 1), 30, 10, Some(0));
		let nearest = frontier.nearest().unwrap();
		assert_eq!(frontier[nearest].pos, (1, 0));

		frontier.offer((2, 2), 0, 10, Some(0));
		let nearest = frontier.nearest().unwrap();
		assert_eq!(frontier[nearest].pos, (2, 2));
	}

	#[test]
	fn chain_excludes_start() {
		let mut frontier = Frontier::with_capacity(8);
		frontier.offer((0, 0), 0, 20, None);
		frontier.offer((1, 0), 10, 10, Some(0));
		frontier.offer((2, 0), 20, 0, Some(1));
		let mut out = vec![(9, 9)];
		frontier.chain_into(2, &mut out);
		assert_eq!(out, vec![(9, 9), (1, 0), (2, 0)]);
	}
}
