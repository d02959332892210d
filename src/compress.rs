//! Reduction of a Tile Path to the Tiles where it changes direction.

use crate::Point;

/// `true` if `b` can be removed from `a -> b -> c` without changing the shape of the Path.
///
/// That is the case if all three lie on one row or one column, or if `b` is in the middle of
/// an exact diagonal step sequence.
pub fn is_redundant(a: Point, b: Point, c: Point) -> bool {
	if (a.0 == b.0 && b.0 == c.0) || (a.1 == b.1 && b.1 == c.1) {
		return true;
	}
	let first = (b.0 - a.0, b.1 - a.1);
	let second = (c.0 - b.0, c.1 - b.1);
	first == second && first.0.abs() == 1 && first.1.abs() == 1
}

/// Appends the compressed form of `start -> cells` to `out`.
///
/// `cells` is a Tile Path as returned by the search, excluding `start`. The written Path
/// excludes `start` as well, and always ends with the last Tile of `cells`.
pub fn compress_path_into(start: Point, cells: &[Point], out: &mut Vec<Point>) {
	let mut previous = start;
	for (i, &current) in cells.iter().enumerate() {
		let keep = match cells.get(i + 1) {
			Some(&next) => !is_redundant(previous, current, next),
			None => true,
		};
		if keep {
			out.push(current);
		}
		previous = current;
	}
}

/// Removes all Tiles from a Path that don't change its direction.
///
/// ## Examples
/// ```
/// # use tile_pathing::compress::compress_path;
/// let cells = [(1, 0), (2, 0), (3, 0), (3, 1), (3, 2)];
/// assert_eq!(compress_path((0, 0), &cells), vec![(3, 0), (3, 2)]);
///
/// let staircase = [(1, 1), (2, 2), (3, 3)];
/// assert_eq!(compress_path((0, 0), &staircase), vec![(3, 3)]);
/// ```
pub fn compress_path(start: Point, cells: &[Point]) -> Vec<Point> {
	let mut out = Vec::new();
	compress_path_into(start, cells, &mut out);
	out
}
