//! Reuse of the buffers handed out by the [`Pathfinder`](crate::Pathfinder).
//!
//! Agents request new Paths all the time, and every Path would otherwise be a fresh allocation.
//! A [`Pool`] keeps released buffers around and hands them out again on the next request.
//!
//! Returning a buffer is optional. A buffer that is never released is simply dropped, which only
//! costs the allocation that could have been saved.

/// A value that can be wiped for reuse.
pub trait Recycle {
	/// Removes all contents, so that nothing from a previous use can be observed.
	fn recycle(&mut self);
}

impl<T> Recycle for Vec<T> {
	fn recycle(&mut self) {
		self.clear();
	}
}

/// A freelist of reusable values.
///
/// ## Examples
/// ```
/// # use tile_pathing::pool::Pool;
/// let mut pool: Pool<Vec<u32>> = Pool::new(4);
///
/// let mut buffer = pool.acquire();
/// buffer.extend([1, 2, 3]);
/// let capacity = buffer.capacity();
/// pool.release(buffer);
///
/// let buffer = pool.acquire();
/// assert!(buffer.is_empty());
/// assert_eq!(buffer.capacity(), capacity);
/// ```
#[derive(Clone, Debug)]
pub struct Pool<T> {
	free: Vec<T>,
	capacity: usize,
}

impl<T: Recycle + Default> Pool<T> {
	/// Creates a new Pool that keeps at most `capacity` released values.
	pub fn new(capacity: usize) -> Pool<T> {
		Pool {
			free: Vec::with_capacity(capacity),
			capacity,
		}
	}

	/// Hands out a previously released value, or a new one if there is none.
	pub fn acquire(&mut self) -> T {
		self.free.pop().unwrap_or_default()
	}

	/// Takes a value back for reuse. Values beyond the capacity of the Pool are dropped.
	pub fn release(&mut self, mut value: T) {
		if self.free.len() < self.capacity {
			value.recycle();
			self.free.push(value);
		}
	}

	/// The number of values waiting to be reused
	pub fn len(&self) -> usize {
		self.free.len()
	}

	/// `true` if the next call to [`acquire`](Pool::acquire) creates a new value
	pub fn is_empty(&self) -> bool {
		self.free.is_empty()
	}
}
