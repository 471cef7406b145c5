use copy_in_place::copy_in_place;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::{debug, trace};

use crate::error::{Error, Result};

mod bytes;

/**
Fixed-capacity container of `T` with four cursors governing access:

```text
0 <= mark <= position <= limit <= capacity
```

`[0, limit)` is the active region; relative `put()`/`get()` work on `position`
and advance it, absolute `put_at()`/`get_at()` accept any index of the active region
and leave `position` alone.

There is no "read mode" or "write mode" flag: a freshly [allocated](#method.allocate)
or [cleared](#method.clear) buffer has `limit == capacity` and is usually being filled,
a [flipped](#method.flip) one has `limit` set to the amount of written data
and is usually being drained. Whatever the usage, only the cursors matter.
*/
pub struct Buffer<T> {
	store: Box<[T]>,
	position: usize,
	limit: usize,
	mark: Option<usize>,
}

impl<T: Copy + Default> Buffer<T> {
	/**
	Allocate buffer of exactly `capacity` elements, with `position` at 0 and `limit` at `capacity`.

	Every slot starts as `T::default()`.
	Fails with [`Error::InvalidCapacity`] if the store of that size cannot be reserved.
	*/
	pub fn allocate(capacity: usize) -> Result<Self> {
		let mut store = Vec::new();
		if let Err(e) = store.try_reserve_exact(capacity) {
			debug!(capacity, error = %e, "buffer allocation failed");
			return Err(Error::InvalidCapacity(capacity));
		}
		store.resize(capacity, T::default());
		debug!(capacity, "buffer allocated");
		Ok(Buffer {
			store: store.into_boxed_slice(),
			position: 0,
			limit: capacity,
			mark: None,
		})
	}
}

impl<T: Copy> Buffer<T> {
	pub fn capacity(&self) -> usize {
		self.store.len()
	}
	pub fn position(&self) -> usize {
		self.position
	}
	pub fn limit(&self) -> usize {
		self.limit
	}
	/// Position saved by the last [`mark()`](#method.mark), if it is still valid
	pub fn mark_position(&self) -> Option<usize> {
		self.mark
	}
	/// Number of elements between `position` and `limit`
	pub fn remaining(&self) -> usize {
		self.limit - self.position
	}
	pub fn has_remaining(&self) -> bool {
		self.position < self.limit
	}

	/// Move `position` to `position`, discarding the mark if it lies past the new position
	pub fn set_position(&mut self, position: usize) -> Result<()> {
		if position > self.limit {
			return Err(Error::InvalidPosition(position, self.limit));
		}
		self.position = position;
		if self.mark.map_or(false, |m| m > position) {
			self.mark = None;
		}
		self.check();
		Ok(())
	}

	/**
	Move `limit` to `limit`.

	`position` is pulled back to the new limit if needed,
	and the mark is discarded if it ends up past the new limit.
	*/
	pub fn set_limit(&mut self, limit: usize) -> Result<()> {
		if limit > self.capacity() {
			return Err(Error::InvalidLimit(limit, self.capacity()));
		}
		self.limit = limit;
		if self.position > limit {
			self.position = limit;
		}
		if self.mark.map_or(false, |m| m > limit) {
			self.mark = None;
		}
		self.check();
		Ok(())
	}

	/// Write `value` at `position` and advance it
	pub fn put(&mut self, value: T) -> Result<()> {
		if self.position == self.limit {
			return Err(Error::Overflow);
		}
		self.store[self.position] = value;
		self.position += 1;
		Ok(())
	}

	/// Write `value` at `index` without touching `position`
	pub fn put_at(&mut self, index: usize, value: T) -> Result<()> {
		self.store[self.index(index)?] = value;
		Ok(())
	}

	/// Read element at `position` and advance it
	pub fn get(&mut self) -> Result<T> {
		if self.position == self.limit {
			return Err(Error::Underflow);
		}
		let value = self.store[self.position];
		self.position += 1;
		Ok(value)
	}

	/// Read element at `index` without touching `position`
	pub fn get_at(&self, index: usize) -> Result<T> {
		Ok(self.store[self.index(index)?])
	}

	/// Write the whole `src` starting at `position`; nothing is written if it does not fit
	pub fn put_slice(&mut self, src: &[T]) -> Result<()> {
		if src.len() > self.remaining() {
			return Err(Error::Overflow);
		}
		let end = self.position + src.len();
		self.store[ self.position .. end ].copy_from_slice(src);
		self.position = end;
		Ok(())
	}

	/// Fill the whole `dst` from `position` onwards; nothing is read if there's not enough data
	pub fn get_slice(&mut self, dst: &mut [T]) -> Result<()> {
		if dst.len() > self.remaining() {
			return Err(Error::Underflow);
		}
		let end = self.position + dst.len();
		dst.copy_from_slice(&self.store[ self.position .. end ]);
		self.position = end;
		Ok(())
	}

	/**
	Move every remaining element of `src` into this buffer,
	advancing positions of both buffers.

	Fails with [`Error::Overflow`] if they do not fit, in which case neither buffer is changed.
	*/
	pub fn put_buffer(&mut self, src: &mut Buffer<T>) -> Result<()> {
		let amount = src.remaining();
		self.put_slice(src.remaining_slice())?;
		src.position += amount;
		Ok(())
	}

	/// Elements between `position` and `limit`
	pub fn remaining_slice(&self) -> &[T] {
		&self.store[ self.position .. self.limit ]
	}
	pub fn remaining_slice_mut(&mut self) -> &mut [T] {
		&mut self.store[ self.position .. self.limit ]
	}

	/*
	before:
	|xxxxx     |
	      |position
	           |limit

	after:
	|xxxxx     |
	 |position
	      |limit
	*/
	/// Make everything written so far (`[0, position)`) the active region, and start over from 0
	pub fn flip(&mut self) {
		self.limit = self.position;
		self.position = 0;
		self.mark = None;
		trace!(limit = self.limit, "flip");
		self.check();
	}

	/// Start over from 0 within the same active region
	pub fn rewind(&mut self) {
		self.position = 0;
		self.mark = None;
		trace!(limit = self.limit, "rewind");
		self.check();
	}

	/// Remember current `position` for later [`reset()`](#method.reset)
	pub fn mark(&mut self) {
		self.mark = Some(self.position);
	}

	/// Return `position` to the mark
	pub fn reset(&mut self) -> Result<()> {
		let mark = self.mark.ok_or(Error::InvalidMark)?;
		self.position = mark;
		trace!(position = self.position, "reset");
		self.check();
		Ok(())
	}

	/**
	Make the whole store writable again.

	Contents stay in place: they are still reachable through `get_at()`
	until overwritten.
	*/
	pub fn clear(&mut self) {
		self.position = 0;
		self.limit = self.capacity();
		self.mark = None;
		trace!(limit = self.limit, "clear");
		self.check();
	}

	/*
	before:
	|abcdefg   |
	   |position
	       |limit

	after:
	|defgefg   |
	     |position
	           |limit
	*/
	/**
	Move unread elements (`[position, limit)`) to the front of the store,
	and make the rest of the store writable after them.

	Slots past the moved elements keep whatever they held before.
	*/
	pub fn compact(&mut self) {
		let amount = self.remaining();
		if amount != 0 && self.position != 0 {
			// ranges overlap whenever amount > position
			copy_in_place(&mut self.store[..], self.position .. self.limit, 0);
		}
		self.position = amount;
		self.limit = self.capacity();
		self.mark = None;
		trace!(position = self.position, limit = self.limit, "compact");
		self.check();
	}

	fn index(&self, index: usize) -> Result<usize> {
		if index < self.limit {
			Ok(index)
		} else {
			Err(Error::IndexOutOfRange(index, self.limit))
		}
	}

	#[inline]
	fn check(&self) {
		debug_assert!(self.position <= self.limit, "position {} past limit {}", self.position, self.limit);
		debug_assert!(self.limit <= self.store.len(), "limit {} past capacity {}", self.limit, self.store.len());
		debug_assert!(self.mark.map_or(true, |m| m <= self.position), "mark {:?} past position {}", self.mark, self.position);
	}
}

// buffers are compared by their remaining elements only

impl<T: Copy + PartialEq> PartialEq for Buffer<T> {
	fn eq(&self, other: &Self) -> bool {
		self.remaining_slice() == other.remaining_slice()
	}
}
impl<T: Copy + Eq> Eq for Buffer<T> {}

impl<T: Copy + PartialOrd> PartialOrd for Buffer<T> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		self.remaining_slice().partial_cmp(other.remaining_slice())
	}
}
impl<T: Copy + Ord> Ord for Buffer<T> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.remaining_slice().cmp(other.remaining_slice())
	}
}

impl<T: Copy + Hash> Hash for Buffer<T> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.remaining_slice().hash(state)
	}
}

impl<T: Copy> fmt::Display for Buffer<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "Buffer[pos={} lim={} cap={}]", self.position, self.limit, self.capacity())
	}
}

impl<T: Copy + fmt::Debug> fmt::Debug for Buffer<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("Buffer")
			.field("position", &self.position)
			.field("limit", &self.limit)
			.field("capacity", &self.capacity())
			.field("mark", &self.mark)
			.field("remaining", &self.remaining_slice())
			.finish()
	}
}
