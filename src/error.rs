use quick_error::quick_error;

quick_error! {
	/// Reasons a [`Buffer`](crate::Buffer) operation may be refused.
	///
	/// A buffer that returned one of these is left exactly as it was before the call.
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub enum Error {
		/// Backing store of the requested number of elements cannot be reserved
		InvalidCapacity(capacity: usize) {
			description("invalid capacity")
			display("cannot allocate buffer of {} elements", capacity)
		}
		/// Relative write with `position == limit`
		Overflow {
			description("buffer overflow")
			display("buffer overflow: no room left before limit")
		}
		/// Relative read with `position == limit`
		Underflow {
			description("buffer underflow")
			display("buffer underflow: no data left before limit")
		}
		/// Absolute access outside of `[0, limit)`
		IndexOutOfRange(index: usize, limit: usize) {
			description("index out of range")
			display("index {} is out of range for limit {}", index, limit)
		}
		/// `reset()` without prior `mark()`
		InvalidMark {
			description("invalid mark")
			display("mark is not set")
		}
		InvalidPosition(position: usize, limit: usize) {
			description("invalid position")
			display("position {} is past limit {}", position, limit)
		}
		InvalidLimit(limit: usize, capacity: usize) {
			description("invalid limit")
			display("limit {} is past capacity {}", limit, capacity)
		}
	}
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display() {
		assert_eq!(Error::IndexOutOfRange(7, 5).to_string(), "index 7 is out of range for limit 5");
		assert_eq!(Error::InvalidMark.to_string(), "mark is not set");
		assert_eq!(Error::InvalidCapacity(3).to_string(), "cannot allocate buffer of 3 elements");
	}
}
