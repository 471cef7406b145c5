use memchr::memchr;

use super::Buffer;

impl Buffer<u8> {
	/// Offset of the first `byte` within remaining part of the buffer, counting from `position()`
	pub fn find(&self, byte: u8) -> Option<usize> {
		memchr(byte, self.remaining_slice())
	}

	/*
	before:
	|abc,def   |
	 |position
	        |limit

	after:
	|abc,def   |
	     |position
	        |limit
	 |-|return value
	*/
	/**
	Returns bytes from `position()` up to `delim`, and moves `position()` past the delimiter.

	If `delim` is not among remaining bytes, returns `None` and leaves the buffer as is,
	so that caller might `compact()` it, append more data, `flip()`, and try again.
	*/
	pub fn get_until(&mut self, delim: u8) -> Option<&[u8]> {
		let len = self.find(delim)?;
		let start = self.position;
		// also silently consume delimiter
		self.position += len + 1;
		Some(&self.store[ start .. start + len ])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn from(data: &[u8], cap: usize) -> Buffer<u8> {
		let mut buf = Buffer::allocate(cap).unwrap();
		buf.put_slice(data).unwrap();
		buf.flip();
		buf
	}

	#[test]
	fn find() {
		let mut buf = from(b"lorem ipsum", 16);
		assert_eq!(buf.find(b' '), Some(5));
		buf.set_position(6).unwrap();
		assert_eq!(buf.find(b' '), None);
		assert_eq!(buf.find(b'm'), Some(4));
	}

	#[test]
	fn get_until() {
		let mut buf = from(b"lorem ipsum dolor", 32);
		assert_eq!(buf.get_until(b' '), Some(&b"lorem"[..]));
		assert_eq!(buf.get_until(b' '), Some(&b"ipsum"[..]));
		assert_eq!(buf.get_until(b' '), None);
		assert_eq!(buf.position(), 12);
		assert_eq!(buf.remaining_slice(), b"dolor");
	}

	// split a stream that does not fit into the buffer, refilling it with compact()
	#[test]
	fn get_until_refill() {
		let input = b"lorem ipsum dolor sit amet ";
		let mut chunks = input.chunks(4);
		let mut buf = Buffer::allocate(8).unwrap();
		let mut words = vec![];
		buf.flip();
		loop {
			while let Some(word) = buf.get_until(b' ') {
				words.push(word.to_vec());
			}
			let chunk = match chunks.next() {
				Some(chunk) => chunk,
				None => break,
			};
			buf.compact();
			buf.put_slice(chunk).unwrap();
			buf.flip();
		}
		assert_eq!(words, vec![
			b"lorem".to_vec(),
			b"ipsum".to_vec(),
			b"dolor".to_vec(),
			b"sit".to_vec(),
			b"amet".to_vec(),
		]);
		assert!(!buf.has_remaining());
	}
}
