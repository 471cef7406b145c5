/*!
Fixed-capacity typed buffer driven by `position`, `limit` and `mark` cursors.

Data is written sequentially into the buffer, [`flip`](Buffer::flip)ped into a readable region,
drained, and then either [`clear`](Buffer::clear)ed or [`compact`](Buffer::compact)ed
to make room for more data while keeping what was not read yet.

```
use cursor_buf::Buffer;

# fn main() -> Result<(), cursor_buf::Error> {
let mut buf = Buffer::<i32>::allocate(10)?;
for i in 1..=5 {
	buf.put(i)?;
}
assert_eq!((buf.position(), buf.limit()), (5, 10));

buf.flip();
assert_eq!((buf.position(), buf.limit()), (0, 5));

// absolute reads leave position alone
assert_eq!(buf.get_at(1)?, 2);
assert_eq!(buf.position(), 0);

assert_eq!(buf.get()?, 1);
assert_eq!(buf.get()?, 2);

// move 3, 4, 5 to the front and keep appending after them
buf.compact();
buf.put(6)?;
buf.flip();
assert_eq!(buf.remaining_slice(), &[3, 4, 5, 6]);
# Ok(())
# }
```
*/

mod buffer;
pub use buffer::Buffer;

mod error;
pub use error::{Error, Result};
