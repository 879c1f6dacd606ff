//! # Itero - Pull-Based Cursor Library
//!
//! Itero provides a cursor protocol for iterating over data that is never
//! mutated through the cursor. A cursor can be queried without advancing it,
//! consumed one element at a time, and extended with lazy combinators. The
//! library emphasizes:
//!
//! - **Non-destructive peeking**: `has_next` never advances and can be asked repeatedly
//! - **Three consume idioms**: `has_next` + `next`, `try_next`, or `next_element`
//! - **Composability**: `filter`, `map`, `flat_map`, `enumerate`, `terminate` and
//!   `terminate_before` wrap any cursor and chain freely
//! - **No removal**: the host iterator adapter refuses `remove`
//!
//! ```rust
//! use itero::{Cursor, Source};
//!
//! let readings = vec![3, 7, 2, 9, 12, 4];
//! let mut cursor = (&readings)
//!     .filter(|n| **n % 3 == 0)
//!     .enumerate_from(1)
//!     .terminate_before(|pair| *pair.value() < &10);
//!
//! assert_eq!(cursor.try_next().map(|pair| pair.into_parts()), Ok((1, &3)));
//! assert_eq!(cursor.try_next().map(|pair| pair.into_parts()), Ok((2, &9)));
//! assert!(!cursor.has_next());
//! ```

pub mod cursor;
pub mod cursors;
pub mod element;
pub mod enumerate;
pub mod error;
pub mod filter;
pub mod flat_map;
pub mod indexed;
pub mod iter;
pub mod map;
pub mod source;
pub mod terminate;
pub mod wrapping;

pub use cursor::Cursor;
pub use cursors::{IterCursor, SliceCursor};
pub use element::Elem;
pub use enumerate::Enumerate;
pub use error::{EndOfIteration, IteroError, UnsupportedOperation};
pub use filter::Filter;
pub use flat_map::FlatMap;
pub use indexed::Indexed;
pub use iter::IteroIterator;
pub use map::Map;
pub use source::{FromFn, Source, from_fn};
pub use terminate::{Terminate, TerminateBefore};
pub use wrapping::{Delegate, Wrapping};
