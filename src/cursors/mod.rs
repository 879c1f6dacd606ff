pub mod iter;
pub mod slice;

pub use iter::IterCursor;
pub use slice::SliceCursor;
