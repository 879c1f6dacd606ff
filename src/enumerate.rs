use crate::cursor::Cursor;
use crate::indexed::Indexed;
use crate::wrapping::{Delegate, Wrapping};

/// Cursor that pairs every element of `C` with a running index
pub type Enumerate<C> = Wrapping<C, Enumerating>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Enumerating {
    next_index: i64,
}

impl Enumerating {
    pub fn new(start: i64) -> Self {
        Self { next_index: start }
    }

    /// The index the next element will be given
    pub fn next_index(&self) -> i64 {
        self.next_index
    }
}

impl<C: Cursor> Delegate<C> for Enumerating {
    type Element = Indexed<C::Element>;

    fn next(&mut self, source: &mut C) -> Self::Element {
        let index = self.next_index;
        self.next_index = index.wrapping_add(1);
        Indexed::new(index, source.next())
    }
}
