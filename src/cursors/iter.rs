use crate::cursor::{Cursor, exhausted};
use crate::element::Elem;
use std::iter::Fuse;

/// Cursor over a host [`Iterator`]
///
/// One element is pulled ahead so that `has_next` does not touch the
/// iterator. The iterator is fused, so once it runs dry the cursor stays
/// exhausted even if the iterator would resume.
#[derive(Debug, Clone)]
pub struct IterCursor<I: Iterator> {
    iter: Fuse<I>,
    staged: Elem<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
    pub fn new(iter: I) -> Self {
        let mut iter = iter.fuse();
        let staged = iter.next().into();
        Self { iter, staged }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Element = I::Item;

    fn has_next(&self) -> bool {
        self.staged.is_valid()
    }

    fn next(&mut self) -> I::Item {
        let next = self.iter.next().into();
        match std::mem::replace(&mut self.staged, next) {
            Elem::Valid(value) => value,
            Elem::Invalid => exhausted(),
        }
    }
}
