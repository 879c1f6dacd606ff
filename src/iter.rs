use crate::cursor::Cursor;
use crate::cursors::{IterCursor, SliceCursor};
use crate::error::UnsupportedOperation;
use crate::wrapping::{Delegate, Wrapping};
use std::iter::FusedIterator;

/// Adapter exposing a cursor through the host [`Iterator`] protocol
///
/// `Iterator::next` is `has_next` followed by the cursor's `next`. Removal
/// has no meaning for a cursor, so [`remove`](IteroIterator::remove) always
/// fails.
#[derive(Debug, Clone)]
pub struct IteroIterator<C> {
    cursor: C,
}

impl<C: Cursor> IteroIterator<C> {
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }

    pub fn has_next(&self) -> bool {
        self.cursor.has_next()
    }

    /// Always fails with [`UnsupportedOperation`], whatever the cursor state
    pub fn remove(&mut self) -> Result<(), UnsupportedOperation> {
        Err(UnsupportedOperation::new(
            "elements cannot be removed through this iterator",
        ))
    }

    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for IteroIterator<C> {
    type Item = C::Element;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_element().into_option()
    }
}

impl<C: Cursor> FusedIterator for IteroIterator<C> {}

impl<C, D> IntoIterator for Wrapping<C, D>
where
    C: Cursor,
    D: Delegate<C>,
{
    type Item = D::Element;
    type IntoIter = IteroIterator<Self>;

    fn into_iter(self) -> Self::IntoIter {
        IteroIterator::new(self)
    }
}

impl<'a, T> IntoIterator for SliceCursor<'a, T> {
    type Item = &'a T;
    type IntoIter = IteroIterator<Self>;

    fn into_iter(self) -> Self::IntoIter {
        IteroIterator::new(self)
    }
}

impl<I: Iterator> IntoIterator for IterCursor<I> {
    type Item = I::Item;
    type IntoIter = IteroIterator<Self>;

    fn into_iter(self) -> Self::IntoIter {
        IteroIterator::new(self)
    }
}
