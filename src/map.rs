use crate::cursor::Cursor;
use crate::wrapping::{Delegate, Wrapping};

/// Cursor that transforms the elements of `C` with `F`
pub type Map<C, F> = Wrapping<C, Mapping<F>>;

/// Delegate that applies a mapping function to each pulled element
///
/// One element in, one element out, so `has_next` is left to the source and
/// the mapper runs only when an element is consumed.
#[derive(Debug, Clone)]
pub struct Mapping<F> {
    mapper: F,
}

impl<F> Mapping<F> {
    pub fn new(mapper: F) -> Self {
        Mapping { mapper }
    }
}

impl<C, F, M> Delegate<C> for Mapping<F>
where
    C: Cursor,
    F: FnMut(C::Element) -> M,
{
    type Element = M;

    fn next(&mut self, source: &mut C) -> M {
        (self.mapper)(source.next())
    }
}

/// Convenience function to create a mapping cursor
pub fn map<C, F, M>(source: C, mapper: F) -> Map<C, F>
where
    C: Cursor,
    F: FnMut(C::Element) -> M,
{
    source.map(mapper)
}
