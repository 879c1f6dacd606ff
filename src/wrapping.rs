use crate::cursor::Cursor;

/// Override points for a cursor that wraps exactly one source cursor
///
/// [`Wrapping`] forwards to these, so a combinator only writes the parts it
/// changes. `has_next` passes straight through to the source unless
/// overridden. `next` has no default since it usually changes the element
/// type.
pub trait Delegate<C: Cursor> {
    /// The type of elements the wrapping cursor yields
    type Element;

    /// Called once when the wrapping cursor is built, before any query
    ///
    /// Combinators that need look-ahead stage their first element here.
    fn prime(&mut self, source: &mut C) {
        let _ = source;
    }

    fn has_next(&self, source: &C) -> bool {
        source.has_next()
    }

    fn next(&mut self, source: &mut C) -> Self::Element;
}

/// A cursor built from one source cursor and a [`Delegate`]
///
/// Every combinator in this crate is a `Wrapping` with its own delegate.
#[derive(Debug, Clone)]
pub struct Wrapping<C, D> {
    source: C,
    delegate: D,
}

impl<C, D> Wrapping<C, D>
where
    C: Cursor,
    D: Delegate<C>,
{
    pub fn new(mut source: C, mut delegate: D) -> Self {
        delegate.prime(&mut source);
        Self { source, delegate }
    }
}

impl<C, D> Wrapping<C, D> {
    /// The wrapped cursor
    ///
    /// Its position may be ahead of this cursor's when the delegate stages.
    pub fn source(&self) -> &C {
        &self.source
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }
}

impl<C, D> Cursor for Wrapping<C, D>
where
    C: Cursor,
    D: Delegate<C>,
{
    type Element = D::Element;

    fn has_next(&self) -> bool {
        self.delegate.has_next(&self.source)
    }

    fn next(&mut self) -> Self::Element {
        self.delegate.next(&mut self.source)
    }
}
