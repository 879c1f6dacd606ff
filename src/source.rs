use crate::cursor::Cursor;
use crate::cursors::{IterCursor, SliceCursor};
use crate::enumerate::Enumerate;
use crate::filter::Filter;
use crate::flat_map::FlatMap;
use crate::iter::IteroIterator;
use crate::map::Map;
use crate::terminate::{Terminate, TerminateBefore};
use std::ops::{Range, RangeInclusive};

/// A repeatable factory of cursors over one logical sequence
///
/// Every call to [`cursor`](Source::cursor) returns an independent cursor
/// positioned at the start. The combinator methods are shorthand for minting
/// a fresh cursor and wrapping it.
///
/// Types that are already host iterators, such as ranges, resolve `.filter`
/// and `.map` to [`Iterator`]'s methods first; call `.cursor()` before
/// chaining on those. The host adapter is [`host_iter`](Source::host_iter)
/// so that `.iter()` on slices and vectors keeps meaning `slice::iter`.
pub trait Source {
    /// The type of elements the minted cursors yield
    type Element;

    type Cursor: Cursor<Element = Self::Element>;

    fn cursor(&self) -> Self::Cursor;

    /// A host iterator over a fresh cursor
    fn host_iter(&self) -> IteroIterator<Self::Cursor> {
        self.cursor().iter()
    }

    fn filter<P>(&self, predicate: P) -> Filter<Self::Cursor, P>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.cursor().filter(predicate)
    }

    fn map<M, F>(&self, mapper: F) -> Map<Self::Cursor, F>
    where
        F: FnMut(Self::Element) -> M,
    {
        self.cursor().map(mapper)
    }

    fn flat_map<S, F>(&self, mapper: F) -> FlatMap<Self::Cursor, F, S>
    where
        F: FnMut(Self::Element) -> S,
        S: Source,
    {
        self.cursor().flat_map(mapper)
    }

    fn enumerate(&self) -> Enumerate<Self::Cursor> {
        self.cursor().enumerate()
    }

    fn enumerate_from(&self, start: i64) -> Enumerate<Self::Cursor> {
        self.cursor().enumerate_from(start)
    }

    fn terminate<P>(&self, predicate: P) -> Terminate<Self::Cursor, P>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.cursor().terminate(predicate)
    }

    fn terminate_before<P>(&self, predicate: P) -> TerminateBefore<Self::Cursor, P>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.cursor().terminate_before(predicate)
    }
}

impl<'a, T> Source for &'a [T] {
    type Element = &'a T;
    type Cursor = SliceCursor<'a, T>;

    fn cursor(&self) -> SliceCursor<'a, T> {
        SliceCursor::new(*self)
    }
}

impl<'a, T> Source for &'a Vec<T> {
    type Element = &'a T;
    type Cursor = SliceCursor<'a, T>;

    fn cursor(&self) -> SliceCursor<'a, T> {
        let data: &'a Vec<T> = *self;
        SliceCursor::new(data)
    }
}

impl<T> Source for Range<T>
where
    Range<T>: Iterator<Item = T> + Clone,
{
    type Element = T;
    type Cursor = IterCursor<Range<T>>;

    fn cursor(&self) -> Self::Cursor {
        IterCursor::new(self.clone())
    }
}

impl<T> Source for RangeInclusive<T>
where
    RangeInclusive<T>: Iterator<Item = T> + Clone,
{
    type Element = T;
    type Cursor = IterCursor<RangeInclusive<T>>;

    fn cursor(&self) -> Self::Cursor {
        IterCursor::new(self.clone())
    }
}

/// Source that calls a closure for a new host iterable per cursor
#[derive(Debug, Clone)]
pub struct FromFn<F> {
    factory: F,
}

impl<F, I> Source for FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Element = I::Item;
    type Cursor = IterCursor<I::IntoIter>;

    fn cursor(&self) -> Self::Cursor {
        IterCursor::new((self.factory)().into_iter())
    }
}

/// Build a [`Source`] from a closure returning anything iterable
///
/// ```rust
/// use itero::{Cursor, Source, from_fn};
///
/// let words = vec!["alpha", "beta"];
/// let source = from_fn(|| words.clone());
/// assert_eq!(source.cursor().try_next(), Ok("alpha"));
/// assert_eq!(source.cursor().try_next(), Ok("alpha"));
/// ```
pub fn from_fn<F, I>(factory: F) -> FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    FromFn { factory }
}
