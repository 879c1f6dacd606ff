use crate::element::Elem;
use crate::enumerate::{Enumerate, Enumerating};
use crate::error::EndOfIteration;
use crate::filter::{Filter, Filtering};
use crate::flat_map::{FlatMap, FlatMapping};
use crate::iter::IteroIterator;
use crate::map::{Map, Mapping};
use crate::source::Source;
use crate::terminate::{Terminate, TerminateBefore, Terminating, TerminatingBefore};
use crate::wrapping::Wrapping;

/// A single-pass, forward-only pull handle over a sequence
///
/// Implementors supply the two primitives, [`has_next`](Cursor::has_next)
/// and [`next`](Cursor::next). Everything else, including the safe consume
/// forms and all combinators, is derived from them.
///
/// A cursor never removes anything from what it iterates, so it works over
/// immutable data. There are several equivalent ways to drain one:
///
/// ```rust
/// use itero::{Cursor, Elem, Source};
///
/// let data = [1, 2, 3];
///
/// // peek, then consume
/// let mut cursor = (&data[..]).cursor();
/// while cursor.has_next() {
///     let _ = cursor.next();
/// }
///
/// // consume or signal end
/// let mut cursor = (&data[..]).cursor();
/// while let Ok(_) = cursor.try_next() {}
///
/// // consume and wrap
/// let mut cursor = (&data[..]).cursor();
/// while let Elem::Valid(_) = cursor.next_element() {}
///
/// // host for-each
/// let total: i32 = (&data[..]).cursor().into_iter().sum();
/// assert_eq!(total, 6);
/// ```
pub trait Cursor {
    /// The type of elements this cursor yields
    type Element;

    /// Whether a following consume will yield a real element
    ///
    /// Must not advance the cursor, and must keep returning `false` once it
    /// has returned `false`.
    fn has_next(&self) -> bool;

    /// Return the next element and advance
    ///
    /// The result is unspecified when [`has_next`](Cursor::has_next) is
    /// `false`; guard the call or use [`next_element`](Cursor::next_element)
    /// or [`try_next`](Cursor::try_next) instead.
    ///
    /// # Panics
    ///
    /// Cursors that have nothing to return past the end panic.
    fn next(&mut self) -> Self::Element;

    /// Consume the next element, wrapping it in an [`Elem`]
    ///
    /// [`next`](Cursor::next) is only called if `has_next` is `true`.
    fn next_element(&mut self) -> Elem<Self::Element> {
        if self.has_next() {
            Elem::Valid(self.next())
        } else {
            Elem::Invalid
        }
    }

    /// Consume the next element, or signal [`EndOfIteration`]
    fn try_next(&mut self) -> Result<Self::Element, EndOfIteration> {
        if self.has_next() {
            Ok(self.next())
        } else {
            Err(EndOfIteration)
        }
    }

    /// Adapt this cursor to the host [`Iterator`] protocol
    ///
    /// The cursors in this crate also implement [`IntoIterator`] and can go
    /// straight into a `for` loop. Cursors defined elsewhere, `&mut C` and
    /// `Box<dyn Cursor>` have no such impl; call `iter()` on them first.
    fn iter(self) -> IteroIterator<Self>
    where
        Self: Sized,
    {
        IteroIterator::new(self)
    }

    /// Borrow this cursor so it can be wrapped without giving it up
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Keep only the elements for which `predicate` returns `true`
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Element) -> bool,
    {
        Wrapping::new(self, Filtering::new(predicate))
    }

    /// Transform every element with `mapper`
    fn map<M, F>(self, mapper: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Element) -> M,
    {
        Wrapping::new(self, Mapping::new(mapper))
    }

    /// Map every element to a nested source and drain each in turn
    fn flat_map<S, F>(self, mapper: F) -> FlatMap<Self, F, S>
    where
        Self: Sized,
        F: FnMut(Self::Element) -> S,
        S: Source,
    {
        Wrapping::new(self, FlatMapping::new(mapper))
    }

    /// Pair every element with its index, starting from zero
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        self.enumerate_from(0)
    }

    /// Pair every element with its index, starting from `start`
    fn enumerate_from(self, start: i64) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Wrapping::new(self, Enumerating::new(start))
    }

    /// Stop after yielding the first element for which `predicate` is `false`
    fn terminate<P>(self, predicate: P) -> Terminate<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Element) -> bool,
    {
        Wrapping::new(self, Terminating::new(predicate))
    }

    /// Stop before the first element for which `predicate` is `false`
    fn terminate_before<P>(self, predicate: P) -> TerminateBefore<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Element) -> bool,
    {
        Wrapping::new(self, TerminatingBefore::new(predicate))
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Element = C::Element;

    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Self::Element {
        (**self).next()
    }

    fn next_element(&mut self) -> Elem<Self::Element> {
        (**self).next_element()
    }

    fn try_next(&mut self) -> Result<Self::Element, EndOfIteration> {
        (**self).try_next()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Element = C::Element;

    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Self::Element {
        (**self).next()
    }

    fn next_element(&mut self) -> Elem<Self::Element> {
        (**self).next_element()
    }

    fn try_next(&mut self) -> Result<Self::Element, EndOfIteration> {
        (**self).try_next()
    }
}

/// Shared panic for leaf cursors asked for an element they do not have
#[cold]
#[track_caller]
pub(crate) fn exhausted() -> ! {
    panic!("next() called on an exhausted cursor")
}
