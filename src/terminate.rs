use crate::cursor::Cursor;
use crate::element::Elem;
use crate::wrapping::{Delegate, Wrapping};
use tracing::trace;

/// Cursor that ends after the first element of `C` failing `P`, inclusive
pub type Terminate<C, P> = Wrapping<C, Terminating<P>>;

/// Cursor that ends before the first element of `C` failing `P`, exclusive
pub type TerminateBefore<C, P> = Wrapping<C, TerminatingBefore<<C as Cursor>::Element, P>>;

/// Delegate for an inclusive cutoff
///
/// The element that fails the predicate is still yielded; after it the
/// source is never pulled again.
#[derive(Debug, Clone)]
pub struct Terminating<P> {
    predicate: P,
    done: bool,
}

impl<P> Terminating<P> {
    pub fn new(predicate: P) -> Self {
        Self {
            predicate,
            done: false,
        }
    }
}

impl<C, P> Delegate<C> for Terminating<P>
where
    C: Cursor,
    P: FnMut(&C::Element) -> bool,
{
    type Element = C::Element;

    fn has_next(&self, source: &C) -> bool {
        !self.done && source.has_next()
    }

    fn next(&mut self, source: &mut C) -> C::Element {
        let value = source.next();
        if !self.done && !(self.predicate)(&value) {
            trace!("terminate cutoff reached");
            self.done = true;
        }
        value
    }
}

/// Delegate for an exclusive cutoff
///
/// Stages one element ahead like [`Filtering`](crate::filter::Filtering). The
/// first failing element is pulled from the source and discarded, and
/// nothing is staged after it.
#[derive(Debug, Clone)]
pub struct TerminatingBefore<E, P> {
    predicate: P,
    staged: Elem<E>,
}

impl<E, P> TerminatingBefore<E, P> {
    pub fn new(predicate: P) -> Self {
        Self {
            predicate,
            staged: Elem::Invalid,
        }
    }
}

impl<E, P> TerminatingBefore<E, P>
where
    P: FnMut(&E) -> bool,
{
    fn stage<C: Cursor<Element = E>>(&mut self, source: &mut C) {
        self.staged = match source.next_element() {
            Elem::Valid(value) => {
                if (self.predicate)(&value) {
                    Elem::Valid(value)
                } else {
                    trace!("terminate_before cutoff reached");
                    Elem::Invalid
                }
            }
            Elem::Invalid => Elem::Invalid,
        };
    }
}

impl<C, P> Delegate<C> for TerminatingBefore<C::Element, P>
where
    C: Cursor,
    P: FnMut(&C::Element) -> bool,
{
    type Element = C::Element;

    fn prime(&mut self, source: &mut C) {
        self.stage(source);
    }

    fn has_next(&self, _source: &C) -> bool {
        self.staged.is_valid()
    }

    fn next(&mut self, source: &mut C) -> C::Element {
        match std::mem::take(&mut self.staged) {
            Elem::Valid(value) => {
                self.stage(source);
                value
            }
            Elem::Invalid => source.next(),
        }
    }
}

/// Convenience function to create an inclusive-cutoff cursor
pub fn terminate<C, P>(source: C, predicate: P) -> Terminate<C, P>
where
    C: Cursor,
    P: FnMut(&C::Element) -> bool,
{
    source.terminate(predicate)
}

/// Convenience function to create an exclusive-cutoff cursor
pub fn terminate_before<C, P>(source: C, predicate: P) -> TerminateBefore<C, P>
where
    C: Cursor,
    P: FnMut(&C::Element) -> bool,
{
    source.terminate_before(predicate)
}
