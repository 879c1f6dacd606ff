use crate::cursor::Cursor;
use crate::element::Elem;
use crate::wrapping::{Delegate, Wrapping};
use tracing::trace;

/// Cursor over the elements of `C` that pass predicate `P`
pub type Filter<C, P> = Wrapping<C, Filtering<<C as Cursor>::Element, P>>;

/// Delegate that keeps one passing element staged ahead of the consumer
///
/// The source is searched when the cursor is built and again right after
/// each consume, so `has_next` only reads the staged slot.
#[derive(Debug, Clone)]
pub struct Filtering<E, P> {
    predicate: P,
    staged: Elem<E>,
}

impl<E, P> Filtering<E, P> {
    pub fn new(predicate: P) -> Self {
        Self {
            predicate,
            staged: Elem::Invalid,
        }
    }
}

impl<E, P> Filtering<E, P>
where
    P: FnMut(&E) -> bool,
{
    fn stage<C: Cursor<Element = E>>(&mut self, source: &mut C) {
        let mut skipped = 0usize;
        self.staged = loop {
            match source.next_element() {
                Elem::Valid(value) => {
                    if (self.predicate)(&value) {
                        break Elem::Valid(value);
                    }
                    skipped += 1;
                }
                Elem::Invalid => break Elem::Invalid,
            }
        };
        trace!(skipped, staged = self.staged.is_valid(), "filter staged next element");
    }
}

impl<C, P> Delegate<C> for Filtering<C::Element, P>
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

/// Convenience function to create a filtering cursor
pub fn filter<C, P>(source: C, predicate: P) -> Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Element) -> bool,
{
    source.filter(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Source;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::cell::Cell;

    #[test]
    fn test_filter_keeps_matching_in_order() {
        let data = [1, 2, 3, 4, 5, 6];
        let evens: Vec<i32> = (&data[..])
            .filter(|n| *n % 2 == 0)
            .map(|n| *n)
            .into_iter()
            .collect();
        assert_eq!(evens, vec![2, 4, 6]);
    }

    #[test]
    fn test_filter_nothing_passes() {
        let data = [1, 3, 5];
        let cursor = (&data[..]).filter(|n| *n % 2 == 0);
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_filter_empty_source() {
        let data: [u8; 0] = [];
        let mut cursor = filter((&data[..]).cursor(), |_| true);
        assert!(!cursor.has_next());
        assert_eq!(cursor.next_element(), Elem::Invalid);
    }

    #[test]
    fn test_filter_stages_at_construction() {
        let calls = Cell::new(0);
        let data = [1, 2, 3];
        let cursor = (&data[..]).filter(|n| {
            calls.set(calls.get() + 1);
            **n >= 2
        });

        // 1 is rejected and 2 is staged before anyone asks
        assert_eq!(calls.get(), 2);
        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_filter_has_next_does_not_pull() {
        let data = [10, 11, 12];
        let mut cursor = (&data[..]).filter(|n| **n != 11);
        for _ in 0..3 {
            assert!(cursor.has_next());
        }
        assert_eq!(cursor.next(), &10);
        assert_eq!(cursor.try_next(), Ok(&12));
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_chained_filters() {
        let data = ["apple", "Avocado", "banana", "Apricot"];
        let words: Vec<&&str> = (&data[..])
            .filter(|w| w.to_lowercase().starts_with('a'))
            .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
            .into_iter()
            .collect();
        assert_eq!(words, vec![&"Avocado", &"Apricot"]);
    }

    proptest! {
        #[test]
        fn test_filter_matches_host_filter(
            data in proptest::collection::vec(any::<i16>(), 0..64),
            modulus in 1i16..7,
        ) {
            let expected: Vec<i16> = data.iter().copied().filter(|n| n % modulus == 0).collect();
            let actual: Vec<i16> = (&data)
                .filter(|n| **n % modulus == 0)
                .map(|n| *n)
                .into_iter()
                .collect();
            prop_assert!(actual.len() <= data.len());
            prop_assert_eq!(actual, expected);
        }
    }
}
