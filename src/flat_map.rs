use crate::cursor::Cursor;
use crate::element::Elem;
use crate::source::Source;
use crate::wrapping::{Delegate, Wrapping};
use std::fmt;
use tracing::trace;

/// Cursor that drains the nested source `F` produces for each element of `C`
pub type FlatMap<C, F, S> = Wrapping<C, FlatMapping<F, S>>;

/// Delegate that keeps at most one nested cursor open
///
/// A nested cursor is opened for each source element in turn and fully drained
/// before the next source element is pulled. Empty nested sources are skipped
/// while staging, so whenever the open cursor exists and has elements, the
/// flattened cursor does too.
pub struct FlatMapping<F, S: Source> {
    mapper: F,
    current: Option<S::Cursor>,
}

impl<F, S: Source> FlatMapping<F, S> {
    pub fn new(mapper: F) -> Self {
        Self {
            mapper,
            current: None,
        }
    }

    fn has_staged(&self) -> bool {
        self.current.as_ref().is_some_and(|nested| nested.has_next())
    }

    fn stage<C>(&mut self, source: &mut C)
    where
        C: Cursor,
        F: FnMut(C::Element) -> S,
    {
        while !self.has_staged() {
            match source.next_element() {
                Elem::Valid(value) => {
                    self.current = Some((self.mapper)(value).cursor());
                    trace!("flat_map opened nested source");
                }
                Elem::Invalid => break,
            }
        }
    }
}

impl<F, S> Clone for FlatMapping<F, S>
where
    F: Clone,
    S: Source,
    S::Cursor: Clone,
{
    fn clone(&self) -> Self {
        Self {
            mapper: self.mapper.clone(),
            current: self.current.clone(),
        }
    }
}

impl<F, S> fmt::Debug for FlatMapping<F, S>
where
    S: Source,
    S::Cursor: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatMapping")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl<C, F, S> Delegate<C> for FlatMapping<F, S>
where
    C: Cursor,
    F: FnMut(C::Element) -> S,
    S: Source,
{
    type Element = S::Element;

    fn prime(&mut self, source: &mut C) {
        self.stage(source);
    }

    fn has_next(&self, _source: &C) -> bool {
        self.has_staged()
    }

    fn next(&mut self, source: &mut C) -> S::Element {
        let value = match self.current.as_mut() {
            Some(nested) => nested.next(),
            None => (self.mapper)(source.next()).cursor().next(),
        };
        self.stage(source);
        value
    }
}

/// Convenience function to create a flattening cursor
pub fn flat_map<C, F, S>(source: C, mapper: F) -> FlatMap<C, F, S>
where
    C: Cursor,
    F: FnMut(C::Element) -> S,
    S: Source,
{
    source.flat_map(mapper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[test]
    fn test_flat_map_skips_empty_nested_sources() {
        let nested = vec![vec![1, 2], vec![], vec![3]];
        let flat: Vec<i32> = (&nested)
            .flat_map(|inner| inner)
            .map(|n| *n)
            .into_iter()
            .collect();
        assert_eq!(flat, vec![1, 2, 3]);
    }

    #[test]
    fn test_flat_map_all_empty() {
        let nested: Vec<Vec<i32>> = vec![vec![], vec![]];
        let mut cursor = (&nested).flat_map(|inner| inner);
        assert!(!cursor.has_next());
        assert_eq!(cursor.try_next(), Err(crate::EndOfIteration));
    }

    #[test]
    fn test_flat_map_ranges() {
        let counts = [0u32, 3, 1];
        let flat: Vec<u32> = flat_map((&counts[..]).cursor(), |n| 0..*n)
            .into_iter()
            .collect();
        assert_eq!(flat, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_flat_map_debug_shows_open_cursor() {
        let nested = vec![vec![4]];
        let cursor = (&nested).flat_map(|inner| inner);
        let rendered = format!("{:?}", cursor.delegate());
        assert!(rendered.starts_with("FlatMapping { current: Some(Valid"));
        assert!(rendered.ends_with(".. }"));
    }

    #[test]
    fn test_flat_map_is_depth_first() {
        let log = RefCell::new(Vec::new());
        let outer = ['a', 'b'];
        let mut cursor = (&outer[..]).flat_map(|c| {
            log.borrow_mut().push(format!("open {}", c));
            1..3
        });

        // only the first nested source is open before anything is consumed
        assert_eq!(*log.borrow(), vec!["open a"]);
        assert_eq!(cursor.next(), 1);
        assert_eq!(cursor.next(), 2);
        assert_eq!(*log.borrow(), vec!["open a", "open b"]);
        assert_eq!(cursor.next(), 1);
        assert_eq!(cursor.next(), 2);
        assert!(!cursor.has_next());
    }
}
