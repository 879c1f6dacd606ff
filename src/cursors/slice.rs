use crate::cursor::{Cursor, exhausted};

/// Cursor over a borrowed slice, yielding references into it
#[derive(Debug)]
pub enum SliceCursor<'a, T> {
    Valid { data: &'a [T], position: usize },
    End { data: &'a [T] },
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        if data.is_empty() {
            return SliceCursor::End { data };
        }
        SliceCursor::Valid { data, position: 0 }
    }

    /// Index of the element the next consume returns
    ///
    /// Equal to the slice length once exhausted.
    pub fn position(&self) -> usize {
        match self {
            SliceCursor::Valid { position, .. } => *position,
            SliceCursor::End { data } => data.len(),
        }
    }

    /// The whole underlying slice
    pub fn data(&self) -> &'a [T] {
        match self {
            SliceCursor::Valid { data, .. } => data,
            SliceCursor::End { data } => data,
        }
    }

    /// The elements not yet consumed
    pub fn remaining(&self) -> &'a [T] {
        &self.data()[self.position()..]
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Element = &'a T;

    fn has_next(&self) -> bool {
        matches!(self, SliceCursor::Valid { .. })
    }

    fn next(&mut self) -> &'a T {
        match *self {
            SliceCursor::Valid { data, position } => {
                *self = if position + 1 >= data.len() {
                    SliceCursor::End { data }
                } else {
                    SliceCursor::Valid {
                        data,
                        position: position + 1,
                    }
                };
                &data[position]
            }
            SliceCursor::End { .. } => exhausted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Elem;
    use crate::error::EndOfIteration;

    #[test]
    fn test_basic_operations() {
        let data = b"hello";
        let mut cursor = SliceCursor::new(data);

        assert!(cursor.has_next());
        assert_eq!(cursor.next(), &b'h');
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.remaining(), b"ello");
    }

    #[test]
    fn test_end_after_last_element() {
        let data = [10u32, 20];
        let mut cursor = SliceCursor::new(&data);

        assert_eq!(cursor.next(), &10);
        assert_eq!(cursor.next(), &20);
        assert!(matches!(cursor, SliceCursor::End { .. }));
        assert_eq!(cursor.position(), 2);
        assert!(cursor.remaining().is_empty());
        assert_eq!(cursor.next_element(), Elem::Invalid);
    }

    #[test]
    fn test_empty_data() {
        let data: [u8; 0] = [];
        let mut cursor = SliceCursor::new(&data);

        assert!(matches!(cursor, SliceCursor::End { .. }));
        assert!(!cursor.has_next());
        assert_eq!(cursor.try_next(), Err(EndOfIteration));
    }

    #[test]
    fn test_copy_independence() {
        let data = b"abcd";
        let mut cursor = SliceCursor::new(data);

        let saved_at_a = cursor;
        assert_eq!(cursor.next(), &b'a');
        let mut saved_at_b = cursor;
        assert_eq!(cursor.next(), &b'b');

        assert_eq!(saved_at_a.position(), 0);
        assert_eq!(saved_at_b.try_next(), Ok(&b'b'));
        assert_eq!(cursor.try_next(), Ok(&b'c'));
    }

    #[test]
    #[should_panic(expected = "exhausted cursor")]
    fn test_next_past_end_panics() {
        let data = [1];
        let mut cursor = SliceCursor::new(&data);
        cursor.next();
        cursor.next();
    }
}
