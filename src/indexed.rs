/// A value paired with its position in an enumerated sequence
///
/// The index is whatever the enumerating cursor assigned; it need not start
/// at zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Indexed<E> {
    index: i64,
    value: E,
}

impl<E> Indexed<E> {
    pub fn new(index: i64, value: E) -> Self {
        Self { index, value }
    }

    pub fn index(&self) -> i64 {
        self.index
    }

    pub fn value(&self) -> &E {
        &self.value
    }

    pub fn into_value(self) -> E {
        self.value
    }

    pub fn into_parts(self) -> (i64, E) {
        (self.index, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let pair = Indexed::new(-3, 'x');
        assert_eq!(pair.index(), -3);
        assert_eq!(pair.value(), &'x');
        assert_eq!(pair.into_parts(), (-3, 'x'));
        assert_eq!(Indexed::new(9, "v").into_value(), "v");
    }
}
