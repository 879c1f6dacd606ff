use crate::error::EndOfIteration;

/// An element pulled from a cursor together with whether the pull succeeded
///
/// `Valid` holds the element; `Invalid` means the cursor was already
/// exhausted when the element was requested. Build one with [`Elem::valid`]
/// or [`Elem::invalid`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Elem<E> {
    Valid(E),
    Invalid,
}

impl<E> Elem<E> {
    pub fn valid(value: E) -> Self {
        Elem::Valid(value)
    }

    pub fn invalid() -> Self {
        Elem::Invalid
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Elem::Valid(_))
    }

    /// Borrow the held value, or `None` for an invalid element
    pub fn value(&self) -> Option<&E> {
        match self {
            Elem::Valid(value) => Some(value),
            Elem::Invalid => None,
        }
    }

    /// Take the held value, signalling [`EndOfIteration`] if there is none
    pub fn get(self) -> Result<E, EndOfIteration> {
        match self {
            Elem::Valid(value) => Ok(value),
            Elem::Invalid => Err(EndOfIteration),
        }
    }

    pub fn into_option(self) -> Option<E> {
        self.into()
    }

    pub fn as_ref(&self) -> Elem<&E> {
        match self {
            Elem::Valid(value) => Elem::Valid(value),
            Elem::Invalid => Elem::Invalid,
        }
    }

    pub fn map<M, F>(self, mapper: F) -> Elem<M>
    where
        F: FnOnce(E) -> M,
    {
        match self {
            Elem::Valid(value) => Elem::Valid(mapper(value)),
            Elem::Invalid => Elem::Invalid,
        }
    }
}

impl<E> Default for Elem<E> {
    fn default() -> Self {
        Elem::Invalid
    }
}

impl<E> From<Option<E>> for Elem<E> {
    fn from(value: Option<E>) -> Self {
        match value {
            Some(value) => Elem::Valid(value),
            None => Elem::Invalid,
        }
    }
}

impl<E> From<Elem<E>> for Option<E> {
    fn from(elem: Elem<E>) -> Self {
        match elem {
            Elem::Valid(value) => Some(value),
            Elem::Invalid => None,
        }
    }
}
