use thiserror::Error;

/// Signal that a cursor has no more elements
///
/// Returned by [`Cursor::try_next`](crate::Cursor::try_next) and
/// [`Elem::get`](crate::Elem::get). Running out of elements is an expected
/// condition, so callers usually match on it to end a loop rather than treat
/// it as a fault.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Error)]
#[error("end of iteration")]
pub struct EndOfIteration;

/// Returned by operations the cursor protocol deliberately does not support
///
/// The only such operation is removal through the host iterator adapter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("unsupported operation: {message}")]
pub struct UnsupportedOperation {
    message: &'static str,
}

impl UnsupportedOperation {
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

/// Every error that can originate in this crate
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum IteroError {
    #[error(transparent)]
    EndOfIteration(#[from] EndOfIteration),
    #[error(transparent)]
    UnsupportedOperation(#[from] UnsupportedOperation),
}

impl IteroError {
    /// Whether this error only marks the end of a sequence
    pub fn is_end_of_iteration(&self) -> bool {
        matches!(self, IteroError::EndOfIteration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_of_iteration_is_zero_sized() {
        assert_eq!(std::mem::size_of::<EndOfIteration>(), 0);
        assert_eq!(EndOfIteration, EndOfIteration::default());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(EndOfIteration.to_string(), "end of iteration");

        let error = UnsupportedOperation::new("cannot remove");
        assert_eq!(error.message(), "cannot remove");
        assert_eq!(error.to_string(), "unsupported operation: cannot remove");
    }

    #[test]
    fn test_umbrella_error_conversions() {
        fn pull() -> Result<u8, IteroError> {
            let staged: Result<u8, EndOfIteration> = Err(EndOfIteration);
            Ok(staged?)
        }

        let error = pull().unwrap_err();
        assert!(error.is_end_of_iteration());
        assert_eq!(error.to_string(), "end of iteration");

        let error = IteroError::from(UnsupportedOperation::new("nope"));
        assert!(!error.is_end_of_iteration());
        assert_eq!(error.to_string(), "unsupported operation: nope");
    }
}
