use core::fmt::{Display, Formatter};

/// Everything besides running out of bytes that can go wrong when decoding a [`SortedI32`](crate::SortedI32) or [`SortedI64`](crate::SortedI64) from a producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortedIntError {
    /// The indicator byte announced more magnitude bytes than the integer type can hold.
    TooWide,
    /// The bytes were a valid encoding, but not the shortest one of the decoded value.
    NotMinimal,
}

impl Display for SortedIntError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            SortedIntError::TooWide => {
                write!(f, "The indicator byte announced too many magnitude bytes")
            }
            SortedIntError::NotMinimal => {
                write!(f, "A sorted integer encoding was not minimal")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SortedIntError {}

#[cfg(test)]
mod tests {
    use super::*;

    use std::string::ToString;

    #[test]
    fn display() {
        assert_eq!(
            "A sorted integer encoding was not minimal",
            SortedIntError::NotMinimal.to_string()
        );
        assert_eq!(
            "The indicator byte announced too many magnitude bytes",
            SortedIntError::TooWide.to_string()
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn boxes_as_std_error() {
        let err: std::boxed::Box<dyn std::error::Error> = SortedIntError::TooWide.into();
        assert!(err.source().is_none());
        assert_eq!(
            "The indicator byte announced too many magnitude bytes",
            err.to_string()
        );
    }
}
