use core::fmt::{Display, Formatter};

/// A read requested more bytes than the buffer had left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnderflowError {
    /// How many bytes the read needed.
    pub requested: usize,
    /// How many bytes were left in the buffer.
    pub available: usize,
}

impl Display for UnderflowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Tried to read {} bytes, but only {} bytes remain",
            self.requested, self.available
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnderflowError {}
