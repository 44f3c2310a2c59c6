//! Errors reported by [`BstMap`](crate::BstMap).
//!
//! Every variant is an invalid argument: the map rejects the call before it
//! traverses or mutates anything. A key that is simply not in the map is not
//! an error; lookups report it as `None`.

use thiserror::Error;

/// An invalid argument passed to a [`BstMap`](crate::BstMap) operation.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq, Hash)]
pub enum Error {
    /// A checked lookup was given no key.
    #[error("lookup key must be present")]
    MissingKey,

    /// An extraction was given no buffer.
    #[error("extraction buffer must be present")]
    MissingBuffer,

    /// An extraction was given a buffer with zero capacity.
    #[error("extraction buffer must have non-zero capacity")]
    EmptyBuffer,
}

impl Error {
    /// Returns true for errors caused by a caller passing an invalid argument.
    ///
    /// This holds for every current variant.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::MissingKey | Self::MissingBuffer | Self::EmptyBuffer)
    }
}

/// Result alias defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn messages_name_the_argument() {
        assert_eq!(Error::MissingKey.to_string(), "lookup key must be present");
        assert_eq!(Error::MissingBuffer.to_string(), "extraction buffer must be present");
        assert_eq!(Error::EmptyBuffer.to_string(), "extraction buffer must have non-zero capacity");
    }

    #[test]
    fn every_variant_is_an_invalid_argument() {
        for error in [Error::MissingKey, Error::MissingBuffer, Error::EmptyBuffer] {
            assert!(error.is_invalid_argument());
        }
    }
}
