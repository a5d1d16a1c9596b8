// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

/// A specialized `Result` type for blob operations.
pub type Result<T> = std::result::Result<T, Error>;

/// An error from a blob operation or a buffer factory.
///
/// Only failures to obtain memory are reported through this type. Misuse such as out-of-range
/// indices or arithmetic overflow is a programming error and panics.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The blob has to grow but has no factory to obtain buffers from.
    #[error("cannot grow blob to {requested} bytes: capacity is {capacity} bytes and there is no buffer factory")]
    NoFactory {
        /// The length that was requested.
        requested: usize,
        /// The total size of the buffers the blob holds.
        capacity: usize,
    },

    /// The buffer factory has handed out all the buffers it is allowed to.
    #[error("buffer factory is exhausted after {allocated} buffers")]
    FactoryExhausted {
        /// Number of buffers the factory allocated before giving up.
        allocated: usize,
    },

    /// The buffer factory returned a buffer without capacity.
    #[error("buffer factory returned an empty buffer")]
    EmptyBuffer,

    /// A structural check found the blob in an inconsistent state.
    #[error("blob invariant violated: {0}")]
    Corrupted(String),
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, std::error::Error);

    #[test]
    fn display_includes_details() {
        let error = Error::NoFactory {
            requested: 10,
            capacity: 4,
        };
        assert_eq!(
            error.to_string(),
            "cannot grow blob to 10 bytes: capacity is 4 bytes and there is no buffer factory"
        );

        let error = Error::FactoryExhausted { allocated: 2 };
        assert_eq!(error.to_string(), "buffer factory is exhausted after 2 buffers");
    }
}
