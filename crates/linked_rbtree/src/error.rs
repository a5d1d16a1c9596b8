// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

/// A specialized `Result` type for tree and node pool operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the tree and its node pool.
///
/// Only collaborator failures are reported through this type. Misuse of the API, such as
/// passing a handle to a node that has already been removed, is a programming error and
/// results in a panic.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The node pool has no room for more nodes.
    #[error("node pool is exhausted: {live} live nodes, limit is {limit}")]
    PoolExhausted {
        /// Number of nodes alive in the pool when the request was made.
        live: usize,
        /// Maximum number of nodes the pool will hold.
        limit: usize,
    },

    /// A structural check found the tree in an inconsistent state.
    #[error("tree invariant violated: {0}")]
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
        let error = Error::PoolExhausted { live: 3, limit: 3 };
        assert_eq!(error.to_string(), "node pool is exhausted: 3 live nodes, limit is 3");

        let error = Error::Corrupted("root is red".to_string());
        assert_eq!(error.to_string(), "tree invariant violated: root is red");
    }
}
