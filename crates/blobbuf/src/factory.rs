// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::Debug;
use std::num::NonZero;
use std::sync::atomic::{AtomicUsize, Ordering};

use new_zealand::nz;

use crate::{BlobBuffer, Error, Result};

/// Buffer size used by [`SimpleBlobBufferFactory`] unless configured otherwise.
pub const DEFAULT_BUFFER_SIZE: NonZero<usize> = nz!(4096);

/// Source of the buffers a [`Blob`][crate::Blob] allocates when it has to grow.
///
/// A factory is shared by the blobs that use it, so it has to be thread-safe.
#[cfg_attr(test, mockall::automock)]
pub trait BlobBufferFactory: Debug + Send + Sync {
    /// Allocates a new buffer with a nonzero size.
    ///
    /// # Errors
    ///
    /// Returns an error if no buffer can be allocated.
    fn allocate(&self) -> Result<BlobBuffer>;
}

/// A [`BlobBufferFactory`] that allocates zero-filled buffers of one fixed size.
///
/// # Examples
///
/// ```
/// use blobbuf::{BlobBufferFactory, SimpleBlobBufferFactory};
/// use new_zealand::nz;
///
/// let factory = SimpleBlobBufferFactory::builder()
///     .with_buffer_size(nz!(512))
///     .with_allocation_limit(1)
///     .build();
///
/// assert_eq!(factory.allocate().unwrap().size(), 512);
/// assert!(factory.allocate().is_err());
/// ```
#[derive(Debug)]
pub struct SimpleBlobBufferFactory {
    buffer_size: NonZero<usize>,
    allocation_limit: Option<usize>,
    allocated: AtomicUsize,
}

impl SimpleBlobBufferFactory {
    /// Creates an unbounded factory of buffers with `buffer_size` bytes.
    #[must_use]
    pub fn new(buffer_size: NonZero<usize>) -> Self {
        Self::builder().with_buffer_size(buffer_size).build()
    }

    /// Returns a builder for configuring a factory.
    pub fn builder() -> SimpleBlobBufferFactoryBuilder {
        SimpleBlobBufferFactoryBuilder::new()
    }

    /// Size of the buffers this factory allocates.
    #[must_use]
    pub const fn buffer_size(&self) -> NonZero<usize> {
        self.buffer_size
    }

    /// Number of buffers allocated so far.
    #[must_use]
    pub fn allocated(&self) -> usize {
        self.allocated.load(Ordering::Relaxed)
    }
}

impl Default for SimpleBlobBufferFactory {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_SIZE)
    }
}

impl BlobBufferFactory for SimpleBlobBufferFactory {
    fn allocate(&self) -> Result<BlobBuffer> {
        let limit = self.allocation_limit.unwrap_or(usize::MAX);

        self.allocated
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |allocated| {
                (allocated < limit).then_some(allocated + 1)
            })
            .map_err(|allocated| Error::FactoryExhausted { allocated })?;

        Ok(BlobBuffer::new(self.buffer_size.get()))
    }
}

/// Configures a [`SimpleBlobBufferFactory`].
#[derive(Clone, Debug)]
#[must_use]
pub struct SimpleBlobBufferFactoryBuilder {
    buffer_size: NonZero<usize>,
    allocation_limit: Option<usize>,
}

impl SimpleBlobBufferFactoryBuilder {
    const fn new() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            allocation_limit: None,
        }
    }

    /// Sets the size of every allocated buffer. Defaults to [`DEFAULT_BUFFER_SIZE`].
    pub const fn with_buffer_size(mut self, buffer_size: NonZero<usize>) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Limits the total number of buffers the factory hands out. Requests beyond the limit fail
    /// with [`Error::FactoryExhausted`].
    pub const fn with_allocation_limit(mut self, limit: usize) -> Self {
        self.allocation_limit = Some(limit);
        self
    }

    /// Creates the factory.
    #[must_use]
    pub fn build(self) -> SimpleBlobBufferFactory {
        SimpleBlobBufferFactory {
            buffer_size: self.buffer_size,
            allocation_limit: self.allocation_limit,
            allocated: AtomicUsize::new(0),
        }
    }
}
