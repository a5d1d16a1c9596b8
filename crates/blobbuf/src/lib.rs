// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Segmented byte sequences over shared fixed-size buffers.
//!
//! A [`Blob`] holds its bytes in a list of [`BlobBuffer`]s. Each buffer is a view over
//! reference-counted memory, so buffers can be passed between blobs, split with
//! [`BlobBuffer::trim`] and shared without copying any bytes. The memory is released when the
//! last view of it is dropped.
//!
//! A blob tracks which of its buffers hold data and how much of the last one is used. The
//! buffers after that are spare capacity. When a blob needs more capacity, it asks its
//! [`BlobBufferFactory`] for buffers. [`SimpleBlobBufferFactory`] allocates buffers of one
//! fixed size and can be bounded to a maximum number of buffers.
//!
//! ```
//! use std::sync::Arc;
//!
//! use blobbuf::{Blob, BlobBuffer, SimpleBlobBufferFactory, blob_util};
//! use new_zealand::nz;
//!
//! let mut blob = Blob::with_factory(Arc::new(SimpleBlobBufferFactory::new(nz!(4))));
//!
//! // SAFETY: The blob does not share its buffers with anything else.
//! unsafe { blob_util::append_bytes(&mut blob, b"hello world") }.unwrap();
//! assert_eq!(blob.num_buffers(), 3);
//!
//! let mut hello = [0; 5];
//! blob_util::copy_to_slice(&blob, 0, &mut hello);
//! assert_eq!(&hello, b"hello");
//!
//! // Buffers move between blobs without copying.
//! let mut other = Blob::new();
//! other.move_data_buffers(&mut blob);
//! assert_eq!(other.length(), 11);
//! assert_eq!(blob.length(), 0);
//! ```
//!
//! [`blob_util`] holds byte-level operations that do not care how the data is split into
//! buffers. Among them are copying in and out, sharing or erasing ranges without copying, padding,
//! comparison and hex dumps.
//!
//! # Thread safety
//!
//! Blobs and buffers are `Send` and `Sync` but have no internal synchronization. Writing to
//! memory that is shared between buffers is `unsafe` and the caller is responsible for making
//! sure that no two holders access the same bytes concurrently.

mod blob;
pub mod blob_util;
mod buffer;
mod error;
mod factory;

pub use blob::Blob;
pub use buffer::BlobBuffer;
pub use error::{Error, Result};
pub use factory::{
    BlobBufferFactory, DEFAULT_BUFFER_SIZE, SimpleBlobBufferFactory, SimpleBlobBufferFactoryBuilder,
};
