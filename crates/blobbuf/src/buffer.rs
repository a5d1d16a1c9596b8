// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::cell::UnsafeCell;
use std::fmt::{self, Debug, Formatter};
use std::iter;
use std::ptr::{self, NonNull};
use std::slice;
use std::sync::Arc;

/// The memory behind one or more [`BlobBuffer`] views.
struct Storage {
    /// Individual bytes may be written through any view that covers them, so the bytes are
    /// interior-mutable from the point of view of the shared `Arc`.
    bytes: Box<[UnsafeCell<u8>]>,
}

// SAFETY: Writes only happen through `BlobBuffer::as_mut_slice()`, whose contract requires the
// caller to ensure that no other access to the same bytes happens concurrently, or through
// `BlobBuffer::try_as_mut_slice()`, which requires the storage to be exclusively owned.
// Everything else about the storage is immutable after creation.
unsafe impl Sync for Storage {}

impl Storage {
    fn zeroed(len: usize) -> Self {
        Self {
            bytes: iter::repeat_with(|| UnsafeCell::new(0)).take(len).collect(),
        }
    }

    fn copied_from(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.iter().copied().map(UnsafeCell::new).collect(),
        }
    }

    fn len(&self) -> usize {
        self.bytes.len()
    }

    fn base(&self) -> *mut u8 {
        UnsafeCell::raw_get(self.bytes.as_ptr())
    }
}

impl Debug for Storage {
    #[cfg_attr(test, mutants::skip)] // Diagnostic output only.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage").field("len", &self.len()).finish()
    }
}

/// A view over a fixed-size region of shared, reference-counted memory.
///
/// Cloning a buffer creates another view of the same memory, and [`trim`][Self::trim] splits
/// one view into two adjacent views. The memory is released when the last view is dropped.
///
/// Two buffers compare equal when they view the same region of the same memory, not when their
/// contents are equal.
///
/// # Thread safety
///
/// Buffers are `Send` and `Sync`. Reading through one view while another view writes to the
/// same bytes is prevented by the safety contract of [`as_mut_slice`][Self::as_mut_slice].
#[derive(Clone, Debug, Default)]
pub struct BlobBuffer {
    storage: Option<Arc<Storage>>,
    offset: usize,
    size: usize,
}

impl BlobBuffer {
    /// Allocates a zero-filled buffer of `size` bytes.
    #[must_use]
    pub fn new(size: usize) -> Self {
        if size == 0 {
            return Self::default();
        }

        Self {
            storage: Some(Arc::new(Storage::zeroed(size))),
            offset: 0,
            size,
        }
    }

    /// Allocates a buffer holding a copy of `bytes`.
    #[must_use]
    pub fn copied_from_slice(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::default();
        }

        Self {
            storage: Some(Arc::new(Storage::copied_from(bytes))),
            offset: 0,
            size: bytes.len(),
        }
    }

    /// The number of bytes this buffer views.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Whether the buffer views no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Address of the first byte of the buffer. Dangling for empty buffers without memory.
    #[must_use]
    pub fn as_ptr(&self) -> *const u8 {
        self.data_ptr().cast_const()
    }

    /// The bytes of the buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: The pointer is valid for `size` bytes because views never extend past the end
        // of their storage, and every byte was initialized when the storage was created.
        // Concurrent writes to these bytes are excluded by the contract of `as_mut_slice()`.
        unsafe { slice::from_raw_parts(self.data_ptr(), self.size) }
    }

    /// The bytes of the buffer for writing, if no other view of the same memory exists.
    #[must_use]
    pub fn try_as_mut_slice(&mut self) -> Option<&mut [u8]> {
        if let Some(storage) = &mut self.storage
            && Arc::get_mut(storage).is_none()
        {
            return None;
        }

        // SAFETY: This view is the only holder of the storage (or there is no storage and the
        // slice is empty) and we hold the view exclusively, so nothing else can access the
        // bytes for the lifetime of the returned slice.
        Some(unsafe { slice::from_raw_parts_mut(self.data_ptr(), self.size) })
    }

    /// The bytes of the buffer for writing.
    ///
    /// # Safety
    ///
    /// Other views (clones or trimmed remainders) may cover the same memory. The caller must
    /// ensure that, for as long as the returned slice is alive, no other view reads or writes
    /// any of the bytes it covers.
    #[must_use]
    pub unsafe fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: The pointer is valid for `size` initialized bytes and the caller guarantees
        // that nothing else accesses them while the slice is alive.
        unsafe { slice::from_raw_parts_mut(self.data_ptr(), self.size) }
    }

    /// Shrinks this buffer to its first `to_size` bytes and returns a buffer viewing the rest of
    /// the memory. Both views share ownership of the memory.
    ///
    /// # Panics
    ///
    /// Panics if `to_size` is greater than the size of the buffer.
    #[must_use = "the remainder is the only way to reach the trimmed bytes"]
    pub fn trim(&mut self, to_size: usize) -> Self {
        assert!(
            to_size <= self.size,
            "cannot trim a buffer of {} bytes to {to_size} bytes",
            self.size
        );

        let remainder_size = self.size - to_size;
        self.size = to_size;

        if remainder_size == 0 {
            return Self::default();
        }

        Self {
            storage: self.storage.clone(),
            offset: self.offset + to_size,
            size: remainder_size,
        }
    }

    /// Releases this view of the memory, leaving an empty buffer.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether both buffers are views of the same memory.
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        match (&self.storage, &other.storage) {
            (Some(ours), Some(theirs)) => Arc::ptr_eq(ours, theirs),
            _ => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn holders(&self) -> usize {
        self.storage.as_ref().map_or(0, Arc::strong_count)
    }

    fn data_ptr(&self) -> *mut u8 {
        match &self.storage {
            None => NonNull::dangling().as_ptr(),
            Some(storage) => {
                debug_assert!(self.offset + self.size <= storage.len());
                storage.base().wrapping_add(self.offset)
            }
        }
    }
}

impl PartialEq for BlobBuffer {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.as_ptr(), other.as_ptr()) && self.size == other.size
    }
}

impl Eq for BlobBuffer {}
