// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::mem;
use std::sync::Arc;

use nm::{Event, Magnitude};
use tracing::{Level, event};

use crate::{BlobBuffer, BlobBufferFactory, Error, Result};

const ERR_SIZE_OVERFLOW: &str = "blob size arithmetic overflowed usize";
const ERR_NOT_DATA_BUFFER: &str = "buffer index is past the last data buffer";
const ERR_REPLACEMENT_TOO_SMALL: &str = "replacement buffer is smaller than the data held in the last data buffer";

/// A byte sequence stored in a list of [`BlobBuffer`]s.
///
/// The buffers of a blob are split into two regions. The data buffers come first and hold the
/// [`length`][Self::length] bytes of the blob, with the last data buffer possibly only partially
/// used. Any buffers after them are spare capacity that [`set_length`][Self::set_length] can
/// grow into without allocating. When a blob needs more capacity than it holds, it requests
/// buffers from its [`BlobBufferFactory`].
///
/// Buffers are shared, not copied: cloning a blob or passing a buffer to several blobs creates
/// more views of the same memory.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use blobbuf::{Blob, BlobBuffer, SimpleBlobBufferFactory};
/// use new_zealand::nz;
///
/// let mut blob = Blob::with_factory(Arc::new(SimpleBlobBufferFactory::new(nz!(64))));
///
/// blob.set_length(100).unwrap();
/// assert_eq!(blob.length(), 100);
/// assert_eq!(blob.total_size(), 128);
/// assert_eq!(blob.num_data_buffers(), 2);
///
/// // Appending a data buffer first trims away the unused tail of the last data buffer.
/// blob.append_data_buffer(BlobBuffer::new(10));
/// assert_eq!(blob.length(), 110);
/// assert_eq!(blob.total_size(), 110);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Blob {
    buffers: Vec<BlobBuffer>,

    // Sum of the sizes of all buffers.
    total_size: usize,

    // Number of bytes in the data buffers that hold data. Counted from the start of buffer 0.
    data_length: usize,

    // Index of the last data buffer, `None` when the blob has no data buffers.
    data_index: Option<usize>,

    // Sum of the sizes of the data buffers before `data_index`.
    pre_data_index_length: usize,

    factory: Option<Arc<dyn BlobBufferFactory>>,
}

impl Blob {
    /// Creates an empty blob without a factory. Such a blob can only grow by having buffers
    /// added to it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty blob that requests buffers from `factory` when it has to grow.
    #[must_use]
    pub fn with_factory(factory: Arc<dyn BlobBufferFactory>) -> Self {
        Self {
            factory: Some(factory),
            ..Self::default()
        }
    }

    /// Creates a blob of length zero with `buffers` as its capacity.
    #[must_use]
    pub fn from_buffers(
        buffers: impl IntoIterator<Item = BlobBuffer>,
        factory: Option<Arc<dyn BlobBufferFactory>>,
    ) -> Self {
        let mut blob = Self {
            factory,
            ..Self::default()
        };

        for buffer in buffers {
            blob.append_buffer(buffer);
        }

        blob
    }

    /// The number of data bytes in the blob.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.data_length
    }

    /// The combined size of all buffers, including spare capacity.
    #[must_use]
    pub const fn total_size(&self) -> usize {
        self.total_size
    }

    /// The number of buffers, including spare capacity.
    #[must_use]
    pub fn num_buffers(&self) -> usize {
        self.buffers.len()
    }

    /// The number of buffers up to and including the last data buffer.
    #[must_use]
    pub fn num_data_buffers(&self) -> usize {
        self.data_index.map_or(0, |index| index + 1)
    }

    /// The number of data bytes in the last data buffer.
    #[must_use]
    pub const fn last_data_buffer_length(&self) -> usize {
        self.data_length - self.pre_data_index_length
    }

    /// The buffer at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn buffer(&self, index: usize) -> &BlobBuffer {
        &self.buffers[index]
    }

    /// All buffers, including spare capacity.
    #[must_use]
    pub fn buffers(&self) -> &[BlobBuffer] {
        &self.buffers
    }

    /// The buffers up to and including the last data buffer.
    #[must_use]
    pub fn data_buffers(&self) -> &[BlobBuffer] {
        &self.buffers[..self.num_data_buffers()]
    }

    /// The data bytes of the blob, one slice per data buffer.
    pub fn data_slices(&self) -> impl Iterator<Item = &[u8]> {
        let mut remaining = self.data_length;

        self.data_buffers().iter().map(move |buffer| {
            let used = remaining.min(buffer.size());
            remaining -= used;
            &buffer.as_slice()[..used]
        })
    }

    /// The factory the blob grows with, if any.
    #[must_use]
    pub fn factory(&self) -> Option<&Arc<dyn BlobBufferFactory>> {
        self.factory.as_ref()
    }

    pub(crate) fn buffers_mut(&mut self) -> &mut [BlobBuffer] {
        &mut self.buffers
    }

    /// Adds `buffer` to the end of the blob as spare capacity. The length does not change.
    pub fn append_buffer(&mut self, buffer: BlobBuffer) {
        self.total_size = add_size(self.total_size, buffer.size());
        self.buffers.push(buffer);

        self.debug_check_invariants();
    }

    /// Adds `buffer` right after the last data buffer and extends the length to cover all of it.
    ///
    /// If the last data buffer is only partially used, its unused tail is trimmed away first so
    /// that the data stays contiguous. Spare capacity after the data buffers is kept.
    pub fn append_data_buffer(&mut self, buffer: BlobBuffer) {
        self.discard_unused_tail();

        let size = buffer.size();
        let index = self.num_data_buffers();
        self.buffers.insert(index, buffer);

        self.total_size = add_size(self.total_size, size);
        self.pre_data_index_length = self.data_length;
        self.data_length = add_size(self.data_length, size);
        self.data_index = Some(index);

        self.debug_check_invariants();
    }

    /// Adds `buffer` to the start of the blob and extends the length to cover all of it.
    pub fn prepend_data_buffer(&mut self, buffer: BlobBuffer) {
        let size = buffer.size();
        self.buffers.insert(0, buffer);

        self.total_size = add_size(self.total_size, size);
        self.data_length = add_size(self.data_length, size);

        match self.data_index {
            None => {
                self.data_index = Some(0);
                self.pre_data_index_length = 0;
            }
            Some(index) => {
                self.data_index = Some(index + 1);
                self.pre_data_index_length = add_size(self.pre_data_index_length, size);
            }
        }

        self.debug_check_invariants();
    }

    /// Inserts `buffer` at `index`.
    ///
    /// A buffer inserted at or before the last data buffer becomes a data buffer and the length
    /// grows by its size. A buffer inserted after it is spare capacity.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than the number of buffers.
    pub fn insert_buffer(&mut self, index: usize, buffer: BlobBuffer) {
        let size = buffer.size();
        self.buffers.insert(index, buffer);
        self.total_size = add_size(self.total_size, size);

        if let Some(data_index) = self.data_index
            && index <= data_index
        {
            self.data_length = add_size(self.data_length, size);
            self.pre_data_index_length = add_size(self.pre_data_index_length, size);
            self.data_index = Some(data_index + 1);
        }

        self.debug_check_invariants();
    }

    /// Removes the buffer at `index`. See [`remove_buffers`][Self::remove_buffers].
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn remove_buffer(&mut self, index: usize) {
        self.remove_buffers(index, 1);
    }

    /// Removes `count` buffers starting at `index`.
    ///
    /// Removing data buffers shortens the blob by their full size. If the last data buffer is
    /// removed, the data ends with the last remaining buffer before `index`.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds.
    pub fn remove_buffers(&mut self, index: usize, count: usize) {
        let len = self.buffers.len();
        assert!(
            index <= len && count <= len - index,
            "cannot remove {count} buffers at index {index} from a blob with {len} buffers"
        );

        let mut total_size = self.total_size;
        let mut data_length = self.data_length;
        let mut pre_data_index_length = self.pre_data_index_length;
        let mut data_index = self.data_index;

        for (position, buffer) in self.buffers[index..index + count].iter().enumerate() {
            let size = buffer.size();
            total_size -= size;

            // Compare old indices against the old data index.
            match self.data_index {
                Some(old_data_index) if index + position < old_data_index => {
                    data_length -= size;
                    pre_data_index_length -= size;
                    data_index = data_index.map(|data_index| data_index - 1);
                }
                Some(old_data_index) if index + position == old_data_index => {
                    // Buffers before `index` are all full data buffers.
                    data_length = pre_data_index_length;
                    data_index = index.checked_sub(1);
                    pre_data_index_length = data_index
                        .map_or(0, |last| pre_data_index_length - self.buffers[last].size());
                }
                _ => {}
            }
        }

        self.buffers.drain(index..index + count);

        self.total_size = total_size;
        self.data_length = data_length;
        self.pre_data_index_length = pre_data_index_length;
        self.data_index = data_index;

        self.debug_check_invariants();
    }

    /// Removes every buffer. The factory is kept.
    pub fn remove_all(&mut self) {
        self.buffers.clear();
        self.total_size = 0;
        self.reset_data();

        self.debug_check_invariants();
    }

    /// Removes the spare capacity buffers after the last data buffer. The last data buffer is
    /// kept whole, even if only partially used.
    pub fn remove_unused_buffers(&mut self) {
        self.buffers.truncate(self.num_data_buffers());
        self.total_size = self
            .data_index
            .map_or(0, |index| self.pre_data_index_length + self.buffers[index].size());

        self.debug_check_invariants();
    }

    /// Sets the number of data bytes in the blob.
    ///
    /// Shrinking only moves the end of the data, the buffers stay in the blob as capacity.
    /// Growing past the total size requests buffers from the factory. Setting the current
    /// length does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoFactory`] if the blob has to grow but has no factory, and the
    /// factory's error if it fails to allocate. The blob is unchanged in both cases.
    pub fn set_length(&mut self, length: usize) -> Result<()> {
        if length == self.data_length {
            return Ok(());
        }

        if let Some(index) = self.data_index
            && length > self.pre_data_index_length
            && length - self.pre_data_index_length <= self.buffers[index].size()
        {
            self.data_length = length;
            return Ok(());
        }

        self.set_length_slow(length)
    }

    fn set_length_slow(&mut self, length: usize) -> Result<()> {
        if length == 0 {
            self.reset_data();
            return Ok(());
        }

        if length > self.total_size {
            for buffer in self.allocate_capacity(length)? {
                self.append_buffer(buffer);
            }
        }

        let mut index = self.data_index.unwrap_or(0);
        let mut pre_data_index_length = self.pre_data_index_length;

        while length > pre_data_index_length + self.buffers[index].size() {
            pre_data_index_length += self.buffers[index].size();
            index += 1;
        }

        while length <= pre_data_index_length {
            index -= 1;
            pre_data_index_length -= self.buffers[index].size();
        }

        self.data_length = length;
        self.data_index = Some(index);
        self.pre_data_index_length = pre_data_index_length;

        self.debug_check_invariants();
        Ok(())
    }

    /// Obtains enough buffers from the factory for the total size to reach `length`, without
    /// touching the blob.
    fn allocate_capacity(&self, length: usize) -> Result<Vec<BlobBuffer>> {
        let Some(factory) = &self.factory else {
            return Err(Error::NoFactory {
                requested: length,
                capacity: self.total_size,
            });
        };

        let mut buffers = Vec::new();
        let mut capacity = self.total_size;

        while capacity < length {
            let buffer = factory.allocate().inspect_err(|error| {
                event!(
                    Level::DEBUG,
                    message = "buffer factory failed",
                    requested = length,
                    error = %error
                );
            })?;

            if buffer.is_empty() {
                return Err(Error::EmptyBuffer);
            }

            capacity = add_size(capacity, buffer.size());
            buffers.push(buffer);
        }

        FACTORY_BUFFERS.with(|e| e.observe(buffers.len()));
        event!(
            Level::TRACE,
            message = "allocated buffers from factory",
            buffers = buffers.len(),
            capacity
        );

        Ok(buffers)
    }

    /// Replaces the data buffer at `index` with `buffer` and returns the old buffer.
    ///
    /// The length changes by the difference in size. For the last data buffer, the unused tail
    /// is assumed to stay the same size.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a data buffer index, or if `buffer` cannot hold the data of the
    /// last data buffer it replaces.
    pub fn replace_data_buffer(&mut self, index: usize, buffer: BlobBuffer) -> BlobBuffer {
        let data_index = self.data_index.filter(|data_index| index <= *data_index).expect(ERR_NOT_DATA_BUFFER);

        let old_size = self.buffers[index].size();
        let new_size = buffer.size();

        if index < data_index {
            self.pre_data_index_length = add_size(self.pre_data_index_length - old_size, new_size);
            self.data_length = add_size(self.data_length - old_size, new_size);
        } else {
            let used = add_size(self.last_data_buffer_length(), new_size)
                .checked_sub(old_size)
                .expect(ERR_REPLACEMENT_TOO_SMALL);
            self.data_length = add_size(self.pre_data_index_length, used);
        }

        self.total_size = add_size(self.total_size - old_size, new_size);
        let old = mem::replace(&mut self.buffers[index], buffer);

        self.debug_check_invariants();
        old
    }

    /// Shrinks the last data buffer to the bytes it holds and returns a buffer viewing its
    /// unused tail. The total size drops by the size of the returned buffer.
    ///
    /// Returns an empty buffer and leaves the blob unchanged if the blob has no data.
    #[must_use = "the unused tail is the only reference to those bytes"]
    pub fn trim_last_data_buffer(&mut self) -> BlobBuffer {
        if self.data_length == 0 {
            return BlobBuffer::default();
        }

        let tail = self.split_unused_tail();

        self.debug_check_invariants();
        tail
    }

    fn split_unused_tail(&mut self) -> BlobBuffer {
        let Some(index) = self.data_index else {
            return BlobBuffer::default();
        };

        let used = self.last_data_buffer_length();
        let tail = self.buffers[index].trim(used);
        self.total_size -= tail.size();
        tail
    }

    fn discard_unused_tail(&mut self) {
        let tail = self.split_unused_tail();

        if !tail.is_empty() {
            TRIMMED_BYTES.with(|e| e.observe(tail.size()));
            event!(Level::TRACE, message = "trimmed last data buffer", bytes = tail.size());
        }
    }

    /// Moves all buffers of `source` into this blob, replacing the buffers this blob had.
    /// `source` is left empty. Each blob keeps its own factory.
    pub fn move_buffers(&mut self, source: &mut Self) {
        self.buffers = mem::take(&mut source.buffers);
        self.total_size = mem::take(&mut source.total_size);
        self.data_length = mem::take(&mut source.data_length);
        self.data_index = source.data_index.take();
        self.pre_data_index_length = mem::take(&mut source.pre_data_index_length);

        self.debug_check_invariants();
        source.debug_check_invariants();
    }

    /// Moves the data buffers of `source` into this blob, replacing the buffers this blob had.
    /// `source` keeps its spare capacity and ends up with length zero.
    pub fn move_data_buffers(&mut self, source: &mut Self) {
        let capacity = source.buffers.split_off(source.num_data_buffers());
        self.buffers = mem::replace(&mut source.buffers, capacity);

        self.total_size = self.buffers.iter().map(BlobBuffer::size).sum();
        self.data_length = source.data_length;
        self.data_index = source.data_index;
        self.pre_data_index_length = source.pre_data_index_length;

        source.total_size -= self.total_size;
        source.reset_data();

        self.debug_check_invariants();
        source.debug_check_invariants();
    }

    /// Moves the data buffers of `source` to the end of the data in this blob.
    ///
    /// Like [`append_data_buffer`][Self::append_data_buffer], the unused tail of the last data
    /// buffer of this blob is trimmed away first. This blob keeps its spare capacity after the
    /// moved buffers. `source` keeps its spare capacity and ends up with length zero.
    pub fn move_and_append_data_buffers(&mut self, source: &mut Self) {
        let count = source.num_data_buffers();
        if count == 0 {
            return;
        }

        self.discard_unused_tail();

        let at = self.num_data_buffers();
        let moved = source.buffers.drain(..count).collect::<Vec<_>>();
        let moved_size: usize = moved.iter().map(BlobBuffer::size).sum();
        self.buffers.splice(at..at, moved);

        let source_data_index = source.data_index.expect("source has data buffers");
        self.data_index = Some(at + source_data_index);
        self.pre_data_index_length = add_size(self.data_length, source.pre_data_index_length);
        self.data_length = add_size(self.data_length, source.data_length);
        self.total_size = add_size(self.total_size, moved_size);

        source.total_size -= moved_size;
        source.reset_data();

        self.debug_check_invariants();
        source.debug_check_invariants();
    }

    /// Exchanges the complete state of two blobs, including their factories.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Exchanges the buffer at `index` with `buffer`. The length is not touched.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or the buffers differ in size.
    pub fn swap_buffer_raw(&mut self, index: usize, buffer: &mut BlobBuffer) {
        let current = &mut self.buffers[index];
        assert_eq!(current.size(), buffer.size(), "can only swap buffers of equal size");

        mem::swap(current, buffer);
    }

    /// Verifies that the recorded sizes and indices agree with the buffers.
    ///
    /// Debug builds check the relations between the recorded fields after every operation that
    /// changes the buffers. This method also sums the buffer sizes, so it takes linear time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Corrupted`] describing the first inconsistency found.
    pub fn check_invariants(&self) -> Result<()> {
        let total_size = self
            .buffers
            .iter()
            .try_fold(0_usize, |sum, buffer| sum.checked_add(buffer.size()))
            .ok_or_else(|| corrupted("buffer sizes overflow usize".to_string()))?;

        if total_size != self.total_size {
            return Err(corrupted(format!(
                "total size is {} but the buffers hold {total_size} bytes",
                self.total_size
            )));
        }

        self.check_recorded_fields()?;

        if let Some(data_index) = self.data_index {
            let preceding: usize = self.buffers[..data_index].iter().map(BlobBuffer::size).sum();
            if preceding != self.pre_data_index_length {
                return Err(corrupted(format!(
                    "{} bytes are recorded before the last data buffer but the buffers hold {preceding}",
                    self.pre_data_index_length
                )));
            }
        }

        Ok(())
    }

    /// The checks that need no walk over the buffers.
    fn check_recorded_fields(&self) -> Result<()> {
        if self.data_length > self.total_size {
            return Err(corrupted(format!(
                "length {} exceeds total size {}",
                self.data_length, self.total_size
            )));
        }

        if self.pre_data_index_length > self.data_length {
            return Err(corrupted(format!(
                "{} bytes precede the last data buffer but the length is {}",
                self.pre_data_index_length, self.data_length
            )));
        }

        let Some(data_index) = self.data_index else {
            if self.data_length != 0 || self.pre_data_index_length != 0 {
                return Err(corrupted(format!("length is {} without any data buffer", self.data_length)));
            }

            return Ok(());
        };

        let Some(last) = self.buffers.get(data_index) else {
            return Err(corrupted(format!(
                "data index {data_index} is out of range for {} buffers",
                self.buffers.len()
            )));
        };

        if self.last_data_buffer_length() > last.size() {
            return Err(corrupted(format!(
                "last data buffer holds {} bytes of data but its size is {}",
                self.last_data_buffer_length(),
                last.size()
            )));
        }

        Ok(())
    }

    fn reset_data(&mut self) {
        self.data_length = 0;
        self.data_index = None;
        self.pre_data_index_length = 0;
    }

    #[cfg_attr(test, mutants::skip)] // Only active in debug builds, tests call the check directly.
    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(error) = self.check_recorded_fields()
        {
            unreachable!("{error}");
        }
    }
}

impl PartialEq for Blob {
    fn eq(&self, other: &Self) -> bool {
        self.data_length == other.data_length && self.buffers == other.buffers
    }
}

impl Eq for Blob {}

fn add_size(size: usize, increment: usize) -> usize {
    size.checked_add(increment).expect(ERR_SIZE_OVERFLOW)
}

fn corrupted(message: String) -> Error {
    Error::Corrupted(message)
}

const TRIMMED_BYTES_BUCKETS: &[Magnitude] = &[0, 1, 16, 256, 4096, 65_536];

const FACTORY_BUFFERS_BUCKETS: &[Magnitude] = &[1, 2, 4, 8, 16, 64, 256];

thread_local! {
    static TRIMMED_BYTES: Event = Event::builder()
        .name("blobbuf_trimmed_bytes")
        .histogram(TRIMMED_BYTES_BUCKETS)
        .build();

    static FACTORY_BUFFERS: Event = Event::builder()
        .name("blobbuf_factory_buffers")
        .histogram(FACTORY_BUFFERS_BUCKETS)
        .build();
}
