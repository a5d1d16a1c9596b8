// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Byte-level operations over the data of a [`Blob`], independent of how the data is split
//! into buffers.
//!
//! Positions are offsets into the data of the blob. Positions or ranges beyond the length of
//! the blob are programming errors and panic.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter, Write};

use crate::{Blob, Result};

const BYTES_PER_LINE: usize = 16;

/// Locates the byte at `position`, returning the index of the buffer that holds it and the
/// offset of the byte within that buffer. Empty buffers are never returned.
///
/// # Panics
///
/// Panics if `position` is not less than the length of the blob.
#[must_use]
pub fn find_buffer_index_and_offset(blob: &Blob, position: usize) -> (usize, usize) {
    assert!(
        position < blob.length(),
        "position {position} is out of range for a blob of length {}",
        blob.length()
    );

    let mut start = 0;
    for (index, buffer) in blob.data_buffers().iter().enumerate() {
        let end = start + buffer.size();
        if position < end {
            return (index, position - start);
        }
        start = end;
    }

    unreachable!("data buffers hold every byte of the length");
}

/// Copies `destination.len()` data bytes starting at `position` out of the blob.
///
/// # Panics
///
/// Panics if the range extends past the length of the blob.
pub fn copy_to_slice(blob: &Blob, position: usize, destination: &mut [u8]) {
    assert_in_data(blob, position, destination.len());

    let mut skip = position;
    let mut written = 0;

    for slice in blob.data_slices() {
        if written == destination.len() {
            break;
        }

        if skip >= slice.len() {
            skip -= slice.len();
            continue;
        }

        let available = &slice[skip..];
        skip = 0;

        let count = available.len().min(destination.len() - written);
        destination[written..written + count].copy_from_slice(&available[..count]);
        written += count;
    }
}

/// Returns the `scratch.len()` data bytes starting at `position`.
///
/// If the range lies within one buffer, the returned slice borrows the blob directly. Otherwise
/// the bytes are copied into `scratch`, which is returned.
///
/// # Panics
///
/// Panics if the range extends past the length of the blob.
pub fn contiguous_range_or_copy<'a>(blob: &'a Blob, position: usize, scratch: &'a mut [u8]) -> &'a [u8] {
    let length = scratch.len();
    assert_in_data(blob, position, length);

    if length == 0 {
        return scratch;
    }

    let (index, offset) = find_buffer_index_and_offset(blob, position);
    if let Some(bytes) = blob.buffer(index).as_slice().get(offset..offset + length) {
        return bytes;
    }

    copy_to_slice(blob, position, scratch);
    scratch
}

/// Copies `source` into the data of the blob starting at `position`.
///
/// # Safety
///
/// The buffers of the blob may be shared with other blobs or buffers. The caller must ensure
/// that nothing else reads or writes the overwritten bytes while this function runs.
///
/// # Panics
///
/// Panics if the range extends past the length of the blob.
pub unsafe fn copy_from_slice(blob: &mut Blob, position: usize, source: &[u8]) {
    assert_in_data(blob, position, source.len());

    let end = position + source.len();
    let count = blob.num_data_buffers();
    let mut start = 0;

    for buffer in &mut blob.buffers_mut()[..count] {
        if start >= end {
            break;
        }

        let buffer_end = start + buffer.size();

        if buffer_end > position {
            let from = position.max(start);
            let to = end.min(buffer_end);

            // SAFETY: Forwarded to the caller.
            let bytes = unsafe { buffer.as_mut_slice() };
            bytes[from - start..to - start].copy_from_slice(&source[from - position..to - position]);
        }

        start = buffer_end;
    }
}

/// Grows the blob by `bytes.len()` and writes `bytes` into the new space, obtaining buffers
/// from the factory of the blob as needed.
///
/// # Errors
///
/// Returns an error if the blob cannot grow. The blob is unchanged in that case.
///
/// # Safety
///
/// Same as [`copy_from_slice`]: nothing else may access the written bytes while this function
/// runs. Spare capacity that was handed to the blob by the caller may be shared.
///
/// # Panics
///
/// Panics if the new length would overflow `usize`.
pub unsafe fn append_bytes(blob: &mut Blob, bytes: &[u8]) -> Result<()> {
    let position = blob.length();
    let length = position.checked_add(bytes.len()).expect("blob length overflowed usize");

    blob.set_length(length)?;

    // SAFETY: Forwarded to the caller.
    unsafe {
        copy_from_slice(blob, position, bytes);
    }

    Ok(())
}

/// Largest alignment accepted by [`pad_to_alignment`].
pub const MAX_ALIGNMENT: usize = 64;

/// Appends `length` data bytes of `source`, starting at `position`, to the data of
/// `destination`.
///
/// No bytes are copied. Each source buffer covering the range is shared with `destination` as a
/// new data buffer that views only the bytes inside the range. As with
/// [`Blob::append_data_buffer`], the unused tail of the last data buffer of `destination` is
/// trimmed away first.
///
/// # Panics
///
/// Panics if the range extends past the length of `source`.
pub fn append(destination: &mut Blob, source: &Blob, position: usize, length: usize) {
    assert_in_data(source, position, length);

    let mut skip = position;
    let mut remaining = length;

    for buffer in source.data_buffers() {
        if remaining == 0 {
            break;
        }

        if skip >= buffer.size() {
            skip -= buffer.size();
            continue;
        }

        let mut view = buffer.clone().trim(skip);
        skip = 0;

        let count = view.size().min(remaining);
        _ = view.trim(count);
        remaining -= count;

        destination.append_data_buffer(view);
    }
}

/// Removes `length` data bytes starting at `position`. The data after the range moves up to
/// `position`.
///
/// No bytes are copied. The buffers that hold the remaining data are replaced by views of the
/// same memory that skip the erased range. The unused tail of the last data buffer and the spare
/// capacity of the blob are kept, so the total size drops by `length`.
///
/// # Panics
///
/// Panics if the range extends past the length of the blob.
pub fn erase(blob: &mut Blob, position: usize, length: usize) {
    assert_in_data(blob, position, length);

    if length == 0 {
        return;
    }

    let end = position + length;
    let mut kept = Blob::new();
    append(&mut kept, blob, 0, position);
    append(&mut kept, blob, end, blob.length() - end);

    let tail = blob.trim_last_data_buffer();
    blob.remove_buffers(0, blob.num_data_buffers());
    blob.move_and_append_data_buffers(&mut kept);

    if !tail.is_empty() {
        blob.append_buffer(tail);
    }
}

/// Grows the blob with `fill` bytes until its length is a multiple of `alignment`.
///
/// # Errors
///
/// Returns an error if the blob cannot grow. The blob is unchanged in that case.
///
/// # Safety
///
/// Same as [`copy_from_slice`]: nothing else may access the padding bytes while this function
/// runs.
///
/// # Panics
///
/// Panics if `alignment` is not a power of two or exceeds [`MAX_ALIGNMENT`].
pub unsafe fn pad_to_alignment(blob: &mut Blob, alignment: usize, fill: u8) -> Result<()> {
    assert!(
        alignment.is_power_of_two() && alignment <= MAX_ALIGNMENT,
        "alignment {alignment} is not a power of two up to {MAX_ALIGNMENT}"
    );

    let padding = blob.length().wrapping_neg() & (alignment - 1);
    if padding == 0 {
        return Ok(());
    }

    // SAFETY: Forwarded to the caller.
    unsafe { append_bytes(blob, &[fill; MAX_ALIGNMENT][..padding]) }
}

/// Compares the data of two blobs lexicographically, byte by byte. The way the data is split
/// into buffers does not matter.
#[must_use]
pub fn compare(left: &Blob, right: &Blob) -> Ordering {
    let mut left_slices = left.data_slices().filter(|slice| !slice.is_empty());
    let mut right_slices = right.data_slices().filter(|slice| !slice.is_empty());

    let mut left_bytes = left_slices.next().unwrap_or_default();
    let mut right_bytes = right_slices.next().unwrap_or_default();

    // An empty slice means that side has run out of data.
    while !left_bytes.is_empty() && !right_bytes.is_empty() {
        let count = left_bytes.len().min(right_bytes.len());

        match left_bytes[..count].cmp(&right_bytes[..count]) {
            Ordering::Equal => {}
            unequal => return unequal,
        }

        left_bytes = &left_bytes[count..];
        right_bytes = &right_bytes[count..];

        if left_bytes.is_empty() {
            left_bytes = left_slices.next().unwrap_or_default();
        }
        if right_bytes.is_empty() {
            right_bytes = right_slices.next().unwrap_or_default();
        }
    }

    right_bytes.is_empty().cmp(&left_bytes.is_empty())
}

/// Formats the data of a blob as a hex dump, 16 bytes per line, each line holding the offset,
/// the bytes in hex and the printable ASCII characters among them.
///
/// ```
/// use blobbuf::{Blob, BlobBuffer, blob_util};
///
/// let mut blob = Blob::new();
/// blob.append_data_buffer(BlobBuffer::copied_from_slice(b"Hi!\n"));
///
/// assert_eq!(
///     blob_util::hex_dump(&blob).to_string(),
///     format!("00000000: 48 69 21 0a{}  |Hi!.|\n", " ".repeat(36))
/// );
/// ```
#[must_use]
pub fn hex_dump(blob: &Blob) -> impl Display {
    HexDump { blob }
}

struct HexDump<'a> {
    blob: &'a Blob,
}

impl Display for HexDump<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut line = [0_u8; BYTES_PER_LINE];
        let mut filled = 0;
        let mut offset = 0;

        for &byte in self.blob.data_slices().flatten() {
            line[filled] = byte;
            filled += 1;

            if filled == BYTES_PER_LINE {
                write_line(f, offset, &line)?;
                offset += filled;
                filled = 0;
            }
        }

        if filled > 0 {
            write_line(f, offset, &line[..filled])?;
        }

        Ok(())
    }
}

fn write_line(f: &mut Formatter<'_>, offset: usize, bytes: &[u8]) -> fmt::Result {
    write!(f, "{offset:08x}:")?;

    for byte in bytes {
        write!(f, " {byte:02x}")?;
    }
    for _ in bytes.len()..BYTES_PER_LINE {
        f.write_str("   ")?;
    }

    f.write_str("  |")?;
    for &byte in bytes {
        let printable = byte.is_ascii_graphic() || byte == b' ';
        f.write_char(if printable { char::from(byte) } else { '.' })?;
    }
    f.write_str("|\n")
}

fn assert_in_data(blob: &Blob, position: usize, len: usize) {
    assert!(
        position.checked_add(len).is_some_and(|end| end <= blob.length()),
        "range of {len} bytes at {position} is out of range for a blob of length {}",
        blob.length()
    );
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use new_zealand::nz;
    use testing_aids::{assert_panic, random_partition, repeating_incrementing_bytes};

    use super::*;
    use crate::{BlobBuffer, SimpleBlobBufferFactory};

    fn blob_from_segments(segments: &[&[u8]]) -> Blob {
        let mut blob = Blob::new();
        for segment in segments {
            blob.append_data_buffer(BlobBuffer::copied_from_slice(segment));
        }
        blob
    }

    fn data(blob: &Blob) -> Vec<u8> {
        let mut bytes = vec![0; blob.length()];
        copy_to_slice(blob, 0, &mut bytes);
        bytes
    }

    #[test]
    fn finds_buffer_and_offset() {
        let mut blob = Blob::from_buffers([3, 0, 5].map(BlobBuffer::new), None);
        blob.set_length(8).unwrap();

        assert_eq!(find_buffer_index_and_offset(&blob, 0), (0, 0));
        assert_eq!(find_buffer_index_and_offset(&blob, 2), (0, 2));
        assert_eq!(find_buffer_index_and_offset(&blob, 3), (2, 0));
        assert_eq!(find_buffer_index_and_offset(&blob, 7), (2, 4));
        assert_panic!(_ = find_buffer_index_and_offset(&blob, 8), "out of range");
    }

    #[test]
    fn copy_to_slice_crosses_buffers() {
        let blob = blob_from_segments(&[b"abc", b"", b"defg", b"h"]);

        let mut bytes = [0; 4];
        copy_to_slice(&blob, 2, &mut bytes);
        assert_eq!(&bytes, b"cdef");

        assert_eq!(data(&blob), b"abcdefgh");

        let mut empty: [u8; 0] = [];
        copy_to_slice(&blob, 8, &mut empty);

        let mut too_long = [0; 2];
        assert_panic!(copy_to_slice(&blob, 7, &mut too_long), "out of range");
    }

    #[test]
    fn copy_to_slice_ignores_unused_capacity() {
        let mut blob = blob_from_segments(&[b"abc", b"def"]);
        blob.set_length(4).unwrap();

        assert_eq!(data(&blob), b"abcd");
    }

    #[test]
    fn copy_from_slice_overwrites_data() {
        let mut blob = blob_from_segments(&[b"abc", b"def", b"ghi"]);

        // SAFETY: The buffers of the blob are not shared.
        unsafe {
            copy_from_slice(&mut blob, 2, b"XYZW");
        }

        assert_eq!(data(&blob), b"abXYZWghi");
        assert_panic!(
            // SAFETY: The buffers of the blob are not shared.
            unsafe { copy_from_slice(&mut blob, 8, b"12") },
            "out of range"
        );
    }

    #[test]
    fn append_bytes_grows_through_factory() {
        let factory = Arc::new(SimpleBlobBufferFactory::new(nz!(4)));
        let mut blob = Blob::with_factory(factory);

        // SAFETY: The buffers come straight from the factory and are not shared.
        unsafe {
            append_bytes(&mut blob, b"hello ").unwrap();
            append_bytes(&mut blob, b"world").unwrap();
        }

        assert_eq!(blob.length(), 11);
        assert_eq!(blob.num_buffers(), 3);
        assert_eq!(data(&blob), b"hello world");
    }

    #[test]
    fn append_bytes_without_factory_fails() {
        let mut blob = blob_from_segments(&[b"ab"]);

        // SAFETY: The buffers of the blob are not shared.
        let result = unsafe { append_bytes(&mut blob, b"c") };

        assert!(result.is_err());
        assert_eq!(data(&blob), b"ab");
    }

    fn blob_with_bytes(buffer_size: usize, bytes: &[u8]) -> Blob {
        let mut blob = Blob::with_factory(Arc::new(SimpleBlobBufferFactory::new(buffer_size.try_into().unwrap())));

        // SAFETY: The buffers come straight from the factory and are not shared.
        unsafe { append_bytes(&mut blob, bytes) }.unwrap();
        blob
    }

    #[test]
    fn contiguous_range_borrows_or_copies() {
        let blob = blob_from_segments(&[b"abcd", b"efgh"]);
        let mut scratch = [0; 3];

        let inside = contiguous_range_or_copy(&blob, 1, &mut scratch);
        assert_eq!(inside, b"bcd");
        assert_eq!(inside.as_ptr(), blob.buffer(0).as_slice()[1..].as_ptr());

        let mut scratch = [0; 4];
        let across = contiguous_range_or_copy(&blob, 2, &mut scratch);
        assert_eq!(across, b"cdef");
        assert_eq!(scratch, *b"cdef");

        let mut empty: [u8; 0] = [];
        assert!(contiguous_range_or_copy(&blob, 8, &mut empty).is_empty());

        let mut too_long = [0; 2];
        assert_panic!(_ = contiguous_range_or_copy(&blob, 7, &mut too_long), "out of range");
    }

    #[test]
    fn contiguous_range_ignores_unused_capacity() {
        let mut blob = blob_from_segments(&[b"abcdef", b"gh"]);
        blob.set_length(7).unwrap();

        let mut scratch = [0; 2];
        assert_eq!(contiguous_range_or_copy(&blob, 5, &mut scratch), b"fg");
    }

    #[test]
    fn append_shares_sub_range() {
        let source = blob_from_segments(&[b"abcd", b"efgh", b"ijkl"]);
        let mut destination = blob_from_segments(&[b"XY"]);

        append(&mut destination, &source, 3, 6);

        assert_eq!(data(&destination), b"XYdefghi");
        assert_eq!(destination.num_data_buffers(), 4);
        assert_eq!(destination.total_size(), 8);
        assert!(destination.buffer(1).shares_storage_with(source.buffer(0)));
        assert!(destination.buffer(3).shares_storage_with(source.buffer(2)));
        destination.check_invariants().unwrap();

        assert_eq!(data(&source), b"abcdefghijkl");
    }

    #[test]
    fn append_trims_destination_tail() {
        let source = blob_from_segments(&[b"123"]);
        let mut destination = blob_with_bytes(8, b"ab");
        assert_eq!(destination.total_size(), 8);

        append(&mut destination, &source, 0, 3);

        assert_eq!(data(&destination), b"ab123");
        assert_eq!(destination.total_size(), 5);
        destination.check_invariants().unwrap();
    }

    #[test]
    fn append_empty_range_is_noop() {
        let source = blob_from_segments(&[b"abc"]);
        let mut destination = Blob::new();

        append(&mut destination, &source, 3, 0);

        assert_eq!(destination.num_buffers(), 0);
        assert_panic!(append(&mut destination, &source, 2, 2), "out of range");
    }

    #[test]
    fn erase_matches_removing_bytes() {
        let bytes = b"abcdefghij";

        for buffer_size in 1..=6 {
            for position in 0..=bytes.len() {
                for length in 0..=bytes.len() - position {
                    let mut blob = blob_with_bytes(buffer_size, bytes);
                    let total_size = blob.total_size();

                    erase(&mut blob, position, length);

                    let mut expected = bytes.to_vec();
                    expected.drain(position..position + length);

                    assert_eq!(data(&blob), expected, "size {buffer_size}, erase {length} at {position}");
                    assert_eq!(blob.total_size(), total_size - length);
                    blob.check_invariants().unwrap();
                }
            }
        }
    }

    #[test]
    fn erase_keeps_spare_capacity() {
        let mut blob = blob_with_bytes(4, b"abcdef");
        blob.append_buffer(BlobBuffer::new(4));

        erase(&mut blob, 1, 2);

        assert_eq!(data(&blob), b"adef");
        assert_eq!(blob.total_size(), 10);

        // SAFETY: Only this blob views the memory of its buffers.
        unsafe { append_bytes(&mut blob, b"123456") }.unwrap();
        assert_eq!(data(&blob), b"adef123456");
        assert_eq!(blob.num_buffers(), 5);
    }

    #[test]
    fn erase_nothing_keeps_empty_data_buffer() {
        let mut blob = Blob::new();
        blob.append_data_buffer(BlobBuffer::default());

        erase(&mut blob, 0, 0);

        assert_eq!(blob.length(), 0);
        assert_eq!(blob.num_data_buffers(), 1);
        assert_panic!(erase(&mut blob, 0, 1), "out of range");
    }

    #[test]
    fn pad_to_alignment_fills_to_multiple() {
        let original = [b'z'; 4 + 2 * MAX_ALIGNMENT];

        for buffer_size in [1, 2, 3, 4, 7, 8, 9, 12] {
            for alignment in (0..7).map(|shift| 1 << shift) {
                for length in 0..=4 + 2 * alignment {
                    let mut blob = blob_with_bytes(buffer_size, &original[..length]);

                    // SAFETY: The buffers come straight from the factory and are not shared.
                    unsafe { pad_to_alignment(&mut blob, alignment, b'a') }.unwrap();

                    let padded = length.next_multiple_of(alignment);
                    assert_eq!(blob.length(), padded);

                    let bytes = data(&blob);
                    assert!(bytes[..length].iter().all(|&byte| byte == b'z'));
                    assert!(bytes[length..].iter().all(|&byte| byte == b'a'));
                }
            }
        }
    }

    #[test]
    fn pad_to_alignment_after_empty_data_buffer() {
        let mut blob = Blob::with_factory(Arc::new(SimpleBlobBufferFactory::new(nz!(2))));
        blob.append_data_buffer(BlobBuffer::default());

        // SAFETY: The buffers come straight from the factory and are not shared.
        unsafe { pad_to_alignment(&mut blob, 4, 0) }.unwrap();
        assert_eq!(blob.length(), 0);
        assert_eq!(blob.num_data_buffers(), 1);

        blob.set_length(1).unwrap();
        assert_eq!(blob.num_data_buffers(), 2);

        // SAFETY: The buffers come straight from the factory and are not shared.
        unsafe { pad_to_alignment(&mut blob, 4, 0) }.unwrap();
        assert_eq!(blob.length(), 4);
        assert_eq!(blob.num_data_buffers(), 3);
    }

    #[test]
    fn pad_to_alignment_rejects_bad_alignment() {
        let mut blob = blob_with_bytes(7, b"abc");

        // SAFETY: The buffers come straight from the factory and are not shared.
        unsafe {
            pad_to_alignment(&mut blob, 2, 0).unwrap();
            pad_to_alignment(&mut blob, MAX_ALIGNMENT, 0).unwrap();
        }
        assert_eq!(blob.length(), MAX_ALIGNMENT);

        assert_panic!(
            // SAFETY: The buffers come straight from the factory and are not shared.
            unsafe { pad_to_alignment(&mut blob, 3, 0) },
            "power of two"
        );
        assert_panic!(
            // SAFETY: The buffers come straight from the factory and are not shared.
            unsafe { pad_to_alignment(&mut blob, 2 * MAX_ALIGNMENT, 0) },
            "power of two"
        );
    }

    #[test]
    fn pad_to_alignment_without_factory_fails() {
        let mut blob = blob_from_segments(&[b"abc"]);

        // SAFETY: The buffers of the blob are not shared.
        let result = unsafe { pad_to_alignment(&mut blob, 4, 0) };

        assert!(matches!(result, Err(crate::Error::NoFactory { requested: 4, capacity: 3 })));
        assert_eq!(data(&blob), b"abc");
    }

    #[test]
    fn compare_ignores_segmentation() {
        let whole = blob_from_segments(&[b"abcdef"]);
        let split = blob_from_segments(&[b"ab", b"", b"cde", b"f"]);

        assert_eq!(compare(&whole, &split), Ordering::Equal);
        assert_eq!(compare(&split, &whole), Ordering::Equal);

        let greater = blob_from_segments(&[b"abc", b"deg"]);
        assert_eq!(compare(&whole, &greater), Ordering::Less);
        assert_eq!(compare(&greater, &split), Ordering::Greater);

        let prefix = blob_from_segments(&[b"a", b"bc"]);
        assert_eq!(compare(&prefix, &whole), Ordering::Less);
        assert_eq!(compare(&whole, &prefix), Ordering::Greater);

        assert_eq!(compare(&Blob::new(), &Blob::new()), Ordering::Equal);
        assert_eq!(compare(&Blob::new(), &prefix), Ordering::Less);
    }

    #[test]
    fn random_segmentations_hold_same_data() {
        let bytes = repeating_incrementing_bytes().take(500).collect::<Vec<_>>();
        let whole = blob_from_segments(&[&bytes[..]]);

        for (parts, seed) in (1..=20).zip(0_u64..) {
            let mut blob = Blob::new();
            let mut start = 0;
            for size in random_partition(bytes.len(), parts, seed) {
                blob.append_data_buffer(BlobBuffer::copied_from_slice(&bytes[start..start + size]));
                start += size;
            }

            assert_eq!(compare(&blob, &whole), Ordering::Equal);
            assert_eq!(data(&blob), bytes);

            let (index, offset) = find_buffer_index_and_offset(&blob, 250);
            assert_eq!(blob.buffer(index).as_slice()[offset], bytes[250]);
        }
    }

    #[test]
    fn compare_ignores_unused_capacity() {
        let mut longer = blob_from_segments(&[b"abcz"]);
        longer.set_length(3).unwrap();

        let shorter = blob_from_segments(&[b"ab", b"c"]);

        assert_eq!(compare(&longer, &shorter), Ordering::Equal);
    }

    #[test]
    fn hex_dump_formats_lines() {
        let blob = blob_from_segments(&[b"0123456789", b"abcdef\n!"]);

        let expected = format!(
            "00000000: 30 31 32 33 34 35 36 37 38 39 61 62 63 64 65 66  |0123456789abcdef|\n\
             00000010: 0a 21{}  |.!|\n",
            " ".repeat(42)
        );

        assert_eq!(hex_dump(&blob).to_string(), expected);
        assert_eq!(hex_dump(&Blob::new()).to_string(), "");
    }

    #[test]
    fn hex_dump_line_count() {
        let bytes = repeating_incrementing_bytes().take(100).collect::<Vec<_>>();
        let blob = blob_from_segments(&[&bytes[..33], &bytes[33..]]);

        let dump = hex_dump(&blob).to_string();

        assert_eq!(dump.lines().count(), 7);
        assert!(dump.lines().last().unwrap().starts_with("00000060: 60 61 62 63  "));
    }
}
