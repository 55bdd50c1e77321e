/*
 * Copyright (C) 2022 taylor.fish <contact@taylor.fish>
 *
 * This file is part of base85.
 *
 * base85 is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * base85 is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with base85. If not, see <https://www.gnu.org/licenses/>.
 */

//! Functions for encoding binary data as base-85 text.

use super::alphabet;
use super::size::{padded_encoded_size, unpadded_encoded_size};
use super::Digit;
use super::{BASE, BYTES_PER_CHUNK, DIGITS_PER_CHUNK};

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

/// Used by the `*_with` functions to configure the encoding process.
#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct EncodeConfig {
    /// Whether a trailing group of fewer than four bytes is written as a full
    /// five symbols. If false, a trailing group of `k` bytes is written as
    /// `k + 1` symbols, and decoding yields exactly the original bytes.
    /// [default: true]
    pub padded: bool,
}

impl EncodeConfig {
    /// Returns the default configuration.
    pub const fn new() -> Self {
        Self {
            padded: true,
        }
    }
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn pad_chunk(chunk: &[u8]) -> [u8; BYTES_PER_CHUNK] {
    let mut bytes = [0; BYTES_PER_CHUNK];
    bytes[..chunk.len()].copy_from_slice(chunk);
    bytes
}

fn encode_chunk(chunk: &[u8]) -> [u8; DIGITS_PER_CHUNK] {
    let mut sum = u32::from_be_bytes(pad_chunk(chunk));
    let mut symbols = [0; DIGITS_PER_CHUNK];
    symbols.iter_mut().rev().for_each(|s| {
        // SAFETY: `sum % 85` is always less than 85.
        let d = unsafe { Digit::new_unchecked((sum % BASE) as u8) };
        *s = alphabet::to_ascii(d);
        sum /= BASE;
    });
    symbols
}

fn check_capacity(capacity: usize, size: usize) {
    let needed = padded_encoded_size(size) + 1;
    assert!(
        capacity >= needed,
        "destination buffer too small: need {} bytes, got {}",
        needed,
        capacity,
    );
}

/// Writes the NUL terminator and returns its index.
fn terminate(dest: &mut [u8], size: usize, config: EncodeConfig) -> usize {
    let end = if config.padded {
        padded_encoded_size(size)
    } else {
        unpadded_encoded_size(size)
    };
    dest[end] = 0;
    end
}

/// Encodes `src` into `dest` as NUL-terminated base-85 text.
///
/// Returns the index of the NUL terminator, which is also the length of the
/// text. If `src` is empty, only the terminator is written and this returns
/// 0.
///
/// # Panics
///
/// Panics if `dest` is shorter than
/// <code>[padded_encoded_size]\(src.len()) + 1</code>. Nothing is written in
/// that case.
pub fn encode(dest: &mut [u8], src: &[u8]) -> usize {
    encode_with(dest, src, EncodeConfig::new())
}

/// Encodes `src` into `dest` with the given config.
///
/// This function is like [`encode`], but takes a configuration object. The
/// capacity requirement on `dest` is the same even when
/// [`EncodeConfig::padded`] is false.
pub fn encode_with(dest: &mut [u8], src: &[u8], config: EncodeConfig) -> usize {
    check_capacity(dest.len(), src.len());
    src.chunks(BYTES_PER_CHUNK)
        .zip(dest.chunks_exact_mut(DIGITS_PER_CHUNK))
        .for_each(|(chunk, out)| out.copy_from_slice(&encode_chunk(chunk)));
    terminate(dest, src.len(), config)
}

/// Encodes the first `size` bytes of `buf` in place.
///
/// The result is identical to calling [`encode`] with a separate destination
/// buffer. Returns the index of the NUL terminator.
///
/// # Panics
///
/// Panics if `buf` is shorter than
/// <code>[padded_encoded_size]\(size) + 1</code>.
pub fn encode_in_place(buf: &mut [u8], size: usize) -> usize {
    encode_in_place_with(buf, size, EncodeConfig::new())
}

/// Encodes the first `size` bytes of `buf` in place with the given config.
///
/// This function is like [`encode_in_place`], but takes a configuration
/// object.
pub fn encode_in_place_with(
    buf: &mut [u8],
    size: usize,
    config: EncodeConfig,
) -> usize {
    check_capacity(buf.len(), size);
    let chunks = (size + BYTES_PER_CHUNK - 1) / BYTES_PER_CHUNK;

    // Output grows by one byte per chunk, so chunks are converted last to
    // first. Chunk `i` is written at `5 * i`, which is never before its input
    // at `4 * i`, so chunks `0..i` are still intact when they are read.
    (0..chunks).rev().for_each(|i| {
        let start = i * BYTES_PER_CHUNK;
        let end = size.min(start + BYTES_PER_CHUNK);
        let symbols = encode_chunk(&buf[start..end]);
        buf[i * DIGITS_PER_CHUNK..][..DIGITS_PER_CHUNK]
            .copy_from_slice(&symbols);
    });
    terminate(buf, size, config)
}

/// Encodes `bytes` into a newly allocated buffer.
///
/// The returned buffer holds the base-85 text without a NUL terminator.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode_to_vec(bytes: impl AsRef<[u8]>) -> Vec<u8> {
    encode_to_vec_with(bytes, EncodeConfig::new())
}

/// Encodes `bytes` into a newly allocated buffer with the given config.
///
/// This function is like [`encode_to_vec`], but takes a configuration
/// object.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode_to_vec_with(
    bytes: impl AsRef<[u8]>,
    config: EncodeConfig,
) -> Vec<u8> {
    let bytes = bytes.as_ref();
    let mut buf = alloc::vec![0; padded_encoded_size(bytes.len()) + 1];
    let end = encode_with(&mut buf, bytes, config);
    buf.truncate(end);
    buf
}

/// Encodes `bytes` as a [`String`].
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode_to_string(bytes: impl AsRef<[u8]>) -> String {
    let ascii = encode_to_vec(bytes);

    #[cfg(debug_assertions)]
    let ascii = String::from_utf8(ascii)
        .expect("[debug] encoded data is not valid ascii -- this is UB!")
        .into_bytes();

    // SAFETY: Every byte in `ALPHABET` is ASCII.
    unsafe { String::from_utf8_unchecked(ascii) }
}
