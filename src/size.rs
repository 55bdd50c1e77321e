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

//! Buffer size calculations.
//!
//! These are what callers use to size the buffers passed to
//! [`encode`](crate::encode()) and [`decode`](crate::decode()), which never
//! allocate.

use super::{BYTES_PER_CHUNK, DIGITS_PER_CHUNK};

/// Returns the length of the padded base-85 encoding of `size` bytes, not
/// counting the NUL terminator.
///
/// A trailing group of one to three bytes is padded to a full group, so this
/// is always a multiple of five.
pub const fn padded_encoded_size(size: usize) -> usize {
    let groups = size / BYTES_PER_CHUNK;
    let partial = if size % BYTES_PER_CHUNK != 0 {
        DIGITS_PER_CHUNK
    } else {
        0
    };
    groups * DIGITS_PER_CHUNK + partial
}

/// Returns the length of the unpadded base-85 encoding of `size` bytes, not
/// counting the NUL terminator.
///
/// A trailing group of `k` bytes (1 ≤ `k` ≤ 3) needs only `k + 1` symbols, so
/// this is `size + ceil(size / 4)`.
pub const fn unpadded_encoded_size(size: usize) -> usize {
    (size + 3) * DIGITS_PER_CHUNK / BYTES_PER_CHUNK - 3
}

/// Returns the number of bytes that `len` symbols of valid base-85 text
/// decode to.
///
/// A trailing group of `n` symbols yields `n - 1` bytes; a lone trailing
/// symbol is invalid and counts for nothing.
pub const fn decoded_size(len: usize) -> usize {
    let groups = len / DIGITS_PER_CHUNK;
    let rest = len % DIGITS_PER_CHUNK;
    groups * BYTES_PER_CHUNK + rest.saturating_sub(1)
}

/// Returns the number of bytes from `start` to `end`.
///
/// If `end` is null or doesn't come after `start`, this returns 0. Neither
/// pointer is dereferenced.
pub fn span_length<T>(end: *const T, start: *const T) -> usize {
    (end as usize).saturating_sub(start as usize)
}
