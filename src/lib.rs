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

//! Base85 encoding and decoding with the [RFC 1924] alphabet.
//!
//! Every four bytes of binary data become five printable ASCII symbols. The
//! core functions work on caller-supplied buffers and never allocate, and
//! each has an in-place variant for callers that can't spare a second buffer:
//!
//! ```
//! let mut buf = [0_u8; 16];
//! buf[..5].copy_from_slice(b"hello");
//!
//! let end = base85::encode_in_place(&mut buf, 5);
//! assert_eq!(&buf[..end], b"Xk~0{ZvX%Q");
//!
//! let len = base85::decode_in_place(&mut buf).unwrap();
//! assert_eq!(&buf[..len], b"hello\0\0\0");
//! ```
//!
//! Input that isn't a multiple of four bytes is padded with zeros, which come
//! back out when decoding. Callers that need the exact length back either
//! track it themselves or encode without padding (see [`EncodeConfig`]).
//!
//! [RFC 1924]: https://datatracker.ietf.org/doc/html/rfc1924

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]
#![deny(unsafe_op_in_unsafe_fn)]

#[macro_use]
mod digit;

pub mod alphabet;
pub mod decode;
pub mod encode;
pub mod size;


#[cfg(feature = "alloc")]
extern crate alloc;

const BASE: u32 = 85;
const BYTES_PER_CHUNK: usize = 4;
const DIGITS_PER_CHUNK: usize = 5;

use digit::Digit;

pub use decode::decode;
pub use decode::decode_in_place;
#[cfg(feature = "alloc")]
pub use decode::decode_to_vec;
pub use decode::{DecodeError, DecodeResult};

pub use encode::encode;
pub use encode::encode_in_place;
#[cfg(feature = "alloc")]
pub use encode::{encode_to_string, encode_to_vec};
pub use encode::{encode_in_place_with, encode_with, EncodeConfig};

pub use size::{decoded_size, span_length};
pub use size::{padded_encoded_size, unpadded_encoded_size};
