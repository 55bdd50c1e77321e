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

//! Functions and types for decoding base-85 text.

use super::alphabet;
use super::size::decoded_size;
use super::Digit;
use super::{BASE, BYTES_PER_CHUNK, DIGITS_PER_CHUNK};

use core::fmt::{self, Formatter};
use core::ops::Range;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// An error encountered while decoding base-85 text.
///
/// Any error means the input was malformed; the variants say how.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// Encountered a byte that is not one of the 85 symbols.
    BadChar {
        /// The offending byte.
        byte: u8,
        /// Its position in the input.
        index: usize,
    },
    /// A group of symbols encoded a value larger than [`u32::MAX`].
    Overflow {
        /// Position of the group's first symbol in the input.
        index: usize,
    },
    /// The input ended with a single leftover symbol, which cannot represent
    /// any bytes.
    BadLength,
}

use DecodeError as Error;

/// Alias of <code>[Result]\<T, [DecodeError]></code>.
pub type DecodeResult<T> = Result<T, DecodeError>;

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::BadChar {
                byte,
                index,
            } if byte.is_ascii_graphic() => write!(
                f,
                "bad character {:?} at index {}",
                *byte as char, index,
            ),
            Self::BadChar {
                byte,
                index,
            } => write!(f, "bad byte {:#04x} at index {}", byte, index),
            Self::Overflow {
                index,
            } => write!(f, "group at index {} is out of range", index),
            Self::BadLength => write!(f, "bad input length"),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for DecodeError {}

/// Length of the text in `src`: everything before the first NUL, or all of it.
fn text_len(src: &[u8]) -> usize {
    src.iter().position(|&b| b == 0).unwrap_or(src.len())
}

fn chunk_ranges(len: usize) -> impl Iterator<Item = Range<usize>> {
    (0..len)
        .step_by(DIGITS_PER_CHUNK)
        .map(move |start| start..len.min(start + DIGITS_PER_CHUNK))
}

/// Decodes one group of up to five symbols starting at `index`.
///
/// Missing trailing digits are taken as 84, the inverse of the encoder
/// dropping them: the leading bytes of the value are then the ones the
/// encoder started from. Only the first `chunk.len() - 1` bytes of the
/// result are meaningful.
fn decode_chunk(
    chunk: &[u8],
    index: usize,
) -> DecodeResult<[u8; BYTES_PER_CHUNK]> {
    let mut digits = [Digit::MAX; DIGITS_PER_CHUNK];
    chunk.iter().zip(&mut digits).enumerate().try_for_each(
        |(i, (&byte, d))| {
            alphabet::from_ascii(byte).map(|digit| *d = digit).ok_or(
                Error::BadChar {
                    byte,
                    index: index + i,
                },
            )
        },
    )?;

    if chunk.len() == 1 {
        return Err(Error::BadLength);
    }

    digits
        .iter()
        .try_fold(0_u32, |sum, &d| {
            sum.checked_mul(BASE)?.checked_add(u32::from(d))
        })
        .map(u32::to_be_bytes)
        .ok_or(Error::Overflow {
            index,
        })
}

fn check_capacity(capacity: usize, len: usize) {
    let needed = decoded_size(len);
    assert!(
        capacity >= needed,
        "destination buffer too small: need {} bytes, got {}",
        needed,
        capacity,
    );
}

/// Decodes the NUL-terminated base-85 text in `src` into `dest`.
///
/// `src` is read up to its first NUL byte, or to its end if it has none.
/// Returns the number of bytes written. Full groups of five symbols yield
/// four bytes each; a trailing group of `n` symbols yields `n - 1` bytes.
///
/// On error, groups before the one that failed have already been written to
/// `dest`, and its contents should not be relied upon.
///
/// # Panics
///
/// Panics if `dest` is shorter than <code>[decoded_size]\(len)</code>, where
/// `len` is the length of the text. Nothing is written in that case.
pub fn decode(dest: &mut [u8], src: &[u8]) -> DecodeResult<usize> {
    let len = text_len(src);
    check_capacity(dest.len(), len);
    chunk_ranges(len).try_fold(0, |written, range| {
        let start = range.start;
        let chunk = &src[range];
        let bytes = decode_chunk(chunk, start)?;
        let n = chunk.len() - 1;
        dest[written..][..n].copy_from_slice(&bytes[..n]);
        Ok(written + n)
    })
}

/// Decodes the NUL-terminated base-85 text in `buf` in place.
///
/// The result is identical to calling [`decode`] with a separate destination
/// buffer. Returns the number of bytes written at the start of `buf`.
pub fn decode_in_place(buf: &mut [u8]) -> DecodeResult<usize> {
    let len = text_len(buf);
    // Output shrinks by one byte per chunk, so the write position `4 * i`
    // never passes the read position `5 * i`.
    chunk_ranges(len).try_fold(0, |written, range| {
        let n = range.len() - 1;
        let bytes = decode_chunk(&buf[range.clone()], range.start)?;
        buf[written..][..n].copy_from_slice(&bytes[..n]);
        Ok(written + n)
    })
}

/// Decodes `text` into a newly allocated buffer.
///
/// As with [`decode`], `text` ends at its first NUL byte, if any.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn decode_to_vec(text: impl AsRef<[u8]>) -> DecodeResult<Vec<u8>> {
    let text = text.as_ref();
    let mut buf = alloc::vec![0; decoded_size(text_len(text))];
    let len = decode(&mut buf, text)?;
    buf.truncate(len);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_str(src: &[u8]) -> DecodeResult<([u8; 64], usize)> {
        let mut dest = [0xaa; 64];
        decode(&mut dest, src).map(|len| (dest, len))
    }

    #[test]
    fn full_chunks() {
        let (dest, len) = decode_str(b"FflSSG&MFiI5}ZrV`OD!\0").unwrap();
        assert_eq!(&dest[..len], b"0123456789abcdef");
        assert_eq!(dest[len], 0xaa);
    }

    #[test]
    fn partial_chunks() {
        let cases: [(&[u8], &[u8]); 4] = [
            (b"3I", &[10]),
            (b"3KR", &[10, 20]),
            (b"3KSj", &[10, 20, 30]),
            (b"3KSkFG5", &[10, 20, 30, 40, 50]),
        ];
        for (src, expected) in cases.iter() {
            let (dest, len) = decode_str(src).unwrap();
            assert_eq!(&dest[..len], *expected);
        }
    }

    #[test]
    fn stops_at_nul() {
        let (dest, len) = decode_str(b"3KSkF\0\"garbage").unwrap();
        assert_eq!(&dest[..len], &[10, 20, 30, 40]);
    }

    #[test]
    fn empty() {
        assert_eq!(decode_str(b"").unwrap().1, 0);
        assert_eq!(decode_str(b"\0").unwrap().1, 0);
        assert_eq!(decode(&mut [], b"\0"), Ok(0));
    }

    #[test]
    fn bad_chars() {
        assert_eq!(
            decode_str(b"FflSSG&MFiI5}ZrV\"OD!").unwrap_err(),
            Error::BadChar {
                byte: b'"',
                index: 16,
            },
        );
        assert_eq!(
            decode_str(&[b'0', 0xff, b'1', b'2', b'3', 0]).unwrap_err(),
            Error::BadChar {
                byte: 0xff,
                index: 1,
            },
        );
        assert!(matches!(
            decode_str(b"00000,"),
            Err(Error::BadChar {
                byte: b',',
                index: 5,
            }),
        ));
    }

    #[test]
    fn bad_char_writes_nothing_for_its_chunk() {
        let mut dest = [0xaa; 8];
        let result = decode(&mut dest, b"00000000.0");
        assert_eq!(
            result,
            Err(Error::BadChar {
                byte: b'.',
                index: 8,
            }),
        );
        assert_eq!(dest, [0, 0, 0, 0, 0xaa, 0xaa, 0xaa, 0xaa]);
    }

    #[test]
    fn bad_length() {
        assert_eq!(decode_str(b"aaaaaa").unwrap_err(), Error::BadLength);
        assert_eq!(decode_str(b"0").unwrap_err(), Error::BadLength);
    }

    #[test]
    fn bad_char_beats_bad_length() {
        assert_eq!(
            decode_str(b"00000\"").unwrap_err(),
            Error::BadChar {
                byte: b'"',
                index: 5,
            },
        );
    }

    #[test]
    fn overflow() {
        assert_eq!(
            decode_str(b"00000~~~~~").unwrap_err(),
            Error::Overflow {
                index: 5,
            },
        );
        // `u32::MAX` itself is fine; one more is not.
        let (dest, len) = decode_str(b"|NsC0").unwrap();
        assert_eq!(&dest[..len], &[0xff; 4]);
        assert_eq!(
            decode_str(b"|NsC1").unwrap_err(),
            Error::Overflow {
                index: 0,
            },
        );
    }

    #[test]
    #[should_panic(expected = "destination buffer too small")]
    fn short_destination() {
        let mut dest = [0; 3];
        let _ = decode(&mut dest, b"00000");
    }

    #[test]
    fn in_place_matches_separate() {
        let text = b"FflSSG&MFiI5}ZrV`OD!3KR\0";
        let mut expected = [0; 32];
        let expected_len = decode(&mut expected, text).unwrap();

        let mut buf = [0; 32];
        buf[..text.len()].copy_from_slice(text);
        let len = decode_in_place(&mut buf).unwrap();
        assert_eq!(len, expected_len);
        assert_eq!(&buf[..len], &expected[..len]);
    }

    #[test]
    fn in_place_without_nul() {
        let mut buf = *b"3KSkF3KR";
        assert_eq!(decode_in_place(&mut buf), Ok(6));
        assert_eq!(&buf[..6], &[10, 20, 30, 40, 10, 20]);
    }

    #[cfg(feature = "std")]
    #[test]
    fn display() {
        let e = Error::BadChar {
            byte: b',',
            index: 3,
        };
        assert_eq!(e.to_string(), "bad character ',' at index 3");
        let e = Error::BadChar {
            byte: 0x80,
            index: 0,
        };
        assert_eq!(e.to_string(), "bad byte 0x80 at index 0");
    }
}
