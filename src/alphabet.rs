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

//! The RFC 1924 symbol set.

use super::Digit;

/// The 85 base-85 symbols, indexed by digit value.
///
/// The order is `0`–`9`, `A`–`Z`, `a`–`z`, then
/// ``!#$%&()*+-;<=>?@^_`{|}~``. Encoders that use a different order produce
/// incompatible output.
pub const ALPHABET: [u8; 85] = *b"0123456789\
    ABCDEFGHIJKLMNOPQRSTUVWXYZ\
    abcdefghijklmnopqrstuvwxyz\
    !#$%&()*+-;<=>?@^_`{|}~";

const NOT_A_DIGIT: u8 = 0xff;

// Indexed by raw byte. Everything outside the alphabet, including every byte
// with the high bit set, holds `NOT_A_DIGIT`.
static REVERSE: [u8; 256] = reverse_table();

const fn reverse_table() -> [u8; 256] {
    let mut table = [NOT_A_DIGIT; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

pub(crate) fn to_ascii(d: Digit) -> u8 {
    ALPHABET[usize::from(u8::from(d))]
}

pub(crate) fn from_ascii(b: u8) -> Option<Digit> {
    // `NOT_A_DIGIT` is rejected by `Digit::new`.
    Digit::new(REVERSE[usize::from(b)])
}

/// Returns whether `b` is one of the 85 symbols in [`ALPHABET`].
pub fn is_base85_char(b: u8) -> bool {
    from_ascii(b).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_table_inverts_alphabet() {
        for (i, &c) in ALPHABET.iter().enumerate() {
            assert_eq!(from_ascii(c).map(u8::from), Some(i as u8));
        }
    }

    #[test]
    fn alphabet_has_no_duplicates() {
        let count = (0..=u8::MAX).filter(|&b| is_base85_char(b)).count();
        assert_eq!(count, ALPHABET.len());
    }

    #[test]
    fn rejects_excluded_printables() {
        for &b in b"\"',./:[\\] " {
            assert!(!is_base85_char(b), "{:?} accepted", b as char);
        }
    }

    #[test]
    fn rejects_high_bytes() {
        assert!((0x80..=0xff).all(|b| !is_base85_char(b)));
        assert!(!is_base85_char(0));
    }
}
