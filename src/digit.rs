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

/// A base-85 digit: a value in `0..85`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Digit(u8);

macro_rules! const_digit {
    ($n:expr) => {{
        use crate::digit::Digit;
        const DIGIT: Digit = Digit::__const($n);
        DIGIT
    }};
}

impl Digit {
    pub const MAX: Self = const_digit!(84);

    pub fn new(x: u8) -> Option<Self> {
        (u32::from(x) < crate::BASE).then(|| Self(x))
    }

    /// # Safety
    ///
    /// `x` must be less than 85.
    pub unsafe fn new_unchecked(x: u8) -> Self {
        debug_assert!(u32::from(x) < crate::BASE);
        Self(x)
    }

    #[doc(hidden)]
    pub const fn __const(n: u8) -> Self {
        const BOUNDS_CHECK: [u8; 1] = [0];
        Self(n + BOUNDS_CHECK[(n as u32 >= crate::BASE) as usize])
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> u8 {
        d.0
    }
}

impl From<Digit> for u32 {
    fn from(d: Digit) -> u32 {
        d.0.into()
    }
}
