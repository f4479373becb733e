// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Constant traits for generic integer code.
//!
//! Generic solver code needs a handful of well-known constants without
//! committing to a concrete integer type. `MinusOne` in particular backs the
//! `-1` sentinel that marks a knapsack solution value as "not yet computed
//! or infeasible".

/// A trait for integer types that have a constant representing -1.
pub trait MinusOne {
    /// The constant representing -1 for the implementing type.
    const MINUS_ONE: Self;
}

/// A trait for integer types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

macro_rules! impl_minus_one_for {
    ($($t:ty),*) => {
        $(impl MinusOne for $t {
            const MINUS_ONE: Self = -1;
        })*
    };
}

macro_rules! impl_zero_for {
    ($($t:ty),*) => {
        $(impl Zero for $t {
            const ZERO: Self = 0;
        })*
    };
}

impl_minus_one_for!(i8, i16, i32, i64, isize);
impl_zero_for!(i8, i16, i32, i64, isize);
impl_zero_for!(u8, u16, u32, u64, usize);
