// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A discrete value stored in a [`Dataset`](crate::Dataset).
///
/// Symbols are compared and hashed to build probability mass functions, and
/// ordered so that the value range of an attribute can bound the joint
/// histogram used for mutual information.
pub trait Symbol:
    Copy + Default + Eq + Hash + Ord + Debug + Display + Send + Sync + 'static
{
    /// Narrow an already discretized real value into this symbol type.
    ///
    /// Follows `as` cast semantics: fractional parts are truncated towards
    /// zero and out-of-range values saturate.
    fn from_f64(value: f64) -> Self;

    /// Numeric value of the symbol, used for linear bucket indices.
    fn bucket(self) -> i128;
}

macro_rules! impl_symbol {
    ($($t:ty),*) => {
        $(
            impl Symbol for $t {
                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn bucket(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_symbol!(u8, u16, u32, i8, i16, i32, i64);
