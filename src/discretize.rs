// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::str::FromStr;

use ndarray::{Array2, ArrayView2};

use crate::error::MrmrError;
use crate::symbol::Symbol;

/// Policy mapping real values onto discrete symbols.
///
/// Inputs must be finite. NaN and infinities are a precondition violation: they
/// narrow to whatever the symbol's saturating cast produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Discretization {
    /// Nearest integer, halfway cases away from zero.
    #[default]
    Round,
    Floor,
    Ceiling,
    /// Integral narrowing only (truncation towards zero).
    Truncate,
}

impl Discretization {
    /// Apply the boundary function for this policy to one value.
    #[inline]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Discretization::Round => value.round(),
            Discretization::Floor => value.floor(),
            Discretization::Ceiling => value.ceil(),
            Discretization::Truncate => value,
        }
    }

    /// Discretize a single value into a symbol.
    #[inline]
    pub fn symbol<S: Symbol>(self, value: f64) -> S {
        S::from_f64(self.apply(value))
    }
}

impl FromStr for Discretization {
    type Err = MrmrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "round" => Ok(Discretization::Round),
            "floor" => Ok(Discretization::Floor),
            "ceiling" | "ceil" => Ok(Discretization::Ceiling),
            "truncate" => Ok(Discretization::Truncate),
            _ => Err(MrmrError::InvalidDiscretization(s.to_string())),
        }
    }
}

impl fmt::Display for Discretization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Discretization::Round => "round",
            Discretization::Floor => "floor",
            Discretization::Ceiling => "ceiling",
            Discretization::Truncate => "truncate",
        };
        f.write_str(name)
    }
}

/// Discretize a real-valued matrix element-wise, keeping its shape.
pub fn discretize<S: Symbol>(data: ArrayView2<'_, f64>, policy: Discretization) -> Array2<S> {
    data.mapv(|v| policy.symbol::<S>(v))
}

/// Discretize an instances x attributes matrix into the attributes x instances
/// layout used by [`Dataset`](crate::Dataset).
pub fn discretize_transposed<S: Symbol>(
    data: ArrayView2<'_, f64>,
    policy: Discretization,
) -> Array2<S> {
    let (num_instances, num_attributes) = data.dim();
    Array2::from_shape_fn((num_attributes, num_instances), |(attribute, instance)| {
        policy.symbol::<S>(data[[instance, attribute]])
    })
}
