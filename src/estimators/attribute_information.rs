// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;

use ndarray::{Array1, ArrayView1};

use crate::error::{MrmrError, Result};
use crate::estimators::discrete_utils::count_frequencies;
use crate::estimators::traits::{GlobalValue, LocalValues};
use crate::symbol::Symbol;

/// Empirical distribution and Shannon entropy (base 2) of one attribute.
///
/// Computes H = -Σ p_i log2 p_i from p_i = n_i/N once at construction and caches
/// it. The distinct values are kept in first-seen order; this order only affects
/// the enumeration order of later joint sums, never their value.
#[derive(Debug, Clone)]
pub struct AttributeInformation<S: Symbol> {
    pdf: HashMap<S, f64>,
    values: Vec<S>,
    entropy: f64,
    n: usize,
    min: S,
    max: S,
}

impl<S: Symbol> AttributeInformation<S> {
    /// Build the distribution from the observations of one attribute.
    pub fn new(data: ArrayView1<'_, S>) -> Result<Self> {
        let freq = count_frequencies(data.iter());
        let (min, max) = freq.bounds().ok_or(MrmrError::EmptyAttribute)?;
        let n_f = freq.n as f64;

        let mut pdf = HashMap::with_capacity(freq.k());
        let mut entropy = 0.0_f64;
        for v in freq.order.iter() {
            let p = freq.counts[v] as f64 / n_f;
            pdf.insert(*v, p);
            entropy -= p * p.log2();
        }
        // a single observed value carries no uncertainty
        if freq.k() == 1 {
            entropy = 0.0;
        }

        Ok(Self {
            pdf,
            values: freq.order,
            entropy,
            n: freq.n,
            min,
            max,
        })
    }

    /// Build from a plain slice of observations.
    pub fn from_slice(data: &[S]) -> Result<Self> {
        Self::new(ArrayView1::from(data))
    }

    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    /// Probability of `value`; `0.0` for a symbol never observed.
    pub fn marginal_probability(&self, value: S) -> f64 {
        self.pdf.get(&value).copied().unwrap_or(0.0)
    }

    /// Distinct values in first-seen order.
    pub fn values(&self) -> &[S] {
        &self.values
    }

    pub fn num_values(&self) -> usize {
        self.values.len()
    }

    /// Number of observations the distribution was built from.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// An attribute with exactly one distinct value.
    pub fn is_degenerate(&self) -> bool {
        self.values.len() == 1
    }

    pub fn min_value(&self) -> S {
        self.min
    }

    pub fn max_value(&self) -> S {
        self.max
    }

    /// Per-observation surprisal -log2 p(x) for an arbitrary series of this attribute.
    pub fn surprisal(&self, data: ArrayView1<'_, S>) -> Array1<f64> {
        data.mapv(|v| -self.marginal_probability(v).log2())
    }
}

impl<S: Symbol> GlobalValue for AttributeInformation<S> {
    fn global_value(&self) -> f64 {
        self.entropy
    }
}

/// Attribute information bundled with the observations it was built from,
/// so local values can be reported per instance.
pub struct AttributeEntropy<'a, S: Symbol> {
    info: &'a AttributeInformation<S>,
    data: ArrayView1<'a, S>,
}

impl<'a, S: Symbol> AttributeEntropy<'a, S> {
    pub fn new(info: &'a AttributeInformation<S>, data: ArrayView1<'a, S>) -> Self {
        Self { info, data }
    }
}

impl<S: Symbol> GlobalValue for AttributeEntropy<'_, S> {
    fn global_value(&self) -> f64 {
        self.info.entropy()
    }
}

impl<S: Symbol> LocalValues for AttributeEntropy<'_, S> {
    /// Local entropy of each observation: -log2 p(x).
    fn local_values(&self) -> Array1<f64> {
        self.info.surprisal(self.data)
    }
}
