// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;

use crate::symbol::Symbol;

/// Above this value range, counting falls back from a dense vector to a HashMap.
const MAX_DENSE_RANGE: i128 = 4096;

/// Occurrence counts of each symbol, with the distinct symbols kept in
/// first-seen order.
#[derive(Debug, Clone)]
pub struct Frequencies<S: Symbol> {
    /// Counts per distinct symbol
    pub counts: HashMap<S, usize>,
    /// Distinct symbols in order of first occurrence
    pub order: Vec<S>,
    /// Total number of observations
    pub n: usize,
}

impl<S: Symbol> Frequencies<S> {
    /// Number of distinct symbols.
    pub fn k(&self) -> usize {
        self.order.len()
    }

    /// Smallest and largest observed symbol, `None` for empty input.
    pub fn bounds(&self) -> Option<(S, S)> {
        let min = *self.order.iter().min()?;
        let max = *self.order.iter().max()?;
        Some((min, max))
    }
}

/// Count the occurrences of each value in a sequence of symbols.
///
/// Uses a dense vector for small value ranges, otherwise falls back to HashMap.
/// Either way the distinct symbols are reported in first-seen order.
pub fn count_frequencies<'a, S, I>(data: I) -> Frequencies<S>
where
    S: Symbol,
    I: IntoIterator<Item = &'a S>,
    I::IntoIter: Clone,
{
    let iter = data.into_iter();

    let mut bounds: Option<(i128, i128)> = None;
    let mut n = 0usize;
    for v in iter.clone() {
        let b = v.bucket();
        bounds = Some(match bounds {
            None => (b, b),
            Some((lo, hi)) => (lo.min(b), hi.max(b)),
        });
        n += 1;
    }

    let Some((min_v, max_v)) = bounds else {
        return Frequencies {
            counts: HashMap::new(),
            order: Vec::new(),
            n: 0,
        };
    };

    let mut order = Vec::new();
    if max_v - min_v <= MAX_DENSE_RANGE {
        let len = (max_v - min_v) as usize + 1;
        let mut dense = vec![0usize; len];
        for &v in iter {
            let idx = (v.bucket() - min_v) as usize;
            if dense[idx] == 0 {
                order.push(v);
            }
            dense[idx] += 1;
        }
        let counts = order
            .iter()
            .map(|&v| (v, dense[(v.bucket() - min_v) as usize]))
            .collect();
        return Frequencies { counts, order, n };
    }

    let mut counts: HashMap<S, usize> = HashMap::new();
    for &v in iter {
        let c = counts.entry(v).or_insert(0);
        if *c == 0 {
            order.push(v);
        }
        *c += 1;
    }
    Frequencies { counts, order, n }
}
