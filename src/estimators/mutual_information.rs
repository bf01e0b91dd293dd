// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;

use ndarray::{Array1, ArrayView1};

use crate::estimators::attribute_information::AttributeInformation;
use crate::estimators::traits::{GlobalValue, LocalValues};
use crate::symbol::Symbol;

/// One attribute's observations together with its cached distribution.
#[derive(Clone, Copy)]
pub struct Column<'a, S: Symbol> {
    pub data: ArrayView1<'a, S>,
    pub info: &'a AttributeInformation<S>,
}

/// Discrete mutual information between two attributes, in bits.
///
/// The joint distribution is estimated from a histogram over linear bucket
/// indices `(x - min_x) * range_y + (y - min_y)`, where `range_y` is the span of
/// the second attribute's observed values. When `range_x * range_y` does not
/// fit in an `i128` (wide `i64` symbols) the histogram is keyed by the value
/// pair instead. The global value is
///
/// I(X; Y) = Σ p(x, y) log2( p(x, y) / (p(x) p(y)) )
///
/// summed over the cross product of both attributes' distinct values, skipping
/// pairs that never co-occur. If either attribute is constant the estimate is
/// exactly zero and no histogram is built.
///
/// Nothing is cached between calls.
pub struct DiscreteMutualInformation<'a, S: Symbol> {
    x: Column<'a, S>,
    y: Column<'a, S>,
    /// Span of `y`, or `None` if linear indices would overflow.
    y_range: Option<i128>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum JointKey<S> {
    Linear(i128),
    Pair(S, S),
}

fn span<S: Symbol>(info: &AttributeInformation<S>) -> Option<i128> {
    info.max_value()
        .bucket()
        .checked_sub(info.min_value().bucket())?
        .checked_add(1)
}

impl<'a, S: Symbol> DiscreteMutualInformation<'a, S> {
    pub fn new(x: Column<'a, S>, y: Column<'a, S>) -> Self {
        assert_eq!(
            x.data.len(),
            y.data.len(),
            "Both attributes must have the same number of instances"
        );
        let y_range = span(x.info)
            .zip(span(y.info))
            .and_then(|(rx, ry)| rx.checked_mul(ry).map(|_| ry));
        Self { x, y, y_range }
    }

    fn is_degenerate(&self) -> bool {
        self.x.info.is_degenerate() || self.y.info.is_degenerate()
    }

    #[inline]
    fn bucket(&self, x: S, y: S) -> JointKey<S> {
        match self.y_range {
            Some(y_range) => {
                let x_offset = x.bucket() - self.x.info.min_value().bucket();
                let y_offset = y.bucket() - self.y.info.min_value().bucket();
                JointKey::Linear(x_offset * y_range + y_offset)
            }
            None => JointKey::Pair(x, y),
        }
    }

    /// Joint probabilities keyed by bucket.
    fn joint_probabilities(&self) -> HashMap<JointKey<S>, f64> {
        let mut counts: HashMap<JointKey<S>, usize> = HashMap::new();
        for (&x, &y) in self.x.data.iter().zip(self.y.data.iter()) {
            *counts.entry(self.bucket(x, y)).or_insert(0) += 1;
        }
        let n_f = self.x.data.len() as f64;
        counts
            .into_iter()
            .map(|(k, c)| (k, c as f64 / n_f))
            .collect()
    }
}

impl<S: Symbol> GlobalValue for DiscreteMutualInformation<'_, S> {
    fn global_value(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let joint = self.joint_probabilities();

        let mut mi = 0.0_f64;
        for &x in self.x.info.values() {
            let p_x = self.x.info.marginal_probability(x);
            for &y in self.y.info.values() {
                let p_xy = joint.get(&self.bucket(x, y)).copied().unwrap_or(0.0);
                if p_xy != 0.0 {
                    let p_y = self.y.info.marginal_probability(y);
                    mi += p_xy * (p_xy / (p_x * p_y)).log2();
                }
            }
        }
        mi
    }
}

impl<S: Symbol> LocalValues for DiscreteMutualInformation<'_, S> {
    /// Pointwise mutual information of each instance: log2 p(x,y) / (p(x) p(y)).
    fn local_values(&self) -> Array1<f64> {
        let n = self.x.data.len();
        if self.is_degenerate() {
            return Array1::zeros(n);
        }
        let joint = self.joint_probabilities();
        self.x
            .data
            .iter()
            .zip(self.y.data.iter())
            .map(|(&x, &y)| {
                let p_xy = joint[&self.bucket(x, y)];
                let p_x = self.x.info.marginal_probability(x);
                let p_y = self.y.info.marginal_probability(y);
                (p_xy / (p_x * p_y)).log2()
            })
            .collect()
    }
}
