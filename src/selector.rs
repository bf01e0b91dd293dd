// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Greedy mRMR forward selection.
//!
//! Relevance of a candidate is its mutual information with the class attribute.
//! Redundancy is accumulated incrementally: each round adds the mutual
//! information between every remaining candidate and the attribute picked in
//! the previous round, and the running sum is averaged over the number of
//! attributes selected so far.
//!
//! Scans run over candidates in ascending attribute order and a score equal to
//! the current best replaces it, so among tied candidates the highest index wins.

use std::fmt;
use std::str::FromStr;

use log::{debug, info};

use crate::dataset::Dataset;
use crate::error::{MrmrError, Result};
use crate::symbol::Symbol;
use crate::timing::Timings;

/// Added to the averaged redundancy in the quotient criterion.
pub const MIQ_EPSILON: f64 = 0.0001;

/// Scoring criterion combining relevance and redundancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Mutual information difference: relevance - redundancy.
    #[default]
    Mid,
    /// Mutual information quotient: relevance / (redundancy + ε).
    Miq,
}

impl Method {
    #[inline]
    pub fn score(self, relevance: f64, redundancy: f64) -> f64 {
        match self {
            Method::Mid => relevance - redundancy,
            Method::Miq => relevance / (redundancy + MIQ_EPSILON),
        }
    }
}

impl FromStr for Method {
    type Err = MrmrError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "mid" => Ok(Method::Mid),
            "miq" => Ok(Method::Miq),
            _ => Err(MrmrError::InvalidMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Mid => f.write_str("mid"),
            Method::Miq => f.write_str("miq"),
        }
    }
}

/// One row of the ranking.
///
/// Rank 0 is the class attribute: its mutual information is reported as its
/// own entropy and its score is NaN. Constant attributes come last with zero
/// entropy, zero mutual information and an infinite score.
#[derive(Debug, Clone, PartialEq)]
pub struct MrmrResult {
    pub rank: usize,
    pub index: usize,
    pub name: String,
    pub entropy: f64,
    /// Mutual information with the class attribute.
    pub mutual_information: f64,
    pub score: f64,
}

/// Parameters of one selection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionConfig {
    /// 0-based index of the class attribute.
    pub class_attribute: usize,
    /// Number of attributes to rank besides the class; 0 ranks all of them.
    pub num_features: usize,
    pub method: Method,
}

impl SelectionConfig {
    pub fn with_class_attribute(mut self, class_attribute: usize) -> Self {
        self.class_attribute = class_attribute;
        self
    }

    pub fn with_num_features(mut self, num_features: usize) -> Self {
        self.num_features = num_features;
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Total number of rows to emit, class row included.
    fn row_limit(&self, num_attributes: usize) -> usize {
        if self.num_features == 0 {
            num_attributes
        } else {
            self.num_features + 1
        }
    }
}

pub struct Selector {
    config: SelectionConfig,
}

impl Selector {
    pub fn new(config: SelectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Rank the attributes of `data`.
    pub fn select<S: Symbol>(&self, data: &Dataset<S>) -> Result<Vec<MrmrResult>> {
        let mut timings = Timings::new();
        self.select_timed(data, &mut timings)
    }

    /// Rank the attributes of `data`, recording stage durations in `timings`.
    pub fn select_timed<S: Symbol>(
        &self,
        data: &Dataset<S>,
        timings: &mut Timings,
    ) -> Result<Vec<MrmrResult>> {
        let num_attributes = data.num_attributes();
        let class = self.config.class_attribute;
        if class >= num_attributes {
            return Err(MrmrError::ClassOutOfRange {
                index: class,
                num_attributes,
            });
        }
        let limit = self.config.row_limit(num_attributes);
        let method = self.config.method;

        let stage = timings.stage("Calculating mutual information between each attribute and class");
        let mut relevance = vec![0.0_f64; num_attributes];
        let mut unselected: Vec<usize> = Vec::with_capacity(num_attributes);
        let mut degenerate: Vec<usize> = Vec::new();
        for i in (0..num_attributes).filter(|&i| i != class) {
            if data.entropy(i) > 0.0 {
                relevance[i] = data.mutual_information(class, i);
                unselected.push(i);
            } else {
                degenerate.push(i);
            }
        }
        relevance[class] = f64::NEG_INFINITY;
        stage.finish();

        let stage = timings.stage("Performing main mRMR computations");
        let class_entropy = data.entropy(class);
        let mut result = Vec::with_capacity(limit);
        result.push(MrmrResult {
            rank: 0,
            index: class,
            name: data.attribute_name(class).to_string(),
            entropy: class_entropy,
            mutual_information: class_entropy,
            score: f64::NAN,
        });

        if result.len() < limit && !unselected.is_empty() {
            // seed with the most relevant candidate
            let mut best_pos = 0;
            let mut best_score = f64::NEG_INFINITY;
            for (pos, &i) in unselected.iter().enumerate() {
                if relevance[i] >= best_score {
                    best_score = relevance[i];
                    best_pos = pos;
                }
            }
            let mut last = unselected.remove(best_pos);
            result.push(self.selected_row(data, 1, last, relevance[last], best_score));

            let mut redundancy = vec![0.0_f64; num_attributes];
            while !unselected.is_empty() && result.len() < limit {
                let rank = result.len();
                let num_selected = (rank - 1) as f64;

                let mut best_pos = 0;
                let mut best_score = f64::NEG_INFINITY;
                for (pos, &i) in unselected.iter().enumerate() {
                    redundancy[i] += data.mutual_information(last, i);
                    let score = method.score(relevance[i], redundancy[i] / num_selected);
                    if score >= best_score {
                        best_score = score;
                        best_pos = pos;
                    }
                }

                last = unselected.remove(best_pos);
                result.push(self.selected_row(data, rank, last, relevance[last], best_score));
            }
        }

        for i in degenerate {
            if result.len() >= limit {
                break;
            }
            result.push(MrmrResult {
                rank: result.len(),
                index: i,
                name: data.attribute_name(i).to_string(),
                entropy: 0.0,
                mutual_information: 0.0,
                score: f64::INFINITY,
            });
        }
        stage.finish();

        info!(
            "ranked {} of {} attributes with {}",
            result.len() - 1,
            num_attributes - 1,
            method
        );
        Ok(result)
    }

    fn selected_row<S: Symbol>(
        &self,
        data: &Dataset<S>,
        rank: usize,
        index: usize,
        relevance: f64,
        score: f64,
    ) -> MrmrResult {
        debug!(
            "rank {rank}: attribute {index} ({}) relevance {relevance:e} score {score:e}",
            data.attribute_name(index)
        );
        MrmrResult {
            rank,
            index,
            name: data.attribute_name(index).to_string(),
            entropy: data.entropy(index),
            mutual_information: relevance,
            score,
        }
    }
}
