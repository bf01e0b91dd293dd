// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # mrmr
//!
//! Minimum-Redundancy-Maximum-Relevance (mRMR) feature ranking for discretized
//! tabular data.
//!
//! ## Quick Start
//!
//! ```rust
//! use mrmr::{Dataset, Method, SelectionConfig, Selector};
//! use ndarray::array;
//!
//! // attributes x instances
//! let values = array![
//!     [0u8, 0, 1, 1], // class
//!     [0, 0, 1, 1],   // perfectly correlated with the class
//!     [0, 1, 0, 1],   // independent
//! ];
//! let names = vec!["class".to_string(), "a".to_string(), "b".to_string()];
//! let data = Dataset::new(names, values).unwrap();
//!
//! let config = SelectionConfig::default().with_method(Method::Mid);
//! let rows = Selector::new(config).select(&data).unwrap();
//! assert_eq!(rows[1].name, "a");
//! ```
//!
//! ## Pipeline
//!
//! 1. **Discretization**: a real-valued matrix is mapped onto integral symbols
//!    (`round`, `floor`, `ceiling` or `truncate`).
//! 2. **Attribute statistics**: every attribute caches its empirical
//!    probability mass function and its Shannon entropy in bits.
//! 3. **Pairwise statistics**: mutual information between two attributes is
//!    estimated from their joint histogram on demand.
//! 4. **Selection**: a greedy forward loop ranks attributes by relevance to the
//!    class attribute penalised by redundancy with the previously selected
//!    attribute, using either the difference (MID) or quotient (MIQ) criterion.
//!
//! All entropies and mutual informations are reported in bits.
//!
//! ## Surfaces
//!
//! - [`io`]: whitespace-separated text matrices with a header line.
//! - [`report`]: the six-column ranking report.
//! - [`session`]: an opaque, width-tagged session for foreign callers that push
//!   typed columns and read back flat result arrays.

pub mod dataset;
pub mod discretize;
pub mod error;
pub mod estimators;
pub mod io;
pub mod report;
pub mod selector;
pub mod session;
pub mod symbol;
pub mod timing;

pub use dataset::Dataset;
pub use discretize::Discretization;
pub use error::{MrmrError, Result};
pub use selector::{Method, MrmrResult, SelectionConfig, Selector};
pub use symbol::Symbol;
