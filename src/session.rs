// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Width-tagged selection session for foreign callers.
//!
//! A [`Session`] is created for one symbol width and fed typed columns. Columns
//! of a narrower type are widened on the way in; wider columns are refused.
//! Operations report status codes (`0` or a row count on success, negative on
//! failure) and keep the last failure message available through
//! [`Session::last_error`]. A failed call leaves the session usable.
//!
//! Results are flattened into parallel arrays in rank order, starting at rank 1:
//! the class row is not part of them. They stay owned by the session until the
//! next run, [`Session::clear_results`], or drop.

use log::warn;

use crate::dataset::Dataset;
use crate::error::MrmrError;
use crate::selector::{Method, MrmrResult, SelectionConfig, Selector};

pub const STATUS_OK: i32 = 0;
/// Invalid method, width mismatch or column length mismatch.
pub const STATUS_INVALID: i32 = -1;
pub const STATUS_NO_DATA: i32 = -2;
pub const STATUS_LABEL_OUT_OF_RANGE: i32 = -3;

/// Storage width of the symbols held by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolWidth {
    U8,
    U16,
    I32,
}

impl TryFrom<u32> for SymbolWidth {
    type Error = u32;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(SymbolWidth::U8),
            1 => Ok(SymbolWidth::U16),
            2 => Ok(SymbolWidth::I32),
            other => Err(other),
        }
    }
}

/// Method codes used across the foreign boundary: 0 = MID, 1 = MIQ.
impl TryFrom<u32> for Method {
    type Error = MrmrError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Method::Mid),
            1 => Ok(Method::Miq),
            other => Err(MrmrError::InvalidMethod(other.to_string())),
        }
    }
}

enum Data {
    U8(Dataset<u8>),
    U16(Dataset<u16>),
    I32(Dataset<i32>),
}

impl Data {
    fn empty(width: SymbolWidth) -> Self {
        match width {
            SymbolWidth::U8 => Data::U8(Dataset::default()),
            SymbolWidth::U16 => Data::U16(Dataset::default()),
            SymbolWidth::I32 => Data::I32(Dataset::default()),
        }
    }

    fn num_attributes(&self) -> usize {
        match self {
            Data::U8(d) => d.num_attributes(),
            Data::U16(d) => d.num_attributes(),
            Data::I32(d) => d.num_attributes(),
        }
    }

    fn select(&self, selector: &Selector) -> Result<Vec<MrmrResult>, MrmrError> {
        match self {
            Data::U8(d) => selector.select(d),
            Data::U16(d) => selector.select(d),
            Data::I32(d) => selector.select(d),
        }
    }
}

/// Flat result arrays, one entry per ranked attribute (class row excluded).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionResults {
    pub names: Vec<String>,
    pub entropy: Vec<f64>,
    pub mutual_information: Vec<f64>,
    pub score: Vec<f64>,
}

impl SessionResults {
    fn from_rows(rows: &[MrmrResult]) -> Self {
        let ranked = rows.iter().filter(|r| r.rank > 0);
        Self {
            names: ranked.clone().map(|r| r.name.clone()).collect(),
            entropy: ranked.clone().map(|r| r.entropy).collect(),
            mutual_information: ranked.clone().map(|r| r.mutual_information).collect(),
            score: ranked.map(|r| r.score).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn widened<A: Copy, B: From<A>>(values: &[A]) -> Vec<B> {
    values.iter().map(|&v| B::from(v)).collect()
}

pub struct Session {
    width: SymbolWidth,
    data: Option<Data>,
    results: SessionResults,
    error: String,
}

impl Session {
    pub fn new(width: SymbolWidth) -> Self {
        Self {
            width,
            data: None,
            results: SessionResults::default(),
            error: String::new(),
        }
    }

    pub fn width(&self) -> SymbolWidth {
        self.width
    }

    pub fn num_attributes(&self) -> usize {
        self.data.as_ref().map_or(0, Data::num_attributes)
    }

    fn data_mut(&mut self) -> &mut Data {
        let width = self.width;
        self.data.get_or_insert_with(|| Data::empty(width))
    }

    fn status(&mut self, outcome: Result<usize, MrmrError>) -> i32 {
        match outcome {
            Ok(_) => STATUS_OK,
            Err(e) => self.fail(STATUS_INVALID, e.to_string()),
        }
    }

    fn fail(&mut self, status: i32, message: String) -> i32 {
        warn!("{message}");
        self.error = message;
        status
    }

    /// Add or replace an 8-bit unsigned column.
    pub fn append_u8(&mut self, name: &str, values: &[u8]) -> i32 {
        let outcome = match self.data_mut() {
            Data::U8(d) => d.set_attribute_slice(name, values),
            Data::U16(d) => d.set_attribute_slice(name, &widened::<u8, u16>(values)),
            Data::I32(d) => d.set_attribute_slice(name, &widened::<u8, i32>(values)),
        };
        self.status(outcome)
    }

    /// Add or replace a 16-bit unsigned column.
    pub fn append_u16(&mut self, name: &str, values: &[u16]) -> i32 {
        let outcome = match self.data_mut() {
            Data::U8(_) => Err(MrmrError::Narrowing {
                from: "uint16",
                into: "uint8",
            }),
            Data::U16(d) => d.set_attribute_slice(name, values),
            Data::I32(d) => d.set_attribute_slice(name, &widened::<u16, i32>(values)),
        };
        self.status(outcome)
    }

    /// Add or replace a 32-bit signed column.
    pub fn append_i32(&mut self, name: &str, values: &[i32]) -> i32 {
        let outcome = match self.data_mut() {
            Data::U8(_) => Err(MrmrError::Narrowing {
                from: "int32",
                into: "uint8",
            }),
            Data::U16(_) => Err(MrmrError::Narrowing {
                from: "int32",
                into: "uint16",
            }),
            Data::I32(d) => d.set_attribute_slice(name, values),
        };
        self.status(outcome)
    }

    /// Run the selection with a foreign method code (0 = MID, 1 = MIQ).
    pub fn run_with_code(&mut self, method: u32, label: usize, num_features: usize) -> i32 {
        match Method::try_from(method) {
            Ok(method) => self.run(method, label, num_features),
            Err(e) => {
                self.clear_results();
                self.fail(STATUS_INVALID, e.to_string())
            }
        }
    }

    /// Rank all attributes against `label` (0-based).
    ///
    /// Returns the number of ranked attributes, or a negative status.
    pub fn run(&mut self, method: Method, label: usize, num_features: usize) -> i32 {
        self.clear_results();

        let Some(data) = self.data.as_ref().filter(|d| d.num_attributes() > 0) else {
            return self.fail(STATUS_NO_DATA, "data not set".to_string());
        };

        let selector = Selector::new(
            SelectionConfig::default()
                .with_class_attribute(label)
                .with_num_features(num_features)
                .with_method(method),
        );
        match data.select(&selector) {
            Ok(rows) => {
                self.results = SessionResults::from_rows(&rows);
                i32::try_from(self.results.len()).unwrap_or(i32::MAX)
            }
            Err(e @ MrmrError::ClassOutOfRange { .. }) => {
                self.fail(STATUS_LABEL_OUT_OF_RANGE, format!("label out of range: {e}"))
            }
            Err(e) => self.fail(STATUS_INVALID, e.to_string()),
        }
    }

    pub fn results(&self) -> &SessionResults {
        &self.results
    }

    /// Message of the most recent failure; empty if nothing has failed yet.
    pub fn last_error(&self) -> &str {
        &self.error
    }

    /// Release the result arrays of the last run.
    pub fn clear_results(&mut self) {
        self.results = SessionResults::default();
    }
}
