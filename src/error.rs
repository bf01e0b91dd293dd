// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Error types for dataset construction, parsing and feature selection.
#[derive(Debug, Error)]
pub enum MrmrError {
    #[error("attribute statistics need at least one instance")]
    EmptyAttribute,

    #[error("attribute length mismatch: expected {expected} instances, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("{names} attribute names for {rows} attribute rows")]
    NameCountMismatch { names: usize, rows: usize },

    #[error("attribute index {index} out of range for {num_attributes} attributes")]
    AttributeOutOfRange { index: usize, num_attributes: usize },

    #[error("class attribute {index} out of range for {num_attributes} attributes")]
    ClassOutOfRange { index: usize, num_attributes: usize },

    #[error("unknown discretization '{0}', expected one of round, floor, ceiling, truncate")]
    InvalidDiscretization(String),

    #[error("unknown mRMR method '{0}', expected mid or miq")]
    InvalidMethod(String),

    #[error("cannot put {from} values into a {into} dataset")]
    Narrowing {
        from: &'static str,
        into: &'static str,
    },

    #[error("missing required newline after header")]
    MissingHeaderNewline,

    #[error("line {line}, column {column}: cannot parse '{token}' as a number")]
    Parse {
        line: usize,
        column: usize,
        token: String,
    },

    #[error("line {line}: expected {expected} values, found {actual}")]
    RaggedRow {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MrmrError>;
