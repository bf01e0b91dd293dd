// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plain-text tabular format.
//!
//! The first line holds whitespace-separated attribute names and must end with a
//! newline. Every following non-blank line is one instance: whitespace-separated
//! real values, one per attribute, in header order.

use std::io::{BufRead, Write};

use log::debug;
use ndarray::Array2;

use crate::dataset::Dataset;
use crate::discretize::Discretization;
use crate::error::{MrmrError, Result};
use crate::symbol::Symbol;

/// Raw header names and instances x attributes values, before discretization.
#[derive(Debug, Clone)]
pub struct Table {
    pub names: Vec<String>,
    pub values: Array2<f64>,
}

/// Parse the header line and the numeric matrix.
pub fn read_table<R: BufRead>(mut reader: R) -> Result<Table> {
    let mut header = String::new();
    reader.read_line(&mut header)?;
    if !header.ends_with('\n') {
        return Err(MrmrError::MissingHeaderNewline);
    }
    let names: Vec<String> = header.split_whitespace().map(str::to_string).collect();
    let num_attributes = names.len();

    let mut flat: Vec<f64> = Vec::new();
    let mut num_instances = 0usize;
    for (offset, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = offset + 2;
        if line.trim().is_empty() {
            continue;
        }
        let before = flat.len();
        for (column, token) in line.split_whitespace().enumerate() {
            let value = token.parse::<f64>().map_err(|_| MrmrError::Parse {
                line: line_no,
                column: column + 1,
                token: token.to_string(),
            })?;
            flat.push(value);
        }
        let actual = flat.len() - before;
        if actual != num_attributes {
            return Err(MrmrError::RaggedRow {
                line: line_no,
                expected: num_attributes,
                actual,
            });
        }
        num_instances += 1;
    }

    debug!("read {num_instances} instances of {num_attributes} attributes");
    let values = Array2::from_shape_vec((num_instances, num_attributes), flat)
        .expect("every accepted row holds exactly one value per attribute");
    Ok(Table { names, values })
}

/// Read a table and discretize it into a dataset.
pub fn read_dataset<S: Symbol, R: BufRead>(reader: R, policy: Discretization) -> Result<Dataset<S>> {
    let table = read_table(reader)?;
    Dataset::from_instances(table.names, table.values.view(), policy)
}

/// Write the discretized dataset back out: tab-separated header, then one
/// tab-separated line per instance.
pub fn write_dataset<S: Symbol, W: Write>(data: &Dataset<S>, mut writer: W) -> Result<()> {
    if data.num_attributes() == 0 {
        return Ok(());
    }
    writeln!(writer, "{}", data.names().join("\t"))?;
    let values = data.values();
    for instance in values.columns() {
        let line: Vec<String> = instance.iter().map(|v| v.to_string()).collect();
        writeln!(writer, "{}", line.join("\t"))?;
    }
    writer.flush()?;
    Ok(())
}
