// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::io::Write;

use crate::error::Result;
use crate::selector::MrmrResult;

const COLUMNS: [&str; 6] = [
    "Rank",
    "Index",
    "Name",
    "Entropy",
    "Mutual Information",
    "mRMR score",
];
const WIDTHS: [usize; 6] = [5, 6, 14, 14, 19, 14];

/// Format a float as `d.dddddde±XX`.
pub fn scientific(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let formatted = format!("{value:.6e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        None => formatted,
    }
}

/// Write the six-column ranking report, one right-aligned line per row.
///
/// The name column widens to fit the longest of `attribute_names` plus one
/// space, so a truncated ranking is padded like the full one.
pub fn write_report<W: Write>(
    rows: &[MrmrResult],
    attribute_names: &[String],
    mut writer: W,
) -> Result<()> {
    let mut widths = WIDTHS;
    let longest = attribute_names
        .iter()
        .map(String::len)
        .chain(rows.iter().map(|r| r.name.len()))
        .max();
    if let Some(longest) = longest {
        widths[2] = widths[2].max(longest + 1);
    }

    for (column, width) in COLUMNS.iter().zip(widths.iter()) {
        write!(writer, "{column:>width$}")?;
    }
    writeln!(writer)?;

    for r in rows {
        writeln!(
            writer,
            "{:>w0$}{:>w1$}{:>w2$}{:>w3$}{:>w4$}{:>w5$}",
            r.rank,
            r.index,
            r.name,
            scientific(r.entropy),
            scientific(r.mutual_information),
            scientific(r.score),
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
            w4 = widths[4],
            w5 = widths[5],
        )?;
    }
    writer.flush()?;
    Ok(())
}
