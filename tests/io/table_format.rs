// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use mrmr::io::{read_dataset, read_table, write_dataset};
use mrmr::{Dataset, Discretization, MrmrError};
use std::io::Cursor;

const SAMPLE: &str = "class a b\n0 0.4 1.6\n1 1.2 1.4\n\n1 0.9 2.5\n0 0.1 1.5\n";

#[test]
fn read_table_parses_header_and_rows() {
    let table = read_table(Cursor::new(SAMPLE)).unwrap();
    assert_eq!(table.names, vec!["class", "a", "b"]);
    assert_eq!(table.values.dim(), (4, 3));
    assert_eq!(table.values[[2, 2]], 2.5);
}

#[test]
fn read_dataset_discretizes_columns() {
    let data: Dataset<u8> = read_dataset(Cursor::new(SAMPLE), Discretization::Round).unwrap();
    assert_eq!(data.num_attributes(), 3);
    assert_eq!(data.num_instances(), 4);
    assert_eq!(data.attribute(1).to_vec(), vec![0, 1, 1, 0]);
    assert_eq!(data.attribute(2).to_vec(), vec![2, 1, 3, 2]);

    let floored: Dataset<u8> = read_dataset(Cursor::new(SAMPLE), Discretization::Floor).unwrap();
    assert_eq!(floored.attribute(2).to_vec(), vec![1, 1, 2, 1]);
}

#[test]
fn header_without_newline_is_fatal() {
    let err = read_table(Cursor::new("class a b")).unwrap_err();
    assert!(matches!(err, MrmrError::MissingHeaderNewline));
}

#[test]
fn unparsable_value_reports_position() {
    let err = read_table(Cursor::new("x y\n1 2\n3 abc\n")).unwrap_err();
    match err {
        MrmrError::Parse {
            line,
            column,
            token,
        } => {
            assert_eq!((line, column), (3, 2));
            assert_eq!(token, "abc");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn ragged_row_is_rejected() {
    let err = read_table(Cursor::new("x y z\n1 2 3\n4 5\n")).unwrap_err();
    assert!(matches!(
        err,
        MrmrError::RaggedRow {
            line: 3,
            expected: 3,
            actual: 2
        }
    ));
}

#[test]
fn header_without_instances_cannot_build_statistics() {
    let err = read_dataset::<u8, _>(Cursor::new("x y\n"), Discretization::Round).unwrap_err();
    assert!(matches!(err, MrmrError::EmptyAttribute));
}

#[test]
fn write_dataset_emits_tab_separated_instances() {
    let data: Dataset<u8> = read_dataset(Cursor::new(SAMPLE), Discretization::Round).unwrap();
    let mut out = Vec::new();
    write_dataset(&data, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "class\ta\tb\n0\t0\t2\n1\t1\t1\n1\t1\t3\n0\t0\t2\n");
}
