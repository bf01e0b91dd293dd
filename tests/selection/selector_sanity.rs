// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use mrmr::timing::Timings;
use mrmr::{Method, MrmrError, SelectionConfig, Selector};
use rstest::rstest;

use crate::test_helpers::{dataset_from_rows, random_dataset};

#[rstest]
#[case(Method::Mid, 6, 0)]
#[case(Method::Miq, 6, 0)]
#[case(Method::Mid, 9, 4)]
#[case(Method::Miq, 3, 2)]
fn all_features_yields_one_row_per_attribute(
    #[case] method: Method,
    #[case] num_attributes: usize,
    #[case] class: usize,
) {
    let data = random_dataset(num_attributes, 60, 4, 21);
    let config = SelectionConfig::default()
        .with_class_attribute(class)
        .with_method(method);
    let rows = Selector::new(config).select(&data).unwrap();

    assert_eq!(rows.len(), num_attributes);
    for (rank, row) in rows.iter().enumerate() {
        assert_eq!(row.rank, rank);
        assert_eq!(row.name, data.attribute_name(row.index));
    }
    let mut indices: Vec<usize> = rows.iter().map(|r| r.index).collect();
    indices.sort_unstable();
    assert_eq!(indices, (0..num_attributes).collect::<Vec<_>>());
}

#[test]
fn class_row_comes_first() {
    let data = random_dataset(4, 40, 3, 5);
    let rows = Selector::new(SelectionConfig::default().with_class_attribute(2))
        .select(&data)
        .unwrap();
    let class_row = &rows[0];
    assert_eq!(class_row.rank, 0);
    assert_eq!(class_row.index, 2);
    assert_eq!(class_row.entropy, data.entropy(2));
    assert_eq!(class_row.mutual_information, data.entropy(2));
    assert!(class_row.score.is_nan());
}

#[rstest]
#[case(1, 2)]
#[case(2, 3)]
#[case(4, 5)]
#[case(50, 6)]
fn num_features_limits_rows(#[case] num_features: usize, #[case] expected_rows: usize) {
    let data = random_dataset(6, 50, 5, 9);
    let rows = Selector::new(SelectionConfig::default().with_num_features(num_features))
        .select(&data)
        .unwrap();
    assert_eq!(rows.len(), expected_rows);
}

#[test]
fn degenerate_attributes_come_last_in_index_order() {
    let data = dataset_from_rows(&[
        vec![0, 1, 0, 1, 1, 0],
        vec![4, 4, 4, 4, 4, 4],
        vec![0, 1, 1, 1, 0, 0],
        vec![2, 2, 2, 2, 2, 2],
        vec![0, 0, 1, 1, 2, 2],
        vec![7, 7, 7, 7, 7, 7],
    ]);
    let rows = Selector::new(SelectionConfig::default()).select(&data).unwrap();
    assert_eq!(rows.len(), 6);

    let tail: Vec<usize> = rows[3..].iter().map(|r| r.index).collect();
    assert_eq!(tail, vec![1, 3, 5]);
    for row in &rows[3..] {
        assert_eq!(row.entropy, 0.0);
        assert_eq!(row.mutual_information, 0.0);
        assert_eq!(row.score, f64::INFINITY);
    }
    for row in &rows[1..3] {
        assert!(row.score.is_finite());
        assert!(data.entropy(row.index) > 0.0);
    }
}

#[test]
fn degenerate_tail_respects_the_row_limit() {
    let data = dataset_from_rows(&[
        vec![0, 1, 0, 1],
        vec![0, 1, 1, 1],
        vec![3, 3, 3, 3],
        vec![5, 5, 5, 5],
    ]);
    let rows = Selector::new(SelectionConfig::default().with_num_features(2))
        .select(&data)
        .unwrap();
    let indices: Vec<usize> = rows.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn only_degenerate_candidates() {
    let data = dataset_from_rows(&[vec![0, 1, 0, 1], vec![3, 3, 3, 3], vec![5, 5, 5, 5]]);
    let rows = Selector::new(SelectionConfig::default()).select(&data).unwrap();
    let indices: Vec<usize> = rows.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert!(rows[1..].iter().all(|r| r.score == f64::INFINITY));
}

#[test]
fn class_only_dataset_yields_class_row() {
    let data = dataset_from_rows(&[vec![0, 1, 1]]);
    let rows = Selector::new(SelectionConfig::default()).select(&data).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].index, 0);
}

#[test]
fn class_out_of_range_is_rejected_before_selection() {
    let data = random_dataset(3, 10, 3, 1);
    let err = Selector::new(SelectionConfig::default().with_class_attribute(3))
        .select(&data)
        .unwrap_err();
    assert!(matches!(
        err,
        MrmrError::ClassOutOfRange {
            index: 3,
            num_attributes: 3
        }
    ));
}

#[test]
fn selected_rows_report_relevance_and_entropy() {
    let data = random_dataset(5, 90, 4, 31);
    let rows = Selector::new(SelectionConfig::default()).select(&data).unwrap();
    for row in &rows[1..] {
        assert_abs_diff_eq!(row.entropy, data.entropy(row.index), epsilon = 1e-15);
        assert_abs_diff_eq!(
            row.mutual_information,
            data.mutual_information(0, row.index),
            epsilon = 1e-15
        );
    }
    // the seed pick is scored by its relevance alone
    assert_eq!(rows[1].score, rows[1].mutual_information);
}

#[test]
fn selection_is_deterministic() {
    let data = random_dataset(7, 100, 6, 77);
    let selector = Selector::new(SelectionConfig::default().with_method(Method::Miq));
    assert_eq!(selector.select(&data).unwrap().len(), 7);
    let first: Vec<usize> = selector.select(&data).unwrap().iter().map(|r| r.index).collect();
    let second: Vec<usize> = selector.select(&data).unwrap().iter().map(|r| r.index).collect();
    assert_eq!(first, second);
}

#[test]
fn select_timed_records_both_stages() {
    let data = random_dataset(4, 30, 3, 3);
    let mut timings = Timings::new();
    Selector::new(SelectionConfig::default())
        .select_timed(&data, &mut timings)
        .unwrap();
    assert_eq!(timings.stages().len(), 2);
    assert!(timings.stages()[0].0.starts_with("Calculating mutual information"));
    assert!(timings.stages()[1].0.starts_with("Performing main mRMR"));
}

#[rstest]
#[case("mid", Method::Mid)]
#[case("MIQ", Method::Miq)]
fn method_from_str(#[case] keyword: &str, #[case] expected: Method) {
    assert_eq!(keyword.parse::<Method>().unwrap(), expected);
}

#[test]
fn unknown_method_is_rejected_up_front() {
    let err = "maxrel".parse::<Method>().unwrap_err();
    assert!(matches!(err, MrmrError::InvalidMethod(ref s) if s == "maxrel"));
}
