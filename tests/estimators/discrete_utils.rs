// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use mrmr::estimators::discrete_utils::count_frequencies;
use rstest::*;

#[rstest]
#[case(vec![], vec![], vec![])]
#[case(vec![10, 20, 10, 30], vec![10, 20, 30], vec![2, 1, 1])]
#[case(vec![3, 1, 2, 1, 3, 3], vec![3, 1, 2], vec![3, 2, 1])]
#[case(vec![-5, 7, -5], vec![-5, 7], vec![2, 1])]
// wide range takes the HashMap path
#[case(vec![100_000, -100_000, 100_000], vec![100_000, -100_000], vec![2, 1])]
fn test_count_frequencies_first_seen_order(
    #[case] data: Vec<i32>,
    #[case] order: Vec<i32>,
    #[case] counts: Vec<usize>,
) {
    let freq = count_frequencies(data.iter());
    assert_eq!(freq.n, data.len());
    assert_eq!(freq.order, order);
    assert_eq!(freq.k(), order.len());
    for (v, c) in order.iter().zip(counts.iter()) {
        assert_eq!(freq.counts[v], *c);
    }
}

#[test]
fn test_frequency_bounds() {
    let data: Vec<u8> = vec![4, 9, 2, 4];
    let freq = count_frequencies(data.iter());
    assert_eq!(freq.bounds(), Some((2, 9)));

    let empty: Vec<u8> = Vec::new();
    assert_eq!(count_frequencies(empty.iter()).bounds(), None);
}
