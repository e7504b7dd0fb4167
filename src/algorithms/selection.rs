//! 選択ソート
//!
//! 未整列部分の最小値を探して先頭と交換する。入力の並びに関係なく比較回数は常にn(n-1)/2。

use crate::core::{AlgorithmKind, SortAlgorithm};

/// 非減少順に並べ替え、比較回数も返す
pub fn selection_sort_with_comparisons(mut data: Vec<i64>) -> (Vec<i64>, usize) {
    let len = data.len();
    let mut comparisons = 0;

    for i in 0..len.saturating_sub(1) {
        let mut min_index = i;
        for j in (i + 1)..len {
            comparisons += 1;
            if data[j] < data[min_index] {
                min_index = j;
            }
        }
        data.swap(i, min_index);
    }

    (data, comparisons)
}

pub fn selection_sort(data: Vec<i64>) -> Vec<i64> {
    selection_sort_with_comparisons(data).0
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionSort;

impl SortAlgorithm for SelectionSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Selection
    }

    fn sort(&self, input: Vec<i64>) -> Vec<i64> {
        selection_sort(input)
    }
}
