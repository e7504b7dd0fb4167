//! 標準ライブラリのソート
//!
//! pattern-defeating quicksort（最悪でもO(n log n)）。他の2つのアルゴリズムとの比較用ベースライン。

use crate::core::{AlgorithmKind, SortAlgorithm};

/// 標準ライブラリのunstableソートで並べ替える
#[inline]
pub fn library_sort(mut data: Vec<i64>) -> Vec<i64> {
    data.sort_unstable();
    data
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LibrarySort;

impl SortAlgorithm for LibrarySort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Library
    }

    fn sort(&self, input: Vec<i64>) -> Vec<i64> {
        library_sort(input)
    }
}
