//! 隣接交換ソート（バブルソート）
//!
//! パスごとに隣接ペアを比較・交換し、交換が一度も起きないパスで打ち切る。
//! 整列済み入力ではO(n)、最悪O(n²)。
//!
//! 比較・交換の本体は[`exchange_sort_by`]として汎用化しており、
//! スカラー値による降順の並べ替え（[`rank_descending_by`]）でも再利用する。

use crate::core::{AlgorithmKind, SortAlgorithm};

/// 比較・交換による安定な並べ替え
///
/// `out_of_order(a, b)`が真のとき隣接する`a`と`b`を交換する。
/// 厳密に順序が逆の隣接ペアだけが交換されるため、等しい要素の相対順序は保たれる。
/// 実行したパス数を返す（要素数が1以下なら0）。
pub fn exchange_sort_by<T, F>(items: &mut [T], mut out_of_order: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = items.len();
    let mut passes = 0;

    for i in 0..len.saturating_sub(1) {
        passes += 1;
        let mut swapped = false;
        for j in 0..len - i - 1 {
            if out_of_order(&items[j], &items[j + 1]) {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    passes
}

/// スカラー値の降順に並べ替える（安定・早期終了あり）
pub fn rank_descending_by<T, K, F>(items: &mut [T], mut key: F) -> usize
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    exchange_sort_by(items, |a, b| key(a) < key(b))
}

/// 非減少順に並べ替え、実行したパス数も返す
pub fn exchange_sort_with_passes(mut data: Vec<i64>) -> (Vec<i64>, usize) {
    let passes = exchange_sort_by(&mut data, |a, b| a > b);
    (data, passes)
}

pub fn exchange_sort(data: Vec<i64>) -> Vec<i64> {
    exchange_sort_with_passes(data).0
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ExchangeSort;

impl SortAlgorithm for ExchangeSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Exchange
    }

    fn sort(&self, input: Vec<i64>) -> Vec<i64> {
        exchange_sort(input)
    }
}
