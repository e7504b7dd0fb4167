// ソートアルゴリズム
//
// 3つの独立した純粋関数と、それぞれをSortAlgorithmとして包む実装を提供する。
// どの実装も共有可変状態を持たない。

pub mod exchange;
pub mod library;
pub mod selection;

use crate::core::{AlgorithmKind, SortAlgorithm};

pub use exchange::{
    exchange_sort, exchange_sort_by, exchange_sort_with_passes, rank_descending_by, ExchangeSort,
};
pub use library::{library_sort, LibrarySort};
pub use selection::{selection_sort, selection_sort_with_comparisons, SelectionSort};

/// 種類に対応するアルゴリズム実装を作成
pub fn algorithm_for(kind: AlgorithmKind) -> Box<dyn SortAlgorithm> {
    match kind {
        AlgorithmKind::Library => Box::new(LibrarySort),
        AlgorithmKind::Exchange => Box::new(ExchangeSort),
        AlgorithmKind::Selection => Box::new(SelectionSort),
    }
}

/// 非減少順に並んでいるかどうか
#[inline]
pub fn is_sorted(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
