//! オートコンプリート
//!
//! 現在の（未フィルタの）検索結果から名前を部分一致で探す。
//! 新たな問い合わせはしないので、最初の検索までは常に空。

use crate::types::MealSummary;

/// 大文字小文字を区別しない部分一致で、最大 `limit` 件の名前を返す
pub fn suggest(meals: &[MealSummary], partial: &str, limit: usize) -> Vec<String> {
    if partial.is_empty() {
        return Vec::new();
    }

    let needle = partial.to_lowercase();
    meals
        .iter()
        .filter(|m| m.name.to_lowercase().contains(&needle))
        .take(limit)
        .map(|m| m.name.clone())
        .collect()
}

/// 候補リストの表示状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suggestions {
    pub items: Vec<String>,
}

impl Suggestions {
    pub fn for_input(meals: &[MealSummary], input: &str, limit: usize) -> Self {
        Self {
            items: suggest(meals, input, limit),
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.items.is_empty()
    }

    pub fn hide(&mut self) {
        self.items.clear();
    }
}
