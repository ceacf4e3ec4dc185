//! 検索と絞込み
//!
//! 1回の検索 = 名前検索APIを1回呼び、結果に対してカテゴリ → 地域 → 材料の
//! 順でフィルタを適用する。結果は [`SearchSession`] に保持し、描画カーソルは
//! 検索のたびに0へ戻る。

use crate::catalog::{CatalogClient, Transport};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::render::{render_next_batch, RenderCursor, ScrollMetrics};
use crate::types::{FilterSelection, MealSummary};
use log::{debug, info};

/// 検索語と絞込み条件の事前チェック
///
/// # Returns
/// 前後の空白を除いた検索語。語もフィルタも無ければ `Error::Validation`
pub fn validate_query<'a>(term: &'a str, filters: &FilterSelection) -> Result<&'a str> {
    let term = term.trim();
    if term.is_empty() && filters.is_empty() {
        return Err(Error::Validation);
    }
    Ok(term)
}

/// 絞込みを適用（カテゴリ → 地域 → 材料）
///
/// 材料はレコードのいずれかのフィールド値との完全一致で判定する
pub fn apply_filters(meals: &[MealSummary], filters: &FilterSelection) -> Vec<MealSummary> {
    meals
        .iter()
        .filter(|m| match &filters.category {
            Some(category) => m.category.as_ref() == Some(category),
            None => true,
        })
        .filter(|m| match &filters.area {
            Some(area) => m.area.as_ref() == Some(area),
            None => true,
        })
        .filter(|m| match &filters.ingredient {
            Some(ingredient) => m.has_field_value(ingredient),
            None => true,
        })
        .cloned()
        .collect()
}

/// 現在の検索セッション
#[derive(Debug, Clone)]
pub struct SearchSession {
    /// 検索APIの結果（未フィルタ）。オートコンプリートもこれを使う
    results: Vec<MealSummary>,
    filters: FilterSelection,
    filtered: Vec<MealSummary>,
    cursor: RenderCursor,
    batch_size: usize,
    scroll_threshold: f64,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl SearchSession {
    pub fn new(config: &Config) -> Self {
        Self {
            results: Vec::new(),
            filters: FilterSelection::default(),
            filtered: Vec::new(),
            cursor: RenderCursor::new(),
            batch_size: config.batch_size,
            scroll_threshold: config.scroll_threshold,
        }
    }

    pub fn results(&self) -> &[MealSummary] {
        &self.results
    }

    pub fn filtered(&self) -> &[MealSummary] {
        &self.filtered
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn cursor(&self) -> RenderCursor {
        self.cursor
    }

    /// 新しい検索結果で状態を置き換え、最初のバッチを返す
    ///
    /// 絞込み後が0件なら `Error::EmptyResult`（結果自体は保持される）
    pub fn begin(&mut self, meals: Vec<MealSummary>, filters: FilterSelection) -> Result<Vec<MealSummary>> {
        self.filtered = apply_filters(&meals, &filters);
        self.results = meals;
        self.filters = filters;
        self.cursor.reset();

        debug!(
            "search epoch: {} results, {} after filters",
            self.results.len(),
            self.filtered.len()
        );

        if self.filtered.is_empty() {
            return Err(Error::EmptyResult);
        }
        Ok(self.next_batch())
    }

    /// 未描画の要素が残っているか
    pub fn has_more(&self) -> bool {
        self.cursor.has_remaining(self.filtered.len())
    }

    /// 次のバッチを返し、カーソルを進める
    pub fn next_batch(&mut self) -> Vec<MealSummary> {
        let (cursor, batch) = render_next_batch(&self.filtered, self.cursor, self.batch_size);
        let batch = batch.to_vec();
        self.cursor = cursor;
        batch
    }

    /// 表示中の結果を打ち切る（エラー表示時）
    ///
    /// 未フィルタの結果はオートコンプリート用に残す
    pub fn clear_display(&mut self) {
        self.filtered.clear();
        self.cursor.reset();
    }

    /// スクロールイベント
    ///
    /// 下端付近かつ未描画が残っていれば次のバッチ、それ以外は空
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Vec<MealSummary> {
        if metrics.near_bottom(self.scroll_threshold) && self.has_more() {
            self.next_batch()
        } else {
            Vec::new()
        }
    }
}

/// 検索を実行し、最初のバッチを返す
///
/// 検証エラー時は通信しない。検索語が空でもフィルタがあればそのまま
/// 空の検索語でAPIを呼ぶ。
pub async fn search<T: Transport>(
    client: &CatalogClient<T>,
    session: &mut SearchSession,
    term: &str,
    filters: FilterSelection,
) -> Result<Vec<MealSummary>> {
    let term = validate_query(term, &filters)?;
    let meals = client.search_by_name(term).await?;
    info!("search '{}': {} meals", term, meals.len());
    session.begin(meals, filters)
}
