//! レシピ詳細（モーダル）
//!
//! 詳細取得は取り消せないため、連続で開いた場合は世代番号で
//! 最後に要求したものだけを反映する。

use crate::catalog::{CatalogClient, Transport};
use crate::error::{Error, Result};
use crate::favorites::{FavoriteLabel, FavoritesStore, KeyValueStore};
use crate::types::MealDetail;
use log::info;

/// 詳細を取得する。該当なしは `Error::NotFound`
pub async fn load_detail<T: Transport>(client: &CatalogClient<T>, id: &str) -> Result<MealDetail> {
    match client.lookup_by_id(id).await? {
        Some(detail) => {
            info!("detail loaded: {} ({})", detail.name, detail.id);
            Ok(detail)
        }
        None => Err(Error::NotFound(id.to_string())),
    }
}

/// 詳細リクエストの世代
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailTicket(u64);

/// 最後に発行したリクエストの世代を覚える
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailRequests {
    latest: u64,
}

impl DetailRequests {
    pub fn begin(&mut self) -> DetailTicket {
        self.latest += 1;
        DetailTicket(self.latest)
    }

    /// このチケットの応答を反映してよいか
    pub fn is_current(&self, ticket: DetailTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// モーダルに表示する内容
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub meal: MealDetail,
    pub favorite_label: FavoriteLabel,
}

impl DetailView {
    /// 現在のお気に入り状態からボタン表示を決める
    pub fn new<S: KeyValueStore>(meal: MealDetail, favorites: &FavoritesStore<S>) -> Self {
        let favorite_label = FavoriteLabel::for_status(favorites.is_favorite(&meal.id));
        Self { meal, favorite_label }
    }

    pub fn ingredient_lines(&self) -> Vec<String> {
        self.meal.ingredients.iter().map(|i| i.display_line()).collect()
    }

    /// お気に入りを切り替え、ボタン表示を更新する
    pub fn toggle_favorite<S: KeyValueStore>(&mut self, favorites: &FavoritesStore<S>) -> Result<FavoriteLabel> {
        self.favorite_label = favorites.toggle(&self.meal.id)?;
        Ok(self.favorite_label)
    }
}
