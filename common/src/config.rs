//! アプリケーション設定
//!
//! 既定値は固定定数。JSONで部分的に上書きできる。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// カタログAPIのベースURL（末尾スラッシュ付き）
    pub base_url: String,
    /// 1回の描画で追加する件数
    pub batch_size: usize,
    /// ページ下端からこの距離以内でスクロール追加読み込み
    pub scroll_threshold: f64,
    /// オートコンプリート候補の最大数
    pub suggestion_limit: usize,
    /// お気に入りを保存するキー
    pub favorites_key: String,
    /// 詳細レコードの材料スロット数（strIngredient1..N）
    pub ingredient_slots: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            batch_size: 6,
            scroll_threshold: 500.0,
            suggestion_limit: 5,
            favorites_key: "favorites".to_string(),
            ingredient_slots: 20,
        }
    }
}

impl Config {
    /// JSON文字列から読み込む（未指定の項目は既定値）
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::Config("batchSize must be at least 1".into()));
        }
        if !self.base_url.ends_with('/') {
            return Err(Error::Config(format!(
                "baseUrl must end with '/': {}",
                self.base_url
            )));
        }
        Ok(())
    }
}
