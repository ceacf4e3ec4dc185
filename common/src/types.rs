//! レシピカタログの型定義
//!
//! Web(WASM)とテストで共有される型:
//! - MealSummary: 検索結果の一覧表示用
//! - MealDetail: モーダル表示用の完全なレコード
//! - FilterSelection: カテゴリ・地域・材料の3つの絞込み条件

use serde::{Deserialize, Serialize};

/// 検索結果の1件（一覧表示用）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSummary {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,

    #[serde(default)]
    pub category: Option<String>,

    /// 地域（strArea）。地域フィルタで使う
    #[serde(default)]
    pub area: Option<String>,

    /// レコードの全文字列フィールド値（材料フィルタのゆるい一致判定用）
    #[serde(default)]
    pub field_values: Vec<String>,
}

impl MealSummary {
    /// いずれかのフィールド値が `value` と完全一致するか
    pub fn has_field_value(&self, value: &str) -> bool {
        self.field_values.iter().any(|v| v == value)
    }
}

/// 材料と分量
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub ingredient: String,
    #[serde(default)]
    pub measure: String,
}

impl Ingredient {
    /// 表示用の1行（"分量 材料"）
    pub fn display_line(&self) -> String {
        format!("{} {}", self.measure, self.ingredient)
    }
}

pub const UNCATEGORIZED: &str = "Uncategorized";

/// レシピ詳細
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealDetail {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    /// 未設定の場合は "Uncategorized"
    pub category: String,
    pub instructions: String,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

/// 一覧APIで取得するフィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListField {
    Category,
    Area,
    Ingredient,
}

impl ListField {
    pub const ALL: [ListField; 3] = [ListField::Category, ListField::Area, ListField::Ingredient];

    /// list.php のクエリキー
    pub fn query_key(&self) -> &'static str {
        match self {
            ListField::Category => "c",
            ListField::Area => "a",
            ListField::Ingredient => "i",
        }
    }

    /// レスポンスのレコード内で値を持つキー
    pub fn record_key(&self) -> &'static str {
        match self {
            ListField::Category => "strCategory",
            ListField::Area => "strArea",
            ListField::Ingredient => "strIngredient",
        }
    }

    /// セレクトボックスの「すべて」オプション表示
    pub fn any_label(&self) -> &'static str {
        match self {
            ListField::Category => "All Categories",
            ListField::Area => "All Regions",
            ListField::Ingredient => "All Ingredients",
        }
    }
}

/// 絞込み条件（各項目は未設定か1つの値）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub category: Option<String>,
    pub area: Option<String>,
    pub ingredient: Option<String>,
}

impl FilterSelection {
    /// セレクトボックスの値から作る（空文字は未設定）
    pub fn from_values(category: &str, area: &str, ingredient: &str) -> Self {
        fn non_empty(value: &str) -> Option<String> {
            (!value.is_empty()).then(|| value.to_string())
        }

        Self {
            category: non_empty(category),
            area: non_empty(area),
            ingredient: non_empty(ingredient),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.area.is_none() && self.ingredient.is_none()
    }

    pub fn set(&mut self, field: ListField, value: &str) {
        let value = (!value.is_empty()).then(|| value.to_string());
        match field {
            ListField::Category => self.category = value,
            ListField::Area => self.area = value,
            ListField::Ingredient => self.ingredient = value,
        }
    }
}
