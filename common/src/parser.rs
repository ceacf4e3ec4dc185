//! APIレスポンスパーサー
//!
//! カタログAPIのレスポンスは `{"meals": [...]}` か `{"meals": null}` の形。
//! null・キー欠落は「結果なし」として空配列に正規化する。

use crate::error::{Error, Result};
use crate::types::{Ingredient, ListField, MealDetail, MealSummary, UNCATEGORIZED};
use serde::Deserialize;
use serde_json::{Map, Value};

type Record = Map<String, Value>;

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    meals: Option<Vec<Record>>,
}

/// レスポンス本文からレコード配列を取り出す
///
/// # Returns
/// * `Ok(Vec)` - `meals` が null・欠落の場合は空
/// * `Err(Error::Json)` - JSONとして不正
pub fn parse_envelope(body: &str) -> Result<Vec<Record>> {
    let envelope: Envelope = serde_json::from_str(body)?;
    Ok(envelope.meals.unwrap_or_default())
}

fn string_field(record: &Record, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(str::to_string)
}

/// 空白のみの値は未設定として扱う
fn present_field(record: &Record, key: &str) -> Option<String> {
    string_field(record, key).filter(|v| !v.trim().is_empty())
}

fn required_field(record: &Record, key: &str) -> Result<String> {
    string_field(record, key)
        .ok_or_else(|| Error::Transport(format!("レコードに {} がありません", key)))
}

/// 検索結果のレコードを MealSummary に変換
pub fn summary_from_record(record: &Record) -> Result<MealSummary> {
    let field_values = record
        .values()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();

    Ok(MealSummary {
        id: required_field(record, "idMeal")?,
        name: required_field(record, "strMeal")?,
        thumbnail_url: string_field(record, "strMealThumb").unwrap_or_default(),
        category: present_field(record, "strCategory"),
        area: present_field(record, "strArea"),
        field_values,
    })
}

/// 材料スロット（strIngredient1..=slots）を順に走査し、空でないものだけ集める
pub fn extract_ingredients(record: &Record, slots: usize) -> Vec<Ingredient> {
    (1..=slots)
        .filter_map(|i| {
            let ingredient = present_field(record, &format!("strIngredient{}", i))?;
            let measure = string_field(record, &format!("strMeasure{}", i)).unwrap_or_default();
            Some(Ingredient { ingredient, measure })
        })
        .collect()
}

/// 詳細レコードを MealDetail に変換
pub fn detail_from_record(record: &Record, slots: usize) -> Result<MealDetail> {
    Ok(MealDetail {
        id: required_field(record, "idMeal")?,
        name: required_field(record, "strMeal")?,
        thumbnail_url: string_field(record, "strMealThumb").unwrap_or_default(),
        category: present_field(record, "strCategory").unwrap_or_else(|| UNCATEGORIZED.to_string()),
        instructions: string_field(record, "strInstructions").unwrap_or_default(),
        video_url: present_field(record, "strYoutube"),
        ingredients: extract_ingredients(record, slots),
    })
}

/// search.php のレスポンスをパース
pub fn parse_search_response(body: &str) -> Result<Vec<MealSummary>> {
    parse_envelope(body)?.iter().map(summary_from_record).collect()
}

/// lookup.php のレスポンスをパース（先頭レコードのみ）
pub fn parse_lookup_response(body: &str, slots: usize) -> Result<Option<MealDetail>> {
    parse_envelope(body)?
        .first()
        .map(|record| detail_from_record(record, slots))
        .transpose()
}

/// list.php のレスポンスをパース（受信順のまま）
pub fn parse_list_response(body: &str, field: ListField) -> Result<Vec<String>> {
    Ok(parse_envelope(body)?
        .iter()
        .filter_map(|record| string_field(record, field.record_key()))
        .collect())
}
