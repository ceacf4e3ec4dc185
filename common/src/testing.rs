//! テスト用のスクリプト化された通信
//!
//! URLごとに応答（本文 or 失敗）を登録し、リクエスト履歴を記録する。
//! 未登録のURLは `Error::Transport` になる。

use crate::catalog::Transport;
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Reply {
    Body(String),
    Fail(String),
}

#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: RefCell<HashMap<String, Reply>>,
    requests: RefCell<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// `url` への応答本文を登録
    pub fn respond(&self, url: &str, body: &str) {
        self.replies
            .borrow_mut()
            .insert(url.to_string(), Reply::Body(body.to_string()));
    }

    /// `url` を通信失敗にする
    pub fn fail(&self, url: &str, reason: &str) {
        self.replies
            .borrow_mut()
            .insert(url.to_string(), Reply::Fail(reason.to_string()));
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        match self.replies.borrow().get(url).cloned() {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Fail(reason)) => Err(Error::Transport(reason)),
            None => Err(Error::Transport(format!("unexpected request: {}", url))),
        }
    }
}

/// 検索レスポンスの本文を組み立てる
///
/// 各要素は (id, 名前, カテゴリ, 地域)
pub fn search_body(meals: &[(&str, &str, &str, &str)]) -> String {
    let records: Vec<serde_json::Value> = meals
        .iter()
        .map(|(id, name, category, area)| {
            serde_json::json!({
                "idMeal": id,
                "strMeal": name,
                "strCategory": category,
                "strArea": area,
                "strMealThumb": format!("https://www.themealdb.com/images/media/meals/{}.jpg", id),
            })
        })
        .collect();
    serde_json::json!({ "meals": records }).to_string()
}
