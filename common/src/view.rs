//! 画面状態（UIフレームワーク非依存）
//!
//! 見出し・エラー表示・結果カード・ローダーの表示ルールをまとめる。
//! エラー表示時は必ず結果と見出しを消し、ローダーも止める。

use crate::error::{Error, Operation};
use crate::types::MealSummary;
use log::warn;

pub const RESULTS_HEADING: &str = "Results:";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsView {
    pub heading: String,
    pub error: Option<String>,
    pub cards: Vec<MealSummary>,
    pub loading: bool,
}

impl ResultsView {
    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    pub fn stop_loading(&mut self) {
        self.loading = false;
    }

    /// 新しい検索の最初のバッチで表示を置き換える
    pub fn show_results(&mut self, first_batch: Vec<MealSummary>) {
        self.loading = false;
        self.cards = first_batch;
        self.error = None;
        self.heading = RESULTS_HEADING.to_string();
    }

    /// スクロールで追加されたバッチ（エラー表示中は無視）
    pub fn append(&mut self, batch: Vec<MealSummary>) {
        if self.error.is_some() {
            return;
        }
        self.cards.extend(batch);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
        self.heading.clear();
        self.cards.clear();
    }

    /// 操作の失敗を表示に反映する
    ///
    /// 画面に出さない種類のエラーはログだけ残してローダーを止める。
    /// メッセージを表示して結果を消したときは true
    pub fn show_failure(&mut self, error: &Error, operation: Operation) -> bool {
        warn!("{:?} failed: {}", operation, error);
        match error.user_message(operation) {
            Some(message) => {
                self.show_error(message);
                true
            }
            None => {
                self.stop_loading();
                false
            }
        }
    }
}

/// 配色テーマ（見た目のみ、保存しない）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// 切替ボタンの表示（切り替え先を示す）
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }
}
