//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 検索語もフィルタも指定されていない
    #[error("Please enter a search term or select a filter.")]
    Validation,

    /// フィルタ適用後に0件
    #[error("No recipes found.")]
    EmptyResult,

    /// lookupは成功したがレコードが無い
    #[error("Meal not found")]
    NotFound(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// エラーが発生した操作（ユーザー向けメッセージの切り替えに使う）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Search,
    Detail,
    Registry,
}

impl Error {
    /// 画面に表示するメッセージ
    ///
    /// 通信・パース失敗は操作ごとの汎用メッセージに置き換える。
    /// フィルタ一覧の読み込み失敗はログのみなので `None` を返す。
    pub fn user_message(&self, operation: Operation) -> Option<String> {
        match (self, operation) {
            (_, Operation::Registry) => None,
            (Error::Transport(_) | Error::Json(_), Operation::Search) => {
                Some("Something went wrong. Please try again.".to_string())
            }
            (Error::Transport(_) | Error::Json(_), Operation::Detail) => {
                Some("Failed to load meal details.".to_string())
            }
            (Error::Storage(_) | Error::Config(_), _) => None,
            (e, _) => Some(e.to_string()),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_validation() {
        let error = Error::Validation;
        assert_eq!(
            format!("{}", error),
            "Please enter a search term or select a filter."
        );
    }

    #[test]
    fn test_error_display_not_found() {
        let error = Error::NotFound("999999".to_string());
        assert_eq!(format!("{}", error), "Meal not found");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_user_message_search_transport() {
        let error = Error::Transport("HTTP 500".to_string());
        assert_eq!(
            error.user_message(Operation::Search).as_deref(),
            Some("Something went wrong. Please try again.")
        );
    }

    #[test]
    fn test_user_message_detail_transport() {
        let error = Error::Transport("network down".to_string());
        assert_eq!(
            error.user_message(Operation::Detail).as_deref(),
            Some("Failed to load meal details.")
        );
    }

    #[test]
    fn test_user_message_detail_not_found() {
        let error = Error::NotFound("1".to_string());
        assert_eq!(
            error.user_message(Operation::Detail).as_deref(),
            Some("Meal not found")
        );
    }

    #[test]
    fn test_user_message_registry_is_silent() {
        let error = Error::Transport("timeout".to_string());
        assert!(error.user_message(Operation::Registry).is_none());
    }

    #[test]
    fn test_user_message_empty_result() {
        assert_eq!(
            Error::EmptyResult.user_message(Operation::Search).as_deref(),
            Some("No recipes found.")
        );
    }
}
