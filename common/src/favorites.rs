//! お気に入り
//!
//! IDの集合を固定キーにJSON配列で保存する。判定・切替のたびに
//! ストアから読み直す（メモリにはキャッシュしない）。

use crate::error::Result;
use log::warn;
use std::cell::RefCell;
use std::collections::HashMap;

/// 文字列のキー・バリューストア（ブラウザの localStorage 相当）
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

/// メモリ上のストア（テスト・非ブラウザ環境用）
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.data.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// お気に入りボタンの表示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteLabel {
    Add,
    Remove,
}

impl FavoriteLabel {
    pub fn for_status(is_favorite: bool) -> Self {
        if is_favorite {
            FavoriteLabel::Remove
        } else {
            FavoriteLabel::Add
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FavoriteLabel::Add => "Add to Favorites",
            FavoriteLabel::Remove => "Remove from Favorites",
        }
    }
}

pub struct FavoritesStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// 保存されているIDを読む
    ///
    /// キーが無い場合と、JSONとして読めない場合は空扱い
    pub fn ids(&self) -> Result<Vec<String>> {
        let Some(raw) = self.store.get_item(&self.key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(ids) => Ok(ids),
            Err(e) => {
                warn!("favorites: ignoring unreadable value under '{}': {}", self.key, e);
                Ok(Vec::new())
            }
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        match self.ids() {
            Ok(ids) => ids.iter().any(|fav| fav == id),
            Err(e) => {
                warn!("favorites: read failed: {}", e);
                false
            }
        }
    }

    /// お気に入りを切り替え、新しいボタン表示を返す
    ///
    /// 登録済みなら除外、未登録なら末尾に追加して全体を書き戻す
    pub fn toggle(&self, id: &str) -> Result<FavoriteLabel> {
        let mut ids = self.ids()?;
        let label = if ids.iter().any(|fav| fav == id) {
            ids.retain(|fav| fav != id);
            FavoriteLabel::Add
        } else {
            ids.push(id.to_string());
            FavoriteLabel::Remove
        };

        let serialized = serde_json::to_string(&ids)?;
        self.store.set_item(&self.key, &serialized)?;
        Ok(label)
    }
}
