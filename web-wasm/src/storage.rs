//! localStorage によるお気に入り保存

use gloo::storage::{LocalStorage, Storage as _};
use recipe_finder_common::{Config, Error, FavoritesStore, KeyValueStore, Result};

/// ブラウザの localStorage（文字列をそのまま読み書きする）
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| Error::Storage(format!("読込失敗: {:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("保存失敗: {:?}", e)))
    }
}

pub fn favorites_store(config: &Config) -> FavoritesStore<BrowserStorage> {
    FavoritesStore::new(BrowserStorage, config.favorites_key.clone())
}
