//! ページ埋め込みの設定読み込み
//!
//! index.html の `<script type="application/json" id="recipe-finder-config">`
//! を読み、無い・壊れている場合は既定値を使う。

use log::{debug, warn};
use recipe_finder_common::Config;

const CONFIG_ELEMENT_ID: &str = "recipe-finder-config";

pub fn load_config() -> Config {
    let Some(content) = config_text() else {
        debug!("no inline config, using defaults");
        return Config::default();
    };

    match Config::from_json(&content) {
        Ok(config) => config,
        Err(e) => {
            warn!("invalid inline config, using defaults: {}", e);
            Config::default()
        }
    }
}

fn config_text() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let text = document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn set_inline_config(content: &str) {
        let document = web_sys::window().unwrap().document().unwrap();
        let element = match document.get_element_by_id(CONFIG_ELEMENT_ID) {
            Some(element) => element,
            None => {
                let element = document.create_element("script").unwrap();
                element.set_id(CONFIG_ELEMENT_ID);
                document.body().unwrap().append_child(&element).unwrap();
                element
            }
        };
        element.set_text_content(Some(content));
    }

    #[wasm_bindgen_test]
    fn partial_override_keeps_defaults() {
        set_inline_config(r#"{"batchSize": 12}"#);
        let config = load_config();
        assert_eq!(config.batch_size, 12);
        assert_eq!(config.favorites_key, "favorites");
    }

    #[wasm_bindgen_test]
    fn invalid_config_falls_back() {
        set_inline_config(r#"{"batchSize": 0}"#);
        assert_eq!(load_config(), Config::default());
    }
}
