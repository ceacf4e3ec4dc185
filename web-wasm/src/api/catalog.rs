//! ブラウザの fetch によるカタログAPI通信

use log::warn;
use recipe_finder_common::{CatalogClient, Config, Error, Result, Transport};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// window.fetch を使う通信
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn get(&self, url: &str) -> Result<String> {
        fetch_text(url).await.map_err(|e| {
            warn!("fetch failed: {} ({:?})", url, e);
            Error::Transport(format!("{:?}", e))
        })
    }
}

/// fetch を使うカタログクライアント
pub fn catalog_client(config: &Config) -> CatalogClient<FetchTransport> {
    CatalogClient::new(FetchTransport, config)
}

/// GETして本文を文字列で返す（タイムアウト・リトライなし）
async fn fetch_text(url: &str) -> std::result::Result<String, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("Empty response"))
}
