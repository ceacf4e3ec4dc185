//! 実際のカタログAPIに対する結合テスト
//!
//! RECIPE_FINDER_LIVE_TESTS が設定されている場合のみ実行する

use recipe_finder_common::{
    load_detail, load_field, CatalogClient, Config, Error, ListField, Result, Transport,
};

struct ReqwestTransport {
    client: reqwest::Client,
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Transport(format!("HTTP {}", response.status())));
        }

        response.text().await.map_err(|e| Error::Transport(e.to_string()))
    }
}

fn live_enabled() -> bool {
    match std::env::var("RECIPE_FINDER_LIVE_TESTS") {
        Ok(value) if !value.trim().is_empty() => true,
        _ => {
            eprintln!("RECIPE_FINDER_LIVE_TESTS not set; skipping live test");
            false
        }
    }
}

fn client() -> CatalogClient<ReqwestTransport> {
    let transport = ReqwestTransport {
        client: reqwest::Client::new(),
    };
    CatalogClient::new(transport, &Config::default())
}

#[tokio::test]
async fn live_search_and_lookup() {
    if !live_enabled() {
        return;
    }

    let client = client();
    let meals = client.search_by_name("chicken").await.expect("search failed");
    assert!(!meals.is_empty());

    let detail = load_detail(&client, &meals[0].id).await.expect("lookup failed");
    assert_eq!(detail.id, meals[0].id);
    assert!(detail.ingredients.len() <= 20);
}

#[tokio::test]
async fn live_lookup_missing() {
    if !live_enabled() {
        return;
    }

    let result = load_detail(&client(), "999999").await;
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn live_registry() {
    if !live_enabled() {
        return;
    }

    let client = client();
    for field in ListField::ALL {
        let values = load_field(&client, field).await;
        assert!(!values.is_empty(), "{:?} list is empty", field);
    }
}
