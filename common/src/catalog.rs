//! カタログAPIクライアント
//!
//! 通信そのものは [`Transport`] に任せ、URL組み立てとパースだけを行う。
//! ブラウザでは fetch、テストではスクリプト化したレスポンスを使う。

use crate::config::Config;
use crate::error::Result;
use crate::parser::{parse_list_response, parse_lookup_response, parse_search_response};
use crate::types::{ListField, MealDetail, MealSummary};
use log::debug;

/// GETリクエスト1回分の通信
///
/// 失敗（ネットワーク・HTTPステータス）は `Error::Transport` で返すこと。
/// リトライはしない。
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<String>;
}

impl<T: Transport> Transport for &T {
    async fn get(&self, url: &str) -> Result<String> {
        (**self).get(url).await
    }
}

/// カタログAPIクライアント
pub struct CatalogClient<T> {
    transport: T,
    base_url: String,
    ingredient_slots: usize,
}

impl<T: Transport> CatalogClient<T> {
    pub fn new(transport: T, config: &Config) -> Self {
        Self {
            transport,
            base_url: config.base_url.clone(),
            ingredient_slots: config.ingredient_slots,
        }
    }

    pub fn search_url(&self, term: &str) -> String {
        format!("{}search.php?s={}", self.base_url, urlencoding::encode(term))
    }

    pub fn lookup_url(&self, id: &str) -> String {
        format!("{}lookup.php?i={}", self.base_url, urlencoding::encode(id))
    }

    pub fn list_url(&self, field: ListField) -> String {
        format!("{}list.php?{}=list", self.base_url, field.query_key())
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        self.transport.get(url).await
    }

    /// 名前で検索（空文字もそのまま送る）
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<MealSummary>> {
        let body = self.fetch(&self.search_url(term)).await?;
        parse_search_response(&body)
    }

    /// IDで詳細を取得。該当なしは `Ok(None)`
    pub async fn lookup_by_id(&self, id: &str) -> Result<Option<MealDetail>> {
        let body = self.fetch(&self.lookup_url(id)).await?;
        parse_lookup_response(&body, self.ingredient_slots)
    }

    /// フィールドの値一覧（受信順）
    pub async fn list_field(&self, field: ListField) -> Result<Vec<String>> {
        let body = self.fetch(&self.list_url(field)).await?;
        parse_list_response(&body, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testing::ScriptedTransport;
    use futures::executor::block_on;

    fn client(transport: &ScriptedTransport) -> CatalogClient<&ScriptedTransport> {
        CatalogClient::new(transport, &Config::default())
    }

    #[test]
    fn test_urls() {
        let transport = ScriptedTransport::default();
        let client = client(&transport);
        assert_eq!(
            client.search_url("chicken"),
            "https://www.themealdb.com/api/json/v1/1/search.php?s=chicken"
        );
        assert_eq!(
            client.search_url("mac & cheese"),
            "https://www.themealdb.com/api/json/v1/1/search.php?s=mac%20%26%20cheese"
        );
        assert_eq!(
            client.search_url(""),
            "https://www.themealdb.com/api/json/v1/1/search.php?s="
        );
        assert_eq!(
            client.lookup_url("52940"),
            "https://www.themealdb.com/api/json/v1/1/lookup.php?i=52940"
        );
        assert_eq!(
            client.list_url(ListField::Area),
            "https://www.themealdb.com/api/json/v1/1/list.php?a=list"
        );
    }

    #[test]
    fn test_search_by_name_no_results() {
        let transport = ScriptedTransport::default();
        let client = client(&transport);
        transport.respond(&client.search_url("zzz"), r#"{"meals":null}"#);

        let meals = block_on(client.search_by_name("zzz")).unwrap();
        assert!(meals.is_empty());
        assert_eq!(transport.request_count(), 1);
    }

    #[test]
    fn test_lookup_transport_failure() {
        let transport = ScriptedTransport::default();
        let client = client(&transport);
        transport.fail(&client.lookup_url("1"), "HTTP 503");

        let result = block_on(client.lookup_by_id("1"));
        assert!(matches!(result, Err(Error::Transport(_))));
    }

    #[test]
    fn test_list_field() {
        let transport = ScriptedTransport::default();
        let client = client(&transport);
        transport.respond(
            &client.list_url(ListField::Category),
            r#"{"meals":[{"strCategory":"Beef"},{"strCategory":"Chicken"}]}"#,
        );

        let values = block_on(client.list_field(ListField::Category)).unwrap();
        assert_eq!(values, vec!["Beef", "Chicken"]);
    }
}
