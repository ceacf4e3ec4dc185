//! フィルタ候補（カテゴリ・地域・材料）の読み込み
//!
//! 3つの一覧は個別に要求し、届いたものから反映する。
//! 1つが失敗しても他は影響を受けない（失敗はログのみ）。

use crate::catalog::{CatalogClient, Transport};
use crate::types::ListField;
use log::error;

/// 起動時に読み込む絞込み候補
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterRegistry {
    pub categories: Vec<String>,
    pub areas: Vec<String>,
    pub ingredients: Vec<String>,
}

impl FilterRegistry {
    pub fn values(&self, field: ListField) -> &[String] {
        match field {
            ListField::Category => &self.categories,
            ListField::Area => &self.areas,
            ListField::Ingredient => &self.ingredients,
        }
    }

    /// 1つの一覧だけを差し替える（他の一覧の完了を待たない）
    pub fn set_values(&mut self, field: ListField, values: Vec<String>) {
        match field {
            ListField::Category => self.categories = values,
            ListField::Area => self.areas = values,
            ListField::Ingredient => self.ingredients = values,
        }
    }
}

/// 1つの一覧を読み込む。失敗時はログに残して空を返す
pub async fn load_field<T: Transport>(client: &CatalogClient<T>, field: ListField) -> Vec<String> {
    match client.list_field(field).await {
        Ok(values) => values,
        Err(e) => {
            error!("Filter loading error ({:?}): {}", field, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::testing::ScriptedTransport;
    use futures::executor::block_on;

    #[test]
    fn test_failure_isolated_per_list() {
        let transport = ScriptedTransport::new();
        let client = CatalogClient::new(&transport, &Config::default());
        transport.respond(
            &client.list_url(ListField::Category),
            r#"{"meals":[{"strCategory":"Beef"},{"strCategory":"Vegan"}]}"#,
        );
        transport.fail(&client.list_url(ListField::Area), "HTTP 500");
        transport.respond(
            &client.list_url(ListField::Ingredient),
            r#"{"meals":[{"idIngredient":"1","strIngredient":"Chicken"}]}"#,
        );

        let mut registry = FilterRegistry::default();
        for field in ListField::ALL {
            let values = block_on(load_field(&client, field));
            registry.set_values(field, values);
        }
        assert_eq!(registry.categories, vec!["Beef", "Vegan"]);
        assert!(registry.areas.is_empty());
        assert_eq!(registry.values(ListField::Ingredient), ["Chicken".to_string()]);
        assert_eq!(transport.request_count(), 3);
    }

    #[test]
    fn test_set_values_replaces_one_list() {
        let mut registry = FilterRegistry::default();
        registry.set_values(ListField::Area, vec!["Thai".to_string()]);
        registry.set_values(ListField::Category, vec!["Beef".to_string()]);

        assert_eq!(registry.values(ListField::Area), ["Thai".to_string()]);
        assert_eq!(registry.values(ListField::Category), ["Beef".to_string()]);
        assert!(registry.ingredients.is_empty());
    }

    #[test]
    fn test_null_list_is_empty() {
        let transport = ScriptedTransport::new();
        let client = CatalogClient::new(&transport, &Config::default());
        transport.respond(&client.list_url(ListField::Area), r#"{"meals":null}"#);

        assert!(block_on(load_field(&client, ListField::Area)).is_empty());
    }
}
