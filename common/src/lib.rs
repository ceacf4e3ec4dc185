//! Recipe Finder Common Library
//!
//! Web(WASM)フロントエンドから使う、ブラウザ非依存の型とロジック

pub mod types;
pub mod error;
pub mod config;
pub mod parser;
pub mod catalog;
pub mod registry;
pub mod search;
pub mod render;
pub mod detail;
pub mod favorites;
pub mod autocomplete;
pub mod view;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use types::{FilterSelection, Ingredient, ListField, MealDetail, MealSummary};
pub use error::{Error, Operation, Result};
pub use config::Config;
pub use catalog::{CatalogClient, Transport};
pub use registry::{load_field, FilterRegistry};
pub use search::{apply_filters, search, validate_query, SearchSession};
pub use render::{render_next_batch, RenderCursor, ScrollMetrics};
pub use detail::{load_detail, DetailRequests, DetailTicket, DetailView};
pub use favorites::{FavoriteLabel, FavoritesStore, KeyValueStore, MemoryStore};
pub use autocomplete::{suggest, Suggestions};
pub use view::{ResultsView, Theme};
