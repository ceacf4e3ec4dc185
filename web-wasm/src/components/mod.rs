//! UIコンポーネント

pub mod filter_bar;
pub mod header;
pub mod loader;
pub mod meal_grid;
pub mod meal_modal;
pub mod search_bar;
