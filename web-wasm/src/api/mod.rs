//! カタログAPI連携

pub mod catalog;

pub use catalog::{catalog_client, FetchTransport};
