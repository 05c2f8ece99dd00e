//! Storage collaborators: stateless polymorphic adapters over a single
//! ambient transaction scope, following the teacher's
//! `internal_transfer::adapters` trait-per-capability pattern.

mod account;
mod asset;
mod history;

pub use account::{AccountStore, PgAccountStore};
pub use asset::{AssetStore, PgAssetStore};
pub use history::{HistoryStore, PgHistoryStore};
