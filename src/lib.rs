//! Transactional billing service.
//!
//! A message-bus-driven ledger: clients publish credit/debit/transfer/
//! acquire/commit/rollback requests and receive a numeric status code.
//! Every request runs as one atomic, idempotent PostgreSQL transaction.
//!
//! # Modules
//!
//! - [`config`] - process configuration (TOML, discovered from the
//!   executable's directory upward)
//! - [`db`] - PostgreSQL connection pool management
//! - [`domain`] - shared wire/domain types (`Operation`, `Status`, ids)
//! - [`money`] - fixed-point `Cents` money representation
//! - [`error`] - the `BankError` taxonomy
//! - [`status`] - `BankError` -> wire `Status` mapping
//! - [`stores`] - account/asset/history storage collaborators
//! - [`banker`] - the operation engine (the six banking operations)
//! - [`messages`] - bus request payloads
//! - [`dispatcher`] - subject subscriptions, panic isolation, replies
//! - [`logging`] - `tracing` subscriber setup

pub mod banker;
pub mod config;
pub mod db;
pub mod dispatcher;
pub mod domain;
pub mod error;
pub mod logging;
pub mod messages;
pub mod money;
pub mod status;
pub mod stores;

pub use banker::{Banker, PgBanker};
pub use config::BillingConfig;
pub use domain::{AccountId, Operation, Status, Uid};
pub use error::BankError;
pub use money::Cents;
