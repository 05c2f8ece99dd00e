//! History store: the append-only audit log that doubles as the
//! idempotency gate for every banker operation.

use async_trait::async_trait;
use sqlx::PgConnection;

use crate::domain::{AccountId, Operation, Uid};
use crate::error::{handle_deprecated, BankError};
use crate::money::Cents;

#[async_trait]
pub trait HistoryStore: Send + Sync {
    type Conn: Send + ?Sized;

    /// Inserts one audit row. A duplicate `(uid, account, op)` triple is
    /// re-mapped to `Deprecated` — this is the mechanism that makes every
    /// banker operation at-most-once.
    async fn append(
        &self,
        conn: &mut Self::Conn,
        uid: Uid,
        account: AccountId,
        amount: Cents,
        op: Operation,
    ) -> Result<(), BankError>;
}

pub struct PgHistoryStore;

#[async_trait]
impl HistoryStore for PgHistoryStore {
    type Conn = PgConnection;

    async fn append(
        &self,
        conn: &mut PgConnection,
        uid: Uid,
        account: AccountId,
        amount: Cents,
        op: Operation,
    ) -> Result<(), BankError> {
        sqlx::query("INSERT INTO history (uid, account, amount, op) VALUES ($1, $2, $3, $4)")
            .bind(uid)
            .bind(account as i32)
            .bind(amount.0)
            .bind(op.id())
            .execute(&mut *conn)
            .await
            .map_err(handle_deprecated)?;

        Ok(())
    }
}
