//! Asset store: two-phase pending holdings keyed by `(uid, account)`.

use async_trait::async_trait;
use sqlx::PgConnection;

use crate::domain::{AccountId, Uid};
use crate::error::{handle_deprecated, BankError};
use crate::money::Cents;

#[async_trait]
pub trait AssetStore: Send + Sync {
    type Conn: Send + ?Sized;

    /// Parks `amount` as a pending holding for `(uid, account)`. A
    /// duplicate `(uid, account)` pair is re-mapped to `Deprecated`.
    async fn append(
        &self,
        conn: &mut Self::Conn,
        uid: Uid,
        account: AccountId,
        amount: Cents,
    ) -> Result<(), BankError>;

    /// Removes the pending holding for `(uid, account)` and returns the
    /// amount it held. Fails with `NotFound` if no such holding exists.
    async fn remove(
        &self,
        conn: &mut Self::Conn,
        uid: Uid,
        account: AccountId,
    ) -> Result<Cents, BankError>;
}

pub struct PgAssetStore;

#[async_trait]
impl AssetStore for PgAssetStore {
    type Conn = PgConnection;

    async fn append(
        &self,
        conn: &mut PgConnection,
        uid: Uid,
        account: AccountId,
        amount: Cents,
    ) -> Result<(), BankError> {
        sqlx::query("INSERT INTO asset (uid, account, amount) VALUES ($1, $2, $3)")
            .bind(uid)
            .bind(account as i32)
            .bind(amount.0)
            .execute(&mut *conn)
            .await
            .map_err(handle_deprecated)?;

        Ok(())
    }

    async fn remove(
        &self,
        conn: &mut PgConnection,
        uid: Uid,
        account: AccountId,
    ) -> Result<Cents, BankError> {
        let row: Option<(i64, i64)> =
            sqlx::query_as("SELECT id, amount FROM asset WHERE uid = $1 AND account = $2")
                .bind(uid)
                .bind(account as i32)
                .fetch_optional(&mut *conn)
                .await?;

        let (id, amount) = row.ok_or(BankError::NotFound)?;

        sqlx::query("DELETE FROM asset WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(Cents(amount))
    }
}
