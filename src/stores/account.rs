//! Account store: row-locked balance reads and writes.

use async_trait::async_trait;
use sqlx::PgConnection;

use crate::domain::AccountId;
use crate::error::BankError;
use crate::money::Cents;

/// Balance-mutating capability the banker depends on. Generic over the
/// connection type (`Conn`) rather than hardcoding `sqlx::PgConnection`, so
/// `banker::tests` can implement this trait against a plain in-memory mock
/// (`Conn = ()`) instead of requiring a live database for unit coverage.
#[async_trait]
pub trait AccountStore: Send + Sync {
    type Conn: Send + ?Sized;

    /// Debit `amount` from `account`'s live balance ("Credit" in the
    /// reference's bookkeeping-from-the-account's-perspective naming).
    /// Fails with `NoMoney` if the balance would go negative, `NotFound`
    /// if the row does not exist.
    async fn credit(
        &self,
        conn: &mut Self::Conn,
        account: AccountId,
        amount: Cents,
    ) -> Result<(), BankError>;

    /// Credit `amount` onto `account`'s live balance ("Debit" in the
    /// reference's naming). Never fails on balance grounds; fails with
    /// `NotFound` if the row does not exist.
    async fn debit(
        &self,
        conn: &mut Self::Conn,
        account: AccountId,
        amount: Cents,
    ) -> Result<(), BankError>;
}

pub struct PgAccountStore;

#[async_trait]
impl AccountStore for PgAccountStore {
    type Conn = PgConnection;

    async fn credit(
        &self,
        conn: &mut PgConnection,
        account: AccountId,
        amount: Cents,
    ) -> Result<(), BankError> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT amount FROM account WHERE id = $1 FOR UPDATE")
                .bind(account as i32)
                .fetch_optional(&mut *conn)
                .await?;

        let balance = Cents(row.ok_or(BankError::NotFound)?.0);
        let new_balance = balance
            .checked_sub(amount)
            .filter(|b| *b >= Cents::ZERO)
            .ok_or(BankError::NoMoney)?;

        sqlx::query("UPDATE account SET amount = $1 WHERE id = $2")
            .bind(new_balance.0)
            .bind(account as i32)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    async fn debit(
        &self,
        conn: &mut PgConnection,
        account: AccountId,
        amount: Cents,
    ) -> Result<(), BankError> {
        let result = sqlx::query("UPDATE account SET amount = amount + $1 WHERE id = $2")
            .bind(amount.0)
            .bind(account as i32)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(BankError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // The row-locking SQL itself is only exercised against a live Postgres
    // instance: see the `#[ignore]`-gated tests in `banker::tests`. The
    // `credit`/`debit` balance logic (insufficient-funds, not-found) is
    // covered there a second time against `banker::tests::MockAccountStore`,
    // which reimplements this trait without touching SQL at all.
}
