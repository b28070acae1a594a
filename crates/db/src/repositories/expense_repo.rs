//! Repository for the `expenses` table.

use chrono::{SecondsFormat, Utc};
use spendlog_core::expense::NewExpense;
use spendlog_core::types::{new_expense_id, ExpenseId, Timestamp};

use crate::models::expense::Expense;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, description, amount, category, created_at, updated_at";

/// Provides create, list and delete for expenses. There is no update path.
pub struct ExpenseRepo;

impl ExpenseRepo {
    /// Insert a validated expense, returning the stored row.
    ///
    /// The id and both timestamps are assigned here.
    pub async fn create(pool: &DbPool, input: &NewExpense) -> Result<Expense, sqlx::Error> {
        let id = new_expense_id();
        let now = encode_timestamp(Utc::now());

        let query = format!(
            "INSERT INTO expenses (id, description, amount, category, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(id.to_string())
            .bind(input.description())
            .bind(input.amount())
            .bind(input.category())
            .bind(&now)
            .bind(&now)
            .fetch_one(pool)
            .await
    }

    /// List every expense, newest first.
    ///
    /// Rows created within the same microsecond fall back to insertion order.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<Expense>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM expenses ORDER BY created_at DESC, rowid DESC");
        sqlx::query_as::<_, Expense>(&query).fetch_all(pool).await
    }

    /// Hard-delete an expense, returning the removed row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn delete_by_id(
        pool: &DbPool,
        id: ExpenseId,
    ) -> Result<Option<Expense>, sqlx::Error> {
        let query = format!("DELETE FROM expenses WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Expense>(&query)
            .bind(id.to_string())
            .fetch_optional(pool)
            .await
    }
}

/// Fixed-width RFC 3339 so that text ordering in SQLite is chronological.
fn encode_timestamp(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}
