//! Expense entity model and create DTO.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};
use spendlog_core::expense::{parse_amount, NewExpense};
use spendlog_core::money::format_amount;
use spendlog_core::types::{ExpenseId, Timestamp};
use spendlog_core::validation::ValidationErrors;

/// A row from the `expenses` table.
///
/// Serializes with camelCase keys plus a derived `formattedAmount`, which is
/// computed from `amount` on every serialization and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Expense {
    /// Display string for `amount`, e.g. `₹4.50`.
    pub fn formatted_amount(&self) -> String {
        format_amount(self.amount)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Expense {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let raw_id: String = row.try_get("id")?;
        let id = ExpenseId::parse_str(&raw_id).map_err(|e| sqlx::Error::ColumnDecode {
            index: "id".to_owned(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id,
            description: row.try_get("description")?,
            amount: row.try_get("amount")?,
            category: row.try_get("category")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl Serialize for Expense {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Expense", 7)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("amount", &self.amount)?;
        state.serialize_field("category", &self.category)?;
        state.serialize_field("createdAt", &self.created_at)?;
        state.serialize_field("updatedAt", &self.updated_at)?;
        state.serialize_field("formattedAmount", &self.formatted_amount())?;
        state.end()
    }
}

/// DTO for creating an expense, exactly as the client sent it.
///
/// `amount` stays a raw JSON value so both numbers and numeric strings
/// (HTML form input) are accepted; [`CreateExpense::validate`] coerces it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateExpense {
    pub description: Option<String>,
    pub amount: Option<serde_json::Value>,
    pub category: Option<String>,
}

impl CreateExpense {
    /// Coerce and validate, collecting every violation.
    pub fn validate(&self) -> Result<NewExpense, ValidationErrors> {
        NewExpense::from_parts(
            self.description.as_deref(),
            parse_amount(self.amount.as_ref()),
            self.category.as_deref(),
        )
    }
}
