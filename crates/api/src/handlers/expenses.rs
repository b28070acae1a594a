//! Handlers for the `/expenses` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use spendlog_core::error::CoreError;
use spendlog_core::types::{parse_expense_id, ExpenseId};
use spendlog_db::models::expense::{CreateExpense, Expense};
use spendlog_db::repositories::ExpenseRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body returned by a successful delete.
#[derive(Debug, Serialize)]
pub struct DeletedExpense {
    pub message: &'static str,
    pub id: ExpenseId,
}

/// GET /api/expenses
///
/// Every expense, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Expense>>> {
    let expenses = ExpenseRepo::list_all(&state.pool).await?;
    Ok(Json(expenses))
}

/// POST /api/expenses
///
/// Malformed bodies, unparseable amounts and rule violations all come back
/// as a single 400 listing every message.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateExpense>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Expense>)> {
    let Json(input) = payload?;
    let new_expense = input.validate()?;

    let expense = ExpenseRepo::create(&state.pool, &new_expense).await?;
    tracing::info!(
        expense_id = %expense.id,
        amount = expense.amount,
        category = %expense.category,
        "Expense created"
    );

    Ok((StatusCode::CREATED, Json(expense)))
}

/// DELETE /api/expenses/{id}
///
/// An id that is not a valid identifier is reported the same way as an
/// unknown one.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeletedExpense>> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Expense",
            id: id.clone(),
        })
    };

    let expense_id = parse_expense_id(&id).ok_or_else(not_found)?;
    let deleted = ExpenseRepo::delete_by_id(&state.pool, expense_id)
        .await?
        .ok_or_else(not_found)?;
    tracing::info!(expense_id = %deleted.id, "Expense deleted");

    Ok(Json(DeletedExpense {
        message: "Expense deleted successfully",
        id: deleted.id,
    }))
}
