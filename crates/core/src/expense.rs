//! The expense validation contract.
//!
//! [`NewExpense`] can only be obtained through validation, so anything the
//! storage layer is handed already satisfies the record invariants:
//!
//! - `description` is trimmed, holds 1..=100 characters and no control characters
//! - `amount` is finite and at least [`MIN_AMOUNT`]
//! - `category` is trimmed, free of control characters and never empty (falls
//!   back to [`DEFAULT_CATEGORY`])

use serde_json::Value;

use crate::validation::{FieldViolation, ValidationErrors};

/// Category assigned when the caller supplies none (or only whitespace).
pub const DEFAULT_CATEGORY: &str = "Other";

/// Maximum description length, counted in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 100;

/// Smallest accepted amount: one hundredth of the currency unit.
pub const MIN_AMOUNT: f64 = 0.01;

pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const DESCRIPTION_TOO_LONG: &str = "Description cannot exceed 100 characters";
pub const DESCRIPTION_CONTROL_CHARS: &str = "Description cannot contain control characters";
pub const CATEGORY_CONTROL_CHARS: &str = "Category cannot contain control characters";
pub const AMOUNT_REQUIRED: &str = "Amount is required";
pub const AMOUNT_NOT_POSITIVE: &str = "Amount must be greater than 0";
pub const AMOUNT_NOT_A_NUMBER: &str = "Amount must be a valid number";

/// A validated expense, ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    description: String,
    amount: f64,
    category: String,
}

impl NewExpense {
    /// Validate already-typed inputs.
    pub fn new(
        description: &str,
        amount: f64,
        category: Option<&str>,
    ) -> Result<Self, ValidationErrors> {
        Self::from_parts(Some(description), Ok(amount), category)
    }

    /// Validate inputs whose amount came from a transport value and may have
    /// already failed to parse. Every violation is collected, including the
    /// parse failure.
    pub fn from_parts(
        description: Option<&str>,
        amount: Result<f64, FieldViolation>,
        category: Option<&str>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let description = description.map(trim_input).unwrap_or_default();
        if description.is_empty() {
            errors.add("description", DESCRIPTION_REQUIRED);
        } else if description.chars().count() > DESCRIPTION_MAX_CHARS {
            errors.add("description", DESCRIPTION_TOO_LONG);
        } else if has_control_chars(description) {
            errors.add("description", DESCRIPTION_CONTROL_CHARS);
        }

        let amount = match amount {
            Ok(value) if !value.is_finite() => {
                errors.add("amount", AMOUNT_NOT_A_NUMBER);
                0.0
            }
            Ok(value) => {
                if value < MIN_AMOUNT {
                    errors.add("amount", AMOUNT_NOT_POSITIVE);
                }
                value
            }
            Err(violation) => {
                errors.push(violation);
                0.0
            }
        };

        let category = normalize_category(category);
        if has_control_chars(&category) {
            errors.add("category", CATEGORY_CONTROL_CHARS);
        }

        errors.into_result(Self {
            description: description.to_owned(),
            amount,
            category,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// Strip leading and trailing whitespace, including the byte order mark that
/// `str::trim` leaves in place.
pub fn trim_input(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Interior NULs would be truncated by SQLite's text functions.
fn has_control_chars(input: &str) -> bool {
    input.chars().any(char::is_control)
}

/// Trim a category, substituting [`DEFAULT_CATEGORY`] when nothing remains.
pub fn normalize_category(category: Option<&str>) -> String {
    match category.map(trim_input) {
        Some(c) if !c.is_empty() => c.to_owned(),
        _ => DEFAULT_CATEGORY.to_owned(),
    }
}

/// Coerce a transport amount (JSON number or numeric string) to `f64`.
///
/// Missing, `null` and blank strings are "required" violations; anything
/// else that does not yield a finite number is "not a number".
pub fn parse_amount(raw: Option<&Value>) -> Result<f64, FieldViolation> {
    let parsed = match raw {
        None | Some(Value::Null) => return Err(FieldViolation::new("amount", AMOUNT_REQUIRED)),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => {
            let s = trim_input(s);
            if s.is_empty() {
                return Err(FieldViolation::new("amount", AMOUNT_REQUIRED));
            }
            s.parse::<f64>().ok()
        }
        Some(_) => None,
    };

    parsed
        .filter(|value| value.is_finite())
        .ok_or_else(|| FieldViolation::new("amount", AMOUNT_NOT_A_NUMBER))
}
