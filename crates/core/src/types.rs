/// Expense identifiers are UUIDv7 values, time-ordered and never reused.
pub type ExpenseId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh expense identifier.
pub fn new_expense_id() -> ExpenseId {
    uuid::Uuid::now_v7()
}

/// Parse a client-supplied identifier.
///
/// Returns `None` for anything that is not a UUID, so callers can treat a
/// malformed id exactly like an unknown one.
pub fn parse_expense_id(raw: &str) -> Option<ExpenseId> {
    uuid::Uuid::parse_str(raw.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = new_expense_id();
        let b = new_expense_id();
        assert_ne!(a, b);
        assert_eq!(a.get_version_num(), 7);
    }

    #[test]
    fn parses_hyphenated_uuid() {
        let id = new_expense_id();
        assert_eq!(parse_expense_id(&id.to_string()), Some(id));
    }

    #[test]
    fn rejects_non_uuid_ids() {
        assert_eq!(parse_expense_id("000000000000000000000000"), None);
        assert_eq!(parse_expense_id(""), None);
        assert_eq!(parse_expense_id("not-an-id"), None);
    }
}
