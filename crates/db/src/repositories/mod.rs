//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&DbPool` as the first argument.

pub mod expense_repo;

pub use expense_repo::ExpenseRepo;
