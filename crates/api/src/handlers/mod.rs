//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers coerce transport input, delegate to the corresponding repository
//! in `spendlog_db`, and map errors via [`AppError`](crate::error::AppError).

pub mod expenses;
