//! Domain layer for spendlog: identifiers, the expense validation contract,
//! and error types shared by the storage and HTTP crates. No I/O lives here.

pub mod error;
pub mod expense;
pub mod money;
pub mod types;
pub mod validation;
