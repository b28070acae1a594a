//! Row models and DTOs.
//!
//! Each submodule contains:
//! - An entity struct decoded from a database row and serialized for clients
//! - A `Deserialize` create DTO carrying raw client input

pub mod expense;
