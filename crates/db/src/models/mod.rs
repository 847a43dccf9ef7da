//! Row models.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. The insert inputs are the domain types from
//! `klima-core`, so no separate create DTOs exist here.

pub mod measurement;
pub mod parameter;
