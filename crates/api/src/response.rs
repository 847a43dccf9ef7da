//! Shared response envelope for API handlers.
//!
//! Every endpoint answers with a `{ "data": ... }` envelope; [`DataResponse`]
//! keeps that shape type-checked instead of ad-hoc `json!` literals.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
