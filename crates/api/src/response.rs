//! Shared response envelope types for API handlers.
//!
//! Reads are wrapped as `{ "items": [...] }` or `{ "item": {...} }`,
//! mutations answer `{ "status": "success", "message": ... }`, and every
//! failure is `{ "detail": ... }` (see [`crate::error::AppError`]).

use serde::Serialize;

/// `{ "items": [...] }` envelope for list endpoints.
#[derive(Debug, Serialize)]
pub struct ItemsResponse<T: Serialize> {
    pub items: Vec<T>,
}

/// `{ "item": {...} }` envelope for single-record reads.
#[derive(Debug, Serialize)]
pub struct ItemResponse<T: Serialize> {
    pub item: T,
}

/// `{ "status": "success", "message": ... }` envelope for mutations.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl StatusResponse {
    pub fn success(message: &'static str) -> Self {
        Self {
            status: "success",
            message,
        }
    }
}

/// `{ "detail": ... }` failure envelope.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
