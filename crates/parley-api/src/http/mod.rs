//! HTTP/REST API layer for Parley.
//!
//! Axum-based API at `/api/` with CORS restricted to a single origin.

pub mod handlers;
pub mod response;
pub mod router;
