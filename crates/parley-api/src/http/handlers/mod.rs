//! HTTP request handlers for the REST API.

pub mod history;
pub mod message;
