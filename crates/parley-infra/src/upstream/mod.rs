//! Upstream generation service clients.

pub mod client;

pub use client::HttpGenerationClient;
