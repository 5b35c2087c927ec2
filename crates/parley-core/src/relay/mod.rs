//! Chat turn orchestration and the upstream generation port.

pub mod client;
pub mod service;
