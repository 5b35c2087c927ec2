//! Infrastructure implementations for Parley.
//!
//! This crate provides concrete implementations of the ports defined in
//! `parley-core`:
//! - `HttpGenerationClient`: reqwest-backed upstream generation client
//! - Config file loading and data directory resolution

pub mod config;
pub mod upstream;
