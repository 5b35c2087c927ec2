//! Shared domain types for Parley.
//!
//! This crate contains the types used across the Parley relay: chat history
//! entries, the outcome of a chat turn, relay configuration, and the error
//! types shared between the core and infrastructure layers.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod entry;
pub mod error;
pub mod outcome;
