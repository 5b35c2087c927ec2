//! Bounded, in-memory conversation history.

pub mod store;
