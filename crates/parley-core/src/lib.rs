//! Business logic for the Parley relay.
//!
//! This crate defines the bounded conversation history, the
//! [`relay::client::GenerationClient`] port that the infrastructure layer
//! implements, and the [`relay::service::MessageRelay`] that runs a chat turn.
//! It depends only on `parley-types` -- never on `parley-infra` or any HTTP
//! crate.

pub mod history;
pub mod relay;
