//! GenerationClient trait definition.
//!
//! This is the port the relay uses to reach the upstream text-generation
//! service. Uses native async fn in traits (RPITIT, Rust 2024 edition).
//! The HTTP implementation lives in parley-infra (`HttpGenerationClient`).

use parley_types::error::UpstreamError;

/// Trait for upstream text-generation backends.
pub trait GenerationClient: Send + Sync {
    /// Send one message and receive the generated reply text.
    ///
    /// Only the current message is sent; prior history is not forwarded as
    /// context.
    fn generate(
        &self,
        message: &str,
    ) -> impl std::future::Future<Output = Result<String, UpstreamError>> + Send;
}
