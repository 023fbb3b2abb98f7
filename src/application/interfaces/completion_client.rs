use async_trait::async_trait;

use crate::domain::{ChatMessage, Completion, CompletionParams, GenerationError};

/// An interface for sending an assembled prompt sequence to a hosted LLM
/// completion service and receiving exactly one non-streaming reply.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. The handle is constructed once at startup and shared read-only
/// across all concurrent calls.
///
/// Cancellation: the returned future is drop-cancellable. Dropping it (e.g.
/// by racing it against caller disconnect with `tokio::select!`) aborts the
/// in-flight network call and releases its connection.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the ordered `messages` with fixed generation `params` and return
    /// the service's candidates. Implementations surface distinct failure
    /// kinds (authentication, rate limit, unavailability, timeout, malformed
    /// body) rather than collapsing them into one generic error, and log each
    /// failure with full context before propagating it.
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &CompletionParams,
    ) -> Result<Completion, GenerationError>;
}
