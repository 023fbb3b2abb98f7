use async_trait::async_trait;
use tracing::debug;

use crate::application::CompletionClient;
use crate::domain::{
    ChatMessage, Completion, CompletionCandidate, CompletionParams, GenerationError, Role,
};

/// Offline stand-in for the hosted completion service.
///
/// Replies by echoing the last user message in the prompt sequence, so each
/// reply is traceable to the request that produced it. Useful for smoke runs
/// without credentials (`--mock`) and for concurrency tests.
pub struct MockCompletion;

impl MockCompletion {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionClient for MockCompletion {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _params: &CompletionParams,
    ) -> Result<Completion, GenerationError> {
        let last_user = messages
            .iter()
            .rev()
            .find(|m| m.role() == Role::User)
            .map(|m| m.content())
            .unwrap_or("");

        debug!("MockCompletion echoing {} chars", last_user.len());
        Ok(Completion::new(vec![CompletionCandidate::with_text(
            format!("You said: {last_user}"),
        )]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echoes_the_last_user_message() {
        let client = MockCompletion::new();
        let messages = vec![
            ChatMessage::new(Role::System, "be helpful"),
            ChatMessage::new(Role::User, "Hello"),
            ChatMessage::new(Role::Assistant, "Hi there"),
            ChatMessage::new(Role::User, "What helps with sleep?"),
        ];

        let completion = client
            .complete(&messages, &CompletionParams::new("mock"))
            .await
            .unwrap();

        assert_eq!(
            completion.candidates()[0].content(),
            Some("You said: What helps with sleep?")
        );
    }

    #[tokio::test]
    async fn replies_even_without_user_messages() {
        let client = MockCompletion::new();
        let messages = vec![ChatMessage::new(Role::System, "be helpful")];

        let completion = client
            .complete(&messages, &CompletionParams::new("mock"))
            .await
            .unwrap();

        assert_eq!(completion.candidates()[0].content(), Some("You said: "));
    }
}
