use serde::{Deserialize, Serialize};

use super::ConversationHistory;

const DEFAULT_CLIENT_ID: &str = "anonymous";

/// Everything needed to generate one assistant reply.
///
/// The client id is an opaque correlation handle used only in log fields;
/// no behavior branches on it. History is expected to be pre-trimmed by the
/// caller to fit the model's context window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    message: String,
    history: ConversationHistory,
    client_id: String,
    system_prompt: String,
}

impl GenerationRequest {
    pub fn new(message: impl Into<String>, system_prompt: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            history: ConversationHistory::default(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            system_prompt: system_prompt.into(),
        }
    }

    pub fn with_history(mut self, history: ConversationHistory) -> Self {
        self.history = history;
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }
}
