pub mod application;
pub mod connector;
pub mod domain;

pub use application::{CompletionClient, GenerateResponseUseCase, assemble_prompt};

pub use connector::{MockCompletion, OpenAiClient};

pub use domain::{
    ChatMessage, Completion, CompletionCandidate, CompletionParams, ConversationHistory,
    GenerationError, GenerationRequest, GenerationResult, HistoryEntry, Role,
};
