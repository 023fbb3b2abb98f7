/// Default sampling temperature sent with every completion request.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default cap on generated output tokens.
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Fixed generation parameters passed to the completion service.
#[derive(Debug, Clone)]
pub struct CompletionParams {
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl CompletionParams {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        // The service rejects a zero token budget.
        self.max_tokens = max_tokens.max(1);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }
}

/// Provider-neutral shape of one completion service reply: zero or more
/// candidates, each optionally carrying message content.
///
/// Absence of usable content is a contract violation handled by the response
/// normalizer, not by the transport adapter.
#[derive(Debug, Clone, Default)]
pub struct Completion {
    candidates: Vec<CompletionCandidate>,
}

impl Completion {
    pub fn new(candidates: Vec<CompletionCandidate>) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &[CompletionCandidate] {
        &self.candidates
    }

    pub fn into_candidates(self) -> Vec<CompletionCandidate> {
        self.candidates
    }
}

#[derive(Debug, Clone)]
pub struct CompletionCandidate {
    content: Option<String>,
}

impl CompletionCandidate {
    pub fn new(content: Option<String>) -> Self {
        Self { content }
    }

    pub fn with_text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn into_content(self) -> Option<String> {
        self.content
    }
}
