use serde::{Deserialize, Serialize};

use super::Role;

/// The single assistant reply handed back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    role: Role,
    content: String,
    recommend: bool,
}

impl GenerationResult {
    /// The role is always `assistant` and `recommend` is always `false`.
    /// The flag is a reserved placeholder for future content-based
    /// classification; no path in this crate sets it.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            recommend: false,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn recommend(&self) -> bool {
        self.recommend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_is_fixed_to_assistant_without_recommendation() {
        let result = GenerationResult::new("Try a consistent bedtime.");
        assert_eq!(result.role(), Role::Assistant);
        assert!(!result.recommend());
        assert_eq!(result.content(), "Try a consistent bedtime.");
    }

    #[test]
    fn result_serializes_for_the_transport_layer() {
        let result = GenerationResult::new("hi");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], "hi");
        assert_eq!(json["recommend"], false);
    }
}
