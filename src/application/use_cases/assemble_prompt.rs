use tracing::warn;

use crate::domain::{ChatMessage, GenerationError, GenerationRequest, Role};

/// Build the ordered prompt sequence for one generation call:
/// `[system prompt] ++ history (chronological) ++ [current user message]`.
///
/// For a history of N turns the output always has N + 2 messages; nothing is
/// reordered or truncated. History roles arrive as free-form strings from the
/// caller boundary and are validated here — an unrecognized role fails with
/// [`GenerationError::InvalidRole`] before any network activity occurs.
///
/// Pure: no I/O, no mutation of the request.
pub fn assemble_prompt(request: &GenerationRequest) -> Result<Vec<ChatMessage>, GenerationError> {
    let mut messages = Vec::with_capacity(request.history().len() + 2);
    messages.push(ChatMessage::new(Role::System, request.system_prompt()));

    for (index, entry) in request.history().iter().enumerate() {
        let role: Role = entry.role().parse().map_err(|e: GenerationError| {
            warn!(
                "Rejecting history entry {} for client {}: {}",
                index,
                request.client_id(),
                e
            );
            e
        })?;
        messages.push(ChatMessage::new(role, entry.content()));
    }

    messages.push(ChatMessage::new(Role::User, request.message()));
    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConversationHistory, HistoryEntry};

    fn request_with_history(entries: Vec<HistoryEntry>) -> GenerationRequest {
        GenerationRequest::new("What helps with sleep?", "You are a helpful assistant.")
            .with_history(ConversationHistory::from(entries))
            .with_client_id("test-client")
    }

    #[test]
    fn empty_history_yields_system_then_user() {
        let messages = assemble_prompt(&request_with_history(vec![])).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role(), Role::System);
        assert_eq!(messages[0].content(), "You are a helpful assistant.");
        assert_eq!(messages[1].role(), Role::User);
        assert_eq!(messages[1].content(), "What helps with sleep?");
    }

    #[test]
    fn history_of_n_yields_n_plus_two_in_order() {
        let entries: Vec<HistoryEntry> = (0..5)
            .map(|i| {
                let role = if i % 2 == 0 { "user" } else { "assistant" };
                HistoryEntry::new(role, format!("turn {i}"))
            })
            .collect();
        let messages = assemble_prompt(&request_with_history(entries)).unwrap();

        assert_eq!(messages.len(), 7);
        assert_eq!(messages[0].role(), Role::System);
        for i in 0..5 {
            assert_eq!(messages[i + 1].content(), format!("turn {i}"));
        }
        assert_eq!(messages[6].role(), Role::User);
        assert_eq!(messages[6].content(), "What helps with sleep?");
    }

    #[test]
    fn worked_example_matches_expected_sequence() {
        let request = request_with_history(vec![HistoryEntry::new("user", "Hello")]);
        let messages = assemble_prompt(&request).unwrap();

        assert_eq!(
            messages,
            vec![
                ChatMessage::new(Role::System, "You are a helpful assistant."),
                ChatMessage::new(Role::User, "Hello"),
                ChatMessage::new(Role::User, "What helps with sleep?"),
            ]
        );
    }

    #[test]
    fn unrecognized_history_role_is_rejected() {
        let request = request_with_history(vec![
            HistoryEntry::new("user", "Hello"),
            HistoryEntry::new("moderator", "Approved"),
        ]);
        let err = assemble_prompt(&request).unwrap_err();
        assert!(err.is_invalid_role());
    }

    #[test]
    fn system_role_in_history_is_accepted() {
        let request = request_with_history(vec![HistoryEntry::new("system", "Extra context")]);
        let messages = assemble_prompt(&request).unwrap();
        assert_eq!(messages[1].role(), Role::System);
    }
}
