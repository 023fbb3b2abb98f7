use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info};

use crate::application::use_cases::assemble_prompt::assemble_prompt;
use crate::application::CompletionClient;
use crate::domain::{
    Completion, CompletionParams, GenerationError, GenerationRequest, GenerationResult,
};

/// Generates one assistant reply per call: assemble the prompt sequence,
/// invoke the completion service, normalize the first candidate.
///
/// Strictly linear — no retries, no branching on message content. Calls are
/// independent and may run concurrently; the use case holds no mutable state,
/// only the shared completion client handle and fixed generation parameters.
///
/// Dropping the future returned by [`execute`](Self::execute) cancels the
/// in-flight network call; the caller owns the race against disconnects.
pub struct GenerateResponseUseCase {
    completion_client: Arc<dyn CompletionClient>,
    params: CompletionParams,
}

impl GenerateResponseUseCase {
    pub fn new(completion_client: Arc<dyn CompletionClient>, params: CompletionParams) -> Self {
        Self {
            completion_client,
            params,
        }
    }

    pub async fn execute(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        info!(
            "Generating response for client {} ({} history turns)",
            request.client_id(),
            request.history().len()
        );
        let start_time = Instant::now();

        let messages = assemble_prompt(&request)?;
        let completion = self
            .completion_client
            .complete(&messages, &self.params)
            .await?;
        let result = normalize_completion(completion)?;

        info!(
            "Generated {} chars for client {} in {:.2}s",
            result.content().len(),
            request.client_id(),
            start_time.elapsed().as_secs_f64()
        );
        Ok(result)
    }
}

/// Extract the first candidate's content and wrap it for the caller.
///
/// The reply role is fixed to `assistant`; the `recommend` flag stays `false`
/// unconditionally. A reply with no candidates, or whose first candidate
/// carries no content, violates the upstream contract.
fn normalize_completion(completion: Completion) -> Result<GenerationResult, GenerationError> {
    match completion
        .into_candidates()
        .into_iter()
        .next()
        .and_then(|candidate| candidate.into_content())
    {
        Some(content) => Ok(GenerationResult::new(content)),
        None => {
            let err =
                GenerationError::malformed_response("completion carried no candidate content");
            error!("Completion service reply unusable: {err}");
            Err(err)
        }
    }
}
