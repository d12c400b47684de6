//! `vitrine-assist`
//!
//! **Responsibility:** optional natural-language product-suggestion boundary.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not mutate catalog or cart state.
//! - The remote text-completion service is a black box behind
//!   [`SuggestionClient`].
//! - Every failure collapses to a canned apology; nothing propagates into the
//!   UI as an error.

pub mod prompt;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use vitrine_catalog::Product;

pub use prompt::build_prompt;

/// Reply used whenever the suggestion service misbehaves.
pub const FALLBACK_REPLY: &str =
    "Tive um probleminha para processar sua sugestão. Pode tentar de novo?";

/// Failures of the remote completion call. Internal to this crate's logging;
/// callers of [`suggest`] never see them.
#[derive(Debug, Error)]
pub enum AssistError {
    #[error("suggestion service not configured: {0}")]
    Misconfigured(String),

    #[error("completion request failed: {0}")]
    Transport(String),
}

/// Opaque remote text-completion call.
#[async_trait]
pub trait SuggestionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, AssistError>;
}

/// Ask the assistant for product suggestions.
///
/// Builds the persona prompt from the live product list and the user query,
/// and degrades to [`FALLBACK_REPLY`] on any failure.
pub async fn suggest(client: &dyn SuggestionClient, query: &str, products: &[Product]) -> String {
    let prompt = build_prompt(query, products);
    match client.complete(&prompt).await {
        Ok(reply) => reply,
        Err(err) => {
            warn!(error = %err, "suggestion service failed, returning fallback reply");
            FALLBACK_REPLY.to_owned()
        }
    }
}
