//! Generator Seam
//!
//! The external text-generation collaborator. Its output is untrusted:
//! free text for Q&A, structured text for plans and quizzes that may be
//! malformed, incomplete, or constraint-violating — downstream validation
//! (plan validator, question-type filter) is mandatory.
//!
//! `GeneratorClient` wraps any [`Generator`] with the bounded timeout and
//! bounded retry count this core is allowed before falling back.

pub mod prompts;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::GeneratorConfig;

// ============================================================================
// Errors
// ============================================================================

/// Generator call errors
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Generator unavailable: {0}")]
    Unavailable(String),

    #[error("Generator call timed out after {0}s")]
    Timeout(u64),

    #[error("Generator returned unparsable structured output: {0}")]
    MalformedOutput(String),
}

/// Result type alias for Generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

// ============================================================================
// Generator Trait
// ============================================================================

/// The generative text collaborator.
///
/// Implementations wrap whatever model backend the embedder wires in;
/// this core never inspects the backend, only the returned text.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

// ============================================================================
// Client Wrapper
// ============================================================================

/// Timeout/retry wrapper around a [`Generator`].
pub struct GeneratorClient<'a> {
    generator: &'a dyn Generator,
    timeout: Duration,
    timeout_secs: u64,
    max_retries: u32,
}

impl<'a> GeneratorClient<'a> {
    pub fn new(generator: &'a dyn Generator, config: &GeneratorConfig) -> Self {
        Self {
            generator,
            timeout: Duration::from_secs(config.timeout_secs),
            timeout_secs: config.timeout_secs,
            max_retries: config.max_retries,
        }
    }

    /// Single generation call under the configured timeout.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        match tokio::time::timeout(self.timeout, self.generator.generate(prompt)).await {
            Ok(result) => result,
            Err(_) => Err(GeneratorError::Timeout(self.timeout_secs)),
        }
    }

    /// Generation with parsing, retried up to `max_retries` times when the
    /// call fails transiently or `parse` rejects the output.
    pub async fn generate_parsed<T, F>(&self, prompt: &str, parse: F) -> Result<T>
    where
        F: Fn(&str) -> Result<T>,
    {
        let mut last_err = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                log::warn!("Retrying generation (attempt {}/{})", attempt, self.max_retries);
            }
            match self.generate(prompt).await {
                Ok(text) => match parse(&text) {
                    Ok(value) => return Ok(value),
                    Err(e) => {
                        log::warn!("Generator output rejected: {e}");
                        last_err = Some(e);
                    }
                },
                Err(e @ GeneratorError::Timeout(_)) | Err(e @ GeneratorError::Unavailable(_)) => {
                    log::warn!("Generator call failed: {e}");
                    last_err = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_err.unwrap_or_else(|| GeneratorError::Unavailable("no attempts made".to_string())))
    }
}

/// Strip a Markdown code fence wrapped around a JSON payload, a common
/// Generator habit even when told to return bare JSON.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}
