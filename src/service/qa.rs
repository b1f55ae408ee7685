//! Q&A Request Flow
//!
//! Classifies the question into a retrieval tier, pulls that many chunks
//! from the content index, and hands the formatted context to the
//! Generator. Index failure is a request failure — answering from zero
//! context would be misleading.

use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::core::llm::{prompts, Generator, GeneratorClient};
use crate::core::retrieval;
use crate::core::search::{ContentIndex, ContextChunk};

/// A student question, optionally scoped to specific documents.
#[derive(Debug, Clone, Deserialize)]
pub struct QaRequest {
    pub question: String,
    #[serde(default)]
    pub document_references: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QaResponse {
    pub answer: String,
    /// Chunks the answer was grounded in, in retrieval order.
    pub sources: Vec<ContextChunk>,
}

/// Answer a question over the indexed lecture material.
pub async fn answer_question(
    request: &QaRequest,
    index: &dyn ContentIndex,
    generator: &dyn Generator,
    config: &GeneratorConfig,
) -> anyhow::Result<QaResponse> {
    let tier = retrieval::classify(&request.question);
    log::info!("Question classified as {tier}");

    let chunks = index
        .search(
            &request.question,
            tier.chunk_budget(),
            request.document_references.as_deref(),
        )
        .await?;
    log::debug!("Retrieved {} chunk(s) for answering", chunks.len());

    let prompt = prompts::build_qa_prompt(&request.question, &chunks);
    let client = GeneratorClient::new(generator, config);
    let answer = client.generate(&prompt).await?;

    Ok(QaResponse {
        answer,
        sources: chunks,
    })
}
