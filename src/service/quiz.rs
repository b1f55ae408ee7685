//! Quiz Request Flow
//!
//! Samples diverse (or topic-focused) context, asks the Generator for a
//! homogeneous batch, and enforces the requested question type. An
//! unparsable batch degrades to zero items with a partial-result warning;
//! only collaborator unavailability fails the request.

use anyhow::ensure;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::core::llm::{prompts, strip_code_fence, Generator, GeneratorClient, GeneratorError};
use crate::core::quiz::{filter_by_type, QuestionType, QuizBatch, QuizItem};
use crate::core::retrieval::sample_diverse;
use crate::core::search::ContentIndex;
use crate::core::topics;

/// Smallest batch a caller may request.
pub const MIN_QUESTIONS: usize = 5;

/// Largest batch a caller may request.
pub const MAX_QUESTIONS: usize = 20;

/// Inputs for practice-question generation.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    pub question_type: QuestionType,
    pub num_questions: usize,
    #[serde(default)]
    pub document_references: Option<Vec<String>>,
    /// Shuffle the sampled context to vary repeated generations.
    #[serde(default)]
    pub shuffle: bool,
    /// Free-form topic list; run through the topic parser.
    #[serde(default)]
    pub focused_topics: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub question_type: QuestionType,
    /// Homogeneous batch, at most `num_questions` long.
    pub questions: Vec<QuizItem>,
    pub requested: usize,
    pub warnings: Vec<String>,
}

/// Generate a batch of practice questions.
pub async fn generate_quiz(
    request: &QuizRequest,
    index: &dyn ContentIndex,
    generator: &dyn Generator,
    config: &AppConfig,
) -> anyhow::Result<QuizResponse> {
    ensure!(
        (MIN_QUESTIONS..=MAX_QUESTIONS).contains(&request.num_questions),
        "num_questions must be between {MIN_QUESTIONS} and {MAX_QUESTIONS}"
    );

    let focused = topics::parse(request.focused_topics.as_deref().unwrap_or(""));
    let mut warnings = Vec::new();

    let chunks = sample_diverse(
        &focused,
        index,
        request.document_references.as_deref(),
        config.retrieval.quiz_chunks,
        request.shuffle,
    )
    .await?;

    if chunks.is_empty() {
        warnings.push("No lecture content matched; returning an empty quiz".to_string());
        return Ok(QuizResponse {
            question_type: request.question_type,
            questions: vec![],
            requested: request.num_questions,
            warnings,
        });
    }

    let prompt = prompts::build_quiz_prompt(
        request.question_type.as_str(),
        request.num_questions,
        &focused,
        &chunks,
    );

    let client = GeneratorClient::new(generator, &config.generator);
    let items = match client
        .generate_parsed(&prompt, |text| {
            serde_json::from_str::<QuizBatch>(strip_code_fence(text))
                .map(|batch| batch.questions)
                .map_err(|e| GeneratorError::MalformedOutput(e.to_string()))
        })
        .await
    {
        Ok(items) => items,
        Err(GeneratorError::MalformedOutput(e)) => {
            log::warn!("Quiz batch stayed unparsable after retries: {e}");
            warnings.push("Question generation returned unusable output; partial result with no questions".to_string());
            vec![]
        }
        Err(e) => return Err(e.into()),
    };

    let (mut questions, report) = filter_by_type(items, request.question_type);
    if report.removed > 0 {
        warnings.push(format!(
            "Dropped {} question(s) of the wrong type",
            report.removed
        ));
    }

    questions.truncate(request.num_questions);
    if questions.len() < request.num_questions {
        warnings.push(format!(
            "Returned {} of {} requested questions",
            questions.len(),
            request.num_questions
        ));
    }

    Ok(QuizResponse {
        question_type: request.question_type,
        questions,
        requested: request.num_questions,
        warnings,
    })
}
