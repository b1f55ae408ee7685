//! Study-Plan Request Flow
//!
//! Normalizes weak topics, retrieves structural context, builds the
//! section catalog, asks the Generator for a draft schedule, and runs the
//! draft through the validator. A draft that stays malformed after the
//! bounded retries is replaced by the deterministic fallback plan; only a
//! truly unavailable collaborator fails the request.

use anyhow::ensure;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::core::catalog::{Section, SectionCatalogBuilder};
use crate::core::llm::{
    prompts, strip_code_fence, Generator, GeneratorClient, GeneratorError,
};
use crate::core::plan::{fallback_plan, PlanConstraints, PlanValidator, StudyPlan};
use crate::core::search::{ContentIndex, ContextChunk};
use crate::core::topics;

/// Chunks of extra context retrieved per weak topic.
const WEAK_TOPIC_CONTEXT_K: usize = 2;

/// Self-reported student level; a prompt input only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        };
        write!(f, "{name}")
    }
}

/// Inputs for plan generation over one uploaded document.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequest {
    pub document_reference: String,
    pub total_days: u32,
    pub daily_minutes: u32,
    pub level: Level,
    #[serde(default)]
    pub goal: Option<String>,
    /// Free-form weak-topic list; run through the topic parser.
    #[serde(default)]
    pub weak_topics: Option<String>,
    #[serde(default)]
    pub deadline_context: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    /// Validated (possibly repaired or fallback) plan; warnings inside.
    pub plan: StudyPlan,
}

/// Generate and validate a study plan.
pub async fn generate_plan(
    request: &PlanRequest,
    index: &dyn ContentIndex,
    generator: &dyn Generator,
    config: &AppConfig,
) -> anyhow::Result<PlanResponse> {
    ensure!(request.total_days > 0, "total_days must be positive");
    ensure!(request.daily_minutes > 0, "daily_minutes must be positive");

    let weak_topics = topics::parse(request.weak_topics.as_deref().unwrap_or(""));
    let scope = std::slice::from_ref(&request.document_reference);

    // Structural context, plus targeted context for each weak topic.
    let mut chunks = index
        .search(prompts::STRUCTURE_QUERY, config.retrieval.structure_k, Some(scope))
        .await?;
    let mut seen: std::collections::HashSet<String> =
        chunks.iter().map(|c| c.chunk_id.clone()).collect();
    for topic in &weak_topics {
        let topic_chunks = index
            .search(topic, WEAK_TOPIC_CONTEXT_K, Some(scope))
            .await?;
        for chunk in topic_chunks {
            if seen.insert(chunk.chunk_id.clone()) {
                chunks.push(chunk);
            }
        }
    }

    let catalog = SectionCatalogBuilder::build(&structure_text(&chunks));
    log::info!(
        "Built a catalog of {} section(s) for {}",
        catalog.len(),
        request.document_reference
    );

    let context_chunks = &chunks[..chunks.len().min(config.retrieval.structure_k)];
    let prompt = prompts::build_planner_prompt(
        request.total_days,
        request.daily_minutes,
        &request.level.to_string(),
        request.goal.as_deref().unwrap_or("understand the material"),
        &weak_topics,
        request.deadline_context.as_deref().unwrap_or("upcoming exam"),
        &serde_json::to_string_pretty(&catalog)?,
        &prompts::format_context(context_chunks),
    );

    let constraints = PlanConstraints {
        daily_minutes: request.daily_minutes,
        total_days: request.total_days,
        weak_topics,
    };

    let client = GeneratorClient::new(generator, &config.generator);
    let candidate = match client
        .generate_parsed(&prompt, |text| parse_candidate(text))
        .await
    {
        Ok(plan) => plan,
        Err(GeneratorError::MalformedOutput(e)) => {
            log::warn!("Generator plan stayed unparsable after retries: {e}");
            fallback_plan(&catalog, &constraints)
        }
        Err(e) => return Err(e.into()),
    };

    let validator = PlanValidator::new(&constraints, &catalog);
    let (plan, warnings) = validator.validate(&candidate);
    if !warnings.is_empty() {
        log::info!("Plan validated with {} warning(s)", warnings.len());
    }

    Ok(PlanResponse { plan })
}

/// Render retrieved chunks as the line-oriented structural text the
/// catalog builder parses: one block per chunk, page marker first.
fn structure_text(chunks: &[ContextChunk]) -> String {
    chunks
        .iter()
        .map(|c| format!("*Pages {}*\n{}", c.metadata.page.max(1), c.text))
        .collect::<Vec<_>>()
        .join("\n---\n")
}

fn parse_candidate(text: &str) -> crate::core::llm::Result<StudyPlan> {
    serde_json::from_str::<StudyPlan>(strip_code_fence(text))
        .map_err(|e| GeneratorError::MalformedOutput(e.to_string()))
}

/// Expose the catalog built for a document, mainly for embedders that
/// want to display the parsed structure alongside the plan.
pub async fn build_catalog(
    document_reference: &str,
    index: &dyn ContentIndex,
    structure_k: usize,
) -> anyhow::Result<Vec<Section>> {
    let scope = [document_reference.to_string()];
    let chunks = index
        .search(prompts::STRUCTURE_QUERY, structure_k, Some(&scope))
        .await?;
    Ok(SectionCatalogBuilder::build(&structure_text(&chunks)))
}
