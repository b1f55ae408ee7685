//! Prompt Templates
//!
//! Prompt constants and context formatting for the three Generator
//! call sites (Q&A, study plans, quizzes). Retrieved chunks are rendered
//! with their source tags so the Generator can cite pages; code and math
//! chunks are re-fenced so the material survives the round trip intact.

use crate::core::search::ContextChunk;

/// System prompt for lecture Q&A.
pub const QA_SYSTEM_PROMPT: &str = r#"You are an experienced, friendly teaching assistant helping a student understand concepts from their lecture materials.

CRITICAL RULES:
1. Use ONLY information from the provided lecture context below
2. If the answer isn't in the context, say: "I don't see that covered in the lecture materials I have access to."
3. Preserve any pseudocode or formulas exactly as shown in the lecture
4. Do NOT sprinkle [Page X] citations through the text; add one grouped citation line at the very end, e.g. [Page 3, 7]

Explain naturally and step-by-step, as if having a conversation with a student.
"#;

/// System prompt for study-plan generation. The Generator must return a
/// single JSON object matching the StudyPlan schema; the plan validator
/// treats whatever comes back as untrusted.
pub const PLANNER_SYSTEM_PROMPT: &str = r#"You are an expert university-level study coach. Design a realistic, time-bounded study plan from the student profile and the lecture sections provided.

Rules:
1. The plan must be feasible within total_days x daily_minutes; prioritize "core" and "important" sections, compress or omit "optional" ones, and note compromises in summary.notes and warnings.
2. Weak topics MUST appear in the first 60% of days, receive 20-30% more time than normal sections, and get at least TWO review blocks across the plan.
3. Add short review blocks on later days; at least one of the last two days must be predominantly review.
4. Break each day into concrete tasks, not just topic names.
5. Only use section ids that exist in the provided sections JSON.

Output a single valid JSON object and nothing else, with this structure:
{"summary": {"total_days": 0, "total_estimated_minutes": 0, "topics_covered": [], "review_days": 0, "plan_style": "", "notes": ""},
 "days": [{"day": 1, "focus": "", "estimated_total_minutes": 0,
           "study_blocks": [{"chapter": "", "section_title": "", "section_ids": [], "estimated_minutes": 0, "tasks": []}],
           "review_blocks": [{"source_days": [], "topics": [], "estimated_minutes": 0, "tasks": []}]}],
 "warnings": []}
"#;

/// System prompt for practice-question generation. A batch must be
/// homogeneous in the requested type; the question-type filter enforces
/// this regardless.
pub const QUIZ_SYSTEM_PROMPT: &str = r#"You are an expert educator creating practice questions from lecture content.

CRITICAL RULES:
1. Base questions ONLY on the provided lecture content
2. ALL questions MUST be of the requested type - no mixing of types
3. Test understanding, not just memorization; vary difficulty (easy, medium, hard)

For multiple-choice questions: exactly 4 options (A-D), one correct answer, plausible distractors, with "options", "correct_answer", and "explanation" fields.
For open-ended questions: answerable in 2-4 sentences, with "sample_answer" and "key_points" fields.

Output JSON only, no other text:
{"questions": [{"question_number": 1, "question_text": "", "question_type": "multiple-choice|open-ended", "difficulty": "easy|medium|hard", "topic": "", "page_reference": "Page X", ...type-specific fields}]}
"#;

/// Query used to retrieve document structure for plan generation.
pub const STRUCTURE_QUERY: &str =
    "Table of Contents Syllabus Course Schedule Chapters Topics Overview";

/// Render retrieved chunks into a prompt context block.
///
/// Code chunks are wrapped in a pseudo-code fence and math chunks in a
/// display-math fence unless already fenced, and every chunk carries its
/// source tag for citations.
pub fn format_context(chunks: &[ContextChunk]) -> String {
    chunks
        .iter()
        .map(|chunk| {
            let stripped = chunk.text.trim();
            let content = if chunk.metadata.contains_code && !stripped.starts_with("```") {
                format!("```pseudo\n{stripped}\n```")
            } else if chunk.metadata.contains_math && !stripped.contains("$$") {
                format!("$$\n{stripped}\n$$")
            } else {
                stripped.to_string()
            };

            let mut tags = Vec::new();
            if chunk.metadata.contains_code {
                tags.push("code");
            }
            if chunk.metadata.contains_math {
                tags.push("math");
            }
            let tag_str = if tags.is_empty() {
                String::new()
            } else {
                format!(" | Tags: {}", tags.join(", "))
            };

            format!(
                "Content:\n{content}\n\nSource: [Page {}] (Chunk {}){tag_str}",
                chunk.metadata.page, chunk.chunk_id
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n---\n\n")
}

/// Assemble the Q&A prompt.
pub fn build_qa_prompt(question: &str, chunks: &[ContextChunk]) -> String {
    format!(
        "{QA_SYSTEM_PROMPT}\nLecture Context:\n{}\n\nQuestion: {question}",
        format_context(chunks)
    )
}

/// Assemble the planner prompt from the student profile, the section
/// catalog (as JSON), and retrieved structural context.
#[allow(clippy::too_many_arguments)]
pub fn build_planner_prompt(
    total_days: u32,
    daily_minutes: u32,
    level: &str,
    goal: &str,
    weak_topics: &[String],
    deadline_context: &str,
    sections_json: &str,
    context: &str,
) -> String {
    let weak = if weak_topics.is_empty() {
        "none specified".to_string()
    } else {
        weak_topics.join(", ")
    };

    format!(
        "{PLANNER_SYSTEM_PROMPT}\n\
         Student Profile:\n\
         - Level: {level}\n\
         - Goal: {goal}\n\
         - Total days available: {total_days}\n\
         - Daily study time (minutes): {daily_minutes}\n\
         - Weak topics (must be prioritized, appear early, with extra time): {weak}\n\
         - Deadline context: {deadline_context}\n\n\
         Sections JSON:\n{sections_json}\n\n\
         Context from Lecture Notes:\n{context}\n\n\
         Generate the study plan now. Include ALL weak topics mentioned: {weak}"
    )
}

/// Assemble the quiz prompt.
pub fn build_quiz_prompt(
    question_type: &str,
    num_questions: usize,
    focused_topics: &[String],
    chunks: &[ContextChunk],
) -> String {
    let focus = if focused_topics.is_empty() {
        String::new()
    } else {
        format!(
            "\nFocus questions on these specific topics: {}",
            focused_topics.join(", ")
        )
    };

    format!(
        "{QUIZ_SYSTEM_PROMPT}\nLecture Content:\n{}\n\n\
         Generate EXACTLY {num_questions} questions, ALL of type {question_type}.{focus}",
        format_context(chunks)
    )
}
