//! SOW Generation: orchestrates the drafting pipeline.
//!
//! Flow: analyze_document → load reference material → build prompt → LLM generate.
//!
//! Nothing is persisted; the Markdown goes straight back to the caller.

use serde::Serialize;
use tracing::info;

use crate::content::{ContentKey, ContentStore};
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::sow::analysis::{analyze_document, AnalysisResult};
use crate::sow::prompts::SOW_PROMPT_TEMPLATE;

/// Opaque reference blocks interpolated into the prompt.
#[derive(Debug, Clone, Default)]
pub struct ReferenceMaterial {
    pub sow_templates: String,
    pub engineers: String,
    pub pricing: String,
}

impl ReferenceMaterial {
    pub async fn load(content: &dyn ContentStore) -> Result<Self, AppError> {
        let (sow_templates, engineers, pricing) = tokio::try_join!(
            content.read(ContentKey::SowTemplates),
            content.read(ContentKey::Engineers),
            content.read(ContentKey::Pricing),
        )?;
        Ok(Self {
            sow_templates,
            engineers,
            pricing,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SowDraft {
    pub markdown: String,
}

/// Fills the SOW template. The document text is substituted last so that braces
/// inside the upload are never mistaken for placeholders.
pub fn build_sow_prompt(
    analysis: &AnalysisResult,
    document_text: &str,
    references: &ReferenceMaterial,
) -> String {
    let project = &analysis.project;
    SOW_PROMPT_TEMPLATE
        .replace("{platform}", analysis.platform.detected.label())
        .replace("{size}", project.size.label())
        .replace("{weeks}", &project.estimated_weeks)
        .replace("{cost}", &project.estimated_cost)
        .replace("{complexity}", &project.complexity.to_string())
        .replace("{sow_templates}", &references.sow_templates)
        .replace("{engineers}", &references.engineers)
        .replace("{pricing}", &references.pricing)
        .replacen("{document}", document_text, 1)
}

/// Runs the full drafting pipeline for one uploaded document.
pub async fn generate_sow(
    document_text: &str,
    filename: &str,
    content: &dyn ContentStore,
    llm: &dyn TextGenerator,
) -> Result<SowDraft, AppError> {
    let analysis = analyze_document(document_text, filename);
    info!(
        "Platform detection scores: GCP={}, Azure={}, AWS={}",
        analysis.platform.scores.gcp, analysis.platform.scores.azure, analysis.platform.scores.aws
    );
    info!(
        "Project analysis: platform={}, size={}, complexity={}",
        analysis.platform.detected,
        analysis.project.size.label(),
        analysis.project.complexity
    );

    let references = ReferenceMaterial::load(content).await?;
    let prompt = build_sow_prompt(&analysis, document_text, &references);

    info!(
        "Sending SOW prompt ({} chars) to {}",
        prompt.len(),
        llm.endpoint()
    );
    let markdown = llm.generate(&prompt).await?;
    info!("SOW draft received ({} chars)", markdown.len());

    Ok(SowDraft { markdown })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::StaticContentStore;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    const SECTION_HEADERS: [&str; 12] = [
        "## 1. EXECUTIVE SUMMARY",
        "## 2. PROJECT SCOPE & OBJECTIVES",
        "## 3. GCP SOLUTION ARCHITECTURE",
        "## 4. GCP METHODOLOGY & BEST PRACTICES",
        "## 5. DETAILED DELIVERABLES",
        "## 6. TEAM COMPOSITION & RESPONSIBILITIES",
        "## 7. CUSTOMER REQUIREMENTS & RESPONSIBILITIES",
        "## 8. PROJECT TIMELINE & MILESTONES",
        "## 9. INVESTMENT & COMMERCIAL TERMS",
        "## 10. GCP RISK ASSESSMENT & MITIGATION",
        "## 11. SUCCESS CRITERIA & ACCEPTANCE",
        "## 12. POST-DEPLOYMENT GCP SUPPORT",
    ];

    /// Records prompts and replays a fixed outcome.
    struct RecordingGenerator {
        prompts: Mutex<Vec<String>>,
        outcome: fn() -> Result<String, LlmError>,
    }

    impl RecordingGenerator {
        fn new(outcome: fn() -> Result<String, LlmError>) -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                outcome,
            }
        }
    }

    #[async_trait]
    impl TextGenerator for RecordingGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            (self.outcome)()
        }

        fn endpoint(&self) -> &str {
            "http://llm.test"
        }
    }

    fn references() -> ReferenceMaterial {
        ReferenceMaterial {
            sow_templates: "TEMPLATE BOILERPLATE".to_string(),
            engineers: "- Ada Lovelace, Principal Architect".to_string(),
            pricing: "- Cloud assessment: $12,000".to_string(),
        }
    }

    #[test]
    fn test_prompt_contains_sections_in_order() {
        let text = "Move analytics to BigQuery and Vertex AI";
        let analysis = analyze_document(text, "req.txt");
        let prompt = build_sow_prompt(&analysis, text, &references());

        let mut cursor = 0;
        for header in SECTION_HEADERS {
            let pos = prompt[cursor..]
                .find(header)
                .unwrap_or_else(|| panic!("missing or out of order: {header}"));
            cursor += pos + header.len();
        }
    }

    #[test]
    fn test_prompt_interpolates_analysis_and_references() {
        let text = "Enterprise migration of legacy systems with kubernetes";
        let analysis = analyze_document(text, "req.txt");
        let prompt = build_sow_prompt(&analysis, text, &references());

        assert!(prompt.contains("- Preferred Cloud Platform: AWS"));
        assert!(prompt.contains("- Project Size: Medium"));
        assert!(prompt.contains("- Estimated Timeline: 8-16 weeks"));
        assert!(prompt.contains("- Estimated Investment: $75,000 - $200,000"));
        assert!(prompt.contains("- Complexity Score: 4/12\n"));
        assert!(prompt.contains("TEMPLATE BOILERPLATE"));
        assert!(prompt.contains("Ada Lovelace"));
        assert!(prompt.contains("Cloud assessment: $12,000"));
        assert!(prompt.contains(text));
        assert!(!prompt.contains("{platform}"));
    }

    #[test]
    fn test_complexity_denominator_is_fixed_at_twelve() {
        let text = "migration microservices kubernetes enterprise legacy compliance \
                    multi-region high availability disaster recovery ci/cd devops \
                    security audit performance optimization";
        let analysis = analyze_document(text, "req.txt");
        assert_eq!(analysis.project.complexity, 13);
        let prompt = build_sow_prompt(&analysis, text, &ReferenceMaterial::default());
        assert!(prompt.contains("- Complexity Score: 13/12\n"));
        assert!(prompt.contains("- Project Size: Enterprise"));
    }

    #[test]
    fn test_placeholders_inside_document_are_left_alone() {
        let text = "Budget line: {cost} and {platform}";
        let analysis = analyze_document(text, "req.txt");
        let prompt = build_sow_prompt(&analysis, text, &ReferenceMaterial::default());
        assert!(prompt.contains("Budget line: {cost} and {platform}"));
    }

    #[tokio::test]
    async fn test_generate_sow_returns_markdown() {
        let content = StaticContentStore::default()
            .with(ContentKey::Engineers, "- Grace Hopper")
            .with(ContentKey::Pricing, "- Migration sprint: $20,000");
        let llm = RecordingGenerator::new(|| Ok("# Statement of Work".to_string()));

        let draft = generate_sow("bigquery looker", "req.txt", &content, &llm)
            .await
            .unwrap();

        assert_eq!(draft.markdown, "# Statement of Work");
        let prompts = llm.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Grace Hopper"));
        assert!(prompts[0].contains("tailored for GCP"));
    }

    #[tokio::test]
    async fn test_generate_sow_surfaces_unavailable_service() {
        let llm = RecordingGenerator::new(|| {
            Err(LlmError::Unavailable {
                endpoint: "http://llm.test".to_string(),
                message: "connection refused".to_string(),
            })
        });
        let err = generate_sow("text", "req.txt", &StaticContentStore::default(), &llm)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::LlmUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_generate_sow_surfaces_generation_failure() {
        let llm = RecordingGenerator::new(|| {
            Err(LlmError::Api {
                status: 404,
                message: "model 'llama3' not found".to_string(),
            })
        });
        let err = generate_sow("text", "req.txt", &StaticContentStore::default(), &llm)
            .await
            .unwrap_err();
        match err {
            AppError::Llm(msg) => assert!(msg.contains("not found")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
