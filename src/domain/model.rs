use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcronymEntry {
    pub acronym: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactAnswers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    pub action: String,
    pub business_impact: String,
    pub specific_impact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_alignment_and_financials: Option<String>,
}

impl ImpactAnswers {
    pub fn project(&self) -> &str {
        self.project.as_deref().unwrap_or("")
    }

    pub fn goal_alignment_and_financials(&self) -> &str {
        self.goal_alignment_and_financials.as_deref().unwrap_or("")
    }
}

/// Answers plus the rendered sentence, as written by the JSON export.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactRecord<'a> {
    #[serde(flatten)]
    pub answers: &'a ImpactAnswers,
    pub impact_statement: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportChoice {
    Clipboard,
    Markdown,
    Json,
    Skip,
}

impl ExportChoice {
    /// Menu answers `1`..`3` pick an export; anything else skips it.
    pub fn from_menu(answer: &str) -> Self {
        match answer.trim() {
            "1" => ExportChoice::Clipboard,
            "2" => ExportChoice::Markdown,
            "3" => ExportChoice::Json,
            _ => ExportChoice::Skip,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Copied,
    Saved(String),
    Skipped,
}
