use crate::core::text::slugify;
use crate::core::{Clipboard, ExportChoice, ExportOutcome, ImpactAnswers, ImpactRecord, Storage};
use crate::utils::error::Result;

pub fn export_file_stem(answers: &ImpactAnswers) -> String {
    slugify(answers.project())
}

pub fn render_markdown(statement: &str) -> String {
    format!("# Impact Statement\n\n{}\n", statement)
}

pub fn render_json(answers: &ImpactAnswers, statement: &str) -> Result<String> {
    let record = ImpactRecord {
        answers,
        impact_statement: statement,
    };
    Ok(serde_json::to_string_pretty(&record)?)
}

pub struct Exporter<S: Storage, C: Clipboard> {
    storage: S,
    clipboard: C,
}

impl<S: Storage, C: Clipboard> Exporter<S, C> {
    pub fn new(storage: S, clipboard: C) -> Self {
        Self { storage, clipboard }
    }

    pub async fn export(
        &self,
        choice: ExportChoice,
        answers: &ImpactAnswers,
        statement: &str,
    ) -> Result<ExportOutcome> {
        let stem = export_file_stem(answers);

        let outcome = match choice {
            ExportChoice::Clipboard => {
                self.clipboard.copy(statement)?;
                ExportOutcome::Copied
            }
            ExportChoice::Markdown => {
                let filename = format!("{}.md", stem);
                self.storage
                    .write_file(&filename, render_markdown(statement).as_bytes())
                    .await?;
                ExportOutcome::Saved(self.storage.location(&filename))
            }
            ExportChoice::Json => {
                let filename = format!("{}.json", stem);
                let json = render_json(answers, statement)?;
                self.storage.write_file(&filename, json.as_bytes()).await?;
                ExportOutcome::Saved(self.storage.location(&filename))
            }
            ExportChoice::Skip => ExportOutcome::Skipped,
        };

        tracing::info!("Export {:?}: {:?}", choice, outcome);
        Ok(outcome)
    }
}
