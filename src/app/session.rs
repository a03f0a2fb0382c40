use crate::app::export::Exporter;
use crate::app::prompt::Prompter;
use crate::core::formatter::StatementFormatter;
use crate::core::{Clipboard, ExportChoice, ExportOutcome, ImpactAnswers, Storage};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const BANNER: &str = "\n🛠️  Impactify – Engineer Impact Statement Generator\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub answers: ImpactAnswers,
    pub statement: String,
    pub export: ExportOutcome,
}

/// One interactive run: ask, format, show, export.
pub struct ImpactSession<S: Storage, C: Clipboard> {
    formatter: StatementFormatter,
    exporter: Exporter<S, C>,
    preset_export: Option<ExportChoice>,
}

impl<S: Storage, C: Clipboard> ImpactSession<S, C> {
    pub fn new(formatter: StatementFormatter, exporter: Exporter<S, C>) -> Self {
        Self {
            formatter,
            exporter,
            preset_export: None,
        }
    }

    /// Skips the export menu when a choice is already known.
    pub fn with_export_choice(mut self, choice: Option<ExportChoice>) -> Self {
        self.preset_export = choice;
        self
    }

    /// A rejected statement is shown to the user and returned as the error;
    /// nothing is exported in that case.
    pub async fn run<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<SessionReport> {
        prompter.say(BANNER)?;

        let answers = prompter.collect_answers()?;
        let statement = match self.formatter.try_generate(&answers) {
            Ok(statement) => statement,
            Err(e) => {
                if e.is_statement_error() {
                    tracing::warn!("Statement rejected: {:?}", e);
                    prompter.say(&format!("\n❌ {}", e))?;
                }
                return Err(e);
            }
        };

        prompter.say("\n✅ Final Impact Statement:\n")?;
        prompter.say(&statement)?;

        let choice = match self.preset_export {
            Some(choice) => choice,
            None => prompter.choose_export()?,
        };

        let export = self.exporter.export(choice, &answers, &statement).await?;
        match &export {
            ExportOutcome::Copied => prompter.say("✔ Copied to clipboard!")?,
            ExportOutcome::Saved(location) => prompter.say(&format!("✔ Saved to: {}", location))?,
            ExportOutcome::Skipped => prompter.say("No export selected.")?,
        }

        Ok(SessionReport {
            answers,
            statement,
            export,
        })
    }
}
