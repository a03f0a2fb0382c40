use crate::core::{ExportChoice, ImpactAnswers};
use crate::utils::error::{ImpactError, Result};
use std::io::{BufRead, Write};

pub const PROJECT_QUESTION: &str = "What is the name of the project or feature? (optional)";
pub const ACTION_QUESTION: &str = "What exactly did you do or build?";
pub const BUSINESS_IMPACT_QUESTION: &str = "How did this help the business or product?";
pub const SPECIFIC_IMPACT_QUESTION: &str = "What measurable change did it produce?";
pub const GOAL_ALIGNMENT_QUESTION: &str =
    "What goal or financial impact was this tied to? (e.g., \"OKR 1.5, saved $10,000\")";
pub const EXPORT_MENU: &str = "\nExport options:\n[1] Copy to clipboard\n[2] Save to markdown\n[3] Save to JSON\n[4] No export\nChoose 1-4:";

/// Line-oriented question/answer loop over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_attempts: usize,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, max_attempts: usize) -> Self {
        Self {
            input,
            output,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn read_answer(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{} ", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ImpactError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    pub fn ask_optional(&mut self, question: &str) -> Result<String> {
        self.read_answer(question)
    }

    /// Asks again on blank answers, at most `max_attempts` times.
    pub fn ask_required(&mut self, question: &str) -> Result<String> {
        for attempt in 1..=self.max_attempts {
            let answer = self.read_answer(question)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            tracing::debug!("Blank answer (attempt {}/{})", attempt, self.max_attempts);
        }

        Err(ImpactError::MissingInput {
            question: question.to_string(),
            attempts: self.max_attempts,
        })
    }

    pub fn collect_answers(&mut self) -> Result<ImpactAnswers> {
        let project = self.ask_optional(PROJECT_QUESTION)?;
        let action = self.ask_required(ACTION_QUESTION)?;
        let business_impact = self.ask_required(BUSINESS_IMPACT_QUESTION)?;
        let specific_impact = self.ask_required(SPECIFIC_IMPACT_QUESTION)?;
        let goal_alignment_and_financials = self.ask_optional(GOAL_ALIGNMENT_QUESTION)?;

        Ok(ImpactAnswers {
            project: Some(project),
            action,
            business_impact,
            specific_impact,
            goal_alignment_and_financials: Some(goal_alignment_and_financials),
        })
    }

    pub fn choose_export(&mut self) -> Result<ExportChoice> {
        let answer = self.ask_required(EXPORT_MENU)?;
        Ok(ExportChoice::from_menu(&answer))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
