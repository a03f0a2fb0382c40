use crate::core::acronyms::AcronymIndex;
use crate::core::text::{capitalize, lower_first, normalize_whitespace, upper_first};
use crate::core::{AcronymEntry, ImpactAnswers};
use crate::utils::error::Result;
use crate::utils::validation::{validate_max_length, validate_required_text};
use regex::Regex;

pub const MAX_ACTION_LENGTH: usize = 125;
pub const MAX_BUSINESS_IMPACT_LENGTH: usize = 125;
pub const MAX_SPECIFIC_IMPACT_LENGTH: usize = 125;
pub const MAX_GOAL_ALIGNMENT_LENGTH: usize = 150;

pub const NO_ALIGNMENT_CLAUSE: &str = "No specific alignment provided.";

const VERBATIM_TOKEN_PATTERN: &str = r#"^(`.*`|".*"|'.*')$"#;
const TRAILING_PUNCTUATION_PATTERN: &str = r"^(.+?)([.,!?;:]*)$";
const IMPACT_VERB_PATTERN: &str =
    r"(?i)^(increases|reduces|decreases|improves|lowers|cuts|saves|boosts|prevents|eliminates|fixes)";

/// Turns a set of answers into a single impact statement sentence.
///
/// Holds only immutable data, so one instance can be shared freely.
#[derive(Debug, Clone)]
pub struct StatementFormatter {
    acronyms: AcronymIndex,
    verbatim_token: Regex,
    trailing_punctuation: Regex,
    impact_verb: Regex,
}

impl StatementFormatter {
    pub fn new(entries: &[AcronymEntry]) -> Result<Self> {
        Self::with_index(AcronymIndex::new(entries))
    }

    pub fn with_index(acronyms: AcronymIndex) -> Result<Self> {
        Ok(Self {
            acronyms,
            verbatim_token: Regex::new(VERBATIM_TOKEN_PATTERN)?,
            trailing_punctuation: Regex::new(TRAILING_PUNCTUATION_PATTERN)?,
            impact_verb: Regex::new(IMPACT_VERB_PATTERN)?,
        })
    }

    pub fn acronyms(&self) -> &AcronymIndex {
        &self.acronyms
    }

    /// Always returns text: the sentence, or one of the two fixed rejection
    /// messages.
    pub fn generate_impact_statement(&self, answers: &ImpactAnswers) -> String {
        match self.try_generate(answers) {
            Ok(sentence) => sentence,
            Err(e) => {
                tracing::warn!("Impact statement rejected: {:?}", e);
                e.to_string()
            }
        }
    }

    pub fn try_generate(&self, answers: &ImpactAnswers) -> Result<String> {
        validate_max_length("action", &answers.action, MAX_ACTION_LENGTH)?;
        validate_max_length(
            "businessImpact",
            &answers.business_impact,
            MAX_BUSINESS_IMPACT_LENGTH,
        )?;
        validate_max_length(
            "specificImpact",
            &answers.specific_impact,
            MAX_SPECIFIC_IMPACT_LENGTH,
        )?;
        validate_max_length(
            "goalAlignmentAndFinancials",
            answers.goal_alignment_and_financials(),
            MAX_GOAL_ALIGNMENT_LENGTH,
        )?;

        let action = self.to_sentence_case_preserving_acronyms(&normalize_whitespace(&answers.action));
        let business_impact = normalize_whitespace(&answers.business_impact);
        let specific_impact = normalize_whitespace(&answers.specific_impact);
        let goal_alignment = normalize_whitespace(answers.goal_alignment_and_financials());

        validate_required_text("action", &action)?;
        validate_required_text("businessImpact", &business_impact)?;
        validate_required_text("specificImpact", &specific_impact)?;

        let clauses = [
            upper_first(&action),
            format!("which {}", self.lowercase_preserving_acronyms(&business_impact)),
            self.specific_impact_clause(&specific_impact),
        ];

        let mut sentence = clauses.join(", ").trim().to_string();
        if sentence.ends_with(',') {
            sentence.pop();
        }

        sentence.push_str(". ");
        if goal_alignment.is_empty() {
            sentence.push_str(NO_ALIGNMENT_CLAUSE);
        } else {
            sentence.push_str("This aligned with ");
            sentence.push_str(&goal_alignment);
            sentence.push('.');
        }

        // Squash exactly one trailing double period; earlier ones stay.
        if sentence.ends_with("..") {
            sentence.pop();
        }

        tracing::debug!("Generated impact statement: {}", sentence);
        Ok(sentence)
    }

    /// Sentence case for the first word, lowercase for the rest. Known
    /// acronyms keep their canonical spelling and quoted or backticked tokens
    /// are left exactly as typed.
    pub fn to_sentence_case_preserving_acronyms(&self, text: &str) -> String {
        text.split_whitespace()
            .enumerate()
            .map(|(index, token)| {
                if self.verbatim_token.is_match(token) {
                    return token.to_string();
                }
                self.case_token(token, |word| {
                    if index == 0 {
                        capitalize(word)
                    } else {
                        word.to_lowercase()
                    }
                })
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn lowercase_preserving_acronyms(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|token| self.case_token(token, str::to_lowercase))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Verb-led impacts are used as typed; anything else reads as a result.
    pub fn specific_impact_clause(&self, specific_impact: &str) -> String {
        if self.impact_verb.is_match(specific_impact) {
            specific_impact.to_string()
        } else {
            format!("resulting in {}", lower_first(specific_impact))
        }
    }

    fn case_token<F>(&self, token: &str, case_word: F) -> String
    where
        F: Fn(&str) -> String,
    {
        let Some(captures) = self.trailing_punctuation.captures(token) else {
            return token.to_string();
        };
        let word = captures.get(1).map_or("", |m| m.as_str());
        let punctuation = captures.get(2).map_or("", |m| m.as_str());

        match self.acronyms.canonical(word) {
            Some(canonical) => format!("{}{}", canonical, punctuation),
            None => format!("{}{}", case_word(word), punctuation),
        }
    }
}
