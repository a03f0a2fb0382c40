pub mod acronyms;
pub mod formatter;
pub mod text;

pub use crate::domain::model::{AcronymEntry, ExportChoice, ExportOutcome, ImpactAnswers, ImpactRecord};
pub use crate::domain::ports::{Clipboard, Storage};
pub use crate::utils::error::Result;
