pub mod export;
pub mod prompt;
pub mod session;
