//! Error taxonomy for expansion and interpretation.

/// Every failure the crate can report.
///
/// Symbols without a rule (during expansion) or without a turtle meaning
/// (during interpretation) are never errors.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("unbalanced brackets: pop at symbol {position} with an empty stack")]
    StackUnderflow { position: usize },

    #[error("branch stack overflow at symbol {position} (max depth {max})")]
    StackOverflow { position: usize, max: usize },

    #[error("expansion too large: generation {generation} would hold {length} symbols (max {max})")]
    ExpansionTooLarge {
        generation: u32,
        length: usize,
        max: usize,
    },

    #[error("too many generations: requested {requested} (max {max})")]
    TooManyGenerations { requested: u32, max: u32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
