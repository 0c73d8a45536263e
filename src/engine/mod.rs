pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{Config, OutputConfig};
pub use error::SortError;
pub use pipeline::{clean_and_sort, sort_text, SortOutcome};

// Re-export reading module items so callers only need `engine`
pub use crate::reading::{
    clean_token, clean_tokens, tokenize_text, type_stable_sort, CleanedToken, Token, TokenKind,
    TypedSequence,
};
