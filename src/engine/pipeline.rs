// Pipeline - load, clean, sort, write

use std::path::Path;

use tracing::{debug, info};

use super::config::Config;
use super::error::SortError;
use crate::input::load_tokens;
use crate::output::write_output;
use crate::reading::{
    clean_tokens, tokenize_text, type_stable_sort, Token, TokenKind, TypedSequence,
};

/// What a run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOutcome {
    /// Input held no tokens. Cleaning and sorting were skipped and an empty
    /// output was written.
    Empty,

    /// Tokens were cleaned, sorted and written.
    Sorted {
        tokens: usize,
        words: usize,
        integers: usize,
    },
}

/// Cleans and sorts the tokens of `input`, writing the result to `output`.
///
/// Both files are opened and released within this call.
pub fn clean_and_sort(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &Config,
) -> Result<SortOutcome, SortError> {
    run_with(input.as_ref(), output.as_ref(), config, clean_then_sort)
}

/// In-memory variant of the pipeline: tokenize, clean and sort `text`.
pub fn sort_text(text: &str) -> TypedSequence {
    let tokens = tokenize_text(text);
    if tokens.is_empty() {
        return TypedSequence::default();
    }
    clean_then_sort(&tokens)
}

fn clean_then_sort(tokens: &[Token]) -> TypedSequence {
    let cleaned = clean_tokens(tokens);
    debug!(
        words = cleaned.count_of(TokenKind::Word),
        integers = cleaned.count_of(TokenKind::Integer),
        "classified tokens"
    );
    type_stable_sort(&cleaned)
}

/// Load, run `stages` on a non-empty token list, write. `stages` is never
/// called for empty input.
fn run_with<F>(
    input: &Path,
    output: &Path,
    config: &Config,
    stages: F,
) -> Result<SortOutcome, SortError>
where
    F: FnOnce(&[Token]) -> TypedSequence,
{
    let tokens = load_tokens(input)?;
    if tokens.is_empty() {
        info!(input = %input.display(), "input has no tokens, skipping sort");
        write_output(output, &TypedSequence::default(), &config.output)?;
        return Ok(SortOutcome::Empty);
    }

    let sorted = stages(&tokens);
    write_output(output, &sorted, &config.output)?;

    let outcome = SortOutcome::Sorted {
        tokens: sorted.len(),
        words: sorted.count_of(TokenKind::Word),
        integers: sorted.count_of(TokenKind::Integer),
    };
    info!(?outcome, output = %output.display(), "sorted input");
    Ok(outcome)
}
