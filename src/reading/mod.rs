pub mod clean;
pub mod sort;
pub mod token;

pub use clean::{clean_token, clean_tokens, CleanedToken, Integer, TokenKind, TypedSequence};
pub use sort::type_stable_sort;
pub use token::{tokenize_text, Token};
