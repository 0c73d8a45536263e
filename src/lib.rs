//! Type-stable sorting of mixed word/integer token files.
//!
//! Tokens are cleaned down to ASCII letters and digits, classified as words or
//! integers, and sorted within their own kind while every position keeps the
//! kind it started with.
//!
//! ## Module Structure
//!
//! - **reading**: tokenizer, cleaner/classifier and the type-stable sorter
//! - **engine**: configuration, errors and the file-to-file pipeline
//! - **input** / **output**: reading the token file and writing the result line
//! - **cli**: argument parsing for the `typesort` binary

pub mod cli;
pub mod engine;
pub mod input;
pub mod output;
pub mod reading;

pub use engine::{clean_and_sort, sort_text, Config, SortError, SortOutcome};
