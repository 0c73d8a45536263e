// Type-stable sorter - sorts words and integers separately, keeping the kind pattern

use super::clean::{CleanedToken, Integer, TokenKind, TypedSequence};

/// Sorts words alphabetically and integers numerically while keeping every
/// position's kind fixed.
///
/// The words and the integers are pulled out into their own vectors, each one
/// stable-sorted, then dealt back into the positions that originally held that
/// kind. Word order is byte order, so `Zed` sorts before `apple`.
pub fn type_stable_sort(sequence: &TypedSequence) -> TypedSequence {
    let mut words: Vec<&str> = Vec::new();
    let mut integers: Vec<&Integer> = Vec::new();

    for item in sequence {
        match item {
            CleanedToken::Word(text) => words.push(text),
            CleanedToken::Integer(value) => integers.push(value),
        }
    }

    words.sort();
    integers.sort();

    let mut words = words.into_iter();
    let mut integers = integers.into_iter();

    // Each kind's iterator holds exactly as many items as positions of that kind.
    sequence
        .iter()
        .filter_map(|item| match item.kind() {
            TokenKind::Word => words.next().map(CleanedToken::word),
            TokenKind::Integer => integers.next().cloned().map(CleanedToken::Integer),
        })
        .collect()
}
