use std::fs;
use std::path::Path;

use tracing::debug;

use crate::engine::SortError;
use crate::reading::{tokenize_text, Token};

/// Reads the whole input file and splits it into raw tokens.
///
/// A missing or unreadable file surfaces as `SortError::ReadInput`. A file that
/// is empty or holds only whitespace is not an error; it yields no tokens.
/// Invalid UTF-8 decodes to U+FFFD, which cleaning strips like any other
/// non-alphanumeric character.
pub fn load_tokens(path: impl AsRef<Path>) -> Result<Vec<Token>, SortError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| SortError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    let tokens = tokenize_text(&content);
    debug!(path = %path.display(), bytes = content.len(), tokens = tokens.len(), "loaded input");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::{clean_tokens, CleanedToken};
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_file() {
        let dir = tempdir().unwrap();
        let result = load_tokens(dir.path().join("nonexistent_file_12345.txt"));
        assert!(matches!(result, Err(SortError::ReadInput { .. })));
    }

    #[test]
    fn test_load_empty_file_is_graceful() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test_file_empty.txt");
        File::create(&path).unwrap();

        let tokens = load_tokens(&path).expect("empty file should load");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_load_converts_to_tokens() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test_file.txt");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"apple\nc@at\norange\n2\nban!ana\n").unwrap();

        let tokens = load_tokens(&path).unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["apple", "c@at", "orange", "2", "ban!ana"]);
    }

    #[test]
    fn test_load_invalid_utf8_is_not_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, b"caf\xe9 3").unwrap();

        let tokens = load_tokens(&path).expect("invalid UTF-8 should still load");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["caf\u{FFFD}", "3"]);

        let cleaned = clean_tokens(&tokens);
        assert_eq!(
            cleaned.into_inner(),
            vec![CleanedToken::word("caf"), CleanedToken::integer(3)]
        );
    }

    #[test]
    fn test_load_directory_is_read_error() {
        let dir = tempdir().unwrap();
        let result = load_tokens(dir.path());
        assert!(matches!(result, Err(SortError::ReadInput { .. })));
    }
}
