// Tokenizer - splits raw input into whitespace-delimited tokens

/// One raw input unit, before any cleaning.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub text: String,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Token::new(text)
    }
}

/// Tokenizes text on any whitespace, newlines included.
/// Position in the returned vector is the token's position in the final output.
pub fn tokenize_text(text: &str) -> Vec<Token> {
    text.split_whitespace().map(Token::from).collect()
}
