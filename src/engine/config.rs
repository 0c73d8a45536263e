// Configuration for the typesort pipeline
// Defaults reproduce the plain "space separated, single line" output format

/// Output formatting configuration
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    /// String placed between consecutive values (default a single space)
    pub separator: String,

    /// Terminate the output line with `\n` (default false, so empty input
    /// produces a zero-byte file)
    pub trailing_newline: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            trailing_newline: false,
        }
    }
}

/// Master configuration combining all typesort settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub output: OutputConfig,
}

impl Config {
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.output.separator = separator.into();
        self
    }

    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.output.trailing_newline = trailing_newline;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_config() {
        let config = Config::default();
        assert_eq!(config.output.separator, " ");
        assert!(!config.output.trailing_newline);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::default()
            .with_separator(",")
            .with_trailing_newline(true);
        assert_eq!(config.output.separator, ",");
        assert!(config.output.trailing_newline);
    }
}
