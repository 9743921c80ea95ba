//! Extraction configuration

/// Source directory name tried by the locator unless configured otherwise.
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Configuration for locating and parsing sources.
///
/// This is passed to the locator and the extractor and controls where
/// sources are looked for and how strictly they are parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Extension (without the dot) given to candidate source paths.
    /// `None` uses the frontend's own file extension.
    pub source_extension: Option<String>,

    /// Directory, sibling of the artifact's directory, holding the sources
    pub source_dir: String,

    /// Fail on any syntax error instead of extracting from the recovered tree
    pub strict_syntax: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            source_extension: None,
            source_dir: DEFAULT_SOURCE_DIR.to_string(),
            strict_syntax: false,
        }
    }
}

impl ExtractConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different source extension. A leading dot is ignored.
    pub fn with_source_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.source_extension = Some(extension.trim_start_matches('.').to_string());
        self
    }

    /// Use a different source directory name.
    pub fn with_source_dir(mut self, dir: impl Into<String>) -> Self {
        self.source_dir = dir.into();
        self
    }

    /// Reject sources with syntax errors.
    pub fn with_strict_syntax(mut self, strict: bool) -> Self {
        self.strict_syntax = strict;
        self
    }
}
