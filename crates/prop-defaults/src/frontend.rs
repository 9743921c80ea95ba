//! Language frontend trait
//!
//! This module defines the `LanguageFrontend` trait that separates parsing
//! from the defaults extractor. A frontend turns source text into a
//! [`SyntaxNode`] tree; the extractor and literal evaluator never see the
//! concrete parser.
//!
//! # Architecture
//!
//! ```text
//! Source Text → [Frontend] → SyntaxNode → [Extractor + Evaluator] → DefaultsMap
//! ```
//!
//! Frontends are responsible for:
//! - Parsing source text and reporting syntax errors
//! - Lowering the parser's tree into `SyntaxNode`s
//! - Decoding token text (string escapes, template contents)
//!
//! The core is responsible for:
//! - Selecting exported class declarations
//! - Evaluating field initializers into `LiteralValue`s

use std::fmt;

use crate::syntax::SyntaxNode;

// ═══════════════════════════════════════════════════════════════════════
// ERROR TYPES
// ═══════════════════════════════════════════════════════════════════════

/// Syntax error reported by a frontend.
///
/// Displays as one summary line, followed by the offending source line and a
/// caret under the error column when both are known:
///
/// ```text
/// Parse error: unexpected `;` at Widget.ts:3:7
///   |   b = ;
///   |       ^
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// What the parser choked on
    pub message: String,

    /// Where the first error starts
    pub location: Option<SourceLocation>,

    /// The source line containing `location`
    pub snippet: Option<String>,
}

impl ParseError {
    /// Create a parse error without position information.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            snippet: None,
        }
    }

    /// Attach the error position.
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Attach the source line the error is on.
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error: {}", self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " at {}", loc)?;
        }
        if let Some(snippet) = &self.snippet {
            write!(f, "\n  | {}", snippet)?;
            if let Some(loc) = &self.location {
                write!(f, "\n  | {}^", caret_padding(snippet, loc.column))?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Whitespace reaching `column` (1-based, in characters) of `line`. Tabs are
/// kept so the caret lines up however the terminal renders them.
fn caret_padding(line: &str, column: usize) -> String {
    line.chars()
        .take(column.saturating_sub(1))
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect()
}

/// Position in a source file, 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// File name as given to the frontend
    pub file: String,

    /// Line number
    pub line: usize,

    /// Character column within the line
    pub column: usize,
}

impl SourceLocation {
    /// Create a source location.
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// LANGUAGE FRONTEND TRAIT
// ═══════════════════════════════════════════════════════════════════════

/// Parsing capability injected into the extractor.
///
/// # Example Implementation
///
/// A frontend that ignores its input, as used to test the extractor without
/// a real parser:
///
/// ```
/// use prop_defaults::frontend::{LanguageFrontend, ParseError};
/// use prop_defaults::syntax::{NodeKind, SyntaxNode};
///
/// struct EmptyFrontend;
///
/// impl LanguageFrontend for EmptyFrontend {
///     fn parse(&self, _source: &str, _file_name: &str) -> Result<SyntaxNode, ParseError> {
///         Ok(SyntaxNode::new(NodeKind::SourceFile))
///     }
///
///     fn name(&self) -> &str {
///         "Empty"
///     }
///
///     fn file_extension(&self) -> &str {
///         "txt"
///     }
/// }
///
/// let defaults = prop_defaults::extract_defaults(&EmptyFrontend, "", "a.txt").unwrap();
/// assert!(defaults.is_empty());
/// ```
pub trait LanguageFrontend: Send + Sync {
    /// Parse source text into a tree rooted at a `SourceFile` node.
    ///
    /// `file_name` identifies the text in diagnostics. It is never read.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the source cannot be parsed.
    fn parse(&self, source: &str, file_name: &str) -> Result<SyntaxNode, ParseError>;

    /// Return the name of this language frontend.
    ///
    /// Examples: "TypeScript"
    fn name(&self) -> &str;

    /// Return the canonical source file extension for this language.
    ///
    /// Examples: "ts"
    fn file_extension(&self) -> &str;
}
