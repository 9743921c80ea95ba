//! # prop-defaults
//!
//! Static extraction of class-field default values from TypeScript sources.
//!
//! Given a source file (or a build artifact derived from one), this crate
//! finds every exported, named class and reports the value each field is
//! initialized with, as long as the initializer is a literal. Nothing is
//! executed: initializers that are not literals come back as
//! [`LiteralValue::Undefined`].
//!
//! ## Architecture
//!
//! - **Source Locator**: map an artifact path back to its source file
//! - **Language Frontend**: parse source text into a [`syntax::SyntaxNode`] tree
//! - **Default Extractor**: select exported classes and their fields
//! - **Literal Evaluator**: turn initializer expressions into [`LiteralValue`]s
//!
//! ## Example
//!
//! ```
//! use prop_defaults::{extract_defaults, LiteralValue, TypeScriptFrontend};
//!
//! let source = "export class Button { label = 'OK'; size = 3; onClick = () => {} }";
//! let defaults = extract_defaults(&TypeScriptFrontend::new(), source, "Button.ts").unwrap();
//!
//! assert_eq!(defaults["label"], LiteralValue::string("OK"));
//! assert_eq!(defaults["size"], LiteralValue::Number(3.0));
//! assert_eq!(defaults["onClick"], LiteralValue::Undefined);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod eval;
pub mod extract;
pub mod frontend;
pub mod frontends;
pub mod locate;
pub mod syntax;
pub mod value;

use std::path::Path;

// Re-export main types
pub use config::ExtractConfig;
pub use error::{DefaultsError, Result};
pub use eval::{evaluate, Evaluate};
pub use extract::{collect_defaults, extract_defaults};
pub use frontend::{LanguageFrontend, ParseError, SourceLocation};
pub use frontends::TypeScriptFrontend;
pub use locate::{candidate_paths, locate_source, SourceFile};
pub use value::{DefaultsMap, LiteralValue, UNDEFINED_MARKER};

/// prop-defaults version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Locates sources and extracts their field defaults with one frontend and
/// one configuration.
#[derive(Debug, Clone)]
pub struct DefaultsExtractor<F = TypeScriptFrontend> {
    frontend: F,
    config: ExtractConfig,
}

impl DefaultsExtractor<TypeScriptFrontend> {
    /// TypeScript extractor with default configuration.
    pub fn new() -> Self {
        Self::with_config(ExtractConfig::default())
    }

    /// TypeScript extractor honoring `config`.
    pub fn with_config(config: ExtractConfig) -> Self {
        let frontend = TypeScriptFrontend::new().with_strict_syntax(config.strict_syntax);
        Self { frontend, config }
    }
}

impl Default for DefaultsExtractor<TypeScriptFrontend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: LanguageFrontend> DefaultsExtractor<F> {
    /// Extractor using a custom frontend.
    ///
    /// `strict_syntax` is left to the frontend itself.
    pub fn with_frontend(frontend: F, config: ExtractConfig) -> Self {
        Self { frontend, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// The frontend used for parsing.
    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Find and read the source of `artifact`.
    ///
    /// # Errors
    ///
    /// Returns `DefaultsError::NotFound` when no candidate source is readable.
    pub fn locate(&self, artifact: &Path) -> Result<SourceFile> {
        let extension = self
            .config
            .source_extension
            .as_deref()
            .unwrap_or_else(|| self.frontend.file_extension());
        locate_source(artifact, extension, &self.config.source_dir)
    }

    /// Extract the field defaults from source text.
    ///
    /// # Errors
    ///
    /// Returns `DefaultsError::Parse` if the source does not parse.
    pub fn extract(&self, source: &str, file_name: &str) -> Result<DefaultsMap> {
        extract_defaults(&self.frontend, source, file_name)
    }

    /// Locate the source of `artifact` and extract its field defaults.
    ///
    /// # Errors
    ///
    /// Returns `DefaultsError::NotFound` or `DefaultsError::Parse`.
    pub fn from_artifact(&self, artifact: &Path) -> Result<DefaultsMap> {
        let source = self.locate(artifact)?;
        self.extract(&source.text, &source.path.to_string_lossy())
    }
}

/// Field defaults of the exported classes in the source of `artifact`, using
/// the default configuration.
///
/// # Errors
///
/// Returns `DefaultsError::NotFound` when the source cannot be read and
/// `DefaultsError::Parse` when it does not parse.
pub fn property_defaults_from_file(artifact: impl AsRef<Path>) -> Result<DefaultsMap> {
    DefaultsExtractor::new().from_artifact(artifact.as_ref())
}
