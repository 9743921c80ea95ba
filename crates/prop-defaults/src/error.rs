//! Error types for locating and extracting defaults

use std::path::PathBuf;

use thiserror::Error;

use crate::frontend::ParseError;

/// Main error type for prop-defaults operations.
///
/// Evaluation itself never fails: a non-literal initializer becomes
/// `LiteralValue::Undefined`. Only finding and parsing the source can go wrong.
#[derive(Error, Debug)]
pub enum DefaultsError {
    /// Neither source candidate could be read
    #[error("no source found for {}: tried {}", artifact.display(), display_paths(candidates))]
    NotFound {
        /// Artifact path supplied by the caller
        artifact: PathBuf,
        /// Candidate source paths, in the order they were tried
        candidates: Vec<PathBuf>,
        /// Error from the last read attempt
        #[source]
        source: std::io::Error,
    },

    /// The frontend rejected the source text
    #[error(transparent)]
    Parse(#[from] ParseError),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for prop-defaults operations
pub type Result<T> = std::result::Result<T, DefaultsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::SourceLocation;

    #[test]
    fn test_not_found_display_lists_candidates() {
        let err = DefaultsError::NotFound {
            artifact: PathBuf::from("/out/lib/Widget.js"),
            candidates: vec![
                PathBuf::from("/out/lib/Widget.ts"),
                PathBuf::from("/out/src/Widget.ts"),
            ],
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let display = err.to_string();
        assert!(display.contains("/out/lib/Widget.js"));
        assert!(display.contains("/out/lib/Widget.ts, /out/src/Widget.ts"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_parse_error_is_transparent() {
        let err: DefaultsError = ParseError::new("unexpected token")
            .with_location(SourceLocation::new("a.ts", 3, 7))
            .into();
        assert_eq!(err.to_string(), "Parse error: unexpected token at a.ts:3:7");
    }
}
