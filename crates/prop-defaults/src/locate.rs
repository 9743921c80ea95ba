//! Source locator
//!
//! Maps a derived artifact (a compiled `.js`, a `.d.ts`, ...) back to the
//! source it was built from. Two layouts are covered: sources next to their
//! artifacts, and a build directory that mirrors a sibling source directory.
//!
//! ```text
//! /out/lib/Widget.js  →  /out/lib/Widget.ts   (same directory)
//!                     →  /out/src/Widget.ts   (sibling source directory)
//! ```

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{DefaultsError, Result};

/// Source text together with the path it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path the text was read from
    pub path: PathBuf,

    /// File contents
    pub text: String,
}

/// Candidate source paths for `artifact`, in the order they are tried.
///
/// 1. The artifact path with its extension replaced by `extension`.
/// 2. `<artifact dir>/../<source_dir>/<artifact stem>.<extension>`.
pub fn candidate_paths(artifact: &Path, extension: &str, source_dir: &str) -> [PathBuf; 2] {
    let beside = artifact.with_extension(extension);

    let dir = artifact.parent().unwrap_or_else(|| Path::new(""));
    let mut file_name = OsString::from(artifact.file_stem().unwrap_or_default());
    file_name.push(".");
    file_name.push(extension);
    let mirrored = parent_dir(dir).join(source_dir).join(file_name);

    [beside, mirrored]
}

/// Lexical parent of `dir`, falling back to an explicit `..`.
fn parent_dir(dir: &Path) -> PathBuf {
    match (dir.components().next_back(), dir.parent()) {
        (Some(Component::Normal(_)), Some(parent)) => parent.to_path_buf(),
        _ => dir.join(".."),
    }
}

/// Find and read the source of `artifact`.
///
/// # Errors
///
/// Returns `DefaultsError::NotFound` when neither candidate can be read.
pub fn locate_source(artifact: &Path, extension: &str, source_dir: &str) -> Result<SourceFile> {
    let candidates = candidate_paths(artifact, extension, source_dir);

    let mut last_error = None;
    for candidate in &candidates {
        match std::fs::read_to_string(candidate) {
            Ok(text) => {
                debug!(artifact = %artifact.display(), source = %candidate.display(), "located source");
                return Ok(SourceFile {
                    path: candidate.clone(),
                    text,
                });
            }
            Err(e) => {
                debug!(candidate = %candidate.display(), error = %e, "source candidate unreadable");
                last_error = Some(e);
            }
        }
    }

    Err(DefaultsError::NotFound {
        artifact: artifact.to_path_buf(),
        candidates: candidates.to_vec(),
        source: last_error.unwrap_or_else(|| std::io::ErrorKind::NotFound.into()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_for_built_file() {
        let [beside, mirrored] = candidate_paths(Path::new("/out/lib/Widget.js"), "ts", "src");
        assert_eq!(beside, PathBuf::from("/out/lib/Widget.ts"));
        assert_eq!(mirrored, PathBuf::from("/out/src/Widget.ts"));
    }

    #[test]
    fn test_candidates_for_declaration_file() {
        let [beside, mirrored] = candidate_paths(Path::new("/out/lib/Widget.d.ts"), "ts", "src");
        assert_eq!(beside, PathBuf::from("/out/lib/Widget.d.ts"));
        assert_eq!(mirrored, PathBuf::from("/out/src/Widget.d.ts"));
    }

    #[test]
    fn test_candidates_for_bare_file_name() {
        let [beside, mirrored] = candidate_paths(Path::new("Widget.js"), "ts", "src");
        assert_eq!(beside, PathBuf::from("Widget.ts"));
        assert_eq!(mirrored, PathBuf::from("../src/Widget.ts"));
    }

    #[test]
    fn test_candidates_with_custom_layout() {
        let [beside, mirrored] = candidate_paths(Path::new("build/esm/model.mjs"), "mts", "source");
        assert_eq!(beside, PathBuf::from("build/esm/model.mts"));
        assert_eq!(mirrored, PathBuf::from("build/source/model.mts"));
    }

    #[test]
    fn test_parent_dir_of_dot_dot() {
        assert_eq!(parent_dir(Path::new("a/..")), PathBuf::from("a/../.."));
        assert_eq!(parent_dir(Path::new("/")), PathBuf::from("/.."));
    }
}
