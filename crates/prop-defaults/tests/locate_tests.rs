use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use prop_defaults::*;
use tempfile::TempDir;

// Helper: create `rel` under `root` with `text`, making parent directories
fn write(root: &Path, rel: &str, text: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, text).unwrap();
    path
}

// ═══════════════════════════════════════════════════════════════════════
// locate_source
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_source_beside_artifact() {
    let dir = TempDir::new().unwrap();
    let source = write(dir.path(), "lib/Widget.ts", "beside");
    write(dir.path(), "src/Widget.ts", "mirrored");

    let found = locate_source(&dir.path().join("lib/Widget.js"), "ts", "src").unwrap();
    assert_eq!(found.path, source);
    assert_eq!(found.text, "beside");
}

#[test]
fn test_source_in_sibling_directory() {
    let dir = TempDir::new().unwrap();
    let source = write(dir.path(), "src/Widget.ts", "mirrored");

    let found = locate_source(&dir.path().join("lib/Widget.js"), "ts", "src").unwrap();
    assert_eq!(found.path, source);
    assert_eq!(found.text, "mirrored");
}

#[test]
fn test_declaration_artifact() {
    let dir = TempDir::new().unwrap();
    let source = write(dir.path(), "lib/Widget.d.ts", "declared");

    let found = locate_source(&dir.path().join("lib/Widget.d.ts"), "ts", "src").unwrap();
    assert_eq!(found.path, source);
}

#[test]
fn test_not_found_reports_both_candidates() {
    let dir = TempDir::new().unwrap();
    let artifact = dir.path().join("lib/Widget.js");

    match locate_source(&artifact, "ts", "src").unwrap_err() {
        DefaultsError::NotFound {
            artifact: reported,
            candidates,
            source,
        } => {
            assert_eq!(reported, artifact);
            assert_eq!(
                candidates,
                vec![dir.path().join("lib/Widget.ts"), dir.path().join("src/Widget.ts")]
            );
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected NotFound, got {other}"),
    }
}

#[test]
fn test_candidate_paths_match_lookup_order() {
    let dir = TempDir::new().unwrap();
    let artifact = dir.path().join("dist/esm/model.mjs");

    let [beside, mirrored] = candidate_paths(&artifact, "mts", "source");
    assert_eq!(beside, dir.path().join("dist/esm/model.mts"));
    assert_eq!(mirrored, dir.path().join("dist/source/model.mts"));
}

// ═══════════════════════════════════════════════════════════════════════
// DefaultsExtractor
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_extractor_uses_configured_layout() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "source/model.mts", "export class Model { id = 'm' }");

    let config = ExtractConfig::new()
        .with_source_dir("source")
        .with_source_extension("mts");
    let extractor = DefaultsExtractor::with_config(config);

    let defaults = extractor.from_artifact(&dir.path().join("build/model.mjs")).unwrap();
    assert_eq!(defaults["id"], LiteralValue::string("m"));
}

#[test]
fn test_extractor_defaults_to_frontend_extension() {
    let dir = TempDir::new().unwrap();
    let source = write(dir.path(), "src/Widget.ts", "export class Widget {}");

    let found = DefaultsExtractor::new().locate(&dir.path().join("lib/Widget.js")).unwrap();
    assert_eq!(found.path, source);
}

#[test]
fn test_extractor_reports_parse_errors_with_located_path() {
    let dir = TempDir::new().unwrap();
    let source = write(dir.path(), "src/Broken.ts", "export class Broken { a = ; }");

    let err = DefaultsExtractor::with_config(ExtractConfig::new().with_strict_syntax(true))
        .from_artifact(&dir.path().join("lib/Broken.js"))
        .unwrap_err();
    match err {
        DefaultsError::Parse(parse) => {
            assert_eq!(parse.location.unwrap().file, source.to_string_lossy());
        }
        other => panic!("expected Parse, got {other}"),
    }
}
