//! Integration test: run the subcommand handlers against a throwaway site
//! and check their output and exit codes.

use std::path::Path;

use docs_cli::nav::{run_nav, NavArgs, PlacementArg};
use docs_cli::validate::{run_validate, ValidateArgs};
use docs_schema::SiteConfig;

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

fn clean_site() -> (tempfile::TempDir, SiteConfig) {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "docs.yaml", "content_dir: content\n");
    let content = dir.path().join("content");
    write(
        &content,
        "index.md",
        "---\ntitle: Welcome\ndescription: Start here.\ngroup: Overview\n---\n",
    );
    write(
        &content,
        "advanced/macros.md",
        "---\ntitle: Macros\ndescription: Derive helpers.\ngroup: Advanced\npriority: 1\n---\n",
    );
    write(
        &content,
        "faq.md",
        "---\ntitle: FAQ\ndescription: Questions.\n---\n",
    );
    let config = docs_cli::load_config(None, dir.path()).unwrap();
    (dir, config)
}

fn run_to_string<F>(f: F) -> (u8, String)
where
    F: FnOnce(&mut Vec<u8>) -> anyhow::Result<u8>,
{
    let mut out = Vec::new();
    let code = f(&mut out).unwrap();
    (code, String::from_utf8(out).unwrap())
}

#[test]
fn test_validate_clean_collection() {
    let (_dir, config) = clean_site();
    let (code, text) = run_to_string(|out| run_validate(&ValidateArgs { path: None }, &config, out));
    assert_eq!(code, 0);
    assert!(text.starts_with("Entries: 3/3 passed\n"));
}

#[test]
fn test_validate_reports_every_violation() {
    let (dir, config) = clean_site();
    write(
        &dir.path().join("content"),
        "bad.md",
        "---\ndescription: ''\ngroup: Random\npriority: high\n---\n",
    );
    let (code, text) = run_to_string(|out| run_validate(&ValidateArgs { path: None }, &config, out));
    assert_eq!(code, 1);
    assert!(text.starts_with("Entries: 3/4 passed\n"));
    assert!(text.contains("FAIL: bad.md"));
    assert!(text.contains("title: required field is missing"));
    assert!(text.contains("description: must not be empty"));
    assert!(text.contains("group: \"Random\" is not one of"));
    assert!(text.contains("priority: expected number, found string"));
}

#[test]
fn test_validate_single_file() {
    let (dir, config) = clean_site();
    let path = dir.path().join("content/advanced/macros.md");
    let (code, text) = run_to_string(|out| {
        run_validate(&ValidateArgs { path: Some(path.clone()) }, &config, out)
    });
    assert_eq!(code, 0);
    assert_eq!(text, "OK: advanced/macros.md (Advanced)\n");
}

#[test]
fn test_validate_single_file_keeps_subdirectory_in_id() {
    let (dir, mut config) = clean_site();
    // Same content root, spelled differently from the file path.
    config.content_dir = dir.path().join("content").join("advanced").join("..");
    let path = dir.path().join("content/advanced/macros.md");
    let (code, text) = run_to_string(|out| {
        run_validate(&ValidateArgs { path: Some(path.clone()) }, &config, out)
    });
    assert_eq!(code, 0);
    assert_eq!(text, "OK: advanced/macros.md (Advanced)\n");
}

#[test]
fn test_validate_missing_directory_is_operational_error() {
    let (dir, config) = clean_site();
    let args = ValidateArgs {
        path: Some(dir.path().join("nowhere")),
    };
    let mut out = Vec::new();
    assert!(run_validate(&args, &config, &mut out).is_err());
}

#[test]
fn test_nav_outline_ungrouped_last() {
    let (_dir, config) = clean_site();
    let args = NavArgs {
        json: false,
        ungrouped: None,
    };
    let (code, text) = run_to_string(|out| run_nav(&args, &config, out));
    assert_eq!(code, 0);
    assert_eq!(
        text,
        "Overview\n  Welcome  /\nAdvanced\n  Macros  /advanced/macros\n(ungrouped)\n  FAQ  /faq\n"
    );
}

#[test]
fn test_nav_json_ungrouped_first() {
    let (_dir, config) = clean_site();
    let args = NavArgs {
        json: true,
        ungrouped: Some(PlacementArg::First),
    };
    let (code, text) = run_to_string(|out| run_nav(&args, &config, out));
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["collection"], "docs");
    assert!(json["sections"][0]["group"].is_null());
    assert_eq!(json["sections"][1]["group"], "Overview");
    assert_eq!(json["sections"][2]["entries"][0]["data"]["priority"], 1.0);
}

#[test]
fn test_nav_refuses_invalid_collection() {
    let (dir, config) = clean_site();
    write(&dir.path().join("content"), "oops.md", "no front matter\n");
    let args = NavArgs {
        json: false,
        ungrouped: None,
    };
    let (code, text) = run_to_string(|out| run_nav(&args, &config, out));
    assert_eq!(code, 1);
    assert!(text.starts_with("Navigation not generated: 1 of 4 entries failed validation."));
    assert!(text.contains("FAIL: oops.md"));
}
