use clap::Parser;
use goemit::{execute, CliArgs};
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

const MAYBE_DUMP: &str = r#"{
    "name": "maybe",
    "source_name": "Data.Maybe",
    "decls": [{"Const": {"decl": {"name": "Answer", "ty": {"Alias": "int"}}, "value": {"LitInt": 42}}}]
}"#;

const MAIN_DUMP: &str = r#"{
    "name": "main",
    "source_name": "Main",
    "decls": [{"Var": {"decl": {"name": "greeting", "ty": {"Alias": "string"}}, "value": {"LitStr": "hi"}}}]
}"#;

const UNLOWERED_DUMP: &str = r#"{
    "name": "broken",
    "source_name": "Broken",
    "decls": [{"Var": {"decl": {"name": "isPerson", "ty": {"Alias": "bool"}},
                       "value": {"IsType": {"value": "v", "type_name": "Person"}}}}]
}"#;

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// A project `app` with `Main` and `Broken`, and one dependency
/// `purescript-maybe` with `Data.Maybe`.
fn project() -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(&root.join("bower.json"), r#"{"name": "app"}"#);
    write(&root.join("src/Main.purs"), "module Main where");
    write(&root.join("src/Broken.purs"), "module Broken where");
    write(
        &root.join("bower_components/purescript-maybe/.bower.json"),
        r#"{"name": "purescript-maybe"}"#,
    );
    write(
        &root.join("bower_components/purescript-maybe/src/Data/Maybe.purs"),
        "module Data.Maybe where",
    );
    write(&root.join("output/Main/goemit-ir.json"), MAIN_DUMP);
    write(&root.join("output/Data.Maybe/goemit-ir.json"), MAYBE_DUMP);
    dir
}

fn args(root: &Path, extra: &[&str]) -> CliArgs {
    let path = |p: &str| root.join(p).to_string_lossy().into_owned();
    let mut argv = vec![
        "goemit".to_string(),
        "--src-path".to_string(),
        path("src"),
        "--dependency-path".to_string(),
        path("bower_components"),
        "--bower-file".to_string(),
        path("bower.json"),
        "--coreimp-dumps-path".to_string(),
        path("output"),
        "--build-path".to_string(),
        path("build"),
        "--go-namespace".to_string(),
        "example.org/gen".to_string(),
        "--no-prefix".to_string(),
    ];
    argv.extend(extra.iter().map(|s| s.to_string()));
    CliArgs::parse_from(argv)
}

#[tokio::test]
async fn test_generates_root_and_dependencies() {
    let dir = project();
    let root = dir.path();
    let report = execute(&args(root, &[])).await.unwrap();

    assert!(report.is_success());
    assert_eq!(report.packages, 2);
    assert_eq!(report.written.len(), 2);
    assert_eq!(report.without_dump, 1);

    let main = root.join("build/example.org/gen/app/Main/Main.go");
    assert_eq!(
        fs::read_to_string(main).unwrap(),
        "package main\n\nvar greeting string = \"hi\"\n"
    );
    let maybe = root.join("build/example.org/gen/purescript-maybe/Data/Maybe/Maybe.go");
    assert_eq!(
        fs::read_to_string(maybe).unwrap(),
        "package maybe\n\nconst Answer int = 42\n"
    );
}

#[tokio::test]
async fn test_second_run_skips_up_to_date_units() {
    let dir = project();
    let root = dir.path();
    execute(&args(root, &[])).await.unwrap();

    let report = execute(&args(root, &[])).await.unwrap();
    assert!(report.written.is_empty());
    assert_eq!(report.up_to_date, 2);

    let report = execute(&args(root, &["--force"])).await.unwrap();
    assert_eq!(report.written.len(), 2);
}

#[tokio::test]
async fn test_placeholders_fail_unit_unless_allowed() {
    let dir = project();
    let root = dir.path();
    write(&root.join("output/Broken/goemit-ir.json"), UNLOWERED_DUMP);
    let broken = root.join("build/example.org/gen/app/Broken/Broken.go");

    let report = execute(&args(root, &[])).await.unwrap();
    assert!(!report.is_success());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].package, "app");
    assert_eq!(report.failures[0].module, "Broken");
    assert!(format!("{:#}", report.failures[0].error).contains("placeholder"));
    // the other units of the run are still written
    assert_eq!(report.written.len(), 2);
    assert!(!broken.exists());

    let report = execute(&args(root, &["--allow-placeholders"])).await.unwrap();
    assert!(report.is_success());
    assert!(fs::read_to_string(broken).unwrap().contains("ːvᐧPerson"));
}

#[tokio::test]
async fn test_fail_fast_accounts_for_every_package() {
    let dir = project();
    let root = dir.path();
    write(&root.join("output/Broken/goemit-ir.json"), UNLOWERED_DUMP);

    let report = execute(&args(root, &["--fail-fast"])).await.unwrap();
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].module, "Broken");
    // `Main` sorts after `Broken` and is never reached
    assert!(report.cancelled >= 1);
    assert!(!root.join("build/example.org/gen/app/Main/Main.go").exists());
    assert_eq!(report.packages, 2);
    assert!(report.aborted.iter().all(|name| name == "purescript-maybe"));
}

#[tokio::test]
async fn test_missing_directories_are_fatal() {
    let dir = project();
    let root = dir.path();
    fs::remove_dir_all(root.join("bower_components")).unwrap();
    let err = execute(&args(root, &[])).await.unwrap_err();
    assert!(err.to_string().contains("No such `dependency-path` directory"));

    fs::create_dir_all(root.join("bower_components")).unwrap();
    fs::remove_dir_all(root.join("src")).unwrap();
    let err = execute(&args(root, &[])).await.unwrap_err();
    assert!(err.to_string().contains("No such `src-path` directory"));
}

#[tokio::test]
async fn test_unparsable_dependency_manifest_aborts_run() {
    let dir = project();
    let root = dir.path();
    write(&root.join("bower_components/purescript-eff/bower.json"), "{oops");
    let err = execute(&args(root, &[])).await.unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse"));
    assert!(!root.join("build/example.org/gen/app").exists());
}
