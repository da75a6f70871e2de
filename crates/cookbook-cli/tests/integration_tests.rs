//! Integration tests for the cookbook binary.
//!
//! Every test builds its own templates root and project directory under a
//! tempdir, and passes `--templates-dir` explicitly so nothing depends on
//! the environment. `--no-install` keeps the external package manager out
//! of the test runs.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cookbook() -> Command {
    let mut cmd = Command::cargo_bin("cookbook").unwrap();
    cmd.arg("--no-color");
    cmd
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A templates root with a few pipes, the hono module, a name present in
/// both categories, and a base project.
fn templates_fixture() -> TempDir {
    let root = TempDir::new().unwrap();
    let t = root.path();

    write(
        &t.join("registry.json"),
        r#"{
  "pipes": {
    "demo-pipe": { "description": "Demo ingestion pipe", "tags": ["demo"] },
    "with-deps": { "description": "Pipe declaring dependencies" }
  },
  "modules": {
    "hono": { "description": "Hono API server" }
  }
}
"#,
    );

    write(&t.join("pipes/demo-pipe/index.ts"), "export const demo = 1;\n");
    write(
        &t.join("pipes/with-deps/index.ts"),
        "export const withDeps = true;\n",
    );
    write(
        &t.join("pipes/with-deps/dependencies.json"),
        r#"{"dependencies": {"x": "^2.0.0"}}"#,
    );
    write(&t.join("modules/hono/index.ts"), "export default {};\n");

    // Same name in both categories, to pin the tie-break.
    write(&t.join("pipes/dual/pipe.ts"), "// pipe flavour\n");
    write(&t.join("modules/dual/module.ts"), "// module flavour\n");

    write(
        &t.join("base-project/package.json.template"),
        "{\n  \"name\": \"{{projectName}}\",\n  \"version\": \"0.1.0\",\n  \"dependencies\": {}\n}\n",
    );
    write(
        &t.join("base-project/src/index.ts"),
        "console.log(\"indexer up\");\n",
    );

    root
}

/// An empty project directory with a minimal package.json.
fn project_fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        &dir.path().join("package.json"),
        "{\n  \"name\": \"consumer\",\n  \"dependencies\": {\n    \"y\": \"^1.0.0\"\n  }\n}\n",
    );
    dir
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_the_commands() {
    cookbook()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn version_flag_matches_cargo() {
    cookbook()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── add ───────────────────────────────────────────────────────────────────────

#[test]
fn add_outside_a_project_is_a_user_error() {
    let templates = templates_fixture();
    let not_a_project = TempDir::new().unwrap();

    cookbook()
        .current_dir(not_a_project.path())
        .args(["add", "demo-pipe", "--templates-dir"])
        .arg(templates.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("package.json"));
}

#[test]
fn add_copies_a_pipe_into_src_pipes() {
    let templates = templates_fixture();
    let project = project_fixture();

    cookbook()
        .current_dir(project.path())
        .args(["add", "demo-pipe", "--templates-dir"])
        .arg(templates.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Added pipe \"demo-pipe\""));

    assert!(project.path().join("src/pipes/demo-pipe/index.ts").is_file());
}

#[test]
fn add_hono_installs_into_src_api() {
    let templates = templates_fixture();
    let project = project_fixture();

    cookbook()
        .current_dir(project.path())
        .args(["add", "hono", "--templates-dir"])
        .arg(templates.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Added module \"hono\""));

    assert!(project.path().join("src/api/index.ts").is_file());
    assert!(!project.path().join("src/modules/hono").exists());
}

#[test]
fn name_in_both_categories_resolves_to_the_pipe() {
    let templates = templates_fixture();
    let project = project_fixture();

    cookbook()
        .current_dir(project.path())
        .args(["add", "dual", "--templates-dir"])
        .arg(templates.path())
        .assert()
        .success();

    assert!(project.path().join("src/pipes/dual/pipe.ts").is_file());
    assert!(!project.path().join("src/modules/dual").exists());
}

#[test]
fn type_hint_narrows_to_the_module() {
    let templates = templates_fixture();
    let project = project_fixture();

    cookbook()
        .current_dir(project.path())
        .args(["add", "dual", "--type", "module", "--templates-dir"])
        .arg(templates.path())
        .assert()
        .success();

    assert!(project.path().join("src/modules/dual/module.ts").is_file());
}

#[test]
fn add_merges_declared_dependencies() {
    let templates = templates_fixture();
    let project = project_fixture();

    cookbook()
        .current_dir(project.path())
        .args(["add", "with-deps", "--no-install", "--templates-dir"])
        .arg(templates.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated package.json"));

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(project.path().join("package.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["dependencies"]["x"], "^2.0.0");
    assert_eq!(manifest["dependencies"]["y"], "^1.0.0");
}

#[test]
fn adding_the_same_template_twice_is_idempotent() {
    let templates = templates_fixture();
    let project = project_fixture();

    let run = |project: &TempDir| {
        cookbook()
            .current_dir(project.path())
            .args(["add", "with-deps", "--no-install", "--templates-dir"])
            .arg(templates.path())
            .assert()
            .success();
    };

    run(&project);
    let first = fs::read_to_string(project.path().join("package.json")).unwrap();
    run(&project);
    let second = fs::read_to_string(project.path().join("package.json")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn unknown_template_exits_3_and_lists_candidates() {
    let templates = templates_fixture();
    let project = project_fixture();

    cookbook()
        .current_dir(project.path())
        .args(["add", "does-not-exist", "--templates-dir"])
        .arg(templates.path())
        .assert()
        .failure()
        .code(3)
        .stdout(predicate::str::contains("demo-pipe"))
        .stderr(predicate::str::contains("not found"));
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn list_renders_registry_metadata() {
    let templates = templates_fixture();

    cookbook()
        .args(["list", "--templates-dir"])
        .arg(templates.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo ingestion pipe"))
        .stdout(predicate::str::contains("Hono API server"));
}

#[test]
fn list_falls_back_to_directories_without_an_index() {
    let templates = templates_fixture();
    fs::remove_file(templates.path().join("registry.json")).unwrap();

    cookbook()
        .args(["list", "--templates-dir"])
        .arg(templates.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("demo-pipe"))
        .stdout(predicate::str::contains("hono"));
}

#[test]
fn list_does_not_mutate_the_templates_root() {
    let templates = templates_fixture();
    fs::remove_file(templates.path().join("registry.json")).unwrap();

    cookbook()
        .args(["list", "--templates-dir"])
        .arg(templates.path())
        .assert()
        .success();

    // Fallback listing must not have recreated or written anything.
    assert!(!templates.path().join("registry.json").exists());
}

#[test]
fn list_json_output_is_parseable() {
    let templates = templates_fixture();

    let output = cookbook()
        .args(["list", "--format", "json", "--templates-dir"])
        .arg(templates.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(parsed["pipes"].is_array());
}

// ── init ──────────────────────────────────────────────────────────────────────

#[test]
fn init_materializes_the_base_project_with_the_chosen_name() {
    let templates = templates_fixture();
    let workdir = TempDir::new().unwrap();

    cookbook()
        .current_dir(workdir.path())
        .args(["init", "my-indexer", "--no-install", "--templates-dir"])
        .arg(templates.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created project my-indexer"));

    let project = workdir.path().join("my-indexer");
    let manifest = fs::read_to_string(project.join("package.json")).unwrap();
    assert!(manifest.contains("\"name\": \"my-indexer\""));
    assert!(!project.join("package.json.template").exists());
    assert!(project.join("src/index.ts").is_file());
}

#[test]
fn init_refuses_an_existing_directory() {
    let templates = templates_fixture();
    let workdir = TempDir::new().unwrap();
    fs::create_dir(workdir.path().join("taken")).unwrap();

    cookbook()
        .current_dir(workdir.path())
        .args(["init", "taken", "--no-install", "--templates-dir"])
        .arg(templates.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_rejects_invalid_names() {
    let templates = templates_fixture();
    let workdir = TempDir::new().unwrap();

    cookbook()
        .current_dir(workdir.path())
        .args(["init", ".hidden", "--no-install", "--templates-dir"])
        .arg(templates.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid project name"));
}
