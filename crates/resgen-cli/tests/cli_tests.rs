//! Integration tests for the `resgen` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `resgen` running inside `dir`, isolated from the user's config and colours.
fn resgen(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("resgen").unwrap();
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

fn workspace_with(template: &str, content: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(template), content).unwrap();
    temp
}

fn generated(dir: &TempDir, name: &str) -> PathBuf {
    dir.path()
        .join("target")
        .join("generated-resources")
        .join(name)
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();
    resgen(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    resgen(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn generate_requires_template_and_output() {
    let temp = TempDir::new().unwrap();
    resgen(&temp)
        .args(["generate", "-o", "x.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--template"));
}

#[test]
fn no_color_accepts_conventional_values() {
    for value in ["1", "yes", "true"] {
        let temp = workspace_with("t.txt", "x");
        resgen(&temp)
            .env("NO_COLOR", value)
            .args(["generate", "-t", "t.txt", "-o", "t.txt"])
            .assert()
            .success();
    }
}

#[test]
fn false_like_no_color_is_accepted() {
    let temp = workspace_with("t.txt", "x");
    resgen(&temp)
        .env("NO_COLOR", "0")
        .args(["generate", "-t", "t.txt", "-o", "t.txt"])
        .assert()
        .success();
    assert!(generated(&temp, "t.txt").exists());
}

// ── generate ──────────────────────────────────────────────────────────────────

#[test]
fn hello_world() {
    let temp = workspace_with("hello.txt", "Hello ${name}");

    resgen(&temp)
        .args(["generate", "-t", "hello.txt", "-o", "greeting.txt", "-D", "name=World"])
        .assert()
        .success()
        .stdout(predicate::str::contains("11 bytes"));

    assert_eq!(
        fs::read_to_string(generated(&temp, "greeting.txt")).unwrap(),
        "Hello World"
    );
}

#[test]
fn json_report() {
    let temp = workspace_with("hello.txt", "Hello ${name}");

    let out = resgen(&temp)
        .args([
            "--output-format",
            "json",
            "generate",
            "-t",
            "hello.txt",
            "-o",
            "greeting.txt",
            "-D",
            "name=World",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["bytes_written"], 11);
    assert_eq!(report["mode"], "text");
    assert_eq!(report["stage"], "done");
    assert_eq!(report["explicit_properties"], 1);
}

#[test]
fn list_property_is_joined_and_indexable() {
    let temp = workspace_with("tags.txt", "${tags[1]}|${tags}");

    resgen(&temp)
        .args(["generate", "-t", "tags.txt", "-o", "tags.txt", "-D", "tags=a, b ,c"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(generated(&temp, "tags.txt")).unwrap(),
        "b|a,b,c"
    );
}

#[test]
fn environment_variables_are_properties() {
    let temp = workspace_with("t.txt", "${GREETING_FOR_TEST}");

    resgen(&temp)
        .env("GREETING_FOR_TEST", "Hi")
        .args(["generate", "-t", "t.txt", "-o", "t.txt"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(generated(&temp, "t.txt")).unwrap(), "Hi");
}

#[test]
fn explicit_property_shadows_environment() {
    let temp = workspace_with("t.txt", "${colors}");

    resgen(&temp)
        .env("colors", "blue,green")
        .args(["generate", "-t", "t.txt", "-o", "t.txt", "-D", "colors=red"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(generated(&temp, "t.txt")).unwrap(), "red");
}

#[test]
fn dotenv_file_feeds_the_environment() {
    let temp = workspace_with("t.txt", "${DOTENV_ONLY_VALUE}");
    fs::write(temp.path().join(".env"), "DOTENV_ONLY_VALUE=from-dotenv\n").unwrap();

    resgen(&temp)
        .args(["generate", "-t", "t.txt", "-o", "t.txt"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(generated(&temp, "t.txt")).unwrap(),
        "from-dotenv"
    );
}

#[test]
fn html_mode_escapes_values() {
    let temp = workspace_with("page.html", "<p>${msg}</p>");

    resgen(&temp)
        .args([
            "generate", "-t", "page.html", "-o", "page.html", "--mode", "HTML", "-D", "msg=a<b",
        ])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(generated(&temp, "page.html")).unwrap(),
        "<p>a&lt;b</p>"
    );
}

#[test]
fn absolute_output_bypasses_build_dir() {
    let temp = workspace_with("t.txt", "abs");
    let out = temp.path().join("elsewhere").join("abs.txt");

    resgen(&temp)
        .args(["generate", "-t", "t.txt", "-o"])
        .arg(&out)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&out).unwrap(), "abs");
    assert!(!temp.path().join("target").exists());
}

#[test]
fn dry_run_prints_and_writes_nothing() {
    let temp = workspace_with("t.txt", "v=${v}");

    resgen(&temp)
        .args(["generate", "-t", "t.txt", "-o", "t.txt", "-D", "v=7", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("v=7"));

    assert!(!temp.path().join("target").exists());
}

// ── failures ──────────────────────────────────────────────────────────────────

#[test]
fn missing_template_exits_3() {
    let temp = TempDir::new().unwrap();

    resgen(&temp)
        .args(["generate", "-t", "absent.txt", "-o", "x.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Template file does not exist"));

    assert!(!temp.path().join("target").exists());
}

#[test]
fn unresolved_reference_exits_2() {
    let temp = workspace_with("t.txt", "line one\n${nobody}");

    resgen(&temp)
        .args(["generate", "-t", "t.txt", "-o", "t.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nobody"))
        .stderr(predicate::str::contains("line 2"));

    assert!(!generated(&temp, "t.txt").exists());
}

#[test]
fn declared_property_without_value_exits_4() {
    let temp = workspace_with("t.txt", "${version}");

    resgen(&temp)
        .args(["generate", "-t", "t.txt", "-o", "t.txt", "-D", "version"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("declared without a value"));
}

#[test]
fn unknown_encoding_exits_4() {
    let temp = workspace_with("t.txt", "x");

    resgen(&temp)
        .args(["generate", "-t", "t.txt", "-o", "t.txt", "--encoding", "klingon-8"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("klingon-8"));
}

#[test]
fn file_blocking_output_directory_exits_1() {
    let temp = workspace_with("t.txt", "x");
    fs::create_dir_all(temp.path().join("target")).unwrap();
    fs::write(temp.path().join("target").join("generated-resources"), "").unwrap();

    resgen(&temp)
        .args(["generate", "-t", "t.txt", "-o", "t.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("output directory"));
}

// ── configuration ─────────────────────────────────────────────────────────────

#[test]
fn config_file_supplies_defaults_and_properties() {
    let temp = workspace_with("t.txt", "${name}");
    fs::write(
        temp.path().join("resgen.toml"),
        "[generate]\nbuild_dir = \"out\"\n\n[properties]\nname = \"from-config\"\n",
    )
    .unwrap();

    resgen(&temp)
        .args(["generate", "-t", "t.txt", "-o", "t.txt"])
        .assert()
        .success();

    let out = temp.path().join("out").join("generated-resources").join("t.txt");
    assert_eq!(fs::read_to_string(out).unwrap(), "from-config");
}

#[test]
fn environment_overrides_config_file() {
    let temp = workspace_with("t.txt", "x");
    fs::write(
        temp.path().join("resgen.toml"),
        "[generate]\nbuild_dir = \"out\"\n",
    )
    .unwrap();

    resgen(&temp)
        .env("RESGEN_GENERATE__BUILD_DIR", "env-out")
        .args(["generate", "-t", "t.txt", "-o", "t.txt"])
        .assert()
        .success();

    assert!(
        temp.path()
            .join("env-out")
            .join("generated-resources")
            .join("t.txt")
            .exists()
    );
}

#[test]
fn missing_explicit_config_exits_4() {
    let temp = TempDir::new().unwrap();

    resgen(&temp)
        .args(["--config", "nope.toml", "config", "list"])
        .assert()
        .code(4);
}

#[test]
fn init_then_config_get() {
    let temp = TempDir::new().unwrap();

    resgen(&temp).arg("init").assert().success();
    assert!(temp.path().join("resgen.toml").exists());

    resgen(&temp)
        .args(["config", "get", "generate.build_dir"])
        .assert()
        .success()
        .stdout(predicate::str::diff("target\n"));
}

#[test]
fn init_does_not_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("resgen.toml"), "# mine\n").unwrap();

    resgen(&temp).arg("init").assert().success();
    assert_eq!(
        fs::read_to_string(temp.path().join("resgen.toml")).unwrap(),
        "# mine\n"
    );

    resgen(&temp).args(["init", "--force"]).assert().success();
    assert_ne!(
        fs::read_to_string(temp.path().join("resgen.toml")).unwrap(),
        "# mine\n"
    );
}

#[test]
fn config_get_unknown_key_exits_4() {
    let temp = TempDir::new().unwrap();

    resgen(&temp)
        .args(["config", "get", "no.such.key"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn config_path_prefers_local_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("resgen.toml"), "").unwrap();

    resgen(&temp)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("resgen.toml"));
}

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();

    resgen(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("resgen"));
}
