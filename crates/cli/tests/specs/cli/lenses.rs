//! `rungen lenses` specs
//!
//! Verify directive discovery, quoting and the enable switch.

use crate::prelude::*;

const PILL: &str = r#"package pill

//go:generate stringer --type=Pill
type Pill int

	//go:generate mockgen --source=pill.go --destination=mock/pill.go
// go:generate not-a-directive
var x = 1 //go:generate trailing
"#;

#[test]
fn lists_directives_with_normalized_commands() {
    let temp = Project::empty();
    let file = temp.file("pill.go", PILL);

    temp.rg().arg("lenses").arg(&file).passes().stdout_eq(
        "3: ▶ Run  stringer --type=\"Pill\"\n\
         6: ▶ Run  mockgen --source=\"pill.go\" --destination=\"mock/pill.go\"\n",
    );
}

#[test]
fn json_output_carries_action_and_args() {
    let temp = Project::empty();
    let file = temp.file("pill.go", PILL);

    let handles = temp.rg().arg("lenses").arg(&file).arg("--json").passes().json();
    let handles = handles.as_array().expect("array of handles");
    assert_eq!(handles.len(), 2);
    assert_eq!(handles[0]["action"], "rungen.runGoGenerate");
    assert_eq!(handles[0]["title"], "▶ Run");
    assert_eq!(handles[0]["range"], json!({ "line": 2, "start": 0, "end": 34 }));
    assert_eq!(handles[0]["args"]["line"], 3);
    assert_eq!(handles[0]["args"]["document"], file.to_str().unwrap());
    assert_eq!(handles[1]["args"]["line"], 6);
}

#[test]
fn non_go_files_have_no_lenses() {
    let temp = Project::empty();
    let file = temp.file("notes.md", "//go:generate echo hi\n");
    temp.rg().arg("lenses").arg(&file).passes().stdout_eq("No go:generate directives\n");
}

#[test]
fn disabled_by_config_file() {
    let temp = Project::empty();
    let file = temp.file("gen.go", "//go:generate echo hi\n");
    let config = temp.file("config.toml", "enable_code_lens = false\n");

    temp.rg()
        .arg("--config")
        .arg(&config)
        .arg("lenses")
        .arg(&file)
        .passes()
        .stdout_eq("No go:generate directives\n");
}

#[test]
fn disabled_by_env() {
    let temp = Project::empty();
    let file = temp.file("gen.go", "//go:generate echo hi\n");
    temp.rg()
        .env("RUNGEN_ENABLE_CODE_LENS", "false")
        .arg("lenses")
        .arg(&file)
        .passes()
        .stdout_eq("No go:generate directives\n");
}

#[test]
fn invalid_config_is_an_error() {
    let temp = Project::empty();
    let file = temp.file("gen.go", "//go:generate echo hi\n");
    let config = temp.file("config.toml", "enable_code_lens = \"sometimes\"\n");

    temp.rg()
        .arg("--config")
        .arg(&config)
        .arg("lenses")
        .arg(&file)
        .exits_with(1)
        .stderr_has("invalid settings");
}

#[test]
fn missing_file_is_an_error() {
    let temp = Project::empty();
    temp.rg().args(&["lenses", "nope.go"]).exits_with(1).stderr_has("failed to read");
}
