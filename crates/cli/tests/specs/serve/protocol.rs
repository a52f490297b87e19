//! `rungen serve` specs
//!
//! Drive the JSON-lines protocol through stdin and read every response.

use crate::prelude::*;

fn requests(lines: &[Value]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

fn by_id(responses: &[Value], id: u64) -> Value {
    responses
        .iter()
        .find(|r| r["id"] == id)
        .cloned()
        .unwrap_or_else(|| panic!("no response with id {id} in {responses:#?}"))
}

#[test]
fn lenses_and_run_over_stdin() {
    let temp = Project::empty();
    let file = temp.file("gen.go", "package gen\n//go:generate touch made.txt\n");

    let output = temp
        .rg()
        .arg("serve")
        .stdin(requests(&[
            json!({ "id": 1, "type": "lenses", "path": file }),
            json!({ "id": 2, "type": "run", "command": "touch made.txt", "path": file, "line": 2 }),
            json!({ "id": 3, "type": "shutdown" }),
        ]))
        .passes();
    let responses = output.json_lines();

    let lenses = by_id(&responses, 1);
    assert_eq!(lenses["type"], "lenses");
    assert_eq!(lenses["handles"][0]["args"]["command"], "touch made.txt");

    let report = by_id(&responses, 2);
    assert_eq!(report["type"], "report");
    assert_eq!(report["report"]["outcome"]["status"], "succeeded");

    assert_eq!(by_id(&responses, 3), json!({ "id": 3, "type": "ok" }));
    assert!(temp.path().join("made.txt").exists());
}

#[test]
fn end_of_input_waits_for_runs() {
    let temp = Project::empty();
    let file = temp.file("gen.go", "//go:generate sleep 0.2\n");

    let output = temp
        .rg()
        .arg("serve")
        .stdin(requests(&[json!({
            "id": 1,
            "type": "run",
            "command": "sleep 0.2 && touch late.txt",
            "path": file,
        })]))
        .passes();

    let report = by_id(&output.json_lines(), 1);
    assert_eq!(report["report"]["outcome"]["status"], "succeeded");
    assert!(temp.path().join("late.txt").exists());
}

#[test]
fn bad_lines_get_errors() {
    let temp = Project::empty();

    let output = temp.rg().arg("serve").stdin("this is not json\n{\"type\":\"explode\"}\n").passes();
    let responses = output.json_lines();

    assert_eq!(responses.len(), 2);
    assert!(responses.iter().all(|r| r["type"] == "error"));
}

#[test]
fn failed_run_is_a_report_not_an_error() {
    let temp = Project::empty();
    let file = temp.file("gen.go", "package gen\n");

    let output = temp
        .rg()
        .arg("serve")
        .stdin(requests(&[json!({ "id": 1, "type": "run", "command": "exit 4", "path": file })]))
        .passes();

    let report = by_id(&output.json_lines(), 1);
    assert_eq!(report["report"]["outcome"]["status"], "failed");
    assert_eq!(report["report"]["outcome"]["message"], "exit status 4");
}
