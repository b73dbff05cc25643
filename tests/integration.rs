//! Integration tests for rendexpress


use harness::{TestDir, render, run_rendexpress};

fn scenario_dir() -> TestDir {
    let dir = TestDir::named("MyProject");
    dir.add_file("B/x.txt", "x");
    dir.add_file("a.txt", "a");
    dir.add_file("Thumbs.db", "");
    dir
}

#[test]
fn test_text_output_scenario() {
    let dir = scenario_dir();
    let stdout = render(dir.path(), "text");

    assert_eq!(stdout, "MYPROJECT:\n    * B:\n        o x.txt\n    * a.txt\n");
}

#[test]
fn test_html_output_scenario() {
    let dir = scenario_dir();
    let stdout = render(dir.path(), "html");
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 6, "unexpected html: {}", stdout);
    assert!(lines[0].starts_with("<div style=\""));
    assert!(lines[1].ends_with(">MYPROJECT</div>"));
    assert!(lines[2].contains(">*</span>"));
    assert!(lines[2].contains(">B:</span>"));
    assert!(lines[3].contains(">o</span>"));
    assert!(lines[3].contains("<span style=\"font-style: italic;\">x.txt</span>"));
    assert!(lines[4].contains(">*</span>"));
    assert!(lines[4].contains(">a.txt</span>"));
    assert_eq!(lines[5], "</div>");
    assert!(!stdout.contains("Thumbs.db"));
}

#[test]
fn test_json_is_default_format() {
    let dir = scenario_dir();
    let path = dir.path().to_str().expect("utf-8 temp path");
    let (stdout, stderr, success) = run_rendexpress(dir.path(), &["--path", path]);
    assert!(success, "rendexpress failed: {}", stderr);

    assert_eq!(stdout.lines().count(), 1, "json should be a single line");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    let object = value.as_object().expect("json object");
    assert_eq!(object.len(), 2);
    assert_eq!(
        object["text"],
        "MYPROJECT:\n    * B:\n        o x.txt\n    * a.txt"
    );
    assert!(
        object["html"]
            .as_str()
            .expect("html string")
            .ends_with("</div>")
    );
}

#[test]
fn test_json_matches_individual_formats() {
    let dir = scenario_dir();
    let json = render(dir.path(), "json");
    let html = render(dir.path(), "html");
    let text = render(dir.path(), "text");

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(format!("{}\n", value["html"].as_str().expect("html")), html);
    assert_eq!(format!("{}\n", value["text"].as_str().expect("text")), text);
}

#[test]
fn test_missing_path_fails_without_output() {
    let dir = TestDir::new();
    let missing = dir.path().join("does-not-exist");
    let missing = missing.to_str().expect("utf-8 temp path");

    let (stdout, stderr, success) = run_rendexpress(dir.path(), &["--path", missing]);
    assert!(!success, "missing path should fail");
    assert!(stdout.is_empty(), "nothing should be rendered: {}", stdout);
    assert!(
        stderr.contains("path not found"),
        "should explain the failure: {}",
        stderr
    );
}

#[test]
fn test_relative_path_uses_final_segment() {
    let dir = TestDir::new();
    dir.add_file("Client Docs/contract.pdf", "");

    let (stdout, stderr, success) = run_rendexpress(
        dir.path(),
        &["--path", "Client Docs/", "--format", "text", "--color", "never"],
    );
    assert!(success, "rendexpress failed: {}", stderr);
    assert_eq!(stdout, "CLIENT DOCS:\n    * contract.pdf\n");
}

#[test]
fn test_empty_directory() {
    let dir = TestDir::named("empty");

    assert_eq!(render(dir.path(), "text"), "EMPTY:\n");
    assert_eq!(render(dir.path(), "html").lines().count(), 3);
}

#[test]
fn test_output_is_repeatable() {
    let dir = TestDir::new();
    dir.add_file("src/main.rs", "");
    dir.add_file("src/output/html.rs", "");
    dir.add_file("Cargo.toml", "");
    dir.add_file("README.md", "");

    assert_eq!(render(dir.path(), "json"), render(dir.path(), "json"));
}

#[test]
fn test_nested_directories() {
    let dir = TestDir::named("root");
    dir.add_file("one/two/three/four/leaf.txt", "");

    let stdout = render(dir.path(), "text");
    let expected = [
        "ROOT:",
        "    * one:",
        "        o two:",
        "            - three:",
        "                - four:",
        "                    - leaf.txt",
    ]
    .join("\n");
    assert_eq!(stdout, format!("{}\n", expected));
}
