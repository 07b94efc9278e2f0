mod common;

use common::*;

#[test]
fn write_creates_the_record() {
    let env = TestEnv::with_skills();
    let output = env.run(&[
        "apply",
        "--items",
        "skills.json",
        "--record",
        "profile.json",
        "--write",
        "toggle:design",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).ends_with("[OK] Saved 1 id(s) to 'skills' in profile.json\n"));

    let record = env.read_json("profile.json");
    assert_eq!(record["skills"], serde_json::json!(["design"]));
    assert!(record["updated_at"].is_string());
}

#[test]
fn record_column_seeds_the_session() {
    let env = TestEnv::with_skills();
    env.write(
        "profile.json",
        r#"{ "name": "Ada", "skills": ["react", "vue"] }"#,
    );

    let output = env.run(&[
        "apply",
        "--items",
        "skills.json",
        "--record",
        "profile.json",
        "toggle:backend",
    ]);

    assert!(stdout(&output).starts_with("Selected (3): react, vue, backend\n"));
    // Not written without --write
    assert_eq!(
        env.read_json("profile.json")["skills"],
        serde_json::json!(["react", "vue"])
    );
}

#[test]
fn write_replaces_only_the_selected_column() {
    let env = TestEnv::with_skills();
    env.write(
        "project.json",
        r#"{ "title": "Food bank", "skills": ["design"], "required_skills": ["react"] }"#,
    );

    let output = env.run(&[
        "apply",
        "--items",
        "skills.json",
        "--record",
        "project.json",
        "--column",
        "required_skills",
        "--write",
        "toggle:vue",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let record = env.read_json("project.json");
    assert_eq!(record["title"], "Food bank");
    assert_eq!(record["skills"], serde_json::json!(["design"]));
    assert_eq!(
        record["required_skills"],
        serde_json::json!(["react", "vue", "web"])
    );
}

#[test]
fn empty_selection_is_not_saved() {
    let env = TestEnv::with_skills();
    env.write("profile.json", r#"{ "skills": ["design"] }"#);

    let output = env.run(&[
        "apply",
        "--items",
        "skills.json",
        "--record",
        "profile.json",
        "--write",
        "remove:design",
    ]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("at least one item must be selected"));
    assert_eq!(
        env.read_json("profile.json")["skills"],
        serde_json::json!(["design"])
    );
}

#[test]
fn json_complete_names_the_saved_column() {
    let env = TestEnv::with_skills();
    let output = env.run(&[
        "--json",
        "apply",
        "--items",
        "skills.json",
        "--record",
        "profile.json",
        "--write",
        "toggle:backend",
    ]);

    let events = events(&output);
    let complete = events.last().unwrap();
    assert_eq!(complete["event"], "complete");
    assert_eq!(complete["saved"], "skills");
}

#[test]
fn malformed_record_column_is_an_error() {
    let env = TestEnv::with_skills();
    env.write("profile.json", r#"{ "skills": "react" }"#);

    let output = env.run(&[
        "--json",
        "apply",
        "--items",
        "skills.json",
        "--record",
        "profile.json",
    ]);

    assert!(!output.status.success());
    let events = events(&output);
    assert_eq!(events.last().unwrap()["code"], "INVALID_RECORD");
}
