mod common;

use common::*;

#[test]
fn check_reports_tree_shape() {
    let env = TestEnv::with_skills();
    let output = env.run(&["check", "--items", "skills.json"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "[OK] skills.json: 2 root(s), 6 node(s), 4 leaf skill(s), depth 3\n"
    );
}

#[test]
fn check_accepts_skillset_rows() {
    let env = TestEnv::new();
    env.write("skillsets.json", SKILLSET_ROWS_JSON);

    let output = env.run(&["check", "--items", "skillsets.json", "--rows"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("2 root(s), 6 node(s), 4 leaf skill(s)"));
}

#[test]
fn check_accepts_wrapped_yaml() {
    let env = TestEnv::new();
    env.write("skills.yaml", SKILLS_YAML);

    let output = env.run(&["check", "--items", "skills.yaml"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("1 root(s), 3 node(s), 1 leaf skill(s), depth 3"));
}

#[test]
fn check_rejects_duplicate_ids() {
    let env = TestEnv::new();
    env.write(
        "skills.json",
        r#"[{ "id": "a", "label": "A", "children": [{ "id": "a", "label": "Again" }] }]"#,
    );

    let output = env.run(&["check", "--items", "skills.json"]);

    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("duplicate item id 'a'"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn check_rejects_fourth_level() {
    let env = TestEnv::new();
    env.write(
        "skills.json",
        r#"[{ "id": "a", "label": "A", "children": [
            { "id": "b", "label": "B", "subChildren": [
                { "id": "c", "label": "C", "children": [{ "id": "d", "label": "D" }] }
            ] }
        ] }]"#,
    );

    let output = env.run(&["check", "--items", "skills.json"]);
    assert!(!output.status.success());
}

#[test]
fn check_rejects_unknown_extension() {
    let env = TestEnv::new();
    env.write("skills.csv", "id,label\n");

    let output = env.run(&["check", "--items", "skills.csv"]);
    assert!(!output.status.success());
}

#[test]
fn check_json_emits_start_data_complete() {
    let env = TestEnv::with_skills();
    let output = env.run(&["check", "--items", "skills.json", "--json"]);

    assert!(output.status.success());
    let events = events(&output);
    assert_eq!(event_names(&events), ["start", "data", "complete"]);
    assert_eq!(events[1]["nodes"], 6);
    assert_eq!(events[1]["leaves"], 4);
    assert_eq!(events[2]["success"], true);
}

#[test]
fn check_json_reports_errors_as_events() {
    let env = TestEnv::new();
    env.write(
        "rows.json",
        r#"[{ "id": 1, "name": "Orphan", "parent_id": 99 }]"#,
    );

    let output = env.run(&["check", "--items", "rows.json", "--rows", "--json"]);

    assert!(!output.status.success());
    let events = events(&output);
    assert_eq!(event_names(&events), ["start", "error"]);
    assert_eq!(events[1]["code"], "UNKNOWN_PARENT");
    assert_eq!(events[1]["command"], "check");
}
