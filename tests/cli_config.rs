mod common;

use common::*;

#[test]
fn project_config_sets_single_level_propagation() {
    let env = TestEnv::with_skills();
    env.write(
        ".skilltree.toml",
        "[selection]\npropagation = \"single-level\"\n",
    );
    let args = [
        "apply",
        "--items",
        "skills.json",
        "toggle:backend",
        "toggle:react",
        "toggle:vue",
    ];

    let output = env.run(&args);
    assert!(
        stdout(&output).starts_with("Selected (4): backend, react, vue, web\n"),
        "stdout: {}",
        stdout(&output)
    );

    // Environment overrides the file
    let output = env
        .command()
        .args(args)
        .env("SKILLTREE_PROPAGATION", "ancestors")
        .output()
        .unwrap();
    assert!(stdout(&output).starts_with("Selected (5): backend, react, vue, web, dev\n"));
}

#[test]
fn config_column_is_used_for_records() {
    let env = TestEnv::with_skills();
    env.write(".skilltree.toml", "[record]\ncolumn = \"interests\"\n");

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
    assert_eq!(
        env.read_json("profile.json")["interests"],
        serde_json::json!(["design"])
    );
}

#[test]
fn optional_selection_allows_saving_nothing() {
    let env = TestEnv::with_skills();
    env.write(".skilltree.toml", "[selection]\nrequire_selection = false\n");

    let output = env.run(&[
        "apply",
        "--items",
        "skills.json",
        "--record",
        "profile.json",
        "--write",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(env.read_json("profile.json")["skills"], serde_json::json!([]));
}

#[test]
fn unknown_keys_warn_with_suggestion() {
    let env = TestEnv::with_skills();
    env.write(".skilltree.toml", "[selection]\npropagaton = \"ancestors\"\n");

    let output = env.run(&["check", "--items", "skills.json"]);

    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Unknown config key 'propagaton'"), "stderr: {err}");
    assert!(err.contains("did you mean 'propagation'?"), "stderr: {err}");
}

#[test]
fn invalid_values_fail_the_command() {
    let env = TestEnv::with_skills();
    env.write(".skilltree.toml", "[selection]\nstale_ids = \"maybe\"\n");

    let output = env.run(&["--json", "check", "--items", "skills.json"]);

    assert!(!output.status.success());
    let events = events(&output);
    assert_eq!(events.last().unwrap()["code"], "INVALID_CONFIG");
}

#[test]
fn explicit_config_wins_over_project_file() {
    let env = TestEnv::with_skills();
    env.write(".skilltree.toml", "[record]\ncolumn = \"interests\"\n");
    env.write("other.toml", "[record]\ncolumn = \"required_skills\"\n");

    let output = env.run(&[
        "--config",
        "other.toml",
        "apply",
        "--items",
        "skills.json",
        "--record",
        "project.json",
        "--write",
        "toggle:design",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let record = env.read_json("project.json");
    assert_eq!(record["required_skills"], serde_json::json!(["design"]));
    assert!(record.get("interests").is_none());
}

#[test]
fn verbose_logs_config_source() {
    let env = TestEnv::with_skills();
    env.write(".skilltree.toml", "");

    let output = env.run(&["-v", "check", "--items", "skills.json"]);

    let err = stderr(&output);
    assert!(err.contains("config: "), "stderr: {err}");
    assert!(err.contains(".skilltree.toml"), "stderr: {err}");
    assert!(err.contains("items: skills.json (nested)"), "stderr: {err}");
}

#[cfg(target_os = "linux")]
#[test]
fn user_config_dir_is_the_fallback() {
    let env = TestEnv::with_skills();
    env.write("xdg/skilltree/config.toml", "[record]\ncolumn = \"interests\"\n");

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
    assert_eq!(
        env.read_json("profile.json")["interests"],
        serde_json::json!(["design"])
    );
}
