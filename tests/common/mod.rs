//! Common test utilities for skilltree CLI tests.
//!
//! - `TestEnv`: isolated working directory and config home
//! - Fixtures: a small skill tree in nested and row form

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Development > {Web > {React, Vue}, Backend}, Design
pub const SKILLS_JSON: &str = r#"[
  {
    "id": "dev",
    "label": "Development",
    "children": [
      {
        "id": "web",
        "label": "Web",
        "subChildren": [
          { "id": "react", "label": "React" },
          { "id": "vue", "label": "Vue" }
        ]
      },
      { "id": "backend", "label": "Backend" }
    ]
  },
  { "id": "design", "label": "Design" }
]
"#;

/// The same tree as flat `skillsets` rows
pub const SKILLSET_ROWS_JSON: &str = r#"{
  "skillsets": [
    { "id": 1, "name": "Development", "parent_id": null },
    { "id": 2, "name": "Web", "parent_id": 1 },
    { "id": 3, "name": "React", "parent_id": 2 },
    { "id": 4, "name": "Vue", "parent_id": 2 },
    { "id": 5, "name": "Backend", "parent_id": 1 },
    { "id": 6, "name": "Design", "parent_id": null }
  ]
}
"#;

pub const SKILLS_YAML: &str = r#"items:
  - id: dev
    label: Development
    children:
      - id: web
        label: Web
        subChildren:
          - id: react
            label: React
"#;

pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Environment with `skills.json` already written
    pub fn with_skills() -> Self {
        let env = Self::new();
        env.write("skills.json", SKILLS_JSON);
        env
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).unwrap()
    }

    pub fn read_json(&self, name: &str) -> serde_json::Value {
        serde_json::from_str(&self.read(name)).unwrap()
    }

    /// Command for the binary, isolated from the caller's config and locale
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_skilltree"));
        cmd.current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("xdg"))
            .env("LANG", "C")
            .env("NO_COLOR", "1")
            .env_remove("LC_ALL")
            .env_remove("LC_CTYPE");
        for key in [
            "SKILLTREE_PROPAGATION",
            "SKILLTREE_STALE_IDS",
            "SKILLTREE_REQUIRE_SELECTION",
            "SKILLTREE_RECORD_COLUMN",
            "SKILLTREE_VERBOSITY",
        ] {
            cmd.env_remove(key);
        }
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().unwrap()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Parse NDJSON stdout into events
pub fn events(output: &Output) -> Vec<serde_json::Value> {
    stdout(output)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

/// Event names in order
pub fn event_names(events: &[serde_json::Value]) -> Vec<String> {
    events
        .iter()
        .map(|e| e["event"].as_str().unwrap_or_default().to_string())
        .collect()
}
