//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{PropagationMode, StaleIdPolicy};
use crate::error::{SkilltreeError, SkilltreeResult};

use super::types::{Config, LoadedConfig, Verbosity};

/// Project-local config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".skilltree.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SkilltreeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SkilltreeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the config file to read. An explicit path wins even if it is missing
/// (reading it then fails loudly).
pub fn locate(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let project = cwd.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }

    dirs::config_dir()
        .map(|dir| dir.join("skilltree/config.toml"))
        .filter(|path| path.is_file())
}

/// Load from the located file (or defaults), then apply env overrides
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> SkilltreeResult<LoadedConfig> {
    let source = locate(explicit, cwd);
    let (config, warnings) = match &source {
        Some(path) => load_with_warnings(path)?,
        None => (Config::default(), Vec::new()),
    };

    Ok(LoadedConfig {
        config: with_env_overrides(config),
        warnings,
        source,
    })
}

/// Apply environment variable overrides (SKILLTREE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |name| std::env::var(name).ok())
}

pub(crate) fn apply_env_overrides<F>(mut config: Config, get_env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // SKILLTREE_PROPAGATION (unrecognized values are ignored)
    if let Some(mode) = get_env("SKILLTREE_PROPAGATION").and_then(|v| PropagationMode::parse(&v)) {
        config.selection.propagation = mode;
    }

    // SKILLTREE_STALE_IDS
    if let Some(policy) = get_env("SKILLTREE_STALE_IDS").and_then(|v| StaleIdPolicy::parse(&v)) {
        config.selection.stale_ids = policy;
    }

    // SKILLTREE_REQUIRE_SELECTION
    if let Some(val) = get_env("SKILLTREE_REQUIRE_SELECTION") {
        config.selection.require_selection = val.to_lowercase() != "false" && val != "0";
    }

    // SKILLTREE_RECORD_COLUMN
    if let Some(column) = get_env("SKILLTREE_RECORD_COLUMN") {
        let column = column.trim();
        if !column.is_empty() {
            config.record.column = column.to_string();
        }
    }

    // SKILLTREE_VERBOSITY
    if let Some(verbosity) = get_env("SKILLTREE_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "selection",
        "propagation",
        "stale_ids",
        "expand_on_select",
        "require_selection",
        "record",
        "column",
        "output",
        "verbosity",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
