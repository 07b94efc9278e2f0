//! Verbosity-gated stderr output and warning events

use std::path::Path;

use skilltree::config::{ConfigWarning, LoadedConfig};

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::WarningEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{ColoredText, SemanticColor};

/// `-v` diagnostics, one line each
pub fn verbose(ui: &UiContext, message: impl AsRef<str>) {
    if ui.is_verbose() {
        eprintln!("{}", ColoredText::dim(message.as_ref()).render(ui.color));
    }
}

pub fn warn(ui: &UiContext, command: &str, code: &str, message: &str) {
    if ui.json {
        let _ = emit_event(&WarningEvent::new(command, code, message));
        return;
    }
    eprintln!(
        "{} {}",
        Icon::Warning.colored(ui.color, ui.unicode),
        ColoredText::new(message, SemanticColor::Warning).render(ui.color)
    );
}

pub fn print_config_warnings(ui: &UiContext, command: &str, warnings: &[ConfigWarning]) {
    for w in warnings {
        warn(ui, command, "UNKNOWN_CONFIG_KEY", &config_warning_message(w));
    }
}

fn config_warning_message(w: &ConfigWarning) -> String {
    let location = match w.line {
        Some(line) => format!("{}:{}", w.file.display(), line),
        None => w.file.display().to_string(),
    };
    match &w.suggestion {
        Some(suggestion) => format!(
            "Unknown config key '{}' in {} (did you mean '{}'?)",
            w.key, location, suggestion
        ),
        None => format!("Unknown config key '{}' in {}", w.key, location),
    }
}

/// Warn about initial ids the tree no longer has
pub fn print_stale_ids(ui: &UiContext, command: &str, stale: &[String], dropped: bool) {
    if stale.is_empty() {
        return;
    }
    let action = if dropped { "dropped" } else { "kept" };
    warn(
        ui,
        command,
        "STALE_IDS",
        &format!(
            "{} selected id(s) not in the tree ({action}): {}",
            stale.len(),
            stale.join(", ")
        ),
    );
}

pub fn log_config_source(ui: &UiContext, loaded: &LoadedConfig) {
    match &loaded.source {
        Some(path) => verbose(ui, format!("config: {}", path.display())),
        None => verbose(ui, "config: defaults"),
    }
}

pub fn log_items_source(ui: &UiContext, path: &Path, rows: bool) {
    let layout = if rows { "rows" } else { "nested" };
    verbose(ui, format!("items: {} ({layout})", path.display()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn config_warning_includes_line_and_suggestion() {
        let w = ConfigWarning {
            key: "colum".into(),
            file: PathBuf::from(".skilltree.toml"),
            line: Some(3),
            suggestion: Some("column".into()),
        };
        assert_eq!(
            config_warning_message(&w),
            "Unknown config key 'colum' in .skilltree.toml:3 (did you mean 'column'?)"
        );
    }

    #[test]
    fn config_warning_without_line() {
        let w = ConfigWarning {
            key: "zzz".into(),
            file: PathBuf::from("c.toml"),
            line: None,
            suggestion: None,
        };
        assert_eq!(config_warning_message(&w), "Unknown config key 'zzz' in c.toml");
    }
}
