//! Top-level error reporting

use skilltree::SkilltreeError;

use crate::ui::json::{emit_event, events::ErrorEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{ColoredText, SemanticColor};

/// Stable code for JSON consumers
pub fn error_code(err: &anyhow::Error) -> &'static str {
    let Some(err) = err.downcast_ref::<SkilltreeError>() else {
        return "ERROR";
    };
    match err {
        SkilltreeError::DuplicateId { .. } => "DUPLICATE_ID",
        SkilltreeError::EmptyId { .. } => "EMPTY_ID",
        SkilltreeError::AmbiguousChildren { .. } => "AMBIGUOUS_CHILDREN",
        SkilltreeError::TooDeep { .. } => "TOO_DEEP",
        SkilltreeError::UnknownParent { .. } => "UNKNOWN_PARENT",
        SkilltreeError::UnreachableRows { .. } => "UNREACHABLE_ROWS",
        SkilltreeError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
        SkilltreeError::Toml { .. } | SkilltreeError::Json(_) | SkilltreeError::Yaml(_) => {
            "PARSE_ERROR"
        }
        SkilltreeError::InvalidRecord { .. } => "INVALID_RECORD",
        SkilltreeError::EmptySelection => "EMPTY_SELECTION",
        SkilltreeError::InvalidConfig { .. } => "INVALID_CONFIG",
        SkilltreeError::InvalidAction { .. } => "INVALID_ACTION",
        SkilltreeError::NotATerminal => "NOT_A_TERMINAL",
        SkilltreeError::Io(_) => "IO_ERROR",
    }
}

/// One-line fix suggestion, when there is an obvious one
pub fn error_help(err: &anyhow::Error) -> Option<String> {
    match err.downcast_ref::<SkilltreeError>()? {
        SkilltreeError::EmptySelection => {
            Some("Select at least one item, or set selection.require_selection = false".into())
        }
        SkilltreeError::AmbiguousChildren { .. } => {
            Some("Use either 'children' or 'subChildren' on a node, not both".into())
        }
        SkilltreeError::TooDeep { .. } => {
            Some("Trees support at most category > skill > sub-skill".into())
        }
        SkilltreeError::UnreachableRows { .. } => {
            Some("Check parent_id for cycles; every row must lead back to a root".into())
        }
        SkilltreeError::NotATerminal => Some("Pass actions to 'skilltree apply' instead".into()),
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, color: bool, unicode: bool) -> String {
    let mut out = format!(
        "{} {} {}\n",
        Icon::Error.colored(color, unicode),
        ColoredText::new("Error:", SemanticColor::Error)
            .bold()
            .render(color),
        err
    );
    for cause in err.chain().skip(1) {
        out.push_str(&format!("  caused by: {cause}\n"));
    }
    if let Some(help) = error_help(err) {
        out.push_str(&format!("  {}\n", ColoredText::dim(help).render(color)));
    }
    out
}

pub fn print_error(err: &anyhow::Error, command: &str, json: bool, color: bool, unicode: bool) {
    if json {
        let event =
            ErrorEvent::new(command, error_code(err), err.to_string()).with_help(error_help(err));
        let _ = emit_event(&event);
        return;
    }

    eprint!("{}", format_error(err, color, unicode));
}
