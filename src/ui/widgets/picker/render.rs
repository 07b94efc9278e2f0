//! Terminal rendering functions for the picker.

use skilltree::domain::services::Badge;
use skilltree::SelectionState;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

use super::menu::PickerRow;

/// Render a single tree row
pub fn render_row(row: &PickerRow, is_active: bool, unicode: bool, color: bool) -> String {
    let cursor = if is_active {
        format!("{} ", Icon::Cursor.colored(color, unicode))
    } else {
        " ".repeat(Icon::Cursor.render(unicode).width() + 1)
    };
    let indent = "  ".repeat(row.depth);

    let state_icon = match row.state {
        SelectionState::Selected => Icon::Selected,
        SelectionState::Unselected => Icon::Unselected,
        SelectionState::Partial => Icon::Partial,
    }
    .colored(color, unicode);

    let expand_icon = match (row.has_children, row.expanded) {
        (false, _) => " ".repeat(Icon::Expanded.render(unicode).width()),
        (true, true) => Icon::Expanded.colored(color, unicode),
        (true, false) => Icon::Collapsed.colored(color, unicode),
    };

    let count_suffix = if row.has_children {
        ColoredText::dim(format!(" ({})", row.leaf_count)).render(color)
    } else {
        String::new()
    };

    format!(
        "{}{}{} {} {}{}",
        cursor, indent, expand_icon, state_icon, row.label, count_suffix
    )
}

/// Badge line for selected leaves, cut to `width` display columns
pub fn render_badges(badges: &[Badge], width: usize, unicode: bool) -> String {
    if badges.is_empty() {
        return String::from("(nothing selected)");
    }

    let remove = Icon::Remove.render(unicode);
    let line = badges
        .iter()
        .map(|badge| format!("[{} {}]", badge.label, remove))
        .collect::<Vec<_>>()
        .join(" ");
    truncate_to_width(&line, width, unicode)
}

/// Cut `text` to at most `width` columns, marking the cut with an ellipsis
pub fn truncate_to_width(text: &str, width: usize, unicode: bool) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let ellipsis = if unicode { "…" } else { "..." };
    let budget = width.saturating_sub(ellipsis.width());

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(ellipsis);
    out
}

/// Display path of the row under the cursor
pub fn render_breadcrumb(path: &str, unicode: bool, color: bool) -> String {
    let path = if unicode {
        path.replace(" > ", theme::path_separator(true))
    } else {
        path.to_string()
    };
    ColoredText::dim(path).render(color)
}

/// Render the status bar showing selection counts
pub fn render_status_bar(
    selected: usize,
    total: usize,
    stale: usize,
    dropped: bool,
    unicode: bool,
) -> String {
    let mut status = format!("Selected: {}/{} skills", selected, total);
    if stale > 0 {
        let fate = if dropped { "dropped" } else { "kept" };
        status.push_str(&format!(
            "  {} {} unknown id(s) {fate}",
            Icon::Warning.render(unicode),
            stale
        ));
    }
    format!(
        "{status}\n\n{} = selected    {} = partial    {} = not selected",
        Icon::Selected.render(unicode),
        Icon::Partial.render(unicode),
        Icon::Unselected.render(unicode),
    )
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar() -> String {
    String::from(
        "[Space] Toggle    [Tab] Expand    [x] Remove    [n] Clear    [Enter] Confirm    [q] Quit\n\
         (Use ↑↓ to navigate, →← to expand/collapse)",
    )
}
