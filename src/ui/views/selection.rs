use skilltree::application::SessionSummary;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{ColoredText, SemanticColor};
use crate::ui::theme;

/// Selected ids, then one line per badge with its breadcrumb
pub fn render_selection(summary: &SessionSummary, color: bool, unicode: bool) -> String {
    let ids = if summary.selected.is_empty() {
        "-".to_string()
    } else {
        summary.selected.join(", ")
    };
    let mut out = format!("Selected ({}): {}\n", summary.selected.len(), ids);

    for badge in &summary.badges {
        let path = badge.path.replace(" > ", theme::path_separator(unicode));
        out.push_str(&format!(
            "  {} {}  {}\n",
            Icon::Selected.colored(color, unicode),
            badge.label,
            ColoredText::dim(path).render(color)
        ));
    }
    out
}

pub fn render_saved(count: usize, column: &str, record: &str, color: bool, unicode: bool) -> String {
    let message = format!("Saved {} id(s) to '{}' in {}", count, column, record);
    format!(
        "{} {}\n",
        Icon::Success.colored(color, unicode),
        ColoredText::new(message, SemanticColor::Success).render(color)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use skilltree::application::BadgeSummary;

    #[test]
    fn selection_lists_badges_with_paths() {
        let summary = SessionSummary {
            selected: vec!["web".into(), "react".into(), "vue".into()],
            badges: vec![
                BadgeSummary {
                    id: "react".into(),
                    label: "React".into(),
                    path: "Development > Web > React".into(),
                },
                BadgeSummary {
                    id: "vue".into(),
                    label: "Vue".into(),
                    path: "Development > Web > Vue".into(),
                },
            ],
            stale: Vec::new(),
        };

        insta::assert_snapshot!(render_selection(&summary, false, false), @r"
        Selected (3): web, react, vue
          [x] React  Development > Web > React
          [x] Vue  Development > Web > Vue
        ");
    }

    #[test]
    fn empty_selection_shows_dash() {
        let summary = SessionSummary {
            selected: Vec::new(),
            badges: Vec::new(),
            stale: Vec::new(),
        };
        assert_eq!(render_selection(&summary, false, true), "Selected (0): -\n");
    }

    #[test]
    fn saved_message() {
        assert_eq!(
            render_saved(2, "skills", "profile.json", false, true),
            "✓ Saved 2 id(s) to 'skills' in profile.json\n"
        );
    }
}
