use std::path::Path;

use skilltree::domain::entities::TreeStats;

use crate::ui::primitives::icon::Icon;

pub fn render_check_result(file: &Path, stats: &TreeStats, color: bool, unicode: bool) -> String {
    format!(
        "{} {}: {} root(s), {} node(s), {} leaf skill(s), depth {}\n",
        Icon::Success.colored(color, unicode),
        file.display(),
        stats.roots,
        stats.nodes,
        stats.leaves,
        stats.max_depth
    )
}
