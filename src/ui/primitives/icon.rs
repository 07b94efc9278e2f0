use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Cursor,
    Selected,
    Unselected,
    Partial,
    Expanded,
    Collapsed,
    Remove,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        use theme::{icons, icons_ascii};

        let (unicode, ascii) = match self {
            Icon::Success => (icons::SUCCESS, icons_ascii::SUCCESS),
            Icon::Error => (icons::ERROR, icons_ascii::ERROR),
            Icon::Warning => (icons::WARNING, icons_ascii::WARNING),
            Icon::Cursor => (icons::CURSOR, icons_ascii::CURSOR),
            Icon::Selected => (icons::SELECTED, icons_ascii::SELECTED),
            Icon::Unselected => (icons::UNSELECTED, icons_ascii::UNSELECTED),
            Icon::Partial => (icons::PARTIAL, icons_ascii::PARTIAL),
            Icon::Expanded => (icons::EXPAND, icons_ascii::EXPAND),
            Icon::Collapsed => (icons::COLLAPSE, icons_ascii::COLLAPSE),
            Icon::Remove => (icons::REMOVE, icons_ascii::REMOVE),
        };
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Selected => theme::colors::SUCCESS,
            Icon::Error | Icon::Remove => theme::colors::ERROR,
            Icon::Warning | Icon::Partial => theme::colors::WARNING,
            Icon::Cursor => theme::colors::INFO,
            Icon::Unselected | Icon::Expanded | Icon::Collapsed => theme::colors::DIM,
        };
        format!("{}", s.with(color))
    }
}
