//! Keyboard input handling and interactive loop.

use std::io::{self, Write};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::context::UiContext;
use crate::ui::primitives::text::{ColoredText, SemanticColor};

use super::menu::{Picker, PickerAction};

/// Lines used by everything except the tree itself
const CHROME_LINES: u16 = 13;

/// Convert a keyboard event to a PickerAction
pub fn key_to_action(key: KeyEvent) -> Option<PickerAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(PickerAction::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(PickerAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(PickerAction::Down),
        KeyCode::Char(' ') => Some(PickerAction::Toggle),
        KeyCode::Right | KeyCode::Char('l') => Some(PickerAction::Expand),
        KeyCode::Left | KeyCode::Char('h') => Some(PickerAction::Collapse),
        KeyCode::Tab => Some(PickerAction::ToggleExpansion),
        KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => Some(PickerAction::Remove),
        KeyCode::Char('n') => Some(PickerAction::Clear),
        KeyCode::Enter => Some(PickerAction::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(PickerAction::Quit),
        _ => None,
    }
}

/// First and one-past-last visible row so that `cursor` stays on screen
pub fn visible_window(len: usize, cursor: usize, height: usize) -> (usize, usize) {
    if len <= height || height == 0 {
        return (0, len);
    }
    let start = cursor.saturating_sub(height / 2).min(len - height);
    (start, start + height)
}

/// Restores the terminal even when rendering fails midway
struct RawModeGuard;

impl RawModeGuard {
    fn enter(out: &mut impl Write) -> io::Result<Self> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(out, crossterm::cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        use crossterm::{cursor, execute, terminal};

        let mut out = io::stdout();
        let _ = execute!(
            out,
            cursor::Show,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn render_ui(out: &mut impl Write, picker: &Picker, title: &str, ui: &UiContext) -> io::Result<()> {
    use crossterm::{cursor, execute, terminal};

    let (width, height) = terminal::size().unwrap_or((ui.caps.width, ui.caps.height));
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    let mut lines: Vec<String> = vec![
        ColoredText::new(title, SemanticColor::Info).bold().render(ui.color),
        picker.render_badges(usize::from(width), ui.unicode),
        String::new(),
    ];

    let tree = picker.render(ui.unicode, ui.color);
    let tree_lines: Vec<&str> = tree.lines().collect();
    let tree_height = usize::from(height.saturating_sub(CHROME_LINES).max(3));
    let (start, end) = visible_window(tree_lines.len(), picker.cursor_position(), tree_height);
    lines.extend(tree_lines[start..end].iter().map(|l| l.to_string()));

    lines.push(String::new());
    lines.push(picker.render_breadcrumb(ui.unicode, ui.color));
    lines.push("─".repeat(usize::from(width.min(64))));
    lines.extend(picker.render_status_bar(ui.unicode).lines().map(str::to_string));
    lines.push(String::new());
    lines.extend(picker.render_help_bar().lines().map(str::to_string));

    for line in lines {
        write!(out, "{}\r\n", line)?;
    }
    out.flush()
}

/// Run the picker interactively.
/// Returns the selected ids if confirmed, None if quit.
pub fn run_interactive(picker: &mut Picker, title: &str, ui: &UiContext) -> io::Result<Option<Vec<String>>> {
    use crossterm::event::{self, Event, KeyEventKind};

    let mut stdout = io::stdout();
    let _guard = RawModeGuard::enter(&mut stdout)?;

    render_ui(&mut stdout, picker, title, ui)?;

    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(action) = key_to_action(key) else {
                    continue;
                };
                match action {
                    PickerAction::Confirm => return Ok(Some(picker.engine().selected_ids())),
                    PickerAction::Quit => return Ok(None),
                    _ => {
                        picker.handle_action(action);
                    }
                }
                render_ui(&mut stdout, picker, title, ui)?;
            }
            Event::Resize(_, _) => render_ui(&mut stdout, picker, title, ui)?,
            _ => {}
        }
    }
}
