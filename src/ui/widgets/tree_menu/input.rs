//! Keyboard input handling and interactive loop.

use std::io::{self, Write};

use crossterm::event::KeyEvent;

use tagtree::SelectionSet;

use super::menu::{TreeAction, TreeMenu};
use crate::ui::theme::{icons, icons_ascii};

/// Convert a keyboard event to a TreeAction
pub fn key_to_action(key: KeyEvent) -> Option<TreeAction> {
    use crossterm::event::{KeyCode, KeyModifiers};

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(TreeAction::Quit)
        }
        KeyCode::Up | KeyCode::Char('k') => Some(TreeAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(TreeAction::Down),
        KeyCode::Char(' ') => Some(TreeAction::Toggle),
        KeyCode::Right | KeyCode::Char('l') => Some(TreeAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(TreeAction::Collapse),
        KeyCode::Char('a') => Some(TreeAction::SelectAll),
        KeyCode::Char('n') => Some(TreeAction::SelectNone),
        KeyCode::Enter => Some(TreeAction::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(TreeAction::Quit),
        _ => None,
    }
}

/// Run the tree menu interactively.
///
/// Returns the selection if confirmed, None if quit. The terminal is
/// restored even when drawing or reading input fails.
pub fn run_interactive(
    menu: &mut TreeMenu<'_>,
    supports_unicode: bool,
    width: u16,
) -> io::Result<Option<SelectionSet>> {
    use crossterm::{cursor, execute, terminal};

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    let result =
        execute!(stdout, cursor::Hide).and_then(|_| event_loop(menu, supports_unicode, width));

    let restore = execute!(
        stdout,
        cursor::Show,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    );
    terminal::disable_raw_mode()?;
    restore?;

    result
}

fn event_loop(
    menu: &mut TreeMenu<'_>,
    supports_unicode: bool,
    width: u16,
) -> io::Result<Option<SelectionSet>> {
    use crossterm::event::{self, Event, KeyEventKind};

    let mut stdout = io::stdout();
    draw(&mut stdout, menu, supports_unicode, width)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key_to_action(key) {
            Some(TreeAction::Confirm) => return Ok(Some(menu.selection().clone())),
            Some(TreeAction::Quit) => return Ok(None),
            Some(action) => {
                menu.handle_action(action);
                draw(&mut stdout, menu, supports_unicode, width)?;
            }
            None => {}
        }
    }
}

fn draw(
    stdout: &mut io::Stdout,
    menu: &TreeMenu<'_>,
    supports_unicode: bool,
    width: u16,
) -> io::Result<()> {
    use crossterm::{cursor, execute, terminal};

    execute!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    let separator = if supports_unicode {
        icons::SEPARATOR
    } else {
        icons_ascii::SEPARATOR
    };

    // Raw mode needs explicit carriage returns.
    let mut screen = String::from("Tag selection\r\n\r\n");
    for part in [
        menu.render(supports_unicode),
        separator.repeat(usize::from(width.clamp(20, 80))),
        menu.render_status_bar(supports_unicode),
        String::new(),
        menu.render_help_bar(),
    ] {
        for line in part.lines() {
            screen.push_str(line);
            screen.push_str("\r\n");
        }
        if part.is_empty() {
            screen.push_str("\r\n");
        }
    }

    stdout.write_all(screen.as_bytes())?;
    stdout.flush()
}
