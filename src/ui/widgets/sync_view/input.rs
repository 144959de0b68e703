//! Keyboard input handling and the interactive loop.
//!
//! Keys are mapped to navigation actions, fed through `reduce`, and the
//! resulting state is projected and drawn. Nothing here decides what a key
//! does to the trees.

use std::io::{self, Stdout, Write};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::{Print, PrintStyledContent};
use crossterm::{cursor, queue, terminal};

use crate::application::{reduce, Action, Comparison, Presentation, ViewState};
use crate::ui::context::UiContext;
use crate::ui::terminal::TerminalSize;

use super::frame::Frame;
use super::render::{project, FrameContext};

/// Convert a keyboard event to a navigation action
pub fn key_to_action(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::ToggleExpand),
        KeyCode::Char('d') => Some(Action::JumpToDiff),
        KeyCode::Tab => Some(Action::SwitchFocus),
        KeyCode::Left => Some(Action::FocusLeft),
        KeyCode::Right => Some(Action::FocusRight),
        KeyCode::Char('h') | KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Restores the terminal when dropped, including on early return or panic.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(stdout: &mut Stdout) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = TerminalGuard;
        crossterm::execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = crossterm::execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn draw(stdout: &mut Stdout, frame: &Frame, color: bool) -> io::Result<()> {
    for (row, line) in frame.lines.iter().enumerate() {
        queue!(stdout, cursor::MoveTo(0, row as u16))?;
        for span in &line.spans {
            if color {
                queue!(
                    stdout,
                    PrintStyledContent(span.tone.style().apply(span.text.as_str()))
                )?;
            } else {
                queue!(stdout, Print(&span.text))?;
            }
        }
    }
    stdout.flush()
}

/// Run the two-panel viewer until the user quits
pub fn run_interactive(
    comparison: &Comparison,
    presentation: Presentation,
    ui: &UiContext,
) -> io::Result<()> {
    use crossterm::event::{self, Event, KeyEventKind};

    let ctx = FrameContext {
        source_label: comparison.source_root.display().to_string(),
        target_label: comparison.target_root.display().to_string(),
        summary: comparison.summary(),
        unicode: ui.unicode,
    };
    let mut state = ViewState::new(comparison.tree.clone(), presentation);

    let mut stdout = io::stdout();
    let _guard = TerminalGuard::enter(&mut stdout)?;
    tracing::debug!(?presentation, "interactive viewer started");

    let TerminalSize {
        mut width,
        mut height,
    } = TerminalSize::query();
    queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
    draw(&mut stdout, &project(&state, &ctx, width, height), ui.color)?;

    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(action) = key_to_action(key) else {
                    continue;
                };
                state = reduce(state, action);
                if state.should_quit() {
                    break;
                }
            }
            Event::Resize(w, h) => {
                width = w;
                height = h;
                queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
            }
            _ => continue,
        }
        draw(&mut stdout, &project(&state, &ctx, width, height), ui.color)?;
    }

    Ok(())
}
