mod app;
mod components;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use pwref_catalog::Catalog;

use crate::clipboard::ClipboardBridge;
use crate::config::Config;

use app::{AppState, CopyOutcome, InputMode, Screen};

pub(crate) fn run(catalog: &Catalog, config: &Config) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let mut state = AppState::new(
        catalog.categories.len(),
        catalog.workflows.len(),
        config.default_view,
        config.default_protocol,
    );
    // One bridge for the whole session. None means a headless host; every
    // copy then reports a Failed acknowledgment instead of erroring out.
    let mut clipboard = ClipboardBridge::new().ok();
    let mut should_quit = false;

    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    while !should_quit {
        terminal.draw(|f| ui::draw(f, &state, catalog))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match state.input_mode {
                    InputMode::Search => match key.code {
                        KeyCode::Esc => state.cancel_search(),
                        KeyCode::Enter => state.commit_search(),
                        KeyCode::Backspace => state.search_backspace(),
                        KeyCode::Char(c) => state.search_push(c),
                        _ => {}
                    },
                    InputMode::Normal => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            should_quit = true;
                        }
                        KeyCode::Char('1') => state.set_screen(Screen::Commands),
                        KeyCode::Char('2') => state.set_screen(Screen::Compare),
                        KeyCode::Char('3') => state.set_screen(Screen::Workflows),
                        KeyCode::Char('4') => state.set_screen(Screen::Setup),
                        KeyCode::Char('/') => state.enter_search(),
                        KeyCode::Char('v') => {
                            if state.screen == Screen::Commands {
                                state.toggle_view();
                            }
                        }
                        KeyCode::Left | KeyCode::Char('h') => {
                            if state.screen == Screen::Commands {
                                state.select_previous_category();
                            }
                        }
                        KeyCode::Right | KeyCode::Char('l') => {
                            if state.screen == Screen::Commands {
                                state.select_next_category();
                            }
                        }
                        KeyCode::Down | KeyCode::Char('j') => match state.screen {
                            Screen::Workflows => state.select_next_workflow(),
                            _ => state.scroll_down(),
                        },
                        KeyCode::Up | KeyCode::Char('k') => match state.screen {
                            Screen::Workflows => state.select_previous_workflow(),
                            _ => state.scroll_up(),
                        },
                        KeyCode::Enter => {
                            if state.screen == Screen::Workflows {
                                if let Some(workflow) =
                                    catalog.workflows.get(state.workflow_cursor)
                                {
                                    state.toggle_workflow(&workflow.id);
                                }
                            }
                        }
                        KeyCode::Tab => {
                            if state.screen == Screen::Workflows {
                                if let Some(workflow) =
                                    catalog.workflows.get(state.workflow_cursor)
                                {
                                    state.cycle_tab(&workflow.id);
                                }
                            }
                        }
                        KeyCode::Char('y') => {
                            if state.screen == Screen::Workflows {
                                copy_selected_sample(catalog, &mut state, clipboard.as_mut());
                            }
                        }
                        _ => {}
                    },
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            state.on_tick(Instant::now());
            last_tick = Instant::now();
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Copy the visible code sample of the selected (and expanded) workflow,
/// recording a per-workflow acknowledgment either way. Clipboard trouble
/// never interrupts the session.
fn copy_selected_sample(
    catalog: &Catalog,
    state: &mut AppState,
    clipboard: Option<&mut ClipboardBridge>,
) {
    let Some(workflow) = catalog.workflows.get(state.workflow_cursor) else {
        return;
    };
    if !state.is_expanded(&workflow.id) {
        return;
    }

    let protocol = state.active_tab(&workflow.id);
    let code = &workflow.sample(protocol).code;
    let outcome = match clipboard {
        Some(bridge) => match bridge.copy_text(code) {
            Ok(()) => CopyOutcome::Copied,
            Err(_) => CopyOutcome::Failed,
        },
        None => CopyOutcome::Failed,
    };
    state.mark_copy(&workflow.id, outcome, Instant::now());
}
