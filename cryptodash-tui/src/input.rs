//! Keyboard input dispatch: overlays, then search mode, then global keys,
//! then page-specific keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use cryptodash_core::indicators::Indicator;

use crate::app::{AppState, InputMode, Overlay, Page};

/// Handle a key event. Clears `app.running` on quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Help | Overlay::ErrorHistory => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::Indicators => {
            handle_indicator_overlay(app, key);
            return;
        }
        Overlay::Goto(_) => {
            handle_goto_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Search mode edits the focused table's query.
    if app.mode == InputMode::Search {
        handle_search_key(app, key);
        return;
    }

    // 3. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char(c @ '1'..='5') => {
            if let Some(page) = Page::from_index(c as usize - '1' as usize) {
                app.set_page(page);
            }
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.set_page(app.page.prev());
            } else {
                app.set_page(app.page.next());
            }
            return;
        }
        KeyCode::BackTab => {
            app.set_page(app.page.prev());
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Char('E') => {
            app.overlay = Overlay::ErrorHistory;
            return;
        }
        KeyCode::Char('g') => {
            app.overlay = Overlay::Goto(String::new());
            return;
        }
        _ => {}
    }

    // 4. Table keys, on whichever table has focus.
    if app.focused_table().is_some() && handle_table_key(app, key) {
        return;
    }

    // 5. Page-specific keys.
    match app.page {
        Page::MarketOverview => handle_market_key(app, key),
        Page::Research => handle_research_key(app, key),
        _ => {}
    }
}

/// Returns true when the key was a table action.
fn handle_table_key(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('/') => {
            app.mode = InputMode::Search;
        }
        KeyCode::Char('s') => {
            app.cycle_sort(true);
        }
        KeyCode::Char('S') => {
            app.cycle_sort(false);
        }
        KeyCode::Char('r') => {
            app.with_focused(|t| t.reverse_sort());
        }
        KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => app.change_page(true),
        KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => app.change_page(false),
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char(' ') => app.toggle_cursor_selection(),
        KeyCode::Char('a') => {
            app.with_focused(|t| t.toggle_select_all());
        }
        KeyCode::Char('f') => app.cycle_facet(),
        KeyCode::Char('x') => {
            app.export_focused();
        }
        KeyCode::Char('o') => app.cycle_focus(),
        KeyCode::Esc => app.search_clear(),
        _ => return false,
    }
    true
}

fn handle_search_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.mode = InputMode::Normal,
        KeyCode::Esc => {
            app.search_clear();
            app.mode = InputMode::Normal;
        }
        KeyCode::Backspace => app.search_pop(),
        KeyCode::Char(c) => app.search_push(c),
        _ => {}
    }
}

fn handle_market_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('w') => app.toggle_watch(),
        KeyCode::Char('t') => app.cycle_ticker_tab(),
        KeyCode::Char('i') => app.overlay = Overlay::Indicators,
        _ => {}
    }
}

fn handle_research_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('e') => app.cycle_research_section(),
        KeyCode::Char('c') => app.cycle_column_set(),
        _ => {}
    }
}

fn handle_indicator_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('i') | KeyCode::Char('q') | KeyCode::Enter => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char(c @ '1'..='4') => {
            let indicator = Indicator::ALL[c as usize - '1' as usize];
            app.toggle_indicator(indicator);
        }
        _ => {}
    }
}

fn handle_goto_overlay(app: &mut AppState, key: KeyEvent) {
    let Overlay::Goto(input) = &mut app.overlay else { return };
    match key.code {
        KeyCode::Esc => app.overlay = Overlay::None,
        KeyCode::Enter => {
            let path = if input.starts_with('/') {
                input.clone()
            } else {
                format!("/{input}")
            };
            app.overlay = Overlay::None;
            app.navigate(&path);
        }
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Char(c) => input.push(c),
        _ => {}
    }
}
