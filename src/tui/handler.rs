//! Keyboard handling for the TUI
//!
//! Routes key events by focus: the delete confirmation captures everything
//! while open, Ctrl chords work everywhere, and the rest depends on whether
//! the form or the ledger panel is active.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, Pane, SearchField};
use super::event::Event;

/// Apply one terminal event to the app state
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) => {}
        Event::Tick => app.tick(),
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // The confirmation dialog captures all input while open
    if app.pending_delete.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
            _ => {}
        }
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('s') => app.save(),
            KeyCode::Char('n') => app.new_draft(),
            KeyCode::Char('e') => app.export_csv(),
            _ => {}
        }
        return;
    }

    match app.pane {
        Pane::Form => handle_form_key(app, key),
        Pane::Ledger => handle_ledger_key(app, key),
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.pane = Pane::Ledger,
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => app.move_form_focus(true),
        KeyCode::BackTab | KeyCode::Up => app.move_form_focus(false),
        KeyCode::Backspace => app.apply_backspace(),
        KeyCode::Char(c) => app.apply_char(c),
        _ => {}
    }
}

fn handle_ledger_key(app: &mut App, key: KeyEvent) {
    // While a search input is active, characters edit the query
    if let Some(field) = app.search_field {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => app.search_field = None,
            KeyCode::Char('/') => app.search_field = Some(field.next()),
            KeyCode::Backspace => {
                search_term_mut(app, field).pop();
                app.clamp_selection();
            }
            KeyCode::Char(c) => {
                search_term_mut(app, field).push(c);
                app.clamp_selection();
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Tab => app.pane = Pane::Form,
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(false),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(true),
        KeyCode::Enter | KeyCode::Char('e') => app.edit_selected(),
        KeyCode::Char('d') => app.request_delete(),
        KeyCode::Char('n') => app.new_draft(),
        KeyCode::Char('x') => app.export_csv(),
        KeyCode::Char('/') => app.search_field = Some(SearchField::Name),
        _ => {}
    }
}

fn search_term_mut(app: &mut App, field: SearchField) -> &mut String {
    match field {
        SearchField::Name => &mut app.query.name,
        SearchField::House => &mut app.query.house,
        SearchField::ReceiptNo => &mut app.query.receipt_no,
    }
}
