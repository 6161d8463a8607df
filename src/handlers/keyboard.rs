//! Keyboard Input Handler
//!
//! Handles all keyboard input and user interactions.
//! Input is routed by mode: search input first, then the detail popup,
//! then the regular list keys.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use friendstui::model::VimCommandState;
use friendstui::{logic, Tab};

use crate::App;

/// Handle keyboard input
///
/// Processes all keyboard events and dispatches to appropriate actions.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Update last user action timestamp for idle detection
    app.model.record_user_action();

    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return Ok(());
    }

    // Search input captures printable keys
    if app.model.ui.search_mode {
        match key.code {
            KeyCode::Esc => app.cancel_search(),
            KeyCode::Enter => app.accept_search(),
            KeyCode::Backspace => app.search_backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.search_input_char(c)
            }
            _ => {}
        }
        return Ok(());
    }

    // Detail popup: actions on the shown person, anything else closes it
    if app.model.ui.detail_popup.is_some() {
        match key.code {
            KeyCode::Char('a') => app.accept_selected(),
            KeyCode::Char('x') => app.decline_selected(),
            KeyCode::Char('c') => app.connect_selected(),
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_detail()
            }
            _ => {}
        }
        return Ok(());
    }

    // Vim 'gg' needs two presses
    if app.model.ui.vim_mode {
        if key.code == KeyCode::Char('g') {
            if app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG {
                app.model.ui.vim_command_state = VimCommandState::None;
                app.jump_to_first();
            } else {
                app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
            }
            return Ok(());
        }
        app.model.ui.vim_command_state = VimCommandState::None;
    }

    let vim_mode = app.model.ui.vim_mode;

    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
        }

        // ===== SEARCH =====
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.start_search()
        }
        KeyCode::Esc => app.clear_search_text(),

        // ===== TABS =====
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.previous_tab(),
        KeyCode::Char(digit @ '1'..='9') => {
            if let Some(tab) = logic::ui::tab_for_digit(digit) {
                app.select_tab(tab);
            }
        }

        // ===== MOVEMENT =====
        KeyCode::Down => app.next_item(),
        KeyCode::Up => app.previous_item(),
        KeyCode::Char('j') if vim_mode => app.next_item(),
        KeyCode::Char('k') if vim_mode => app.previous_item(),
        KeyCode::Home => app.jump_to_first(),
        KeyCode::End => app.jump_to_last(),
        KeyCode::Char('G') if vim_mode => app.jump_to_last(),

        // ===== DETAILS / REMOTE SEARCH =====
        KeyCode::Enter => {
            if app.model.current_tab() == Tab::Search {
                app.run_remote_search();
            } else {
                app.open_detail();
            }
        }
        KeyCode::Char('?') => app.open_detail(),

        // ===== SORT =====
        KeyCode::Char('s') => app.cycle_sort_mode(),
        KeyCode::Char('S') => app.toggle_sort_reverse(),

        // ===== FILTERS =====
        KeyCode::Char('d') => app.cycle_department_filter(),
        KeyCode::Char('f') => app.cycle_status_filter(),
        KeyCode::Char('K') => app.cycle_skill_filter(),
        KeyCode::Char('m') => app.cycle_mentorship_filter(),
        KeyCode::Char('C') => app.clear_filters(),

        // ===== CONNECTION ACTIONS =====
        KeyCode::Char('a') => app.accept_selected(),
        KeyCode::Char('x') => app.decline_selected(),
        KeyCode::Char('c') => app.connect_selected(),

        KeyCode::Char('r') => app.manual_refresh(),

        _ => {}
    }

    Ok(())
}
