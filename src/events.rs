/*
 * This file is part of Curveref.
 *
 * Copyright (C) 2025 Curveref contributors
 *
 * Curveref is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Curveref is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Curveref. If not, see <https://www.gnu.org/licenses/>.
 */

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Focus};

/// Main event handler that processes keyboard input. Returns true to quit.
pub fn handle_key_event(app: &mut App, key_event: KeyEvent) -> anyhow::Result<bool> {
    let KeyEvent { code, modifiers, .. } = key_event;

    // Popups take every key while open
    if app.show_curve_popup {
        if matches!(code, KeyCode::Esc | KeyCode::Enter) {
            app.close_popup();
        }
        return Ok(false);
    }

    match code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Up | KeyCode::Down => {
            let delta = if code == KeyCode::Up { -1 } else { 1 };
            handle_step(app, delta);
        }
        KeyCode::PageUp => handle_step(app, -10),
        KeyCode::PageDown => handle_step(app, 10),
        KeyCode::Char('s') if app.focus == Focus::Source => app.toggle_use_source(),
        KeyCode::Char('i') if app.focus == Focus::Preview => app.invert_curve(),
        KeyCode::Enter if app.focus == Focus::Preview => app.double_click_preview(),
        _ => {}
    }
    Ok(false)
}

fn handle_step(app: &mut App, delta: i32) {
    match app.focus {
        // list order: up moves to the previous kind
        Focus::Kind => app.select_kind_step(delta.signum()),
        // values grow upwards
        Focus::Source => app.step_source(-delta),
        Focus::Preview => app.step_curve(delta.signum()),
    }
}
