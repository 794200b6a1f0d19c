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

pub mod ui_components;
pub mod ui_widgets;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::App;
use crate::curve_ref::CurveReference;
use crate::raw_source::DisplayContext;
use ui_components::{render_curve_popup, render_kind_selector, render_preview, render_source_editor, render_status_bar};

pub fn ui(f: &mut Frame, app: &App, curve_ref: &CurveReference) {
    let size = f.area();

    // Layout: panels | status
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(1)])
        .split(size);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Length(20),
            Constraint::Min(30),
        ])
        .split(rows[0]);

    render_kind_selector(f, app, cols[0]);
    render_source_editor(f, app, cols[1]);
    render_preview(f, app, cols[2]);

    let ctx = DisplayContext { model: Some(&app.model), prefix_custom_name: true };
    let summary = format!(
        "{}({})",
        CurveReference::kind_to_string(curve_ref.kind.ordinal()),
        curve_ref.to_display_string(&ctx, false)
    );
    render_status_bar(f, app, &summary, rows[1]);

    if app.show_curve_popup {
        render_curve_popup(f, app, size);
    }
}
