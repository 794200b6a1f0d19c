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

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{Axis, Block, BorderType, Borders, Chart, Clear, Dataset, GraphType, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus};
use crate::raw_source::DisplayContext;

/// Helper function to create a centered rectangle for popups
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", title));
    if focused {
        block.border_style(Style::default().fg(Color::Cyan))
    } else {
        block
    }
}

pub fn render_kind_selector(f: &mut Frame, app: &App, area: Rect) {
    let block = panel("Curve", app.focus == Focus::Kind);
    let sel = app.selector.borrow();
    let items: Vec<ListItem> = sel
        .model
        .items()
        .iter()
        .enumerate()
        .map(|(row, item)| {
            let marker = if row == sel.current { "> " } else { "  " };
            let style = if row == sel.current {
                Style::default().bg(Color::Blue).fg(Color::White)
            } else {
                Style::default()
            };
            ListItem::new(format!("{}{}", marker, item.label)).style(style)
        })
        .collect();
    f.render_widget(List::new(items).block(block), area);
}

pub fn render_source_editor(f: &mut Frame, app: &App, area: Rect) {
    let block = panel("Value", app.focus == Focus::Source);
    let ed = app.editor.borrow();
    if !ed.visible {
        f.render_widget(block, area);
        return;
    }
    let ctx = DisplayContext::with_model(&app.model);
    let mode = if ed.uses_source() { "[x] source" } else { "[ ] source" };
    let lines = vec![
        Line::from(mode),
        Line::from(format!("{:>6}", ed.source.to_display_string(&ctx))),
        Line::from(format!("range {}..{}", ed.range.min, ed.range.max))
            .style(Style::default().fg(Color::DarkGray)),
    ];
    f.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_preview(f: &mut Frame, app: &App, area: Rect) {
    let p = app.preview.borrow();
    let title = match &p.drawn {
        Some(curve) if !curve.name.is_empty() => format!("CV{} {}", p.index.abs(), curve.name),
        _ => format!("CV{}", p.index.abs()),
    };
    let block = panel(&title, app.focus == Focus::Preview);
    if !p.visible {
        f.render_widget(block, area);
        return;
    }
    let Some(curve) = &p.drawn else {
        let msg = Paragraph::new("No such curve")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(msg, area);
        return;
    };

    // inverted references mirror the curve around the y axis
    let sign = if p.index < 0 { -1.0 } else { 1.0 };
    let mut data: Vec<(f64, f64)> = curve
        .points
        .iter()
        .map(|&(x, y)| (sign * x as f64, y as f64))
        .collect();
    data.sort_by(|a, b| a.0.total_cmp(&b.0));

    let (pen_color, pen_width) = p.pen;
    let mut style = Style::default().fg(pen_color);
    if pen_width > 2 {
        style = style.add_modifier(Modifier::BOLD);
    }
    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(style)
        .data(&data);
    let grid = Style::default().fg(p.grid.0);
    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(Axis::default().bounds([-100.0, 100.0]).style(grid).labels(vec!["-100", "0", "100"]))
        .y_axis(Axis::default().bounds([-100.0, 100.0]).style(grid).labels(vec!["-100", "0", "100"]));
    f.render_widget(chart, area);
}

pub fn render_status_bar(f: &mut Frame, app: &App, summary: &str, area: Rect) {
    let text = format!(" {} | {}", summary, app.status);
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::Black).bg(Color::Gray)),
        area,
    );
}

pub fn render_curve_popup(f: &mut Frame, app: &App, size: Rect) {
    let area = centered_rect(60, 60, size);
    let index = app.popup_curve_index;
    let title = match app.model.curve_name(index) {
        Some(name) => format!(" Curve {}: {} ", index.abs(), name),
        None => format!(" Curve {} ", index.abs()),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title);

    let mut lines: Vec<Line> = Vec::new();
    match app.model.curve(index) {
        Some(curve) => {
            if index < 0 {
                lines.push(Line::from("inverted").style(Style::default().fg(Color::Yellow)));
            }
            for (i, (x, y)) in curve.points.iter().enumerate() {
                lines.push(Line::from(format!("P{:<2} x={:>4}  y={:>4}", i + 1, x, y)));
            }
        }
        None => lines.push(Line::from("Curve not defined in this model")),
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Esc/Enter: close").style(Style::default().fg(Color::DarkGray)));

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}
