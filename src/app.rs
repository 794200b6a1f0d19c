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

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::bus::{CurveRefEvent, EventBus};
use crate::controller::Collaborators;
use crate::model::ModelData;
use crate::raw_source::{RawSource, SourceType};
use crate::ui::ui_widgets::{
    emit_source_edit, select_row, PreviewState, SelectorState, SourceEditorState, TuiCurvePreview,
    TuiKindSelector, TuiLayout, TuiSourceEditor,
};

pub const STATUS_HELP: &str =
    "Tab: focus | ↑/↓: change | s: value/source | i: invert | Enter: edit curve | q: quit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Focus {
    Kind,
    Source,
    Preview,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Kind => Focus::Source,
            Focus::Source => Focus::Preview,
            Focus::Preview => Focus::Kind,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Kind => Focus::Preview,
            Focus::Source => Focus::Kind,
            Focus::Preview => Focus::Source,
        }
    }
}

pub struct App {
    pub model: ModelData,
    pub bus: EventBus,
    pub focus: Focus,
    pub status: String,
    pub selector: Rc<RefCell<SelectorState>>,
    pub editor: Rc<RefCell<SourceEditorState>>,
    pub preview: Rc<RefCell<PreviewState>>,
    pub resized: Rc<Cell<bool>>,
    // curve details popup, opened by an edit request from the preview
    pub show_curve_popup: bool,
    pub popup_curve_index: i32,
}

impl App {
    pub fn new(model: ModelData, bus: EventBus) -> Self {
        Self {
            model,
            bus,
            focus: Focus::Kind,
            status: STATUS_HELP.to_string(),
            selector: Rc::new(RefCell::new(SelectorState::default())),
            editor: Rc::new(RefCell::new(SourceEditorState::default())),
            preview: Rc::new(RefCell::new(PreviewState::default())),
            resized: Rc::new(Cell::new(false)),
            show_curve_popup: false,
            popup_curve_index: 0,
        }
    }

    /// Widget handles for a controller; they share state with this app.
    pub fn collaborators(&self) -> Collaborators<'static> {
        Collaborators {
            editor: Box::new(TuiSourceEditor::new(self.editor.clone())),
            selector: Some(Box::new(TuiKindSelector::new(self.selector.clone(), self.bus.clone()))),
            preview: Some(Box::new(TuiCurvePreview::new(self.preview.clone(), self.model.curves.clone()))),
            layout: Some(Box::new(TuiLayout::new(self.resized.clone()))),
        }
    }

    pub fn take_resized(&self) -> bool {
        self.resized.replace(false)
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn select_kind_step(&mut self, delta: i32) {
        let (current, len) = {
            let s = self.selector.borrow();
            (s.current as i32, s.model.len() as i32)
        };
        if len == 0 {
            return;
        }
        let row = (current + delta).clamp(0, len - 1) as usize;
        select_row(&self.selector, &self.bus, row);
    }

    pub fn step_source(&mut self, delta: i32) {
        let next = self.editor.borrow().stepped(delta);
        emit_source_edit(&self.editor, &self.bus, next);
    }

    pub fn toggle_use_source(&mut self) {
        let next = self.editor.borrow().toggled();
        emit_source_edit(&self.editor, &self.bus, next);
    }

    /// Move the previewed curve to the next/previous slot, keeping the inversion sign.
    pub fn step_curve(&mut self, delta: i32) {
        let Some(index) = self.visible_preview_index() else { return };
        let max = self.model.curves.len().max(1) as i32;
        let n = (index.abs() + delta).clamp(1, max);
        let signed = if index < 0 { -n } else { n };
        if signed != index {
            self.bus.emit(CurveRefEvent::SourceEdited(RawSource::new(SourceType::Curve, signed)));
        }
    }

    pub fn invert_curve(&mut self) {
        let Some(index) = self.visible_preview_index() else { return };
        self.bus.emit(CurveRefEvent::SourceEdited(RawSource::new(SourceType::Curve, -index)));
    }

    pub fn double_click_preview(&mut self) {
        if self.preview.borrow().visible {
            self.bus.emit(CurveRefEvent::PreviewDoubleClicked);
        }
    }

    fn visible_preview_index(&self) -> Option<i32> {
        let p = self.preview.borrow();
        p.visible.then_some(p.index)
    }

    /// Pick up requests the widgets raised while the controller ran.
    pub fn after_dispatch(&mut self) {
        let requested = self.preview.borrow_mut().edit_requested.take();
        if let Some(index) = requested {
            self.popup_curve_index = index;
            self.show_curve_popup = true;
            self.status = format!("Editing curve {} (Esc to close)", index.abs());
        }
    }

    pub fn close_popup(&mut self) {
        self.show_curve_popup = false;
        self.status = STATUS_HELP.to_string();
    }
}
