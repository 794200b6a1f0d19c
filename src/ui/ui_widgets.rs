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

//! Terminal widgets backing the controller's collaborator traits.
//!
//! Each widget is a thin handle over shared state: the controller owns the handle,
//! the renderer and the key handler read and write the same state.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ratatui::style::Color;

use crate::bus::{CurveRefEvent, EventBus};
use crate::controller::{CurvePreview, KindSelector, LayoutHost, SourceEditor, ValueRange};
use crate::item_model::ItemModel;
use crate::model::CurveData;
use crate::raw_source::{RawSource, SourceType};

#[derive(Debug, Default)]
pub struct SelectorState {
    pub model: ItemModel,
    pub current: usize,
}

pub struct TuiKindSelector {
    state: Rc<RefCell<SelectorState>>,
    bus: EventBus,
}

impl TuiKindSelector {
    pub fn new(state: Rc<RefCell<SelectorState>>, bus: EventBus) -> Self {
        Self { state, bus }
    }
}

/// Move the selection as the user would; emits only when the row changes.
pub fn select_row(state: &RefCell<SelectorState>, bus: &EventBus, row: usize) {
    let mut s = state.borrow_mut();
    if row >= s.model.len() || row == s.current {
        return;
    }
    s.current = row;
    bus.emit(CurveRefEvent::KindSelected(row));
}

impl KindSelector for TuiKindSelector {
    fn set_model(&mut self, model: ItemModel) {
        let mut s = self.state.borrow_mut();
        s.model = model;
        s.current = 0;
    }

    fn set_current_value(&mut self, value: i32) {
        let row = self.state.borrow().model.find_value(value);
        if let Some(row) = row {
            select_row(&self.state, &self.bus, row);
        }
    }

    fn item_value(&self, row: usize) -> Option<i32> {
        self.state.borrow().model.value_at(row)
    }
}

#[derive(Debug)]
pub struct SourceEditorState {
    pub visible: bool,
    pub locked: bool,
    pub range: ValueRange,
    pub source: RawSource,
}

impl Default for SourceEditorState {
    fn default() -> Self {
        Self {
            visible: false,
            locked: false,
            range: ValueRange { default: 0, min: -100, max: 100, step: 1 },
            source: RawSource::default(),
        }
    }
}

impl SourceEditorState {
    pub fn uses_source(&self) -> bool {
        self.source.kind != SourceType::None
    }

    /// The source one step away from the current one.
    pub fn stepped(&self, delta: i32) -> RawSource {
        let s = self.source;
        match s.kind {
            SourceType::None => {
                let v = s.index.saturating_add(delta.saturating_mul(self.range.step));
                RawSource::value(v.clamp(self.range.min, self.range.max))
            }
            kind => RawSource::new(kind, s.index.saturating_add(delta).max(1)),
        }
    }

    /// Switch between a plain value and a source reference.
    pub fn toggled(&self) -> RawSource {
        if self.uses_source() {
            RawSource::value(self.range.default)
        } else {
            RawSource::new(SourceType::Input, 1)
        }
    }
}

/// Report a user edit. Dropped while the editor is hidden or locked.
pub fn emit_source_edit(state: &RefCell<SourceEditorState>, bus: &EventBus, source: RawSource) {
    let s = state.borrow();
    if !s.visible || s.locked || s.source == source {
        return;
    }
    bus.emit(CurveRefEvent::SourceEdited(source));
}

pub struct TuiSourceEditor {
    state: Rc<RefCell<SourceEditorState>>,
}

impl TuiSourceEditor {
    pub fn new(state: Rc<RefCell<SourceEditorState>>) -> Self {
        Self { state }
    }
}

impl SourceEditor for TuiSourceEditor {
    fn configure(&mut self, range: ValueRange) {
        self.state.borrow_mut().range = range;
    }

    fn set_visible(&mut self, visible: bool) {
        self.state.borrow_mut().visible = visible;
    }

    fn update(&mut self, source: &RawSource) {
        self.state.borrow_mut().source = *source;
    }

    fn set_lock(&mut self, lock: bool) {
        self.state.borrow_mut().locked = lock;
    }
}

#[derive(Debug)]
pub struct PreviewState {
    pub visible: bool,
    pub index: i32,
    pub pen: (Color, u16),
    pub grid: (Color, u16),
    /// Curve captured by the last draw request.
    pub drawn: Option<CurveData>,
    pub draws: u64,
    /// Set by `edit`, taken by the host.
    pub edit_requested: Option<i32>,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self {
            visible: false,
            index: 0,
            pen: (Color::Black, 3),
            grid: (Color::Gray, 2),
            drawn: None,
            draws: 0,
            edit_requested: None,
        }
    }
}

pub struct TuiCurvePreview {
    state: Rc<RefCell<PreviewState>>,
    curves: Vec<CurveData>,
}

impl TuiCurvePreview {
    pub fn new(state: Rc<RefCell<PreviewState>>, curves: Vec<CurveData>) -> Self {
        Self { state, curves }
    }
}

impl CurvePreview for TuiCurvePreview {
    fn init(&mut self, index: i32, color: Color, width: u16) {
        let mut s = self.state.borrow_mut();
        s.index = index;
        s.pen = (color, width);
    }

    fn set_grid(&mut self, color: Color, width: u16) {
        self.state.borrow_mut().grid = (color, width);
    }

    fn set_index(&mut self, index: i32) {
        self.state.borrow_mut().index = index;
    }

    fn set_pen(&mut self, color: Color, width: u16) {
        self.state.borrow_mut().pen = (color, width);
    }

    fn set_visible(&mut self, visible: bool) {
        self.state.borrow_mut().visible = visible;
    }

    fn draw(&mut self) {
        let mut s = self.state.borrow_mut();
        let idx = s.index.unsigned_abs() as usize;
        s.drawn = idx.checked_sub(1).and_then(|i| self.curves.get(i)).cloned();
        s.draws += 1;
    }

    fn edit(&mut self) {
        let mut s = self.state.borrow_mut();
        s.edit_requested = Some(s.index);
    }
}

pub struct TuiLayout {
    resized: Rc<Cell<bool>>,
}

impl TuiLayout {
    pub fn new(resized: Rc<Cell<bool>>) -> Self {
        Self { resized }
    }
}

impl LayoutHost for TuiLayout {
    fn resized(&mut self) {
        self.resized.set(true);
    }
}
