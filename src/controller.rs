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

//! Keeps a kind selector, a numeric-source editor and a curve preview in sync with
//! one `CurveReference`.
//!
//! | kind                  | source editor | preview |
//! |-----------------------|---------------|---------|
//! | Difference / Expo     | shown         | hidden  |
//! | Function              | hidden        | hidden  |
//! | Custom, curve source  | hidden        | shown   |
//! | Custom, other source  | hidden        | hidden  |

use std::cell::Cell;
use std::rc::Rc;

use ratatui::style::Color;
use serde_json::json;

use crate::bus::{CurveRefEvent, EventBus};
use crate::config::Settings;
use crate::curve_ref::{CurveRefKind, CurveReference};
use crate::item_model::ItemModel;
use crate::logger::log_event;
use crate::raw_source::{RawSource, SourceType};

/// Pen used when a curve index has no color slot.
pub const DEFAULT_PEN_COLOR: Color = Color::Black;

/// Range of the numeric-source editor in value mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ValueRange {
    pub default: i32,
    pub min: i32,
    pub max: i32,
    pub step: i32,
}

impl ValueRange {
    pub fn from_settings(s: &Settings) -> Self {
        Self { default: 0, min: s.value_min, max: s.value_max, step: s.value_step }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait SourceEditor {
    fn configure(&mut self, range: ValueRange);
    fn set_visible(&mut self, visible: bool);
    /// Re-read the source from the model.
    fn update(&mut self, source: &RawSource);
    /// While locked the editor must not report its own changes.
    fn set_lock(&mut self, lock: bool);
}

#[cfg_attr(test, mockall::automock)]
pub trait CurvePreview {
    fn init(&mut self, index: i32, color: Color, width: u16);
    fn set_grid(&mut self, color: Color, width: u16);
    fn set_index(&mut self, index: i32);
    fn set_pen(&mut self, color: Color, width: u16);
    fn set_visible(&mut self, visible: bool);
    fn draw(&mut self);
    /// Open the curve editor for the current index.
    fn edit(&mut self);
}

#[cfg_attr(test, mockall::automock)]
pub trait KindSelector {
    fn set_model(&mut self, model: ItemModel);
    /// Select the row carrying `value`.
    fn set_current_value(&mut self, value: i32);
    fn item_value(&self, row: usize) -> Option<i32>;
}

#[cfg_attr(test, mockall::automock)]
pub trait LayoutHost {
    fn resized(&mut self);
}

/// Widgets driven by a controller. Only the source editor is mandatory.
pub struct Collaborators<'a> {
    pub editor: Box<dyn SourceEditor + 'a>,
    pub selector: Option<Box<dyn KindSelector + 'a>>,
    pub preview: Option<Box<dyn CurvePreview + 'a>>,
    pub layout: Option<Box<dyn LayoutHost + 'a>>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Visibility {
    pub source_editor: bool,
    pub preview: bool,
}

pub fn visibility(cr: &CurveReference) -> Visibility {
    match cr.kind {
        CurveRefKind::Difference | CurveRefKind::Expo => {
            Visibility { source_editor: true, preview: false }
        }
        CurveRefKind::Function => Visibility { source_editor: false, preview: false },
        CurveRefKind::Custom => Visibility {
            source_editor: false,
            preview: cr.source.kind == SourceType::Curve,
        },
    }
}

/// Pen color for a signed, 1-based curve index.
pub fn pen_color(index: i32, colors: &[Color], max_curves: u32) -> Color {
    let n = index.unsigned_abs();
    if n == 0 || n > max_curves {
        return DEFAULT_PEN_COLOR;
    }
    colors.get(n as usize - 1).copied().unwrap_or(DEFAULT_PEN_COLOR)
}

/// Sets the flag for its lifetime and restores the previous state on drop.
struct LockGuard {
    flag: Rc<Cell<bool>>,
    previous: bool,
}

impl LockGuard {
    fn engage(flag: &Rc<Cell<bool>>) -> Self {
        let previous = flag.replace(true);
        Self { flag: Rc::clone(flag), previous }
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        self.flag.set(self.previous);
    }
}

pub struct CurveReferenceController<'a> {
    curve_ref: &'a mut CurveReference,
    widgets: Collaborators<'a>,
    bus: EventBus,
    settings: Settings,
    lock: Rc<Cell<bool>>,
    suppressed: usize,
}

impl<'a> CurveReferenceController<'a> {
    pub fn new(
        curve_ref: &'a mut CurveReference,
        mut widgets: Collaborators<'a>,
        bus: EventBus,
        settings: Settings,
    ) -> Self {
        let mark = bus.mark();
        widgets.editor.configure(ValueRange::from_settings(&settings));
        if let Some(selector) = widgets.selector.as_mut() {
            selector.set_model(CurveReference::kind_item_model());
            selector.set_current_value(curve_ref.kind.ordinal());
        }
        if let Some(preview) = widgets.preview.as_mut() {
            preview.init(curve_ref.source.index, DEFAULT_PEN_COLOR, settings.pen_width);
            preview.set_grid(settings.grid_color, settings.grid_width);
        }
        // not connected yet: whatever the widgets emitted while being set up is dropped
        bus.drain_since(mark);

        let mut controller = Self {
            curve_ref,
            widgets,
            bus,
            settings,
            lock: Rc::new(Cell::new(false)),
            suppressed: 0,
        };
        controller.update();
        controller
    }

    pub fn curve_ref(&self) -> &CurveReference {
        &*self.curve_ref
    }

    pub fn visibility(&self) -> Visibility {
        visibility(&*self.curve_ref)
    }

    pub fn is_locked(&self) -> bool {
        self.lock.get()
    }

    /// Signals ignored because they arrived during a programmatic update.
    pub fn suppressed_count(&self) -> usize {
        self.suppressed
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Push the model into every widget.
    pub fn update(&mut self) {
        let _guard = LockGuard::engage(&self.lock);
        let mark = self.bus.mark();

        self.widgets.editor.set_lock(true);
        self.sync_widgets();
        // signals raised by the widgets while they were being written to
        for event in self.bus.drain_since(mark) {
            self.dispatch(event);
        }
        self.widgets.editor.set_lock(false);
    }

    fn sync_widgets(&mut self) {
        let cr = *self.curve_ref;
        let vis = visibility(&cr);
        let color = pen_color(cr.source.index, &self.settings.curve_colors, self.settings.max_curves);
        let width = self.settings.pen_width;

        if let Some(selector) = self.widgets.selector.as_mut() {
            selector.set_current_value(cr.kind.ordinal());
        }

        self.widgets.editor.set_visible(vis.source_editor);
        if vis.source_editor {
            self.widgets.editor.update(&cr.source);
        }

        if let Some(preview) = self.widgets.preview.as_mut() {
            if vis.preview {
                preview.set_index(cr.source.index);
                preview.set_pen(color, width);
                preview.draw();
                preview.set_visible(true);
            } else {
                preview.set_visible(false);
            }
        }

        if let Some(layout) = self.widgets.layout.as_mut() {
            layout.resized();
        }
    }

    /// Dispatch everything queued on the bus. Returns the number of signals handled.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.bus.pop() {
            self.dispatch(event);
            handled += 1;
        }
        handled
    }

    pub fn dispatch(&mut self, event: CurveRefEvent) {
        match event {
            CurveRefEvent::KindSelected(row) => self.on_kind_selected(row),
            CurveRefEvent::SourceEdited(source) => self.on_source_edited(source),
            CurveRefEvent::PreviewDoubleClicked => self.on_preview_double_clicked(),
        }
    }

    fn suppress(&mut self, signal: &str) -> bool {
        if !self.lock.get() {
            return false;
        }
        self.suppressed += 1;
        log_event("signal_suppressed", json!({ "signal": signal }));
        true
    }

    /// Replaces the whole value with the default for the selected kind.
    pub fn on_kind_selected(&mut self, row: usize) {
        if self.suppress("kind_selected") {
            return;
        }
        let kind = self
            .widgets
            .selector
            .as_ref()
            .and_then(|s| s.item_value(row))
            .and_then(CurveRefKind::from_ordinal);
        let Some(kind) = kind else { return };

        *self.curve_ref = CurveReference::default_value(kind);
        log_event("kind_changed", json!({ "kind": kind, "source": self.curve_ref.source }));
        self.update();
    }

    pub fn on_source_edited(&mut self, source: RawSource) {
        if self.suppress("source_edited") {
            return;
        }
        self.curve_ref.source = source;
        log_event("source_edited", json!({ "source": source }));
        self.update();
    }

    pub fn on_preview_double_clicked(&mut self) {
        let cr = *self.curve_ref;
        if cr.kind != CurveRefKind::Custom || cr.source.index == 0 {
            return;
        }
        if let Some(preview) = self.widgets.preview.as_mut() {
            log_event("curve_edit", json!({ "index": cr.source.index }));
            preview.edit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::config::MAX_CURVES;

    /// What the fake widgets were last told.
    #[derive(Default, Debug)]
    struct WidgetLog {
        editor_visible: Option<bool>,
        editor_locked: bool,
        editor_lock_calls: usize,
        editor_updates: Vec<RawSource>,
        preview_visible: Option<bool>,
        preview_index: Option<i32>,
        preview_pen: Option<(Color, u16)>,
        preview_grid: Option<(Color, u16)>,
        draws: usize,
        edits: usize,
        selected_value: Option<i32>,
        resized: usize,
    }

    type Shared = Rc<RefCell<WidgetLog>>;

    struct FakeEditor(Shared);
    impl SourceEditor for FakeEditor {
        fn configure(&mut self, _range: ValueRange) {}
        fn set_visible(&mut self, visible: bool) { self.0.borrow_mut().editor_visible = Some(visible); }
        fn update(&mut self, source: &RawSource) { self.0.borrow_mut().editor_updates.push(*source); }
        fn set_lock(&mut self, lock: bool) {
            let mut log = self.0.borrow_mut();
            log.editor_locked = lock;
            log.editor_lock_calls += 1;
        }
    }

    struct FakePreview(Shared);
    impl CurvePreview for FakePreview {
        fn init(&mut self, index: i32, color: Color, width: u16) {
            let mut log = self.0.borrow_mut();
            log.preview_index = Some(index);
            log.preview_pen = Some((color, width));
        }
        fn set_grid(&mut self, color: Color, width: u16) { self.0.borrow_mut().preview_grid = Some((color, width)); }
        fn set_index(&mut self, index: i32) { self.0.borrow_mut().preview_index = Some(index); }
        fn set_pen(&mut self, color: Color, width: u16) { self.0.borrow_mut().preview_pen = Some((color, width)); }
        fn set_visible(&mut self, visible: bool) { self.0.borrow_mut().preview_visible = Some(visible); }
        fn draw(&mut self) { self.0.borrow_mut().draws += 1; }
        fn edit(&mut self) { self.0.borrow_mut().edits += 1; }
    }

    /// Echoes every programmatic selection back onto the bus, like a combo box would.
    struct EchoSelector {
        log: Shared,
        model: ItemModel,
        bus: EventBus,
    }
    impl KindSelector for EchoSelector {
        fn set_model(&mut self, model: ItemModel) { self.model = model; }
        fn set_current_value(&mut self, value: i32) {
            self.log.borrow_mut().selected_value = Some(value);
            if let Some(row) = self.model.find_value(value) {
                self.bus.emit(CurveRefEvent::KindSelected(row));
            }
        }
        fn item_value(&self, row: usize) -> Option<i32> { self.model.value_at(row) }
    }

    struct FakeLayout(Shared);
    impl LayoutHost for FakeLayout {
        fn resized(&mut self) { self.0.borrow_mut().resized += 1; }
    }

    fn fakes(log: &Shared, bus: &EventBus) -> Collaborators<'static> {
        Collaborators {
            editor: Box::new(FakeEditor(log.clone())),
            selector: Some(Box::new(EchoSelector { log: log.clone(), model: ItemModel::default(), bus: bus.clone() })),
            preview: Some(Box::new(FakePreview(log.clone()))),
            layout: Some(Box::new(FakeLayout(log.clone()))),
        }
    }

    fn row_of(kind: CurveRefKind) -> usize {
        CurveReference::kind_item_model().find_value(kind.ordinal()).unwrap()
    }

    #[test]
    fn test_visibility_table() {
        let cases = [
            (CurveReference::default_value(CurveRefKind::Difference), true, false),
            (CurveReference::default_value(CurveRefKind::Expo), true, false),
            (CurveReference::default_value(CurveRefKind::Function), false, false),
            (CurveReference::new(CurveRefKind::Custom, RawSource::new(SourceType::Curve, 2)), false, true),
            (CurveReference::new(CurveRefKind::Custom, RawSource::new(SourceType::GVar, 2)), false, false),
        ];
        for (cr, editor, preview) in cases {
            assert_eq!(
                visibility(&cr),
                Visibility { source_editor: editor, preview },
                "row {:?}",
                cr
            );
        }
    }

    #[test]
    fn test_pen_color_bounds() {
        let colors = Settings::default().curve_colors;
        assert_eq!(pen_color(1, &colors, MAX_CURVES), colors[0]);
        assert_eq!(pen_color(-1, &colors, MAX_CURVES), colors[0]);
        assert_eq!(pen_color(MAX_CURVES as i32, &colors, MAX_CURVES), colors[MAX_CURVES as usize - 1]);
        assert_eq!(pen_color(0, &colors, MAX_CURVES), DEFAULT_PEN_COLOR);
        assert_eq!(pen_color(MAX_CURVES as i32 + 1, &colors, MAX_CURVES), DEFAULT_PEN_COLOR);
        assert_eq!(pen_color(-(MAX_CURVES as i32) - 1, &colors, MAX_CURVES), DEFAULT_PEN_COLOR);
        // short table: missing slots fall back to black
        assert_eq!(pen_color(3, &[Color::Red], MAX_CURVES), DEFAULT_PEN_COLOR);
    }

    #[test]
    fn test_construction_syncs_widgets() {
        let log = Shared::default();
        let bus = EventBus::new();
        let mut cr = CurveReference::default();
        let ctl = CurveReferenceController::new(&mut cr, fakes(&log, &bus), bus.clone(), Settings::default());

        let l = log.borrow();
        assert_eq!(l.selected_value, Some(CurveRefKind::Difference.ordinal()));
        assert_eq!(l.editor_visible, Some(true));
        assert_eq!(l.editor_updates.last(), Some(&RawSource::default()));
        assert_eq!(l.preview_visible, Some(false));
        assert_eq!(l.preview_grid, Some((Color::Gray, 2)));
        assert!(l.resized >= 1);
        assert!(!l.editor_locked);
        drop(l);

        assert!(!ctl.is_locked());
        assert_eq!(bus.pending(), 0);
    }

    #[test]
    fn test_kind_change_replaces_value() {
        let log = Shared::default();
        let bus = EventBus::new();
        let mut cr = CurveReference::new(CurveRefKind::Expo, RawSource::new(SourceType::GVar, 3));
        {
            let mut ctl = CurveReferenceController::new(&mut cr, fakes(&log, &bus), bus.clone(), Settings::default());
            ctl.on_kind_selected(row_of(CurveRefKind::Difference));
            assert_eq!(*ctl.curve_ref(), CurveReference::default_value(CurveRefKind::Difference));
            assert!(ctl.curve_ref().source.is_empty());

            ctl.on_kind_selected(row_of(CurveRefKind::Custom));
            assert_eq!(ctl.visibility(), Visibility { source_editor: false, preview: true });
        }
        assert_eq!(cr, CurveReference::default_value(CurveRefKind::Custom));

        let l = log.borrow();
        assert_eq!(l.editor_visible, Some(false));
        assert_eq!(l.preview_visible, Some(true));
        assert_eq!(l.preview_index, Some(1));
        assert_eq!(l.preview_pen, Some((Settings::default().curve_colors[0], 3)));
        assert_eq!(l.selected_value, Some(CurveRefKind::Custom.ordinal()));
    }

    #[test]
    fn test_echoed_selection_is_suppressed() {
        let log = Shared::default();
        let bus = EventBus::new();
        let mut cr = CurveReference::new(CurveRefKind::Custom, RawSource::new(SourceType::Curve, 5));
        let mut ctl = CurveReferenceController::new(&mut cr, fakes(&log, &bus), bus.clone(), Settings::default());

        // the echo raised by the update inside new()
        assert_eq!(ctl.suppressed_count(), 1);
        let before = ctl.suppressed_count();
        ctl.process_pending();
        ctl.update();
        ctl.update();
        assert_eq!(ctl.suppressed_count(), before + 2);

        // the echo of Custom must not have reset the source to the kind default
        assert_eq!(ctl.curve_ref().source, RawSource::new(SourceType::Curve, 5));
        assert_eq!(bus.pending(), 0);
        assert!(!ctl.is_locked());
    }

    #[test]
    fn test_user_signal_queued_before_update_survives() {
        let log = Shared::default();
        let bus = EventBus::new();
        let mut cr = CurveReference::default();
        let mut ctl = CurveReferenceController::new(&mut cr, fakes(&log, &bus), bus.clone(), Settings::default());
        ctl.process_pending();

        bus.emit(CurveRefEvent::KindSelected(row_of(CurveRefKind::Function)));
        ctl.update();
        assert_eq!(bus.pending(), 1);
        ctl.process_pending();
        assert_eq!(ctl.curve_ref().kind, CurveRefKind::Function);
        assert_eq!(ctl.visibility(), Visibility { source_editor: false, preview: false });
    }

    #[test]
    fn test_source_edit_redraws_preview() {
        let log = Shared::default();
        let bus = EventBus::new();
        let mut cr = CurveReference::default_value(CurveRefKind::Custom);
        let mut ctl = CurveReferenceController::new(&mut cr, fakes(&log, &bus), bus.clone(), Settings::default());
        let draws = log.borrow().draws;

        bus.emit(CurveRefEvent::SourceEdited(RawSource::new(SourceType::Curve, -40)));
        ctl.process_pending();
        assert_eq!(ctl.curve_ref().kind, CurveRefKind::Custom);
        assert_eq!(ctl.curve_ref().source.index, -40);

        let l = log.borrow();
        assert_eq!(l.draws, draws + 1);
        assert_eq!(l.preview_index, Some(-40));
        assert_eq!(l.preview_pen, Some((DEFAULT_PEN_COLOR, 3)));
    }

    #[test]
    fn test_source_edit_to_non_curve_hides_preview() {
        let log = Shared::default();
        let bus = EventBus::new();
        let mut cr = CurveReference::default_value(CurveRefKind::Custom);
        let mut ctl = CurveReferenceController::new(&mut cr, fakes(&log, &bus), bus.clone(), Settings::default());
        ctl.on_source_edited(RawSource::new(SourceType::Input, 2));
        assert_eq!(log.borrow().preview_visible, Some(false));
        assert_eq!(log.borrow().editor_visible, Some(false));
    }

    #[test]
    fn test_editor_lock_is_balanced() {
        let log = Shared::default();
        let bus = EventBus::new();
        let mut cr = CurveReference::default();
        let mut ctl = CurveReferenceController::new(&mut cr, fakes(&log, &bus), bus.clone(), Settings::default());
        ctl.on_source_edited(RawSource::value(25));
        let l = log.borrow();
        assert!(!l.editor_locked);
        assert_eq!(l.editor_lock_calls % 2, 0);
        assert_eq!(l.editor_updates.last(), Some(&RawSource::value(25)));
    }

    #[test]
    fn test_double_click_only_edits_custom_with_index() {
        let log = Shared::default();
        let bus = EventBus::new();
        let mut cr = CurveReference::default_value(CurveRefKind::Function);
        let mut ctl = CurveReferenceController::new(&mut cr, fakes(&log, &bus), bus.clone(), Settings::default());
        ctl.on_preview_double_clicked();
        assert_eq!(log.borrow().edits, 0);

        ctl.on_kind_selected(row_of(CurveRefKind::Custom));
        ctl.on_source_edited(RawSource::new(SourceType::Curve, 0));
        ctl.on_preview_double_clicked();
        assert_eq!(log.borrow().edits, 0);

        ctl.on_source_edited(RawSource::new(SourceType::Curve, -2));
        bus.emit(CurveRefEvent::PreviewDoubleClicked);
        ctl.process_pending();
        assert_eq!(log.borrow().edits, 1);
    }

    #[test]
    fn test_without_selector_kind_signal_is_ignored() {
        let mut editor = MockSourceEditor::new();
        editor.expect_configure().times(1).return_const(());
        editor.expect_set_lock().return_const(());
        editor.expect_set_visible().with(mockall::predicate::eq(true)).return_const(());
        editor.expect_update().return_const(());

        let mut cr = CurveReference::default();
        let widgets = Collaborators { editor: Box::new(editor), selector: None, preview: None, layout: None };
        let mut ctl = CurveReferenceController::new(&mut cr, widgets, EventBus::new(), Settings::default());
        ctl.on_kind_selected(3);
        assert_eq!(*ctl.curve_ref(), CurveReference::default());
    }

    #[test]
    fn test_update_call_order() {
        let mut seq = mockall::Sequence::new();
        let mut editor = MockSourceEditor::new();
        let mut preview = MockCurvePreview::new();
        let mut layout = MockLayoutHost::new();

        editor.expect_configure().times(1).in_sequence(&mut seq).return_const(());
        preview.expect_init().times(1).in_sequence(&mut seq).return_const(());
        preview.expect_set_grid().times(1).in_sequence(&mut seq).return_const(());
        editor.expect_set_lock().with(mockall::predicate::eq(true)).times(1).in_sequence(&mut seq).return_const(());
        editor.expect_set_visible().with(mockall::predicate::eq(false)).times(1).in_sequence(&mut seq).return_const(());
        preview.expect_set_index().with(mockall::predicate::eq(7)).times(1).in_sequence(&mut seq).return_const(());
        preview.expect_set_pen().times(1).in_sequence(&mut seq).return_const(());
        preview.expect_draw().times(1).in_sequence(&mut seq).return_const(());
        preview.expect_set_visible().with(mockall::predicate::eq(true)).times(1).in_sequence(&mut seq).return_const(());
        layout.expect_resized().times(1).in_sequence(&mut seq).return_const(());
        editor.expect_set_lock().with(mockall::predicate::eq(false)).times(1).in_sequence(&mut seq).return_const(());
        editor.expect_update().never();
        preview.expect_edit().never();

        let mut cr = CurveReference::new(CurveRefKind::Custom, RawSource::new(SourceType::Curve, 7));
        let widgets = Collaborators {
            editor: Box::new(editor),
            selector: None,
            preview: Some(Box::new(preview)),
            layout: Some(Box::new(layout)),
        };
        let _ctl = CurveReferenceController::new(&mut cr, widgets, EventBus::new(), Settings::default());
    }

    #[test]
    fn test_selector_populated_with_kind_model() {
        let mut selector = MockKindSelector::new();
        selector
            .expect_set_model()
            .withf(|m| m.name() == crate::curve_ref::KIND_ITEM_MODEL_NAME && m.len() == 4)
            .times(1)
            .return_const(());
        selector
            .expect_set_current_value()
            .with(mockall::predicate::eq(CurveRefKind::Expo.ordinal()))
            .times(2)
            .return_const(());

        let mut editor = MockSourceEditor::new();
        editor.expect_configure().return_const(());
        editor.expect_set_lock().return_const(());
        editor.expect_set_visible().return_const(());
        editor.expect_update().times(1).return_const(());

        let mut cr = CurveReference::default_value(CurveRefKind::Expo);
        let widgets = Collaborators {
            editor: Box::new(editor),
            selector: Some(Box::new(selector)),
            preview: None,
            layout: None,
        };
        let _ctl = CurveReferenceController::new(&mut cr, widgets, EventBus::new(), Settings::default());
    }
}
