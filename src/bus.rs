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

//! Signal queue shared between collaborator widgets and the controller.
//!
//! Single-threaded: handles are `Rc` clones. Every emitted signal gets a sequence
//! number so the controller can pick out exactly the signals raised while it was
//! writing to its widgets.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::raw_source::RawSource;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CurveRefEvent {
    /// The kind selector moved to this row.
    KindSelected(usize),
    /// The numeric-source editor produced a new source.
    SourceEdited(RawSource),
    PreviewDoubleClicked,
}

#[derive(Default)]
struct BusInner {
    queue: VecDeque<(u64, CurveRefEvent)>,
    next_seq: u64,
}

#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<RefCell<BusInner>>,
}

/// Position in the signal stream, see `EventBus::mark`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BusMark(u64);

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: CurveRefEvent) {
        let mut inner = self.inner.borrow_mut();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.queue.push_back((seq, event));
    }

    pub fn pop(&self) -> Option<CurveRefEvent> {
        self.inner.borrow_mut().queue.pop_front().map(|(_, e)| e)
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    pub fn mark(&self) -> BusMark {
        BusMark(self.inner.borrow().next_seq)
    }

    /// Remove and return every signal emitted at or after `mark`, oldest first.
    /// Older signals stay queued.
    pub fn drain_since(&self, mark: BusMark) -> Vec<CurveRefEvent> {
        let mut inner = self.inner.borrow_mut();
        let (old, new): (VecDeque<_>, VecDeque<_>) =
            inner.queue.drain(..).partition(|(seq, _)| *seq < mark.0);
        inner.queue = old;
        new.into_iter().map(|(_, e)| e).collect()
    }
}
