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

/// One selectable entry: what is shown and the value it stands for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub label: String,
    pub value: i32,
}

/// A named, fixed list of items backing a selector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemModel {
    name: String,
    items: Vec<Item>,
}

impl ItemModel {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), items: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn push(&mut self, label: impl Into<String>, value: i32) {
        self.items.push(Item { label: label.into(), value });
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Row whose value equals `value`.
    pub fn find_value(&self, value: i32) -> Option<usize> {
        self.items.iter().position(|i| i.value == value)
    }

    pub fn value_at(&self, row: usize) -> Option<i32> {
        self.items.get(row).map(|i| i.value)
    }
}
