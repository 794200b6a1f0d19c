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

//! Model context passed through to display formatting and the preview.

use serde::{Deserialize, Serialize};

/// A single custom curve of a model. Points are (x, y) in -100..=100.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveData {
    #[serde(default)]
    pub name: String,
    pub points: Vec<(i32, i32)>,
}

impl CurveData {
    pub fn new(name: &str, points: Vec<(i32, i32)>) -> Self {
        Self { name: name.to_string(), points }
    }
}

/// The slice of a model record that curve references need to know about.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelData {
    pub name: String,
    #[serde(default)]
    pub curves: Vec<CurveData>,
}

impl ModelData {
    /// Look up a curve by its 1-based index. The sign is ignored.
    pub fn curve(&self, index: i32) -> Option<&CurveData> {
        let idx = index.unsigned_abs() as usize;
        if idx == 0 { return None; }
        self.curves.get(idx - 1)
    }

    /// Custom name of a curve, when one is set.
    pub fn curve_name(&self, index: i32) -> Option<&str> {
        self.curve(index)
            .map(|c| c.name.as_str())
            .filter(|n| !n.is_empty())
    }
}

/// Demo model used by the terminal host.
pub fn demo_model() -> ModelData {
    ModelData {
        name: "Glider".to_string(),
        curves: vec![
            CurveData::new("Thr", vec![(-100, -100), (-50, -20), (0, 10), (50, 60), (100, 100)]),
            CurveData::new("Flap", vec![(-100, 0), (0, 40), (100, 100)]),
            CurveData::new("", vec![(-100, 100), (0, 0), (100, 100)]),
            CurveData::new("Expo", vec![(-100, -100), (-50, -12), (0, 0), (50, 12), (100, 100)]),
        ],
    }
}
