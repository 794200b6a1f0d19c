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

//! Numeric-source reference: a typed slot plus a signed index.
//!
//! For `SourceType::None` the index is a plain numeric value rather than a slot.
//! For curves the index is 1-based and negative means inverted.

use serde::{Deserialize, Serialize};

use crate::conversion::ConversionState;
use crate::model::ModelData;

/// Shown for anything that cannot be named.
pub const UNKNOWN_ITEM: &str = "???";

/// Names of the built-in curve functions, indexed by `index - 1`.
pub const CURVE_FUNC_NAMES: [&str; 6] = ["x>0", "x<0", "|x|", "f>0", "f<0", "|f|"];

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    #[default]
    None,
    Input,
    GVar,
    Curve,
    CurveFunc,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawSource {
    pub kind: SourceType,
    pub index: i32,
}

/// Opaque context for display strings.
#[derive(Copy, Clone, Debug, Default)]
pub struct DisplayContext<'a> {
    pub model: Option<&'a ModelData>,
    /// Prefix custom curve names with their slot, e.g. "CV1:Thr".
    pub prefix_custom_name: bool,
}

impl<'a> DisplayContext<'a> {
    pub fn with_model(model: &'a ModelData) -> Self {
        Self { model: Some(model), prefix_custom_name: false }
    }
}

impl RawSource {
    pub fn new(kind: SourceType, index: i32) -> Self {
        Self { kind, index }
    }

    /// A plain numeric value (no source).
    pub fn value(v: i32) -> Self {
        Self { kind: SourceType::None, index: v }
    }

    pub fn is_empty(&self) -> bool {
        self.kind == SourceType::None && self.index == 0
    }

    pub fn is_inverted(&self) -> bool {
        self.index < 0
    }

    pub fn to_display_string(&self, ctx: &DisplayContext<'_>) -> String {
        let n = self.index.unsigned_abs();
        let inv = if self.is_inverted() { "!" } else { "" };
        match self.kind {
            SourceType::None => self.index.to_string(),
            SourceType::Input => format!("{}I{}", inv, n),
            SourceType::GVar => format!("{}GV{}", inv, n),
            SourceType::Curve => {
                let slot = format!("CV{}", n);
                match ctx.model.and_then(|m| m.curve_name(self.index)) {
                    Some(name) if ctx.prefix_custom_name => format!("{}{}:{}", inv, slot, name),
                    Some(name) => format!("{}{}", inv, name),
                    None => format!("{}{}", inv, slot),
                }
            }
            SourceType::CurveFunc => {
                let idx = self.index as usize;
                if self.index >= 1 && idx <= CURVE_FUNC_NAMES.len() {
                    CURVE_FUNC_NAMES[idx - 1].to_string()
                } else {
                    UNKNOWN_ITEM.to_string()
                }
            }
        }
    }

    /// Re-map this source onto `cstate.to`. Anything the target cannot hold becomes
    /// the empty source and a warning is recorded.
    #[must_use]
    pub fn convert(self, cstate: &mut ConversionState) -> Self {
        let n = self.index.unsigned_abs();
        let limit = match self.kind {
            SourceType::None => return self,
            SourceType::Input => cstate.to.max_inputs,
            SourceType::GVar => cstate.to.max_gvars,
            SourceType::Curve => cstate.to.max_curves,
            SourceType::CurveFunc => CURVE_FUNC_NAMES.len() as u32,
        };
        if n == 0 || n > limit {
            cstate.warn(format!(
                "{:?} {} not available on {}, cleared",
                self.kind, self.index, cstate.to.name
            ));
            return RawSource::default();
        }
        self
    }
}
