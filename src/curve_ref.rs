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

//! Curve reference: which kind of curve a mix or input applies, and its source.

use serde::{Deserialize, Serialize};

use crate::conversion::ConversionState;
use crate::item_model::ItemModel;
use crate::raw_source::{DisplayContext, RawSource, SourceType, UNKNOWN_ITEM};

/// Name of the item model that lists curve reference kinds.
pub const KIND_ITEM_MODEL_NAME: &str = "curvereference.type";

/// Number of curve reference kinds.
pub const CURVE_REF_KIND_COUNT: usize = 4;

const KIND_LABELS: [&str; CURVE_REF_KIND_COUNT] = ["Diff", "Expo", "Func", "Custom"];

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveRefKind {
    #[default]
    Difference,
    Expo,
    Function,
    Custom,
}

impl CurveRefKind {
    pub const ALL: [CurveRefKind; CURVE_REF_KIND_COUNT] = [
        CurveRefKind::Difference,
        CurveRefKind::Expo,
        CurveRefKind::Function,
        CurveRefKind::Custom,
    ];

    pub fn ordinal(self) -> i32 {
        self as i32
    }

    pub fn from_ordinal(ordinal: i32) -> Option<Self> {
        usize::try_from(ordinal).ok().and_then(|i| Self::ALL.get(i).copied())
    }
}

/// How the upper end of the kind ordinal range is checked before a label lookup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KindBound {
    /// Rejects `ordinal >= CURVE_REF_KIND_COUNT`.
    Exclusive,
    /// Rejects only `ordinal > CURVE_REF_KIND_COUNT`; ordinal == count still
    /// reaches the lookup, which yields the sentinel.
    Inclusive,
}

/// Bound used by `kind_to_string`.
pub const KIND_ORDINAL_BOUND: KindBound = KindBound::Inclusive;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurveReference {
    pub kind: CurveRefKind,
    pub source: RawSource,
}

impl CurveReference {
    pub fn new(kind: CurveRefKind, source: RawSource) -> Self {
        Self { kind, source }
    }

    pub fn clear(&mut self) {
        self.kind = CurveRefKind::Difference;
        self.source = RawSource::default();
    }

    /// A fresh value for `kind`, with the source re-seeded to fit that kind.
    pub fn default_value(kind: CurveRefKind) -> Self {
        let source = match kind {
            CurveRefKind::Function => RawSource::new(SourceType::CurveFunc, 1),
            CurveRefKind::Custom => RawSource::new(SourceType::Curve, 1),
            CurveRefKind::Difference | CurveRefKind::Expo => RawSource::default(),
        };
        Self { kind, source }
    }

    /// `verbose` is accepted for call-site compatibility and has no effect.
    pub fn to_display_string(&self, ctx: &DisplayContext<'_>, _verbose: bool) -> String {
        self.source.to_display_string(ctx)
    }

    pub fn kind_to_string(ordinal: i32) -> &'static str {
        Self::kind_to_string_with(ordinal, KIND_ORDINAL_BOUND)
    }

    pub fn kind_to_string_with(ordinal: i32, bound: KindBound) -> &'static str {
        let max = match bound {
            KindBound::Exclusive => CURVE_REF_KIND_COUNT as i32 - 1,
            KindBound::Inclusive => CURVE_REF_KIND_COUNT as i32,
        };
        if ordinal < 0 || ordinal > max {
            return UNKNOWN_ITEM;
        }
        KIND_LABELS.get(ordinal as usize).copied().unwrap_or(UNKNOWN_ITEM)
    }

    /// Item model listing every kind as (label, ordinal).
    pub fn kind_item_model() -> ItemModel {
        let mut model = ItemModel::new(KIND_ITEM_MODEL_NAME);
        for kind in CurveRefKind::ALL {
            model.push(Self::kind_to_string(kind.ordinal()), kind.ordinal());
        }
        model
    }

    /// Convert the source for another radio. Only `source` changes; the caller
    /// must store the returned value.
    #[must_use]
    pub fn convert(mut self, cstate: &mut ConversionState) -> Self {
        self.source = self.source.convert(cstate);
        self
    }
}
