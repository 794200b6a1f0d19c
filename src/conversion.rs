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

//! State carried while migrating model data from one radio profile to another.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::logger::log_event;

/// Source limits of one radio target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioProfile {
    pub name: String,
    pub max_curves: u32,
    pub max_inputs: u32,
    pub max_gvars: u32,
}

impl RadioProfile {
    pub fn new(name: &str, max_curves: u32, max_inputs: u32, max_gvars: u32) -> Self {
        Self { name: name.to_string(), max_curves, max_inputs, max_gvars }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionLevel {
    Info,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionEvent {
    pub level: ConversionLevel,
    pub origin: String,
    pub message: String,
}

/// Conversion between two radio profiles. Events are collected in order of occurrence.
#[derive(Clone, Debug)]
pub struct ConversionState {
    pub from: RadioProfile,
    pub to: RadioProfile,
    origin: String,
    events: Vec<ConversionEvent>,
}

impl ConversionState {
    pub fn new(from: RadioProfile, to: RadioProfile) -> Self {
        Self { from, to, origin: String::new(), events: Vec::new() }
    }

    /// Label attached to subsequent events, e.g. "Mix 3".
    pub fn set_origin(&mut self, origin: &str) {
        self.origin = origin.to_string();
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn events(&self) -> &[ConversionEvent] {
        &self.events
    }

    pub fn has_warnings(&self) -> bool {
        self.events.iter().any(|e| e.level == ConversionLevel::Warning)
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ConversionLevel::Info, message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(ConversionLevel::Warning, message.into());
    }

    fn push(&mut self, level: ConversionLevel, message: String) {
        log_event("conversion", json!({
            "level": level,
            "origin": self.origin,
            "from": self.from.name,
            "to": self.to.name,
            "message": message,
        }));
        self.events.push(ConversionEvent { level, origin: self.origin.clone(), message });
    }
}
