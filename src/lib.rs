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

//! Curveref - curve reference editing for radio model setups
//!
//! This library provides the curve reference value type, the numeric-source
//! reference it carries, and a controller that keeps editor widgets and a curve
//! preview in sync with it. A terminal host is built on top.

pub mod app;
pub mod bus;
pub mod config;
pub mod controller;
pub mod conversion;
pub mod curve_ref;
pub mod events;
pub mod item_model;
pub mod logger;
pub mod model;
pub mod raw_source;
pub mod ui;
