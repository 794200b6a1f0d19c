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

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Curves a model can hold; also the size of the default color table.
pub const MAX_CURVES: u32 = 32;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid settings: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Pen colors for custom curves, slot `n - 1` for curve `n`.
    #[serde(default = "default_curve_colors")]
    pub curve_colors: Vec<Color>,
    #[serde(default = "default_max_curves")]
    pub max_curves: u32,
    #[serde(default = "default_pen_width")]
    pub pen_width: u16,
    #[serde(default = "default_grid_color")]
    pub grid_color: Color,
    #[serde(default = "default_grid_width")]
    pub grid_width: u16,
    #[serde(default = "default_value_min")]
    pub value_min: i32,
    #[serde(default = "default_value_max")]
    pub value_max: i32,
    #[serde(default = "default_value_step")]
    pub value_step: i32,
    /// JSON-lines event log used with `--logging`.
    #[serde(default)]
    pub log_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            curve_colors: default_curve_colors(),
            max_curves: default_max_curves(),
            pen_width: default_pen_width(),
            grid_color: default_grid_color(),
            grid_width: default_grid_width(),
            value_min: default_value_min(),
            value_max: default_value_max(),
            value_step: default_value_step(),
            log_path: None,
        }
    }
}

const BASE_PALETTE: [(u8, u8, u8); 16] = [
    (0xe6, 0x19, 0x4b), (0x3c, 0xb4, 0x4b), (0x43, 0x63, 0xd8), (0xf5, 0x82, 0x31),
    (0x91, 0x1e, 0xb4), (0x42, 0xd4, 0xf4), (0xf0, 0x32, 0xe6), (0xbf, 0xef, 0x45),
    (0xfa, 0xbe, 0xd4), (0x46, 0x99, 0x90), (0xdc, 0xbe, 0xff), (0x9a, 0x63, 0x24),
    (0xff, 0xe1, 0x19), (0x80, 0x00, 0x00), (0xaa, 0xff, 0xc3), (0x00, 0x00, 0x75),
];

/// Sixteen distinct colors, then the same sixteen darkened.
pub fn default_curve_colors() -> Vec<Color> {
    let bright = BASE_PALETTE.iter().map(|&(r, g, b)| Color::Rgb(r, g, b));
    let dark = BASE_PALETTE
        .iter()
        .map(|&(r, g, b)| Color::Rgb(r / 5 * 3, g / 5 * 3, b / 5 * 3));
    bright.chain(dark).collect()
}

fn default_max_curves() -> u32 { MAX_CURVES }
fn default_pen_width() -> u16 { 3 }
fn default_grid_color() -> Color { Color::Gray }
fn default_grid_width() -> u16 { 2 }
fn default_value_min() -> i32 { -100 }
fn default_value_max() -> i32 { 100 }
fn default_value_step() -> i32 { 1 }

pub fn settings_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("curveref").join("settings.json");
    }
    if let Ok(home) = env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("curveref")
            .join("settings.json");
    }
    PathBuf::from("/etc/curveref/settings.json")
}

pub fn validate_settings(s: &Settings) -> Result<(), String> {
    if s.max_curves == 0 || s.max_curves > 64 {
        return Err("max_curves must be in 1..=64".to_string());
    }
    if s.curve_colors.is_empty() {
        return Err("curve_colors must not be empty".to_string());
    }
    if s.curve_colors.len() > 64 {
        return Err("too many curve colors (max 64)".to_string());
    }
    if s.value_min >= s.value_max {
        return Err("value_min must be below value_max".to_string());
    }
    if s.value_step <= 0 {
        return Err("value_step must be positive".to_string());
    }
    for (name, w) in [("pen_width", s.pen_width), ("grid_width", s.grid_width)] {
        if !(1..=8).contains(&w) {
            return Err(format!("{} must be in 1..=8", name));
        }
    }
    Ok(())
}

pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    let data = fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&data)?;
    validate_settings(&settings).map_err(ConfigError::Invalid)?;
    Ok(settings)
}

/// Load from the default location. A missing file means defaults.
pub fn load_settings() -> Result<Settings, ConfigError> {
    match load_settings_from(&settings_path()) {
        Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(Settings::default()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(json: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(json.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn test_defaults_are_valid() {
        let s = Settings::default();
        assert!(validate_settings(&s).is_ok());
        assert_eq!(s.curve_colors.len(), MAX_CURVES as usize);
        assert_eq!(s.max_curves, 32);
        assert_eq!(s.pen_width, 3);
        assert_eq!(s.grid_color, Color::Gray);
        assert_eq!(s.grid_width, 2);
        assert_eq!((s.value_min, s.value_max, s.value_step), (-100, 100, 1));
    }

    #[test]
    fn test_empty_object_gives_defaults() {
        let f = write_temp("{}");
        assert_eq!(load_settings_from(f.path()).unwrap(), Settings::default());
    }

    #[test]
    fn test_colors_parse_from_strings() {
        let f = write_temp(r##"{ "curve_colors": ["red", "#00ff00"], "max_curves": 2 }"##);
        let s = load_settings_from(f.path()).unwrap();
        assert_eq!(s.curve_colors, vec![Color::Red, Color::Rgb(0, 255, 0)]);
        assert_eq!(s.max_curves, 2);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let f = write_temp(r#"{ "pen_colour": 3 }"#);
        assert!(matches!(load_settings_from(f.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let f = write_temp(r#"{ "value_min": 10, "value_max": 10 }"#);
        assert!(matches!(load_settings_from(f.path()), Err(ConfigError::Invalid(_))));

        let mut s = Settings::default();
        s.max_curves = 0;
        assert!(validate_settings(&s).is_err());
        s = Settings::default();
        s.curve_colors.clear();
        assert!(validate_settings(&s).is_err());
        s = Settings::default();
        s.value_step = 0;
        assert!(validate_settings(&s).is_err());
        s = Settings::default();
        s.pen_width = 9;
        assert!(validate_settings(&s).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let res = load_settings_from(&dir.path().join("absent.json"));
        assert!(matches!(res, Err(ConfigError::Io(_))));
    }

    #[test]
    #[serial]
    fn test_settings_path_with_xdg() {
        std::env::set_var("XDG_CONFIG_HOME", "/custom/config");
        let path = settings_path();
        assert_eq!(path, PathBuf::from("/custom/config/curveref/settings.json"));
        std::env::remove_var("XDG_CONFIG_HOME");
    }

    #[test]
    #[serial]
    fn test_load_settings_defaults_when_absent() {
        let dir = tempfile::TempDir::new().unwrap();
        std::env::set_var("XDG_CONFIG_HOME", dir.path());
        let s = load_settings().unwrap();
        std::env::remove_var("XDG_CONFIG_HOME");
        assert_eq!(s, Settings::default());
    }
}
