// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file. Only timing knobs
//! live here; scene contents are deliberately never persisted.

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "cogui";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub version: u32,
    /// Animation tick interval in milliseconds. The default approximates 60
    /// frames per second; the exact cadence is not load-bearing.
    pub tick_millis: u64,
    /// Window within which two clicks on the same gear count as a
    /// double-click, in milliseconds.
    pub double_click_millis: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            tick_millis: 16,
            double_click_millis: 400,
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}
