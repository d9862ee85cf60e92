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

//! User interface rendering logic.
//!
//! This module handles the translation of the scene state into visual
//! widgets using the `ratatui` framework. Rendering is a stateless
//! projection: each gear record is drawn from its current fields on every
//! frame, and nothing here mutates the scene.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event—including every animation tick—so the scene
//! reflects the freshest rotation angles.

mod scene;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::App;

/// Renders the user interface to the terminal frame.
pub(crate) fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    // Outer layout: scene canvas, status footer
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    scene::draw_scene(f, outer[0], app);

    status::draw_status(f, outer[1], app);
}
