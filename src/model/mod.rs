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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application—gears, the
//! points they sit at, and the viewport they live in—shared between the
//! scene state, the pointer controller, and the rendering pipeline.

pub(crate) mod scene;

use ratatui::style::Color;

/// A 2D point in terminal cell coordinates.
///
/// The same coordinate space is used for pointer events and gear positions;
/// only the canvas renderer translates out of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl Point {
    pub(crate) const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Opaque identifier for a gear.
///
/// Assigned by the scene at creation and never reused, so an id is unique
/// within the live collection for the lifetime of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct GearId(pub(crate) u64);

/// A single draggable, spinnable, deletable visual entity.
///
/// `size` and `color` are fixed at creation; `position` changes only via
/// dragging and `rotation` only via the animation tick.
#[derive(Debug, Clone)]
pub(crate) struct Gear {
    pub(crate) id: GearId,
    pub(crate) position: Point,
    /// Visual diameter, in cells.
    pub(crate) size: f64,
    pub(crate) color: Color,
    /// Current rotation in degrees, always in `[0, 360)`.
    pub(crate) rotation: f64,
    /// When false the animation tick skips this gear.
    pub(crate) spinning: bool,
}

/// Current terminal dimensions, consulted when new gears are created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Viewport {
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl Viewport {
    pub(crate) fn new(width: u16, height: u16) -> Self {
        Self {
            width: f64::from(width),
            height: f64::from(height),
        }
    }

    pub(crate) fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}
