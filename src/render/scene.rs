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

//! Scene canvas rendering.
//!
//! Paints every gear onto a braille-marker canvas in creation order, so the
//! gear created last draws on top. Each gear is a toothed rim plus a hub,
//! rotated by its current angle about its own centre.
//!
//! Pointer coordinates and gear positions put row zero at the top of the
//! screen while the canvas puts y zero at the bottom; the flip between the
//! two happens here and nowhere else.

use ratatui::{
    Frame,
    layout::Rect,
    symbols::Marker,
    widgets::canvas::{Canvas, Circle, Context, Line},
};

use crate::{App, model::Gear};

/// Number of teeth drawn around each rim.
const TOOTH_COUNT: u32 = 8;
/// Tooth length as a fraction of the rim radius.
const TOOTH_RATIO: f64 = 0.3;
/// Hub radius as a fraction of the rim radius.
const HUB_RATIO: f64 = 0.35;

pub(crate) fn draw_scene(f: &mut Frame, area: Rect, app: &App) {
    let width = f64::from(area.width);
    let height = f64::from(area.height);

    let canvas = Canvas::default()
        .background_color(app.theme.background_colour)
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for gear in app.scene.gears() {
                draw_gear(ctx, gear, height);
            }
        });

    f.render_widget(canvas, area);
}

/// Paints one gear, centred on its position with an overall diameter equal
/// to its size.
fn draw_gear(ctx: &mut Context, gear: &Gear, canvas_height: f64) {
    let x = gear.position.x;
    let y = canvas_height - gear.position.y;

    // Teeth reach the bounding circle; the rim sits inside it
    let outer = gear.size / 2.0;
    let rim = outer / (1.0 + TOOTH_RATIO);

    for tooth in 0..TOOTH_COUNT {
        let step = 360.0 / f64::from(TOOTH_COUNT);
        let angle = (gear.rotation + f64::from(tooth) * step).to_radians();
        let (sin, cos) = angle.sin_cos();

        ctx.draw(&Line {
            x1: x + rim * cos,
            y1: y + rim * sin,
            x2: x + outer * cos,
            y2: y + outer * sin,
            color: gear.color,
        });
    }

    ctx.draw(&Circle {
        x,
        y,
        radius: rim,
        color: gear.color,
    });

    ctx.draw(&Circle {
        x,
        y,
        radius: rim * HUB_RATIO,
        color: gear.color,
    });
}
