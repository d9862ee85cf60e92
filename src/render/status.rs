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

//! UI rendering logic for the status footer.
//!
//! A single line at the bottom of the screen showing the gear count and the
//! mouse interactions available.

use ratatui::{Frame, layout::Rect, style::Style, widgets::Paragraph};

use crate::App;

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let count = app.scene.len();
    let plural = if count == 1 { "" } else { "s" };

    let text = format!(
        " {count} gear{plural} | click: spawn | click gear: spin | double-click: delete | drag: move | q: quit"
    );

    let status = Paragraph::new(text).style(
        Style::default()
            .fg(app.theme.footer_fg)
            .bg(app.theme.footer_bg),
    );

    f.render_widget(status, area);
}
