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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard, mouse), the animation
//! tick, and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel fed by the input and tick threads.
//! 2. **Process**: The [`process_events`] function updates the scene state,
//!    one event at a time, in arrival order. No mutation happens anywhere
//!    else, so ticks and pointer gestures never race.
//! 3. **Render**: After each event is processed, the UI is re-drawn using
//!    the `ratatui` terminal.

use std::{io::Stdout, time::Instant};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, model::Viewport, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Pointer(MouseEvent),
    Resize(u16, u16),

    Tick,

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed. Closing the channel (by dropping the receiver on return) is
/// also what stops the producer threads.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_global_key_event(app, key)?,

            AppEvent::Pointer(mouse) => {
                app.pointer
                    .process_pointer_event(mouse, Instant::now(), &mut app.scene, app.viewport);
            }

            // The viewport only matters when new gears are sized and placed;
            // existing gears keep their coordinates across a resize.
            AppEvent::Resize(width, height) => app.viewport = Viewport::new(width, height),

            AppEvent::Tick => app.scene.advance_frame(),

            _ => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Maps keyboard input to application actions.
///
/// Gears are manipulated exclusively with the mouse; the keyboard only
/// controls the application shell itself.
fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        _ => {}
    }

    Ok(())
}
