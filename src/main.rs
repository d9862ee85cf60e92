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

//! # Gear Toy TUI.
//!
//! A terminal toy scene of spinning gears, built with `ratatui`.
//!
//! Clicking the background spawns a gear under the cursor, clicking a gear
//! toggles its spin, double-clicking a gear deletes it, and dragging moves
//! it around. The scene starts with a single gear centred in the terminal
//! and holds no state across restarts.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, processes events,
//!   mutates the scene, and renders the UI.
//! * An **Input Thread** captures keyboard, mouse, and resize events.
//! * A **Tick Thread** drives the animation at a fixed cadence.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. The producer
//! threads communicate with the main thread via `std::sync::mpsc` channels
//! and shut down on their own once the main loop drops the receiving end;
//! all scene mutation happens on the main thread, one event at a time.

mod actions;
mod config;
mod model;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    actions::{
        events::{AppEvent, process_events},
        pointer::PointerController,
    },
    config::AppConfig,
    model::{Viewport, scene::Scene},
    theme::Theme,
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub scene: Scene,
    pub pointer: PointerController,
    pub viewport: Viewport,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, viewport: Viewport) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let pointer = PointerController::new(&config);

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            scene: Scene::new(),
            pointer,
            viewport,
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, initializes the application state, manages the
/// terminal lifecycle, and returns an error if any part of the execution
/// fails.
fn main() -> Result<()> {
    let config = config::load_config();

    let (width, height) =
        crossterm::terminal::size().context("Failed to query the terminal size")?;
    let viewport = Viewport::new(width, height);

    let mut app = App::new(config, viewport);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Enables mouse capture, so clicks and drags reach the application.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(&theme::Theme::to_hex(app.theme.background_colour));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// mouse capture and raw mode, leaving the alternate screen, and resetting
/// the background color. It also ensures the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a
/// result, as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the producer threads, seeds the scene, and enters the main event
/// loop.
///
/// This function spawns two long-running background threads:
/// * An input thread to translate raw terminal events to application events.
/// * A tick thread to drive the animation, this is effectively the frame
///   rate of the scene.
///
/// Both threads run until sending fails, which happens exactly when the main
/// loop has returned and dropped the receiver, so tearing down the surface
/// also stops its timers and input subscriptions.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let forwarded = match event::read() {
                Ok(event::Event::Key(key)) => tx_input.send(AppEvent::Key(key)),
                Ok(event::Event::Mouse(mouse)) => tx_input.send(AppEvent::Pointer(mouse)),
                Ok(event::Event::Resize(width, height)) => {
                    tx_input.send(AppEvent::Resize(width, height))
                }
                Ok(_) => Ok(()),
                Err(_) => break,
            };

            if forwarded.is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, advancing
    // the rotation of every spinning gear.
    let tx_tick = app.event_tx.clone();
    let tick_interval = Duration::from_millis(app.config.tick_millis);
    thread::spawn(move || {
        loop {
            if tx_tick.send(AppEvent::Tick).is_err() {
                break;
            }
            thread::sleep(tick_interval);
        }
    });

    // The scene is never empty on first load
    app.pointer.spawn_default_gear(&mut app.scene, app.viewport);

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
