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

//! Pointer gesture recognition.
//!
//! Terminal mouse input arrives as a raw press / drag / release stream with
//! no click or double-click events, so this module owns the state needed to
//! recognise the toy's gestures from that stream:
//!
//! * a click on empty background spawns a gear under the cursor;
//! * a click on a gear toggles its spin;
//! * a second click on the same gear inside the double-click window deletes
//!   it (the first click of the pair has already toggled the spin, matching
//!   the behaviour of nested click/double-click handlers);
//! * a press that moves drags the pressed gear, and suppresses click
//!   recognition for that press entirely.
//!
//! The controller owns the active drag target; gears themselves carry no
//! reference back to it.

use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use rand::RngExt;
use ratatui::style::Color;

use crate::{
    config::AppConfig,
    model::{GearId, Point, Viewport, scene::Scene},
};

/// Smallest new-gear diameter, as a fraction of the viewport width.
const MIN_SIZE_RATIO: f64 = 0.1;
/// Largest new-gear diameter, as a fraction of the viewport width.
const MAX_SIZE_RATIO: f64 = 0.3;

/// The press currently in progress, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Press {
    /// Pressed on a gear: the drag target until release.
    Gear { id: GearId, moved: bool },
    /// Pressed on empty background.
    Background { moved: bool },
}

pub(crate) struct PointerController {
    press: Option<Press>,
    last_click: Option<(GearId, Instant)>,
    double_click_window: Duration,
}

impl PointerController {
    pub(crate) fn new(config: &AppConfig) -> Self {
        Self {
            press: None,
            last_click: None,
            double_click_window: Duration::from_millis(config.double_click_millis),
        }
    }

    /// Routes one raw mouse event into the gesture state machine, applying
    /// any resulting mutation to the scene.
    ///
    /// `now` is the arrival time of the event, used only for double-click
    /// recognition.
    pub(crate) fn process_pointer_event(
        &mut self,
        mouse: MouseEvent,
        now: Instant,
        scene: &mut Scene,
        viewport: Viewport,
    ) {
        let position = Point::new(f64::from(mouse.column), f64::from(mouse.row));

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.press_at(position, scene),
            MouseEventKind::Drag(MouseButton::Left) => self.drag_to(position, scene),
            MouseEventKind::Up(MouseButton::Left) => self.release_at(position, now, scene, viewport),
            _ => {}
        }
    }

    /// Creates the initial gear, centred in the viewport.
    ///
    /// Called once at startup so the scene is never empty on first load.
    pub(crate) fn spawn_default_gear(&self, scene: &mut Scene, viewport: Viewport) {
        self.spawn_gear(scene, viewport.center(), viewport);
    }

    fn press_at(&mut self, position: Point, scene: &Scene) {
        self.press = Some(match scene.gear_at(position) {
            Some(id) => Press::Gear { id, moved: false },
            None => Press::Background { moved: false },
        });
    }

    fn drag_to(&mut self, position: Point, scene: &mut Scene) {
        match &mut self.press {
            Some(Press::Gear { id, moved }) => {
                *moved = true;
                scene.move_gear(*id, position);
            }
            Some(Press::Background { moved }) => *moved = true,
            None => {}
        }
    }

    fn release_at(&mut self, position: Point, now: Instant, scene: &mut Scene, viewport: Viewport) {
        match self.press.take() {
            // An unmoved press is a click
            Some(Press::Gear { id, moved: false }) => self.click_gear(id, now, scene),
            Some(Press::Background { moved: false }) => {
                self.spawn_gear(scene, position, viewport);
            }

            // A moved press was a drag; releasing it clears the drag target
            // and no click is recognised
            Some(_) | None => {}
        }
    }

    fn click_gear(&mut self, id: GearId, now: Instant, scene: &mut Scene) {
        match self.last_click {
            Some((last_id, at))
                if last_id == id && now.duration_since(at) <= self.double_click_window =>
            {
                // Second click of a double-click. The first click already
                // toggled the spin.
                scene.delete_gear(id);
                self.last_click = None;
            }
            _ => {
                scene.toggle_spin(id);
                self.last_click = Some((id, now));
            }
        }
    }

    /// Creates a gear at the given position, sized and coloured at random
    /// per the viewport-derived ranges.
    fn spawn_gear(&self, scene: &mut Scene, position: Point, viewport: Viewport) {
        scene.create_gear(position, random_size(viewport), random_color());
    }
}

fn random_size(viewport: Viewport) -> f64 {
    let mut rng = rand::rng();
    rng.random_range(MIN_SIZE_RATIO..=MAX_SIZE_RATIO) * viewport.width
}

fn random_color() -> Color {
    let mut rng = rand::rng();
    Color::Rgb(rng.random(), rng.random(), rng.random())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    const VIEWPORT: Viewport = Viewport {
        width: 400.0,
        height: 400.0,
    };

    fn controller() -> PointerController {
        PointerController::new(&AppConfig::default())
    }

    fn mouse(kind: MouseEventKind, x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn press(ctrl: &mut PointerController, scene: &mut Scene, x: u16, y: u16, at: Instant) {
        let event = mouse(MouseEventKind::Down(MouseButton::Left), x, y);
        ctrl.process_pointer_event(event, at, scene, VIEWPORT);
    }

    fn drag(ctrl: &mut PointerController, scene: &mut Scene, x: u16, y: u16, at: Instant) {
        let event = mouse(MouseEventKind::Drag(MouseButton::Left), x, y);
        ctrl.process_pointer_event(event, at, scene, VIEWPORT);
    }

    fn release(ctrl: &mut PointerController, scene: &mut Scene, x: u16, y: u16, at: Instant) {
        let event = mouse(MouseEventKind::Up(MouseButton::Left), x, y);
        ctrl.process_pointer_event(event, at, scene, VIEWPORT);
    }

    fn click(ctrl: &mut PointerController, scene: &mut Scene, x: u16, y: u16, at: Instant) {
        press(ctrl, scene, x, y, at);
        release(ctrl, scene, x, y, at);
    }

    #[test]
    fn background_click_spawns_a_gear_at_the_cursor() {
        let mut ctrl = controller();
        let mut scene = Scene::new();

        click(&mut ctrl, &mut scene, 120, 80, Instant::now());

        assert_eq!(scene.len(), 1);
        let gear = &scene.gears()[0];
        assert_eq!(gear.position, Point::new(120.0, 80.0));
        assert!(gear.spinning);

        let min = MIN_SIZE_RATIO * VIEWPORT.width;
        let max = MAX_SIZE_RATIO * VIEWPORT.width;
        assert!(gear.size >= min && gear.size <= max);
    }

    #[test]
    fn gear_click_toggles_spin_without_spawning() {
        let mut ctrl = controller();
        let mut scene = Scene::new();
        let id = scene.create_gear(Point::new(100.0, 100.0), 50.0, Color::Red);

        click(&mut ctrl, &mut scene, 100, 100, Instant::now());

        assert_eq!(scene.len(), 1);
        assert!(!scene.gears()[0].spinning);

        // A later click toggles it back on
        let later = Instant::now() + Duration::from_secs(5);
        click(&mut ctrl, &mut scene, 100, 100, later);
        assert!(scene.gears()[0].spinning);
        assert_eq!(scene.gears()[0].id, id);
    }

    #[test]
    fn double_click_deletes_the_gear() {
        let mut ctrl = controller();
        let mut scene = Scene::new();
        scene.create_gear(Point::new(100.0, 100.0), 50.0, Color::Red);

        let first = Instant::now();
        let second = first + Duration::from_millis(150);
        click(&mut ctrl, &mut scene, 100, 100, first);
        click(&mut ctrl, &mut scene, 100, 100, second);

        assert_eq!(scene.len(), 0);
    }

    #[test]
    fn slow_second_click_toggles_instead_of_deleting() {
        let mut ctrl = controller();
        let mut scene = Scene::new();
        scene.create_gear(Point::new(100.0, 100.0), 50.0, Color::Red);

        let first = Instant::now();
        let second = first + Duration::from_secs(2);
        click(&mut ctrl, &mut scene, 100, 100, first);
        click(&mut ctrl, &mut scene, 100, 100, second);

        assert_eq!(scene.len(), 1);
        assert!(scene.gears()[0].spinning);
    }

    #[test]
    fn double_click_on_different_gears_does_not_delete() {
        let mut ctrl = controller();
        let mut scene = Scene::new();
        scene.create_gear(Point::new(50.0, 50.0), 20.0, Color::Red);
        scene.create_gear(Point::new(200.0, 200.0), 20.0, Color::Blue);

        let first = Instant::now();
        let second = first + Duration::from_millis(100);
        click(&mut ctrl, &mut scene, 50, 50, first);
        click(&mut ctrl, &mut scene, 200, 200, second);

        assert_eq!(scene.len(), 2);
        assert!(scene.gears().iter().all(|gear| !gear.spinning));
    }

    #[test]
    fn drag_moves_the_gear_and_release_clears_the_target() {
        let mut ctrl = controller();
        let mut scene = Scene::new();
        scene.create_gear(Point::new(100.0, 100.0), 50.0, Color::Red);

        let at = Instant::now();
        press(&mut ctrl, &mut scene, 100, 100, at);
        drag(&mut ctrl, &mut scene, 150, 200, at);
        drag(&mut ctrl, &mut scene, 200, 300, at);
        release(&mut ctrl, &mut scene, 200, 300, at);

        assert_eq!(scene.gears()[0].position, Point::new(200.0, 300.0));

        // Further motion without a new press must not move the gear
        drag(&mut ctrl, &mut scene, 10, 10, at);
        assert_eq!(scene.gears()[0].position, Point::new(200.0, 300.0));
    }

    #[test]
    fn a_moved_press_is_not_a_click() {
        let mut ctrl = controller();
        let mut scene = Scene::new();
        scene.create_gear(Point::new(100.0, 100.0), 50.0, Color::Red);

        // Dragging a gear leaves its spin untouched
        let at = Instant::now();
        press(&mut ctrl, &mut scene, 100, 100, at);
        drag(&mut ctrl, &mut scene, 120, 120, at);
        release(&mut ctrl, &mut scene, 120, 120, at);
        assert!(scene.gears()[0].spinning);

        // Dragging across the background spawns nothing
        press(&mut ctrl, &mut scene, 300, 300, at);
        drag(&mut ctrl, &mut scene, 320, 320, at);
        release(&mut ctrl, &mut scene, 320, 320, at);
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn press_on_overlapping_gears_targets_the_topmost() {
        let mut ctrl = controller();
        let mut scene = Scene::new();
        let below = scene.create_gear(Point::new(100.0, 100.0), 50.0, Color::Red);
        let above = scene.create_gear(Point::new(110.0, 100.0), 50.0, Color::Blue);

        let at = Instant::now();
        press(&mut ctrl, &mut scene, 105, 100, at);
        drag(&mut ctrl, &mut scene, 240, 40, at);
        release(&mut ctrl, &mut scene, 240, 40, at);

        let moved = scene.gears().iter().find(|g| g.id == above).unwrap();
        let still = scene.gears().iter().find(|g| g.id == below).unwrap();
        assert_eq!(moved.position, Point::new(240.0, 40.0));
        assert_eq!(still.position, Point::new(100.0, 100.0));
    }

    #[test]
    fn default_gear_is_centred_and_spinning() {
        let ctrl = controller();
        let mut scene = Scene::new();

        ctrl.spawn_default_gear(&mut scene, VIEWPORT);

        assert_eq!(scene.len(), 1);
        let gear = &scene.gears()[0];
        assert_eq!(gear.position, VIEWPORT.center());
        assert!(gear.spinning);
        assert_eq!(gear.rotation, 0.0);
    }
}
