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

//! Scene state for the gear collection.
//!
//! This module owns the one piece of mutable application state: the ordered
//! collection of gears. All operations are total—an unknown id is a no-op,
//! never an error—and every mutation happens on the main event-processing
//! thread, so no locking is involved.
//!
//! Insertion order is paint order: the gear created last draws on top and is
//! the first considered by hit-testing.

use ratatui::style::Color;

use crate::model::{Gear, GearId, Point};

/// How far a spinning gear turns on each animation frame, in degrees.
pub(crate) const SPIN_STEP_DEGREES: f64 = 1.0;

pub(crate) struct Scene {
    gears: Vec<Gear>,
    next_id: u64,
}

impl Scene {
    pub(crate) fn new() -> Self {
        Self {
            gears: Vec::new(),
            next_id: 0,
        }
    }

    /// Appends a new gear to the scene and returns its id.
    ///
    /// The gear starts at rotation zero, spinning. This never fails.
    pub(crate) fn create_gear(&mut self, position: Point, size: f64, color: Color) -> GearId {
        let id = GearId(self.next_id);
        self.next_id += 1;

        self.gears.push(Gear {
            id,
            position,
            size,
            color,
            rotation: 0.0,
            spinning: true,
        });

        id
    }

    /// Removes the gear with the matching id, if present.
    pub(crate) fn delete_gear(&mut self, id: GearId) {
        self.gears.retain(|gear| gear.id != id);
    }

    /// Flips the spinning flag for the matching gear, if present.
    pub(crate) fn toggle_spin(&mut self, id: GearId) {
        if let Some(gear) = self.gear_mut(id) {
            gear.spinning = !gear.spinning;
        }
    }

    /// Overwrites the position of the matching gear, if present.
    ///
    /// Coordinates are stored as given; out-of-viewport positions are not
    /// clamped.
    pub(crate) fn move_gear(&mut self, id: GearId, position: Point) {
        if let Some(gear) = self.gear_mut(id) {
            gear.position = position;
        }
    }

    /// Advances every spinning gear by one rotation step, wrapping modulo
    /// 360. Gears with spinning switched off are left untouched.
    pub(crate) fn advance_frame(&mut self) {
        for gear in self.gears.iter_mut().filter(|gear| gear.spinning) {
            gear.rotation = (gear.rotation + SPIN_STEP_DEGREES) % 360.0;
        }
    }

    /// Read-only view of the scene, in creation order.
    pub(crate) fn gears(&self) -> &[Gear] {
        &self.gears
    }

    pub(crate) fn len(&self) -> usize {
        self.gears.len()
    }

    /// The topmost gear whose bounding circle contains the given point.
    ///
    /// Gears are tested in reverse paint order so that overlapping gears
    /// resolve to the one drawn on top.
    pub(crate) fn gear_at(&self, point: Point) -> Option<GearId> {
        self.gears
            .iter()
            .rev()
            .find(|gear| {
                let dx = point.x - gear.position.x;
                let dy = point.y - gear.position.y;
                let radius = gear.size / 2.0;
                dx * dx + dy * dy <= radius * radius
            })
            .map(|gear| gear.id)
    }

    fn gear_mut(&mut self, id: GearId) -> Option<&mut Gear> {
        self.gears.iter_mut().find(|gear| gear.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: f64 = 50.0;
    const COLOR: Color = Color::Rgb(200, 100, 50);

    fn gear_by_id(scene: &Scene, id: GearId) -> &Gear {
        scene.gears().iter().find(|gear| gear.id == id).unwrap()
    }

    #[test]
    fn created_gears_have_unique_ids_in_creation_order() {
        let mut scene = Scene::new();

        let ids: Vec<GearId> = (0..10)
            .map(|i| scene.create_gear(Point::new(i as f64, 0.0), SIZE, COLOR))
            .collect();

        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }

        let snapshot: Vec<GearId> = scene.gears().iter().map(|gear| gear.id).collect();
        assert_eq!(snapshot, ids);
    }

    #[test]
    fn new_gear_starts_spinning_at_rotation_zero() {
        let mut scene = Scene::new();
        let id = scene.create_gear(Point::new(100.0, 100.0), SIZE, COLOR);

        let gear = gear_by_id(&scene, id);
        assert_eq!(gear.rotation, 0.0);
        assert!(gear.spinning);
    }

    #[test]
    fn advance_frame_wraps_rotation_modulo_360() {
        let mut scene = Scene::new();
        let id = scene.create_gear(Point::new(100.0, 100.0), SIZE, COLOR);

        for _ in 0..370 {
            scene.advance_frame();
        }

        assert_eq!(gear_by_id(&scene, id).rotation, 10.0);
    }

    #[test]
    fn advance_frame_skips_non_spinning_gears() {
        let mut scene = Scene::new();
        let stopped = scene.create_gear(Point::new(0.0, 0.0), SIZE, COLOR);
        let spinning = scene.create_gear(Point::new(90.0, 0.0), SIZE, COLOR);
        scene.toggle_spin(stopped);

        for _ in 0..5 {
            scene.advance_frame();
        }

        assert_eq!(gear_by_id(&scene, stopped).rotation, 0.0);
        assert_eq!(gear_by_id(&scene, spinning).rotation, 5.0);
    }

    #[test]
    fn toggle_spin_twice_restores_original_state() {
        let mut scene = Scene::new();
        let id = scene.create_gear(Point::new(0.0, 0.0), SIZE, COLOR);

        scene.toggle_spin(id);
        assert!(!gear_by_id(&scene, id).spinning);

        scene.toggle_spin(id);
        assert!(gear_by_id(&scene, id).spinning);
    }

    #[test]
    fn operations_on_unknown_ids_are_no_ops() {
        let mut scene = Scene::new();
        let id = scene.create_gear(Point::new(5.0, 5.0), SIZE, COLOR);
        let unknown = GearId(id.0 + 1000);

        scene.toggle_spin(unknown);
        scene.move_gear(unknown, Point::new(1.0, 1.0));
        scene.delete_gear(unknown);

        assert_eq!(scene.len(), 1);
        let gear = gear_by_id(&scene, id);
        assert_eq!(gear.position, Point::new(5.0, 5.0));
        assert!(gear.spinning);
    }

    #[test]
    fn delete_gear_removes_exactly_one_and_is_idempotent() {
        let mut scene = Scene::new();
        let a = scene.create_gear(Point::new(0.0, 0.0), SIZE, COLOR);
        let b = scene.create_gear(Point::new(90.0, 0.0), SIZE, COLOR);

        scene.delete_gear(a);
        let remaining: Vec<GearId> = scene.gears().iter().map(|gear| gear.id).collect();
        assert_eq!(remaining, vec![b]);

        scene.delete_gear(a);
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn move_gear_changes_position_only() {
        let mut scene = Scene::new();
        let id = scene.create_gear(Point::new(10.0, 10.0), SIZE, COLOR);
        scene.advance_frame();

        scene.move_gear(id, Point::new(200.0, 300.0));

        let gear = gear_by_id(&scene, id);
        assert_eq!(gear.position, Point::new(200.0, 300.0));
        assert_eq!(gear.size, SIZE);
        assert_eq!(gear.color, COLOR);
        assert_eq!(gear.rotation, 1.0);
        assert!(gear.spinning);
    }

    #[test]
    fn hit_test_picks_the_topmost_overlapping_gear() {
        let mut scene = Scene::new();
        let below = scene.create_gear(Point::new(100.0, 100.0), SIZE, COLOR);
        let above = scene.create_gear(Point::new(110.0, 100.0), SIZE, COLOR);

        // Both circles cover (105, 100); the later creation wins
        assert_eq!(scene.gear_at(Point::new(105.0, 100.0)), Some(above));
        // Only the first covers its far left edge
        assert_eq!(scene.gear_at(Point::new(80.0, 100.0)), Some(below));
        // Well outside both
        assert_eq!(scene.gear_at(Point::new(400.0, 400.0)), None);
    }
}
