//! Mutable schedule state.
//!
//! Binds one [`TimeModel`] to the full room set and the current partial
//! assignment map. [`ScheduleState::assign`] / [`ScheduleState::unassign`]
//! are the only mutation surface, which keeps the search's backtracking
//! exactly reversible.
//!
//! # Invariant
//! The assignment map and each room's occupied-cell set stay mutually
//! consistent: every assignment made here is reflected as occupied cells
//! in exactly the room it names. Cells pre-occupied on a room *before*
//! state construction model externally known unavailability and have no
//! assignment-map entry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Group, Placement, Room, TimeModel};

/// The mutable aggregate a scheduling run operates on.
///
/// Rooms live in a name-ordered map so that every iteration over them
/// follows the same documented total order — a requirement for
/// reproducible search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleState {
    time_model: TimeModel,
    rooms: BTreeMap<String, Room>,
    assignments: BTreeMap<String, Placement>,
}

impl ScheduleState {
    /// Creates a state from a time model and the finalized room set.
    ///
    /// Rooms arriving with pre-occupied cells keep them; those cells act
    /// as externally blocked slots.
    pub fn new(time_model: TimeModel, rooms: Vec<Room>) -> Self {
        Self {
            time_model,
            rooms: rooms.into_iter().map(|r| (r.name.clone(), r)).collect(),
            assignments: BTreeMap::new(),
        }
    }

    /// The shared time model.
    pub fn time_model(&self) -> &TimeModel {
        &self.time_model
    }

    /// Looks up a room by name.
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.get(name)
    }

    /// Rooms in name order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// The finalized `group id → placement` map.
    pub fn assignments(&self) -> &BTreeMap<String, Placement> {
        &self.assignments
    }

    /// The placement recorded for a group, if any.
    pub fn assignment_for(&self, group_id: &str) -> Option<&Placement> {
        self.assignments.get(group_id)
    }

    /// Number of recorded assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Attempts to bind `group` to `room_name` at (`day`, `start_block`).
    ///
    /// Validates, in order, short-circuiting on the first failure:
    /// 1. the room exists;
    /// 2. its type equals the group's required type;
    /// 3. its capacity satisfies the group's minimum size, when set;
    /// 4. the span fits the week grid;
    /// 5. the span is free in that room.
    ///
    /// On success the room is occupied, the group's assignment is set,
    /// and the map entry recorded. On failure nothing changes — a
    /// rejected call is all-or-nothing.
    pub fn assign(
        &mut self,
        group: &mut Group,
        room_name: &str,
        day: usize,
        start_block: usize,
    ) -> bool {
        let Some(room) = self.rooms.get_mut(room_name) else {
            return false;
        };
        if room.room_type != group.required_room_type {
            return false;
        }
        if let Some(minimum) = group.minimum_size {
            if room.capacity < minimum {
                return false;
            }
        }
        if !self.time_model.is_valid_slot(day, start_block, group.duration) {
            return false;
        }
        if !room.is_available(day, start_block, group.duration) {
            return false;
        }

        room.occupy(day, start_block, group.duration);
        let placement = Placement {
            room: room_name.to_string(),
            day,
            start_block,
        };
        group.assignment = Some(placement.clone());
        self.assignments.insert(group.id.clone(), placement);
        true
    }

    /// Reverts a group's assignment. No-op if none is recorded.
    pub fn unassign(&mut self, group: &mut Group) {
        let Some(placement) = self.assignments.remove(&group.id) else {
            return;
        };
        if let Some(room) = self.rooms.get_mut(&placement.room) {
            room.release(placement.day, placement.start_block, group.duration);
        }
        group.assignment = None;
    }
}
