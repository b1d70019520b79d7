//! Group (schedulable unit) model.
//!
//! A group is one unit of demand: a span of consecutive blocks that must
//! land in a room of the required type. Groups are produced by expanding
//! a [`Course`](super::Course) before the search starts; their assignment
//! transitions unassigned → assigned → unassigned repeatedly while the
//! search backtracks.

use serde::{Deserialize, Serialize};

use super::RoomType;

/// A finalized room/day/block binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Assigned room name.
    pub room: String,
    /// Day index (1-based).
    pub day: usize,
    /// First block of the span (1-based).
    pub start_block: usize,
}

/// A schedulable teaching unit.
///
/// Identity is the unique `id`, conventionally `"{course_code}-G{n}"`.
/// The demand attributes are immutable; only `assignment` changes, and
/// only through [`ScheduleState`](super::ScheduleState).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique group identifier.
    pub id: String,
    /// Code of the course this group was expanded from.
    pub course_code: Option<String>,
    /// Span length in consecutive blocks (>= 1).
    pub duration: usize,
    /// Room class this group must be placed in.
    pub required_room_type: RoomType,
    /// Smallest room capacity that fits this group. `None` = any size.
    pub minimum_size: Option<u32>,
    /// Advisory room wish; prioritized by the search, never required.
    pub preferred_room: Option<String>,
    /// Current binding, `None` while unassigned.
    pub assignment: Option<Placement>,
}

impl Group {
    /// Creates a new unassigned group.
    pub fn new(id: impl Into<String>, duration: usize, required_room_type: RoomType) -> Self {
        Self {
            id: id.into(),
            course_code: None,
            duration,
            required_room_type,
            minimum_size: None,
            preferred_room: None,
            assignment: None,
        }
    }

    /// Sets the parent course code.
    pub fn with_course_code(mut self, code: impl Into<String>) -> Self {
        self.course_code = Some(code.into());
        self
    }

    /// Sets the minimum room capacity.
    pub fn with_minimum_size(mut self, size: u32) -> Self {
        self.minimum_size = Some(size);
        self
    }

    /// Sets the advisory preferred room.
    pub fn with_preferred_room(mut self, room: impl Into<String>) -> Self {
        self.preferred_room = Some(room.into());
        self
    }

    /// Whether the group currently holds an assignment.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.assignment.is_some()
    }
}
