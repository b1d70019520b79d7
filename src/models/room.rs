//! Room model.
//!
//! A room is a bookable resource with a type tag, a capacity, and a set
//! of currently occupied `(day, block)` cells. Rooms never read each
//! other's state; all coordination happens in
//! [`ScheduleState`](super::ScheduleState).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::ScheduleError;

/// Room classification.
///
/// The domain uses two classes — standard teaching rooms and
/// specialized labs — with `Custom` left open for extensibility.
/// External tag spellings are normalized through [`RoomType::parse_tag`];
/// unknown tags are a configuration error, never a silent new room class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    /// Standard teaching room.
    Standard,
    /// Specialized laboratory.
    Lab,
    /// Domain-specific room class.
    Custom(String),
}

impl RoomType {
    /// Normalizes an external tag into the closed tag set.
    ///
    /// Accepts `"REGULAR"` and `"STANDARD"` for [`RoomType::Standard`]
    /// and `"LAB"` for [`RoomType::Lab`], case-insensitively.
    ///
    /// # Errors
    /// `UnknownRoomTag` for any other spelling.
    pub fn parse_tag(tag: &str) -> Result<Self, ScheduleError> {
        match tag.trim().to_ascii_uppercase().as_str() {
            "REGULAR" | "STANDARD" => Ok(RoomType::Standard),
            "LAB" => Ok(RoomType::Lab),
            _ => Err(ScheduleError::UnknownRoomTag(tag.trim().to_string())),
        }
    }

    /// Infers the room class from a course code.
    ///
    /// Codes ending in `L` (lab section) or `P` (practical section)
    /// require a lab; everything else takes a standard room.
    pub fn infer_from_course_code(code: &str) -> Self {
        let code = code.trim().to_ascii_uppercase();
        if code.ends_with('L') || code.ends_with('P') {
            RoomType::Lab
        } else {
            RoomType::Standard
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomType::Standard => write!(f, "REGULAR"),
            RoomType::Lab => write!(f, "LAB"),
            RoomType::Custom(tag) => write!(f, "{tag}"),
        }
    }
}

/// A bookable room.
///
/// Identity is the unique `name`. Occupancy is a set of
/// `(day_index, block_index)` cells: a cell is either present (occupied)
/// or absent (free).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room name.
    pub name: String,
    /// Seats available.
    pub capacity: u32,
    /// Room classification.
    pub room_type: RoomType,
    /// Occupied `(day_index, block_index)` cells.
    occupied: HashSet<(usize, usize)>,
}

impl Room {
    /// Creates a new room with zero capacity.
    pub fn new(name: impl Into<String>, room_type: RoomType) -> Self {
        Self {
            name: name.into(),
            capacity: 0,
            room_type,
            occupied: HashSet::new(),
        }
    }

    /// Creates a standard teaching room.
    pub fn standard(name: impl Into<String>) -> Self {
        Self::new(name, RoomType::Standard)
    }

    /// Creates a laboratory.
    pub fn lab(name: impl Into<String>) -> Self {
        Self::new(name, RoomType::Lab)
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Whether none of the `duration` consecutive cells from
    /// `start_block` in `day` are occupied.
    pub fn is_available(&self, day: usize, start_block: usize, duration: usize) -> bool {
        (0..duration).all(|i| !self.occupied.contains(&(day, start_block + i)))
    }

    /// Marks a span of cells occupied.
    ///
    /// Idempotent: cells already occupied stay occupied without error,
    /// so forward-checking logic may probe optimistically.
    pub fn occupy(&mut self, day: usize, start_block: usize, duration: usize) {
        for i in 0..duration {
            self.occupied.insert((day, start_block + i));
        }
    }

    /// Marks a span of cells free. Idempotent if already free.
    pub fn release(&mut self, day: usize, start_block: usize, duration: usize) {
        for i in 0..duration {
            self.occupied.remove(&(day, start_block + i));
        }
    }

    /// The currently occupied cells.
    pub fn occupied_cells(&self) -> &HashSet<(usize, usize)> {
        &self.occupied
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }
}
