//! Input validation for timetabling problems.
//!
//! Checks structural integrity of rooms and groups before scheduling.
//! Detects:
//! - Duplicate room names and group ids
//! - Durations that can never fit the week grid
//! - Preferred-room references to unknown rooms
//! - Capacity demands no room of the required type can meet
//!
//! These are configuration mistakes, reported all at once; a
//! structurally valid input can still turn out unsatisfiable during
//! the search.

use std::collections::HashSet;

use crate::models::{Group, Room, TimeModel};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two rooms or two groups share the same identity.
    DuplicateId,
    /// A group's duration is zero.
    ZeroDuration,
    /// A group's duration exceeds the blocks in a day.
    DurationExceedsDay,
    /// A preferred room does not exist.
    UnknownRoomReference,
    /// No room of the required type exists, or none is large enough.
    UnsatisfiableRoomDemand,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a scheduling run.
///
/// Checks:
/// 1. No duplicate room names
/// 2. No duplicate group ids
/// 3. Every group duration is at least 1 and fits inside one day
/// 4. Every preferred room points to an existing room
/// 5. Every group's required type/minimum size is met by at least
///    one room
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    time_model: &TimeModel,
    rooms: &[Room],
    groups: &[Group],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut room_names = HashSet::new();
    for room in rooms {
        if !room_names.insert(room.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room name: {}", room.name),
            ));
        }
    }

    let mut group_ids = HashSet::new();
    for group in groups {
        if !group_ids.insert(group.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate group id: {}", group.id),
            ));
        }

        if group.duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("Group '{}' has zero duration", group.id),
            ));
        } else if group.duration > time_model.blocks_per_day() {
            errors.push(ValidationError::new(
                ValidationErrorKind::DurationExceedsDay,
                format!(
                    "Group '{}' needs {} blocks but a day has {}",
                    group.id,
                    group.duration,
                    time_model.blocks_per_day()
                ),
            ));
        }

        if let Some(preferred) = &group.preferred_room {
            if !room_names.contains(preferred.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownRoomReference,
                    format!(
                        "Group '{}' prefers unknown room '{preferred}'",
                        group.id
                    ),
                ));
            }
        }

        let best_capacity = rooms
            .iter()
            .filter(|r| r.room_type == group.required_room_type)
            .map(|r| r.capacity)
            .max();
        match best_capacity {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::UnsatisfiableRoomDemand,
                format!(
                    "Group '{}' requires a {} room but none exists",
                    group.id, group.required_room_type
                ),
            )),
            Some(capacity) => {
                if let Some(minimum) = group.minimum_size {
                    if capacity < minimum {
                        errors.push(ValidationError::new(
                            ValidationErrorKind::UnsatisfiableRoomDemand,
                            format!(
                                "Group '{}' needs capacity {} but the largest {} room holds {}",
                                group.id, minimum, group.required_room_type, capacity
                            ),
                        ));
                    }
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
