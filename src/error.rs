//! Error taxonomy for the timetabling core.
//!
//! Three kinds of failure exist, and only two of them are errors:
//!
//! - **Configuration errors** (`UnknownDayLabel` through `UnknownRoomTag`):
//!   the input references labels or tags outside the built model. Surfaced
//!   immediately, never retried.
//! - **Search outcomes** (`Exhausted`, `StepLimitReached`): the solver ran
//!   to completion (or its injected budget) without finding a full
//!   assignment. A legitimate result for unsatisfiable inputs,
//!   distinguishable from configuration errors by variant.
//! - **Constraint violations** are *not* represented here. A rejected
//!   [`ScheduleState::assign`](crate::models::ScheduleState::assign) is the
//!   expected control-flow signal of the search and is returned as `bool`.

use thiserror::Error;

/// Errors produced by the timetabling core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// A day label was not part of the model's built label set.
    #[error("unknown day label '{0}'")]
    UnknownDayLabel(String),

    /// An hour label was not part of the model's built label set.
    #[error("unknown hour label '{0}'")]
    UnknownHourLabel(u32),

    /// A day index fell outside `1..=days_count`.
    #[error("day index {day} out of range 1..={days}")]
    DayIndexOutOfRange { day: usize, days: usize },

    /// A block index fell outside `1..=blocks_per_day`.
    #[error("block index {block} out of range 1..={blocks}")]
    BlockIndexOutOfRange { block: usize, blocks: usize },

    /// A room-type tag did not normalize to a known room class.
    #[error("unknown room type tag '{0}'")]
    UnknownRoomTag(String),

    /// The search proved that no feasible full assignment exists
    /// under the current rooms, groups, and occupancy.
    #[error("no feasible assignment exists for the given rooms and groups")]
    Exhausted,

    /// The caller-injected step budget fired before the search finished.
    #[error("search aborted after reaching the step limit of {limit}")]
    StepLimitReached { limit: u64 },
}

impl ScheduleError {
    /// Whether this error describes malformed input rather than a
    /// search outcome.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(
            self,
            ScheduleError::Exhausted | ScheduleError::StepLimitReached { .. }
        )
    }
}
