//! Timetabling domain models.
//!
//! Provides the core data types for representing a week-shaped
//! timetabling problem and its mutable solution state.
//!
//! # Domain Mappings
//!
//! | timetabler | Teaching | CSP |
//! |------------|----------|-----|
//! | TimeModel | Week grid of day/hour blocks | Value coordinates |
//! | Room | Classroom or laboratory | Shared resource |
//! | Group | One section of a course | Variable |
//! | Course | Section bundle to expand | Variable template |
//! | ScheduleState | Partial timetable | Assignment + occupancy |

mod course;
mod group;
mod room;
mod state;
mod time_model;

pub use course::Course;
pub use group::{Group, Placement};
pub use room::{Room, RoomType};
pub use state::ScheduleState;
pub use time_model::TimeModel;
