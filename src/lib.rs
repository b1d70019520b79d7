//! Classroom timetabling core.
//!
//! Assigns schedulable teaching units ("groups") to discrete time/room
//! slots in a week-shaped calendar, such that no room hosts two
//! overlapping activities, each group lands in a room of its required
//! type, and group size never exceeds room capacity. The engine is a
//! backtracking constraint solver with MRV variable ordering, LCV value
//! ordering, and forward checking.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TimeModel`, `Room`, `Group`,
//!   `Course`, `Placement`, `ScheduleState`
//! - **`scheduler`**: The backtracking search engine
//! - **`validation`**: Input integrity checks (duplicate ids, impossible
//!   durations, dangling room references)
//! - **`error`**: The error taxonomy — configuration errors vs search
//!   outcomes
//!
//! # Boundary
//!
//! This crate is an in-process library: no I/O, no presentation.
//! Callers construct the rooms, the time model (optionally via
//! `TimeModel::from_availability`), and the expanded group list; after
//! a successful run they read `ScheduleState::assignments` and map
//! indices back to labels with `TimeModel::to_external`.
//!
//! # References
//!
//! - Russell & Norvig (2021), "Artificial Intelligence: A Modern
//!   Approach", Ch. 6: Constraint Satisfaction Problems
//! - Dechter (2003), "Constraint Processing"

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::ScheduleError;
