//! Constraint-satisfaction search engine.
//!
//! Provides the backtracking scheduler that binds every group to a
//! room/day/block span or proves that no full assignment exists.
//!
//! # Heuristics
//!
//! - **MRV** (Minimum-Remaining-Values): always branch on the most
//!   constrained group, failing fast.
//! - **LCV** (Least-Constraining-Value): try the candidate that leaves
//!   the other groups the most options first.
//! - **Forward checking**: prune sibling domains after every
//!   assignment and detect dead ends one ply early.
//!
//! # Reference
//! Russell & Norvig (2021), "Artificial Intelligence: A Modern
//! Approach", Ch. 6

mod backtracking;

pub use backtracking::BacktrackingScheduler;
