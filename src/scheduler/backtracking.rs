//! Backtracking CSP search with MRV, LCV, and forward checking.
//!
//! # Algorithm
//!
//! 1. Enumerate each group's candidate domain upfront: every
//!    `(room, day, start_block)` triple whose room type, capacity, and
//!    current availability fit.
//! 2. Recurse: pick the unassigned group with the fewest remaining
//!    candidates (MRV, ties by input order), order its candidates by how
//!    much freedom they leave everyone else (LCV, descending), assign,
//!    forward-check the other domains, and backtrack on dead ends.
//! 3. Succeed when no group remains unassigned; fail once every
//!    candidate of some group is exhausted.
//!
//! # Complexity
//! Domain construction is O(groups × rooms × days × blocks). The LCV
//! scoring is O(domain × groups × domain) per decision point — the
//! dominant cost, traded for a smaller search tree.
//!
//! # Determinism
//! Every ordering follows a documented total order: domains enumerate
//! rooms by name, then day, then start block; MRV breaks ties by input
//! order; LCV breaks ties by preferred room first, then room name, day,
//! and start block. Identical inputs produce identical assignments.
//!
//! # Reference
//! Russell & Norvig (2021), "Artificial Intelligence: A Modern
//! Approach", Ch. 6: Constraint Satisfaction Problems

use log::{debug, trace};

use crate::error::ScheduleError;
use crate::models::{Group, ScheduleState};

/// One still-feasible `(room, day, start_block)` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Candidate {
    room: String,
    day: usize,
    start_block: usize,
}

/// Domain entries removed by one forward-checking pass, keyed by group
/// index so they can be restored verbatim on backtrack.
type RemovedEntries = Vec<(usize, Vec<Candidate>)>;

/// Backtracking scheduler over a [`ScheduleState`].
///
/// The search mutates the state in place through `assign`/`unassign`
/// only, so every probe is exactly reversible: a failed run leaves the
/// state bit-for-bit as it was before the call.
///
/// # Example
///
/// ```
/// use timetabler::models::{Group, Room, RoomType, ScheduleState, TimeModel};
/// use timetabler::scheduler::BacktrackingScheduler;
///
/// let time_model = TimeModel::new(vec!["Mon".into()], vec![7, 8]);
/// let rooms = vec![Room::standard("A1").with_capacity(30)];
/// let mut state = ScheduleState::new(time_model, rooms);
/// let mut groups = vec![Group::new("MAT101-G1", 2, RoomType::Standard)];
///
/// let scheduler = BacktrackingScheduler::new();
/// assert!(scheduler.schedule(&mut state, &mut groups).is_ok());
/// assert!(groups[0].is_assigned());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BacktrackingScheduler {
    step_limit: Option<u64>,
}

impl BacktrackingScheduler {
    /// Creates an unbounded scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the search at `limit` candidate attempts.
    ///
    /// An unconstrained search can be exponential in the number of
    /// groups; the limit aborts it with
    /// [`ScheduleError::StepLimitReached`], fully unwound.
    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Finds an assignment for every group, or proves none exists.
    ///
    /// Groups arriving already assigned keep their placement; the search
    /// only binds the rest.
    ///
    /// # Errors
    /// [`ScheduleError::Exhausted`] when no feasible full assignment
    /// exists, [`ScheduleError::StepLimitReached`] when the injected
    /// budget fires. On either error the state's occupancy and
    /// assignment map are exactly as they were before the call.
    pub fn schedule(
        &self,
        state: &mut ScheduleState,
        groups: &mut [Group],
    ) -> Result<(), ScheduleError> {
        let mut domains: Vec<Vec<Candidate>> = groups
            .iter()
            .map(|group| enumerate_domain(state, group))
            .collect();

        debug!(
            "search start: {} groups over {} rooms, domain sizes {:?}",
            groups.len(),
            state.room_count(),
            domains.iter().map(Vec::len).collect::<Vec<_>>()
        );

        let mut steps = 0u64;
        let found = self.backtrack(state, groups, &mut domains, &mut steps)?;
        if found {
            debug!("search succeeded after {steps} steps");
            Ok(())
        } else {
            debug!("search exhausted after {steps} steps");
            Err(ScheduleError::Exhausted)
        }
    }

    fn backtrack(
        &self,
        state: &mut ScheduleState,
        groups: &mut [Group],
        domains: &mut [Vec<Candidate>],
        steps: &mut u64,
    ) -> Result<bool, ScheduleError> {
        let unassigned: Vec<usize> = (0..groups.len())
            .filter(|&i| !groups[i].is_assigned())
            .collect();

        // MRV: smallest remaining domain; the index in the key breaks
        // ties by input order. No unassigned group left means success.
        let Some(target) = unassigned
            .iter()
            .copied()
            .min_by_key(|&i| (domains[i].len(), i))
        else {
            return Ok(true);
        };

        let ordered = order_candidates(state, groups, domains, &unassigned, target);

        for candidate in ordered {
            if let Some(limit) = self.step_limit {
                if *steps >= limit {
                    return Err(ScheduleError::StepLimitReached { limit });
                }
            }
            *steps += 1;

            // Domains can be stale relative to the authoritative state;
            // a rejected assign degrades to skipping the candidate.
            if !state.assign(
                &mut groups[target],
                &candidate.room,
                candidate.day,
                candidate.start_block,
            ) {
                trace!(
                    "stale candidate skipped: '{}' -> {} day {} block {}",
                    groups[target].id,
                    candidate.room,
                    candidate.day,
                    candidate.start_block
                );
                continue;
            }

            match forward_check(state, groups, domains, target, &candidate.room) {
                Some(removed) => match self.backtrack(state, groups, domains, steps) {
                    Ok(true) => return Ok(true),
                    Ok(false) => {
                        restore_domains(domains, removed);
                        state.unassign(&mut groups[target]);
                    }
                    Err(err) => {
                        restore_domains(domains, removed);
                        state.unassign(&mut groups[target]);
                        return Err(err);
                    }
                },
                // Forward checking wiped some domain: a dead end one ply
                // early. Removals were already restored; revert the
                // assignment and try the next candidate.
                None => state.unassign(&mut groups[target]),
            }
        }

        Ok(false)
    }
}

/// Enumerates every candidate triple currently feasible for `group`.
///
/// Rooms are visited in name order, days and start blocks ascending,
/// which fixes the domain's base ordering.
fn enumerate_domain(state: &ScheduleState, group: &Group) -> Vec<Candidate> {
    let time_model = state.time_model();
    let blocks = time_model.blocks_per_day();
    if group.duration == 0 || group.duration > blocks {
        return Vec::new();
    }
    let max_start = blocks - group.duration + 1;

    let mut domain = Vec::new();
    for room in state.rooms() {
        if room.room_type != group.required_room_type {
            continue;
        }
        if let Some(minimum) = group.minimum_size {
            if room.capacity < minimum {
                continue;
            }
        }
        for day in 1..=time_model.days_count() {
            for start_block in 1..=max_start {
                if room.is_available(day, start_block, group.duration) {
                    domain.push(Candidate {
                        room: room.name.clone(),
                        day,
                        start_block,
                    });
                }
            }
        }
    }
    domain
}

/// Orders `target`'s candidates least-constraining first.
///
/// Each candidate is provisionally committed; its impact is the sum of
/// the other unassigned groups' surviving candidate counts under that
/// commit. Higher impact = more freedom left = tried earlier. Ties
/// break by preferred room first, then room name, day, start block.
fn order_candidates(
    state: &mut ScheduleState,
    groups: &mut [Group],
    domains: &[Vec<Candidate>],
    unassigned: &[usize],
    target: usize,
) -> Vec<Candidate> {
    let preferred = groups[target].preferred_room.clone();

    let mut scored: Vec<(Candidate, usize)> = Vec::with_capacity(domains[target].len());
    for candidate in &domains[target] {
        let committed = state.assign(
            &mut groups[target],
            &candidate.room,
            candidate.day,
            candidate.start_block,
        );
        // A candidate the state already rejects scores zero and sorts
        // last; the main loop re-verifies and skips it anyway.
        let impact = if committed {
            let sum = unassigned
                .iter()
                .filter(|&&i| i != target)
                .map(|&i| surviving_candidates(state, &groups[i], &domains[i]))
                .sum();
            state.unassign(&mut groups[target]);
            sum
        } else {
            0
        };
        scored.push((candidate.clone(), impact));
    }

    scored.sort_by(|(a, impact_a), (b, impact_b)| {
        let a_preferred = preferred.as_deref() == Some(a.room.as_str());
        let b_preferred = preferred.as_deref() == Some(b.room.as_str());
        impact_b
            .cmp(impact_a)
            .then_with(|| b_preferred.cmp(&a_preferred))
            .then_with(|| a.room.cmp(&b.room))
            .then_with(|| a.day.cmp(&b.day))
            .then_with(|| a.start_block.cmp(&b.start_block))
    });

    scored.into_iter().map(|(candidate, _)| candidate).collect()
}

/// Counts the entries of `group`'s domain still available in the
/// current state.
fn surviving_candidates(state: &ScheduleState, group: &Group, domain: &[Candidate]) -> usize {
    domain
        .iter()
        .filter(|candidate| {
            state
                .room(&candidate.room)
                .is_some_and(|room| {
                    room.is_available(candidate.day, candidate.start_block, group.duration)
                })
        })
        .count()
}

/// Prunes candidates invalidated by the assignment just made in
/// `assigned_room`.
///
/// Records exactly what was removed, keyed by group index. If any
/// domain empties, everything removed so far is restored and `None`
/// signals the dead end.
fn forward_check(
    state: &ScheduleState,
    groups: &[Group],
    domains: &mut [Vec<Candidate>],
    target: usize,
    assigned_room: &str,
) -> Option<RemovedEntries> {
    let mut removed: RemovedEntries = Vec::new();

    for i in 0..groups.len() {
        if i == target || groups[i].is_assigned() {
            continue;
        }
        let duration = groups[i].duration;

        let mut kept = Vec::with_capacity(domains[i].len());
        let mut gone = Vec::new();
        for candidate in domains[i].drain(..) {
            // Only the just-occupied room's availability changed.
            let still_open = candidate.room != assigned_room
                || state.room(&candidate.room).is_some_and(|room| {
                    room.is_available(candidate.day, candidate.start_block, duration)
                });
            if still_open {
                kept.push(candidate);
            } else {
                gone.push(candidate);
            }
        }
        domains[i] = kept;

        if !gone.is_empty() {
            let wiped = domains[i].is_empty();
            removed.push((i, gone));
            if wiped {
                trace!("forward check wiped the domain of '{}'", groups[i].id);
                restore_domains(domains, removed);
                return None;
            }
        }
    }

    Some(removed)
}

/// Puts removed entries back into their domains.
///
/// Restored entries are appended; domain storage order is free to
/// drift because every consumer orders by total keys, not position.
fn restore_domains(domains: &mut [Vec<Candidate>], removed: RemovedEntries) {
    for (i, entries) in removed {
        domains[i].extend(entries);
    }
}
