use std::collections::HashSet;

use crate::models::Course;
use crate::planner::config::PlanConfig;
use crate::planner::engine::UsageCounters;

/// Build the eligible candidate pool for one slot attempt.
///
/// Filters apply in a fixed order: exclude set, include intersection (only
/// when the include set is non-empty), max-repeats cap, no-reuse, then the
/// names rejected during the current slot attempt. The input slice is the
/// catalog's name-sorted pool, so the output ordering is stable and a given
/// draw always maps to the same course.
pub fn eligible_candidates<'a>(
    courses: &'a [Course],
    config: &PlanConfig,
    usage: &UsageCounters,
    rejected: &HashSet<String>,
) -> Vec<&'a Course> {
    let mut pool: Vec<&Course> = courses
        .iter()
        .filter(|c| !config.exclude.contains(&c.name))
        .collect();

    if !config.include.is_empty() {
        pool.retain(|c| config.include.contains(&c.name));
    }
    if let Some(limit) = config.max_repeats {
        pool.retain(|c| usage.repeat_count(c) < limit);
    }
    if !config.reuse_allowed {
        pool.retain(|c| !usage.was_used(&c.name));
    }
    pool.retain(|c| !rejected.contains(&c.name));

    pool
}

/// Map a draw onto the eligible pool. `None` when the pool is exhausted.
pub fn select<'a>(eligible: &[&'a Course], draw: u64) -> Option<&'a Course> {
    if eligible.is_empty() {
        return None;
    }
    let index = (draw % eligible.len() as u64) as usize;
    Some(eligible[index])
}
