use std::collections::{HashMap, HashSet};

use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::{Catalog, Course, MealPlan, PlanDay};
use crate::planner::config::PlanConfig;
use crate::planner::draws::DrawSource;
use crate::planner::selector::{eligible_candidates, select};

/// Outcome of presenting one proposed course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalResponse {
    Accept,
    Reject,
    Skip,
}

/// Actor consulted for each proposed course during generation.
///
/// The console prompt implements this for interactive runs; tests drive the
/// planner with a scripted transcript. Replaying the same transcript against
/// the same seed, catalog, and config reproduces the plan exactly.
pub trait ProposalReview {
    fn review(&mut self, day: usize, slot_type: &str, course: &Course) -> Result<ProposalResponse>;
}

/// Reviewer that accepts every proposal; used for non-interactive runs.
pub struct AutoAccept;

impl ProposalReview for AutoAccept {
    fn review(&mut self, _day: usize, _slot: &str, _course: &Course) -> Result<ProposalResponse> {
        Ok(ProposalResponse::Accept)
    }
}

/// Per-course occurrence tracking, owned by one generation run and discarded
/// with it.
#[derive(Debug, Default)]
pub struct UsageCounters {
    repeats: HashMap<String, u32>,
    used: HashSet<String>,
}

impl UsageCounters {
    fn key(course: &Course) -> String {
        format!("{}:{}", course.slot_type, course.name)
    }

    pub fn record(&mut self, course: &Course) {
        *self.repeats.entry(Self::key(course)).or_insert(0) += 1;
        self.used.insert(course.name.clone());
    }

    pub fn repeat_count(&self, course: &Course) -> u32 {
        self.repeats.get(&Self::key(course)).copied().unwrap_or(0)
    }

    pub fn was_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }
}

/// Generate a meal plan over `config.days` days.
///
/// Slots are visited day-major, slot-minor in the catalog's slot-type order.
/// For each slot the eligible pool is rebuilt, one draw picks a candidate,
/// and the reviewer decides its fate: accept commits the course (scaled for
/// servings), reject bars it for this slot attempt only and redraws, skip
/// leaves the slot unfilled. An empty pool is fatal; no partial plan is
/// returned.
pub fn generate_plan(
    catalog: &Catalog,
    config: &PlanConfig,
    draws: &mut DrawSource,
    reviewer: &mut dyn ProposalReview,
) -> Result<MealPlan> {
    config.validate()?;
    check_includes(catalog, config)?;

    let mut usage = UsageCounters::default();
    let mut days = Vec::with_capacity(config.days);

    for day in 0..config.days {
        let mut plan_day = PlanDay::default();

        for slot_type in catalog.slot_types() {
            let pool = catalog.courses_of(slot_type);
            let mut rejected: HashSet<String> = HashSet::new();

            let entry = loop {
                let eligible = eligible_candidates(pool, config, &usage, &rejected);
                let Some(course) = select(&eligible, draws.draw()) else {
                    return Err(PlanError::PoolExhausted {
                        day,
                        slot: slot_type.to_string(),
                        constraints: config.constraint_summary(),
                    });
                };

                match reviewer.review(day, slot_type, course)? {
                    ProposalResponse::Accept => {
                        usage.record(course);
                        break Some(course.scale_servings(config.servings));
                    }
                    ProposalResponse::Reject => {
                        rejected.insert(course.name.clone());
                    }
                    ProposalResponse::Skip => break None,
                }
            };

            plan_day.slots.insert(slot_type.to_string(), entry);
        }

        days.push(plan_day);
    }

    Ok(MealPlan { days })
}

/// Fail fast on include names that exist nowhere in the catalog.
fn check_includes(catalog: &Catalog, config: &PlanConfig) -> Result<()> {
    for name in &config.include {
        if catalog.contains_name(name) {
            continue;
        }
        let hint = closest_name(catalog, name)
            .map(|n| format!(" (did you mean '{n}'?)"))
            .unwrap_or_default();
        return Err(PlanError::InvalidConstraint {
            name: name.clone(),
            hint,
        });
    }
    Ok(())
}

fn closest_name(catalog: &Catalog, target: &str) -> Option<String> {
    catalog
        .all_names()
        .map(|n| (n, jaro_winkler(n, target)))
        .filter(|(_, score)| *score > 0.7)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(n, _)| n.to_string())
}
