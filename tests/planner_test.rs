use std::collections::HashMap;

use menu_maker_rs::error::PlanError;
use menu_maker_rs::models::{Catalog, Course, Ingredient};
use menu_maker_rs::planner::{
    generate_plan, AutoAccept, DrawSource, PlanConfig, ProposalResponse, ProposalReview,
};

fn course(slot: &str, name: &str) -> Course {
    let mut c = Course::new(name, slot, "");
    c.add_ingredient(name, Ingredient::new(1.0, "portion").with_macros(100.0, 5.0, 3.0, 10.0));
    c
}

fn breakfast_catalog() -> Catalog {
    Catalog::from_courses(vec![
        course("breakfast", "eggs"),
        course("breakfast", "oats"),
        course("breakfast", "yogurt"),
    ])
}

fn config(days: usize) -> PlanConfig {
    PlanConfig {
        days,
        ..PlanConfig::default()
    }
}

/// Reviewer driven by a fixed transcript; records every proposal it saw.
struct Scripted {
    responses: Vec<ProposalResponse>,
    next: usize,
    seen: Vec<String>,
}

impl Scripted {
    fn new(responses: Vec<ProposalResponse>) -> Self {
        Self {
            responses,
            next: 0,
            seen: Vec::new(),
        }
    }
}

impl ProposalReview for Scripted {
    fn review(
        &mut self,
        _day: usize,
        _slot: &str,
        course: &Course,
    ) -> menu_maker_rs::Result<ProposalResponse> {
        self.seen.push(course.name.clone());
        let response = self.responses[self.next];
        self.next += 1;
        Ok(response)
    }
}

#[test]
fn test_same_seed_reproduces_identical_plan() {
    let catalog = breakfast_catalog();
    let cfg = PlanConfig {
        days: 3,
        reuse_allowed: false,
        seed: Some(42),
        ..PlanConfig::default()
    };

    let first = generate_plan(&catalog, &cfg, &mut DrawSource::seeded(42), &mut AutoAccept).unwrap();
    let second =
        generate_plan(&catalog, &cfg, &mut DrawSource::seeded(42), &mut AutoAccept).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_max_repeats_invariant_holds() {
    let catalog = breakfast_catalog();
    let cfg = PlanConfig {
        days: 6,
        max_repeats: Some(2),
        ..PlanConfig::default()
    };

    let plan = generate_plan(&catalog, &cfg, &mut DrawSource::seeded(7), &mut AutoAccept).unwrap();

    let mut counts: HashMap<&str, u32> = HashMap::new();
    for (_, committed) in plan.committed() {
        *counts.entry(committed.name.as_str()).or_insert(0) += 1;
    }
    assert!(counts.values().all(|&n| n <= 2));
}

#[test]
fn test_no_reuse_keeps_names_distinct() {
    let catalog = breakfast_catalog();
    let cfg = PlanConfig {
        days: 3,
        reuse_allowed: false,
        ..PlanConfig::default()
    };

    let plan = generate_plan(&catalog, &cfg, &mut DrawSource::seeded(9), &mut AutoAccept).unwrap();

    let names: Vec<&str> = plan.committed().map(|(_, c)| c.name.as_str()).collect();
    let mut deduped = names.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(names.len(), 3);
    assert_eq!(deduped.len(), names.len());
}

#[test]
fn test_repeat_cap_exhausts_pool_mid_run() {
    let catalog = Catalog::from_courses(vec![course("dinner", "pasta")]);
    let cfg = PlanConfig {
        days: 5,
        max_repeats: Some(2),
        ..PlanConfig::default()
    };

    let err =
        generate_plan(&catalog, &cfg, &mut DrawSource::seeded(1), &mut AutoAccept).unwrap_err();
    match err {
        PlanError::PoolExhausted { day, slot, .. } => {
            assert_eq!(day, 2);
            assert_eq!(slot, "dinner");
        }
        other => panic!("expected PoolExhausted, got {other:?}"),
    }
}

#[test]
fn test_no_reuse_exhaustion_fails_instead_of_reusing() {
    let catalog = Catalog::from_courses(vec![
        course("breakfast", "eggs"),
        course("breakfast", "oats"),
    ]);
    let cfg = PlanConfig {
        days: 3,
        reuse_allowed: false,
        ..PlanConfig::default()
    };

    let err =
        generate_plan(&catalog, &cfg, &mut DrawSource::seeded(4), &mut AutoAccept).unwrap_err();
    match err {
        PlanError::PoolExhausted { day, slot, constraints } => {
            assert_eq!(day, 2);
            assert_eq!(slot, "breakfast");
            assert!(constraints.contains("reuse=off"));
        }
        other => panic!("expected PoolExhausted, got {other:?}"),
    }
}

#[test]
fn test_exclude_removes_dish_from_every_slot() {
    let catalog = breakfast_catalog();
    let cfg = PlanConfig {
        days: 4,
        exclude: PlanConfig::name_set(&["eggs".to_string()]),
        ..PlanConfig::default()
    };

    let plan = generate_plan(&catalog, &cfg, &mut DrawSource::seeded(11), &mut AutoAccept).unwrap();
    assert!(plan.committed().all(|(_, c)| c.name != "eggs"));
}

#[test]
fn test_include_restricts_pool() {
    let catalog = breakfast_catalog();
    let cfg = PlanConfig {
        days: 3,
        include: PlanConfig::name_set(&["oats".to_string()]),
        ..PlanConfig::default()
    };

    let plan = generate_plan(&catalog, &cfg, &mut DrawSource::seeded(2), &mut AutoAccept).unwrap();
    assert!(plan.committed().all(|(_, c)| c.name == "oats"));
}

#[test]
fn test_unknown_include_fails_before_generation() {
    let catalog = breakfast_catalog();
    let cfg = PlanConfig {
        include: PlanConfig::name_set(&["egs".to_string()]),
        ..PlanConfig::default()
    };

    let err =
        generate_plan(&catalog, &cfg, &mut DrawSource::seeded(0), &mut AutoAccept).unwrap_err();
    assert!(matches!(err, PlanError::InvalidConstraint { .. }));
}

#[test]
fn test_servings_scaled_at_commit_time() {
    let catalog = Catalog::from_courses(vec![course("breakfast", "eggs")]);
    let cfg = PlanConfig {
        days: 1,
        servings: 3.0,
        ..PlanConfig::default()
    };

    let plan = generate_plan(&catalog, &cfg, &mut DrawSource::seeded(0), &mut AutoAccept).unwrap();
    let (_, committed) = plan.committed().next().unwrap();

    assert_eq!(committed.ingredients["eggs"].amount, 3.0);
    assert_eq!(committed.ingredients["eggs"].calories, 300.0);
}

#[test]
fn test_rejection_bars_dish_for_slot_attempt_only() {
    // Two dishes, no reuse. Day 0: reject the first proposal, accept the
    // replacement. Day 1 must commit the rejected dish, proving rejection
    // did not outlive its slot.
    let catalog = Catalog::from_courses(vec![
        course("breakfast", "eggs"),
        course("breakfast", "oats"),
    ]);
    let cfg = PlanConfig {
        days: 2,
        reuse_allowed: false,
        ..PlanConfig::default()
    };

    let mut reviewer = Scripted::new(vec![
        ProposalResponse::Reject,
        ProposalResponse::Accept,
        ProposalResponse::Accept,
    ]);
    let plan = generate_plan(&catalog, &cfg, &mut DrawSource::seeded(5), &mut reviewer).unwrap();

    assert_eq!(reviewer.seen.len(), 3);
    // The replacement differs from the rejected proposal
    assert_ne!(reviewer.seen[0], reviewer.seen[1]);
    // Day 1 commits the dish rejected on day 0
    let day1 = plan.days[1].slots["breakfast"].as_ref().unwrap();
    assert_eq!(day1.name, reviewer.seen[0]);
}

#[test]
fn test_skip_leaves_slot_unfilled() {
    let catalog = Catalog::from_courses(vec![course("breakfast", "eggs")]);
    let cfg = PlanConfig {
        days: 2,
        reuse_allowed: false,
        ..PlanConfig::default()
    };

    // Skip day 0; eggs must still be eligible (and committed) on day 1,
    // since a skip records no usage.
    let mut reviewer = Scripted::new(vec![ProposalResponse::Skip, ProposalResponse::Accept]);
    let plan = generate_plan(&catalog, &cfg, &mut DrawSource::seeded(3), &mut reviewer).unwrap();

    assert!(plan.days[0].slots["breakfast"].is_none());
    assert_eq!(
        plan.days[1].slots["breakfast"].as_ref().unwrap().name,
        "eggs"
    );
}

#[test]
fn test_rejecting_everything_exhausts_pool() {
    let catalog = Catalog::from_courses(vec![
        course("breakfast", "eggs"),
        course("breakfast", "oats"),
    ]);
    let cfg = config(1);

    let mut reviewer = Scripted::new(vec![ProposalResponse::Reject, ProposalResponse::Reject]);
    let err = generate_plan(&catalog, &cfg, &mut DrawSource::seeded(8), &mut reviewer).unwrap_err();

    match err {
        PlanError::PoolExhausted { day, slot, .. } => {
            assert_eq!(day, 0);
            assert_eq!(slot, "breakfast");
        }
        other => panic!("expected PoolExhausted, got {other:?}"),
    }
}

#[test]
fn test_identical_transcript_reproduces_interactive_plan() {
    let catalog = breakfast_catalog();
    let cfg = config(2);
    let transcript = vec![
        ProposalResponse::Reject,
        ProposalResponse::Accept,
        ProposalResponse::Skip,
    ];

    let first = generate_plan(
        &catalog,
        &cfg,
        &mut DrawSource::seeded(42),
        &mut Scripted::new(transcript.clone()),
    )
    .unwrap();
    let second = generate_plan(
        &catalog,
        &cfg,
        &mut DrawSource::seeded(42),
        &mut Scripted::new(transcript),
    )
    .unwrap();

    assert_eq!(first, second);
}
