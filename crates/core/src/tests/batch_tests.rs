// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    alice, assert_close, bob, cara, create_test_cycle, create_test_data, create_test_game,
};
use crate::{
    CoreError, CycleReport, EmptyReason, RecommenderConfig, SchedulingData, ShiftRecommendation,
    ShiftTransition, Violation, process_cycle,
};
use shiftwise_domain::{AssignmentStatus, EmployeeId, Game, SchedulingCycle};
use time::macros::date;

fn run(games: &[Game], data: &SchedulingData) -> CycleReport {
    process_cycle(
        &create_test_cycle(),
        games,
        data,
        &RecommenderConfig::default(),
    )
    .unwrap()
}

fn options(report: &CycleReport, shift_id: i64) -> Vec<(i64, f64)> {
    report.recommendations[&shift_id]
        .options
        .iter()
        .map(|option| (option.employee_id.value(), option.score))
        .collect()
}

#[test]
fn test_option_a_is_penalized_on_next_position() {
    let data: SchedulingData = create_test_data(vec![alice(), bob()]);
    let game: Game = create_test_game(1, 10, 12, 0, 2);

    let report: CycleReport = run(&[game], &data);

    let first: Vec<(i64, f64)> = options(&report, 10);
    assert_eq!(first.iter().map(|(id, _)| *id).collect::<Vec<_>>(), vec![1, 2]);

    let second: Vec<(i64, f64)> = options(&report, 11);
    assert_eq!(second.iter().map(|(id, _)| *id).collect::<Vec<_>>(), vec![2, 1]);
    assert_close(second[0].1, 72.5);
    assert_close(second[1].1, 35.5);

    assert_eq!(
        report.transitions,
        vec![
            ShiftTransition {
                shift_id: 10,
                game_id: 1,
                from: AssignmentStatus::Unassigned,
                to: AssignmentStatus::Recommended,
                primary: EmployeeId::new(1),
                secondary: EmployeeId::new(2),
            },
            ShiftTransition {
                shift_id: 11,
                game_id: 1,
                from: AssignmentStatus::Unassigned,
                to: AssignmentStatus::Recommended,
                primary: EmployeeId::new(2),
                secondary: EmployeeId::new(1),
            },
        ]
    );
    assert!(report.unfilled_shifts.is_empty());
    assert!(report.failed_events.is_empty());
}

#[test]
fn test_exclusions_reset_between_games() {
    let data: SchedulingData = create_test_data(vec![alice(), bob()]);
    let mut later: Game = create_test_game(2, 10, 12, 0, 2);
    later.date = date!(2026 - 10 - 24);
    let games: Vec<Game> = vec![create_test_game(1, 10, 12, 0, 2), later];

    let report: CycleReport = run(&games, &data);

    assert_eq!(report.cycle_id, 1);
    assert_eq!(report.transitions.len(), 4);
    let first_of_second_game: Vec<(i64, f64)> = options(&report, 20);
    assert_eq!(first_of_second_game[0].0, 1);
    assert_close(first_of_second_game[0].1, 85.5);
}

#[test]
fn test_unfilled_shift_has_no_transition() {
    let data: SchedulingData = create_test_data(vec![alice(), bob()]);
    let game: Game = create_test_game(1, 10, 12, 1, 1);

    let report: CycleReport = run(&[game], &data);

    assert_eq!(report.unfilled_shifts, vec![10]);
    assert_eq!(report.transitions.len(), 1);
    assert_eq!(report.transitions[0].shift_id, 11);
    assert_eq!(
        report.recommendations[&10].empty_reason,
        Some(EmptyReason::NoEligibleCandidates {
            position_type: shiftwise_domain::PositionType::Supervisor,
        })
    );
}

#[test]
fn test_supervisors_processed_before_referees() {
    let data: SchedulingData = create_test_data(vec![alice(), bob().with_supervisor_eligible(true)]);
    let mut game: Game = create_test_game(1, 10, 12, 1, 2);
    game.shifts.reverse();

    let report: CycleReport = run(&[game], &data);

    let order: Vec<i64> = report.transitions.iter().map(|t| t.shift_id).collect();
    assert_eq!(order, vec![10, 11, 12]);
    assert_eq!(report.transitions[0].primary, EmployeeId::new(2));
    assert_eq!(report.transitions[0].secondary, EmployeeId::new(2));
    // Bob carries the penalty from the supervisor position.
    assert_eq!(report.transitions[1].primary, EmployeeId::new(1));
    assert_eq!(report.transitions[2].primary, EmployeeId::new(1));
}

#[test]
fn test_failed_games_do_not_stop_the_run() {
    let data: SchedulingData = create_test_data(vec![alice(), bob()]);

    let mut outside: Game = create_test_game(1, 10, 12, 0, 1);
    outside.date = date!(2027 - 01 - 09);

    let mut broken: Game = create_test_game(2, 10, 12, 0, 1);
    broken.shifts[0].position_number = 4;

    let valid: Game = create_test_game(3, 10, 12, 0, 1);

    let report: CycleReport = run(&[outside, broken, valid], &data);

    let failed: Vec<i64> = report.failed_events.iter().map(|f| f.game_id).collect();
    assert_eq!(failed, vec![1, 2]);
    assert!(report.failed_events[0].reason.contains("outside cycle"));
    assert_eq!(report.transitions.len(), 1);
    assert_eq!(report.transitions[0].game_id, 3);
    assert!(!report.recommendations.contains_key(&10));
}

#[test]
fn test_existing_recommendation_seeds_exclusions() {
    let data: SchedulingData = create_test_data(vec![alice(), bob()]);
    let mut game: Game = create_test_game(1, 10, 12, 0, 2);
    game.shifts[0].status = AssignmentStatus::Recommended;
    game.shifts[0].recommended_primary = Some(EmployeeId::new(1));
    game.shifts[0].recommended_secondary = Some(EmployeeId::new(2));

    let report: CycleReport = run(&[game], &data);

    assert!(!report.recommendations.contains_key(&10));
    assert_eq!(report.transitions.len(), 1);
    assert_eq!(report.transitions[0].shift_id, 11);
    assert_eq!(report.transitions[0].primary, EmployeeId::new(2));
}

#[test]
fn test_assigned_shifts_are_skipped_and_block_assignee() {
    let data: SchedulingData = create_test_data(vec![alice(), bob(), cara()]);
    let mut game: Game = create_test_game(1, 10, 12, 0, 2);
    game.shifts[0].status = AssignmentStatus::Assigned;
    game.shifts[0].assigned_employee = Some(EmployeeId::new(3));

    let report: CycleReport = run(&[game], &data);

    let result: &ShiftRecommendation = &report.recommendations[&11];
    assert_eq!(report.recommendations.len(), 1);
    assert_eq!(result.rejected.len(), 1);
    assert_eq!(
        result.rejected[0].violations,
        vec![Violation::AlreadyInGame { shift_id: 10 }]
    );
}

#[test]
fn test_invalid_config_aborts_run() {
    let data: SchedulingData = create_test_data(vec![alice()]);
    let config: RecommenderConfig = RecommenderConfig {
        exclusion_penalty: -5.0,
        ..RecommenderConfig::default()
    };

    let result = process_cycle(&create_test_cycle(), &[], &data, &config);

    assert!(matches!(result, Err(CoreError::InvalidConfig { .. })));
}

#[test]
fn test_inverted_cycle_aborts_run() {
    let data: SchedulingData = create_test_data(vec![alice()]);
    let cycle: SchedulingCycle =
        SchedulingCycle::new(1, "Backwards", date!(2026 - 12 - 01), date!(2026 - 09 - 01));

    let result = process_cycle(&cycle, &[], &data, &RecommenderConfig::default());

    assert!(matches!(result, Err(CoreError::DomainViolation(_))));
}

#[test]
fn test_empty_roster_reports_every_shift_unfilled() {
    let data: SchedulingData = create_test_data(vec![]);
    let game: Game = create_test_game(1, 10, 12, 1, 2);

    let report: CycleReport = run(&[game], &data);

    assert_eq!(report.unfilled_shifts, vec![10, 11, 12]);
    assert!(report.transitions.is_empty());
}

#[test]
fn test_reused_shift_id_fails_later_game() {
    let data: SchedulingData = create_test_data(vec![alice(), bob()]);
    let first: Game = create_test_game(1, 10, 12, 0, 1);
    let mut second: Game = create_test_game(2, 14, 16, 0, 1);
    second.shifts[0].shift_id = 10;

    let report: CycleReport = run(&[first, second], &data);

    assert_eq!(report.recommendations.len(), 1);
    assert_eq!(report.recommendations[&10].game_id, 1);
    assert_eq!(report.transitions.len(), 1);
    assert_eq!(report.transitions[0].game_id, 1);
    assert_eq!(report.failed_events.len(), 1);
    assert_eq!(report.failed_events[0].game_id, 2);
    assert!(report.failed_events[0].reason.contains("Shift 10"));
}
