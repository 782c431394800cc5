// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{SchedulingData, SchedulingDataBuilder};
use shiftwise_domain::{
    Employee, EmployeeId, ExpertiseLevel, Game, SchedulingCycle, Season, SeasonalAvailability,
    Sport, TimeWindow,
};
use time::Date;
use time::macros::date;

pub const SPORT: &str = "Soccer";

/// Saturday, 2026-10-17 (fall season, week of Monday 2026-10-12).
pub fn game_date() -> Date {
    date!(2026 - 10 - 17)
}

pub fn week_start() -> Date {
    date!(2026 - 10 - 12)
}

pub fn window(start_hour: u8, end_hour: u8) -> TimeWindow {
    TimeWindow::from_hm(start_hour, 0, end_hour, 0).unwrap()
}

/// A game on `game_date()` with generated shifts numbered from `game_id * 10`.
pub fn create_test_game(
    game_id: i64,
    start_hour: u8,
    end_hour: u8,
    supervisors: u8,
    referees: u8,
) -> Game {
    let mut game: Game = Game::new(
        game_id,
        SPORT,
        game_date(),
        window(start_hour, end_hour),
        supervisors,
        referees,
    );
    game.cycle_id = Some(1);
    game.populate_shifts(game_id * 10).unwrap();
    game
}

pub fn create_test_cycle() -> SchedulingCycle {
    SchedulingCycle::new(1, "Fall 2026", date!(2026 - 09 - 01), date!(2026 - 12 - 15))
}

/// Expert, rated 5.0: scores 30 + 20 + 25 + 7.5 + 3 = 85.5 with no other data.
pub fn alice() -> Employee {
    Employee::new(EmployeeId::new(1), "Alice", 20)
        .with_performance_rating(5.0)
        .with_expertise(SPORT, ExpertiseLevel::Expert)
}

/// Intermediate, rated 4.0: scores 21 + 16 + 25 + 7.5 + 3 = 72.5 with no other data.
pub fn bob() -> Employee {
    Employee::new(EmployeeId::new(2), "Bob", 20)
        .with_performance_rating(4.0)
        .with_expertise(SPORT, ExpertiseLevel::Intermediate)
}

/// Beginner, rated 2.5: scores 12 + 10 + 25 + 7.5 + 3 = 57.5 with no other data.
pub fn cara() -> Employee {
    Employee::new(EmployeeId::new(3), "Cara", 20)
        .with_performance_rating(2.5)
        .with_expertise(SPORT, ExpertiseLevel::Beginner)
}

pub fn availability(
    employee_id: EmployeeId,
    day_of_week: time::Weekday,
    window: TimeWindow,
    preferred: bool,
) -> SeasonalAvailability {
    SeasonalAvailability {
        employee_id,
        season: Season::Fall,
        year: 2026,
        day_of_week,
        window,
        preferred,
    }
}

pub fn base_builder(employees: Vec<Employee>) -> SchedulingDataBuilder {
    SchedulingData::builder()
        .employees(employees)
        .sports([Sport::new(1, SPORT)])
}

pub fn create_test_data(employees: Vec<Employee>) -> SchedulingData {
    base_builder(employees).build().unwrap()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
