// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON snapshot of everything a recommendation run needs.
//!
//! The snapshot mirrors what the data-access layer would resolve before a
//! run. Games may omit their shifts; missing shifts are generated with
//! identifiers following the highest identifier present in the file.

use crate::error::CliError;
use serde::Deserialize;
use shiftwise::{CoreError, SchedulingData};
use shiftwise_domain::{
    Employee, EmployeeId, Game, PermanentConflict, SchedulingCycle, SeasonalAvailability, Sport,
    TimeOffRequest, WeeklyHours,
};
use tracing::debug;

/// A game an employee already holds, used for double-booking and experience.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentRecord {
    pub employee_id: EmployeeId,
    pub game: Game,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CycleSnapshot {
    pub cycle: SchedulingCycle,
    pub games: Vec<Game>,
    pub sports: Vec<Sport>,
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub availability: Vec<SeasonalAvailability>,
    #[serde(default)]
    pub conflicts: Vec<PermanentConflict>,
    #[serde(default)]
    pub time_off: Vec<TimeOffRequest>,
    #[serde(default)]
    pub assignments: Vec<AssignmentRecord>,
    #[serde(default)]
    pub weekly_hours: Vec<WeeklyHours>,
}

/// A snapshot split into the inputs of `process_cycle`.
#[derive(Debug)]
pub struct RunInputs {
    pub cycle: SchedulingCycle,
    pub games: Vec<Game>,
    pub data: SchedulingData,
}

impl CycleSnapshot {
    /// Parses a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a well-formed snapshot.
    pub fn from_json(text: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Generates missing shifts and builds the validated lookup tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster or any per-employee record fails
    /// validation.
    pub fn into_inputs(mut self) -> Result<RunInputs, CliError> {
        let mut next_shift_id: i64 = self
            .games
            .iter()
            .flat_map(|game| game.shifts.iter().map(|shift| shift.shift_id))
            .max()
            .map_or(1, |highest| highest + 1);

        for game in self.games.iter_mut().filter(|game| game.shifts.is_empty()) {
            next_shift_id = game
                .populate_shifts(next_shift_id)
                .map_err(CoreError::from)?;
            debug!(
                game_id = game.game_id,
                shifts = game.shifts.len(),
                "Generated shifts"
            );
        }

        let data: SchedulingData = self
            .assignments
            .into_iter()
            .fold(SchedulingData::builder(), |builder, record| {
                builder.assignment(record.employee_id, record.game)
            })
            .employees(self.employees)
            .sports(self.sports)
            .availability(self.availability)
            .conflicts(self.conflicts)
            .time_off(self.time_off)
            .weekly_hours(self.weekly_hours)
            .build()?;

        Ok(RunInputs {
            cycle: self.cycle,
            games: self.games,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use shiftwise_domain::{AssignmentStatus, PositionType};
    use time::Weekday;
    use time::macros::date;

    const SNAPSHOT: &str = r#"{
        "cycle": { "cycle_id": 3, "name": "October", "start_date": "2026-10-01", "end_date": "2026-10-31" },
        "games": [
            {
                "game_id": 1,
                "sport": "Soccer",
                "date": "2026-10-17",
                "window": { "start": "10:00", "end": "12:00" },
                "required_supervisors": 0,
                "required_referees": 1,
                "shifts": [
                    { "shift_id": 40, "game_id": 1, "position_type": "REFEREE", "position_number": 1 }
                ]
            },
            {
                "game_id": 2,
                "sport": "Soccer",
                "date": "2026-10-18",
                "window": { "start": "13:30", "end": "15:00" },
                "required_supervisors": 1,
                "required_referees": 2
            }
        ],
        "sports": [ { "sport_id": 1, "name": "Soccer" } ],
        "employees": [
            {
                "employee_id": 7,
                "name": "Riley",
                "max_hours_per_week": 20,
                "supervisor_eligible": true,
                "performance_rating": 4.5,
                "expertise": { "Soccer": "EXPERT" }
            }
        ],
        "availability": [
            {
                "employee_id": 7,
                "season": "FALL",
                "year": 2026,
                "day_of_week": "Saturday",
                "window": { "start": "08:00", "end": "18:00" },
                "preferred": true
            }
        ],
        "assignments": [
            {
                "employee_id": 7,
                "game": {
                    "game_id": 90,
                    "sport": "Soccer",
                    "date": "2026-10-10",
                    "window": { "start": "09:00", "end": "11:00" },
                    "required_supervisors": 0,
                    "required_referees": 1
                }
            }
        ],
        "weekly_hours": [ { "employee_id": 7, "week_start": "2026-10-12", "total_hours": 4.0 } ]
    }"#;

    #[test]
    fn test_snapshot_parses_and_builds() {
        let snapshot: CycleSnapshot = CycleSnapshot::from_json(SNAPSHOT).unwrap();
        assert_eq!(snapshot.cycle.end_date, date!(2026 - 10 - 31));
        assert_eq!(snapshot.availability[0].day_of_week, Weekday::Saturday);
        assert!(snapshot.employees[0].active);

        let inputs: RunInputs = snapshot.into_inputs().unwrap();
        assert_eq!(inputs.data.employees().len(), 1);
        assert_eq!(inputs.data.assigned_games_for(EmployeeId::new(7)).len(), 1);
        assert!(inputs.data.sport("Soccer").is_some());
    }

    #[test]
    fn test_missing_shifts_are_generated_after_highest_id() {
        let inputs: RunInputs = CycleSnapshot::from_json(SNAPSHOT)
            .unwrap()
            .into_inputs()
            .unwrap();

        let kept: &Game = &inputs.games[0];
        assert_eq!(kept.shifts.len(), 1);
        assert_eq!(kept.shifts[0].shift_id, 40);
        assert_eq!(kept.shifts[0].status, AssignmentStatus::Unassigned);

        let generated: Vec<(i64, PositionType, u8)> = inputs.games[1]
            .shifts
            .iter()
            .map(|shift| (shift.shift_id, shift.position_type, shift.position_number))
            .collect();
        assert_eq!(
            generated,
            vec![
                (41, PositionType::Supervisor, 1),
                (42, PositionType::Referee, 1),
                (43, PositionType::Referee, 2),
            ]
        );
    }

    #[test]
    fn test_unknown_employee_reference_fails() {
        let text: String = SNAPSHOT.replace(
            r#""weekly_hours": [ { "employee_id": 7"#,
            r#""weekly_hours": [ { "employee_id": 8"#,
        );

        let result = CycleSnapshot::from_json(&text).unwrap().into_inputs();

        assert!(matches!(result, Err(CliError::Core(_))));
    }

    #[test]
    fn test_malformed_window_is_rejected() {
        let text: String = SNAPSHOT.replace(r#""13:30""#, r#""16:30""#);

        assert!(matches!(
            CycleSnapshot::from_json(&text),
            Err(CliError::Snapshot(_))
        ));
    }
}
