// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only lookup tables the engine consults.
//!
//! The data-access layer resolves every query before a run and hands the
//! results over as one `SchedulingData` value. Nothing in the engine
//! mutates it, and it is validated once, when built.

use crate::error::CoreError;
use shiftwise_domain::{
    DomainError, Employee, EmployeeId, Game, PermanentConflict, SeasonalAvailability, Sport,
    TimeOffRequest, WeeklyHours, validate_employee, validate_weekly_hours, week_start_for,
};
use std::collections::{HashMap, HashSet};

/// Everything one candidate brings to a single game, borrowed from
/// `SchedulingData`.
#[derive(Debug, Clone, Copy)]
pub struct CandidateContext<'a> {
    /// The candidate.
    pub employee: &'a Employee,
    /// All seasonal availability entries for the candidate.
    pub availability: &'a [SeasonalAvailability],
    /// Permanent conflicts.
    pub conflicts: &'a [PermanentConflict],
    /// Time-off requests of any status.
    pub time_off: &'a [TimeOffRequest],
    /// Games the candidate is already assigned to.
    pub assigned_games: &'a [Game],
    /// Hours already scheduled in the game's week, if a record exists.
    pub weekly_hours: Option<&'a WeeklyHours>,
}

impl CandidateContext<'_> {
    /// Returns the hours already scheduled in the game's week.
    #[must_use]
    pub fn current_weekly_hours(&self) -> f64 {
        self.weekly_hours.map_or(0.0, |record| record.total_hours)
    }
}

/// The snapshot of roster and per-employee data for one run.
#[derive(Debug, Clone, Default)]
pub struct SchedulingData {
    employees: Vec<Employee>,
    sports: HashMap<String, Sport>,
    availability: HashMap<EmployeeId, Vec<SeasonalAvailability>>,
    conflicts: HashMap<EmployeeId, Vec<PermanentConflict>>,
    time_off: HashMap<EmployeeId, Vec<TimeOffRequest>>,
    assigned_games: HashMap<EmployeeId, Vec<Game>>,
    weekly_hours: HashMap<EmployeeId, Vec<WeeklyHours>>,
}

impl SchedulingData {
    /// Starts building a snapshot.
    #[must_use]
    pub fn builder() -> SchedulingDataBuilder {
        SchedulingDataBuilder::default()
    }

    /// Returns the roster in the order it was supplied.
    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Looks up a sport record by name.
    #[must_use]
    pub fn sport(&self, name: &str) -> Option<&Sport> {
        self.sports.get(name)
    }

    /// Returns the games an employee is already assigned to.
    #[must_use]
    pub fn assigned_games_for(&self, employee_id: EmployeeId) -> &[Game] {
        self.assigned_games
            .get(&employee_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the employee's weekly-hours record for the given week.
    #[must_use]
    pub fn weekly_hours_for(
        &self,
        employee_id: EmployeeId,
        week_start: time::Date,
    ) -> Option<&WeeklyHours> {
        self.weekly_hours
            .get(&employee_id)?
            .iter()
            .find(|record| record.week_start == week_start)
    }

    /// Gathers everything known about `employee` that matters for `game`.
    ///
    /// # Errors
    ///
    /// Returns an error if the game's week start cannot be computed.
    pub fn context_for<'a>(
        &'a self,
        employee: &'a Employee,
        game: &Game,
    ) -> Result<CandidateContext<'a>, DomainError> {
        let id: EmployeeId = employee.employee_id;
        let week_start: time::Date = week_start_for(game.date)?;

        Ok(CandidateContext {
            employee,
            availability: self.availability.get(&id).map(Vec::as_slice).unwrap_or_default(),
            conflicts: self.conflicts.get(&id).map(Vec::as_slice).unwrap_or_default(),
            time_off: self.time_off.get(&id).map(Vec::as_slice).unwrap_or_default(),
            assigned_games: self.assigned_games_for(id),
            weekly_hours: self.weekly_hours_for(id, week_start),
        })
    }
}

/// Collects snapshot records and validates them on `build`.
#[derive(Debug, Default)]
pub struct SchedulingDataBuilder {
    employees: Vec<Employee>,
    sports: Vec<Sport>,
    availability: Vec<SeasonalAvailability>,
    conflicts: Vec<PermanentConflict>,
    time_off: Vec<TimeOffRequest>,
    assignments: Vec<(EmployeeId, Game)>,
    weekly_hours: Vec<WeeklyHours>,
}

impl SchedulingDataBuilder {
    /// Adds an employee to the roster.
    #[must_use]
    pub fn employee(mut self, employee: Employee) -> Self {
        self.employees.push(employee);
        self
    }

    /// Adds employees to the roster, keeping their order.
    #[must_use]
    pub fn employees<I: IntoIterator<Item = Employee>>(mut self, employees: I) -> Self {
        self.employees.extend(employees);
        self
    }

    /// Adds sport records.
    #[must_use]
    pub fn sports<I: IntoIterator<Item = Sport>>(mut self, sports: I) -> Self {
        self.sports.extend(sports);
        self
    }

    /// Adds seasonal availability entries.
    #[must_use]
    pub fn availability<I: IntoIterator<Item = SeasonalAvailability>>(
        mut self,
        entries: I,
    ) -> Self {
        self.availability.extend(entries);
        self
    }

    /// Adds permanent conflicts.
    #[must_use]
    pub fn conflicts<I: IntoIterator<Item = PermanentConflict>>(mut self, entries: I) -> Self {
        self.conflicts.extend(entries);
        self
    }

    /// Adds time-off requests.
    #[must_use]
    pub fn time_off<I: IntoIterator<Item = TimeOffRequest>>(mut self, entries: I) -> Self {
        self.time_off.extend(entries);
        self
    }

    /// Records that an employee is already assigned to a game.
    #[must_use]
    pub fn assignment(mut self, employee_id: EmployeeId, game: Game) -> Self {
        self.assignments.push((employee_id, game));
        self
    }

    /// Adds weekly-hours records.
    #[must_use]
    pub fn weekly_hours<I: IntoIterator<Item = WeeklyHours>>(mut self, records: I) -> Self {
        self.weekly_hours.extend(records);
        self
    }

    /// Validates every record and builds the lookup tables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An employee fails field validation or appears twice
    /// - A weekly-hours record is negative or not Monday-aligned
    /// - Any per-employee record refers to an employee not in the roster
    pub fn build(self) -> Result<SchedulingData, CoreError> {
        let mut roster: HashSet<EmployeeId> = HashSet::new();
        for employee in &self.employees {
            validate_employee(employee)?;
            if !roster.insert(employee.employee_id) {
                return Err(CoreError::DuplicateEmployee(employee.employee_id));
            }
        }

        let known = |record: &'static str, employee_id: EmployeeId| {
            if roster.contains(&employee_id) {
                Ok(())
            } else {
                Err(CoreError::UnknownEmployee {
                    record,
                    employee_id,
                })
            }
        };

        for entry in &self.availability {
            known("Availability entry", entry.employee_id)?;
        }
        for entry in &self.conflicts {
            known("Permanent conflict", entry.employee_id)?;
        }
        for entry in &self.time_off {
            known("Time-off request", entry.employee_id)?;
        }
        for (employee_id, _) in &self.assignments {
            known("Assignment", *employee_id)?;
        }
        let mut weeks: HashSet<(EmployeeId, time::Date)> = HashSet::new();
        for record in &self.weekly_hours {
            known("Weekly hours record", record.employee_id)?;
            validate_weekly_hours(record)?;
            if !weeks.insert((record.employee_id, record.week_start)) {
                return Err(CoreError::DuplicateWeeklyHours {
                    employee_id: record.employee_id,
                    week_start: record.week_start,
                });
            }
        }

        Ok(SchedulingData {
            employees: self.employees,
            sports: self
                .sports
                .into_iter()
                .map(|sport| (sport.name.clone(), sport))
                .collect(),
            availability: group_by_employee(self.availability, |e| e.employee_id),
            conflicts: group_by_employee(self.conflicts, |e| e.employee_id),
            time_off: group_by_employee(self.time_off, |e| e.employee_id),
            assigned_games: group_by_employee(self.assignments, |(id, _)| *id)
                .into_iter()
                .map(|(id, pairs)| (id, pairs.into_iter().map(|(_, game)| game).collect()))
                .collect(),
            weekly_hours: group_by_employee(self.weekly_hours, |r| r.employee_id),
        })
    }
}

fn group_by_employee<T, F>(records: Vec<T>, key: F) -> HashMap<EmployeeId, Vec<T>>
where
    F: Fn(&T) -> EmployeeId,
{
    let mut grouped: HashMap<EmployeeId, Vec<T>> = HashMap::new();
    for record in records {
        grouped.entry(key(&record)).or_default().push(record);
    }
    grouped
}
