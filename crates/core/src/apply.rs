// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::batch::ShiftTransition;
use crate::command::ShiftCommand;
use crate::error::CoreError;
use shiftwise_domain::{AssignmentStatus, DomainError, Game, Shift};
use std::collections::HashSet;

/// Applies a command to a shift, producing the updated shift.
///
/// The input shift is never modified. A recommendation never assigns
/// anyone; assignment always takes an explicit `ShiftCommand::Assign`.
///
/// # Arguments
///
/// * `shift` - The current shift (immutable)
/// * `command` - The change to apply
///
/// # Returns
///
/// * `Ok(Shift)` with the new status and slots
/// * `Err(CoreError)` if the shift state machine forbids the change
///
/// # Errors
///
/// Returns an error if the command's target status is not reachable from
/// the shift's current status.
pub fn apply(shift: &Shift, command: ShiftCommand) -> Result<Shift, CoreError> {
    let target: AssignmentStatus = match command {
        ShiftCommand::Recommend { .. } => AssignmentStatus::Recommended,
        ShiftCommand::Assign { .. } => AssignmentStatus::Assigned,
        ShiftCommand::Confirm => AssignmentStatus::Confirmed,
        ShiftCommand::Clear => AssignmentStatus::Unassigned,
    };

    if !shift.status.can_transition_to(target) {
        return Err(DomainError::InvalidStatusTransition {
            shift_id: shift.shift_id,
            from: shift.status,
            to: target,
        }
        .into());
    }

    let mut new_shift: Shift = shift.clone();
    new_shift.status = target;

    match command {
        ShiftCommand::Recommend { primary, secondary } => {
            new_shift.recommended_primary = Some(primary);
            new_shift.recommended_secondary = Some(secondary);
        }
        ShiftCommand::Assign { employee_id } => {
            new_shift.assigned_employee = Some(employee_id);
        }
        ShiftCommand::Confirm => {}
        ShiftCommand::Clear => {
            new_shift.assigned_employee = None;
            new_shift.recommended_primary = None;
            new_shift.recommended_secondary = None;
        }
    }

    Ok(new_shift)
}

/// Applies the transitions of a cycle report to the games they came from.
///
/// Either every transition applies or the games are left untouched.
///
/// # Arguments
///
/// * `games` - The games that were processed
/// * `transitions` - `CycleReport::transitions`
///
/// # Returns
///
/// The number of shifts updated.
///
/// # Errors
///
/// Returns an error if a transition names a shift that does not exist in
/// its game, if a shift is no longer in the status the transition
/// expects, or if a shift appears in more than one transition.
pub fn apply_transitions(
    games: &mut [Game],
    transitions: &[ShiftTransition],
) -> Result<usize, CoreError> {
    let mut staged: Vec<(usize, usize, Shift)> = Vec::with_capacity(transitions.len());
    let mut seen: HashSet<i64> = HashSet::with_capacity(transitions.len());

    for transition in transitions {
        if !seen.insert(transition.shift_id) {
            return Err(CoreError::DuplicateTransition {
                shift_id: transition.shift_id,
            });
        }

        let (game_index, shift_index) = games
            .iter()
            .enumerate()
            .filter(|(_, game)| game.game_id == transition.game_id)
            .find_map(|(gi, game)| {
                game.shifts
                    .iter()
                    .position(|s| s.shift_id == transition.shift_id)
                    .map(|si| (gi, si))
            })
            .ok_or(CoreError::ShiftNotFound {
                shift_id: transition.shift_id,
            })?;

        let current: &Shift = &games[game_index].shifts[shift_index];
        if current.status != transition.from {
            return Err(DomainError::InvalidStatusTransition {
                shift_id: current.shift_id,
                from: current.status,
                to: transition.to,
            }
            .into());
        }

        let updated: Shift = apply(
            current,
            ShiftCommand::Recommend {
                primary: transition.primary,
                secondary: transition.secondary,
            },
        )?;
        staged.push((game_index, shift_index, updated));
    }

    let count: usize = staged.len();
    for (game_index, shift_index, shift) in staged {
        games[game_index].shifts[shift_index] = shift;
    }

    Ok(count)
}
