// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shiftwise_domain::EmployeeId;

/// A requested change to one shift, expressed as data only.
///
/// Commands are the only way to change a shift's assignment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftCommand {
    /// Store the two recommended options.
    Recommend {
        /// Option A.
        primary: EmployeeId,
        /// Option B (may equal Option A).
        secondary: EmployeeId,
    },
    /// Assign an employee, usually one of the recommended options.
    Assign {
        /// The employee taking the shift.
        employee_id: EmployeeId,
    },
    /// Record the assignee's confirmation.
    Confirm,
    /// Drop recommendations and any assignee, returning to unassigned.
    Clear,
}
