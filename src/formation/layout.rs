use serde::Serialize;

use super::table::FormationRow;
use crate::geometry::{Point, Rect};

/// Lineup indices assigned to one formation row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAssignment {
    pub role: String,
    pub members: Vec<usize>,
}

/// Position of one starter on the pitch.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Slot {
    /// Index into the starting lineup.
    pub lineup_index: usize,
    /// Formation row, 0 = goalkeeper.
    pub row: usize,
    /// Position within the row, left to right.
    pub column: usize,
    pub center: Point,
}

/// Split `starters` lineup indices across `rows` in lineup order.
///
/// Rows are filled goalkeeper first. A short lineup leaves the later rows
/// short; any starters beyond the table's total join the last row.
pub fn assign_rows(rows: &[FormationRow], starters: usize) -> Vec<RowAssignment> {
    let mut next = 0;
    let mut assigned: Vec<RowAssignment> = rows
        .iter()
        .map(|row| {
            let end = (next + row.count).min(starters);
            let members = (next..end).collect();
            next = end;
            RowAssignment {
                role: row.role.clone(),
                members,
            }
        })
        .collect();

    if next < starters {
        if let Some(last) = assigned.last_mut() {
            last.members.extend(next..starters);
        }
    }

    assigned
}

/// Place starters inside `area`.
///
/// Row 0 (goalkeeper) sits nearest the bottom edge and the last row nearest
/// the top. Rows split the height evenly; players in a row split the width
/// evenly in lineup order.
pub fn place_starters(rows: &[FormationRow], starters: usize, area: Rect) -> Vec<Slot> {
    let assigned = assign_rows(rows, starters);
    let row_spacing = area.height / assigned.len().max(1) as f64;

    let mut slots = Vec::with_capacity(starters);
    for (row, assignment) in assigned.iter().enumerate() {
        let y = area.bottom() - row_spacing * (row as f64 + 0.5);
        let n = assignment.members.len();
        for (column, &lineup_index) in assignment.members.iter().enumerate() {
            let x = area.x + area.width * (column as f64 + 1.0) / (n as f64 + 1.0);
            slots.push(Slot {
                lineup_index,
                row,
                column,
                center: Point { x, y },
            });
        }
    }
    slots
}
