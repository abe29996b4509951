pub mod layout;
pub mod table;

pub use layout::{assign_rows, place_starters, RowAssignment, Slot};
pub use table::{validate_rows, FormationRow, FormationTable, FORMATION_TABLE_VERSION, STARTERS};
