//! Writes schedule as console tables.

#[cfg(test)]
#[path = "../tests/unit/writer_test.rs"]
mod writer_test;

use crate::schedule::Schedule;
use crate::shifts::{ShiftCatalog, ShiftKind};
use rosomaxa::utils::GenericResult;
use std::io::Write;

const COLUMN_WIDTH: usize = 15;

/// Writes schedule as a table with a row per staff member and a column per day.
pub fn write_schedule<W: Write>(writer: &mut W, schedule: &Schedule, catalog: &ShiftCatalog) -> GenericResult<()> {
    write!(writer, "{:<COLUMN_WIDTH$}", "")?;
    for day in 0..schedule.num_days() {
        write!(writer, "{:<COLUMN_WIDTH$}", format!("Day {}", day + 1))?;
    }
    writeln!(writer)?;

    for staff in 0..schedule.num_staff() {
        write!(writer, "{:<COLUMN_WIDTH$}", format!("Staff {staff}"))?;
        for &kind in schedule.row(staff) {
            write!(writer, "{:<COLUMN_WIDTH$}", format_cell(kind, catalog))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Writes hours worked by every staff member and staff counts per day and shift.
pub fn write_summary<W: Write>(writer: &mut W, schedule: &Schedule, catalog: &ShiftCatalog) -> GenericResult<()> {
    writeln!(writer, "\nSummary:")?;
    for staff in 0..schedule.num_staff() {
        writeln!(writer, "Staff {staff} total hours worked: {:.1} hours", schedule.worked_hours(staff, catalog))?;
    }

    for day in 0..schedule.num_days() {
        writeln!(writer, "\nDay {}:", day + 1)?;
        for kind in catalog.working_kinds() {
            writeln!(writer, "  Shift {kind}: {} staff", schedule.count(day, kind))?;
        }
    }

    Ok(())
}

fn format_cell(kind: ShiftKind, catalog: &ShiftCatalog) -> String {
    catalog.time(kind).map_or_else(|| ShiftKind::Off.to_string(), |time| time.to_string())
}
