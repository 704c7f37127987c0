//! Contains a schedule model: shift assignments of every staff member per day.

#[cfg(test)]
#[path = "../tests/unit/schedule_test.rs"]
mod schedule_test;

use crate::model::SchedulingSettings;
use crate::shifts::{ShiftCatalog, ShiftKind};
use rosomaxa::utils::{GenericError, GenericResult};

/// Days in a week.
pub const WEEK_DAYS: usize = 7;

/// A `num_staff` × `num_days` grid of assigned shifts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    num_staff: usize,
    num_days: usize,
    shifts: Vec<ShiftKind>,
}

impl Schedule {
    /// Creates a new instance of `Schedule` from rows of staff assignments.
    pub fn new(rows: Vec<Vec<ShiftKind>>) -> GenericResult<Self> {
        let num_staff = rows.len();
        let num_days = rows.first().map_or(0, |row| row.len());

        if rows.iter().any(|row| row.len() != num_days) {
            return Err(GenericError::from("all staff rows should have the same amount of days"));
        }

        Ok(Self { num_staff, num_days, shifts: rows.into_iter().flatten().collect() })
    }

    /// Returns amount of staff members.
    pub fn num_staff(&self) -> usize {
        self.num_staff
    }

    /// Returns amount of days.
    pub fn num_days(&self) -> usize {
        self.num_days
    }

    /// Returns a shift assigned to given staff on given day.
    pub fn shift(&self, staff: usize, day: usize) -> ShiftKind {
        self.shifts[staff * self.num_days + day]
    }

    /// Returns all shifts of given staff ordered by day.
    pub fn row(&self, staff: usize) -> &[ShiftKind] {
        let start = staff * self.num_days;
        &self.shifts[start..start + self.num_days]
    }

    /// Returns amount of staff assigned to the shift on given day.
    pub fn count(&self, day: usize, kind: ShiftKind) -> usize {
        (0..self.num_staff).filter(|&staff| self.shift(staff, day) == kind).count()
    }

    /// Returns total paid minutes of given staff within days range.
    pub fn worked_minutes(&self, staff: usize, days: std::ops::Range<usize>, catalog: &ShiftCatalog) -> u32 {
        self.row(staff)[days].iter().map(|&kind| catalog.working_minutes(kind)).sum()
    }

    /// Returns total paid hours of given staff over the whole horizon.
    pub fn worked_hours(&self, staff: usize, catalog: &ShiftCatalog) -> f64 {
        self.worked_minutes(staff, 0..self.num_days, catalog) as f64 / 60.
    }

    /// Checks hard rules on the schedule, returns all found violations.
    pub fn validate(&self, settings: &SchedulingSettings, catalog: &ShiftCatalog) -> Result<(), Vec<String>> {
        settings.validate().map_err(|err| vec![err.to_string()])?;

        let weeks = self.num_days / WEEK_DAYS;
        let min_rest = settings.min_rest_hours * 60;
        let window = settings.max_consecutive_nights + 1;
        let nights = catalog.night_shifts();

        let mut errors = Vec::new();

        (0..self.num_staff).for_each(|staff| {
            let row = self.row(staff);

            (0..weeks).for_each(|week| {
                let days = week * WEEK_DAYS..(week + 1) * WEEK_DAYS;

                let offs = row[days.clone()].iter().filter(|kind| !kind.is_working()).count();
                if offs != 1 {
                    errors.push(format!("staff {staff} has {offs} days off in week {}", week + 1));
                }

                let minutes = self.worked_minutes(staff, days, catalog);
                if minutes < settings.min_week_hours * 60 || minutes > settings.max_week_hours * 60 {
                    errors.push(format!("staff {staff} works {} minutes in week {}", minutes, week + 1));
                }
            });

            row.windows(window).enumerate().for_each(|(day, shifts)| {
                if shifts.iter().all(|kind| nights.contains(kind)) {
                    errors.push(format!("staff {staff} has more than {} night shifts from day {}", window - 1, day + 1));
                }
            });

            row.windows(2).enumerate().for_each(|(day, pair)| {
                if catalog.is_rest_conflict(pair[0], pair[1], min_rest) {
                    errors.push(format!("staff {staff} has not enough rest between {} and {}", day + 1, day + 2));
                }
            });
        });

        (0..self.num_days).for_each(|day| {
            catalog.working_kinds().filter(|&kind| self.count(day, kind) == 0).for_each(|kind| {
                errors.push(format!("shift {kind} is not covered on day {}", day + 1));
            })
        });

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
