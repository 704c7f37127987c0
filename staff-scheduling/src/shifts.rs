//! Contains shift definitions.

#[cfg(test)]
#[path = "../tests/unit/shifts_test.rs"]
mod shifts_test;

use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// Minutes in a day.
pub const DAY_MINUTES: u32 = 24 * 60;

/// A shift label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum ShiftKind {
    /// A morning shift.
    A,
    /// A day shift.
    B,
    /// An afternoon shift.
    C,
    /// An evening shift.
    D,
    /// A rest day.
    #[serde(rename = "OFF")]
    Off,
}

impl ShiftKind {
    /// All shift kinds in their canonical order.
    pub const ALL: [ShiftKind; 5] = [ShiftKind::A, ShiftKind::B, ShiftKind::C, ShiftKind::D, ShiftKind::Off];

    /// Returns shift label.
    pub fn label(&self) -> &'static str {
        match self {
            ShiftKind::A => "A",
            ShiftKind::B => "B",
            ShiftKind::C => "C",
            ShiftKind::D => "D",
            ShiftKind::Off => "OFF",
        }
    }

    /// Returns true if it is not a rest day.
    pub fn is_working(&self) -> bool {
        !matches!(self, ShiftKind::Off)
    }
}

impl Display for ShiftKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Shift time window as (hour, minute) pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShiftTime {
    /// Start time.
    pub start: (u32, u32),
    /// End time, a shift ends on the next day when it is earlier than start.
    pub end: (u32, u32),
}

impl ShiftTime {
    /// Creates a new instance of `ShiftTime`.
    pub fn new(start: (u32, u32), end: (u32, u32)) -> Self {
        Self { start, end }
    }

    /// Returns start as minutes from midnight.
    pub fn start_minutes(&self) -> u32 {
        self.start.0 * 60 + self.start.1
    }

    /// Returns end as minutes from midnight of the start day.
    pub fn end_minutes(&self) -> u32 {
        let end = self.end.0 * 60 + self.end.1;
        if end < self.start_minutes() { end + DAY_MINUTES } else { end }
    }

    /// Returns total duration in minutes.
    pub fn duration(&self) -> u32 {
        self.end_minutes() - self.start_minutes()
    }
}

impl Display for ShiftTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", format_time(self.start.0, self.start.1), format_time(self.end.0, self.end.1))
    }
}

/// Keeps working shifts, their desired staffing and rules derived from their times.
#[derive(Clone, Debug)]
pub struct ShiftCatalog {
    times: Vec<(ShiftKind, ShiftTime)>,
    desired_staff: Vec<(ShiftKind, usize)>,
    night_shifts: Vec<ShiftKind>,
    break_minutes: u32,
}

impl Default for ShiftCatalog {
    fn default() -> Self {
        Self {
            times: vec![
                (ShiftKind::A, ShiftTime::new((8, 0), (15, 30))),
                (ShiftKind::B, ShiftTime::new((13, 0), (21, 0))),
                (ShiftKind::C, ShiftTime::new((14, 30), (22, 0))),
                (ShiftKind::D, ShiftTime::new((16, 0), (23, 30))),
            ],
            desired_staff: vec![(ShiftKind::A, 10), (ShiftKind::B, 8), (ShiftKind::C, 9), (ShiftKind::D, 5)],
            night_shifts: vec![ShiftKind::C, ShiftKind::D],
            break_minutes: 60,
        }
    }
}

impl ShiftCatalog {
    /// Creates a new instance of `ShiftCatalog`.
    pub fn new(
        times: Vec<(ShiftKind, ShiftTime)>,
        desired_staff: Vec<(ShiftKind, usize)>,
        night_shifts: Vec<ShiftKind>,
        break_minutes: u32,
    ) -> Self {
        Self { times, desired_staff, night_shifts, break_minutes }
    }

    /// Returns all shift kinds including a rest day.
    pub fn kinds(&self) -> impl Iterator<Item = ShiftKind> + '_ {
        self.working_kinds().chain(std::iter::once(ShiftKind::Off))
    }

    /// Returns working shift kinds.
    pub fn working_kinds(&self) -> impl Iterator<Item = ShiftKind> + '_ {
        self.times.iter().map(|(kind, _)| *kind)
    }

    /// Returns shift time, `None` for a rest day.
    pub fn time(&self, kind: ShiftKind) -> Option<&ShiftTime> {
        self.times.iter().find(|(other, _)| *other == kind).map(|(_, time)| time)
    }

    /// Returns desired amount of staff on the shift.
    pub fn desired_staff(&self, kind: ShiftKind) -> Option<usize> {
        self.desired_staff.iter().find(|(other, _)| *other == kind).map(|(_, count)| *count)
    }

    /// Returns shifts considered as night ones.
    pub fn night_shifts(&self) -> &[ShiftKind] {
        self.night_shifts.as_slice()
    }

    /// Returns paid minutes of the shift: its duration without a break.
    pub fn working_minutes(&self, kind: ShiftKind) -> u32 {
        self.time(kind).map_or(0, |time| time.duration().saturating_sub(self.break_minutes))
    }

    /// Returns rest in minutes between the first shift and the next one on the following day.
    /// Returns `None` when any of them is a rest day.
    ///
    /// This is the real gap across midnight, so A (ends 15:30) followed by D (starts 16:00) gives
    /// 24.5 hours of rest and is allowed, unlike a gap wrapped around a single day.
    pub fn rest_minutes(&self, first: ShiftKind, next: ShiftKind) -> Option<u32> {
        match (self.time(first), self.time(next)) {
            (Some(first), Some(next)) => Some((next.start_minutes() + DAY_MINUTES).saturating_sub(first.end_minutes())),
            _ => None,
        }
    }

    /// Checks whether the next day shift starts too early after the first one.
    pub fn is_rest_conflict(&self, first: ShiftKind, next: ShiftKind, min_rest_minutes: u32) -> bool {
        self.rest_minutes(first, next).is_some_and(|rest| rest < min_rest_minutes)
    }

    /// Returns all ordered pairs of working shifts which cannot be assigned on consecutive days.
    pub fn rest_conflicts(&self, min_rest_minutes: u32) -> Vec<(ShiftKind, ShiftKind)> {
        self.working_kinds()
            .flat_map(|first| self.working_kinds().map(move |next| (first, next)))
            .filter(|&(first, next)| self.is_rest_conflict(first, next, min_rest_minutes))
            .collect()
    }
}

/// Formats time as `HH:MM`.
pub fn format_time(hour: u32, minute: u32) -> String {
    format!("{hour:02}:{minute:02}")
}
