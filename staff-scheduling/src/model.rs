//! Contains a mixed-integer formulation of the staff scheduling problem.

#[cfg(test)]
#[path = "../tests/unit/model_test.rs"]
mod model_test;

use crate::schedule::{Schedule, WEEK_DAYS};
use crate::shifts::{ShiftCatalog, ShiftKind};
use good_lp::{
    Constraint, Expression, ProblemVariables, ResolutionError, Solution, SolverModel, Variable, constraint,
    default_solver, variable,
};
use rosomaxa::utils::{GenericError, GenericResult};
use serde::Deserialize;

const MAX_STAFF: usize = 10_000;
const MAX_DAYS: usize = 366;
const MAX_WEEK_HOURS: u32 = 7 * 24;
const MAX_REST_HOURS: u32 = 24;

/// Specifies scheduling problem parameters.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchedulingSettings {
    /// Amount of staff members.
    pub num_staff: usize,
    /// Length of the planning horizon in days.
    pub num_days: usize,
    /// Minimum paid hours per full week.
    pub min_week_hours: u32,
    /// Maximum paid hours per full week.
    pub max_week_hours: u32,
    /// Maximum amount of night shifts in a row.
    pub max_consecutive_nights: usize,
    /// Minimum rest between shifts on consecutive days.
    pub min_rest_hours: u32,
    /// Objective reward for a day off on Sunday.
    pub sunday_off_weight: f64,
    /// Wall-clock time budget in seconds.
    pub max_time: u64,
}

impl Default for SchedulingSettings {
    fn default() -> Self {
        Self {
            num_staff: 48,
            num_days: 30,
            min_week_hours: 40,
            max_week_hours: 50,
            max_consecutive_nights: 3,
            min_rest_hours: 11,
            sunday_off_weight: 1.,
            max_time: 120,
        }
    }
}

impl SchedulingSettings {
    /// Checks that settings describe a meaningful problem.
    pub fn validate(&self) -> GenericResult<()> {
        if self.num_staff == 0 || self.num_staff > MAX_STAFF {
            return Err(format!("amount of staff should be in [1, {MAX_STAFF}], got: {}", self.num_staff).into());
        }

        if self.num_days == 0 || self.num_days > MAX_DAYS {
            return Err(format!("amount of days should be in [1, {MAX_DAYS}], got: {}", self.num_days).into());
        }

        if self.max_week_hours > MAX_WEEK_HOURS {
            let max_week_hours = self.max_week_hours;
            return Err(format!("max week hours should not exceed {MAX_WEEK_HOURS}, got: {max_week_hours}").into());
        }

        if self.min_rest_hours > MAX_REST_HOURS {
            let min_rest_hours = self.min_rest_hours;
            return Err(format!("min rest hours should not exceed {MAX_REST_HOURS}, got: {min_rest_hours}").into());
        }

        if self.max_consecutive_nights > MAX_DAYS {
            return Err(format!(
                "max consecutive nights should not exceed {MAX_DAYS}, got: {}",
                self.max_consecutive_nights
            )
            .into());
        }

        if self.min_week_hours > self.max_week_hours {
            return Err(format!(
                "min week hours should not exceed max week hours: {} > {}",
                self.min_week_hours, self.max_week_hours
            )
            .into());
        }

        if self.sunday_off_weight.is_nan() || self.sunday_off_weight < 0. {
            return Err("sunday off weight should be non-negative".into());
        }

        Ok(())
    }
}

/// Keeps decision variables, constraints and objective of the scheduling problem.
pub struct ScheduleModel {
    num_staff: usize,
    num_days: usize,
    variables: ProblemVariables,
    assignments: Vec<Variable>,
    deviations: Vec<Variable>,
    constraints: Vec<Constraint>,
    objective: Expression,
}

impl ScheduleModel {
    /// Creates a new instance of `ScheduleModel`.
    pub fn new(settings: &SchedulingSettings, catalog: &ShiftCatalog) -> GenericResult<Self> {
        settings.validate()?;

        let has_all_kinds = ShiftKind::ALL.iter().all(|kind| catalog.kinds().any(|other| other == *kind));
        if !has_all_kinds || catalog.kinds().count() != ShiftKind::ALL.len() {
            return Err("shift catalog should define every shift kind".into());
        }

        let mut variables = ProblemVariables::new();
        let assignments = (0..settings.num_staff * settings.num_days * ShiftKind::ALL.len())
            .map(|_| variables.add(variable().binary()))
            .collect();

        let mut model = Self {
            num_staff: settings.num_staff,
            num_days: settings.num_days,
            variables,
            assignments,
            deviations: Vec::new(),
            constraints: Vec::new(),
            objective: Expression::from(0.),
        };

        model.add_single_shift_per_day();
        model.add_weekly_day_off();
        model.add_consecutive_nights(catalog, settings.max_consecutive_nights);
        model.add_minimum_rest(catalog, settings.min_rest_hours * 60);
        model.add_weekly_hours(catalog, settings.min_week_hours * 60, settings.max_week_hours * 60);
        model.add_shift_coverage(catalog);
        model.add_desired_staff(catalog)?;
        model.add_sunday_off_preference(settings.sunday_off_weight);

        Ok(model)
    }

    /// Returns total amount of decision variables.
    pub fn variable_count(&self) -> usize {
        self.assignments.len() + self.deviations.len()
    }

    /// Returns total amount of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Solves the model. Returns `None` if it is infeasible.
    pub fn solve(self) -> GenericResult<Option<Schedule>> {
        let Self { num_staff, num_days, variables, assignments, constraints, objective, .. } = self;

        let model = constraints
            .into_iter()
            .fold(variables.minimise(objective).using(default_solver), |model, constraint| model.with(constraint));

        let solution = match model.solve() {
            Ok(solution) => solution,
            Err(ResolutionError::Infeasible) => return Ok(None),
            Err(err) => return Err(GenericError::from(format!("cannot solve scheduling model: {err}"))),
        };

        let rows = (0..num_staff)
            .map(|staff| {
                (0..num_days)
                    .map(|day| {
                        ShiftKind::ALL
                            .into_iter()
                            .find(|&kind| {
                                let offset = assignment_offset(num_days, staff, day, kind);
                                solution.value(assignments[offset]) > 0.5
                            })
                            .ok_or_else(|| format!("no shift assigned to staff {staff} on day {}", day + 1).into())
                    })
                    .collect::<GenericResult<Vec<_>>>()
            })
            .collect::<GenericResult<Vec<_>>>()?;

        Schedule::new(rows).map(Some)
    }

    fn assignment(&self, staff: usize, day: usize, kind: ShiftKind) -> Variable {
        self.assignments[assignment_offset(self.num_days, staff, day, kind)]
    }

    fn weeks(&self) -> usize {
        self.num_days / WEEK_DAYS
    }

    fn staff_count(&self, day: usize, kind: ShiftKind) -> Expression {
        (0..self.num_staff).map(|staff| self.assignment(staff, day, kind)).sum()
    }

    fn add_single_shift_per_day(&mut self) {
        for staff in 0..self.num_staff {
            for day in 0..self.num_days {
                let shifts: Expression = ShiftKind::ALL.iter().map(|&kind| self.assignment(staff, day, kind)).sum();
                self.constraints.push(constraint!(shifts == 1.));
            }
        }
    }

    fn add_weekly_day_off(&mut self) {
        for staff in 0..self.num_staff {
            for week in 0..self.weeks() {
                let offs: Expression = (week * WEEK_DAYS..(week + 1) * WEEK_DAYS)
                    .map(|day| self.assignment(staff, day, ShiftKind::Off))
                    .sum();
                self.constraints.push(constraint!(offs == 1.));
            }
        }
    }

    fn add_consecutive_nights(&mut self, catalog: &ShiftCatalog, max_nights: usize) {
        let window = max_nights + 1;
        let limit = max_nights as f64;

        for staff in 0..self.num_staff {
            for start in 0..(self.num_days + 1).saturating_sub(window) {
                let nights: Expression = (start..start + window)
                    .flat_map(|day| catalog.night_shifts().iter().map(move |&kind| (day, kind)))
                    .map(|(day, kind)| self.assignment(staff, day, kind))
                    .sum();
                self.constraints.push(constraint!(nights <= limit));
            }
        }
    }

    fn add_minimum_rest(&mut self, catalog: &ShiftCatalog, min_rest_minutes: u32) {
        let conflicts = catalog.rest_conflicts(min_rest_minutes);

        for staff in 0..self.num_staff {
            for day in 0..self.num_days.saturating_sub(1) {
                for &(first, next) in conflicts.iter() {
                    let mut pair = Expression::from(self.assignment(staff, day, first));
                    pair.add_mul(1., self.assignment(staff, day + 1, next));
                    self.constraints.push(constraint!(pair <= 1.));
                }
            }
        }
    }

    fn add_weekly_hours(&mut self, catalog: &ShiftCatalog, min_minutes: u32, max_minutes: u32) {
        let (min_minutes, max_minutes) = (min_minutes as f64, max_minutes as f64);

        for staff in 0..self.num_staff {
            for week in 0..self.weeks() {
                let mut minutes = Expression::from(0.);
                for day in week * WEEK_DAYS..(week + 1) * WEEK_DAYS {
                    for kind in catalog.working_kinds() {
                        minutes.add_mul(catalog.working_minutes(kind) as f64, self.assignment(staff, day, kind));
                    }
                }

                let upper = minutes.clone();
                self.constraints.push(constraint!(minutes >= min_minutes));
                self.constraints.push(constraint!(upper <= max_minutes));
            }
        }
    }

    fn add_shift_coverage(&mut self, catalog: &ShiftCatalog) {
        for day in 0..self.num_days {
            for kind in catalog.working_kinds() {
                let count = self.staff_count(day, kind);
                self.constraints.push(constraint!(count >= 1.));
            }
        }
    }

    fn add_desired_staff(&mut self, catalog: &ShiftCatalog) -> GenericResult<()> {
        for kind in catalog.working_kinds() {
            let desired = catalog
                .desired_staff(kind)
                .ok_or_else(|| GenericError::from(format!("no desired staff amount for shift {kind}")))?
                as f64;

            for day in 0..self.num_days {
                let deviation = self.variables.add(variable().min(0.));

                // deviation >= |count - desired|
                let mut over = Expression::from(deviation);
                over.add_mul(-1., self.staff_count(day, kind));
                let mut under = Expression::from(deviation);
                under.add_mul(1., self.staff_count(day, kind));

                self.constraints.push(constraint!(over >= -desired));
                self.constraints.push(constraint!(under >= desired));

                self.objective.add_mul(1., deviation);
                self.deviations.push(deviation);
            }
        }

        Ok(())
    }

    fn add_sunday_off_preference(&mut self, weight: f64) {
        for staff in 0..self.num_staff {
            for week in 0..self.weeks() {
                let sunday = week * WEEK_DAYS + WEEK_DAYS - 1;
                self.objective.add_mul(-weight, self.assignment(staff, sunday, ShiftKind::Off));
            }
        }
    }
}

fn assignment_offset(num_days: usize, staff: usize, day: usize, kind: ShiftKind) -> usize {
    (staff * num_days + day) * ShiftKind::ALL.len() + kind as usize
}
