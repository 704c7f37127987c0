//! Runs the scheduling model within a time budget.

#[cfg(test)]
#[path = "../tests/unit/solver_test.rs"]
mod solver_test;

use crate::model::{ScheduleModel, SchedulingSettings};
use crate::schedule::Schedule;
use crate::shifts::ShiftCatalog;
use rosomaxa::utils::{GenericResult, InfoLogger, Timer};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Builds and solves the scheduling model. Returns `None` when no feasible schedule is found
/// within `max_time` seconds.
pub fn solve_schedule(
    settings: &SchedulingSettings,
    catalog: &ShiftCatalog,
    logger: InfoLogger,
) -> GenericResult<Option<Schedule>> {
    let timer = Timer::start();
    let model = ScheduleModel::new(settings, catalog)?;

    (logger)(&format!(
        "scheduling model has {} variables and {} constraints",
        model.variable_count(),
        model.constraint_count()
    ));

    let (sender, receiver) = mpsc::channel();
    // the worker is detached on timeout: the solver has no cancellation hook
    thread::spawn(move || {
        let _ = sender.send(model.solve());
    });

    match receiver.recv_timeout(Duration::from_secs(settings.max_time)) {
        Ok(result) => {
            let schedule = result?;
            let status = if schedule.is_some() { "schedule found" } else { "model is infeasible" };
            (logger)(&format!("solver finished in {}ms: {status}", timer.elapsed_millis()));

            Ok(schedule)
        }
        Err(mpsc::RecvTimeoutError::Timeout) => {
            (logger)(&format!("solver exceeded time limit of {}s, consider increasing max time", settings.max_time));
            Ok(None)
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => Err("scheduling solver terminated unexpectedly".into()),
    }
}
