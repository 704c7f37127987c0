//! Staff scheduling crate assigns shifts to staff members over a planning horizon respecting rest
//! time, weekly hours and coverage rules.
//!
//! The crate formulates the problem as a mixed-integer linear program and delegates the search to
//! `good_lp` with its pure rust `microlp` backend:
//! - shift definitions are kept in [shifts]
//! - decision variables and constraints are built in [model]
//! - the solver is invoked within a time budget in [solver]
//! - results are kept in [schedule] and formatted in [writer]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub mod model;
pub mod schedule;
pub mod shifts;
pub mod solver;
pub mod writer;
