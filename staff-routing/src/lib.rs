//! Staff routing crate builds a synthetic *multi-depot pickup* problem: staff members are collected
//! by a fleet of vehicles which start at different places and all finish at a single depot.
//!
//! The search itself is delegated to `vrp-core`, this crate only:
//! - synthesizes problem data, see [data]
//! - translates it into the solver's model, see [problem]
//! - runs the solver within a time budget, see [solver]
//! - formats and plots the result, see [writer] and [plots]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub use vrp_core as core;

pub mod data;
pub mod plots;
pub mod problem;
pub mod solver;
pub mod writer;
