//! Command-line front end for the debtplan engine
//!
//! Loads a YAML debts profile, runs the simulation and scoring engine from
//! `debtplan_core`, and renders text or JSON reports.

#![warn(clippy::all)]

pub mod logging;
pub mod profile;
pub mod report;
pub mod util;

pub use logging::init_logging;
pub use profile::Profile;
