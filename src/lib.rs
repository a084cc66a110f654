//! bpr: run a command across many repositories and open a pull request for each.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::run;
pub use domain::{AppError, RawRunConfig, RunConfig, RunOutcome, RunSummary};
