//! Term scheduler and plan KPI evaluation.
//!
//! # Algorithm
//!
//! `TermScheduler` walks academic terms in rotation and fills each one
//! first-fit from the topologically ordered course list, subject to
//! prerequisite readiness and the per-term credit cap. It is not optimal,
//! but deterministic and fast.
//!
//! # KPI
//!
//! `PlanKpi` computes completion rate, credit load and cap utilization.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Johnson (1974), "Fast algorithms for bin packing" (first-fit)

mod kpi;
mod term;

pub use kpi::PlanKpi;
pub use term::{ScheduleOutcome, TermScheduler, MAX_CONSECUTIVE_EMPTY_TERMS};
