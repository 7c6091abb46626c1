//! Course-planning domain models.
//!
//! Provides the input records (courses, planning request), the produced
//! records (terms, plan) and the diagnostics channel.
//!
//! # Domain Mappings
//!
//! | u-courseplan | Generic scheduling |
//! |--------------|--------------------|
//! | CourseNode | Task with precedence |
//! | Term | Time bucket with capacity |
//! | credits | Resource consumption |
//! | Plan | Schedule |

mod course;
mod diagnostic;
mod plan;
mod request;
mod term;

pub use course::{CourseNode, CourseType};
pub use diagnostic::{Diagnostic, DiagnosticCode, Diagnostics};
pub use plan::{Plan, PlanPreferences, PlannedCourse, PlannedSemester, Term};
pub use request::{PlanningRequest, OVERLOAD_CREDITS};
pub use term::{Season, TermId};
