//! Plan quality metrics (KPIs).
//!
//! Summarizes how well a scheduling run used its term budget and credit
//! capacity.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion Rate | placed / courses needing placement |
//! | Terms Used | Filled terms |
//! | Avg Credits | Mean credits over filled terms |
//! | Cap Utilization | Avg credits / nominal cap |
//! | Overloaded Terms | Terms above the nominal cap |
//! | Span | Positions from first to last filled term, inclusive |

use crate::models::PlanningRequest;

use super::ScheduleOutcome;

/// Plan performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanKpi {
    /// Filled terms.
    pub terms_used: usize,
    /// Non-skipped terms consumed from the budget.
    pub terms_attempted: u32,
    /// Courses placed.
    pub courses_placed: usize,
    /// Courses that needed placement.
    pub total_courses: usize,
    /// Fraction placed (0.0..1.0). 1.0 when nothing needed placement.
    pub completion_rate: f64,
    /// Credits across all filled terms.
    pub total_credits: u32,
    /// Mean credits per filled term.
    pub avg_credits_per_term: f64,
    /// Smallest filled-term load.
    pub min_term_credits: u32,
    /// Largest filled-term load.
    pub max_term_credits: u32,
    /// Mean load relative to the nominal cap (may exceed 1.0 with overload).
    pub cap_utilization: f64,
    /// Terms whose total exceeds the nominal cap.
    pub overloaded_terms: usize,
    /// Positions spanned by the plan, including skipped and empty terms.
    pub span_terms: u32,
}

impl PlanKpi {
    /// Computes KPIs from a scheduling outcome.
    ///
    /// # Arguments
    /// * `outcome` - The scheduler result.
    /// * `request` - The request it was produced from (for the nominal cap).
    pub fn calculate(outcome: &ScheduleOutcome, request: &PlanningRequest) -> Self {
        let terms = &outcome.terms;
        let total_credits = terms
            .iter()
            .fold(0u32, |acc, t| acc.saturating_add(t.total_credits));
        let min_term_credits = terms.iter().map(|t| t.total_credits).min().unwrap_or(0);
        let max_term_credits = terms.iter().map(|t| t.total_credits).max().unwrap_or(0);

        let avg_credits_per_term = if terms.is_empty() {
            0.0
        } else {
            total_credits as f64 / terms.len() as f64
        };

        let cap_utilization = if request.max_credits_per_semester == 0 {
            0.0
        } else {
            avg_credits_per_term / request.max_credits_per_semester as f64
        };

        let overloaded_terms = terms
            .iter()
            .filter(|t| t.total_credits > request.max_credits_per_semester)
            .count();

        let completion_rate = if outcome.total_courses == 0 {
            1.0
        } else {
            outcome.courses_placed as f64 / outcome.total_courses as f64
        };

        let span_terms = match (terms.first(), terms.last()) {
            (Some(first), Some(last)) => last.position - first.position + 1,
            _ => 0,
        };

        Self {
            terms_used: terms.len(),
            terms_attempted: outcome.terms_attempted,
            courses_placed: outcome.courses_placed,
            total_courses: outcome.total_courses,
            completion_rate,
            total_credits,
            avg_credits_per_term,
            min_term_credits,
            max_term_credits,
            cap_utilization,
            overloaded_terms,
            span_terms,
        }
    }

    /// Whether the plan meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_completion: f64, min_utilization: f64) -> bool {
        self.completion_rate >= min_completion && self.cap_utilization >= min_utilization
    }
}
