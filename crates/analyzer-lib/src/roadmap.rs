//! Roadmap summarization
//!
//! Normalizes planner-supplied phases into a presentable timeline:
//! durations derived from date spans, the terminal phase marked, and
//! the `criticalPath` flag passed through untouched (no slack/float
//! analysis happens here). Missing roadmap data degrades to an
//! "unavailable" result instead of failing, since roadmap input is
//! optional relative to cost data.

use chrono::NaiveDate;

use crate::models::{ProjectSummary, RoadmapPhase, RoadmapResult, TimelinePhase};

/// Date format used by the upstream planner
const DATE_FORMAT: &str = "%Y-%m-%d";

impl RoadmapResult {
    /// Sentinel for absent or empty roadmap data
    pub fn unavailable() -> Self {
        Self {
            available: false,
            project_summary: None,
            phases: Vec::new(),
        }
    }
}

/// Summarize a phase list into an ordered, annotated timeline.
///
/// Phases keep their input order, which is assumed chronological by
/// start date; the last element is marked terminal for rendering.
pub fn summarize(phases: &[RoadmapPhase], summary: &ProjectSummary) -> RoadmapResult {
    if phases.is_empty() {
        return RoadmapResult::unavailable();
    }

    let last = phases.len() - 1;
    let timeline = phases
        .iter()
        .enumerate()
        .map(|(index, phase)| TimelinePhase {
            name: phase.name.clone(),
            start_date: phase.start_date.clone(),
            end_date: phase.end_date.clone(),
            duration: derive_duration(&phase.start_date, &phase.end_date, &phase.duration),
            critical_path: phase.critical_path,
            complexity: phase.complexity,
            strategy: phase.strategy.clone(),
            tasks: phase.tasks.clone(),
            deliverables: phase.deliverables.clone(),
            risks: phase.risks.clone(),
            is_final: index == last,
        })
        .collect();

    let project_summary = ProjectSummary {
        duration: derive_duration(&summary.start_date, &summary.end_date, &summary.duration),
        ..summary.clone()
    };

    RoadmapResult {
        available: true,
        project_summary: Some(project_summary),
        phases: timeline,
    }
}

/// Duration display string for a date span.
///
/// Falls back to the supplied string when either date fails to parse,
/// so malformed planner output still renders something.
fn derive_duration(start: &str, end: &str, supplied: &str) -> String {
    match (parse_date(start), parse_date(end)) {
        (Some(start), Some(end)) => {
            let days = (end - start).num_days().max(0);
            format!("{days} days")
        }
        _ => supplied.to_string(),
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}
