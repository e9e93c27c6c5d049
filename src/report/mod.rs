//! Report generation: per-issue impact explanations and clarifying
//! questions, both driven by fixed template tables.

pub mod impact;
pub mod questions;

use crate::core::{
    AmbiguityIssue, AssumptionIssue, IssueType, ReportedIssue,
};

pub use questions::clarifying_questions;

/// Format both issue lists for reporting, preserving detection order
/// (ambiguity first, then assumptions) and attaching impact text.
pub fn format_issues(
    ambiguity: &[AmbiguityIssue],
    assumptions: &[AssumptionIssue],
) -> Vec<ReportedIssue> {
    let mut issues = Vec::with_capacity(ambiguity.len() + assumptions.len());

    for issue in ambiguity {
        issues.push(ReportedIssue {
            issue_type: IssueType::Ambiguity,
            message: issue.message.clone(),
            category: None,
            assumption: None,
            impact: impact::ambiguity_impact(issue).to_string(),
        });
    }

    for issue in assumptions {
        issues.push(ReportedIssue {
            issue_type: IssueType::Assumption,
            message: issue.message.clone(),
            category: Some(issue.category),
            assumption: Some(issue.assumption.clone()),
            impact: impact::assumption_impact(issue),
        });
    }

    issues
}
