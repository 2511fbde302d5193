//! # Markdown Report
//!
//! Renders the readiness report the product's PDF exporter lays out —
//! organisation header, overall result, systems table, obligations — as
//! Markdown. Obligations whose deadline lies before the report date are
//! marked overdue.

use chrono::NaiveDate;

use aira_engine::{OrgAssessment, SystemAssessment};
use aira_rules::deadlines::deadline_passed;
use aira_rules::obligations::Obligation;

/// Render an assessment as a Markdown report.
///
/// `as_of` is the report creation date; it drives both the "Erstellt am"
/// header line and the overdue markers.
pub fn render_markdown(assessment: &OrgAssessment, as_of: NaiveDate) -> String {
    let mut out = String::new();

    out.push_str("# AI Act Readiness – Bericht\n\n");
    out.push_str(&format!("Erstellt am: {}\n\n", as_of.format("%Y-%m-%d")));

    render_org(&mut out, assessment);
    render_summary(&mut out, assessment);
    render_systems(&mut out, assessment, as_of);

    if !assessment.prioritized_actions.is_empty() {
        out.push_str("## Top-Maßnahmen\n\n");
        for action in &assessment.prioritized_actions {
            out.push_str(&format!("- {}\n", obligation_line(action, as_of)));
        }
        out.push('\n');
    }

    out
}

fn render_org(out: &mut String, assessment: &OrgAssessment) {
    let org = &assessment.org;
    out.push_str("## Organisation\n\n");
    out.push_str(&format!("- Name: {}\n", org.name));
    out.push_str(&format!(
        "- Branche: {}\n",
        org.sector.as_deref().unwrap_or("–")
    ));
    out.push_str(&format!("- Größe: {}\n", org.size));
    let roles = if org.roles.is_empty() {
        "–".to_string()
    } else {
        org.roles
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    out.push_str(&format!("- Rollen: {roles}\n\n"));
}

fn render_summary(out: &mut String, assessment: &OrgAssessment) {
    out.push_str("## Gesamtergebnis\n\n");
    out.push_str(&format!(
        "- Gesamt-Score: {} / 100\n",
        assessment.readiness_score
    ));
    out.push_str(&format!("- Band: {}\n", assessment.score_band));
    out.push_str(&format!(
        "- Scoring-Version: {}\n\n",
        assessment.scoring_version
    ));
}

fn render_systems(out: &mut String, assessment: &OrgAssessment, as_of: NaiveDate) {
    out.push_str("## Systeme\n\n");

    if assessment.systems.is_empty() {
        out.push_str("Keine Systeme erfasst.\n\n");
        return;
    }

    out.push_str("| System | Kategorie | Score | Pflichten |\n");
    out.push_str("|---|---|---|---|\n");
    for system in &assessment.systems {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            escape_cell(&system.name),
            system.category,
            system.system_score,
            system.obligations.len()
        ));
    }
    out.push('\n');

    for system in &assessment.systems {
        render_system_detail(out, system, as_of);
    }
}

fn render_system_detail(out: &mut String, system: &SystemAssessment, as_of: NaiveDate) {
    if system.obligations.is_empty() && system.red_flags.is_empty() {
        return;
    }

    out.push_str(&format!("### {}\n\n", system.name));
    for obligation in &system.obligations {
        out.push_str(&format!("- {}\n", obligation_line(obligation, as_of)));
    }
    for flag in &system.red_flags {
        out.push_str(&format!("- Red Flag: {flag}\n"));
    }
    out.push('\n');
}

/// One obligation as a report line: label, legal reference, deadline, and
/// an overdue marker when the deadline lies before the report date.
fn obligation_line(obligation: &Obligation, as_of: NaiveDate) -> String {
    let mut line = obligation.label.clone();
    if let Some(ref legal_ref) = obligation.legal_ref {
        line.push_str(&format!(" – {legal_ref}"));
    }
    if let Some(ref deadline) = obligation.deadline {
        line.push_str(&format!(" (bis {deadline})"));
        if deadline_passed(deadline, as_of) {
            line.push_str(" **überfällig**");
        }
    }
    line
}

/// Table cells must not break on a `|` in a system name.
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
