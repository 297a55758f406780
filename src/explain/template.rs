//! Template-based narrative generation.
//!
//! A deterministic [`ExplanationGenerator`] that renders the savings
//! narrative from the scenario data itself. Serves as the default
//! generator and as the reference behavior for external implementations.

use rust_decimal::Decimal;

use crate::config::JobRole;
use crate::models::{EmploymentType, SavingsSummary, ScenarioSet};

use super::ExplanationGenerator;

/// Deterministic template-based savings narrator.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateNarrator;

impl ExplanationGenerator for TemplateNarrator {
    fn explain(&self, scenarios: &ScenarioSet, savings: &SavingsSummary, role: &JobRole) -> String {
        if savings.absolute <= Decimal::ZERO {
            return "Your current strategy is already well-optimized for cost efficiency. \
                    Consider exploring balanced approaches for enhanced operational flexibility."
                .to_string();
        }

        let mut sections = vec![format!(
            "Workforce analysis for {}: the optimized strategy saves {} ({}%) compared to the \
             current approach.",
            role.name,
            format_usd(savings.absolute),
            savings.percentage.round_dp(1)
        )];

        let lead_location = scenarios
            .cost_effective
            .allocations
            .first()
            .map(|a| a.location.as_str());
        let current_location = scenarios
            .current
            .allocations
            .first()
            .map(|a| a.location.as_str());

        if let Some(lead) = lead_location {
            if lead_location != current_location {
                sections.push(format!(
                    "Key insight: leveraging {}'s cost advantages lowers total employment costs \
                     through reduced social charges and access to competitive talent markets.",
                    lead
                ));
            }
        }

        let contractor_count: u32 = scenarios
            .cost_effective
            .allocations
            .iter()
            .filter(|a| a.employment_type == EmploymentType::Contractor)
            .map(|a| a.headcount)
            .sum();

        if contractor_count > 0 {
            sections.push(format!(
                "Strategic contractor utilization ({} contractors) eliminates benefits overhead \
                 while maintaining operational flexibility.",
                contractor_count
            ));
        }

        sections.push(
            "Risk mitigation: the recommended mix balances cost optimization with talent quality \
             and operational stability."
                .to_string(),
        );

        sections.join("\n")
    }
}

/// Formats a dollar amount with thousands separators and no cents.
fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp(0);
    let digits = rounded.abs().to_string();

    let mut reversed = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(ch);
    }
    let grouped: String = reversed.chars().rev().collect();

    if rounded.is_sign_negative() {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
