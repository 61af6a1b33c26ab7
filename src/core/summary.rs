use std::fmt::Write;

use crate::models::ConOpsInput;

/// Render the human-readable Markdown digest of an input document.
///
/// Pure formatting: no validation, no reconciliation, no merge. Phases are
/// listed by their declared `order` key (stable for ties), not by list
/// position; the source-rule and gating-rule sections print an explicit
/// `- None` marker when empty.
pub fn render_summary(input: &ConOpsInput) -> String {
    let mut phases: Vec<_> = input.phases.iter().collect();
    phases.sort_by_key(|p| p.order);

    let mut out = String::new();
    let _ = write!(
        out,
        "# ConOps Summary\n\n\
         **Intent:** {}\n\n\
         **Stakeholders:** {}\n\n\
         **Template:** {}\n\n\
         **Policies:**\n- Autonomy level: {}\n- Comms policy: {}\n\n\
         **Constraints:**\n- Max mass: {} kg\n- Max power: {} W\n- Downlink: {} GB/day\n\n",
        input.intent,
        input.stakeholders,
        input.template,
        input.autonomy_level,
        input.comms_policy,
        input.max_mass_kg,
        input.max_power_w,
        input.downlink_gb_per_day,
    );

    out.push_str("**Phases:**\n");
    let phase_lines: Vec<String> = phases
        .iter()
        .map(|p| format!("- {} (duration={})", p.name, p.duration))
        .collect();
    out.push_str(&phase_lines.join("\n"));
    out.push_str("\n\n");

    out.push_str("**Window Source Rules:**\n");
    if input.source_rules.is_empty() {
        out.push_str("- None");
    } else {
        let lines: Vec<String> = input
            .source_rules
            .iter()
            .map(|r| format!("- {}: {} ({})", r.name, r.mode.as_str(), r.source_type))
            .collect();
        out.push_str(&lines.join("\n"));
    }
    out.push_str("\n\n");

    out.push_str("**Gating Rules:**\n");
    if input.requirement_rules.is_empty() {
        out.push_str("- None");
    } else {
        let lines: Vec<String> = input
            .requirement_rules
            .iter()
            .map(|r| format!("- {}: {} {}", r.activity_type, r.rule, r.threshold))
            .collect();
        out.push_str(&lines.join("\n"));
    }
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input_with_phases(phases: serde_json::Value) -> ConOpsInput {
        serde_json::from_value(json!({
            "intent": "demo",
            "stakeholders": "ops team",
            "phases": phases,
        }))
        .unwrap()
    }

    #[test]
    fn phases_are_listed_by_order_key_not_insertion_order() {
        let input = input_with_phases(json!([
            {"name": "cruise", "order": 2},
            {"name": "launch", "order": 1},
        ]));

        let summary = render_summary(&input);
        let launch = summary.find("- launch").unwrap();
        let cruise = summary.find("- cruise").unwrap();
        assert!(launch < cruise);
    }

    #[test]
    fn empty_rule_sections_print_none_markers() {
        let input = input_with_phases(json!([{"name": "launch", "order": 1}]));

        let summary = render_summary(&input);
        assert!(summary.contains("**Window Source Rules:**\n- None"));
        assert!(summary.contains("**Gating Rules:**\n- None"));
    }

    #[test]
    fn sections_appear_in_contract_order() {
        let input = input_with_phases(json!([{"name": "launch", "order": 1}]));

        let summary = render_summary(&input);
        let positions: Vec<usize> = [
            "**Intent:**",
            "**Stakeholders:**",
            "**Template:**",
            "**Policies:**",
            "**Constraints:**",
            "**Phases:**",
            "**Window Source Rules:**",
            "**Gating Rules:**",
        ]
        .iter()
        .map(|s| summary.find(s).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn rules_render_name_mode_and_source() {
        let mut input = input_with_phases(json!([{"name": "launch", "order": 1}]));
        input.source_rules = serde_json::from_value(json!([
            {"name": "contacts", "mode": "deny", "source_type": "ground_contact"}
        ]))
        .unwrap();
        input.requirement_rules = serde_json::from_value(json!([
            {"activity_type": "downlink", "rule": "min_elevation", "threshold": "10deg"}
        ]))
        .unwrap();

        let summary = render_summary(&input);
        assert!(summary.contains("- contacts: deny (ground_contact)"));
        assert!(summary.contains("- downlink: min_elevation 10deg"));
    }
}
