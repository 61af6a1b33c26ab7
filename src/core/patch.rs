use serde_json::{json, Value};

use super::reconcile;
use crate::models::ConOpsInput;

/// Fixed note carried in every generated operational contract.
const TRACEABILITY_NOTE: &str =
    "Declarative ConOps contract; TradeSpaceKit computes feasibility/windows per design point.";

/// Project the input model into the nested patch document.
///
/// The four top-level sections and every key name below them are a stable
/// contract consumed downstream; renames here are breaking changes. List
/// fields serialize each element's full attribute set in input order.
pub fn build_patch(input: &ConOpsInput) -> Value {
    let (source_rules, manual_blocks) = reconcile(
        &input.window_masks,
        &input.source_rules,
        &input.manual_time_blocks,
    );

    json!({
        "study": {
            "profile": input.template,
        },
        "mission": {
            "intent": input.intent,
            "constraints": {
                "max_mass_kg": input.max_mass_kg,
                "max_power_w": input.max_power_w,
                "downlink_gb_per_day": input.downlink_gb_per_day,
                "autonomy_level": input.autonomy_level,
            },
        },
        "ops_timeline": {
            "phases": input.phases,
            "manual_time_blocks": manual_blocks,
            "activities": input.activities,
            "timeline_rows": input.timeline_rows,
        },
        "operational_contract": {
            "intent": input.intent,
            "stakeholders": input.stakeholders,
            "objectives": {
                "profile": input.template,
            },
            "phase_policies": {
                "autonomy_level": input.autonomy_level,
                "comms_policy": input.comms_policy,
                "overrides": input.phase_policy_overrides,
            },
            "window_sources": source_rules,
            "activity_gating_rules": input.requirement_rules,
            "traceability": {
                "notes": TRACEABILITY_NOTE,
            },
        },
    })
}
