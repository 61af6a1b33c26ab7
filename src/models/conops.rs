use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structural validation failure raised while constructing input entities.
///
/// Carries the offending field and the violated rule; the API layer
/// translates it into a 400 response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: {rule}")]
    FieldConstraint {
        field: &'static str,
        rule: &'static str,
    },
}

impl ValidationError {
    fn field(field: &'static str, rule: &'static str) -> Self {
        Self::FieldConstraint { field, rule }
    }
}

/// Whether a gating entry opens or closes the window it describes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GateMode {
    #[default]
    Allow,
    Deny,
}

impl GateMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Deny => "deny",
        }
    }
}

/// A named mission phase on the ordered timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    pub order: i64,
    #[serde(default = "default_duration")]
    pub duration: f64,
}

impl Phase {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.duration <= 0.0 {
            return Err(ValidationError::field(
                "phase.duration",
                "duration must be > 0",
            ));
        }
        Ok(())
    }
}

/// Legacy timing window. Superseded by the source-rule / manual-block split
/// but still accepted on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingWindow {
    pub name: String,
    pub start: f64,
    pub end: f64,
}

impl TimingWindow {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.end <= self.start {
            return Err(ValidationError::field(
                "window.end",
                "window end must be greater than start",
            ));
        }
        Ok(())
    }
}

/// Legacy combined gating entity. Old clients send these; the reconciler
/// splits each one into a [`SourceRule`] or a [`ManualTimeBlock`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowMask {
    pub name: String,
    pub start: f64,
    pub end: f64,
    #[serde(default)]
    pub mode: GateMode,
    #[serde(default = "default_source_type")]
    pub source_type: String,
    #[serde(default)]
    pub source_ref: String,
}

impl WindowMask {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.end <= self.start {
            return Err(ValidationError::field(
                "window_mask.end",
                "window end must be greater than start",
            ));
        }
        Ok(())
    }
}

/// A reusable gating rule tied to a named source (e.g. a ground-contact
/// schedule). Carries no time range of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRule {
    pub name: String,
    #[serde(default)]
    pub mode: GateMode,
    #[serde(default = "default_source_type")]
    pub source_type: String,
    #[serde(default)]
    pub source_ref: String,
}

/// A fixed one-off time interval override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualTimeBlock {
    pub name: String,
    pub start: f64,
    pub end: f64,
    #[serde(default)]
    pub mode: GateMode,
    #[serde(default = "default_manual_source_type")]
    pub source_type: String,
}

impl ManualTimeBlock {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.end <= self.start {
            return Err(ValidationError::field(
                "manual_time_block.end",
                "block end must be greater than start",
            ));
        }
        Ok(())
    }
}

/// A scheduled activity on the timeline display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub start: f64,
    #[serde(default = "default_duration")]
    pub duration: f64,
    #[serde(default)]
    pub row: i64,
}

impl Activity {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.duration <= 0.0 {
            return Err(ValidationError::field(
                "activity.duration",
                "duration must be > 0",
            ));
        }
        Ok(())
    }
}

/// A gating condition restricting when an activity type may run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementRule {
    pub activity_type: String,
    pub rule: String,
    #[serde(default)]
    pub threshold: String,
}

/// Sparse per-phase policy override. Absent fields must never clobber
/// baseline values; the merge layer treats serialized nulls as "keep base".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhasePolicyOverride {
    pub phase: String,
    #[serde(default)]
    pub autonomy_level: Option<i64>,
    #[serde(default)]
    pub comms_policy: Option<String>,
}

/// Aggregate root for a single ConOps description.
///
/// List fields all default to empty so old clients can omit what they
/// don't know about. Call [`ConOpsInput::validate`] after deserializing;
/// validation is per-entity only (no cross-entity checks).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConOpsInput {
    pub intent: String,
    pub stakeholders: String,
    pub phases: Vec<Phase>,
    #[serde(default)]
    pub windows: Vec<TimingWindow>,
    /// Legacy payload compatibility.
    #[serde(default)]
    pub window_masks: Vec<WindowMask>,
    #[serde(default)]
    pub source_rules: Vec<SourceRule>,
    #[serde(default)]
    pub manual_time_blocks: Vec<ManualTimeBlock>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub requirement_rules: Vec<RequirementRule>,
    #[serde(default)]
    pub phase_policy_overrides: Vec<PhasePolicyOverride>,
    #[serde(default)]
    pub timeline_rows: Vec<String>,
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default = "default_autonomy_level")]
    pub autonomy_level: i64,
    #[serde(default = "default_comms_policy")]
    pub comms_policy: String,
    #[serde(default = "default_max_mass_kg")]
    pub max_mass_kg: f64,
    #[serde(default = "default_max_power_w")]
    pub max_power_w: f64,
    #[serde(default = "default_downlink_gb_per_day")]
    pub downlink_gb_per_day: f64,
}

impl ConOpsInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for p in &self.phases {
            p.validate()?;
        }
        for w in &self.windows {
            w.validate()?;
        }
        for m in &self.window_masks {
            m.validate()?;
        }
        for b in &self.manual_time_blocks {
            b.validate()?;
        }
        for a in &self.activities {
            a.validate()?;
        }
        Ok(())
    }
}

fn default_duration() -> f64 {
    1.0
}

fn default_source_type() -> String {
    "ground_contact".to_string()
}

fn default_manual_source_type() -> String {
    "manual".to_string()
}

fn default_template() -> String {
    "base".to_string()
}

fn default_autonomy_level() -> i64 {
    2
}

fn default_comms_policy() -> String {
    "store-and-forward".to_string()
}

fn default_max_mass_kg() -> f64 {
    200.0
}

fn default_max_power_w() -> f64 {
    500.0
}

fn default_downlink_gb_per_day() -> f64 {
    5.0
}
