use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ConOpsInput;

/// A saved ConOps project.
///
/// Projects are append-only snapshots: the serialized input is written once
/// at save time and never mutated or deleted through this service. `data`
/// holds the [`ConOpsInput`] as JSON text exactly as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredProject {
    pub id: i64,
    pub name: String,
    pub data: String,
    pub created_at: DateTime<Utc>,
}

/// Listing row for saved projects; omits the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Input for saving a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveProjectRequest {
    pub name: String,
    pub spec: ConOpsInput,
}
