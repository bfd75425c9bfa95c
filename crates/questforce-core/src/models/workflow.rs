//! Workflow template model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Duration reported for a workflow created without an estimate.
pub const UNKNOWN_DURATION: &str = "Unknown";

/// A reusable automation template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    /// Opaque identifier issued on creation
    pub id: String,

    /// Name of the template
    pub name: String,

    /// What the workflow automates
    #[serde(default)]
    pub description: String,

    /// Free-form grouping such as "deployment" or "data"
    pub category: String,

    /// Number of steps the template was created with
    pub steps: usize,

    /// Human-readable run time estimate
    pub estimated_duration: String,

    /// Usage score, zero for new templates
    pub popularity: u32,

    /// Timestamp when the workflow was created (UTC)
    pub created_at: Timestamp,
}
