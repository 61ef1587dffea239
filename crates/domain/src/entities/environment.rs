//! Environment entity - Where the scenario takes place

use serde::{Deserialize, Serialize};

/// Physical setting for a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    /// Location name rendered into the script header.
    pub location: String,
    /// Props available on set.
    pub props: Vec<String>,
    /// Constraints the production must respect (lighting, bounds, safety).
    pub constraints: Vec<String>,
}

/// Partial environment override; merge semantics match
/// [`ChallengeOverride`](crate::ChallengeOverride).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvironmentOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<String>>,
}

impl EnvironmentOverride {
    pub fn is_empty(&self) -> bool {
        self.location.is_none() && self.props.is_none() && self.constraints.is_none()
    }
}
