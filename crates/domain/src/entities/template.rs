//! Template entity - Immutable, registered scenario definition
//!
//! A template describes a timed, role-structured competitive scenario:
//! who takes part, what they compete over, where it happens, and the
//! second-by-second content of the three fixed segments. Once a template
//! is registered it is never mutated; instances layer partial overrides
//! on top of it at render time.

use serde::{Deserialize, Serialize};

use super::challenge::Challenge;
use super::environment::Environment;
use super::participant::Participant;
use super::segment::Segments;

/// How demanding the scenario is for its players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Production metadata attached to a template.
///
/// `min_participants`/`max_participants` are the authoritative bounds for
/// participant override lists, whatever the template's own cast size is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMetadata {
    /// URL of the source material this template was derived from.
    pub source_reference: String,
    /// Target length of the finished video, in seconds.
    pub total_duration_secs: u32,
    pub difficulty: Difficulty,
    /// Must be at least 1.
    pub min_participants: u32,
    /// Must be >= `min_participants`.
    pub max_participants: u32,
}

/// Which parts of a template callers are invited to customize.
///
/// Purely advisory: editing tools use these to shape their UI, the engine
/// validates override payloads the same way regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationPermissions {
    pub challenge: bool,
    pub participants: bool,
    pub environment: bool,
    pub dialogue: bool,
}

impl CustomizationPermissions {
    /// Everything open for customization.
    pub fn all() -> Self {
        Self {
            challenge: true,
            participants: true,
            environment: true,
            dialogue: true,
        }
    }
}

/// A registered scenario template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Caller-chosen unique slug, e.g. `"find-the-key"`.
    pub id: String,
    /// Display name rendered into the script title.
    pub name: String,
    pub description: String,
    pub metadata: TemplateMetadata,
    pub challenge: Challenge,
    /// Ordered cast. Exactly one member has the gamemaster role.
    pub participants: Vec<Participant>,
    pub environment: Environment,
    pub segments: Segments,
    pub permissions: CustomizationPermissions,
}

impl Template {
    /// Count of participants holding the gamemaster role.
    pub fn gamemaster_count(&self) -> usize {
        self.participants.iter().filter(|p| p.is_gamemaster()).count()
    }
}
