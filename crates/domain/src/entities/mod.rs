//! Domain entities: the template/instance data model.
//!
//! These types are deliberately behavior-free; invariants live in
//! [`crate::validation`] and merging lives in the engine crate.

mod challenge;
mod environment;
mod instance;
mod participant;
mod segment;
mod template;

pub use challenge::{Challenge, ChallengeOverride};
pub use environment::{Environment, EnvironmentOverride};
pub use instance::{Instance, InstanceOverrides};
pub use participant::{Participant, Role};
pub use segment::{
    ActionCue, ContentElement, DialogueLine, Segment, SegmentKey, Segments, VisualCue,
};
pub use template::{CustomizationPermissions, Difficulty, Template, TemplateMetadata};
