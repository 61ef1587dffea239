//! Scenecast domain layer.
//!
//! Data model, identifiers, unified error type, and pure validation for
//! the template/instance script engine. This crate has no interior
//! mutability and performs no I/O; ownership of registered templates and
//! created instances lives in `scenecast-engine`.

extern crate self as scenecast_domain;

pub mod entities;
pub mod error;
pub mod ids;
pub mod validation;

pub use entities::{
    ActionCue, Challenge, ChallengeOverride, ContentElement, CustomizationPermissions,
    DialogueLine, Difficulty, Environment, EnvironmentOverride, Instance, InstanceOverrides,
    Participant, Role, Segment, SegmentKey, Segments, Template, TemplateMetadata, VisualCue,
};
pub use error::DomainError;
pub use ids::InstanceId;
