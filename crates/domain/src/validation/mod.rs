//! Pure validation functions for templates and customization payloads.
//!
//! Both validators inspect their input in a single pass and accumulate
//! every violation as a human-readable issue string; callers get the
//! whole list in one error instead of one round-trip per problem.

mod customization;
mod input;
mod template;

pub use customization::{customization_issues, validate_customizations};
pub use input::require_non_blank;
pub use template::{template_issues, validate_template, SEGMENT_TOLERANCE_SECS};
