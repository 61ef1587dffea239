//! Scenecast engine library.
//!
//! Registry/instance lifecycle, overlay merge, and deterministic script
//! rendering for scenario templates.
//!
//! ## Structure
//!
//! - `stores/` - Template registry and instance store (ownership layer)
//! - `resolve` - Overlay merge of a template plus instance overrides
//! - `render` - Deterministic text rendering of a resolved view
//! - `engine` - Public facade composing the above
//! - `fixtures` - Sample template content

pub mod engine;
pub mod fixtures;
pub mod render;
pub mod resolve;
pub mod stores;

/// End-to-end tests driving the full engine facade.
#[cfg(test)]
mod e2e_tests;

pub use engine::ScriptEngine;
pub use render::render;
pub use resolve::resolve;
