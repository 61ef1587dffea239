//! End-to-end engine tests.
//!
//! These drive the public `ScriptEngine` facade only, the way an
//! embedding application would:
//! - Template registration and lookup
//! - Instance creation, deletion, and listing
//! - Customization validation verdicts
//! - Script generation output and isolation guarantees

mod script_output_tests;
