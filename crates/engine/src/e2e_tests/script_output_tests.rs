//! E2E tests for rendered script output and instance isolation.

use std::collections::BTreeMap;

use scenecast_domain::{ChallengeOverride, DialogueLine, InstanceOverrides};

use crate::fixtures::find_the_key;
use crate::ScriptEngine;

fn engine_with_fixture() -> ScriptEngine {
    let engine = ScriptEngine::new();
    engine
        .register_template(find_the_key())
        .expect("registration should succeed");
    engine
}

fn challenge_objective(objective: &str) -> InstanceOverrides {
    InstanceOverrides {
        challenge: Some(ChallengeOverride {
            objective: Some(objective.to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Two instances with different objectives never leak each other's text.
#[test]
fn test_override_isolation_between_instances() {
    let engine = engine_with_fixture();

    let golden = engine
        .create_instance("find-the-key", challenge_objective("Find the golden key"))
        .expect("creates");
    let silver = engine
        .create_instance("find-the-key", challenge_objective("Find the silver key"))
        .expect("creates");

    let golden_script = engine
        .generate_script(&golden.id.to_string())
        .expect("renders");
    let silver_script = engine
        .generate_script(&silver.id.to_string())
        .expect("renders");

    assert!(golden_script.contains("## Challenge: Find the golden key"));
    assert!(!golden_script.contains("silver"));
    assert!(silver_script.contains("## Challenge: Find the silver key"));
    assert!(!silver_script.contains("golden"));
}

/// Customizations that do not touch dialogue leave the segment headings
/// exactly as the base durations dictate.
#[test]
fn test_segment_structure_preserved_under_customization() {
    let engine = engine_with_fixture();
    let instance = engine
        .create_instance("find-the-key", challenge_objective("Find the spare key"))
        .expect("creates");

    let script = engine
        .generate_script(&instance.id.to_string())
        .expect("renders");
    assert!(script.contains("## Intro (0-3s)"));
    assert!(script.contains("## Gameplay (3-30s)"));
    assert!(script.contains("## Conclusion (30-35s)"));
}

/// Overriding intro dialogue yields exactly the override's lines, none of
/// the base template's.
#[test]
fn test_dialogue_replacement_end_to_end() {
    let engine = engine_with_fixture();
    let overrides = InstanceOverrides {
        dialogue: Some(BTreeMap::from([(
            "intro".to_string(),
            vec![DialogueLine::new("Riley", "A completely new cold open.", 0)],
        )])),
        ..Default::default()
    };
    let instance = engine
        .create_instance("find-the-key", overrides)
        .expect("creates");

    let script = engine
        .generate_script(&instance.id.to_string())
        .expect("renders");
    let intro_section = script
        .split("## Gameplay")
        .next()
        .expect("intro section exists");

    assert!(intro_section.contains("**Riley:** \"A completely new cold open.\""));
    assert!(
        !intro_section.contains("Welcome back!"),
        "base intro dialogue must be replaced, not appended to"
    );
    // Untouched segments keep their base dialogue.
    assert!(script.contains("**Sam:** \"I'm checking the bookshelves first.\""));
}

/// An unvalidated render path cannot exist: the participant count in the
/// header always reflects the resolved cast.
#[test]
fn test_participant_count_reflects_override() {
    use scenecast_domain::{Participant, Role};

    let engine = engine_with_fixture();
    let overrides = InstanceOverrides {
        participants: Some(vec![
            Participant::new("gm", Role::Gamemaster, "Jordan"),
            Participant::new("a", Role::Player, "Ash"),
            Participant::new("b", Role::Player, "Blair"),
            Participant::new("c", Role::Player, "Casey"),
            Participant::new("d", Role::Player, "Devon"),
        ]),
        ..Default::default()
    };
    let instance = engine
        .create_instance("find-the-key", overrides)
        .expect("creates");

    let script = engine
        .generate_script(&instance.id.to_string())
        .expect("renders");
    assert!(script.contains("**Participants:** 5"));
}
