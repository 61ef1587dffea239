//! Sample template content.
//!
//! The "find the key" template is the reference scenario used by doc
//! examples and tests: a 35-second hidden-key hunt with one gamemaster
//! and two players, customizable end to end.

use scenecast_domain::{
    ActionCue, Challenge, ContentElement, CustomizationPermissions, DialogueLine, Difficulty,
    Environment, Participant, Role, Segment, Segments, Template, TemplateMetadata, VisualCue,
};

/// Build the "find the key" reference template.
///
/// Segments run 3s/27s/5s against a 35-second total; participant bounds
/// are 3..=8.
pub fn find_the_key() -> Template {
    Template {
        id: "find-the-key".to_string(),
        name: "Find the Key".to_string(),
        description: "Two players race the clock to find a key hidden by the gamemaster."
            .to_string(),
        metadata: TemplateMetadata {
            source_reference: "https://example.com/videos/find-the-key".to_string(),
            total_duration_secs: 35,
            difficulty: Difficulty::Medium,
            min_participants: 3,
            max_participants: 8,
        },
        challenge: Challenge {
            objective: "Find the hidden key before time runs out".to_string(),
            target_objects: vec!["brass key".to_string()],
            rules: vec![
                "no phones or flashlights".to_string(),
                "stay inside the marked area".to_string(),
            ],
            success_condition: "a player holds the key when the timer ends".to_string(),
            failure_consequence: "the gamemaster keeps the prize pool".to_string(),
        },
        participants: vec![
            Participant::new("gm", Role::Gamemaster, "Riley")
                .with_equipment(vec!["timer".to_string(), "whistle".to_string()]),
            Participant::new("p1", Role::Player, "Sam"),
            Participant::new("p2", Role::Player, "Alex"),
        ],
        environment: Environment {
            location: "Abandoned library reading room".to_string(),
            props: vec![
                "bookshelves".to_string(),
                "writing desk".to_string(),
                "grandfather clock".to_string(),
            ],
            constraints: vec![
                "ground floor only".to_string(),
                "nothing gets broken".to_string(),
            ],
        },
        segments: Segments {
            intro: Segment::new(0, 3).with_content(vec![
                ContentElement::Visual(VisualCue::new("title card", 0)),
                ContentElement::Dialogue(
                    DialogueLine::new(
                        "Riley",
                        "Welcome back! Today two players race to find a hidden key.",
                        1,
                    )
                    .customizable(),
                ),
            ]),
            gameplay: Segment::new(3, 27).with_content(vec![
                ContentElement::Dialogue(
                    DialogueLine::new("Riley", "The key is somewhere in this room. Go!", 0)
                        .customizable(),
                ),
                ContentElement::Action(ActionCue::new("players scatter", 2)),
                ContentElement::Dialogue(DialogueLine::new(
                    "Sam",
                    "I'm checking the bookshelves first.",
                    6,
                )),
                ContentElement::Visual(VisualCue::new("close-up on the clock face", 12)),
                ContentElement::Dialogue(DialogueLine::new("Alex", "The desk drawers are mine.", 14)),
            ]),
            conclusion: Segment::new(30, 5).with_content(vec![
                ContentElement::Dialogue(
                    DialogueLine::new("Riley", "And that's the game! See you next time.", 1)
                        .customizable(),
                ),
                ContentElement::Visual(VisualCue::new("outro card", 4)),
            ]),
        },
        permissions: CustomizationPermissions::all(),
    }
}

#[cfg(test)]
mod tests {
    use scenecast_domain::validation::validate_template;

    use super::*;

    #[test]
    fn test_fixture_passes_template_validation() {
        validate_template(&find_the_key()).expect("fixture is well-formed");
    }

    #[test]
    fn test_fixture_has_exactly_one_gamemaster() {
        assert_eq!(find_the_key().gamemaster_count(), 1);
    }
}
