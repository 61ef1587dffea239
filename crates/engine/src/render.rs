//! Deterministic text rendering of a resolved template.
//!
//! The section headings and dialogue line format below are load-bearing
//! for downstream tooling; change them and every compatibility check
//! breaks. Only dialogue elements reach the script - action and visual
//! cues are structural data for production tooling.

use std::fmt::Write;

use scenecast_domain::{Segment, Template};

/// Render a resolved template into its script text.
///
/// Whitespace-stable and deterministic: the same resolved view always
/// produces byte-identical output. Segment boundaries are cumulative
/// durations, so a 3s/27s/5s template renders `(0-3s)`, `(3-30s)`,
/// `(30-35s)`.
pub fn render(resolved: &Template) -> String {
    // Boundaries accumulate in u64: the validator tolerates duration sums
    // past u32::MAX, so u32 arithmetic here could overflow on accepted input.
    let intro_end = u64::from(resolved.segments.intro.duration_secs);
    let gameplay_end = intro_end + u64::from(resolved.segments.gameplay.duration_secs);
    let conclusion_end = gameplay_end + u64::from(resolved.segments.conclusion.duration_secs);

    let mut script = String::new();
    let _ = writeln!(script, "# Video Script: {}", resolved.name);
    let _ = writeln!(script);
    let _ = writeln!(script, "## Challenge: {}", resolved.challenge.objective);
    let _ = writeln!(script, "**Location:** {}", resolved.environment.location);
    let _ = writeln!(script, "**Participants:** {}", resolved.participants.len());

    push_section(&mut script, "Intro", 0, intro_end, &resolved.segments.intro);
    push_section(
        &mut script,
        "Gameplay",
        intro_end,
        gameplay_end,
        &resolved.segments.gameplay,
    );
    push_section(
        &mut script,
        "Conclusion",
        gameplay_end,
        conclusion_end,
        &resolved.segments.conclusion,
    );

    script
}

fn push_section(script: &mut String, title: &str, start: u64, end: u64, segment: &Segment) {
    let _ = writeln!(script);
    let _ = writeln!(script, "## {title} ({start}-{end}s)");
    for line in segment.dialogue() {
        let _ = writeln!(script, "**{}:** \"{}\"", line.speaker, line.text);
    }
}
