//! Segment entity - One of the three fixed time windows of a scenario
//!
//! Every template has exactly three named segments (`intro`, `gameplay`,
//! `conclusion`), each holding an ordered sequence of content elements.
//! Only dialogue elements reach the rendered script; action and visual
//! elements are structural data for production tooling.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Key naming one of the three segments.
///
/// Dialogue override maps are keyed by caller-supplied strings so that
/// unknown keys stay representable (and reportable by the validator);
/// [`SegmentKey::parse`] is the bridge from that string space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SegmentKey {
    Intro,
    Gameplay,
    Conclusion,
}

impl SegmentKey {
    pub const ALL: [SegmentKey; 3] = [Self::Intro, Self::Gameplay, Self::Conclusion];

    /// Parse a caller-supplied segment name.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "intro" => Some(Self::Intro),
            "gameplay" => Some(Self::Gameplay),
            "conclusion" => Some(Self::Conclusion),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Gameplay => "gameplay",
            Self::Conclusion => "conclusion",
        }
    }
}

impl fmt::Display for SegmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A spoken line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueLine {
    pub speaker: String,
    pub text: String,
    /// Offset from the start of the owning segment, in seconds.
    pub offset_secs: u32,
    /// Advisory flag for editing tools; the engine never enforces it.
    #[serde(default)]
    pub customizable: bool,
}

impl DialogueLine {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>, offset_secs: u32) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            offset_secs,
            customizable: false,
        }
    }

    pub fn customizable(mut self) -> Self {
        self.customizable = true;
        self
    }
}

/// A physical action cue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionCue {
    pub description: String,
    pub offset_secs: u32,
    #[serde(default)]
    pub customizable: bool,
}

impl ActionCue {
    pub fn new(description: impl Into<String>, offset_secs: u32) -> Self {
        Self {
            description: description.into(),
            offset_secs,
            customizable: false,
        }
    }
}

/// A camera/graphics cue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualCue {
    pub description: String,
    pub offset_secs: u32,
    #[serde(default)]
    pub customizable: bool,
}

impl VisualCue {
    pub fn new(description: impl Into<String>, offset_secs: u32) -> Self {
        Self {
            description: description.into(),
            offset_secs,
            customizable: false,
        }
    }
}

/// One element of a segment's ordered content sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentElement {
    Dialogue(DialogueLine),
    Action(ActionCue),
    Visual(VisualCue),
}

impl ContentElement {
    pub fn as_dialogue(&self) -> Option<&DialogueLine> {
        match self {
            Self::Dialogue(line) => Some(line),
            _ => None,
        }
    }
}

/// A timed window within the scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Offset of this segment from the start of the video, in seconds.
    pub start_offset_secs: u32,
    /// Must be positive; the three durations must sum to within
    /// [`SEGMENT_TOLERANCE_SECS`](crate::validation::SEGMENT_TOLERANCE_SECS)
    /// of the template's total duration.
    pub duration_secs: u32,
    /// Ordered content; ordering is meaningful and preserved verbatim.
    pub content: Vec<ContentElement>,
}

impl Segment {
    pub fn new(start_offset_secs: u32, duration_secs: u32) -> Self {
        Self {
            start_offset_secs,
            duration_secs,
            content: Vec::new(),
        }
    }

    pub fn with_content(mut self, content: Vec<ContentElement>) -> Self {
        self.content = content;
        self
    }

    /// Dialogue elements in input order.
    pub fn dialogue(&self) -> impl Iterator<Item = &DialogueLine> {
        self.content.iter().filter_map(ContentElement::as_dialogue)
    }
}

/// The three fixed segments of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segments {
    pub intro: Segment,
    pub gameplay: Segment,
    pub conclusion: Segment,
}

impl Segments {
    pub fn get(&self, key: SegmentKey) -> &Segment {
        match key {
            SegmentKey::Intro => &self.intro,
            SegmentKey::Gameplay => &self.gameplay,
            SegmentKey::Conclusion => &self.conclusion,
        }
    }

    pub fn get_mut(&mut self, key: SegmentKey) -> &mut Segment {
        match key {
            SegmentKey::Intro => &mut self.intro,
            SegmentKey::Gameplay => &mut self.gameplay,
            SegmentKey::Conclusion => &mut self.conclusion,
        }
    }

    /// Segments paired with their keys, in timeline order.
    pub fn iter(&self) -> impl Iterator<Item = (SegmentKey, &Segment)> {
        SegmentKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    /// Sum of the three segment durations.
    pub fn total_duration_secs(&self) -> u64 {
        u64::from(self.intro.duration_secs)
            + u64::from(self.gameplay.duration_secs)
            + u64::from(self.conclusion.duration_secs)
    }
}
