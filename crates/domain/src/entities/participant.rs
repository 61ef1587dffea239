//! Participant entity - A named, role-bearing member of a scenario
//!
//! Every template carries an ordered participant list with exactly one
//! gamemaster; override payloads may substitute the whole list (never
//! individual members), so a participant set is always validated as a
//! complete, self-consistent unit.

use serde::{Deserialize, Serialize};

/// Role a participant plays in the scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    /// The single privileged participant who runs the scenario.
    Gamemaster,
    /// A competing participant.
    Player,
}

/// A participant in a scenario template or override set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Unique within one template or one override list.
    pub id: String,
    pub role: Role,
    /// Display name used by the renderer and editing tools.
    pub name: String,
    /// Optional equipment carried into the scenario.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Vec<String>>,
}

impl Participant {
    /// Create a participant with no equipment.
    pub fn new(id: impl Into<String>, role: Role, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role,
            name: name.into(),
            equipment: None,
        }
    }

    /// Builder-style equipment assignment.
    pub fn with_equipment(mut self, equipment: Vec<String>) -> Self {
        self.equipment = Some(equipment);
        self
    }

    pub fn is_gamemaster(&self) -> bool {
        self.role == Role::Gamemaster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamemaster_check() {
        let gm = Participant::new("gm", Role::Gamemaster, "Riley");
        let player = Participant::new("p1", Role::Player, "Sam");
        assert!(gm.is_gamemaster());
        assert!(!player.is_gamemaster());
    }

    #[test]
    fn test_serde_uses_camel_case_role() {
        let gm = Participant::new("gm", Role::Gamemaster, "Riley");
        let json = serde_json::to_value(&gm).expect("serializes");
        assert_eq!(json["role"], "gamemaster");
        assert!(json.get("equipment").is_none());
    }
}
