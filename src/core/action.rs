//! The closed set of session actions.

use super::cache::CacheEntry;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An intent to change the session state.
///
/// Actions serialize adjacently tagged, e.g. `{"type": "LEVEL_UP"}` or
/// `{"type": "SELECT_ENTITY", "payload": {...}}`. A tag this version does not
/// know decodes to [`Action::Unrecognized`] whatever its payload, and the
/// reducer ignores it.
///
/// # Example
///
/// ```rust
/// use dexstore::core::Action;
///
/// let action: Action = serde_json::from_str(r#"{"type": "LEVEL_UP"}"#).unwrap();
/// assert_eq!(action, Action::LevelUp);
///
/// let future: Action =
///     serde_json::from_str(r#"{"type": "EVOLVE", "payload": {"into": "raichu"}}"#).unwrap();
/// assert_eq!(future, Action::Unrecognized);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Increment the level of the current selection
    LevelUp,

    /// Make a resolved entity current, cache it and reset the level
    SelectEntity(CacheEntry),

    /// Forget every cached entity
    ClearCache,

    /// Any action this version does not understand
    Unrecognized,
}

/// Wire form of an action before its tag is interpreted.
#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    tag: String,
    #[serde(default)]
    payload: Option<serde_json::Value>,
}

impl TryFrom<RawAction> for Action {
    type Error = String;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        match raw.tag.as_str() {
            "LEVEL_UP" => Ok(Self::LevelUp),
            "CLEAR_CACHE" => Ok(Self::ClearCache),
            "SELECT_ENTITY" => {
                let payload = raw
                    .payload
                    .ok_or_else(|| "SELECT_ENTITY requires a payload".to_string())?;
                serde_json::from_value(payload)
                    .map(Self::SelectEntity)
                    .map_err(|error| format!("invalid SELECT_ENTITY payload: {error}"))
            }
            _ => Ok(Self::Unrecognized),
        }
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawAction::deserialize(deserializer)?;
        Self::try_from(raw).map_err(D::Error::custom)
    }
}

impl Action {
    /// Stable name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LevelUp => "LevelUp",
            Self::SelectEntity(_) => "SelectEntity",
            Self::ClearCache => "ClearCache",
            Self::Unrecognized => "Unrecognized",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Entity;
    use chrono::Utc;

    #[test]
    fn unit_actions_serialize_with_tag_only() {
        let json = serde_json::to_value(Action::LevelUp).unwrap();
        assert_eq!(json["type"], "LEVEL_UP");

        let json = serde_json::to_value(Action::ClearCache).unwrap();
        assert_eq!(json["type"], "CLEAR_CACHE");
    }

    #[test]
    fn select_entity_roundtrips_payload() {
        let action = Action::SelectEntity(CacheEntry::new(Entity::new("eevee"), Utc::now()));

        let json = serde_json::to_string(&action).unwrap();
        assert!(json.contains("\"SELECT_ENTITY\""));

        let decoded: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, action);
    }

    #[test]
    fn unknown_tag_decodes_to_unrecognized() {
        let action: Action = serde_json::from_str(r#"{"type": "SEARCH_POKEMON"}"#).unwrap();
        assert_eq!(action, Action::Unrecognized);
    }

    #[test]
    fn unknown_tag_with_payload_decodes_to_unrecognized() {
        let action: Action = serde_json::from_str(
            r#"{"type": "SEARCH_POKEMON", "payload": {"pokemon": {"name": "x"}}}"#,
        )
        .unwrap();
        assert_eq!(action, Action::Unrecognized);

        let action: Action =
            serde_json::from_str(r#"{"payload": [1, 2, 3], "type": "EVOLVE"}"#).unwrap();
        assert_eq!(action, Action::Unrecognized);
    }

    #[test]
    fn select_entity_requires_valid_payload() {
        assert!(serde_json::from_str::<Action>(r#"{"type": "SELECT_ENTITY"}"#).is_err());
        assert!(
            serde_json::from_str::<Action>(r#"{"type": "SELECT_ENTITY", "payload": 7}"#).is_err()
        );
    }

    #[test]
    fn missing_tag_is_an_error() {
        assert!(serde_json::from_str::<Action>(r#"{"payload": {}}"#).is_err());
    }

    #[test]
    fn names_are_stable() {
        assert_eq!(Action::LevelUp.name(), "LevelUp");
        assert_eq!(Action::ClearCache.name(), "ClearCache");
        assert_eq!(Action::Unrecognized.name(), "Unrecognized");
    }
}
