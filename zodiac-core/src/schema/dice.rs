use serde::{Deserialize, Serialize};

use super::CollectionEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceEvent {
    pub dice_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub starts_at: Option<String>,
    #[serde(default)]
    pub starts_at_msk: Option<String>,
    pub enabled: bool,
}

/// Body of `dice/list`: the events are wrapped, unlike the quiz and raffle
/// collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceList {
    pub dice_events: Vec<DiceEvent>,
}

impl From<DiceEvent> for CollectionEntry {
    fn from(event: DiceEvent) -> Self {
        Self {
            key: event.dice_id,
            title: event.title,
            starts_at_msk: event.starts_at_msk,
            enabled: event.enabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceCreate {
    pub dice_id: String,
    pub starts_at_local: String,
    pub title: String,
}

/// Partial update; absent fields are left untouched server-side.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at_local: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::{CollectionEntry, DiceList, DiceUpdate};

    #[test]
    fn update_omits_untouched_fields() {
        let update = DiceUpdate {
            title: Some("Friday dice".into()),
            ..DiceUpdate::default()
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"title":"Friday dice"}"#
        );
    }

    #[test]
    fn list_rows_are_keyed_by_dice_id() {
        let list: DiceList = serde_json::from_str(
            r#"{"dice_events":[{
                "dice_id":"fri-1",
                "title":"Friday dice",
                "starts_at":"2025-01-10T18:00:00+03:00",
                "starts_at_msk":"2025-01-10 18:00",
                "enabled":false
            }]}"#,
        )
        .unwrap();
        let entry = CollectionEntry::from(list.dice_events[0].clone());
        assert_eq!(entry.key, "fri-1");
        assert_eq!(entry.title.as_deref(), Some("Friday dice"));
        assert_eq!(entry.starts_at_msk.as_deref(), Some("2025-01-10 18:00"));
        assert!(!entry.enabled);
    }
}
