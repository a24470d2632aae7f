use serde::{Deserialize, Serialize};

/// One row of a toggleable collection (quiz, raffle, dice lists).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub key: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Start time already formatted by the backend in Moscow time.
    #[serde(default)]
    pub starts_at_msk: Option<String>,
    pub enabled: bool,
}

/// Acknowledgement returned by every mutating endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationAck {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// Key of the resource the mutation produced (create, duplicate).
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub scheduled: Option<bool>,
    #[serde(default)]
    pub rescheduled: Option<bool>,
}

const fn default_success() -> bool {
    true
}

impl MutationAck {
    /// Whether the backend reported touching the scheduler, when it said so.
    #[must_use]
    pub fn scheduler_updated(&self) -> Option<bool> {
        self.scheduled.or(self.rescheduled)
    }
}

#[cfg(test)]
mod tests {
    use super::{CollectionEntry, MutationAck};

    #[test]
    fn collection_entry_requires_enabled_flag() {
        let ok: CollectionEntry =
            serde_json::from_str(r#"{"key":"2025-01-10","title":"New Year Quiz","enabled":true}"#)
                .unwrap();
        assert_eq!(ok.title.as_deref(), Some("New Year Quiz"));
        assert!(serde_json::from_str::<CollectionEntry>(r#"{"key":"2025-01-10"}"#).is_err());
    }

    #[test]
    fn ack_scheduler_flag_prefers_scheduled() {
        let ack: MutationAck =
            serde_json::from_str(r#"{"key":"2025-02-01","scheduled":true}"#).unwrap();
        assert!(ack.success);
        assert_eq!(ack.scheduler_updated(), Some(true));
        let ack: MutationAck = serde_json::from_str(r#"{"rescheduled":false}"#).unwrap();
        assert_eq!(ack.scheduler_updated(), Some(false));
    }
}
