use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateCounts {
    pub in_quiz: u64,
    pub in_raffle: u64,
    pub cross_table: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketStats {
    pub total: u64,
    pub from_quiz: u64,
    pub from_raffle: u64,
    #[serde(default)]
    pub min: Option<i64>,
    #[serde(default)]
    pub max: Option<i64>,
    pub duplicates: DuplicateCounts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateSource {
    Quiz,
    Raffle,
    CrossTable,
}

impl DuplicateSource {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quiz => "quiz",
            Self::Raffle => "raffle",
            Self::CrossTable => "quiz + raffle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateTicket {
    pub ticket_number: i64,
    pub count: u64,
    pub user_ids: Vec<i64>,
    pub source: DuplicateSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateList {
    pub duplicates: Vec<DuplicateTicket>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketSource {
    Quiz,
    Raffle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTicket {
    pub ticket_number: i64,
    pub source: TicketSource,
    pub date: String,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl UserTicket {
    /// Issue time: quiz completion, or the raffle question timestamp.
    #[must_use]
    pub fn issued_at(&self) -> Option<&str> {
        self.completed_at
            .as_deref()
            .or(self.timestamp.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTickets {
    pub user_id: i64,
    pub tickets: Vec<UserTicket>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketHolder {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub registration_status_display: Option<String>,
}

/// One issuance of a ticket number, as returned by `check_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketIssue {
    pub user_id: i64,
    /// Free-form source label from the backend (localized).
    pub source: String,
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    pub time_display: String,
    #[serde(default)]
    pub user: Option<TicketHolder>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstHolder {
    pub user_id: i64,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketCheck {
    pub ticket_number: i64,
    pub tickets: Vec<TicketIssue>,
    #[serde(default)]
    pub first_user: Option<FirstHolder>,
    pub same_time: bool,
}

#[cfg(test)]
mod tests {
    use super::{DuplicateList, DuplicateSource};

    #[test]
    fn duplicate_sources_use_snake_case() {
        let list: DuplicateList = serde_json::from_str(
            r#"{"duplicates":[{"ticket_number":12,"count":2,"user_ids":[1,2],"source":"cross_table"}]}"#,
        )
        .unwrap();
        assert_eq!(list.duplicates[0].source, DuplicateSource::CrossTable);
    }
}
