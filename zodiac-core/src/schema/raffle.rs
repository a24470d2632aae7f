use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaffleMeta {
    pub raffle_date: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub starts_at: Option<String>,
    #[serde(default)]
    pub starts_at_msk: Option<String>,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaffleStats {
    pub raffle_date: String,
    pub total_participants: u64,
    pub approved: u64,
    pub denied: u64,
    pub unchecked: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaffleQuestion {
    pub id: u32,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaffleQuestions {
    pub questions: Vec<RaffleQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaffleQuestionPayload {
    pub title: String,
    pub text: String,
}

/// A participant answer still waiting for moderation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UncheckedAnswer {
    pub user_id: i64,
    pub question_id: u32,
    pub question_text: String,
    pub answer: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UncheckedPage {
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
    pub unchecked: Vec<UncheckedAnswer>,
}
