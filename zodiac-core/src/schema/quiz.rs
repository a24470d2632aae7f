use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizMeta {
    pub quiz_date: String,
    #[serde(default)]
    pub title: Option<String>,
    /// ISO timestamp with offset, as stored.
    #[serde(default)]
    pub starts_at: Option<String>,
    /// `YYYY-MM-DDTHH:MM` in Moscow time, ready for a datetime-local input.
    #[serde(default)]
    pub starts_at_msk: Option<String>,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizStats {
    pub quiz_date: String,
    pub total_participants: u64,
    pub with_tickets: u64,
    pub no_tickets: u64,
    pub non_participants: u64,
}

/// Options are a keyed object (`{"1": "...", "2": "..."}`); arrays are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: String,
    pub options: BTreeMap<String, String>,
    pub correct_answer: String,
}

impl QuizQuestion {
    /// Options in presentation order: numeric keys numerically, then the rest.
    #[must_use]
    pub fn ordered_options(&self) -> Vec<(&str, &str)> {
        let mut options: Vec<(&str, &str)> = self
            .options
            .iter()
            .map(|(key, text)| (key.as_str(), text.as_str()))
            .collect();
        options.sort_by(|(a, _), (b, _)| option_order(a).cmp(&option_order(b)));
        options
    }
}

fn option_order(key: &str) -> (u8, u64, &str) {
    key.parse::<u64>()
        .map_or((1, 0, key), |number| (0, number, key))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestions {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestionPayload {
    pub question: String,
    pub options: BTreeMap<String, String>,
    pub correct_answer: String,
}
