//! Participant-facing preview of a quiz or raffle, built from read endpoints.

use crate::api::AdminApi;
use crate::error::ApiError;
use crate::http::Transport;
use crate::resources::ResourceKind;
use crate::schema::{QuizMeta, QuizQuestions, RaffleMeta, RaffleQuestions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOption {
    /// The option's own key (`"1"`, `"2"`, ...).
    pub marker: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewCard {
    /// `"Question 2 of 5"`.
    pub heading: String,
    pub title: Option<String>,
    pub body: String,
    pub options: Vec<PreviewOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    pub kind: ResourceKind,
    pub key: String,
    pub title: String,
    pub starts_at: Option<String>,
    pub cards: Vec<PreviewCard>,
}

fn heading(index: usize, total: usize) -> String {
    format!("Question {} of {total}", index + 1)
}

fn display_title(kind: ResourceKind, key: &str, title: Option<String>) -> String {
    title
        .filter(|title| !title.trim().is_empty())
        .unwrap_or_else(|| format!("{} {key}", kind.label()))
}

/// Quiz as participants see it. The correct answer is not revealed.
#[must_use]
pub fn quiz_preview(meta: QuizMeta, questions: &QuizQuestions) -> PreviewView {
    let total = questions.questions.len();
    let cards = questions
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| PreviewCard {
            heading: heading(index, total),
            title: None,
            body: question.question.clone(),
            options: question
                .ordered_options()
                .into_iter()
                .map(|(key, text)| PreviewOption {
                    marker: key.to_string(),
                    text: text.to_string(),
                })
                .collect(),
        })
        .collect();
    PreviewView {
        kind: ResourceKind::Quiz,
        title: display_title(ResourceKind::Quiz, &meta.quiz_date, meta.title),
        key: meta.quiz_date,
        starts_at: meta.starts_at_msk,
        cards,
    }
}

#[must_use]
pub fn raffle_preview(meta: RaffleMeta, questions: &RaffleQuestions) -> PreviewView {
    let total = questions.questions.len();
    let cards = questions
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| PreviewCard {
            heading: heading(index, total),
            title: Some(question.title.clone()),
            body: question.text.clone(),
            options: Vec::new(),
        })
        .collect();
    PreviewView {
        kind: ResourceKind::Raffle,
        title: display_title(ResourceKind::Raffle, &meta.raffle_date, meta.title),
        key: meta.raffle_date,
        starts_at: meta.starts_at_msk,
        cards,
    }
}

/// # Errors
///
/// Fails with the first error of the concurrent reads.
pub async fn load_quiz_preview<T: Transport>(
    api: &AdminApi<T>,
    date: &str,
) -> Result<PreviewView, ApiError> {
    let (meta, questions) = futures::try_join!(api.quiz_meta(date), api.quiz_questions(date))?;
    Ok(quiz_preview(meta, &questions))
}

/// # Errors
///
/// Fails with the first error of the concurrent reads.
pub async fn load_raffle_preview<T: Transport>(
    api: &AdminApi<T>,
    date: &str,
) -> Result<PreviewView, ApiError> {
    let (meta, questions) =
        futures::try_join!(api.raffle_meta(date), api.raffle_questions(date))?;
    Ok(raffle_preview(meta, &questions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{QuizQuestion, RaffleQuestion};
    use std::collections::BTreeMap;

    #[test]
    fn quiz_options_are_labelled_by_key_in_numeric_order() {
        let meta = QuizMeta {
            quiz_date: "2025-01-10".into(),
            title: Some("New Year Quiz".into()),
            starts_at: None,
            starts_at_msk: Some("2025-01-10T12:00".into()),
            enabled: true,
        };
        let options: BTreeMap<String, String> = [("10", "Ten"), ("2", "Two"), ("1", "One")]
            .into_iter()
            .map(|(key, text)| (key.to_string(), text.to_string()))
            .collect();
        let questions = QuizQuestions {
            questions: vec![QuizQuestion {
                id: 1,
                question: "Pick one".into(),
                options,
                correct_answer: "2".into(),
            }],
        };
        let view = quiz_preview(meta, &questions);
        assert_eq!(view.title, "New Year Quiz");
        let card = &view.cards[0];
        assert_eq!(card.heading, "Question 1 of 1");
        let markers: Vec<&str> = card.options.iter().map(|o| o.marker.as_str()).collect();
        assert_eq!(markers, ["1", "2", "10"]);
        assert_eq!(card.options[2].text, "Ten");
    }

    #[test]
    fn untitled_raffle_preview_falls_back_to_date() {
        let meta = RaffleMeta {
            raffle_date: "2025-03-01".into(),
            title: None,
            starts_at: None,
            starts_at_msk: None,
            enabled: true,
        };
        let questions = RaffleQuestions {
            questions: vec![
                RaffleQuestion {
                    id: 1,
                    title: "Warm-up".into(),
                    text: "Your sign?".into(),
                },
                RaffleQuestion {
                    id: 2,
                    title: "Main".into(),
                    text: "Lucky number?".into(),
                },
            ],
        };
        let view = raffle_preview(meta, &questions);
        assert_eq!(view.title, "Raffle 2025-03-01");
        assert_eq!(view.cards[1].heading, "Question 2 of 2");
        assert_eq!(view.cards[1].title.as_deref(), Some("Main"));
    }
}
