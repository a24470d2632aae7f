//! Modal forms: construction, local validation, and the modal stack.
//!
//! Validation runs before any request is built. A form that fails validation
//! stays open with the offending field marked and nothing is sent.

use crate::error::ValidationError;
use crate::resources::ResourceKind;
use crate::schema::{
    DiceCreate, DiceUpdate, DuplicateRequest, QuizQuestion, QuizQuestionPayload, RaffleQuestion,
    RaffleQuestionPayload, ScheduleMeta,
};
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Format of a `datetime-local` input value.
pub const LOCAL_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Option slots offered when a quiz question is created from scratch.
pub const DEFAULT_OPTION_KEYS: [&str; 4] = ["1", "2", "3", "4"];

static LOCAL_DATETIME: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}$").ok());
static DICE_ID: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").ok());

const OPTION_PREFIX: &str = "option_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalId {
    QuizQuestion,
    RaffleQuestion,
    EditMeta,
    CreateResource,
    Duplicate,
}

impl ModalId {
    #[must_use]
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::QuizQuestion => "quiz-question-modal",
            Self::RaffleQuestion => "raffle-question-modal",
            Self::EditMeta => "edit-meta-modal",
            Self::CreateResource => "create-resource-modal",
            Self::Duplicate => "duplicate-modal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    DateTimeLocal,
    Select,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub value: String,
    /// Allowed values of a select.
    pub choices: Vec<String>,
    pub error: Option<String>,
}

impl FormField {
    fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            value: String::new(),
            choices: Vec::new(),
            error: None,
        }
    }

    fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

/// What a submitted form turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    AddQuizQuestion { quiz_date: String },
    EditQuizQuestion { quiz_date: String, question_id: u32 },
    AddRaffleQuestion { raffle_date: String },
    EditRaffleQuestion { raffle_date: String, question_id: u32 },
    EditMeta { kind: ResourceKind, key: String },
    Create { kind: ResourceKind },
    Duplicate { kind: ResourceKind, source_key: String },
}

/// Validated request body, ready for the API layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPayload {
    QuizQuestion(QuizQuestionPayload),
    RaffleQuestion(RaffleQuestionPayload),
    Schedule(ScheduleMeta),
    DiceCreate(DiceCreate),
    DiceUpdate(DiceUpdate),
    Duplicate(DuplicateRequest),
}

impl FormPayload {
    /// Key of the resource a create or duplicate will produce.
    #[must_use]
    pub fn target_key(&self) -> Option<String> {
        match self {
            Self::Schedule(meta) => date_part(&meta.starts_at_local),
            Self::Duplicate(request) => date_part(&request.starts_at_local),
            Self::DiceCreate(create) => Some(create.dice_id.clone()),
            Self::QuizQuestion(_) | Self::RaffleQuestion(_) | Self::DiceUpdate(_) => None,
        }
    }
}

fn date_part(local: &str) -> Option<String> {
    local.split_once('T').map(|(date, _)| date.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalForm {
    pub id: ModalId,
    pub title: String,
    pub intent: FormIntent,
    pub fields: Vec<FormField>,
    /// Backend error from the last submit attempt.
    pub error: Option<String>,
}

impl ModalForm {
    fn new(
        id: ModalId,
        title: impl Into<String>,
        intent: FormIntent,
        fields: Vec<FormField>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            intent,
            fields,
            error: None,
        }
    }

    /// Add (`existing == None`) or edit a quiz question. Option slots follow
    /// the existing question's keys, or `1..=4` for a new one.
    #[must_use]
    pub fn quiz_question(quiz_date: &str, existing: Option<&QuizQuestion>) -> Self {
        let options: Vec<(String, String)> = existing.map_or_else(
            || {
                DEFAULT_OPTION_KEYS
                    .iter()
                    .map(|key| ((*key).to_string(), String::new()))
                    .collect()
            },
            |question| {
                question
                    .ordered_options()
                    .into_iter()
                    .map(|(key, text)| (key.to_string(), text.to_string()))
                    .collect()
            },
        );
        let keys: Vec<String> = options.iter().map(|(key, _)| key.clone()).collect();
        let mut fields = vec![
            FormField::new("question", "Question", FieldKind::TextArea)
                .with_value(existing.map(|q| q.question.clone()).unwrap_or_default()),
        ];
        fields.extend(options.into_iter().map(|(key, text)| {
            FormField::new(
                format!("{OPTION_PREFIX}{key}"),
                format!("Option {key}"),
                FieldKind::Text,
            )
            .with_value(text)
        }));
        let mut answer = FormField::new("correct_answer", "Correct answer", FieldKind::Select)
            .with_value(
                existing
                    .map(|q| q.correct_answer.clone())
                    .or_else(|| keys.first().cloned())
                    .unwrap_or_default(),
            );
        answer.choices = keys;
        fields.push(answer);

        let (title, intent) = match existing {
            Some(question) => (
                format!("Edit question #{}", question.id),
                FormIntent::EditQuizQuestion {
                    quiz_date: quiz_date.to_string(),
                    question_id: question.id,
                },
            ),
            None => (
                "Add question".to_string(),
                FormIntent::AddQuizQuestion {
                    quiz_date: quiz_date.to_string(),
                },
            ),
        };
        Self::new(ModalId::QuizQuestion, title, intent, fields)
    }

    #[must_use]
    pub fn raffle_question(raffle_date: &str, existing: Option<&RaffleQuestion>) -> Self {
        let fields = vec![
            FormField::new("title", "Title", FieldKind::Text)
                .with_value(existing.map(|q| q.title.clone()).unwrap_or_default()),
            FormField::new("text", "Question text", FieldKind::TextArea)
                .with_value(existing.map(|q| q.text.clone()).unwrap_or_default()),
        ];
        let (title, intent) = match existing {
            Some(question) => (
                format!("Edit question #{}", question.id),
                FormIntent::EditRaffleQuestion {
                    raffle_date: raffle_date.to_string(),
                    question_id: question.id,
                },
            ),
            None => (
                "Add question".to_string(),
                FormIntent::AddRaffleQuestion {
                    raffle_date: raffle_date.to_string(),
                },
            ),
        };
        Self::new(ModalId::RaffleQuestion, title, intent, fields)
    }

    /// Edit title and start time of a quiz, raffle or dice event.
    #[must_use]
    pub fn edit_meta(
        kind: ResourceKind,
        key: &str,
        title: Option<&str>,
        starts_at_local: Option<&str>,
    ) -> Self {
        Self::new(
            ModalId::EditMeta,
            format!("Edit {} {key}", kind.label()),
            FormIntent::EditMeta {
                kind,
                key: key.to_string(),
            },
            schedule_fields(title.unwrap_or_default(), starts_at_local.unwrap_or_default()),
        )
    }

    /// New quiz, raffle or dice event. Dice events also ask for their id.
    #[must_use]
    pub fn create(kind: ResourceKind) -> Self {
        let mut fields = Vec::new();
        if kind == ResourceKind::Dice {
            fields.push(FormField::new("dice_id", "Dice id", FieldKind::Text));
        }
        fields.extend(schedule_fields("", ""));
        Self::new(
            ModalId::CreateResource,
            format!("New {}", kind.label()),
            FormIntent::Create { kind },
            fields,
        )
    }

    #[must_use]
    pub fn duplicate(kind: ResourceKind, source_key: &str, title: Option<&str>) -> Self {
        Self::new(
            ModalId::Duplicate,
            format!("Duplicate {} {source_key}", kind.label()),
            FormIntent::Duplicate {
                kind,
                source_key: source_key.to_string(),
            },
            schedule_fields(title.unwrap_or_default(), ""),
        )
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }

    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.field(name).map(|field| field.value.as_str())
    }

    /// Update one field and clear its error. Returns `false` for unknown names.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|field| field.name == name) {
            Some(field) => {
                field.value = value.into();
                field.error = None;
                true
            }
            None => false,
        }
    }

    /// Mark the field named by `error`, clearing marks on every other field.
    pub fn apply_validation_error(&mut self, error: &ValidationError) {
        for field in &mut self.fields {
            field.error = (field.name == error.field).then(|| error.message.clone());
        }
    }

    /// Check every field and build the request body.
    ///
    /// # Errors
    ///
    /// Returns the first failing field: an empty required value, an empty
    /// option slot, a correct answer that is not an option key, a malformed
    /// or impossible start time, or an invalid dice id.
    pub fn validate(&self) -> Result<FormPayload, ValidationError> {
        match &self.intent {
            FormIntent::AddQuizQuestion { .. } | FormIntent::EditQuizQuestion { .. } => {
                self.quiz_payload().map(FormPayload::QuizQuestion)
            }
            FormIntent::AddRaffleQuestion { .. } | FormIntent::EditRaffleQuestion { .. } => {
                Ok(FormPayload::RaffleQuestion(RaffleQuestionPayload {
                    title: self.required("title")?,
                    text: self.required("text")?,
                }))
            }
            FormIntent::EditMeta { kind, key } => {
                let meta = self.schedule()?;
                if *kind == ResourceKind::Dice {
                    return Ok(FormPayload::DiceUpdate(DiceUpdate {
                        starts_at_local: Some(meta.starts_at_local),
                        title: Some(meta.title),
                        enabled: None,
                    }));
                }
                if date_part(&meta.starts_at_local).as_deref() != Some(key.as_str()) {
                    return Err(ValidationError::new(
                        "starts_at_local",
                        format!("Start date must stay on {key}; use Duplicate to move it"),
                    ));
                }
                Ok(FormPayload::Schedule(meta))
            }
            FormIntent::Create { kind } => {
                if *kind == ResourceKind::Dice {
                    let dice_id = self.required("dice_id")?;
                    if !DICE_ID.as_ref().is_some_and(|re| re.is_match(&dice_id)) {
                        return Err(ValidationError::new(
                            "dice_id",
                            "Dice id may only contain letters, digits, '-' and '_'",
                        ));
                    }
                    let meta = self.schedule()?;
                    return Ok(FormPayload::DiceCreate(DiceCreate {
                        dice_id,
                        starts_at_local: meta.starts_at_local,
                        title: meta.title,
                    }));
                }
                self.schedule().map(FormPayload::Schedule)
            }
            FormIntent::Duplicate { source_key, .. } => {
                let meta = self.schedule()?;
                Ok(FormPayload::Duplicate(DuplicateRequest {
                    source_key: source_key.clone(),
                    starts_at_local: meta.starts_at_local,
                    title: meta.title,
                }))
            }
        }
    }

    fn required(&self, name: &str) -> Result<String, ValidationError> {
        let field = self
            .field(name)
            .ok_or_else(|| ValidationError::new(name, "Field is missing from the form"))?;
        let value = field.value.trim();
        if value.is_empty() {
            return Err(ValidationError::new(
                name,
                format!("{} is required", field.label),
            ));
        }
        Ok(value.to_string())
    }

    fn schedule(&self) -> Result<ScheduleMeta, ValidationError> {
        let title = self.required("title")?;
        let starts_at_local = self.required("starts_at_local")?;
        check_local_datetime(&starts_at_local)?;
        Ok(ScheduleMeta {
            title,
            starts_at_local,
        })
    }

    fn quiz_payload(&self) -> Result<QuizQuestionPayload, ValidationError> {
        let question = self.required("question")?;
        let mut options = BTreeMap::new();
        for field in &self.fields {
            let Some(key) = field.name.strip_prefix(OPTION_PREFIX) else {
                continue;
            };
            let text = field.value.trim();
            if text.is_empty() {
                return Err(ValidationError::new(
                    field.name.clone(),
                    format!("{} must not be empty", field.label),
                ));
            }
            options.insert(key.to_string(), text.to_string());
        }
        if options.len() < 2 {
            return Err(ValidationError::new(
                "question",
                "A question needs at least two options",
            ));
        }
        let correct_answer = self.required("correct_answer")?;
        if !options.contains_key(&correct_answer) {
            let keys: Vec<&str> = options.keys().map(String::as_str).collect();
            return Err(ValidationError::new(
                "correct_answer",
                format!("Correct answer must be one of {}", keys.join(", ")),
            ));
        }
        Ok(QuizQuestionPayload {
            question,
            options,
            correct_answer,
        })
    }
}

fn schedule_fields(title: &str, starts_at_local: &str) -> Vec<FormField> {
    vec![
        FormField::new("title", "Title", FieldKind::Text).with_value(title),
        FormField::new("starts_at_local", "Starts at (MSK)", FieldKind::DateTimeLocal)
            .with_value(starts_at_local),
    ]
}

/// Accepts `YYYY-MM-DDTHH:MM` naming a date and time that exist.
///
/// # Errors
///
/// Returns a [`ValidationError`] on `starts_at_local` otherwise.
pub fn check_local_datetime(value: &str) -> Result<NaiveDateTime, ValidationError> {
    let well_formed = LOCAL_DATETIME
        .as_ref()
        .is_some_and(|re| re.is_match(value));
    if !well_formed {
        return Err(ValidationError::new(
            "starts_at_local",
            "Start time must look like YYYY-MM-DDTHH:MM",
        ));
    }
    NaiveDateTime::parse_from_str(value, LOCAL_DATETIME_FORMAT).map_err(|_| {
        ValidationError::new("starts_at_local", format!("{value} is not a real date and time"))
    })
}

/// Open modals, at most one per [`ModalId`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalStack {
    open: Vec<ModalForm>,
}

impl ModalStack {
    /// Open `form` on top. A modal with the same id is replaced, never stacked
    /// twice. Returns whether a previous instance was discarded.
    pub fn open(&mut self, form: ModalForm) -> bool {
        let before = self.open.len();
        self.open.retain(|open| open.id != form.id);
        let replaced = self.open.len() != before;
        self.open.push(form);
        replaced
    }

    pub fn close(&mut self, id: ModalId) -> Option<ModalForm> {
        let position = self.open.iter().position(|form| form.id == id)?;
        Some(self.open.remove(position))
    }

    #[must_use]
    pub fn get(&self, id: ModalId) -> Option<&ModalForm> {
        self.open.iter().find(|form| form.id == id)
    }

    pub fn get_mut(&mut self, id: ModalId) -> Option<&mut ModalForm> {
        self.open.iter_mut().find(|form| form.id == id)
    }

    #[must_use]
    pub fn top(&self) -> Option<&ModalForm> {
        self.open.last()
    }

    #[must_use]
    pub fn forms(&self) -> &[ModalForm] {
        &self.open
    }

    #[must_use]
    pub fn is_open(&self, id: ModalId) -> bool {
        self.get(id).is_some()
    }

    pub fn clear(&mut self) {
        self.open.clear();
    }
}
