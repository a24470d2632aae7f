//! Detail pages: one resource's metadata, stats, toolbar and sub-entities.
//!
//! Loaders fan the independent reads out concurrently and fail as a whole if
//! any of them fails; the builders are pure so they can be tested without I/O.

use crate::api::AdminApi;
use crate::error::ApiError;
use crate::http::Transport;
use crate::list::{DELETE_LABEL, toggle_label};
use crate::resources::ResourceKind;
use crate::schema::{
    DiceEvent, QuizMeta, QuizQuestion, QuizQuestions, QuizStats, RaffleMeta, RaffleQuestion,
    RaffleQuestions, RaffleStats, RunAction, UncheckedAnswer, UncheckedPage, UserProfile,
    TicketSource, UserTicket, UserTickets,
};
use smallvec::SmallVec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
}

impl StatTile {
    #[must_use]
    pub fn new(label: &'static str, value: impl ToString) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    EditMeta,
    Duplicate,
    Preview,
    AddQuestion,
    Reschedule,
    Run(RunAction),
    Toggle { enabled: bool },
    Delete,
}

impl DetailAction {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EditMeta => "✏️ Edit",
            Self::Duplicate => "📄 Duplicate",
            Self::Preview => "👁️ Preview",
            Self::AddQuestion => "➕ Add question",
            Self::Reschedule => "🔁 Reschedule",
            Self::Run(action) => action.label(),
            Self::Toggle { enabled } => toggle_label(enabled),
            Self::Delete => DELETE_LABEL,
        }
    }

    /// Actions that destroy data and go through a confirmation step.
    #[must_use]
    pub const fn is_destructive(self) -> bool {
        matches!(self, Self::Delete)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubControl {
    Edit,
    Delete,
    Approve,
    Deny,
    Remove,
}

impl SubControl {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Edit => "✏️ Edit",
            Self::Delete => DELETE_LABEL,
            Self::Approve => "✅ Approve",
            Self::Deny => "❌ Deny",
            Self::Remove => "🗑️ Remove",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubEntity {
    QuizQuestion(QuizQuestion),
    RaffleQuestion(RaffleQuestion),
    Unchecked(UncheckedAnswer),
    Ticket(UserTicket),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubEntityRow {
    /// 1-based position in its section.
    pub index: usize,
    pub heading: String,
    pub lines: Vec<String>,
    pub controls: SmallVec<[SubControl; 2]>,
    pub entity: SubEntity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubSection {
    pub title: String,
    pub empty_text: &'static str,
    pub rows: Vec<SubEntityRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub kind: ResourceKind,
    pub key: String,
    pub title: Option<String>,
    /// Start time as `YYYY-MM-DDTHH:MM`, for prefilling edit forms.
    pub starts_at_local: Option<String>,
    pub enabled: Option<bool>,
    pub stats: Vec<StatTile>,
    pub actions: SmallVec<[DetailAction; 10]>,
    pub sections: Vec<SubSection>,
}

impl DetailView {
    #[must_use]
    pub fn heading(&self) -> String {
        match self.title.as_deref().filter(|title| !title.trim().is_empty()) {
            Some(title) => format!("{} {} — {title}", self.kind.label(), self.key),
            None => format!("{} {}", self.kind.label(), self.key),
        }
    }

    #[must_use]
    pub fn has_action(&self, action: DetailAction) -> bool {
        self.actions.contains(&action)
    }
}

fn event_toolbar(kind: ResourceKind, enabled: bool) -> SmallVec<[DetailAction; 10]> {
    let mut actions = SmallVec::new();
    actions.push(DetailAction::EditMeta);
    if kind.is_scheduled() {
        actions.push(DetailAction::Duplicate);
        actions.push(DetailAction::Preview);
        actions.push(DetailAction::AddQuestion);
        actions.push(DetailAction::Reschedule);
        actions.extend(RunAction::available_for(kind).iter().copied().map(DetailAction::Run));
    }
    actions.push(DetailAction::Toggle { enabled });
    actions.push(DetailAction::Delete);
    actions
}

fn edit_delete() -> SmallVec<[SubControl; 2]> {
    SmallVec::from_buf([SubControl::Edit, SubControl::Delete])
}

fn quiz_question_row(index: usize, question: QuizQuestion) -> SubEntityRow {
    let lines = question
        .ordered_options()
        .into_iter()
        .map(|(key, text)| {
            if key == question.correct_answer {
                format!("{key}) {text} ✓")
            } else {
                format!("{key}) {text}")
            }
        })
        .collect();
    SubEntityRow {
        index,
        heading: question.question.clone(),
        lines,
        controls: edit_delete(),
        entity: SubEntity::QuizQuestion(question),
    }
}

fn raffle_question_row(index: usize, question: RaffleQuestion) -> SubEntityRow {
    SubEntityRow {
        index,
        heading: question.title.clone(),
        lines: vec![question.text.clone()],
        controls: edit_delete(),
        entity: SubEntity::RaffleQuestion(question),
    }
}

fn unchecked_row(index: usize, answer: UncheckedAnswer) -> SubEntityRow {
    let mut lines = vec![answer.question_text.clone(), format!("Answer: {}", answer.answer)];
    if let Some(timestamp) = &answer.timestamp {
        lines.push(timestamp.clone());
    }
    SubEntityRow {
        index,
        heading: format!("User {}", answer.user_id),
        lines,
        controls: SmallVec::from_buf([SubControl::Approve, SubControl::Deny]),
        entity: SubEntity::Unchecked(answer),
    }
}

fn ticket_row(index: usize, ticket: UserTicket) -> SubEntityRow {
    let source = match ticket.source {
        TicketSource::Quiz => "quiz",
        TicketSource::Raffle => "raffle",
    };
    let mut lines = vec![format!("{source} {}", ticket.date)];
    if let Some(issued) = ticket.issued_at() {
        lines.push(issued.to_string());
    }
    let mut controls = SmallVec::new();
    controls.push(SubControl::Remove);
    SubEntityRow {
        index,
        heading: format!("#{}", ticket.ticket_number),
        lines,
        controls,
        entity: SubEntity::Ticket(ticket),
    }
}

fn section<I, F>(title: impl Into<String>, empty_text: &'static str, items: I, row: F) -> SubSection
where
    I: IntoIterator,
    F: Fn(usize, I::Item) -> SubEntityRow,
{
    SubSection {
        title: title.into(),
        empty_text,
        rows: items
            .into_iter()
            .enumerate()
            .map(|(i, item)| row(i + 1, item))
            .collect(),
    }
}

#[must_use]
pub fn quiz_detail(meta: QuizMeta, stats: &QuizStats, questions: QuizQuestions) -> DetailView {
    let count = questions.questions.len();
    DetailView {
        kind: ResourceKind::Quiz,
        key: meta.quiz_date,
        title: meta.title,
        starts_at_local: meta.starts_at_msk,
        enabled: Some(meta.enabled),
        stats: vec![
            StatTile::new("Participants", stats.total_participants),
            StatTile::new("With tickets", stats.with_tickets),
            StatTile::new("Without tickets", stats.no_tickets),
            StatTile::new("Non-participants", stats.non_participants),
        ],
        actions: event_toolbar(ResourceKind::Quiz, meta.enabled),
        sections: vec![section(
            format!("Questions ({count})"),
            "No questions yet",
            questions.questions,
            quiz_question_row,
        )],
    }
}

#[must_use]
pub fn raffle_detail(
    meta: RaffleMeta,
    stats: &RaffleStats,
    questions: RaffleQuestions,
    unchecked: UncheckedPage,
) -> DetailView {
    let count = questions.questions.len();
    DetailView {
        kind: ResourceKind::Raffle,
        key: meta.raffle_date,
        title: meta.title,
        starts_at_local: meta.starts_at_msk,
        enabled: Some(meta.enabled),
        stats: vec![
            StatTile::new("Participants", stats.total_participants),
            StatTile::new("Approved", stats.approved),
            StatTile::new("Denied", stats.denied),
            StatTile::new("Awaiting review", stats.unchecked),
        ],
        actions: event_toolbar(ResourceKind::Raffle, meta.enabled),
        sections: vec![
            section(
                format!("Questions ({count})"),
                "No questions yet",
                questions.questions,
                raffle_question_row,
            ),
            section(
                format!("Awaiting review ({})", unchecked.total),
                "Nothing to review",
                unchecked.unchecked,
                unchecked_row,
            ),
        ],
    }
}

#[must_use]
pub fn dice_detail(event: DiceEvent) -> DetailView {
    let status = if event.enabled { "enabled" } else { "disabled" };
    DetailView {
        kind: ResourceKind::Dice,
        key: event.dice_id,
        title: event.title,
        starts_at_local: event.starts_at_msk.clone(),
        enabled: Some(event.enabled),
        stats: vec![
            StatTile::new("Status", status),
            StatTile::new("Starts", event.starts_at_msk.as_deref().unwrap_or("—")),
        ],
        actions: event_toolbar(ResourceKind::Dice, event.enabled),
        sections: Vec::new(),
    }
}

#[must_use]
pub fn user_detail(profile: UserProfile, tickets: UserTickets) -> DetailView {
    let user = profile.summary;
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };
    let mut stats = vec![
        StatTile::new("Subscribed", yes_no(user.subscribed)),
        StatTile::new("Registered", yes_no(user.registration_completed)),
        StatTile::new("Tickets", tickets.tickets.len()),
    ];
    if let Some(status) = profile.registration_status {
        stats.push(StatTile::new("Registration step", status));
    }
    if let Some(created) = &user.created_at {
        stats.push(StatTile::new("Joined", created));
    }
    let count = tickets.tickets.len();
    DetailView {
        kind: ResourceKind::User,
        key: user.id.to_string(),
        title: user.display_name(),
        starts_at_local: None,
        enabled: None,
        stats,
        actions: SmallVec::new(),
        sections: vec![section(
            format!("Tickets ({count})"),
            "No tickets issued",
            tickets.tickets,
            ticket_row,
        )],
    }
}

/// # Errors
///
/// Fails with the first error of the concurrent reads.
pub async fn load_quiz_detail<T: Transport>(
    api: &AdminApi<T>,
    date: &str,
) -> Result<DetailView, ApiError> {
    let (meta, stats, questions) = futures::try_join!(
        api.quiz_meta(date),
        api.quiz_stats(date),
        api.quiz_questions(date)
    )?;
    Ok(quiz_detail(meta, &stats, questions))
}

/// # Errors
///
/// Fails with the first error of the concurrent reads.
pub async fn load_raffle_detail<T: Transport>(
    api: &AdminApi<T>,
    date: &str,
) -> Result<DetailView, ApiError> {
    let (meta, stats, questions, unchecked) = futures::try_join!(
        api.raffle_meta(date),
        api.raffle_stats(date),
        api.raffle_questions(date),
        api.raffle_unchecked(date)
    )?;
    Ok(raffle_detail(meta, &stats, questions, unchecked))
}

/// # Errors
///
/// Propagates the single read's error.
pub async fn load_dice_detail<T: Transport>(
    api: &AdminApi<T>,
    dice_id: &str,
) -> Result<DetailView, ApiError> {
    Ok(dice_detail(api.dice_event(dice_id).await?))
}

/// # Errors
///
/// Fails with the first error of the concurrent reads.
pub async fn load_user_detail<T: Transport>(
    api: &AdminApi<T>,
    user_id: i64,
) -> Result<DetailView, ApiError> {
    let (profile, tickets) = futures::try_join!(api.user(user_id), api.user_tickets(user_id))?;
    Ok(user_detail(profile, tickets))
}
