//! Canonical wire schemas, one per resource type.
//!
//! Required fields are required: a body missing one fails to decode and
//! surfaces as [`crate::ApiError::UnexpectedShape`] instead of rendering
//! defaults.

mod common;
mod dice;
mod quiz;
mod raffle;
mod scheduler;
mod stats;
mod tickets;
mod users;

pub use common::{CollectionEntry, MutationAck};
pub use dice::{DiceCreate, DiceEvent, DiceList, DiceUpdate};
pub use quiz::{QuizMeta, QuizQuestion, QuizQuestionPayload, QuizQuestions, QuizStats};
pub use raffle::{
    RaffleMeta, RaffleQuestion, RaffleQuestionPayload, RaffleQuestions, RaffleStats,
    UncheckedAnswer, UncheckedPage,
};
pub use scheduler::{RunAction, SchedulerJob, SchedulerJobs};
pub use stats::{
    DailyActivity, DailyReport, ErrorEntry, ErrorLog, HealthReport, ReportPeriod, SystemStats,
    SystemTickets, SystemUsers, WeeklyNewUsers, WeeklyReport, WeeklyTickets,
};
pub use tickets::{
    DuplicateCounts, DuplicateList, DuplicateSource, DuplicateTicket, FirstHolder, TicketCheck,
    TicketHolder, TicketIssue, TicketSource, TicketStats, UserTicket, UserTickets,
};
pub use users::{UserProfile, UserSummary, UsersOverview, UsersPage};

/// Start-time payload shared by meta edits and resource creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScheduleMeta {
    pub title: String,
    pub starts_at_local: String,
}

/// Body of every duplicate call.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DuplicateRequest {
    pub source_key: String,
    pub starts_at_local: String,
    pub title: String,
}
