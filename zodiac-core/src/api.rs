//! Typed wrappers over every admin endpoint the console calls.

use crate::error::ApiError;
use crate::http::{HttpClient, Transport};
use crate::resources::ResourceKind;
use crate::schema::{
    CollectionEntry, DailyReport, DiceCreate, DiceEvent, DiceList, DiceUpdate, DuplicateList,
    DuplicateRequest, ErrorLog, HealthReport, MutationAck, QuizMeta, QuizQuestionPayload,
    QuizQuestions, QuizStats, RaffleMeta, RaffleQuestionPayload, RaffleQuestions, RaffleStats,
    RunAction, ScheduleMeta, SchedulerJobs, SystemStats, TicketCheck, TicketStats, UncheckedPage,
    UserProfile, UserTickets, UsersOverview, UsersPage, WeeklyReport,
};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped inside a single path segment or query value.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn seg(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

/// A `success: false` acknowledgement is a failed mutation even on HTTP 200.
fn accepted(ack: MutationAck) -> Result<MutationAck, ApiError> {
    if ack.success {
        Ok(ack)
    } else {
        Err(ApiError::Status {
            status: 200,
            message: ack
                .message
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| "The backend rejected the change".to_string()),
        })
    }
}

fn collection_kind(kind: ResourceKind) -> Result<&'static str, ApiError> {
    if kind.is_toggleable() {
        Ok(kind.segment())
    } else {
        Err(ApiError::Encode(format!(
            "{} has no collection endpoint",
            kind.label()
        )))
    }
}

fn scheduled_kind(kind: ResourceKind) -> Result<&'static str, ApiError> {
    if kind.is_scheduled() {
        Ok(kind.segment())
    } else {
        Err(ApiError::Encode(format!(
            "{} is not driven by the scheduler",
            kind.label()
        )))
    }
}

pub struct AdminApi<T> {
    http: HttpClient<T>,
}

impl<T> Clone for AdminApi<T> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

/// All methods return [`ApiError`] exactly as produced by [`HttpClient`]; the
/// per-method `# Errors` sections are omitted.
#[allow(clippy::missing_errors_doc)]
impl<T: Transport> AdminApi<T> {
    #[must_use]
    pub const fn new(http: HttpClient<T>) -> Self {
        Self { http }
    }

    #[must_use]
    pub const fn http(&self) -> &HttpClient<T> {
        &self.http
    }

    // --- dashboard -------------------------------------------------------

    pub async fn system_stats(&self) -> Result<SystemStats, ApiError> {
        self.http.get("stats/system").await
    }

    pub async fn daily_report(&self) -> Result<DailyReport, ApiError> {
        self.http.get("stats/daily").await
    }

    pub async fn weekly_report(&self) -> Result<WeeklyReport, ApiError> {
        self.http.get("stats/weekly").await
    }

    pub async fn health(&self) -> Result<HealthReport, ApiError> {
        self.http.get("stats/health").await
    }

    pub async fn recent_errors(&self, limit: u32) -> Result<ErrorLog, ApiError> {
        self.http.get(&format!("stats/errors?limit={limit}")).await
    }

    // --- shared collection operations -----------------------------------

    pub async fn collection(&self, kind: ResourceKind) -> Result<Vec<CollectionEntry>, ApiError> {
        let segment = collection_kind(kind)?;
        let path = format!("{segment}/list");
        if kind == ResourceKind::Dice {
            let list: DiceList = self.http.get(&path).await?;
            return Ok(list.dice_events.into_iter().map(CollectionEntry::from).collect());
        }
        self.http.get(&path).await
    }

    pub async fn toggle(&self, kind: ResourceKind, key: &str) -> Result<MutationAck, ApiError> {
        let segment = collection_kind(kind)?;
        accepted(
            self.http
                .post_empty(&format!("{segment}/{}/toggle", seg(key)))
                .await?,
        )
    }

    pub async fn delete_resource(
        &self,
        kind: ResourceKind,
        key: &str,
    ) -> Result<MutationAck, ApiError> {
        let segment = collection_kind(kind)?;
        accepted(self.http.delete(&format!("{segment}/{}", seg(key))).await?)
    }

    /// Create a quiz or raffle for the date of `meta.starts_at_local`.
    pub async fn create_resource(
        &self,
        kind: ResourceKind,
        meta: &ScheduleMeta,
    ) -> Result<MutationAck, ApiError> {
        let segment = scheduled_kind(kind)?;
        accepted(self.http.post(&format!("{segment}/create"), meta).await?)
    }

    pub async fn duplicate(
        &self,
        kind: ResourceKind,
        request: &DuplicateRequest,
    ) -> Result<MutationAck, ApiError> {
        let segment = scheduled_kind(kind)?;
        accepted(self.http.post(&format!("{segment}/duplicate"), request).await?)
    }

    pub async fn update_meta(
        &self,
        kind: ResourceKind,
        key: &str,
        meta: &ScheduleMeta,
    ) -> Result<MutationAck, ApiError> {
        let segment = scheduled_kind(kind)?;
        accepted(
            self.http
                .put(&format!("{segment}/{}/meta", seg(key)), meta)
                .await?,
        )
    }

    // --- quiz ------------------------------------------------------------

    pub async fn quiz_meta(&self, date: &str) -> Result<QuizMeta, ApiError> {
        self.http.get(&format!("quiz/{}", seg(date))).await
    }

    pub async fn quiz_stats(&self, date: &str) -> Result<QuizStats, ApiError> {
        self.http.get(&format!("quiz/{}/stats", seg(date))).await
    }

    pub async fn quiz_questions(&self, date: &str) -> Result<QuizQuestions, ApiError> {
        self.http.get(&format!("quiz/{}/questions", seg(date))).await
    }

    pub async fn add_quiz_question(
        &self,
        date: &str,
        payload: &QuizQuestionPayload,
    ) -> Result<MutationAck, ApiError> {
        accepted(
            self.http
                .post(&format!("quiz/{}/questions", seg(date)), payload)
                .await?,
        )
    }

    pub async fn update_quiz_question(
        &self,
        date: &str,
        id: u32,
        payload: &QuizQuestionPayload,
    ) -> Result<MutationAck, ApiError> {
        accepted(
            self.http
                .put(&format!("quiz/{}/questions/{id}", seg(date)), payload)
                .await?,
        )
    }

    pub async fn delete_quiz_question(&self, date: &str, id: u32) -> Result<MutationAck, ApiError> {
        accepted(
            self.http
                .delete(&format!("quiz/{}/questions/{id}", seg(date)))
                .await?,
        )
    }

    // --- raffle ----------------------------------------------------------

    pub async fn raffle_meta(&self, date: &str) -> Result<RaffleMeta, ApiError> {
        self.http.get(&format!("raffle/{}", seg(date))).await
    }

    pub async fn raffle_stats(&self, date: &str) -> Result<RaffleStats, ApiError> {
        self.http.get(&format!("raffle/{}/stats", seg(date))).await
    }

    pub async fn raffle_questions(&self, date: &str) -> Result<RaffleQuestions, ApiError> {
        self.http.get(&format!("raffle/{}/questions", seg(date))).await
    }

    pub async fn raffle_unchecked(&self, date: &str) -> Result<UncheckedPage, ApiError> {
        self.http.get(&format!("raffle/{}/unchecked", seg(date))).await
    }

    pub async fn add_raffle_question(
        &self,
        date: &str,
        payload: &RaffleQuestionPayload,
    ) -> Result<MutationAck, ApiError> {
        accepted(
            self.http
                .post(&format!("raffle/{}/questions", seg(date)), payload)
                .await?,
        )
    }

    pub async fn update_raffle_question(
        &self,
        date: &str,
        id: u32,
        payload: &RaffleQuestionPayload,
    ) -> Result<MutationAck, ApiError> {
        accepted(
            self.http
                .put(&format!("raffle/{}/questions/{id}", seg(date)), payload)
                .await?,
        )
    }

    pub async fn delete_raffle_question(
        &self,
        date: &str,
        id: u32,
    ) -> Result<MutationAck, ApiError> {
        accepted(
            self.http
                .delete(&format!("raffle/{}/questions/{id}", seg(date)))
                .await?,
        )
    }

    /// Approve (`true`) or deny a participant's answer; approval issues a ticket.
    pub async fn moderate(
        &self,
        date: &str,
        user_id: i64,
        approve: bool,
    ) -> Result<MutationAck, ApiError> {
        let verb = if approve { "approve" } else { "deny" };
        accepted(
            self.http
                .post_empty(&format!("raffle/{}/{verb}/{user_id}", seg(date)))
                .await?,
        )
    }

    // --- dice ------------------------------------------------------------

    pub async fn dice_event(&self, dice_id: &str) -> Result<DiceEvent, ApiError> {
        self.http.get(&format!("dice/{}", seg(dice_id))).await
    }

    pub async fn create_dice(&self, payload: &DiceCreate) -> Result<MutationAck, ApiError> {
        accepted(self.http.post("dice/create", payload).await?)
    }

    pub async fn update_dice(
        &self,
        dice_id: &str,
        payload: &DiceUpdate,
    ) -> Result<MutationAck, ApiError> {
        accepted(self.http.put(&format!("dice/{}", seg(dice_id)), payload).await?)
    }

    // --- tickets ---------------------------------------------------------

    pub async fn ticket_stats(&self) -> Result<TicketStats, ApiError> {
        self.http.get("tickets/stats").await
    }

    pub async fn ticket_duplicates(&self) -> Result<DuplicateList, ApiError> {
        self.http.get("tickets/duplicates").await
    }

    pub async fn user_tickets(&self, user_id: i64) -> Result<UserTickets, ApiError> {
        self.http.get(&format!("tickets/user/{user_id}")).await
    }

    pub async fn check_ticket(&self, ticket_number: i64) -> Result<TicketCheck, ApiError> {
        self.http
            .get(&format!("tickets/check_time/{ticket_number}"))
            .await
    }

    pub async fn remove_ticket(
        &self,
        user_id: i64,
        ticket_number: i64,
    ) -> Result<MutationAck, ApiError> {
        accepted(
            self.http
                .delete(&format!("tickets/{user_id}/{ticket_number}"))
                .await?,
        )
    }

    // --- users -----------------------------------------------------------

    pub async fn users(&self, skip: u64, limit: u32, search: &str) -> Result<UsersPage, ApiError> {
        let search = search.trim();
        let path = if search.is_empty() {
            format!("users/?skip={skip}&limit={limit}")
        } else {
            format!("users/?skip={skip}&limit={limit}&search={}", seg(search))
        };
        self.http.get(&path).await
    }

    pub async fn user(&self, user_id: i64) -> Result<UserProfile, ApiError> {
        self.http.get(&format!("users/{user_id}")).await
    }

    pub async fn users_overview(&self) -> Result<UsersOverview, ApiError> {
        self.http.get("users/stats/overview").await
    }

    // --- scheduler -------------------------------------------------------

    pub async fn scheduler_jobs(&self) -> Result<SchedulerJobs, ApiError> {
        self.http.get("scheduler/jobs").await
    }

    pub async fn reschedule(&self, kind: ResourceKind, key: &str) -> Result<MutationAck, ApiError> {
        let segment = scheduled_kind(kind)?;
        accepted(
            self.http
                .post_empty(&format!("scheduler/{segment}/{}/reschedule", seg(key)))
                .await?,
        )
    }

    /// Fire a manual job. The backend answers 409 when the scheduler is stopped.
    pub async fn run_action(
        &self,
        kind: ResourceKind,
        key: &str,
        action: RunAction,
    ) -> Result<MutationAck, ApiError> {
        let segment = scheduled_kind(kind)?;
        if !RunAction::available_for(kind).contains(&action) {
            return Err(ApiError::Encode(format!(
                "{} cannot run {}",
                kind.label(),
                action.as_path()
            )));
        }
        accepted(
            self.http
                .post_empty(&format!(
                    "scheduler/{segment}/{}/run/{}",
                    seg(key),
                    action.as_path()
                ))
                .await?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConsoleConfig;
    use crate::http::Method;
    use crate::testing::ScriptedTransport;
    use futures::executor::block_on;
    use serde_json::json;

    fn api(transport: &ScriptedTransport) -> AdminApi<ScriptedTransport> {
        AdminApi::new(HttpClient::new(transport.clone(), &ConsoleConfig::default()))
    }

    #[test]
    fn rejected_ack_is_an_error() {
        let transport = ScriptedTransport::new();
        transport.respond(
            Method::Post,
            "/api/quiz/2025-01-10/toggle",
            200,
            json!({"success": false, "message": "Quiz is locked"}),
        );
        let err = block_on(api(&transport).toggle(ResourceKind::Quiz, "2025-01-10")).unwrap_err();
        assert_eq!(err.to_string(), "Quiz is locked");
    }

    #[test]
    fn user_search_is_encoded_into_the_query() {
        let transport = ScriptedTransport::new();
        transport.respond(
            Method::Get,
            "/api/users/?skip=50&limit=50&search=ann%20lee",
            200,
            json!({"total": 0, "skip": 50, "limit": 50, "users": []}),
        );
        let page = block_on(api(&transport).users(50, 50, " ann lee ")).unwrap();
        assert_eq!(page.skip, 50);
    }

    #[test]
    fn users_have_no_collection_endpoint() {
        let transport = ScriptedTransport::new();
        let err = block_on(api(&transport).collection(ResourceKind::User)).unwrap_err();
        assert!(matches!(err, ApiError::Encode(_)));
        assert_eq!(transport.call_count(), 0);
    }

    #[test]
    fn raffles_cannot_mark_non_participants() {
        let transport = ScriptedTransport::new();
        let err = block_on(api(&transport).run_action(
            ResourceKind::Raffle,
            "2025-01-10",
            RunAction::Mark,
        ))
        .unwrap_err();
        assert!(matches!(err, ApiError::Encode(_)));
        assert_eq!(transport.call_count(), 0);
    }

    #[test]
    fn scheduler_conflict_surfaces_detail() {
        let transport = ScriptedTransport::new();
        transport.respond(
            Method::Post,
            "/api/scheduler/quiz/2025-01-10/run/announce",
            409,
            json!({"detail": "Scheduler is not running"}),
        );
        let err = block_on(api(&transport).run_action(
            ResourceKind::Quiz,
            "2025-01-10",
            RunAction::Announce,
        ))
        .unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.to_string(), "Scheduler is not running");
    }
}
