//! The console orchestrator: page loads, mutations, confirmations, modals
//! and notifications behind one handle.
//!
//! State lives in `RefCell`s behind an `Rc` so the async operations can run on
//! a single-threaded executor while the UI keeps reading snapshots. No borrow
//! is ever held across an `.await`. Every state change ends with a call to the
//! registered observer so the view can re-render.

use crate::api::AdminApi;
use crate::config::ConsoleConfig;
use crate::error::{ApiError, ValidationError};
use crate::form::{FormIntent, FormPayload, ModalForm, ModalId, ModalStack};
use crate::http::{HttpClient, Transport};
use crate::inflight::{ActionId, ActionTag, InFlight};
use crate::notify::{Notice, NoticeId, NotificationCenter};
use crate::pages::{PageContent, TicketLookup, load_page};
use crate::resources::ResourceKind;
use crate::router::{Page, PageState, Router};
use crate::schema::{MutationAck, RunAction};
use std::cell::RefCell;
use std::rc::Rc;

/// Something the operator asked to delete, pending confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Resource { kind: ResourceKind, key: String },
    QuizQuestion { quiz_date: String, question_id: u32 },
    RaffleQuestion { raffle_date: String, question_id: u32 },
    Ticket { user_id: i64, ticket_number: i64 },
}

impl DeleteTarget {
    #[must_use]
    pub fn prompt(&self) -> String {
        match self {
            Self::Resource { kind, key } => {
                format!("Delete {} {key}? This cannot be undone.", kind.label())
            }
            Self::QuizQuestion {
                quiz_date,
                question_id,
            } => format!("Delete question #{question_id} from quiz {quiz_date}?"),
            Self::RaffleQuestion {
                raffle_date,
                question_id,
            } => format!("Delete question #{question_id} from raffle {raffle_date}?"),
            Self::Ticket {
                user_id,
                ticket_number,
            } => format!("Remove ticket #{ticket_number} from user {user_id}?"),
        }
    }

    /// Key under which this delete is tracked while in flight.
    #[must_use]
    pub fn action_id(&self) -> ActionId {
        match self {
            Self::Resource { kind, key } => ActionId::new(*kind, key.clone(), ActionTag::Delete),
            Self::QuizQuestion {
                quiz_date,
                question_id,
            } => ActionId::new(
                ResourceKind::Quiz,
                format!("{quiz_date}#{question_id}"),
                ActionTag::Delete,
            ),
            Self::RaffleQuestion {
                raffle_date,
                question_id,
            } => ActionId::new(
                ResourceKind::Raffle,
                format!("{raffle_date}#{question_id}"),
                ActionTag::Delete,
            ),
            Self::Ticket {
                user_id,
                ticket_number,
            } => ActionId::new(
                ResourceKind::Ticket,
                ticket_number.to_string(),
                ActionTag::RemoveTicket { user_id: *user_id },
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub prompt: String,
    pub target: DeleteTarget,
}

/// What became of a user-triggered operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The same action was already in flight; nothing was sent.
    Ignored,
    /// The operator declined a confirmation.
    Cancelled,
    Invalid(ValidationError),
    Failed(ApiError),
}

/// Suffix appended to success messages when the backend reports on the scheduler.
#[must_use]
pub const fn scheduler_note(ack: &MutationAck) -> &'static str {
    match ack.scheduled {
        Some(true) => " · scheduler updated",
        Some(false) => " · scheduler not running, jobs unchanged",
        None => match ack.rescheduled {
            Some(true) => " · scheduler updated",
            Some(false) => " · scheduler not running, jobs unchanged",
            None => "",
        },
    }
}

fn success_message(ack: &MutationAck, fallback: &str) -> String {
    let base = ack
        .message
        .as_deref()
        .filter(|message| !message.trim().is_empty())
        .unwrap_or(fallback);
    format!("{base}{}", scheduler_note(ack))
}

type Observer = Rc<dyn Fn()>;

struct Shared {
    notices: RefCell<NotificationCenter>,
    router: RefCell<Router>,
    modals: RefCell<ModalStack>,
    inflight: RefCell<InFlight>,
    confirmation: RefCell<Option<Confirmation>>,
    observer: RefCell<Option<Observer>>,
}

impl Shared {
    fn changed(&self) {
        let observer = self.observer.borrow().clone();
        if let Some(observer) = observer {
            observer();
        }
    }
}

/// Keeps the loading indicator up for as long as it lives.
struct LoadingGuard {
    shared: Rc<Shared>,
}

impl LoadingGuard {
    fn begin(shared: &Rc<Shared>) -> Self {
        shared.notices.borrow_mut().begin_loading();
        shared.changed();
        Self {
            shared: Rc::clone(shared),
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.shared.notices.borrow_mut().end_loading();
        self.shared.changed();
    }
}

/// Holds one action in the pending state for as long as it lives.
struct PendingGuard {
    shared: Rc<Shared>,
    id: ActionId,
}

impl PendingGuard {
    fn try_begin(shared: &Rc<Shared>, id: ActionId) -> Option<Self> {
        if !shared.inflight.borrow_mut().try_begin(&id) {
            log::debug!("ignoring repeated {:?} on {}", id.tag, id.key);
            return None;
        }
        Some(Self {
            shared: Rc::clone(shared),
            id,
        })
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.shared.inflight.borrow_mut().finish(&self.id);
        self.shared.changed();
    }
}

/// After a successful mutation, either refresh in place or go somewhere new.
enum FollowUp {
    Reload,
    Navigate(Page),
}

pub struct Console<T> {
    api: AdminApi<T>,
    config: ConsoleConfig,
    shared: Rc<Shared>,
}

impl<T> Clone for Console<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            config: self.config.clone(),
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T: Transport> Console<T> {
    #[must_use]
    pub fn new(transport: T, config: ConsoleConfig) -> Self {
        let api = AdminApi::new(HttpClient::new(transport, &config));
        let shared = Shared {
            notices: RefCell::new(NotificationCenter::new(config.toast_ttl_ms)),
            router: RefCell::new(Router::new()),
            modals: RefCell::new(ModalStack::default()),
            inflight: RefCell::new(InFlight::default()),
            confirmation: RefCell::new(None),
            observer: RefCell::new(None),
        };
        Self {
            api,
            config,
            shared: Rc::new(shared),
        }
    }

    /// Register the callback fired after every state change.
    pub fn set_observer(&self, observer: impl Fn() + 'static) {
        *self.shared.observer.borrow_mut() = Some(Rc::new(observer));
    }

    #[must_use]
    pub const fn api(&self) -> &AdminApi<T> {
        &self.api
    }

    #[must_use]
    pub const fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    // --- snapshots -------------------------------------------------------

    #[must_use]
    pub fn current_page(&self) -> Page {
        self.shared.router.borrow().current().clone()
    }

    #[must_use]
    pub fn page_state(&self) -> PageState {
        self.shared.router.borrow().state().clone()
    }

    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.shared.notices.borrow().notices().to_vec()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.shared.notices.borrow().is_loading()
    }

    #[must_use]
    pub fn modals(&self) -> Vec<ModalForm> {
        self.shared.modals.borrow().forms().to_vec()
    }

    #[must_use]
    pub fn confirmation(&self) -> Option<Confirmation> {
        self.shared.confirmation.borrow().clone()
    }

    #[must_use]
    pub fn is_pending(&self, id: &ActionId) -> bool {
        self.shared.inflight.borrow().is_pending(id)
    }

    /// Snapshot of every action still waiting on the backend.
    #[must_use]
    pub fn pending_actions(&self) -> Vec<ActionId> {
        self.shared.inflight.borrow().iter().cloned().collect()
    }

    // --- notifications ---------------------------------------------------

    pub fn dismiss_notice(&self, id: NoticeId) {
        let removed = self.shared.notices.borrow_mut().dismiss(id);
        if removed {
            self.shared.changed();
        }
    }

    /// Called by the toast timer once the notice's TTL has elapsed.
    pub fn expire_notice(&self, id: NoticeId) {
        let removed = self.shared.notices.borrow_mut().expire(id);
        if removed {
            self.shared.changed();
        }
    }

    pub fn notify_success(&self, message: impl Into<String>) -> NoticeId {
        let id = self.shared.notices.borrow_mut().success(message);
        self.shared.changed();
        id
    }

    pub fn notify_error(&self, message: impl Into<String>) -> NoticeId {
        let id = self.shared.notices.borrow_mut().error(message);
        self.shared.changed();
        id
    }

    // --- navigation ------------------------------------------------------

    /// Load `page` and show it, unless a newer navigation overtook this one.
    pub async fn navigate(&self, page: Page) {
        let ticket = self.shared.router.borrow_mut().begin(page.clone());
        self.shared.changed();
        let outcome = load_page(&self.api, &self.config, &page).await;
        if let Err(err) = &outcome {
            log::warn!("loading {page:?} failed: {err}");
        }
        let applied = self.shared.router.borrow_mut().finish(ticket, outcome);
        if applied {
            self.shared.changed();
        }
    }

    /// Reload the current page from the backend.
    pub async fn reload(&self) {
        let page = self.current_page();
        self.navigate(page).await;
    }

    /// Client-side filter over the list on screen. Synchronous, no request.
    pub fn set_search(&self, query: &str) {
        let applied = self
            .shared
            .router
            .borrow_mut()
            .content_mut()
            .is_some_and(|content| content.set_query(query));
        if applied {
            self.shared.changed();
        }
    }

    /// Server-side user search, restarting at the first page.
    pub async fn search_users(&self, query: &str) {
        self.navigate(Page::Users {
            page: 0,
            search: query.trim().to_string(),
        })
        .await;
    }

    // --- collection actions ----------------------------------------------

    /// Flip the enabled flag, then reload the page unconditionally.
    pub async fn toggle(&self, kind: ResourceKind, key: &str) -> Outcome {
        let Some(_pending) =
            PendingGuard::try_begin(&self.shared, ActionId::new(kind, key, ActionTag::Toggle))
        else {
            return Outcome::Ignored;
        };
        let result = {
            let _loading = LoadingGuard::begin(&self.shared);
            self.api.toggle(kind, key).await
        };
        let outcome = match result {
            Ok(ack) => {
                let state = match ack.enabled {
                    Some(true) => "enabled",
                    Some(false) => "disabled",
                    None => "toggled",
                };
                let fallback = format!("{} {key} {state}", kind.label());
                self.notify_success(success_message(&ack, &fallback));
                Outcome::Done
            }
            Err(err) => {
                self.notify_error(err.to_string());
                Outcome::Failed(err)
            }
        };
        self.reload().await;
        outcome
    }

    /// Ask for confirmation; nothing is sent until [`Console::resolve_confirmation`].
    pub fn request_delete(&self, target: DeleteTarget) {
        let prompt = target.prompt();
        *self.shared.confirmation.borrow_mut() = Some(Confirmation { prompt, target });
        self.shared.changed();
    }

    /// Act on the pending confirmation. Declining sends nothing.
    pub async fn resolve_confirmation(&self, accepted: bool) -> Outcome {
        let pending = self.shared.confirmation.borrow_mut().take();
        self.shared.changed();
        let Some(confirmation) = pending else {
            return Outcome::Cancelled;
        };
        if !accepted {
            return Outcome::Cancelled;
        }
        self.delete(confirmation.target).await
    }

    async fn delete(&self, target: DeleteTarget) -> Outcome {
        let Some(_pending) = PendingGuard::try_begin(&self.shared, target.action_id()) else {
            return Outcome::Ignored;
        };
        let result = {
            let _loading = LoadingGuard::begin(&self.shared);
            match &target {
                DeleteTarget::Resource { kind, key } => self.api.delete_resource(*kind, key).await,
                DeleteTarget::QuizQuestion {
                    quiz_date,
                    question_id,
                } => self.api.delete_quiz_question(quiz_date, *question_id).await,
                DeleteTarget::RaffleQuestion {
                    raffle_date,
                    question_id,
                } => {
                    self.api
                        .delete_raffle_question(raffle_date, *question_id)
                        .await
                }
                DeleteTarget::Ticket {
                    user_id,
                    ticket_number,
                } => self.api.remove_ticket(*user_id, *ticket_number).await,
            }
        };
        let outcome = match result {
            Ok(ack) => {
                let fallback = match &target {
                    DeleteTarget::Resource { kind, key } => {
                        format!("{} {key} deleted", kind.label())
                    }
                    DeleteTarget::QuizQuestion { question_id, .. }
                    | DeleteTarget::RaffleQuestion { question_id, .. } => {
                        format!("Question #{question_id} deleted")
                    }
                    DeleteTarget::Ticket { ticket_number, .. } => {
                        format!("Ticket #{ticket_number} removed")
                    }
                };
                self.notify_success(success_message(&ack, &fallback));
                Outcome::Done
            }
            Err(err) => {
                self.notify_error(err.to_string());
                Outcome::Failed(err)
            }
        };
        // A deleted resource's own detail page cannot be reloaded.
        let follow_up = match (&target, &outcome) {
            (DeleteTarget::Resource { kind, key }, Outcome::Done)
                if Page::detail_of(*kind, key).as_ref() == Some(&self.current_page()) =>
            {
                FollowUp::Navigate(Page::list_of(*kind))
            }
            _ => FollowUp::Reload,
        };
        self.follow(follow_up).await;
        outcome
    }

    // --- modal forms -----------------------------------------------------

    /// Open a form. An already open modal with the same id is replaced.
    pub fn open_form(&self, form: ModalForm) {
        self.shared.modals.borrow_mut().open(form);
        self.shared.changed();
    }

    pub fn close_form(&self, id: ModalId) {
        let closed = self.shared.modals.borrow_mut().close(id).is_some();
        if closed {
            self.shared.changed();
        }
    }

    pub fn update_field(&self, id: ModalId, name: &str, value: impl Into<String>) {
        let updated = self
            .shared
            .modals
            .borrow_mut()
            .get_mut(id)
            .is_some_and(|form| form.set_value(name, value));
        if updated {
            self.shared.changed();
        }
    }

    /// Validate locally, send, and on success close the modal and refresh.
    /// Invalid input never reaches the network; a backend failure leaves the
    /// modal open with the error shown.
    pub async fn submit_form(&self, id: ModalId) -> Outcome {
        let Some(form) = self.shared.modals.borrow().get(id).cloned() else {
            return Outcome::Cancelled;
        };
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(err) => {
                if let Some(open) = self.shared.modals.borrow_mut().get_mut(id) {
                    open.apply_validation_error(&err);
                    open.error = None;
                }
                self.shared.changed();
                return Outcome::Invalid(err);
            }
        };
        let (kind, key) = intent_target(&form.intent);
        let Some(_pending) =
            PendingGuard::try_begin(&self.shared, ActionId::new(kind, key, ActionTag::Submit))
        else {
            return Outcome::Ignored;
        };
        let result = {
            let _loading = LoadingGuard::begin(&self.shared);
            self.send_form(&form.intent, &payload).await
        };
        match result {
            Ok(ack) => {
                self.shared.modals.borrow_mut().close(id);
                self.notify_success(success_message(&ack, &success_fallback(&form.intent)));
                let follow_up = match &form.intent {
                    FormIntent::Create { kind } | FormIntent::Duplicate { kind, .. } => ack
                        .key
                        .clone()
                        .or_else(|| payload.target_key())
                        .and_then(|key| Page::detail_of(*kind, &key))
                        .map_or(FollowUp::Reload, FollowUp::Navigate),
                    _ => FollowUp::Reload,
                };
                self.follow(follow_up).await;
                Outcome::Done
            }
            Err(err) => {
                if let Some(open) = self.shared.modals.borrow_mut().get_mut(id) {
                    open.error = Some(err.to_string());
                }
                self.notify_error(err.to_string());
                Outcome::Failed(err)
            }
        }
    }

    async fn send_form(
        &self,
        intent: &FormIntent,
        payload: &FormPayload,
    ) -> Result<MutationAck, ApiError> {
        match (intent, payload) {
            (FormIntent::AddQuizQuestion { quiz_date }, FormPayload::QuizQuestion(body)) => {
                self.api.add_quiz_question(quiz_date, body).await
            }
            (
                FormIntent::EditQuizQuestion {
                    quiz_date,
                    question_id,
                },
                FormPayload::QuizQuestion(body),
            ) => {
                self.api
                    .update_quiz_question(quiz_date, *question_id, body)
                    .await
            }
            (FormIntent::AddRaffleQuestion { raffle_date }, FormPayload::RaffleQuestion(body)) => {
                self.api.add_raffle_question(raffle_date, body).await
            }
            (
                FormIntent::EditRaffleQuestion {
                    raffle_date,
                    question_id,
                },
                FormPayload::RaffleQuestion(body),
            ) => {
                self.api
                    .update_raffle_question(raffle_date, *question_id, body)
                    .await
            }
            (FormIntent::EditMeta { kind, key }, FormPayload::Schedule(meta)) => {
                self.api.update_meta(*kind, key, meta).await
            }
            (FormIntent::EditMeta { key, .. }, FormPayload::DiceUpdate(update)) => {
                self.api.update_dice(key, update).await
            }
            (FormIntent::Create { kind }, FormPayload::Schedule(meta)) => {
                self.api.create_resource(*kind, meta).await
            }
            (FormIntent::Create { .. }, FormPayload::DiceCreate(create)) => {
                self.api.create_dice(create).await
            }
            (FormIntent::Duplicate { kind, .. }, FormPayload::Duplicate(request)) => {
                self.api.duplicate(*kind, request).await
            }
            _ => Err(ApiError::Encode(
                "form payload does not match its intent".to_string(),
            )),
        }
    }

    // --- raffle moderation, scheduler, ticket tools ----------------------

    /// Approve or deny one participant's raffle answer, then reload.
    pub async fn moderate(&self, raffle_date: &str, user_id: i64, approve: bool) -> Outcome {
        let id = ActionId::new(
            ResourceKind::Raffle,
            raffle_date,
            ActionTag::Moderate { user_id },
        );
        let Some(_pending) = PendingGuard::try_begin(&self.shared, id) else {
            return Outcome::Ignored;
        };
        let result = {
            let _loading = LoadingGuard::begin(&self.shared);
            self.api.moderate(raffle_date, user_id, approve).await
        };
        let verdict = if approve { "approved" } else { "denied" };
        let outcome = self.report(result, &format!("Answer of user {user_id} {verdict}"));
        self.reload().await;
        outcome
    }

    pub async fn reschedule(&self, kind: ResourceKind, key: &str) -> Outcome {
        let Some(_pending) =
            PendingGuard::try_begin(&self.shared, ActionId::new(kind, key, ActionTag::Reschedule))
        else {
            return Outcome::Ignored;
        };
        let result = {
            let _loading = LoadingGuard::begin(&self.shared);
            self.api.reschedule(kind, key).await
        };
        let outcome = self.report(result, &format!("Jobs for {} {key} rescheduled", kind.label()));
        self.reload().await;
        outcome
    }

    /// Fire a manual scheduler job. A stopped scheduler surfaces as an error
    /// notification carrying the backend's message.
    pub async fn run_action(&self, kind: ResourceKind, key: &str, action: RunAction) -> Outcome {
        let Some(_pending) =
            PendingGuard::try_begin(&self.shared, ActionId::new(kind, key, ActionTag::Run(action)))
        else {
            return Outcome::Ignored;
        };
        let result = {
            let _loading = LoadingGuard::begin(&self.shared);
            self.api.run_action(kind, key, action).await
        };
        self.report(
            result,
            &format!("{} {key}: {} started", kind.label(), action.as_path()),
        )
    }

    /// Show a user's tickets on the tickets page.
    pub async fn lookup_user_tickets(&self, user_id: i64) -> Outcome {
        let result = {
            let _loading = LoadingGuard::begin(&self.shared);
            self.api.user_tickets(user_id).await
        };
        self.install_lookup(result.map(TicketLookup::User))
    }

    /// Show who holds a ticket number and when it was issued.
    pub async fn check_ticket(&self, ticket_number: i64) -> Outcome {
        let result = {
            let _loading = LoadingGuard::begin(&self.shared);
            self.api.check_ticket(ticket_number).await
        };
        self.install_lookup(result.map(TicketLookup::Ticket))
    }

    fn install_lookup(&self, result: Result<TicketLookup, ApiError>) -> Outcome {
        match result {
            Ok(lookup) => {
                if let Some(PageContent::Tickets(view)) =
                    self.shared.router.borrow_mut().content_mut()
                {
                    view.lookup = Some(lookup);
                }
                self.shared.changed();
                Outcome::Done
            }
            Err(err) => {
                self.notify_error(err.to_string());
                Outcome::Failed(err)
            }
        }
    }

    fn report(&self, result: Result<MutationAck, ApiError>, fallback: &str) -> Outcome {
        match result {
            Ok(ack) => {
                self.notify_success(success_message(&ack, fallback));
                Outcome::Done
            }
            Err(err) => {
                self.notify_error(err.to_string());
                Outcome::Failed(err)
            }
        }
    }

    async fn follow(&self, follow_up: FollowUp) {
        match follow_up {
            FollowUp::Reload => self.reload().await,
            FollowUp::Navigate(page) => self.navigate(page).await,
        }
    }
}

fn intent_target(intent: &FormIntent) -> (ResourceKind, String) {
    match intent {
        FormIntent::AddQuizQuestion { quiz_date } => (ResourceKind::Quiz, quiz_date.clone()),
        FormIntent::EditQuizQuestion {
            quiz_date,
            question_id,
        } => (ResourceKind::Quiz, format!("{quiz_date}#{question_id}")),
        FormIntent::AddRaffleQuestion { raffle_date } => {
            (ResourceKind::Raffle, raffle_date.clone())
        }
        FormIntent::EditRaffleQuestion {
            raffle_date,
            question_id,
        } => (ResourceKind::Raffle, format!("{raffle_date}#{question_id}")),
        FormIntent::EditMeta { kind, key } => (*kind, key.clone()),
        FormIntent::Create { kind } => (*kind, String::new()),
        FormIntent::Duplicate { kind, source_key } => (*kind, source_key.clone()),
    }
}

fn success_fallback(intent: &FormIntent) -> String {
    match intent {
        FormIntent::AddQuizQuestion { .. } | FormIntent::AddRaffleQuestion { .. } => {
            "Question added".to_string()
        }
        FormIntent::EditQuizQuestion { question_id, .. }
        | FormIntent::EditRaffleQuestion { question_id, .. } => {
            format!("Question #{question_id} saved")
        }
        FormIntent::EditMeta { kind, key } => format!("{} {key} saved", kind.label()),
        FormIntent::Create { kind } => format!("{} created", kind.label()),
        FormIntent::Duplicate { kind, source_key } => {
            format!("{} {source_key} duplicated", kind.label())
        }
    }
}
