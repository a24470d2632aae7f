use futures::executor::block_on;
use serde_json::{Value, json};
use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};
use zodiac_core::{
    ApiError, ApiRequest, Console, ConsoleConfig, DeleteTarget, DetailAction, Method, ModalForm,
    ModalId, NoticeKind, Outcome, Page, PageContent, PageState, RawResponse, ResourceKind,
    RowAction, ScriptedTransport, Transport,
};

const QUIZ_LIST: &str = "/api/quiz/list";

fn console(transport: &ScriptedTransport) -> Console<ScriptedTransport> {
    Console::new(transport.clone(), ConsoleConfig::default())
}

fn quiz_entry(key: &str, title: &str, enabled: bool) -> Value {
    json!({
        "key": key,
        "title": title,
        "starts_at_msk": format!("{key}T12:00"),
        "enabled": enabled
    })
}

fn script_quiz_detail(transport: &ScriptedTransport, date: &str) {
    transport.respond(
        Method::Get,
        &format!("/api/quiz/{date}"),
        200,
        json!({
            "quiz_date": date,
            "title": "Copy",
            "starts_at_msk": format!("{date}T10:00"),
            "enabled": true
        }),
    );
    transport.respond(
        Method::Get,
        &format!("/api/quiz/{date}/stats"),
        200,
        json!({
            "quiz_date": date,
            "total_participants": 0,
            "with_tickets": 0,
            "no_tickets": 0,
            "non_participants": 0
        }),
    );
    transport.respond(
        Method::Get,
        &format!("/api/quiz/{date}/questions"),
        200,
        json!({"questions": [
            {
                "id": 1,
                "question": "Fire sign?",
                "options": {"1": "Aries", "2": "Cancer"},
                "correct_answer": "1"
            }
        ]}),
    );
}

fn rendered_list(console: &Console<ScriptedTransport>) -> zodiac_core::ResourceList {
    match console.page_state() {
        PageState::Rendered {
            content: PageContent::List(list),
            ..
        } => list,
        other => panic!("expected a rendered list, got {other:?}"),
    }
}

#[test]
fn list_renders_label_and_disable_control() {
    let transport = ScriptedTransport::new();
    transport.respond(
        Method::Get,
        QUIZ_LIST,
        200,
        json!([{"key": "2025-01-10", "title": "New Year Quiz", "enabled": true}]),
    );
    let console = console(&transport);
    block_on(console.navigate(Page::QuizList));

    let rows = rendered_list(&console).visible_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].label, "2025-01-10 — New Year Quiz");
    assert_eq!(rows[0].toggle_label, Some("⏸️ Disable"));
}

#[test]
fn toggle_reloads_and_flips_control() {
    let transport = ScriptedTransport::new();
    let disabled = quiz_entry("2025-01-10", "New Year Quiz", false);
    transport.respond(Method::Get, QUIZ_LIST, 200, json!([disabled]));
    let console = console(&transport);
    block_on(console.navigate(Page::QuizList));
    assert_eq!(rendered_list(&console).visible_rows()[0].toggle_label, Some("✅ Enable"));

    transport.clear_route(Method::Get, QUIZ_LIST);
    let enabled = quiz_entry("2025-01-10", "New Year Quiz", true);
    transport.respond(Method::Get, QUIZ_LIST, 200, json!([enabled]));
    transport.respond(
        Method::Post,
        "/api/quiz/2025-01-10/toggle",
        200,
        json!({"message": "enabled"}),
    );

    let outcome = block_on(console.toggle(ResourceKind::Quiz, "2025-01-10"));
    assert_eq!(outcome, Outcome::Done);
    let rows = rendered_list(&console).visible_rows();
    assert_eq!(rows[0].enabled, Some(true));
    assert_eq!(rows[0].toggle_label, Some("⏸️ Disable"));
    assert_eq!(transport.calls_to(Method::Get, QUIZ_LIST), 2);
    let notices = console.notices();
    assert_eq!(notices.last().map(|n| n.message.as_str()), Some("enabled"));
    assert!(!console.is_loading());
}

#[test]
fn failed_stats_read_shows_error_panel_with_back() {
    let transport = ScriptedTransport::new();
    script_quiz_detail(&transport, "2025-01-10");
    transport.clear_route(Method::Get, "/api/quiz/2025-01-10/stats");
    transport.respond(
        Method::Get,
        "/api/quiz/2025-01-10/stats",
        500,
        json!({"detail": "stats unavailable"}),
    );
    let console = console(&transport);
    block_on(console.navigate(Page::QuizDetail("2025-01-10".into())));

    let PageState::Errored { panel, .. } = console.page_state() else {
        panic!("expected the error panel");
    };
    assert_eq!(panel.message, "stats unavailable");
    assert_eq!(panel.back, Some(Page::QuizList));
}

#[test]
fn duplicate_navigates_to_new_detail_and_mentions_scheduler() {
    let transport = ScriptedTransport::new();
    script_quiz_detail(&transport, "2025-01-10");
    script_quiz_detail(&transport, "2025-02-01");
    transport.respond(
        Method::Post,
        "/api/quiz/duplicate",
        200,
        json!({"key": "2025-02-01", "scheduled": true}),
    );
    let console = console(&transport);
    block_on(console.navigate(Page::QuizDetail("2025-01-10".into())));

    console.open_form(ModalForm::duplicate(ResourceKind::Quiz, "2025-01-10", None));
    console.update_field(ModalId::Duplicate, "title", "Copy");
    console.update_field(ModalId::Duplicate, "starts_at_local", "2025-02-01T10:00");
    let outcome = block_on(console.submit_form(ModalId::Duplicate));
    assert_eq!(outcome, Outcome::Done);

    let sent = transport
        .calls()
        .into_iter()
        .find(|call| call.url == "/api/quiz/duplicate")
        .and_then(|call| call.body)
        .map(|body| serde_json::from_str::<Value>(&body).unwrap());
    assert_eq!(
        sent,
        Some(json!({
            "source_key": "2025-01-10",
            "starts_at_local": "2025-02-01T10:00",
            "title": "Copy"
        }))
    );
    assert_eq!(console.current_page(), Page::QuizDetail("2025-02-01".into()));
    assert!(console.modals().is_empty());
    let success = console
        .notices()
        .into_iter()
        .rfind(|notice| notice.kind == NoticeKind::Success)
        .map(|notice| notice.message);
    assert!(success.is_some_and(|message| message.contains("scheduler updated")));
}

#[test]
fn cancelled_delete_sends_nothing() {
    let transport = ScriptedTransport::new();
    let console = console(&transport);
    console.request_delete(DeleteTarget::Resource {
        kind: ResourceKind::Quiz,
        key: "2025-01-10".into(),
    });
    let prompt = console.confirmation().map(|c| c.prompt);
    assert_eq!(
        prompt.as_deref(),
        Some("Delete Quiz 2025-01-10? This cannot be undone.")
    );
    assert_eq!(block_on(console.resolve_confirmation(false)), Outcome::Cancelled);
    assert_eq!(transport.call_count(), 0);
    assert!(console.confirmation().is_none());
}

#[test]
fn confirmed_delete_on_detail_returns_to_list() {
    let transport = ScriptedTransport::new();
    script_quiz_detail(&transport, "2025-01-10");
    transport.respond(
        Method::Delete,
        "/api/quiz/2025-01-10",
        200,
        json!({"message": "Quiz deleted"}),
    );
    transport.respond(Method::Get, QUIZ_LIST, 200, json!([]));
    let console = console(&transport);
    block_on(console.navigate(Page::QuizDetail("2025-01-10".into())));

    console.request_delete(DeleteTarget::Resource {
        kind: ResourceKind::Quiz,
        key: "2025-01-10".into(),
    });
    assert_eq!(block_on(console.resolve_confirmation(true)), Outcome::Done);
    assert_eq!(transport.calls_to(Method::Delete, "/api/quiz/2025-01-10"), 1);
    assert_eq!(console.current_page(), Page::QuizList);
}

#[test]
fn invalid_form_stays_open_without_calls() {
    let transport = ScriptedTransport::new();
    let console = console(&transport);
    console.open_form(ModalForm::quiz_question("2025-01-10", None));
    console.update_field(ModalId::QuizQuestion, "question", "Which sign?");

    let outcome = block_on(console.submit_form(ModalId::QuizQuestion));
    let Outcome::Invalid(err) = outcome else {
        panic!("expected a validation failure");
    };
    assert_eq!(err.field, "option_1");
    assert_eq!(transport.call_count(), 0);
    let form = console.modals().pop().unwrap();
    assert_eq!(
        form.field("option_1").unwrap().error.as_deref(),
        Some("Option 1 must not be empty")
    );
}

#[test]
fn backend_rejection_keeps_modal_open_with_message() {
    let transport = ScriptedTransport::new();
    transport.respond(
        Method::Post,
        "/api/quiz/create",
        400,
        json!({"detail": "Quiz for this date already exists"}),
    );
    let console = console(&transport);
    console.open_form(ModalForm::create(ResourceKind::Quiz));
    console.update_field(ModalId::CreateResource, "title", "Spring");
    console.update_field(ModalId::CreateResource, "starts_at_local", "2025-03-01T12:00");

    let outcome = block_on(console.submit_form(ModalId::CreateResource));
    assert!(matches!(outcome, Outcome::Failed(ApiError::Status { status: 400, .. })));
    let form = console.modals().pop().unwrap();
    assert_eq!(form.error.as_deref(), Some("Quiz for this date already exists"));
    assert_eq!(console.notices().last().map(|n| n.kind), Some(NoticeKind::Error));
}

#[test]
fn reloading_without_mutation_is_stable() {
    let transport = ScriptedTransport::new();
    transport.respond(
        Method::Get,
        QUIZ_LIST,
        200,
        json!([quiz_entry("2025-01-10", "A", true), quiz_entry("2025-01-17", "B", false)]),
    );
    let console = console(&transport);
    block_on(console.navigate(Page::QuizList));
    let first = rendered_list(&console).visible_rows();
    block_on(console.reload());
    assert_eq!(rendered_list(&console).visible_rows(), first);
    assert_eq!(first.len(), 2);
    assert_eq!(
        first[1].actions.as_slice(),
        [RowAction::Open, RowAction::Toggle, RowAction::Delete]
    );
}

#[test]
fn search_filters_rendered_list_without_requests() {
    let transport = ScriptedTransport::new();
    transport.respond(
        Method::Get,
        "/api/raffle/list",
        200,
        json!([
            {"key": "2025-01-10", "title": "Winter", "enabled": true},
            {"key": "2025-02-14", "title": "Valentine", "enabled": true}
        ]),
    );
    let console = console(&transport);
    block_on(console.navigate(Page::RaffleList));
    let calls = transport.call_count();
    console.set_search("valen");
    assert_eq!(rendered_list(&console).visible_rows().len(), 1);
    console.set_search("");
    assert_eq!(rendered_list(&console).visible_rows().len(), 2);
    assert_eq!(transport.call_count(), calls);
}

#[test]
fn scheduler_conflict_surfaces_as_error_notice() {
    let transport = ScriptedTransport::new();
    transport.respond(
        Method::Post,
        "/api/scheduler/raffle/2025-01-10/run/close",
        409,
        json!({"detail": "Scheduler is not running"}),
    );
    let console = console(&transport);
    let outcome = block_on(console.run_action(
        ResourceKind::Raffle,
        "2025-01-10",
        zodiac_core::schema::RunAction::Close,
    ));
    assert!(matches!(outcome, Outcome::Failed(_)));
    let notice = console.notices().pop().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Scheduler is not running");
}

#[test]
fn observer_fires_on_changes() {
    let transport = ScriptedTransport::new();
    transport.respond(Method::Get, QUIZ_LIST, 200, json!([]));
    let console = console(&transport);
    let renders = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&renders);
    console.set_observer(move || counter.set(counter.get() + 1));
    block_on(console.navigate(Page::QuizList));
    assert!(renders.get() >= 2);
}

/// Yields once before every request so two operations can interleave.
struct Interleaving {
    inner: ScriptedTransport,
}

struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

impl Transport for Interleaving {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        YieldOnce(false).await;
        self.inner.send(request).await
    }
}

#[test]
fn double_toggle_sends_one_request() {
    let transport = ScriptedTransport::new();
    transport.respond(Method::Post, "/api/dice/d1/toggle", 200, json!({"enabled": false}));
    transport.respond(Method::Get, "/api/dice/list", 200, json!({"dice_events": []}));
    let console = Console::new(
        Interleaving {
            inner: transport.clone(),
        },
        ConsoleConfig::default(),
    );

    let (first, second) = block_on(futures::future::join(
        console.toggle(ResourceKind::Dice, "d1"),
        console.toggle(ResourceKind::Dice, "d1"),
    ));
    assert_eq!(first, Outcome::Done);
    assert_eq!(second, Outcome::Ignored);
    assert_eq!(transport.calls_to(Method::Post, "/api/dice/d1/toggle"), 1);
}

#[test]
fn slower_navigation_cannot_overwrite_newer_one() {
    let transport = ScriptedTransport::new();
    transport.respond(Method::Get, QUIZ_LIST, 200, json!([]));
    transport.respond(
        Method::Get,
        "/api/stats/errors?limit=10",
        200,
        json!({"errors": [], "count_last_hour": 0}),
    );
    let console = Console::new(
        Interleaving {
            inner: transport.clone(),
        },
        ConsoleConfig::default(),
    );
    block_on(futures::future::join(
        console.navigate(Page::QuizList),
        console.navigate(Page::ErrorLog),
    ));
    assert!(matches!(
        console.page_state(),
        PageState::Rendered {
            page: Page::ErrorLog,
            content: PageContent::ErrorLog(_)
        }
    ));
}

#[test]
fn detail_toolbar_matches_resource() {
    let transport = ScriptedTransport::new();
    script_quiz_detail(&transport, "2025-01-10");
    let console = console(&transport);
    block_on(console.navigate(Page::QuizDetail("2025-01-10".into())));
    let PageState::Rendered {
        content: PageContent::Detail(view),
        ..
    } = console.page_state()
    else {
        panic!("expected detail");
    };
    assert!(view.has_action(DetailAction::Duplicate));
    assert!(view.has_action(DetailAction::Toggle { enabled: true }));
    assert_eq!(view.sections[0].rows.len(), 1);
}

#[test]
fn dice_list_renders_wrapped_events() {
    let transport = ScriptedTransport::new();
    transport.respond(
        Method::Get,
        "/api/dice/list",
        200,
        json!({"dice_events": [
            {
                "dice_id": "fri-1",
                "title": "Friday dice",
                "starts_at": "2025-01-10T18:00:00+03:00",
                "starts_at_msk": "2025-01-10 18:00",
                "enabled": true
            },
            {
                "dice_id": "sat-2",
                "title": "",
                "starts_at": null,
                "starts_at_msk": null,
                "enabled": false
            },
        ]}),
    );
    let console = console(&transport);
    block_on(console.navigate(Page::DiceList));
    let PageState::Rendered {
        content: PageContent::List(list),
        ..
    } = console.page_state()
    else {
        panic!("expected dice list");
    };
    let rows = list.visible_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].label, "fri-1 — Friday dice");
    assert_eq!(rows[0].schedule.as_deref(), Some("2025-01-10 18:00"));
    assert_eq!(rows[1].label, "sat-2");
    assert_eq!(
        Page::detail_of(ResourceKind::Dice, &rows[0].key),
        Some(Page::DiceDetail("fri-1".into()))
    );
}

#[test]
fn expired_notice_leaves_the_others() {
    let transport = ScriptedTransport::new();
    let console = console(&transport);
    let saved = console.notify_success("saved");
    let failed = console.notify_error("boom");
    console.expire_notice(saved);
    let notices = console.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].id, failed);
    console.dismiss_notice(failed);
    console.expire_notice(failed);
    assert!(console.notices().is_empty());
}
