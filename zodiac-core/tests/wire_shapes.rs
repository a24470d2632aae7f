use futures::executor::block_on;
use serde_json::json;
use zodiac_core::schema::{TicketCheck, UsersPage, WeeklyReport};
use zodiac_core::{
    AdminApi, ApiError, ConsoleConfig, HttpClient, Method, ScriptedTransport, TicketLookup,
    TicketsView,
};

fn api(transport: &ScriptedTransport) -> AdminApi<ScriptedTransport> {
    AdminApi::new(HttpClient::new(transport.clone(), &ConsoleConfig::default()))
}

#[test]
fn users_page_decodes_backend_listing() {
    let page: UsersPage = serde_json::from_value(json!({
        "total": 2,
        "skip": 0,
        "limit": 50,
        "users": [
            {"id": 1, "username": "ann", "first_name": "Ann", "zodiac": 5,
             "subscribed": true, "registration_completed": true,
             "created_at": "2025-01-01T10:00:00"},
            {"id": 2, "username": null, "first_name": null, "zodiac": null,
             "subscribed": false, "registration_completed": false, "created_at": null}
        ]
    }))
    .unwrap();
    assert_eq!(page.users[0].display_name().as_deref(), Some("@ann"));
    assert_eq!(page.users[1].display_name(), None);
}

#[test]
fn weekly_report_keeps_averages() {
    let report: WeeklyReport = serde_json::from_value(json!({
        "period": {"from": "2025-01-04", "to": "2025-01-10"},
        "new_users": {"total": 14, "avg_per_day": 2.0},
        "tickets": {"total": 21, "from_quiz": 15, "from_raffle": 6, "avg_per_day": 3.0},
        "activity": {"quiz_participants": 30, "raffle_participants": 12}
    }))
    .unwrap();
    assert!((report.new_users.avg_per_day - 2.0).abs() < f64::EPSILON);
    assert_eq!(report.tickets.from_raffle, 6);
}

#[test]
fn ticket_check_reports_first_holder() {
    let check: TicketCheck = serde_json::from_value(json!({
        "ticket_number": 1042,
        "tickets": [
            {"user_id": 7, "source": "quiz", "date": "2025-01-10",
             "time": "2025-01-10T12:03:11", "time_display": "10.01.2025 12:03:11",
             "user": {"id": 7, "username": "leo", "first_name": null,
                      "registration_status_display": "registered"}}
        ],
        "first_user": {"user_id": 7, "source": "quiz"},
        "same_time": false
    }))
    .unwrap();
    assert_eq!(check.first_user.map(|holder| holder.user_id), Some(7));
    assert_eq!(check.tickets[0].user.as_ref().and_then(|u| u.username.as_deref()), Some("leo"));
}

#[test]
fn missing_required_field_fails_fast() {
    let transport = ScriptedTransport::new();
    transport.respond(
        Method::Get,
        "/api/tickets/stats",
        200,
        json!({"total": 3, "from_quiz": 2, "from_raffle": 1}),
    );
    let err = block_on(api(&transport).ticket_stats()).unwrap_err();
    assert!(matches!(
        err,
        ApiError::UnexpectedShape { ref endpoint, .. } if endpoint == "tickets/stats"
    ));
}

#[test]
fn tickets_page_tiles_and_duplicate_labels() {
    let transport = ScriptedTransport::new();
    transport.respond(
        Method::Get,
        "/api/tickets/stats",
        200,
        json!({"total": 40, "from_quiz": 30, "from_raffle": 10, "min": 1000, "max": 1039,
               "duplicates": {"in_quiz": 1, "in_raffle": 0, "cross_table": 2}}),
    );
    transport.respond(
        Method::Get,
        "/api/tickets/duplicates",
        200,
        json!({"duplicates": [
            {"ticket_number": 1005, "count": 2, "user_ids": [3, 9], "source": "cross_table"}
        ]}),
    );
    let view = block_on(zodiac_core::pages::load_tickets(&api(&transport))).unwrap();
    let tiles = view.tiles();
    assert_eq!(tiles[3].value, "1000–1039");
    assert_eq!(tiles[4].value, "3");
    assert_eq!(
        TicketsView::duplicate_label(&view.duplicates[0]),
        "#1005 ×2 (quiz + raffle): 3, 9"
    );
    assert!(!matches!(view.lookup, Some(TicketLookup::User(_))));
}
