use std::future::Future;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use zodiac_core::schema::RunAction;
use zodiac_core::{
    Console, DeleteTarget, ModalForm, ModalId, NoticeId, Page, ResourceKind, Transport,
};

/// Every operator action the UI can trigger. Async operations are spawned on
/// the browser's task queue; the console reports progress through its observer.
#[derive(Clone, PartialEq, Default)]
pub struct AppHandlers {
    pub navigate: Callback<Page>,
    pub reload: Callback<()>,
    pub filter: Callback<String>,
    pub search_users: Callback<String>,
    pub toggle: Callback<(ResourceKind, String)>,
    pub request_delete: Callback<DeleteTarget>,
    pub resolve_confirmation: Callback<bool>,
    pub open_form: Callback<ModalForm>,
    pub close_form: Callback<ModalId>,
    pub update_field: Callback<(ModalId, String, String)>,
    pub submit_form: Callback<ModalId>,
    pub moderate: Callback<(String, i64, bool)>,
    pub reschedule: Callback<(ResourceKind, String)>,
    pub run_action: Callback<(ResourceKind, String, RunAction)>,
    pub lookup_user_tickets: Callback<i64>,
    pub check_ticket: Callback<i64>,
    pub dismiss_notice: Callback<NoticeId>,
    pub expire_notice: Callback<NoticeId>,
}

impl AppHandlers {
    #[must_use]
    pub fn new<T: Transport + 'static>(console: &Console<T>) -> Self {
        Self {
            navigate: spawned(console, |console, page: Page| async move {
                console.navigate(page).await;
            }),
            reload: spawned(console, |console, ()| async move { console.reload().await }),
            filter: immediate(console, |console, query: String| console.set_search(&query)),
            search_users: spawned(console, |console, query: String| async move {
                console.search_users(&query).await;
            }),
            toggle: spawned(console, |console, (kind, key): (ResourceKind, String)| async move {
                let _ = console.toggle(kind, &key).await;
            }),
            request_delete: immediate(console, |console, target: DeleteTarget| {
                console.request_delete(target);
            }),
            resolve_confirmation: spawned(console, |console, accepted: bool| async move {
                let _ = console.resolve_confirmation(accepted).await;
            }),
            open_form: immediate(console, |console, form: ModalForm| console.open_form(form)),
            close_form: immediate(console, |console, id: ModalId| console.close_form(id)),
            update_field: immediate(
                console,
                |console, (id, name, value): (ModalId, String, String)| {
                    console.update_field(id, &name, value);
                },
            ),
            submit_form: spawned(console, |console, id: ModalId| async move {
                let _ = console.submit_form(id).await;
            }),
            moderate: spawned(
                console,
                |console, (date, user_id, approve): (String, i64, bool)| async move {
                    let _ = console.moderate(&date, user_id, approve).await;
                },
            ),
            reschedule: spawned(
                console,
                |console, (kind, key): (ResourceKind, String)| async move {
                    let _ = console.reschedule(kind, &key).await;
                },
            ),
            run_action: spawned(
                console,
                |console, (kind, key, action): (ResourceKind, String, RunAction)| async move {
                    let _ = console.run_action(kind, &key, action).await;
                },
            ),
            lookup_user_tickets: spawned(console, |console, user_id: i64| async move {
                let _ = console.lookup_user_tickets(user_id).await;
            }),
            check_ticket: spawned(console, |console, ticket_number: i64| async move {
                let _ = console.check_ticket(ticket_number).await;
            }),
            dismiss_notice: immediate(console, |console, id: NoticeId| {
                console.dismiss_notice(id);
            }),
            expire_notice: immediate(console, |console, id: NoticeId| {
                console.expire_notice(id);
            }),
        }
    }
}

fn spawned<T, A, F, Fut>(console: &Console<T>, run: F) -> Callback<A>
where
    T: Transport + 'static,
    A: 'static,
    F: Fn(Console<T>, A) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let console = console.clone();
    Callback::from(move |arg: A| spawn_local(run(console.clone(), arg)))
}

fn immediate<T, A, F>(console: &Console<T>, run: F) -> Callback<A>
where
    T: Transport + 'static,
    A: 'static,
    F: Fn(&Console<T>, A) + 'static,
{
    let console = console.clone();
    Callback::from(move |arg: A| run(&console, arg))
}
