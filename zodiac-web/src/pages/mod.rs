pub mod dashboard;
pub mod error_log;
pub mod preview;
pub mod scheduler;
pub mod tickets;
pub mod users;

use crate::app::view::AppHandlers;
use crate::components::daisy_ui::loading::PageLoading;
use crate::components::detail_panel::DetailPanel;
use crate::components::error_panel::ErrorPanelView;
use crate::components::resource_list::ResourceListView;
use yew::prelude::*;
use zodiac_core::{ActionId, PageContent, PageState};

pub use dashboard::DashboardPage;
pub use error_log::ErrorLogPage;
pub use preview::PreviewPage;
pub use scheduler::SchedulerPage;
pub use tickets::TicketsPage;
pub use users::UsersPage;

/// Body of `<main>` for the router's current state.
pub fn render_page_state(state: &PageState, pending: &[ActionId], handlers: &AppHandlers) -> Html {
    match state {
        PageState::Idle => Html::default(),
        PageState::Loading(page) => html! { <PageLoading title={AttrValue::from(page.title())} /> },
        PageState::Errored { panel, .. } => html! {
            <ErrorPanelView panel={panel.clone()} on_navigate={handlers.navigate.clone()} />
        },
        PageState::Rendered { content, .. } => render_content(content, pending, handlers),
    }
}

fn render_content(content: &PageContent, pending: &[ActionId], handlers: &AppHandlers) -> Html {
    let pending = pending.to_vec();
    let handlers = handlers.clone();
    match content {
        PageContent::Dashboard(view) => html! {
            <DashboardPage view={(**view).clone()} handlers={handlers} />
        },
        PageContent::List(list) => html! {
            <ResourceListView list={list.clone()} pending={pending} handlers={handlers} />
        },
        PageContent::Detail(view) => html! {
            <DetailPanel view={view.clone()} pending={pending} handlers={handlers} />
        },
        PageContent::Preview(view) => html! {
            <PreviewPage view={view.clone()} handlers={handlers} />
        },
        PageContent::Users(view) => html! {
            <UsersPage view={view.clone()} handlers={handlers} />
        },
        PageContent::Tickets(view) => html! {
            <TicketsPage view={view.clone()} pending={pending} handlers={handlers} />
        },
        PageContent::Scheduler(view) => html! {
            <SchedulerPage view={view.clone()} pending={pending} handlers={handlers} />
        },
        PageContent::ErrorLog(log) => html! {
            <ErrorLogPage log={log.clone()} handlers={handlers} />
        },
    }
}
