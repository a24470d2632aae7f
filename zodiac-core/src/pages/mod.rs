//! Page content and the loader that builds it for each [`Page`].

mod dashboard;
mod scheduler;
mod tickets;
mod users;

pub use dashboard::{DashboardView, load_dashboard};
pub use scheduler::{ScheduledEntry, SchedulerView, load_scheduler};
pub use tickets::{TicketLookup, TicketsView, load_tickets};
pub use users::{Pager, UsersView, load_users};

use crate::api::AdminApi;
use crate::config::ConsoleConfig;
use crate::detail::{
    DetailView, load_dice_detail, load_quiz_detail, load_raffle_detail, load_user_detail,
};
use crate::error::ApiError;
use crate::http::Transport;
use crate::list::ResourceList;
use crate::preview::{PreviewView, load_quiz_preview, load_raffle_preview};
use crate::resources::ResourceKind;
use crate::router::Page;
use crate::schema::ErrorLog;

/// Everything a rendered page needs, already decoded and shaped for display.
#[derive(Debug, Clone, PartialEq)]
pub enum PageContent {
    Dashboard(Box<DashboardView>),
    List(ResourceList),
    Detail(DetailView),
    Preview(PreviewView),
    Users(UsersView),
    Tickets(TicketsView),
    Scheduler(SchedulerView),
    ErrorLog(ErrorLog),
}

impl PageContent {
    /// Client-side search over whatever list the page shows.
    pub fn set_query(&mut self, query: &str) -> bool {
        match self {
            Self::List(list) => list.set_query(query),
            Self::Users(users) => users.list.set_query(query),
            _ => return false,
        }
        true
    }
}

async fn load_list<T: Transport>(
    api: &AdminApi<T>,
    kind: ResourceKind,
) -> Result<PageContent, ApiError> {
    let entries = api.collection(kind).await?;
    Ok(PageContent::List(ResourceList::from_entries(kind, entries)))
}

/// Fetch and shape the content of `page`.
///
/// # Errors
///
/// Any failed read fails the whole page.
pub async fn load_page<T: Transport>(
    api: &AdminApi<T>,
    config: &ConsoleConfig,
    page: &Page,
) -> Result<PageContent, ApiError> {
    match page {
        Page::Dashboard => load_dashboard(api, config.error_log_limit)
            .await
            .map(|view| PageContent::Dashboard(Box::new(view))),
        Page::QuizList => load_list(api, ResourceKind::Quiz).await,
        Page::RaffleList => load_list(api, ResourceKind::Raffle).await,
        Page::DiceList => load_list(api, ResourceKind::Dice).await,
        Page::QuizDetail(date) => load_quiz_detail(api, date).await.map(PageContent::Detail),
        Page::RaffleDetail(date) => load_raffle_detail(api, date).await.map(PageContent::Detail),
        Page::DiceDetail(id) => load_dice_detail(api, id).await.map(PageContent::Detail),
        Page::UserDetail(id) => load_user_detail(api, *id).await.map(PageContent::Detail),
        Page::QuizPreview(date) => load_quiz_preview(api, date).await.map(PageContent::Preview),
        Page::RafflePreview(date) => load_raffle_preview(api, date)
            .await
            .map(PageContent::Preview),
        Page::Users { page, search } => {
            load_users(api, *page, search, config.users_page_size)
                .await
                .map(PageContent::Users)
        }
        Page::Tickets => load_tickets(api).await.map(PageContent::Tickets),
        Page::Scheduler => load_scheduler(api).await.map(PageContent::Scheduler),
        Page::ErrorLog => api
            .recent_errors(config.error_log_limit)
            .await
            .map(PageContent::ErrorLog),
    }
}
