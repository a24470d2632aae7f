//! Page identities and the generation-guarded page state machine.
//!
//! Every navigation bumps a generation counter. A load that completes after a
//! newer navigation started carries a stale ticket and is dropped, so the last
//! navigation always wins regardless of response order.

use crate::error::ApiError;
use crate::pages::PageContent;
use crate::resources::ResourceKind;

pub const BACK_TO_LIST_LABEL: &str = "⬅️ Back to list";
pub const RETRY_LABEL: &str = "🔄 Retry";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    QuizList,
    QuizDetail(String),
    QuizPreview(String),
    RaffleList,
    RaffleDetail(String),
    RafflePreview(String),
    DiceList,
    DiceDetail(String),
    Users { page: u32, search: String },
    UserDetail(i64),
    Tickets,
    Scheduler,
    ErrorLog,
}

impl Page {
    /// Top-level sections shown in the navigation bar.
    #[must_use]
    pub fn nav() -> [Self; 8] {
        [
            Self::Dashboard,
            Self::QuizList,
            Self::RaffleList,
            Self::DiceList,
            Self::users(),
            Self::Tickets,
            Self::Scheduler,
            Self::ErrorLog,
        ]
    }

    #[must_use]
    pub const fn users() -> Self {
        Self::Users {
            page: 0,
            search: String::new(),
        }
    }

    #[must_use]
    pub fn list_of(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Quiz => Self::QuizList,
            ResourceKind::Raffle => Self::RaffleList,
            ResourceKind::Dice => Self::DiceList,
            ResourceKind::User => Self::users(),
            ResourceKind::Ticket => Self::Tickets,
        }
    }

    /// Detail page of one resource; `None` when `key` cannot name one.
    #[must_use]
    pub fn detail_of(kind: ResourceKind, key: &str) -> Option<Self> {
        match kind {
            ResourceKind::Quiz => Some(Self::QuizDetail(key.to_string())),
            ResourceKind::Raffle => Some(Self::RaffleDetail(key.to_string())),
            ResourceKind::Dice => Some(Self::DiceDetail(key.to_string())),
            ResourceKind::User => key.parse().ok().map(Self::UserDetail),
            ResourceKind::Ticket => None,
        }
    }

    #[must_use]
    pub fn preview_of(kind: ResourceKind, key: &str) -> Option<Self> {
        match kind {
            ResourceKind::Quiz => Some(Self::QuizPreview(key.to_string())),
            ResourceKind::Raffle => Some(Self::RafflePreview(key.to_string())),
            _ => None,
        }
    }

    /// Where the back control leads.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        match self {
            Self::Dashboard => None,
            Self::QuizDetail(_) => Some(Self::QuizList),
            Self::QuizPreview(date) => Some(Self::QuizDetail(date.clone())),
            Self::RaffleDetail(_) => Some(Self::RaffleList),
            Self::RafflePreview(date) => Some(Self::RaffleDetail(date.clone())),
            Self::DiceDetail(_) => Some(Self::DiceList),
            Self::UserDetail(_) => Some(Self::users()),
            Self::QuizList
            | Self::RaffleList
            | Self::DiceList
            | Self::Users { .. }
            | Self::Tickets
            | Self::Scheduler
            | Self::ErrorLog => Some(Self::Dashboard),
        }
    }

    /// Whether this page shows the same section as `other` for nav highlighting.
    #[must_use]
    pub fn same_section(&self, other: &Self) -> bool {
        let section = |page: &Self| match page {
            Self::QuizList | Self::QuizDetail(_) | Self::QuizPreview(_) => 1,
            Self::RaffleList | Self::RaffleDetail(_) | Self::RafflePreview(_) => 2,
            Self::DiceList | Self::DiceDetail(_) => 3,
            Self::Users { .. } | Self::UserDetail(_) => 4,
            Self::Tickets => 5,
            Self::Scheduler => 6,
            Self::ErrorLog => 7,
            Self::Dashboard => 0,
        };
        section(self) == section(other)
    }

    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Dashboard => "📊 Dashboard".to_string(),
            Self::QuizList => "🧩 Quizzes".to_string(),
            Self::QuizDetail(date) => format!("🧩 Quiz {date}"),
            Self::QuizPreview(date) => format!("👁️ Quiz {date} preview"),
            Self::RaffleList => "🎟️ Raffles".to_string(),
            Self::RaffleDetail(date) => format!("🎟️ Raffle {date}"),
            Self::RafflePreview(date) => format!("👁️ Raffle {date} preview"),
            Self::DiceList => "🎲 Dice events".to_string(),
            Self::DiceDetail(id) => format!("🎲 Dice {id}"),
            Self::Users { .. } => "👥 Users".to_string(),
            Self::UserDetail(id) => format!("👤 User {id}"),
            Self::Tickets => "🎫 Tickets".to_string(),
            Self::Scheduler => "⏱️ Scheduler".to_string(),
            Self::ErrorLog => "🚨 Errors".to_string(),
        }
    }
}

/// Shown in place of page content when a load fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPanel {
    pub message: String,
    pub retry: Page,
    pub back: Option<Page>,
}

impl ErrorPanel {
    #[must_use]
    pub fn for_failure(page: &Page, error: &ApiError) -> Self {
        Self {
            message: error.to_string(),
            retry: page.clone(),
            back: page.parent(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Idle,
    Loading(Page),
    Rendered { page: Page, content: PageContent },
    Errored { page: Page, panel: ErrorPanel },
}

/// Proof that a load was started; only the newest ticket may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Router {
    current: Page,
    generation: u64,
    state: PageState,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Page::Dashboard,
            generation: 0,
            state: PageState::Idle,
        }
    }

    /// Start navigating to `page`; the previous content is replaced by a
    /// loading placeholder immediately.
    pub fn begin(&mut self, page: Page) -> LoadTicket {
        self.generation += 1;
        self.current = page.clone();
        self.state = PageState::Loading(page);
        LoadTicket(self.generation)
    }

    /// Install the outcome of a load. Stale tickets are ignored and reported
    /// as `false`.
    pub fn finish(&mut self, ticket: LoadTicket, outcome: Result<PageContent, ApiError>) -> bool {
        if ticket.0 != self.generation {
            log::debug!(
                "dropping stale load of {:?} (generation {} < {})",
                self.current,
                ticket.0,
                self.generation
            );
            return false;
        }
        let page = self.current.clone();
        self.state = match outcome {
            Ok(content) => PageState::Rendered { page, content },
            Err(error) => {
                let panel = ErrorPanel::for_failure(&page, &error);
                PageState::Errored { page, panel }
            }
        };
        true
    }

    #[must_use]
    pub const fn current(&self) -> &Page {
        &self.current
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn state(&self) -> &PageState {
        &self.state
    }

    /// Content of the rendered page, for local edits such as search.
    pub fn content_mut(&mut self) -> Option<&mut PageContent> {
        match &mut self.state {
            PageState::Rendered { content, .. } => Some(content),
            _ => None,
        }
    }

    #[must_use]
    pub const fn content(&self) -> Option<&PageContent> {
        match &self.state {
            PageState::Rendered { content, .. } => Some(content),
            _ => None,
        }
    }
}
