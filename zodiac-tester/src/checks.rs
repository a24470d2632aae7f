//! Catalog of smoke checks and the runner that drives them through a
//! [`Console`].
//!
//! Each check opens one navigation section exactly the way the web front-end
//! does and passes when the page renders. In deep mode the first row of a
//! list is followed into its detail page (and preview, where one exists).

use std::time::{Duration, Instant};

use serde::Serialize;
use zodiac_core::{Console, Page, PageContent, PageState, Transport};

use crate::util::{millis, split_csv};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Dashboard,
    Quizzes,
    Raffles,
    Dice,
    Users,
    Tickets,
    Scheduler,
    Errors,
}

impl Check {
    pub const ALL: [Self; 8] = [
        Self::Dashboard,
        Self::Quizzes,
        Self::Raffles,
        Self::Dice,
        Self::Users,
        Self::Tickets,
        Self::Scheduler,
        Self::Errors,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Quizzes => "quizzes",
            Self::Raffles => "raffles",
            Self::Dice => "dice",
            Self::Users => "users",
            Self::Tickets => "tickets",
            Self::Scheduler => "scheduler",
            Self::Errors => "errors",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Dashboard => "System, daily and weekly stats, health and latest errors",
            Self::Quizzes => "Quiz collection listing",
            Self::Raffles => "Raffle collection listing",
            Self::Dice => "Dice event listing",
            Self::Users => "First page of users with overview stats",
            Self::Tickets => "Ticket stats and duplicate report",
            Self::Scheduler => "Scheduler jobs matched to quizzes and raffles",
            Self::Errors => "Recent error log",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|check| check.key().eq_ignore_ascii_case(key))
    }

    pub fn page(self) -> Page {
        match self {
            Self::Dashboard => Page::Dashboard,
            Self::Quizzes => Page::QuizList,
            Self::Raffles => Page::RaffleList,
            Self::Dice => Page::DiceList,
            Self::Users => Page::users(),
            Self::Tickets => Page::Tickets,
            Self::Scheduler => Page::Scheduler,
            Self::Errors => Page::ErrorLog,
        }
    }
}

/// Resolve the `--checks` argument. `all` expands to the whole catalog;
/// unknown names are returned separately so the caller can warn about them.
pub fn expand_checks(arg: &str) -> (Vec<Check>, Vec<String>) {
    let mut checks = Vec::new();
    let mut unknown = Vec::new();
    for name in split_csv(arg) {
        if name.eq_ignore_ascii_case("all") {
            for check in Check::ALL {
                if !checks.contains(&check) {
                    checks.push(check);
                }
            }
        } else if let Some(check) = Check::parse(&name) {
            if !checks.contains(&check) {
                checks.push(check);
            }
        } else {
            unknown.push(name);
        }
    }
    (checks, unknown)
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub check_name: String,
    pub passed: bool,
    /// One line per page that rendered.
    pub pages: Vec<String>,
    pub failures: Vec<String>,
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
}

fn serialize_millis<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(millis(*duration))
}

pub struct CheckRunner<T: Transport> {
    console: Console<T>,
    deep: bool,
    verbose: bool,
}

impl<T: Transport> CheckRunner<T> {
    pub const fn new(console: Console<T>, deep: bool, verbose: bool) -> Self {
        Self {
            console,
            deep,
            verbose,
        }
    }

    pub async fn run_all(&self, checks: &[Check]) -> Vec<CheckResult> {
        let mut results = Vec::with_capacity(checks.len());
        for &check in checks {
            results.push(self.run(check).await);
        }
        results
    }

    pub async fn run(&self, check: Check) -> CheckResult {
        let start = Instant::now();
        let mut pages = Vec::new();
        let mut failures = Vec::new();

        if let Some(content) = self.visit(check.page(), &mut pages, &mut failures).await
            && self.deep
        {
            for follow in follow_ups(&content) {
                self.visit(follow, &mut pages, &mut failures).await;
            }
        }

        let result = CheckResult {
            check_name: check.key().to_string(),
            passed: failures.is_empty(),
            pages,
            failures,
            duration: start.elapsed(),
        };
        if result.passed {
            log::info!("check {} passed in {:?}", result.check_name, result.duration);
        } else {
            log::warn!("check {} failed: {:?}", result.check_name, result.failures);
        }
        result
    }

    async fn visit(
        &self,
        page: Page,
        pages: &mut Vec<String>,
        failures: &mut Vec<String>,
    ) -> Option<PageContent> {
        let title = page.title();
        self.console.navigate(page).await;
        match self.console.page_state() {
            PageState::Rendered { content, .. } => {
                let line = format!("{title}: {}", summarize(&content));
                if self.verbose {
                    println!("   ↳ {line}");
                }
                pages.push(line);
                Some(content)
            }
            PageState::Errored { panel, .. } => {
                failures.push(format!("{title}: {}", panel.message));
                None
            }
            PageState::Loading(_) | PageState::Idle => {
                failures.push(format!("{title}: load never completed"));
                None
            }
        }
    }
}

/// Pages reachable from the first row of a rendered list.
fn follow_ups(content: &PageContent) -> Vec<Page> {
    let list = match content {
        PageContent::List(list) => list,
        PageContent::Users(users) => &users.list,
        _ => return Vec::new(),
    };
    let Some(first) = list.items().first() else {
        return Vec::new();
    };
    let kind = list.kind();
    [
        Page::detail_of(kind, &first.key),
        Page::preview_of(kind, &first.key),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// One-line description of what a page showed.
pub fn summarize(content: &PageContent) -> String {
    match content {
        PageContent::Dashboard(view) => format!(
            "{} users, {} tickets, {}",
            view.system.users.total,
            view.system.tickets.total,
            view.health_label()
        ),
        PageContent::List(list) => {
            format!("{} {}", list.items().len(), list.kind().plural().to_lowercase())
        }
        PageContent::Detail(view) => {
            let name = view.title.clone().unwrap_or_else(|| view.key.clone());
            format!("{} \"{name}\", {} sections", view.kind.label(), view.sections.len())
        }
        PageContent::Preview(preview) => format!("{} cards", preview.cards.len()),
        PageContent::Users(users) => format!(
            "{} users, page {} of {}",
            users.pager.total,
            users.pager.page + 1,
            users.pager.total_pages().max(1)
        ),
        PageContent::Tickets(tickets) => format!(
            "{} tickets, {} duplicates",
            tickets.stats.total,
            tickets.duplicates.len()
        ),
        PageContent::Scheduler(view) => format!(
            "{}, {} jobs",
            if view.running { "running" } else { "stopped" },
            view.jobs.len()
        ),
        PageContent::ErrorLog(log) => match log.count_last_hour {
            Some(hour) => format!("{} recent errors, {hour} in the last hour", log.errors.len()),
            None => format!("{} recent errors", log.errors.len()),
        },
    }
}
