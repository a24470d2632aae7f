use crate::api::AdminApi;
use crate::detail::StatTile;
use crate::error::ApiError;
use crate::http::Transport;
use crate::schema::{DailyReport, ErrorLog, HealthReport, SystemStats, WeeklyReport};

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub system: SystemStats,
    pub daily: DailyReport,
    pub weekly: WeeklyReport,
    pub health: HealthReport,
    pub recent_errors: ErrorLog,
}

impl DashboardView {
    #[must_use]
    pub fn health_label(&self) -> String {
        let scheduler = match self.health.scheduler_running {
            Some(true) => ", scheduler running",
            Some(false) => ", scheduler stopped",
            None => "",
        };
        let icon = if self.health.is_ok() { "🟢" } else { "🔴" };
        format!("{icon} {}{scheduler}", self.health.status)
    }

    #[must_use]
    pub fn system_tiles(&self) -> Vec<StatTile> {
        let users = &self.system.users;
        let tickets = &self.system.tickets;
        vec![
            StatTile::new("Users", users.total),
            StatTile::new("Subscribed", users.subscribed),
            StatTile::new("Active 24h", users.active_24h),
            StatTile::new("Tickets", tickets.total),
            StatTile::new("From quizzes", tickets.from_quiz),
            StatTile::new("From raffles", tickets.from_raffle),
        ]
    }

    #[must_use]
    pub fn daily_tiles(&self) -> Vec<StatTile> {
        vec![
            StatTile::new("New users", self.daily.new_users),
            StatTile::new("Tickets issued", self.daily.tickets.total),
            StatTile::new("Quiz players", self.daily.activity.quiz_participants),
            StatTile::new("Raffle players", self.daily.activity.raffle_participants),
        ]
    }

    #[must_use]
    pub fn weekly_tiles(&self) -> Vec<StatTile> {
        let weekly = &self.weekly;
        vec![
            StatTile::new(
                "New users",
                format!("{} ({:.1}/day)", weekly.new_users.total, weekly.new_users.avg_per_day),
            ),
            StatTile::new(
                "Tickets",
                format!("{} ({:.1}/day)", weekly.tickets.total, weekly.tickets.avg_per_day),
            ),
            StatTile::new("Quiz players", weekly.activity.quiz_participants),
            StatTile::new("Raffle players", weekly.activity.raffle_participants),
        ]
    }
}

/// # Errors
///
/// Fails with the first error of the concurrent reads.
pub async fn load_dashboard<T: Transport>(
    api: &AdminApi<T>,
    error_limit: u32,
) -> Result<DashboardView, ApiError> {
    let (system, daily, weekly, health, recent_errors) = futures::try_join!(
        api.system_stats(),
        api.daily_report(),
        api.weekly_report(),
        api.health(),
        api.recent_errors(error_limit)
    )?;
    Ok(DashboardView {
        system,
        daily,
        weekly,
        health,
        recent_errors,
    })
}
