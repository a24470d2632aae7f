use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemUsers {
    pub total: u64,
    pub subscribed: u64,
    pub active_24h: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemTickets {
    pub total: u64,
    pub from_quiz: u64,
    pub from_raffle: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemStats {
    pub users: SystemUsers,
    pub tickets: SystemTickets,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivity {
    pub quiz_participants: u64,
    pub raffle_participants: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReport {
    pub date: String,
    pub new_users: u64,
    pub tickets: SystemTickets,
    pub activity: DailyActivity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyNewUsers {
    pub total: u64,
    pub avg_per_day: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTickets {
    pub total: u64,
    pub from_quiz: u64,
    pub from_raffle: u64,
    pub avg_per_day: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReport {
    pub period: ReportPeriod,
    pub new_users: WeeklyNewUsers,
    pub tickets: WeeklyTickets,
    pub activity: DailyActivity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub database: Option<bool>,
    #[serde(default)]
    pub scheduler_running: Option<bool>,
    #[serde(default)]
    pub errors_last_hour: Option<u64>,
}

impl HealthReport {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub time: String,
    pub message: String,
    #[serde(default)]
    pub traceback: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLog {
    pub errors: Vec<ErrorEntry>,
    #[serde(default)]
    pub count_last_hour: Option<u64>,
}
