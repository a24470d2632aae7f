use crate::resources::ResourceKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerJob {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub next_run_time: Option<String>,
    #[serde(default)]
    pub trigger: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerJobs {
    pub running: bool,
    pub jobs: Vec<SchedulerJob>,
}

/// Manual scheduler actions an operator can fire for one quiz or raffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunAction {
    Announce,
    Remind,
    /// Quiz only: mark users who never answered.
    Mark,
    /// Raffle only: close the raffle now.
    Close,
}

impl RunAction {
    #[must_use]
    pub const fn as_path(self) -> &'static str {
        match self {
            Self::Announce => "announce",
            Self::Remind => "remind",
            Self::Mark => "mark",
            Self::Close => "close",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Announce => "📣 Announce now",
            Self::Remind => "⏰ Send reminder",
            Self::Mark => "🏷️ Mark non-participants",
            Self::Close => "🔒 Close now",
        }
    }

    #[must_use]
    pub const fn available_for(kind: ResourceKind) -> &'static [Self] {
        match kind {
            ResourceKind::Quiz => &[Self::Announce, Self::Remind, Self::Mark],
            ResourceKind::Raffle => &[Self::Announce, Self::Remind, Self::Close],
            _ => &[],
        }
    }
}
