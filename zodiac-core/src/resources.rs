//! The administrable resource types and their URL segments.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Quiz,
    Raffle,
    Dice,
    User,
    Ticket,
}

impl ResourceKind {
    /// Path segment of the resource's endpoints.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Quiz => "quiz",
            Self::Raffle => "raffle",
            Self::Dice => "dice",
            Self::User => "users",
            Self::Ticket => "tickets",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quiz => "Quiz",
            Self::Raffle => "Raffle",
            Self::Dice => "Dice event",
            Self::User => "User",
            Self::Ticket => "Ticket",
        }
    }

    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Quiz => "Quizzes",
            Self::Raffle => "Raffles",
            Self::Dice => "Dice events",
            Self::User => "Users",
            Self::Ticket => "Tickets",
        }
    }

    /// Collections with an enabled flag and toggle/delete row actions.
    #[must_use]
    pub const fn is_toggleable(self) -> bool {
        matches!(self, Self::Quiz | Self::Raffle | Self::Dice)
    }

    /// Resources whose jobs live in the bot scheduler and can be rescheduled.
    #[must_use]
    pub const fn is_scheduled(self) -> bool {
        matches!(self, Self::Quiz | Self::Raffle)
    }
}

#[cfg(test)]
mod tests {
    use super::ResourceKind;

    #[test]
    fn only_events_toggle_and_schedule() {
        for kind in [ResourceKind::Quiz, ResourceKind::Raffle, ResourceKind::Dice] {
            assert!(kind.is_toggleable());
        }
        assert!(!ResourceKind::User.is_toggleable());
        assert!(ResourceKind::Quiz.is_scheduled());
        assert!(!ResourceKind::Dice.is_scheduled());
    }
}
