use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub zodiac: Option<i32>,
    pub subscribed: bool,
    pub registration_completed: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl UserSummary {
    /// `@username`, else the first name, else nothing.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        self.username
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(|name| format!("@{name}"))
            .or_else(|| self.first_name.clone().filter(|name| !name.is_empty()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersPage {
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
    pub users: Vec<UserSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(flatten)]
    pub summary: UserSummary,
    #[serde(default)]
    pub registration_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersOverview {
    pub total: u64,
    pub subscribed: u64,
    pub not_subscribed: u64,
    pub registered: u64,
    pub not_registered: u64,
}

#[cfg(test)]
mod tests {
    use super::UserSummary;

    #[test]
    fn display_name_prefers_username() {
        let mut user = UserSummary {
            id: 7,
            username: Some("stargazer".into()),
            first_name: Some("Vera".into()),
            zodiac: None,
            subscribed: true,
            registration_completed: false,
            created_at: None,
        };
        assert_eq!(user.display_name().as_deref(), Some("@stargazer"));
        user.username = None;
        assert_eq!(user.display_name().as_deref(), Some("Vera"));
        user.first_name = None;
        assert_eq!(user.display_name(), None);
    }
}
