//! Searchable resource lists with per-row actions.

use crate::resources::ResourceKind;
use crate::schema::{CollectionEntry, UserSummary};
use smallvec::SmallVec;

pub const ENABLE_LABEL: &str = "✅ Enable";
pub const DISABLE_LABEL: &str = "⏸️ Disable";
pub const DELETE_LABEL: &str = "🗑️ Delete";

/// Label of the toggle control for a row currently in state `enabled`.
#[must_use]
pub const fn toggle_label(enabled: bool) -> &'static str {
    if enabled { DISABLE_LABEL } else { ENABLE_LABEL }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceItem {
    pub key: String,
    pub title: Option<String>,
    /// Pre-formatted start or creation time.
    pub schedule: Option<String>,
    /// `None` for resources without an enabled flag.
    pub enabled: Option<bool>,
}

impl ResourceItem {
    /// `"<key> — <title>"`, or just the key when untitled.
    #[must_use]
    pub fn label(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => format!("{} — {title}", self.key),
            _ => self.key.clone(),
        }
    }

    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        self.key.to_lowercase().contains(needle)
            || self
                .title
                .as_deref()
                .is_some_and(|title| title.to_lowercase().contains(needle))
    }
}

impl From<CollectionEntry> for ResourceItem {
    fn from(entry: CollectionEntry) -> Self {
        Self {
            key: entry.key,
            title: entry.title,
            schedule: entry.starts_at_msk,
            enabled: Some(entry.enabled),
        }
    }
}

impl From<&UserSummary> for ResourceItem {
    fn from(user: &UserSummary) -> Self {
        Self {
            key: user.id.to_string(),
            title: user.display_name(),
            schedule: user.created_at.clone(),
            enabled: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Open,
    Toggle,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub key: String,
    pub label: String,
    pub schedule: Option<String>,
    pub enabled: Option<bool>,
    pub toggle_label: Option<&'static str>,
    pub actions: SmallVec<[RowAction; 3]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceList {
    kind: ResourceKind,
    items: Vec<ResourceItem>,
    query: String,
}

impl ResourceList {
    #[must_use]
    pub fn new(kind: ResourceKind, items: impl IntoIterator<Item = ResourceItem>) -> Self {
        Self {
            kind,
            items: items.into_iter().collect(),
            query: String::new(),
        }
    }

    #[must_use]
    pub fn from_entries(kind: ResourceKind, entries: Vec<CollectionEntry>) -> Self {
        Self::new(kind, entries.into_iter().map(ResourceItem::from))
    }

    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    #[must_use]
    pub fn items(&self) -> &[ResourceItem] {
        &self.items
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Case-insensitive substring filter over key and title. Applied on
    /// every keystroke; a blank query shows everything again.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    #[must_use]
    pub fn visible_rows(&self) -> Vec<RowView> {
        let show_all = self.query.trim().is_empty();
        let needle = self.query.to_lowercase();
        self.items
            .iter()
            .filter(|item| show_all || item.matches(&needle))
            .map(|item| self.row(item))
            .collect()
    }

    fn row(&self, item: &ResourceItem) -> RowView {
        let mut actions = SmallVec::new();
        actions.push(RowAction::Open);
        let toggle = if self.kind.is_toggleable() {
            actions.push(RowAction::Toggle);
            actions.push(RowAction::Delete);
            item.enabled.map(toggle_label)
        } else {
            None
        };
        RowView {
            key: item.key.clone(),
            label: item.label(),
            schedule: item.schedule.clone(),
            enabled: item.enabled,
            toggle_label: toggle,
            actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, title: Option<&str>, enabled: bool) -> CollectionEntry {
        CollectionEntry {
            key: key.into(),
            title: title.map(Into::into),
            starts_at_msk: None,
            enabled,
        }
    }

    #[test]
    fn rows_label_and_toggle_reflect_state() {
        let list = ResourceList::from_entries(
            ResourceKind::Quiz,
            vec![
                entry("2025-01-10", Some("New Year Quiz"), true),
                entry("2025-01-17", None, false),
            ],
        );
        let rows = list.visible_rows();
        assert_eq!(rows[0].label, "2025-01-10 — New Year Quiz");
        assert_eq!(rows[0].toggle_label, Some(DISABLE_LABEL));
        assert_eq!(rows[1].label, "2025-01-17");
        assert_eq!(rows[1].toggle_label, Some(ENABLE_LABEL));
        assert_eq!(
            rows[1].actions.as_slice(),
            [RowAction::Open, RowAction::Toggle, RowAction::Delete]
        );
    }

    #[test]
    fn search_filters_case_insensitively_and_resets() {
        let mut list = ResourceList::from_entries(
            ResourceKind::Raffle,
            vec![
                entry("2025-01-10", Some("Winter Raffle"), true),
                entry("2025-02-14", Some("Valentine"), true),
            ],
        );
        list.set_query("WINTER");
        let rows = list.visible_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].key, "2025-01-10");
        list.set_query("02-14");
        assert_eq!(list.visible_rows()[0].key, "2025-02-14");
        list.set_query("");
        assert_eq!(list.visible_rows().len(), 2);
    }

    #[test]
    fn search_never_matches_across_key_and_title() {
        let mut list = ResourceList::from_entries(
            ResourceKind::Quiz,
            vec![entry("2025-01-10", Some("New Year Quiz"), true)],
        );
        list.set_query("10 — New");
        assert!(list.visible_rows().is_empty());
        list.set_query("—");
        assert!(list.visible_rows().is_empty());
        list.set_query("Quiz ");
        assert!(list.visible_rows().is_empty());
        list.set_query("year q");
        assert_eq!(list.visible_rows().len(), 1);
        list.set_query("   ");
        assert_eq!(list.visible_rows().len(), 1);
    }

    #[test]
    fn users_only_open() {
        let user = UserSummary {
            id: 42,
            username: Some("ann".into()),
            first_name: None,
            zodiac: None,
            subscribed: true,
            registration_completed: true,
            created_at: None,
        };
        let list = ResourceList::new(ResourceKind::User, [ResourceItem::from(&user)]);
        let rows = list.visible_rows();
        assert_eq!(rows[0].label, "42 — @ann");
        assert_eq!(rows[0].actions.as_slice(), [RowAction::Open]);
        assert_eq!(rows[0].toggle_label, None);
    }
}
