use zodiac_core::{
    ActionId, ActionTag, Confirmation, Console, ModalForm, Notice, Page, PageState, Transport,
};

/// Everything the shell draws, copied out of the console in one go so no
/// borrow is held while rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleSnapshot {
    pub current: Page,
    pub state: PageState,
    pub notices: Vec<Notice>,
    pub loading: bool,
    pub modals: Vec<ModalForm>,
    pub confirmation: Option<Confirmation>,
    pub pending: Vec<ActionId>,
}

impl Default for ConsoleSnapshot {
    fn default() -> Self {
        Self {
            current: Page::Dashboard,
            state: PageState::Idle,
            notices: Vec::new(),
            loading: false,
            modals: Vec::new(),
            confirmation: None,
            pending: Vec::new(),
        }
    }
}

impl ConsoleSnapshot {
    #[must_use]
    pub fn capture<T: Transport>(console: &Console<T>) -> Self {
        Self {
            current: console.current_page(),
            state: console.page_state(),
            notices: console.notices(),
            loading: console.is_loading(),
            modals: console.modals(),
            confirmation: console.confirmation(),
            pending: console.pending_actions(),
        }
    }

    #[must_use]
    pub fn is_pending(&self, id: &ActionId) -> bool {
        self.pending.contains(id)
    }

    #[must_use]
    pub fn submitting(&self) -> bool {
        self.pending.iter().any(|id| id.tag == ActionTag::Submit)
    }
}
