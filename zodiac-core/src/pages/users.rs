use crate::api::AdminApi;
use crate::error::ApiError;
use crate::http::Transport;
use crate::list::{ResourceItem, ResourceList};
use crate::resources::ResourceKind;
use crate::schema::{UsersOverview, UsersPage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    /// Zero-based.
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl Pager {
    #[must_use]
    pub const fn skip(&self) -> u64 {
        self.page as u64 * self.page_size as u64
    }

    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 1;
        }
        let pages = self.total.div_ceil(self.page_size as u64);
        if pages == 0 { 1 } else { pages }
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 0
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        (self.page as u64) + 1 < self.total_pages()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersView {
    pub overview: UsersOverview,
    pub pager: Pager,
    /// Server-side search the page was loaded with.
    pub search: String,
    pub list: ResourceList,
}

impl UsersView {
    #[must_use]
    pub fn new(overview: UsersOverview, page: &UsersPage, pager: Pager, search: &str) -> Self {
        Self {
            overview,
            pager,
            search: search.to_string(),
            list: ResourceList::new(ResourceKind::User, page.users.iter().map(ResourceItem::from)),
        }
    }
}

/// # Errors
///
/// Fails with the first error of the concurrent reads.
pub async fn load_users<T: Transport>(
    api: &AdminApi<T>,
    page: u32,
    search: &str,
    page_size: u32,
) -> Result<UsersView, ApiError> {
    let skip = Pager {
        page,
        page_size,
        total: 0,
    }
    .skip();
    let (overview, users) = futures::try_join!(
        api.users_overview(),
        api.users(skip, page_size, search)
    )?;
    let pager = Pager {
        page,
        page_size,
        total: users.total,
    };
    Ok(UsersView::new(overview, &users, pager, search))
}
