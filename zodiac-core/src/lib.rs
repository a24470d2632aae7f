//! Zodiac Console Engine
//!
//! Platform-agnostic core of the Zodiac bot admin panel: typed access to the
//! admin REST API, page loading with stale-response protection, resource lists
//! and detail views, validated modal forms, and the notification center.
//! Rendering and network I/O live in the embedding crate, which supplies a
//! [`Transport`] and draws the view-models this crate produces.

pub mod api;
pub mod config;
pub mod console;
pub mod detail;
pub mod error;
pub mod form;
pub mod http;
pub mod inflight;
pub mod list;
pub mod notify;
pub mod pages;
pub mod preview;
pub mod resources;
pub mod router;
pub mod schema;
pub mod testing;

// Re-export commonly used types
pub use api::AdminApi;
pub use config::ConsoleConfig;
pub use console::{Confirmation, Console, DeleteTarget, Outcome, scheduler_note};
pub use detail::{
    DetailAction, DetailView, StatTile, SubControl, SubEntity, SubEntityRow, SubSection,
};
pub use error::{ApiError, ValidationError};
pub use form::{FieldKind, FormField, FormIntent, FormPayload, ModalForm, ModalId, ModalStack};
pub use http::{ApiRequest, HttpClient, Method, RawResponse, Transport};
pub use inflight::{ActionId, ActionState, ActionTag, InFlight};
pub use list::{ResourceItem, ResourceList, RowAction, RowView, toggle_label};
pub use notify::{Notice, NoticeId, NoticeKind, NotificationCenter};
pub use pages::{
    DashboardView, PageContent, Pager, ScheduledEntry, SchedulerView, TicketLookup, TicketsView,
    UsersView, load_page,
};
pub use preview::{PreviewCard, PreviewOption, PreviewView};
pub use resources::ResourceKind;
pub use router::{ErrorPanel, LoadTicket, Page, PageState, Router};
pub use testing::ScriptedTransport;
