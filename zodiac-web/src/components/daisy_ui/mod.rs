pub mod foundation;
pub mod loading;
pub mod modal;
pub mod pagination;
pub mod stat;
pub mod table;
pub mod toast;

pub use foundation::DaisyColor;
pub use loading::LoadingOverlay;
pub use modal::Modal;
pub use pagination::Pagination;
pub use stat::Stat;
pub use table::Table;
pub use toast::Toast;
