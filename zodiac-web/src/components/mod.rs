pub mod confirm_dialog;
pub mod daisy_ui;
pub mod detail_panel;
pub mod error_panel;
pub mod form_modal;
pub mod nav_bar;
pub mod resource_list;
pub mod status_badge;
