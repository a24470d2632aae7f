#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

pub mod snapshot;
#[cfg(target_arch = "wasm32")]
pub mod state;
pub mod view;

pub use snapshot::ConsoleSnapshot;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    view::render_app(&app_state.console, &app_state.handlers)
}
