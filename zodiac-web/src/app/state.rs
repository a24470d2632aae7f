use crate::app::view::AppHandlers;
use crate::transport::FetchTransport;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use zodiac_core::{Console, Page};

pub type WebConsole = Console<FetchTransport>;

#[derive(Clone)]
pub struct AppState {
    pub console: WebConsole,
    pub handlers: Rc<AppHandlers>,
}

/// Owns the console for the lifetime of the app and re-renders whenever it
/// reports a change. The dashboard is loaded on mount.
#[hook]
pub fn use_app_state() -> AppState {
    let console = use_memo((), |()| {
        WebConsole::new(FetchTransport, crate::paths::console_config())
    });
    let handlers = {
        let console = console.clone();
        use_memo((), move |()| AppHandlers::new(&*console))
    };
    let force = use_force_update();

    {
        let console = (*console).clone();
        use_effect_with((), move |()| {
            console.set_observer(move || force.force_update());
            spawn_local(async move { console.navigate(Page::Dashboard).await });
            || ()
        });
    }

    let current = console.current_page();
    use_effect_with(current, |page| {
        crate::dom::set_page_title(&page.title());
        || ()
    });

    AppState {
        console: (*console).clone(),
        handlers,
    }
}
