use crate::components::daisy_ui::foundation as f;
use zodiac_core::router::{BACK_TO_LIST_LABEL, RETRY_LABEL};
use zodiac_core::{ErrorPanel, Page};

#[derive(f::Properties, PartialEq, Clone)]
pub struct ErrorPanelViewProps {
    pub panel: ErrorPanel,
    #[prop_or_default]
    pub on_navigate: f::Callback<Page>,
}

/// Replaces page content when a load fails, offering retry and a way back.
#[f::function_component(ErrorPanelView)]
pub fn error_panel_view(props: &ErrorPanelViewProps) -> f::Html {
    let panel = &props.panel;
    let go = |page: Page| {
        let cb = props.on_navigate.clone();
        f::Callback::from(move |_| cb.emit(page.clone()))
    };
    f::html! {
        <section class="card bg-base-100 shadow" role="alert">
            <div class="card-body">
                <h2 class="card-title text-error">{"⚠️ Could not load this page"}</h2>
                <p class="whitespace-pre-line">{ panel.message.clone() }</p>
                <div class="card-actions justify-end">
                    { panel.back.clone().map(|back| f::html! {
                        <button class="btn btn-ghost" onclick={go(back)}>{ BACK_TO_LIST_LABEL }</button>
                    }).unwrap_or_default() }
                    <button class="btn btn-primary" onclick={go(panel.retry.clone())}>{ RETRY_LABEL }</button>
                </div>
            </div>
        </section>
    }
}
