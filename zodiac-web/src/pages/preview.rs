use crate::app::view::AppHandlers;
use crate::components::daisy_ui::foundation as f;
use zodiac_core::{Page, PreviewView};

#[derive(f::Properties, PartialEq, Clone)]
pub struct PreviewPageProps {
    pub view: PreviewView,
    #[prop_or_default]
    pub handlers: AppHandlers,
}

/// Questions the way participants will see them.
#[f::function_component(PreviewPage)]
pub fn preview_page(props: &PreviewPageProps) -> f::Html {
    let view = &props.view;
    let back = {
        let cb = props.handlers.navigate.clone();
        let target = Page::detail_of(view.kind, &view.key);
        f::Callback::from(move |_| {
            if let Some(page) = target.clone() {
                cb.emit(page);
            }
        })
    };
    f::html! {
        <div class="space-y-4">
            <div class="flex flex-wrap items-center gap-2">
                <button class="btn btn-ghost btn-sm" onclick={back}>{"⬅️ Back"}</button>
                <h2 class="text-2xl font-bold">{ format!("👁️ {}", view.title) }</h2>
                { view.starts_at.as_ref().map(|starts| f::html! {
                    <span class="text-sm text-base-content/70">{ starts.clone() }</span>
                }).unwrap_or_default() }
            </div>
            if view.cards.is_empty() {
                <p class="text-base-content/60">{"No questions yet"}</p>
            }
            { for view.cards.iter().map(|card| f::html! {
                <article class="card bg-base-100 shadow">
                    <div class="card-body">
                        <div class="text-sm text-base-content/60">{ card.heading.clone() }</div>
                        { card.title.as_ref().map(|title| f::html! { <h3 class="card-title">{ title.clone() }</h3> }).unwrap_or_default() }
                        <p class="whitespace-pre-line">{ card.body.clone() }</p>
                        <div class="flex flex-col gap-2">
                            { for card.options.iter().map(|option| f::html! {
                                <button class="btn btn-outline justify-start" disabled={true}>
                                    { format!("{}) {}", option.marker, option.text) }
                                </button>
                            }) }
                        </div>
                    </div>
                </article>
            }) }
        </div>
    }
}
