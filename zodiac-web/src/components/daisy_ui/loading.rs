use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Eq, Clone)]
pub struct LoadingOverlayProps {
    pub active: bool,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
}

/// Spinner shown while any console operation is in flight.
#[f::function_component(LoadingOverlay)]
pub fn loading_overlay(props: &LoadingOverlayProps) -> f::Html {
    if !props.active {
        return f::Html::default();
    }
    let class = f::class_list(&["fixed", "bottom-4", "left-4", "z-40"], &props.class);
    f::html! {
        <div class={class} role="status" aria-live="polite">
            <div class="inline-flex items-center gap-2 rounded-box bg-base-100 px-3 py-2 shadow">
                <span class="loading loading-spinner loading-sm"></span>
                <span>{ props.label.clone().unwrap_or_else(|| f::AttrValue::from("Loading…")) }</span>
            </div>
        </div>
    }
}

/// Placeholder for a page whose data is still being fetched.
#[derive(f::Properties, PartialEq, Eq, Clone)]
pub struct PageLoadingProps {
    pub title: f::AttrValue,
}

#[f::function_component(PageLoading)]
pub fn page_loading(props: &PageLoadingProps) -> f::Html {
    f::html! {
        <section class="card bg-base-100 shadow" aria-busy="true">
            <div class="card-body items-center">
                <h2 class="card-title">{ props.title.clone() }</h2>
                <span class="loading loading-dots loading-lg"></span>
            </div>
        </section>
    }
}
