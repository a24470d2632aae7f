use crate::app::view::AppHandlers;
use crate::components::daisy_ui::Stat;
use crate::components::daisy_ui::foundation as f;
use zodiac_core::{DashboardView, Page};

#[derive(f::Properties, PartialEq, Clone)]
pub struct DashboardPageProps {
    pub view: DashboardView,
    #[prop_or_default]
    pub handlers: AppHandlers,
}

#[f::function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> f::Html {
    let view = &props.view;
    let weekly = &view.weekly.period;
    let errors = &view.recent_errors.errors;
    let open_log = {
        let cb = props.handlers.navigate.clone();
        f::Callback::from(move |_| cb.emit(Page::ErrorLog))
    };
    let reload = {
        let cb = props.handlers.reload.clone();
        f::Callback::from(move |_| cb.emit(()))
    };
    f::html! {
        <div class="space-y-4">
            <div class="flex flex-wrap items-center justify-between gap-2">
                <h2 class="text-2xl font-bold">{ Page::Dashboard.title() }</h2>
                <span class="badge badge-lg">{ view.health_label() }</span>
                <button class="btn btn-sm btn-ghost" onclick={reload}>{"🔄 Refresh"}</button>
            </div>
            <Stat title={Some(f::AttrValue::from("System"))} tiles={view.system_tiles()} />
            <Stat title={Some(f::AttrValue::from(format!("Today ({})", view.daily.date)))} tiles={view.daily_tiles()} />
            <Stat title={Some(f::AttrValue::from(format!("Week {} – {}", weekly.from, weekly.to)))} tiles={view.weekly_tiles()} />
            <section class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex items-center justify-between">
                        <h3 class="card-title">{ format!("Recent errors ({})", errors.len()) }</h3>
                        <button class="btn btn-sm btn-ghost" onclick={open_log}>{"All errors →"}</button>
                    </div>
                    if errors.is_empty() {
                        <p class="text-base-content/60">{"No errors recorded."}</p>
                    }
                    <ul class="space-y-1">
                        { for errors.iter().map(|entry| f::html! {
                            <li class="text-sm"><span class="font-mono">{ entry.time.clone() }</span>{" "}{ entry.message.clone() }</li>
                        }) }
                    </ul>
                </div>
            </section>
        </div>
    }
}
