use crate::app::view::AppHandlers;
use crate::components::daisy_ui::Table;
use crate::components::daisy_ui::foundation as f;
use zodiac_core::detail::DetailAction;
use zodiac_core::{ActionId, ActionTag, Page, ScheduledEntry, SchedulerView};

#[derive(f::Properties, PartialEq, Clone)]
pub struct SchedulerPageProps {
    pub view: SchedulerView,
    #[prop_or_default]
    pub pending: Vec<ActionId>,
    #[prop_or_default]
    pub handlers: AppHandlers,
}

fn entry_card(entry: &ScheduledEntry, props: &SchedulerPageProps) -> f::Html {
    let kind = entry.kind;
    let key = entry.item.key.clone();
    let busy = |tag: ActionTag| props.pending.contains(&ActionId::new(kind, key.clone(), tag));
    let open = {
        let cb = props.handlers.navigate.clone();
        let target = Page::detail_of(kind, &key);
        f::Callback::from(move |_| {
            if let Some(page) = target.clone() {
                cb.emit(page);
            }
        })
    };
    let reschedule = {
        let cb = props.handlers.reschedule.clone();
        let key = key.clone();
        f::Callback::from(move |_| cb.emit((kind, key.clone())))
    };
    f::html! {
        <li class="rounded-box border border-base-300 p-3 space-y-2">
            <div class="flex flex-wrap items-center justify-between gap-2">
                <button class="link font-medium" onclick={open}>{ format!("{} {}", kind.label(), entry.item.label()) }</button>
                <span class="text-sm">{ entry.item.schedule.clone().unwrap_or_default() }</span>
            </div>
            <div class="text-sm text-base-content/70">
                { if entry.jobs.is_empty() {
                    f::html! { <span>{"No jobs scheduled"}</span> }
                } else {
                    f::html! { <>{ for entry.jobs.iter().map(|job| f::html! {
                        <div class="font-mono">{ format!("{} → {}", job.id, job.next_run_time.as_deref().unwrap_or("—")) }</div>
                    }) }</> }
                } }
            </div>
            <div class="flex flex-wrap gap-1">
                <button class="btn btn-xs" disabled={busy(ActionTag::Reschedule)} onclick={reschedule}>{ DetailAction::Reschedule.label() }</button>
                { for entry.actions().iter().map(|&action| {
                    let cb = props.handlers.run_action.clone();
                    let key = key.clone();
                    let onclick = f::Callback::from(move |_| cb.emit((kind, key.clone(), action)));
                    f::html! {
                        <button class="btn btn-xs btn-outline" disabled={busy(ActionTag::Run(action))} onclick={onclick}>{ action.label() }</button>
                    }
                }) }
            </div>
        </li>
    }
}

/// Scheduler state plus manual triggers for every quiz and raffle.
#[f::function_component(SchedulerPage)]
pub fn scheduler_page(props: &SchedulerPageProps) -> f::Html {
    let view = &props.view;
    let (badge, status) = if view.running {
        ("badge-success", "running")
    } else {
        ("badge-error", "stopped")
    };
    let rows: Vec<Vec<f::Html>> = view
        .jobs
        .iter()
        .map(|job| {
            vec![
                f::html! { <span class="font-mono">{ job.id.clone() }</span> },
                f::html! { <span>{ job.name.clone().unwrap_or_default() }</span> },
                f::html! { <span>{ job.next_run_time.clone().unwrap_or_default() }</span> },
                f::html! { <span>{ job.trigger.clone().unwrap_or_default() }</span> },
            ]
        })
        .collect();
    f::html! {
        <div class="space-y-4">
            <div class="flex items-center gap-2">
                <h2 class="text-2xl font-bold">{ Page::Scheduler.title() }</h2>
                <span class={f::classes!("badge", badge)}>{ status }</span>
            </div>
            <section class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">{ format!("Jobs ({})", view.jobs.len()) }</h3>
                    <Table
                        headers={vec![f::AttrValue::from("Id"), f::AttrValue::from("Name"), f::AttrValue::from("Next run"), f::AttrValue::from("Trigger")]}
                        rows={rows}
                        empty_text={Some(f::AttrValue::from("No jobs scheduled"))}
                    />
                </div>
            </section>
            <section class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">{"Quizzes and raffles"}</h3>
                    <ul class="space-y-2">
                        { for view.entries.iter().map(|entry| entry_card(entry, props)) }
                    </ul>
                </div>
            </section>
        </div>
    }
}
