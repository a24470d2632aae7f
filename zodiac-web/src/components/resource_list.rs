use crate::app::view::AppHandlers;
use crate::components::daisy_ui::Table;
use crate::components::daisy_ui::foundation as f;
use crate::components::status_badge::StatusBadge;
use zodiac_core::list::DELETE_LABEL;
use zodiac_core::{
    ActionId, ActionTag, DeleteTarget, ModalForm, Page, ResourceList, RowAction, RowView,
};

#[derive(f::Properties, PartialEq, Clone)]
pub struct ResourceListViewProps {
    pub list: ResourceList,
    #[prop_or_default]
    pub pending: Vec<ActionId>,
    #[prop_or_default]
    pub handlers: AppHandlers,
}

fn row_controls(props: &ResourceListViewProps, row: &RowView) -> f::Html {
    let kind = props.list.kind();
    let handlers = &props.handlers;
    let is_pending =
        |tag: ActionTag| props.pending.contains(&ActionId::new(kind, row.key.clone(), tag));
    let toggling = is_pending(ActionTag::Toggle);
    let deleting = is_pending(ActionTag::Delete);
    f::html! {
        <div class="flex flex-wrap gap-1">
            { for row.actions.iter().map(|action| match action {
                RowAction::Open => {
                    let target = Page::detail_of(kind, &row.key);
                    let cb = handlers.navigate.clone();
                    let onclick = f::Callback::from(move |e: f::MouseEvent| {
                        e.stop_propagation();
                        if let Some(page) = target.clone() {
                            cb.emit(page);
                        }
                    });
                    f::html! { <button class="btn btn-sm btn-ghost" onclick={onclick}>{"🔎 Open"}</button> }
                }
                RowAction::Toggle => {
                    let key = row.key.clone();
                    let cb = handlers.toggle.clone();
                    let onclick = f::Callback::from(move |e: f::MouseEvent| {
                        e.stop_propagation();
                        cb.emit((kind, key.clone()));
                    });
                    f::html! {
                        <button class="btn btn-sm" disabled={toggling} aria-busy={toggling.to_string()} onclick={onclick}>
                            { row.toggle_label.unwrap_or_default() }
                        </button>
                    }
                }
                RowAction::Delete => {
                    let key = row.key.clone();
                    let cb = handlers.request_delete.clone();
                    let onclick = f::Callback::from(move |e: f::MouseEvent| {
                        e.stop_propagation();
                        cb.emit(DeleteTarget::Resource { kind, key: key.clone() });
                    });
                    f::html! {
                        <button class="btn btn-sm btn-error btn-outline" disabled={deleting} aria-busy={deleting.to_string()} onclick={onclick}>
                            { DELETE_LABEL }
                        </button>
                    }
                }
            }) }
        </div>
    }
}

/// Filterable table of one resource collection.
#[f::function_component(ResourceListView)]
pub fn resource_list_view(props: &ResourceListViewProps) -> f::Html {
    let list = &props.list;
    let kind = list.kind();
    let rows = list.visible_rows();
    let on_filter = {
        let cb = props.handlers.filter.clone();
        f::Callback::from(move |e: f::InputEvent| {
            let event: &f::Event = &e;
            cb.emit(f::event_value(event));
        })
    };
    let create = kind.is_toggleable().then(|| {
        let cb = props.handlers.open_form.clone();
        f::Callback::from(move |_| cb.emit(ModalForm::create(kind)))
    });
    let on_row_click = {
        let keys: Vec<String> = rows.iter().map(|row| row.key.clone()).collect();
        let cb = props.handlers.navigate.clone();
        f::Callback::from(move |index: usize| {
            if let Some(page) = keys.get(index).and_then(|key| Page::detail_of(kind, key)) {
                cb.emit(page);
            }
        })
    };
    let table_rows: Vec<Vec<f::Html>> = rows
        .iter()
        .map(|row| {
            vec![
                f::html! { <span class="font-medium">{ row.label.clone() }</span> },
                f::html! { <span class="text-sm">{ row.schedule.clone().unwrap_or_default() }</span> },
                row.enabled
                    .map(|enabled| f::html! { <StatusBadge enabled={enabled} /> })
                    .unwrap_or_default(),
                row_controls(props, row),
            ]
        })
        .collect();
    f::html! {
        <section class="card bg-base-100 shadow">
            <div class="card-body space-y-3">
                <div class="flex flex-wrap items-center justify-between gap-2">
                    <h2 class="card-title">{ kind.plural() }</h2>
                    <span class="text-sm text-base-content/60">
                        { format!("{} of {}", rows.len(), list.items().len()) }
                    </span>
                    { create.map(|onclick| f::html! {
                        <button class="btn btn-primary btn-sm" onclick={onclick}>{ format!("➕ New {}", kind.label().to_lowercase()) }</button>
                    }).unwrap_or_default() }
                </div>
                <input type="search" class="input input-bordered w-full" placeholder="🔍 Filter…"
                    aria-label="Filter" value={list.query().to_string()} oninput={on_filter} />
                <Table
                    headers={vec![f::AttrValue::from("Item"), f::AttrValue::from("Schedule"), f::AttrValue::from("Status"), f::AttrValue::from("Actions")]}
                    rows={table_rows}
                    empty_text={Some(f::AttrValue::from("Nothing matches."))}
                    on_row_click={Some(on_row_click)}
                />
            </div>
        </section>
    }
}
