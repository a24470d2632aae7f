use crate::app::view::AppHandlers;
use crate::components::daisy_ui::Stat;
use crate::components::daisy_ui::foundation as f;
use crate::components::status_badge::StatusBadge;
use zodiac_core::router::BACK_TO_LIST_LABEL;
use zodiac_core::{
    ActionId, ActionTag, DeleteTarget, DetailAction, DetailView, ModalForm, Page, ResourceKind,
    SubControl, SubEntity, SubEntityRow, SubSection,
};

#[derive(f::Properties, PartialEq, Clone)]
pub struct DetailPanelProps {
    pub view: DetailView,
    #[prop_or_default]
    pub pending: Vec<ActionId>,
    #[prop_or_default]
    pub handlers: AppHandlers,
}

fn tag_of(action: DetailAction) -> Option<ActionTag> {
    match action {
        DetailAction::Toggle { .. } => Some(ActionTag::Toggle),
        DetailAction::Delete => Some(ActionTag::Delete),
        DetailAction::Reschedule => Some(ActionTag::Reschedule),
        DetailAction::Run(run) => Some(ActionTag::Run(run)),
        DetailAction::EditMeta
        | DetailAction::Duplicate
        | DetailAction::Preview
        | DetailAction::AddQuestion => None,
    }
}

fn on_action(
    view: &DetailView,
    action: DetailAction,
    handlers: &AppHandlers,
) -> f::Callback<f::MouseEvent> {
    let kind = view.kind;
    let key = view.key.clone();
    match action {
        DetailAction::EditMeta => {
            let form = ModalForm::edit_meta(
                kind,
                &key,
                view.title.as_deref(),
                view.starts_at_local.as_deref(),
            );
            let cb = handlers.open_form.clone();
            f::Callback::from(move |_| cb.emit(form.clone()))
        }
        DetailAction::Duplicate => {
            let form = ModalForm::duplicate(kind, &key, view.title.as_deref());
            let cb = handlers.open_form.clone();
            f::Callback::from(move |_| cb.emit(form.clone()))
        }
        DetailAction::AddQuestion => {
            let form = if kind == ResourceKind::Raffle {
                ModalForm::raffle_question(&key, None)
            } else {
                ModalForm::quiz_question(&key, None)
            };
            let cb = handlers.open_form.clone();
            f::Callback::from(move |_| cb.emit(form.clone()))
        }
        DetailAction::Preview => {
            let target = Page::preview_of(kind, &key);
            let cb = handlers.navigate.clone();
            f::Callback::from(move |_| {
                if let Some(page) = target.clone() {
                    cb.emit(page);
                }
            })
        }
        DetailAction::Reschedule => {
            let cb = handlers.reschedule.clone();
            f::Callback::from(move |_| cb.emit((kind, key.clone())))
        }
        DetailAction::Run(run) => {
            let cb = handlers.run_action.clone();
            f::Callback::from(move |_| cb.emit((kind, key.clone(), run)))
        }
        DetailAction::Toggle { .. } => {
            let cb = handlers.toggle.clone();
            f::Callback::from(move |_| cb.emit((kind, key.clone())))
        }
        DetailAction::Delete => {
            let cb = handlers.request_delete.clone();
            f::Callback::from(move |_| cb.emit(DeleteTarget::Resource { kind, key: key.clone() }))
        }
    }
}

fn toolbar(props: &DetailPanelProps) -> f::Html {
    let view = &props.view;
    f::html! {
        <div class="flex flex-wrap gap-2" role="toolbar" aria-label="Actions">
            { for view.actions.iter().map(|&action| {
                let busy = tag_of(action).is_some_and(|tag| {
                    props.pending.contains(&ActionId::new(view.kind, view.key.clone(), tag))
                });
                let class = f::classes!(
                    "btn",
                    "btn-sm",
                    action.is_destructive().then_some("btn-error"),
                    action.is_destructive().then_some("btn-outline"),
                );
                f::html! {
                    <button class={class} disabled={busy} aria-busy={busy.to_string()}
                        onclick={on_action(view, action, &props.handlers)}>
                        { action.label() }
                    </button>
                }
            }) }
        </div>
    }
}

fn control_target(
    view: &DetailView,
    row: &SubEntityRow,
    control: SubControl,
    handlers: &AppHandlers,
) -> Option<(f::Callback<f::MouseEvent>, Option<ActionId>)> {
    let key = view.key.clone();
    match (&row.entity, control) {
        (SubEntity::QuizQuestion(question), SubControl::Edit) => {
            let form = ModalForm::quiz_question(&key, Some(question));
            let cb = handlers.open_form.clone();
            Some((f::Callback::from(move |_| cb.emit(form.clone())), None))
        }
        (SubEntity::RaffleQuestion(question), SubControl::Edit) => {
            let form = ModalForm::raffle_question(&key, Some(question));
            let cb = handlers.open_form.clone();
            Some((f::Callback::from(move |_| cb.emit(form.clone())), None))
        }
        (SubEntity::QuizQuestion(question), SubControl::Delete) => {
            let target = DeleteTarget::QuizQuestion {
                quiz_date: key,
                question_id: question.id,
            };
            Some(delete_control(target, handlers))
        }
        (SubEntity::RaffleQuestion(question), SubControl::Delete) => {
            let target = DeleteTarget::RaffleQuestion {
                raffle_date: key,
                question_id: question.id,
            };
            Some(delete_control(target, handlers))
        }
        (SubEntity::Unchecked(answer), SubControl::Approve | SubControl::Deny) => {
            let user_id = answer.user_id;
            let approve = control == SubControl::Approve;
            let id = ActionId::new(
                ResourceKind::Raffle,
                key.clone(),
                ActionTag::Moderate { user_id },
            );
            let cb = handlers.moderate.clone();
            let onclick = f::Callback::from(move |_| cb.emit((key.clone(), user_id, approve)));
            Some((onclick, Some(id)))
        }
        (SubEntity::Ticket(ticket), SubControl::Remove) => {
            let user_id = key.parse().ok()?;
            let target = DeleteTarget::Ticket {
                user_id,
                ticket_number: ticket.ticket_number,
            };
            Some(delete_control(target, handlers))
        }
        _ => None,
    }
}

fn delete_control(
    target: DeleteTarget,
    handlers: &AppHandlers,
) -> (f::Callback<f::MouseEvent>, Option<ActionId>) {
    let id = target.action_id();
    let cb = handlers.request_delete.clone();
    (f::Callback::from(move |_| cb.emit(target.clone())), Some(id))
}

fn render_section(props: &DetailPanelProps, section: &SubSection) -> f::Html {
    let view = &props.view;
    f::html! {
        <section class="space-y-2">
            <h3 class="text-lg font-semibold">{ section.title.clone() }</h3>
            if section.rows.is_empty() {
                <p class="text-base-content/60">{ section.empty_text }</p>
            }
            <ol class="space-y-2">
                { for section.rows.iter().map(|row| f::html! {
                    <li class="rounded-box border border-base-300 p-3">
                        <div class="flex flex-wrap items-start justify-between gap-2">
                            <div>
                                <div class="font-medium">{ format!("{}. {}", row.index, row.heading) }</div>
                                { for row.lines.iter().map(|line| f::html! { <div class="text-sm">{ line.clone() }</div> }) }
                            </div>
                            <div class="flex gap-1">
                                { for row.controls.iter().filter_map(|&control| {
                                    let (onclick, id) =
                                        control_target(view, row, control, &props.handlers)?;
                                    let busy = id.is_some_and(|id| props.pending.contains(&id));
                                    Some(f::html! {
                                        <button class="btn btn-xs" disabled={busy} onclick={onclick}>{ control.label() }</button>
                                    })
                                }) }
                            </div>
                        </div>
                    </li>
                }) }
            </ol>
        </section>
    }
}

/// One resource: heading, status, stats, toolbar and its sub-entities.
#[f::function_component(DetailPanel)]
pub fn detail_panel(props: &DetailPanelProps) -> f::Html {
    let view = &props.view;
    let back = {
        let cb = props.handlers.navigate.clone();
        let list = Page::list_of(view.kind);
        f::Callback::from(move |_| cb.emit(list.clone()))
    };
    f::html! {
        <section class="card bg-base-100 shadow">
            <div class="card-body space-y-4">
                <div class="flex flex-wrap items-center gap-2">
                    <button class="btn btn-ghost btn-sm" onclick={back}>{ BACK_TO_LIST_LABEL }</button>
                    <h2 class="card-title">{ view.heading() }</h2>
                    { view.enabled.map(|enabled| f::html! { <StatusBadge enabled={enabled} /> }).unwrap_or_default() }
                </div>
                { view.starts_at_local.as_ref().map(|starts| f::html! {
                    <p class="text-sm text-base-content/70">{ format!("Starts {}", starts.replace('T', " ")) }</p>
                }).unwrap_or_default() }
                <Stat tiles={view.stats.clone()} />
                if !view.actions.is_empty() {
                    { toolbar(props) }
                }
                { for view.sections.iter().map(|section| render_section(props, section)) }
            </div>
        </section>
    }
}
