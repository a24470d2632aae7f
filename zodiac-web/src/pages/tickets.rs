use crate::app::view::AppHandlers;
use crate::components::daisy_ui::foundation as f;
use crate::components::daisy_ui::{Stat, Table};
use zodiac_core::schema::{TicketCheck, TicketSource, UserTickets};
use zodiac_core::{ActionId, ActionTag, DeleteTarget, Page, ResourceKind, TicketLookup, TicketsView};

#[derive(f::Properties, PartialEq, Clone)]
pub struct TicketsPageProps {
    pub view: TicketsView,
    #[prop_or_default]
    pub pending: Vec<ActionId>,
    #[prop_or_default]
    pub handlers: AppHandlers,
}

fn lookup_form(
    label: &'static str,
    placeholder: &'static str,
    on_submit: f::Callback<i64>,
) -> f::Html {
    f::html! { <LookupForm label={label} placeholder={placeholder} on_submit={on_submit} /> }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct LookupFormProps {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub on_submit: f::Callback<i64>,
}

/// Number input that only fires once its content parses.
#[f::function_component(LookupForm)]
pub fn lookup_form_component(props: &LookupFormProps) -> f::Html {
    let value = f::use_state(String::new);
    let parsed = value.trim().parse::<i64>().ok();
    let on_input = {
        let value = value.clone();
        f::Callback::from(move |e: f::InputEvent| {
            let event: &f::Event = &e;
            value.set(f::event_value(event));
        })
    };
    let submit = {
        let cb = props.on_submit.clone();
        f::Callback::from(move |_| {
            if let Some(number) = parsed {
                cb.emit(number);
            }
        })
    };
    f::html! {
        <div class="join">
            <input type="text" inputmode="numeric" class="input input-bordered join-item"
                placeholder={props.placeholder} aria-label={props.label}
                value={(*value).clone()} oninput={on_input} />
            <button class="btn join-item" disabled={parsed.is_none()} onclick={submit}>{ props.label }</button>
        </div>
    }
}

const fn source_label(source: TicketSource) -> &'static str {
    match source {
        TicketSource::Quiz => "quiz",
        TicketSource::Raffle => "raffle",
    }
}

fn user_tickets(tickets: &UserTickets, props: &TicketsPageProps) -> f::Html {
    let user_id = tickets.user_id;
    let open_user = {
        let cb = props.handlers.navigate.clone();
        f::Callback::from(move |_| cb.emit(Page::UserDetail(user_id)))
    };
    let rows = tickets
        .tickets
        .iter()
        .map(|ticket| {
            let target = DeleteTarget::Ticket {
                user_id,
                ticket_number: ticket.ticket_number,
            };
            let busy = props.pending.contains(&ActionId::new(
                ResourceKind::Ticket,
                ticket.ticket_number.to_string(),
                ActionTag::RemoveTicket { user_id },
            ));
            let remove = {
                let cb = props.handlers.request_delete.clone();
                f::Callback::from(move |_| cb.emit(target.clone()))
            };
            vec![
                f::html! { <span>{ format!("#{}", ticket.ticket_number) }</span> },
                f::html! { <span>{ format!("{} {}", source_label(ticket.source), ticket.date) }</span> },
                f::html! { <span>{ ticket.issued_at().unwrap_or("—").to_string() }</span> },
                f::html! { <button class="btn btn-xs btn-error btn-outline" disabled={busy} onclick={remove}>{"🗑️ Remove"}</button> },
            ]
        })
        .collect::<Vec<_>>();
    f::html! {
        <div class="space-y-2">
            <div class="flex items-center gap-2">
                <h3 class="font-semibold">{ format!("Tickets of user {user_id}") }</h3>
                <button class="btn btn-xs btn-ghost" onclick={open_user}>{"👤 Profile"}</button>
            </div>
            <Table
                headers={vec![f::AttrValue::from("Ticket"), f::AttrValue::from("Source"), f::AttrValue::from("Issued"), f::AttrValue::from("")]}
                rows={rows}
                empty_text={Some(f::AttrValue::from("No tickets issued"))}
            />
        </div>
    }
}

fn ticket_check(check: &TicketCheck) -> f::Html {
    let rows = check
        .tickets
        .iter()
        .map(|issue| {
            let holder = issue
                .user
                .as_ref()
                .and_then(|user| {
                    user.username
                        .clone()
                        .map(|name| format!("@{name}"))
                        .or_else(|| user.first_name.clone())
                })
                .map_or_else(
                    || issue.user_id.to_string(),
                    |name| format!("{name} ({})", issue.user_id),
                );
            vec![
                f::html! { <span>{ holder }</span> },
                f::html! { <span>{ issue.source.clone() }</span> },
                f::html! { <span>{ format!("{} {}", issue.date, issue.time_display) }</span> },
            ]
        })
        .collect::<Vec<_>>();
    f::html! {
        <div class="space-y-2">
            <h3 class="font-semibold">{ format!("Ticket #{}", check.ticket_number) }</h3>
            { check.first_user.as_ref().map(|first| f::html! {
                <p>{ format!("First issued to user {} ({})", first.user_id, first.source) }</p>
            }).unwrap_or_default() }
            if check.same_time {
                <div class="alert alert-warning">{"⚠️ Issued to several users at the same moment"}</div>
            }
            <Table
                headers={vec![f::AttrValue::from("Holder"), f::AttrValue::from("Source"), f::AttrValue::from("Issued")]}
                rows={rows}
                empty_text={Some(f::AttrValue::from("Nobody holds this number"))}
            />
        </div>
    }
}

#[f::function_component(TicketsPage)]
pub fn tickets_page(props: &TicketsPageProps) -> f::Html {
    let view = &props.view;
    f::html! {
        <div class="space-y-4">
            <h2 class="text-2xl font-bold">{ Page::Tickets.title() }</h2>
            <Stat tiles={view.tiles()} />
            <section class="card bg-base-100 shadow">
                <div class="card-body space-y-3">
                    <h3 class="card-title">{"Lookup"}</h3>
                    <div class="flex flex-wrap gap-2">
                        { lookup_form("👤 User tickets", "User id", props.handlers.lookup_user_tickets.clone()) }
                        { lookup_form("🔎 Check number", "Ticket number", props.handlers.check_ticket.clone()) }
                    </div>
                    { match &view.lookup {
                        Some(TicketLookup::User(tickets)) => user_tickets(tickets, props),
                        Some(TicketLookup::Ticket(check)) => ticket_check(check),
                        None => f::Html::default(),
                    } }
                </div>
            </section>
            <section class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">{ format!("Duplicates ({})", view.duplicates.len()) }</h3>
                    if view.duplicates.is_empty() {
                        <p class="text-base-content/60">{"No duplicate numbers 🎉"}</p>
                    }
                    <ul class="space-y-1">
                        { for view.duplicates.iter().map(|ticket| f::html! {
                            <li class="font-mono text-sm">{ TicketsView::duplicate_label(ticket) }</li>
                        }) }
                    </ul>
                </div>
            </section>
        </div>
    }
}
