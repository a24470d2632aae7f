mod handlers;

pub use handlers::AppHandlers;

use crate::app::snapshot::ConsoleSnapshot;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::daisy_ui::{LoadingOverlay, Toast};
use crate::components::form_modal::FormModal;
use crate::components::nav_bar::NavBar;
use yew::prelude::*;
use zodiac_core::{Console, Transport};

pub fn render_app<T: Transport>(console: &Console<T>, handlers: &AppHandlers) -> Html {
    let snapshot = ConsoleSnapshot::capture(console);
    html! { <Shell snapshot={snapshot} handlers={handlers.clone()} /> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ShellProps {
    pub snapshot: ConsoleSnapshot,
    pub handlers: AppHandlers,
}

/// Navigation, the current page, and the overlays stacked above it.
#[function_component(Shell)]
pub fn shell(props: &ShellProps) -> Html {
    let snapshot = &props.snapshot;
    let handlers = &props.handlers;
    let submitting = snapshot.submitting();
    html! {
        <div class="min-h-screen bg-base-200">
            <NavBar current={snapshot.current.clone()} on_navigate={handlers.navigate.clone()} />
            <main class="container mx-auto p-4 space-y-4" aria-busy={snapshot.loading.to_string()}>
                { crate::pages::render_page_state(&snapshot.state, &snapshot.pending, handlers) }
            </main>
            { for snapshot.modals.iter().map(|form| html! {
                <FormModal
                    key={form.id.dom_id()}
                    form={form.clone()}
                    busy={submitting}
                    on_input={handlers.update_field.clone()}
                    on_submit={handlers.submit_form.clone()}
                    on_close={handlers.close_form.clone()}
                />
            }) }
            <ConfirmDialog
                confirmation={snapshot.confirmation.clone()}
                on_resolve={handlers.resolve_confirmation.clone()}
            />
            <Toast notices={snapshot.notices.clone()} on_dismiss={handlers.dismiss_notice.clone()} on_expire={handlers.expire_notice.clone()} />
            <LoadingOverlay active={snapshot.loading} />
        </div>
    }
}
