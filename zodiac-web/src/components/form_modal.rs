use crate::components::daisy_ui::Modal;
use crate::components::daisy_ui::foundation as f;
use zodiac_core::{FieldKind, FormField, ModalForm, ModalId};

#[derive(f::Properties, PartialEq, Clone)]
pub struct FormModalProps {
    pub form: ModalForm,
    /// A submit is in flight; inputs stay visible but cannot be resent.
    #[prop_or_default]
    pub busy: bool,
    #[prop_or_default]
    pub on_input: f::Callback<(ModalId, String, String)>,
    #[prop_or_default]
    pub on_submit: f::Callback<ModalId>,
    #[prop_or_default]
    pub on_close: f::Callback<ModalId>,
}

fn field_input(
    id: ModalId,
    field: &FormField,
    on_input: &f::Callback<(ModalId, String, String)>,
) -> f::Html {
    let input_id = format!("{}-{}", id.dom_id(), field.name);
    let emit = {
        let cb = on_input.clone();
        let name = field.name.clone();
        move |event: &f::Event| cb.emit((id, name.clone(), f::event_value(event)))
    };
    let invalid = field.error.is_some();
    match field.kind {
        FieldKind::Text | FieldKind::DateTimeLocal => {
            let kind = if field.kind == FieldKind::Text { "text" } else { "datetime-local" };
            let oninput = f::Callback::from(move |e: f::InputEvent| {
                let event: &f::Event = &e;
                emit(event);
            });
            f::html! {
                <input id={input_id} name={field.name.clone()} type={kind}
                    class={f::classes!("input", "input-bordered", "w-full", invalid.then_some("input-error"))}
                    value={field.value.clone()} aria-invalid={invalid.to_string()} oninput={oninput} />
            }
        }
        FieldKind::TextArea => {
            let oninput = f::Callback::from(move |e: f::InputEvent| {
                let event: &f::Event = &e;
                emit(event);
            });
            f::html! {
                <textarea id={input_id} name={field.name.clone()} rows="3"
                    class={f::classes!("textarea", "textarea-bordered", "w-full", invalid.then_some("textarea-error"))}
                    value={field.value.clone()} aria-invalid={invalid.to_string()} oninput={oninput} />
            }
        }
        FieldKind::Select => {
            let onchange = f::Callback::from(move |e: f::Event| emit(&e));
            f::html! {
                <select id={input_id} name={field.name.clone()}
                    class={f::classes!("select", "select-bordered", "w-full", invalid.then_some("select-error"))}
                    aria-invalid={invalid.to_string()} onchange={onchange}>
                    { for field.choices.iter().map(|choice| f::html! {
                        <option value={choice.clone()} selected={*choice == field.value}>{ choice.clone() }</option>
                    }) }
                </select>
            }
        }
    }
}

/// One modal form. Field edits and submit go through the console, which
/// validates before anything is sent.
#[f::function_component(FormModal)]
pub fn form_modal(props: &FormModalProps) -> f::Html {
    let form = &props.form;
    let id = form.id;
    let submit = {
        let cb = props.on_submit.clone();
        let busy = props.busy;
        f::Callback::from(move |_| {
            if !busy {
                cb.emit(id);
            }
        })
    };
    let cancel = {
        let cb = props.on_close.clone();
        f::Callback::from(move |_| cb.emit(id))
    };
    let on_close = {
        let cb = props.on_close.clone();
        f::Callback::from(move |()| cb.emit(id))
    };
    let actions = f::html! {
        <>
            <button class="btn btn-ghost" disabled={props.busy} onclick={cancel}>{"Cancel"}</button>
            <button class="btn btn-primary" disabled={props.busy} onclick={submit}>
                if props.busy {
                    <span class="loading loading-spinner loading-xs"></span>
                }
                {"💾 Save"}
            </button>
        </>
    };
    f::html! {
        <Modal open={true} id={Some(f::AttrValue::from(id.dom_id()))} title={f::AttrValue::from(form.title.clone())}
            busy={props.busy} actions={Some(actions)} on_close={on_close}>
            { form.error.as_ref().map(|message| f::html! {
                <div class="alert alert-error mb-2" role="alert">{ message.clone() }</div>
            }).unwrap_or_default() }
            <div class="space-y-3">
                { for form.fields.iter().map(|field| f::html! {
                    <label class="form-control w-full">
                        <div class="label"><span class="label-text">{ field.label.clone() }</span></div>
                        { field_input(id, field, &props.on_input) }
                        { field.error.as_ref().map(|message| f::html! {
                            <div class="label"><span class="label-text-alt text-error">{ message.clone() }</span></div>
                        }).unwrap_or_default() }
                    </label>
                }) }
            </div>
        </Modal>
    }
}
