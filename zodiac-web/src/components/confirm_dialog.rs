use crate::components::daisy_ui::Modal;
use crate::components::daisy_ui::foundation as f;
use zodiac_core::Confirmation;

#[derive(f::Properties, PartialEq, Clone)]
pub struct ConfirmDialogProps {
    pub confirmation: Option<Confirmation>,
    #[prop_or_default]
    pub on_resolve: f::Callback<bool>,
}

/// Asks before anything is deleted. Closing the dialog counts as "no".
#[f::function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> f::Html {
    let Some(confirmation) = &props.confirmation else {
        return f::Html::default();
    };
    let answer = |accepted: bool| {
        let cb = props.on_resolve.clone();
        f::Callback::from(move |_| cb.emit(accepted))
    };
    let on_close = {
        let cb = props.on_resolve.clone();
        f::Callback::from(move |()| cb.emit(false))
    };
    let actions = f::html! {
        <>
            <button class="btn btn-ghost" onclick={answer(false)}>{"Cancel"}</button>
            <button class="btn btn-error" onclick={answer(true)}>{"Delete"}</button>
        </>
    };
    f::html! {
        <Modal
            open={true}
            id={Some(f::AttrValue::from("confirm-dialog"))}
            title={f::AttrValue::from("Please confirm")}
            description={Some(f::AttrValue::from(confirmation.prompt.clone()))}
            actions={Some(actions)}
            on_close={on_close}
        />
    }
}
