use crate::components::daisy_ui::foundation as f;
use gloo::timers::callback::Timeout;
use zodiac_core::{Notice, NoticeId};

#[derive(f::Properties, PartialEq, Clone)]
pub struct ToastProps {
    pub notices: Vec<Notice>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_dismiss: f::Callback<NoticeId>,
    /// Fired by each entry's timer when its TTL elapses.
    #[prop_or_default]
    pub on_expire: f::Callback<NoticeId>,
}

/// Stack of notices, newest last. Each one expires after its TTL.
#[f::function_component(Toast)]
pub fn toast(props: &ToastProps) -> f::Html {
    let class = f::class_list(&["toast", "toast-end", "toast-top", "z-50"], &props.class);
    f::html! {
        <div class={class} role="status" aria-live="polite">
            { for props.notices.iter().map(|notice| f::html! {
                <ToastEntry key={notice.id.get().to_string()} notice={notice.clone()} on_dismiss={props.on_dismiss.clone()} on_expire={props.on_expire.clone()} />
            }) }
        </div>
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct ToastEntryProps {
    pub notice: Notice,
    pub on_dismiss: f::Callback<NoticeId>,
    pub on_expire: f::Callback<NoticeId>,
}

#[f::function_component(ToastEntry)]
pub fn toast_entry(props: &ToastEntryProps) -> f::Html {
    let notice = &props.notice;
    {
        let id = notice.id;
        let ttl_ms = notice.ttl_ms;
        let on_expire = props.on_expire.clone();
        f::use_effect_with(id, move |_| {
            let timer = Timeout::new(ttl_ms, move || on_expire.emit(id));
            move || drop(timer)
        });
    }
    let dismiss = {
        let id = notice.id;
        let cb = props.on_dismiss.clone();
        f::Callback::from(move |_| cb.emit(id))
    };
    let class = f::classes!("alert", notice.kind.css(), "flex", "items-start", "gap-2");
    f::html! {
        <div class={class}>
            <span aria-hidden="true">{ notice.kind.icon() }</span>
            <div class="flex-1">
                <div class="font-semibold">{ notice.title.clone() }</div>
                <div class="text-sm whitespace-pre-line">{ notice.message.clone() }</div>
            </div>
            <button class="btn btn-ghost btn-xs" aria-label="Dismiss" onclick={dismiss}>{"✕"}</button>
        </div>
    }
}
