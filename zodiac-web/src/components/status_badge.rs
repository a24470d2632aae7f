use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Eq, Clone)]
pub struct StatusBadgeProps {
    pub enabled: bool,
}

#[f::function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> f::Html {
    let (color, text) = if props.enabled {
        (f::DaisyColor::Success, "enabled")
    } else {
        (f::DaisyColor::Neutral, "disabled")
    };
    f::html! { <span class={f::classes!("badge", color.class("badge"))}>{ text }</span> }
}
