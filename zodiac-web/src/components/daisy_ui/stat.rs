use crate::components::daisy_ui::foundation as f;
use zodiac_core::StatTile;

#[derive(f::Properties, PartialEq, Clone)]
pub struct StatProps {
    pub tiles: Vec<StatTile>,
    #[prop_or_default]
    pub title: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Stat)]
pub fn stat(props: &StatProps) -> f::Html {
    let class = f::class_list(
        &["stats", "stats-vertical", "lg:stats-horizontal", "shadow", "bg-base-100"],
        &props.class,
    );
    f::html! {
        <section class="space-y-2">
            { props.title.as_ref().map(|t| f::html! { <h3 class="font-semibold">{ t.clone() }</h3> }).unwrap_or_default() }
            <div class={class}>
                { for props.tiles.iter().map(|tile| f::html! {
                    <div class="stat">
                        <div class="stat-title">{ tile.label }</div>
                        <div class="stat-value text-2xl">{ tile.value.clone() }</div>
                    </div>
                }) }
            </div>
        </section>
    }
}
