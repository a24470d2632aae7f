use crate::components::daisy_ui::foundation as f;
use zodiac_core::Page;

#[derive(f::Properties, PartialEq, Clone)]
pub struct NavBarProps {
    pub current: Page,
    #[prop_or_default]
    pub on_navigate: f::Callback<Page>,
}

#[f::function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> f::Html {
    f::html! {
        <nav class="navbar bg-base-100 shadow-sm flex-wrap gap-2" aria-label="Sections">
            <span class="px-2 text-lg font-bold">{"♈ Zodiac admin"}</span>
            <ul class="menu menu-horizontal flex-wrap gap-1">
                { for Page::nav().into_iter().map(|page| {
                    let active = page.same_section(&props.current);
                    let title = page.title();
                    let onclick = {
                        let cb = props.on_navigate.clone();
                        f::Callback::from(move |_| cb.emit(page.clone()))
                    };
                    f::html! {
                        <li>
                            <button class={f::classes!(active.then_some("active"))}
                                aria-current={active.then(|| f::AttrValue::from("page"))}
                                onclick={onclick}>
                                { title }
                            </button>
                        </li>
                    }
                }) }
            </ul>
        </nav>
    }
}
