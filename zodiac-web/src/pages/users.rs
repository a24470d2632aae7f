use crate::app::view::AppHandlers;
use crate::components::daisy_ui::foundation as f;
use crate::components::daisy_ui::{Pagination, Stat};
use crate::components::resource_list::ResourceListView;
use zodiac_core::{Page, StatTile, UsersView};

#[derive(f::Properties, PartialEq, Clone)]
pub struct UsersPageProps {
    pub view: UsersView,
    #[prop_or_default]
    pub handlers: AppHandlers,
}

fn overview_tiles(view: &UsersView) -> Vec<StatTile> {
    let overview = &view.overview;
    vec![
        StatTile::new("Users", overview.total),
        StatTile::new("Subscribed", overview.subscribed),
        StatTile::new("Not subscribed", overview.not_subscribed),
        StatTile::new("Registered", overview.registered),
        StatTile::new("Not registered", overview.not_registered),
    ]
}

/// Server-paginated user directory. The search box queries the backend;
/// the list's own filter only narrows the page on screen.
#[f::function_component(UsersPage)]
pub fn users_page(props: &UsersPageProps) -> f::Html {
    let view = &props.view;
    let query = f::use_state(|| view.search.clone());
    {
        let query = query.clone();
        f::use_effect_with(view.search.clone(), move |search| {
            query.set(search.clone());
            || ()
        });
    }
    let on_query = {
        let query = query.clone();
        f::Callback::from(move |e: f::InputEvent| {
            let event: &f::Event = &e;
            query.set(f::event_value(event));
        })
    };
    let search = {
        let cb = props.handlers.search_users.clone();
        let query = query.clone();
        f::Callback::from(move |_| cb.emit((*query).clone()))
    };
    let on_page = {
        let cb = props.handlers.navigate.clone();
        let search = view.search.clone();
        f::Callback::from(move |page: u32| {
            cb.emit(Page::Users {
                page,
                search: search.clone(),
            });
        })
    };
    f::html! {
        <div class="space-y-4">
            <h2 class="text-2xl font-bold">{ Page::users().title() }</h2>
            <Stat tiles={overview_tiles(view)} />
            <div class="join w-full">
                <input type="search" class="input input-bordered join-item w-full"
                    placeholder="Search by id, username or name" aria-label="Search users"
                    value={(*query).clone()} oninput={on_query} />
                <button class="btn btn-primary join-item" onclick={search}>{"🔍 Search"}</button>
            </div>
            if !view.search.is_empty() {
                <p class="text-sm">{ format!("{} users match \"{}\"", view.pager.total, view.search) }</p>
            }
            <ResourceListView list={view.list.clone()} handlers={props.handlers.clone()} />
            <Pagination pager={view.pager} on_change={on_page} />
        </div>
    }
}
