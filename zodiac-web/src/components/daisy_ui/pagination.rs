use crate::components::daisy_ui::foundation as f;
use zodiac_core::Pager;

/// Page buttons shown on either side of the current page.
const WINDOW: u64 = 2;

#[derive(f::Properties, PartialEq, Clone)]
pub struct PaginationProps {
    pub pager: Pager,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_change: f::Callback<u32>,
}

/// Zero-based page numbers to render, with `None` marking a gap.
#[must_use]
pub fn visible_pages(current: u64, total: u64) -> Vec<Option<u64>> {
    let total = total.max(1);
    let first = current.saturating_sub(WINDOW);
    let last = (current + WINDOW).min(total - 1);
    let mut pages = Vec::new();
    if first > 0 {
        pages.push(Some(0));
        if first > 1 {
            pages.push(None);
        }
    }
    pages.extend((first..=last).map(Some));
    if last + 1 < total {
        if last + 2 < total {
            pages.push(None);
        }
        pages.push(Some(total - 1));
    }
    pages
}

#[f::function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> f::Html {
    let class = f::class_list(&["join"], &props.class);
    let pager = props.pager;
    let current = u64::from(pager.page);
    let go_to = |page: u64| {
        let cb = props.on_change.clone();
        let page = u32::try_from(page).unwrap_or(u32::MAX);
        f::Callback::from(move |_| cb.emit(page))
    };
    f::html! {
        <div class={class} role="group" aria-label="Pagination">
            <button class="join-item btn btn-sm" disabled={!pager.has_prev()} onclick={go_to(current.saturating_sub(1))}>{"«"}</button>
            { for visible_pages(current, pager.total_pages()).into_iter().map(|slot| match slot {
                Some(page) => {
                    let mut btn_class = f::classes!("join-item", "btn", "btn-sm");
                    if page == current {
                        btn_class.push("btn-active");
                    }
                    let label = (page + 1).to_string();
                    f::html! { <button class={btn_class} aria-current={if page == current { Some::<f::AttrValue>("page".into()) } else { None }} onclick={go_to(page)}>{ label }</button> }
                }
                None => f::html! { <button class="join-item btn btn-sm btn-disabled" aria-hidden="true">{"…"}</button> },
            }) }
            <button class="join-item btn btn-sm" disabled={!pager.has_next()} onclick={go_to(current + 1)}>{"»"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::visible_pages;

    #[test]
    fn short_ranges_show_every_page() {
        assert_eq!(visible_pages(0, 3), vec![Some(0), Some(1), Some(2)]);
        assert_eq!(visible_pages(0, 0), vec![Some(0)]);
    }

    #[test]
    fn long_ranges_collapse_into_gaps() {
        assert_eq!(
            visible_pages(10, 40),
            vec![
                Some(0),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(39)
            ]
        );
        assert_eq!(
            visible_pages(1, 40),
            vec![Some(0), Some(1), Some(2), Some(3), None, Some(39)]
        );
    }
}
