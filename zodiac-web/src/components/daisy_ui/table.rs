use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct TableProps {
    pub headers: Vec<f::AttrValue>,
    pub rows: Vec<Vec<f::Html>>,
    /// Shown in a single full-width row when `rows` is empty.
    #[prop_or_default]
    pub empty_text: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    /// Makes rows clickable; receives the row index.
    #[prop_or_default]
    pub on_row_click: Option<f::Callback<usize>>,
}

#[f::function_component(Table)]
pub fn table(props: &TableProps) -> f::Html {
    let class = f::class_list(&["table", "table-zebra", "w-full"], &props.class);
    let span = props.headers.len().max(1).to_string();
    f::html! {
        <div class="overflow-x-auto">
            <table class={class} role="table">
                <thead>
                    <tr>
                        { for props.headers.iter().map(|head| f::html! { <th scope="col">{ head.clone() }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    if props.rows.is_empty() {
                        <tr><td colspan={span} class="text-center text-base-content/60">{ props.empty_text.clone().unwrap_or_default() }</td></tr>
                    }
                    { for props.rows.iter().enumerate().map(|(index, row)| {
                        let onclick = props.on_row_click.clone().map(|cb| {
                            f::Callback::from(move |_: f::MouseEvent| cb.emit(index))
                        });
                        let clickable = onclick.is_some().then_some("hover cursor-pointer");
                        f::html! {
                            <tr class={f::classes!(clickable)} onclick={onclick}>
                                { for row.iter().map(|cell| f::html! { <td>{ cell.clone() }</td> }) }
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}
