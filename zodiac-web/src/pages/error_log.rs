use crate::app::view::AppHandlers;
use crate::components::daisy_ui::foundation as f;
use zodiac_core::Page;
use zodiac_core::schema::ErrorLog;

#[derive(f::Properties, PartialEq, Clone)]
pub struct ErrorLogPageProps {
    pub log: ErrorLog,
    #[prop_or_default]
    pub handlers: AppHandlers,
}

#[f::function_component(ErrorLogPage)]
pub fn error_log_page(props: &ErrorLogPageProps) -> f::Html {
    let log = &props.log;
    let reload = {
        let cb = props.handlers.reload.clone();
        f::Callback::from(move |_| cb.emit(()))
    };
    f::html! {
        <section class="card bg-base-100 shadow">
            <div class="card-body space-y-3">
                <div class="flex flex-wrap items-center justify-between gap-2">
                    <h2 class="card-title">{ Page::ErrorLog.title() }</h2>
                    { log.count_last_hour.map(|count| f::html! {
                        <span class="badge badge-warning">{ format!("{count} in the last hour") }</span>
                    }).unwrap_or_default() }
                    <button class="btn btn-sm btn-ghost" onclick={reload}>{"🔄 Refresh"}</button>
                </div>
                if log.errors.is_empty() {
                    <p class="text-base-content/60">{"No errors recorded."}</p>
                }
                { for log.errors.iter().map(|entry| f::html! {
                    <details class="collapse collapse-arrow border border-base-300">
                        <summary class="collapse-title">
                            <span class="font-mono text-sm">{ entry.time.clone() }</span>{" "}{ entry.message.clone() }
                        </summary>
                        <div class="collapse-content">
                            <pre class="text-xs whitespace-pre-wrap">{ entry.traceback.clone().unwrap_or_default() }</pre>
                        </div>
                    </details>
                }) }
            </div>
        </section>
    }
}
