use crate::shared::icons::icon;
use crate::shared::pagination::Pager;
use leptos::prelude::*;

/// Page strip for page-numbered lists (1-indexed).
///
/// Every click is forwarded to `on_navigate`; range checks are the caller's job.
#[component]
pub fn PaginationControls(
    #[prop(into)] pager: Signal<Option<Pager>>,
    on_navigate: Callback<u32>,
) -> impl IntoView {
    let current = move || pager.get().map(|p| p.current_page).unwrap_or(1);
    let total = move || pager.get().map(|p| p.total_pages).unwrap_or(0);

    view! {
        <Show when=move || { total() > 1 }>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_navigate.run(current().saturating_sub(1))
                    disabled=move || { current() <= 1 }
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                <For
                    each=move || pager.get().map(|p| p.pages).unwrap_or_default()
                    key=|page| *page
                    children=move |page| {
                        view! {
                            <button
                                class=move || {
                                    if current() == page {
                                        "pagination-btn pagination-btn--active"
                                    } else {
                                        "pagination-btn"
                                    }
                                }
                                on:click=move |_| on_navigate.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                    }
                />
                <button
                    class="pagination-btn"
                    on:click=move |_| on_navigate.run(current() + 1)
                    disabled=move || { current() >= total() }
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
                <span class="pagination-info">
                    {move || format!("{} / {}", current(), total().max(1))}
                </span>
            </div>
        </Show>
    }
}
