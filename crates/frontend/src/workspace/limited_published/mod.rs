pub mod actions;
mod api;
pub mod state;

use contracts::content::ContentItem;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;
use thaw::*;

use crate::layout::global_context::use_global_context;
use crate::shared::api_utils::page_origin;
use crate::shared::clipboard::copy_with_result;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::messages::{Localizer, MessageKey};
use crate::shared::notifications::{use_toasts, Notifier};
use crate::shared::request_scope::RequestScope;
use crate::system::session::SessionProvider;
use actions::{unlisted_share_url, ActionType, ListedContent};
use state::{parse_page_param, LimitedPublishedState};

/// Workspace list of the current user's unlisted ("limited published") content.
///
/// The `pageNumber` route parameter drives fetching; page navigation goes
/// through the router so every page change re-enters the same fetch path.
#[component]
pub fn LimitedPublishedList() -> impl IntoView {
    let ctx = use_global_context();
    let toasts = use_toasts();
    let params = use_params_map();
    let navigate = use_navigate();

    let state = RwSignal::new(LimitedPublishedState::default());
    let fetch_scope = RequestScope::new();
    let delete_scope = RequestScope::new();

    let fetch_page = {
        let ctx = ctx.clone();
        let scope = fetch_scope.clone();
        move |page: u32| {
            let user_id = ctx.session.user_id();
            let mut request = None;
            state.update(|s| {
                request = s.begin_fetch(&ctx.config, user_id.as_deref(), page, &toasts, &ctx.messages)
            });
            let Some(request) = request else {
                return;
            };

            let token = scope.begin();
            let ctx = ctx.clone();
            spawn_local(async move {
                let result = api::search_content(&ctx.config, &ctx.session, &request).await;
                if !token.is_current() {
                    log::debug!("Dropping stale limited published response for page {}", page);
                    return;
                }
                state.update(|s| s.apply_search(result, &ctx.pagination, &toasts, &ctx.messages));
            });
        }
    };

    Effect::new(move |_| {
        let page = parse_page_param(params.with(|p| p.get("pageNumber")).as_deref());
        fetch_page(page);
    });

    {
        let fetch_scope = fetch_scope.clone();
        let delete_scope = delete_scope.clone();
        on_cleanup(move || {
            fetch_scope.cancel();
            delete_scope.cancel();
        });
    }

    let on_navigate = {
        let config = ctx.config.clone();
        Callback::new(move |page: u32| {
            let mut route = None;
            state.update(|s| route = s.navigate_to_page(page, &config));
            if let Some(route) = route {
                navigate(&route, NavigateOptions::default());
            }
        })
    };

    let on_content_click = {
        let messages = ctx.messages.clone();
        Callback::new(move |(action, item): (ActionType, ContentItem)| match action {
            ActionType::Delete => state.update(|s| s.request_delete(&item.identifier)),
            ActionType::ShareComponent => {
                let url = unlisted_share_url(&page_origin(), &item);
                let copied = messages.text(MessageKey::ShareLinkCopied);
                let failed = messages.text(MessageKey::ShareLinkFailed);
                copy_with_result(&url, move |ok| {
                    if ok {
                        toasts.info(&copied);
                    } else {
                        toasts.error(&failed);
                    }
                });
            }
        })
    };

    let on_delete_approved = {
        let ctx = ctx.clone();
        Callback::new(move |_: ()| {
            let mut identifier = None;
            state.update(|s| identifier = s.approve_delete());
            let Some(identifier) = identifier else {
                return;
            };

            let token = delete_scope.begin();
            let ctx = ctx.clone();
            spawn_local(async move {
                let result = api::retire_content(&ctx.config, &ctx.session, &identifier).await;
                if !token.is_current() {
                    return;
                }
                state.update(|s| s.apply_delete(&identifier, result, &toasts, &ctx.messages));
            });
        })
    };

    let on_delete_denied = Callback::new(move |_: ()| state.update(|s| s.deny_delete()));

    let messages = ctx.messages.clone();
    let loader_text = {
        let messages = messages.clone();
        move || messages.text(state.with(|s| s.loader_message))
    };
    let no_result_title = messages.text(MessageKey::NoResultTitle);
    let no_result_text = messages.text(MessageKey::NoResultText);
    let error_text = messages.text(MessageKey::LimitedPublishedFetchFailed);

    view! {
        <div class="page limited-published">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Limited publishing"</h1>
                    <Badge>{move || state.with(|s| s.total_count).to_string()}</Badge>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || state.with(|s| s.show_loader)>
                    <div class="page__loader">
                        <Spinner />
                        <span>{loader_text.clone()}</span>
                    </div>
                </Show>

                <Show when=move || state.with(|s| s.show_error && !s.show_loader)>
                    <div class="alert alert--error">{error_text.clone()}</div>
                </Show>

                <Show when=move || state.with(|s| s.no_result && !s.show_loader && !s.show_error)>
                    <div class="no-result">
                        <h3 class="no-result__title">{no_result_title.clone()}</h3>
                        <p class="no-result__text">{no_result_text.clone()}</p>
                    </div>
                </Show>

                <Show when=move || state.with(|s| !s.show_loader && !s.no_result && !s.show_error)>
                    <div class="content-grid">
                        <For
                            each=move || state.get().items
                            key=|item| item.content.identifier.clone()
                            children=move |item| content_card(item, on_content_click)
                        />
                    </div>
                    <PaginationControls
                        pager=Signal::derive(move || state.get().pager)
                        on_navigate=on_navigate
                    />
                </Show>
            </div>

            <Show when=move || state.with(|s| s.pending_delete.is_some())>
                <ConfirmDialog
                    title="Delete content"
                    message="Are you sure you want to delete this content?"
                    approve_label="Delete"
                    deny_label="Cancel"
                    on_approve=on_delete_approved
                    on_deny=on_delete_denied
                />
            </Show>
        </div>
    }
}

fn content_card(item: ListedContent, on_click: Callback<(ActionType, ContentItem)>) -> impl IntoView {
    let name = item
        .content
        .name
        .clone()
        .unwrap_or_else(|| item.content.identifier.clone());
    let content_type = item.content.content_type.clone().unwrap_or_default();
    let updated = item
        .content
        .last_updated_on
        .as_deref()
        .map(format_date)
        .unwrap_or_default();
    let left = item.action.left.clone();
    let right = item.action.right.clone();
    let share_item = item.content.clone();
    let delete_item = item.content;

    view! {
        <div class="content-card">
            <div class="content-card__body">
                <div class="content-card__title">{name}</div>
                <div class="content-card__meta">
                    <span>{content_type}</span>
                    <span>{updated}</span>
                </div>
            </div>
            <div class="content-card__actions">
                <button
                    class="content-card__action"
                    title="Copy share link"
                    disabled=!left.clickable
                    on:click=move |_| on_click.run((left.action_type, share_item.clone()))
                >
                    {icon(left.icon.unwrap_or("linkify"))}
                </button>
                <button
                    class=format!("content-card__action {}", right.classes.unwrap_or_default())
                    title="Delete"
                    disabled=!right.clickable
                    on:click=move |_| on_click.run((right.action_type, delete_item.clone()))
                >
                    {icon(right.icon.unwrap_or("trash"))}
                </button>
            </div>
        </div>
    }
}
