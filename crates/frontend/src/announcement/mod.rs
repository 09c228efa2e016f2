pub mod outbox;
pub mod service;

use contracts::announcement::Announcement;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::global_context::use_global_context;
use crate::shared::date_utils::format_naive_date;
use crate::shared::icons::icon;
use crate::shared::messages::{Localizer, MessageKey};
use crate::shared::notifications::use_toasts;
use crate::shared::request_scope::RequestScope;
use crate::system::session::SessionProvider;
use outbox::OutboxState;
use service::{file_extension, inbox_announcement_stub, AnnouncementService};

/// Inbox of received announcements (served from the stub payload)
#[component]
pub fn AnnouncementInbox() -> impl IntoView {
    let announcements = inbox_announcement_stub().result.announcements;
    let count = announcements.len();

    view! {
        <div class="page announcement-inbox">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Announcements"</h1>
                    <Badge>{count.to_string()}</Badge>
                </div>
            </div>
            <div class="page__content">
                {announcements
                    .into_iter()
                    .map(|a| announcement_card(a, None))
                    .collect_view()}
            </div>
        </div>
    }
}

/// Announcements sent by the signed-in user, each with a cancel action
#[component]
pub fn AnnouncementOutbox() -> impl IntoView {
    let ctx = use_global_context();
    let toasts = use_toasts();
    let state = RwSignal::new(OutboxState::default());
    let scope = RequestScope::new();

    {
        let ctx = ctx.clone();
        let token = scope.begin();
        spawn_local(async move {
            let user_id = ctx.session.user_id().unwrap_or_default();
            let result = AnnouncementService::new(&ctx.config, &ctx.session)
                .get_outbox_announcement_list(&user_id)
                .await;
            if !token.is_current() {
                return;
            }
            state.update(|s| s.apply_list(result, &toasts, &ctx.messages));
        });
    }

    let on_cancel = {
        let ctx = ctx.clone();
        let scope = scope.clone();
        Callback::new(move |announcement_id: String| {
            let ctx = ctx.clone();
            let scope = scope.clone();
            spawn_local(async move {
                let result = AnnouncementService::new(&ctx.config, &ctx.session)
                    .delete_announcement(&announcement_id)
                    .await;
                if scope.is_cancelled() {
                    return;
                }
                state.update(|s| s.apply_cancel(&announcement_id, result, &toasts, &ctx.messages));
            });
        })
    };

    {
        let scope = scope.clone();
        on_cleanup(move || scope.cancel());
    }

    let error_text = ctx.messages.text(MessageKey::OutboxFetchFailed);

    view! {
        <div class="page announcement-outbox">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Sent announcements"</h1>
                    <Badge>{move || state.with(|s| s.announcements.len()).to_string()}</Badge>
                </div>
            </div>
            <div class="page__content">
                <Show when=move || state.with(|s| s.show_loader)>
                    <div class="page__loader"><Spinner /></div>
                </Show>
                <Show when=move || state.with(|s| s.show_error)>
                    <div class="alert alert--error">{error_text.clone()}</div>
                </Show>
                {move || {
                    state
                        .get()
                        .announcements
                        .into_iter()
                        .map(|a| announcement_card(a, Some(on_cancel)))
                        .collect_view()
                }}
            </div>
        </div>
    }
}

fn announcement_card(a: Announcement, on_cancel: Option<Callback<String>>) -> impl IntoView {
    let links = a.links.clone();
    let attachments = a.attachments.clone();
    let id = a.announcement_id.clone();

    view! {
        <div class="announcement-card">
            <div class="announcement-card__header">
                <span class="announcement-card__source">{a.source_id.clone()}</span>
                <Badge>{a.kind.clone()}</Badge>
                <span class="announcement-card__date">{format_naive_date(a.created_on)}</span>
                {on_cancel.map(|cb| view! {
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| cb.run(id.clone())
                    >
                        "Cancel"
                    </Button>
                })}
            </div>
            <h3 class="announcement-card__title">{a.title.clone()}</h3>
            <p class="announcement-card__description">{a.description.clone()}</p>
            <ul class="announcement-card__links">
                {links.into_iter().map(|link| {
                    let text = link.clone();
                    view! {
                        <li><a href=link target="_blank" rel="noopener">{text}</a></li>
                    }
                }).collect_view()}
            </ul>
            <div class="announcement-card__attachments">
                {attachments.into_iter().map(|att| {
                    let ext = file_extension(&att.mimetype);
                    view! {
                        <a class="attachment" href=att.download_url target="_blank" rel="noopener">
                            {icon("paperclip")}
                            <span class="attachment__title">{att.title}</span>
                            <span class="attachment__ext">{ext}</span>
                            {att.filesize.map(|size| view! { <span class="attachment__size">{size}</span> })}
                        </a>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
