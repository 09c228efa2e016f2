mod api;
pub mod state;

use contracts::registry::Contributor;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;
use thaw::*;

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::shared::messages::{Localizer, MessageKey};
use crate::shared::modal_frame::ModalFrame;
use crate::shared::notifications::use_toasts;
use crate::shared::request_scope::RequestScope;
use state::{CloseGuard, ContributorProfileState, LoadState, ProfileInputs};

/// Popup with a contributor's (person or organisation) profile.
///
/// Outside the sourcing area the parent passes `user_details`; inside it the
/// profile is fetched from the registry by `org_id` or `user_id`.
/// `on_close` runs once, on explicit close or when the popup is torn down.
#[component]
pub fn ContributorProfilePopup(
    #[prop(optional, into)] user_id: Option<String>,
    #[prop(optional, into)] org_id: Option<String>,
    #[prop(optional)] user_details: Option<Contributor>,
    #[prop(optional)] show_org_data: Option<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_global_context();
    let toasts = use_toasts();
    let location = use_location();

    let state = RwSignal::new(ContributorProfileState::new(show_org_data));
    let scope = RequestScope::new();
    let guard = CloseGuard::default();

    let inputs = ProfileInputs {
        user_id,
        org_id,
        user_details,
    };
    let route = location.pathname.get_untracked();

    let mut fetch = None;
    state.update(|s| fetch = s.start(&route, &inputs, &toasts, &ctx.messages));

    if let Some(fetch) = fetch {
        let token = scope.begin();
        let ctx = ctx.clone();
        spawn_local(async move {
            let result = api::search_registry(&ctx.config, &ctx.session, &fetch.request).await;
            if !token.is_current() {
                log::debug!("Dropping registry response for a closed popup");
                return;
            }
            state.update(|s| s.apply_search(fetch.entity, result, &toasts, &ctx.messages));
        });
    }

    let close = {
        let scope = scope.clone();
        let guard = guard.clone();
        Callback::new(move |_: ()| {
            scope.cancel();
            if guard.fire() {
                on_close.run(());
            }
        })
    };

    on_cleanup(move || {
        scope.cancel();
        if guard.fire() {
            on_close.run(());
        }
    });

    let messages = ctx.messages.clone();

    view! {
        <ModalFrame on_close=close size="small">
            <div class="modal__content contributor-profile">
                {move || {
                    let s = state.get();
                    match s.load_state {
                        LoadState::Loading => view! {
                            <div class="contributor-profile__loader"><Spinner /></div>
                        }.into_any(),
                        LoadState::Loaded => profile_view(&s),
                        _ => {
                            let key = s.notice.unwrap_or(MessageKey::ProfileNotFound);
                            view! {
                                <div class="contributor-profile__empty">{messages.text(key)}</div>
                            }.into_any()
                        }
                    }
                }}
            </div>
            <div class="modal__actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| close.run(())>
                    "Close"
                </Button>
            </div>
        </ModalFrame>
    }
}

fn profile_view(s: &ContributorProfileState) -> AnyView {
    let full_name = s.full_name.clone();
    let kind_icon = if s.is_org { icon("building") } else { icon("user") };
    let contributor = s.contributor.clone();
    let email = contributor
        .as_ref()
        .and_then(|c| c.detail("email"))
        .map(str::to_string);
    let org_section = match (&contributor, s.show_org_data) {
        (Some(Contributor::Organization(org)), true) => Some(view! {
            <div class="contributor-profile__org">
                {org.description.clone().map(|d| view! { <p>{d}</p> })}
                {org.osid.clone().map(|id| view! {
                    <span class="contributor-profile__id">{id}</span>
                })}
            </div>
        }),
        _ => None,
    };

    view! {
        <div class="contributor-profile__header">
            {kind_icon}
            <h3 class="contributor-profile__name">{full_name}</h3>
            {s.is_org.then(|| view! { <Badge>"Organisation"</Badge> })}
        </div>
        {email.map(|e| view! { <div class="contributor-profile__email">{e}</div> })}
        {org_section}
    }
    .into_any()
}
