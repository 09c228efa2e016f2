use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;
use thaw::*;

use crate::announcement::{AnnouncementInbox, AnnouncementOutbox};
use crate::layout::Shell;
use crate::shared_feature::contributor_profile::ContributorProfilePopup;
use crate::workspace::limited_published::LimitedPublishedList;

/// Sourcing page that opens the profile popup for `/sourcing/contributor/:kind/:id`,
/// where `kind` is `org` or `user`.
#[component]
fn ContributorProfilePage() -> impl IntoView {
    let params = use_params_map();
    let open = RwSignal::new(true);
    let kind = move || params.with(|p| p.get("kind")).unwrap_or_default();
    let id = move || params.with(|p| p.get("id")).unwrap_or_default();

    view! {
        <div class="page contributor-page">
            <Button appearance=ButtonAppearance::Primary on_click=move |_| open.set(true)>
                "Show profile"
            </Button>
            <Show when=move || open.get()>
                {move || {
                    let on_close = Callback::new(move |_: ()| open.set(false));
                    if kind() == "org" {
                        view! { <ContributorProfilePopup org_id=id() on_close=on_close /> }.into_any()
                    } else {
                        view! { <ContributorProfilePopup user_id=id() on_close=on_close /> }.into_any()
                    }
                }}
            </Show>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <div class="page">"Page not found."</div> }>
                    <Route
                        path=path!("/")
                        view=|| view! { <Redirect path="/workspace/content/limited/publish/1" /> }
                    />
                    <Route
                        path=path!("/workspace/content/limited/publish/:pageNumber")
                        view=LimitedPublishedList
                    />
                    <Route path=path!("/announcement/inbox") view=AnnouncementInbox />
                    <Route path=path!("/announcement/outbox") view=AnnouncementOutbox />
                    <Route
                        path=path!("/sourcing/contributor/:kind/:id")
                        view=ContributorProfilePage
                    />
                </Routes>
            </Shell>
        </Router>
    }
}
