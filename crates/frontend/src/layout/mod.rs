pub mod global_context;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::notifications::ToastHost;

/// Application shell: top navigation, routed content, toast stack.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <header class="top-header">
                <span class="top-header__brand">"Workspace"</span>
                <nav class="top-header__nav">
                    <A href="/workspace/content/limited/publish/1">"Limited publishing"</A>
                    <A href="/announcement/inbox">"Announcements"</A>
                    <A href="/announcement/outbox">"Sent"</A>
                </nav>
            </header>
            <main class="app-shell__content">{children()}</main>
            <ToastHost />
        </div>
    }
}
