use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::notifications::ToastService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    let toasts = ToastService::new(ctx.config.notifications.dismiss_after_ms);

    // Collaborators injected into every page via context.
    provide_context(ctx);
    provide_context(toasts);

    view! {
        <AppRoutes />
    }
}
