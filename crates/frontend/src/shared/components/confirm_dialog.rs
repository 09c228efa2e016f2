use leptos::prelude::*;
use thaw::*;

use crate::shared::modal_frame::ModalFrame;

/// Approve/deny dialog. Exactly one of the callbacks runs per decision;
/// dismissing the dialog counts as a denial.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(optional, into)] approve_label: Option<String>,
    #[prop(optional, into)] deny_label: Option<String>,
    on_approve: Callback<()>,
    on_deny: Callback<()>,
) -> impl IntoView {
    let approve_label = approve_label.unwrap_or_else(|| "Yes".to_string());
    let deny_label = deny_label.unwrap_or_else(|| "No".to_string());

    view! {
        <ModalFrame on_close=on_deny size="mini">
            <div class="modal__header">{title}</div>
            <div class="modal__content">
                <p>{message}</p>
            </div>
            <div class="modal__actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_deny.run(())
                >
                    {deny_label}
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_approve.run(())
                >
                    {approve_label}
                </Button>
            </div>
        </ModalFrame>
    }
}
