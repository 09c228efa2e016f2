use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastLevel {
    fn css_class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast--success",
            ToastLevel::Info => "toast toast--info",
            ToastLevel::Warning => "toast toast--warning",
            ToastLevel::Error => "toast toast--error",
        }
    }
}

/// Sink for user-facing notifications
pub trait Notifier {
    fn notify(&self, level: ToastLevel, message: &str);

    fn success(&self, message: &str) {
        self.notify(ToastLevel::Success, message);
    }

    fn info(&self, message: &str) {
        self.notify(ToastLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.notify(ToastLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.notify(ToastLevel::Error, message);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub level: ToastLevel,
    pub message: String,
}

/// Toast queue shared through context and rendered by `ToastHost`
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    dismiss_after_ms: u32,
}

impl ToastService {
    pub fn new(dismiss_after_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            dismiss_after_ms,
        }
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }
}

impl Notifier for ToastService {
    fn notify(&self, level: ToastLevel, message: &str) {
        let toast = Toast {
            id: Uuid::new_v4(),
            level,
            message: message.to_string(),
        };
        let id = toast.id;
        self.toasts.update(|list| list.push(toast));

        let svc = *self;
        let delay = self.dismiss_after_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            svc.dismiss(id);
        });
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || svc.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.level.css_class() role="status">
                            <span class="toast__message">{toast.message.clone()}</span>
                            <button class="toast__close" on:click=move |_| svc.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
pub mod testing {
    use super::{Notifier, ToastLevel};
    use std::cell::RefCell;

    /// Notifier that records every call
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub calls: RefCell<Vec<(ToastLevel, String)>>,
    }

    impl RecordingNotifier {
        pub fn levels(&self) -> Vec<ToastLevel> {
            self.calls.borrow().iter().map(|(level, _)| *level).collect()
        }

        pub fn last(&self) -> Option<(ToastLevel, String)> {
            self.calls.borrow().last().cloned()
        }

        pub fn is_empty(&self) -> bool {
            self.calls.borrow().is_empty()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, level: ToastLevel, message: &str) {
            self.calls.borrow_mut().push((level, message.to_string()));
        }
    }
}
