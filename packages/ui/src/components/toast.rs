//! Transient notifications.
//!
//! Every backend failure and confirmation the application surfaces goes
//! through here: a context-held queue rendered as a stack in the corner,
//! each entry auto-dismissing after a few seconds.

use dioxus::prelude::*;

const DISMISS_AFTER_SECS: u64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: u64,
    kind: ToastKind,
    message: String,
}

#[derive(Debug, Clone, Default)]
struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

/// Handle for pushing notifications from any event handler.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
}

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let mut queue = self.queue;
        let id = {
            let mut q = queue.write();
            q.next_id += 1;
            let id = q.next_id;
            q.toasts.push(Toast { id, kind, message });
            id
        };
        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(std::time::Duration::from_secs(DISMISS_AFTER_SECS)).await;
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(std::time::Duration::from_secs(DISMISS_AFTER_SECS)).await;

            queue.write().toasts.retain(|toast| toast.id != id);
        });
    }
}

/// Get the toast handle from the nearest [`ToastProvider`].
pub fn use_toast() -> Toasts {
    Toasts {
        queue: use_context::<Signal<ToastQueue>>(),
    }
}

/// Provider component that owns the queue and renders the stack.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let queue = use_signal(ToastQueue::default);
    use_context_provider(|| queue);

    rsx! {
        {children}
        div {
            class: "toast-stack",
            for toast in queue().toasts {
                div {
                    key: "{toast.id}",
                    class: toast.kind.class(),
                    "{toast.message}"
                }
            }
        }
    }
}
