use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::services::{Notification, NotificationLevel, Notifier};

#[component]
pub fn ErrorAlert(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="mb-6 p-4 rounded-lg border text-sm bg-red-500/10 border-red-500/30 text-red-300">
            <p class="flex items-center gap-2">
                <span>"✕"</span>
                <span>{message}</span>
            </p>
        </div>
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Reactive stack of transient notifications.
#[derive(Clone)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: Arc<AtomicU64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: Arc::default(),
        }
    }

    pub fn items(&self) -> RwSignal<Vec<Toast>> {
        self.items
    }

    pub fn dismiss(&self, id: u64) {
        self.items.try_update(|items| items.retain(|t| t.id != id));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toasts {
    fn notify(&self, notification: Notification) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let millis = u32::try_from(notification.duration.as_millis()).unwrap_or(u32::MAX);

        self.items
            .try_update(|items| items.push(Toast { id, notification }));

        let toasts = self.clone();
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            toasts.dismiss(id);
        });
    }
}

/// Newest-first toast column pinned to the top right of its container.
#[component]
pub fn ToastStack(toasts: Toasts) -> impl IntoView {
    let items = toasts.items();
    let newest_first = move || {
        let mut list = items.get();
        list.reverse();
        list
    };

    view! {
        <div class="absolute top-4 right-4 z-50 flex flex-col gap-3 w-80">
            <For
                each=newest_first
                key=|toast| toast.id
                children=move |toast| {
                    let toasts = toasts.clone();
                    let classes = match toast.notification.level {
                        NotificationLevel::Success => "bg-emerald-500/15 border-emerald-400/40 text-emerald-200",
                        NotificationLevel::Error => "bg-red-500/15 border-red-400/40 text-red-200",
                    };
                    let icon = if toast.notification.is_error() { "✕" } else { "✓" };

                    view! {
                        <div
                            role="status"
                            class=format!("p-4 rounded-lg border text-sm shadow-lg backdrop-blur-sm cursor-pointer {}", classes)
                            on:click=move |_| toasts.dismiss(toast.id)
                        >
                            <p class="flex items-start gap-2">
                                <span>{icon}</span>
                                <span>{toast.notification.text.clone()}</span>
                            </p>
                        </div>
                    }
                }
            />
        </div>
    }
}
