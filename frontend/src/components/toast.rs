//! Toast notifications.
//!
//! [`Toasts`] is provided as context at the app root and implements
//! [`Notifier`], so form logic can report outcomes without knowing about
//! the DOM. [`Toaster`] renders whatever is currently queued.

use cakes_core::{Notice, Notifier};
use gloo_timers::callback::Timeout;
use leptos::*;

use crate::config::{TOAST_DURATION_MS, TOAST_LIMIT};

/// A queued notice.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Put `toast` at the front, keeping at most `limit` entries.
pub fn push_toast(queue: &mut Vec<Toast>, toast: Toast, limit: usize) {
    queue.insert(0, toast);
    queue.truncate(limit);
}

/// Handle to the toast queue.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    /// Create the queue and provide it to descendants.
    pub fn provide() -> Self {
        let toasts = Self {
            items: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        };
        provide_context(toasts);
        toasts
    }

    /// Queue provided by an ancestor.
    pub fn from_context() -> Self {
        expect_context::<Toasts>()
    }

    pub fn dismiss(&self, id: u64) {
        // The timer may fire after the app is gone.
        self.items.try_update(|items| items.retain(|t| t.id != id));
    }
}

impl Notifier for Toasts {
    fn notify(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        log::debug!("🔔 {}", notice.title);
        self.items
            .update(|items| push_toast(items, Toast { id, notice }, TOAST_LIMIT));

        let toasts = *self;
        Timeout::new(TOAST_DURATION_MS, move || toasts.dismiss(id)).forget();
    }
}

/// Renders the toast queue.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = Toasts::from_context();

    view! {
        <ol class="toaster" aria-live="polite">
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let Notice { title, description, variant } = toast.notice;

                    view! {
                        <li class=format!("toast {}", variant.css_class()) role="status">
                            <div class="toast-body">
                                <div class="toast-title">{title}</div>
                                {description.map(|text| view! { <div class="toast-description">{text}</div> })}
                            </div>
                            <button
                                class="toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "×"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> Toast {
        Toast {
            id,
            notice: Notice::new(format!("toast {id}")),
        }
    }

    #[test]
    fn test_newest_toast_wins_at_limit() {
        let mut queue = Vec::new();
        push_toast(&mut queue, toast(0), 1);
        push_toast(&mut queue, toast(1), 1);
        assert_eq!(queue, vec![toast(1)]);
    }

    #[test]
    fn test_queue_keeps_newest_first() {
        let mut queue = Vec::new();
        for id in 0..4 {
            push_toast(&mut queue, toast(id), 3);
        }
        let ids: Vec<u64> = queue.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
