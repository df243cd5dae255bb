/// Toast-style notifications: one at a time, closable, auto-dismissed.
use leptos::*;
use std::time::Duration;

use crate::notify::{Notifier, Severity};

// Delays matching the CSS slide-in / fade-out transitions.
const SHOW_DELAY: Duration = Duration::from_millis(100);
const FADE_OUT: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub shown: bool,
}

#[derive(Clone, Copy)]
pub struct Notifications {
    current: RwSignal<Option<Notice>>,
    next_id: StoredValue<u64>,
    timeout: Duration,
}

impl Notifications {
    pub fn new(timeout_ms: u64) -> Self {
        Notifications {
            current: create_rw_signal(None),
            next_id: store_value(0),
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    pub fn current(&self) -> Signal<Option<Notice>> {
        self.current.into()
    }

    /// Starts the fade-out of notice `id`, then removes it.
    pub fn dismiss(&self, id: u64) {
        let current = self.current;
        current.update(|slot| {
            if let Some(notice) = slot.as_mut().filter(|n| n.id == id) {
                notice.shown = false;
            }
        });
        set_timeout(
            move || {
                current.update(|slot| {
                    if slot.as_ref().is_some_and(|n| n.id == id) {
                        *slot = None;
                    }
                })
            },
            FADE_OUT,
        );
    }
}

impl Notifier for Notifications {
    fn notify(&self, message: &str, severity: Severity) {
        let id = self.next_id.get_value() + 1;
        self.next_id.set_value(id);
        // Replaces whatever is currently displayed.
        self.current.set(Some(Notice {
            id,
            message: message.to_string(),
            severity,
            shown: false,
        }));

        let current = self.current;
        set_timeout(
            move || {
                current.update(|slot| {
                    if let Some(notice) = slot.as_mut().filter(|n| n.id == id) {
                        notice.shown = true;
                    }
                })
            },
            SHOW_DELAY,
        );
        let this = *self;
        set_timeout(move || this.dismiss(id), self.timeout);
    }
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifications = expect_context::<Notifications>();

    move || {
        notifications.current().get().map(|notice| {
            let id = notice.id;
            view! {
                <div
                    class=format!("notification {}", notice.severity.css_class())
                    class:show=notice.shown
                    role="status"
                >
                    {notice.message}
                    <button class="notification-close" on:click=move |_| notifications.dismiss(id)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
