use contracts::domain::a001_product::StorageOrigin;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a notification stays on screen
const NOTIFICATION_TIMEOUT_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Mobile navigation drawer
    pub drawer_open: RwSignal<bool>,
    /// `None` until `/api/config` has answered
    pub storage_origin: RwSignal<Option<StorageOrigin>>,
    pub notifications: RwSignal<Vec<Notification>>,
    next_notification_id: StoredValue<u64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            drawer_open: RwSignal::new(false),
            storage_origin: RwSignal::new(None),
            notifications: RwSignal::new(vec![]),
            next_notification_id: StoredValue::new(0),
        }
    }

    pub fn toggle_drawer(&self) {
        self.drawer_open.update(|open| *open = !*open);
    }

    pub fn close_drawer(&self) {
        self.drawer_open.set(false);
    }

    pub fn notify_success(&self, title: &str, message: &str) {
        self.notify(NotificationKind::Success, title, message);
    }

    pub fn notify_error(&self, title: &str, message: &str) {
        log::warn!("{}: {}", title, message);
        self.notify(NotificationKind::Error, title, message);
    }

    fn notify(&self, kind: NotificationKind, title: &str, message: &str) {
        let id = self.next_notification_id.get_value();
        self.next_notification_id.set_value(id + 1);

        self.notifications.update(|list| {
            list.push(Notification {
                id,
                kind,
                title: title.to_string(),
                message: message.to_string(),
            })
        });

        let this = *self;
        Timeout::new(NOTIFICATION_TIMEOUT_MS, move || this.dismiss(id)).forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.notifications.update(|list| list.retain(|n| n.id != id));
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
