//! Transient flash notifications.
//!
//! [`NotificationQueue`] holds the stacked messages; [`NotificationService`]
//! puts it in a signal, schedules auto-expiry and is shared through context.
//! [`NotificationHost`] renders the stack once at the app root.

use crate::shared::config::AppConfig;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn code(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }

    pub fn css_class(&self) -> String {
        format!("flash flash-{}", self.code())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub fading: bool,
    pub dismissed: bool,
}

/// Ordered stack of notifications, oldest first
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            message: message.into(),
            kind,
            fading: false,
            dismissed: false,
        });
        id
    }

    fn find_mut(&mut self, id: u64) -> Option<&mut Notification> {
        self.items.iter_mut().find(|n| n.id == id)
    }

    /// Hide right away (close button)
    pub fn dismiss(&mut self, id: u64) -> bool {
        self.find_mut(id).map(|n| n.dismissed = true).is_some()
    }

    pub fn is_fading(&self, id: u64) -> bool {
        self.items.iter().any(|n| n.id == id && n.fading)
    }

    pub fn begin_fade(&mut self, id: u64) -> bool {
        self.find_mut(id).map(|n| n.fading = true).is_some()
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn visible(&self) -> Vec<Notification> {
        self.items.iter().filter(|n| !n.dismissed).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
    timeout_ms: u32,
    fade_ms: u32,
}

impl NotificationService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::new()),
            timeout_ms: config.notification_timeout_ms,
            fade_ms: config.notification_fade_ms,
        }
    }

    /// Show a message; it fades out and is removed on its own
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        let Some(id) = self.queue.try_update(|q| q.push(message, kind)) else {
            return;
        };

        let queue = self.queue;
        let timeout_ms = self.timeout_ms;
        let fade_ms = self.fade_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            queue.try_update(|q| q.begin_fade(id));
            TimeoutFuture::new(fade_ms).await;
            queue.try_update(|q| q.remove(id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Info);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    pub fn visible(&self) -> Vec<Notification> {
        self.queue.with(|q| q.visible())
    }

    /// Tracked fade flag of one notification
    pub fn is_fading(&self, id: u64) -> bool {
        self.queue.with(|q| q.is_fading(id))
    }
}

/// Inline style of a notification; the opacity change animates in place
pub fn fade_style(fading: bool) -> &'static str {
    if fading {
        "opacity: 0; transition: opacity 0.3s ease;"
    } else {
        "opacity: 1; transition: opacity 0.3s ease;"
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Stack of flash messages, rendered once at the app root
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="flash-messages">
            <For
                each=move || service.visible()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div
                            class=n.kind.css_class()
                            style=move || fade_style(service.is_fading(id))
                            role="status"
                        >
                            {n.message
                                .lines()
                                .map(|line| view! { <span class="flash-line">{line.to_string()}</span> })
                                .collect_view()}
                            <button class="flash-close" on:click=move |_| service.dismiss(id)>
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
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order_and_ids() {
        let mut q = NotificationQueue::new();
        let a = q.push("first", NotificationKind::Info);
        let b = q.push("second", NotificationKind::Error);
        assert!(b > a);
        let visible = q.visible();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].message, "first");
        assert_eq!(visible[1].kind, NotificationKind::Error);
    }

    #[test]
    fn test_dismiss_hides_only_target() {
        let mut q = NotificationQueue::new();
        let a = q.push("a", NotificationKind::Info);
        let b = q.push("b", NotificationKind::Info);
        assert!(q.dismiss(a));
        let visible = q.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, b);
        // still tracked until its timer removes it
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn test_fade_then_remove() {
        let mut q = NotificationQueue::new();
        let a = q.push("a", NotificationKind::Success);
        let b = q.push("b", NotificationKind::Success);
        assert!(!q.is_fading(a));
        assert!(q.begin_fade(a));
        assert!(q.is_fading(a));
        assert!(!q.is_fading(b));
        assert!(q.visible()[0].fading);
        assert!(!q.visible()[1].fading);
        assert!(q.remove(a));
        assert!(!q.remove(a));
        assert_eq!(q.visible()[0].id, b);
    }

    #[test]
    fn test_unknown_id() {
        let mut q = NotificationQueue::new();
        assert!(!q.dismiss(7));
        assert!(!q.begin_fade(7));
        assert!(q.is_empty());
    }

    #[test]
    fn test_fade_style_only_changes_opacity() {
        assert!(fade_style(true).starts_with("opacity: 0;"));
        assert!(fade_style(false).starts_with("opacity: 1;"));
        assert!(fade_style(true).ends_with("transition: opacity 0.3s ease;"));
        assert!(fade_style(false).ends_with("transition: opacity 0.3s ease;"));
    }

    #[test]
    fn test_css_class() {
        assert_eq!(NotificationKind::Error.css_class(), "flash flash-error");
        assert_eq!(NotificationKind::default().code(), "info");
    }
}
