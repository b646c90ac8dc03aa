use crate::domain::a001_room::ui::dashboard::Dashboard;
use crate::domain::a002_checkin::ui::form::CheckinForm;
use crate::domain::a003_booking::ui::calendar::CalendarView;
use leptos::prelude::*;

/// Page selected by the URL path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Checkin,
    Calendar,
    /// Server-rendered page with no client behavior
    Unknown,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/dashboard" => Page::Dashboard,
            "/checkin" => Page::Checkin,
            p if p.starts_with("/calendar") => Page::Calendar,
            _ => Page::Unknown,
        }
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let path = current_path();
    let page = Page::from_path(&path);
    log::info!("Page {} -> {:?}", path, page);

    match page {
        Page::Dashboard => view! { <Dashboard /> }.into_any(),
        Page::Checkin => view! { <CheckinForm /> }.into_any(),
        Page::Calendar => view! { <CalendarView /> }.into_any(),
        Page::Unknown => view! { <></> }.into_any(),
    }
}
