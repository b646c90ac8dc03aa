use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use crate::shared::keyboard::GlobalShortcuts;
use crate::shared::notifications::{NotificationHost, NotificationService};
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Notifications read their timings from the config
    provide_context(NotificationService::new(&config));
    provide_context(config);

    view! {
        <main class="main-content">
            <NotificationHost />
            <GlobalShortcuts />
            <AppRoutes />
        </main>
    }
}
