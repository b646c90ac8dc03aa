//! Room Dashboard UI Module
//!
//! MVVM split:
//! - model.rs: API functions (room status)
//! - view_model.rs: state, commands, notification texts
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::Dashboard;
pub use view_model::DashboardViewModel;
