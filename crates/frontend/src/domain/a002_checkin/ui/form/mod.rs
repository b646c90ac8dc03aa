//! Guest Check-in Form UI Module
//!
//! MVVM split:
//! - model.rs: API functions (available rooms)
//! - view_model.rs: form state, validation, totals, reset and submit commands
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::CheckinForm;
pub use view_model::CheckinFormViewModel;
