//! Booking Calendar UI Module
//!
//! MVVM split:
//! - model.rs: month arithmetic, URL/query handling, booking data island
//! - view_model.rs: selection, hover and keyboard commands
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use model::YearMonth;
pub use view::CalendarView;
pub use view_model::CalendarViewModel;
