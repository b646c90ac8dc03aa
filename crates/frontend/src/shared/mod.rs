pub mod api_utils;
pub mod config;
pub mod debounce;
pub mod form_validator;
pub mod format;
pub mod keyboard;
pub mod notifications;
